//! In-memory [`SiteBackend`] for tests.
//!
//! Applies update payloads the way the real backend does (whole groups,
//! `None` means untouched) and hands out sequential ids. Failure injection
//! is one-shot per flag; `ignore_updates` simulates a server that
//! acknowledges a write but normalizes the values away, which is what the
//! refetch-wins behavior exists for.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use pagedeck_model::{Child, Component, ComponentType, MobileChild, Site, TextStyle};

use crate::remote::{ChildUpdate, ComponentUpdate, RemoteError, SiteBackend, UpdateRequest};

#[derive(Debug)]
struct FakeState {
    site: Site,
    next_id: i64,
    uploads: u64,
}

/// Test double holding one site in memory.
#[derive(Debug)]
pub struct FakeBackend {
    state: Mutex<FakeState>,
    fail_next_fetch: AtomicBool,
    fail_next_update: AtomicBool,
    fail_next_upload: AtomicBool,
    ignore_updates: AtomicBool,
}

impl FakeBackend {
    pub fn new(site: Site) -> Self {
        let next_id = site
            .components
            .iter()
            .flat_map(|c| {
                std::iter::once(c.id)
                    .chain(c.children.iter().map(|child| child.id))
                    .chain(c.mobile_children.iter().map(|child| child.id))
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            state: Mutex::new(FakeState {
                site,
                next_id,
                uploads: 0,
            }),
            fail_next_fetch: AtomicBool::new(false),
            fail_next_update: AtomicBool::new(false),
            fail_next_upload: AtomicBool::new(false),
            ignore_updates: AtomicBool::new(false),
        }
    }

    /// Current backend-side document, for assertions.
    pub fn site(&self) -> Site {
        self.state.lock().unwrap().site.clone()
    }

    pub fn fail_next_fetch(&self) {
        self.fail_next_fetch.store(true, Ordering::SeqCst);
    }

    pub fn fail_next_update(&self) {
        self.fail_next_update.store(true, Ordering::SeqCst);
    }

    pub fn fail_next_upload(&self) {
        self.fail_next_upload.store(true, Ordering::SeqCst);
    }

    /// Acknowledge updates without storing them.
    pub fn ignore_updates(&self, ignore: bool) {
        self.ignore_updates.store(ignore, Ordering::SeqCst);
    }

    fn take(flag: &AtomicBool) -> bool {
        flag.swap(false, Ordering::SeqCst)
    }

    fn apply_component_update(component: &mut Component, values: ComponentUpdate) {
        component.name = values.name;
        if let Some(v) = values.title {
            component.title = Some(v);
        }
        if let Some(v) = values.mobile_title {
            component.mobile_title = Some(v);
        }
        if let Some(v) = values.content {
            component.content = Some(v);
        }
        if let Some(v) = values.mobile_content {
            component.mobile_content = Some(v);
        }
        if let Some(v) = values.component_style {
            component.component_style = Some(v);
        }
        if let Some(v) = values.component_mobile_style {
            component.component_mobile_style = Some(v);
        }
        if let Some(v) = values.title_style {
            Self::merge_text_style(&mut component.title_style, v);
        }
        if let Some(v) = values.content_style {
            Self::merge_text_style(&mut component.content_style, v);
        }
        if let Some(v) = values.inquiry_style {
            component.inquiry_style = Some(v);
        }
        if let Some(v) = values.mobile_inquiry_style {
            component.mobile_inquiry_style = Some(v);
        }
    }

    /// Text style groups are shared between the desktop and mobile panels,
    /// so their columns update individually: `None` fields stay as stored.
    fn merge_text_style(slot: &mut Option<TextStyle>, incoming: TextStyle) {
        let style = slot.get_or_insert_with(Default::default);
        if let Some(v) = incoming.size {
            style.size = Some(v);
        }
        if let Some(v) = incoming.color {
            style.color = Some(v);
        }
        if let Some(v) = incoming.margin {
            style.margin = Some(v);
        }
        if let Some(v) = incoming.line_height {
            style.line_height = Some(v);
        }
        if let Some(v) = incoming.mobile_size {
            style.mobile_size = Some(v);
        }
        if let Some(v) = incoming.mobile_color {
            style.mobile_color = Some(v);
        }
        if let Some(v) = incoming.mobile_margin {
            style.mobile_margin = Some(v);
        }
        if let Some(v) = incoming.mobile_line_height {
            style.mobile_line_height = Some(v);
        }
    }

    fn apply_update(site: &mut Site, request: UpdateRequest) -> Result<(), RemoteError> {
        match request {
            UpdateRequest::Header { values, .. } => {
                site.header = Some(values);
            }
            UpdateRequest::Footer { values, .. } => {
                site.footer = Some(values);
            }
            UpdateRequest::MobileHeader { values, .. } => {
                site.mobile_header = Some(values);
            }
            UpdateRequest::MobileFooter { values, .. } => {
                site.mobile_footer = Some(values);
            }
            UpdateRequest::Component { id, values } => {
                let component = site
                    .component_mut(id)
                    .ok_or(RemoteError::EntityNotFound(id))?;
                Self::apply_component_update(component, values);
            }
            UpdateRequest::Child { id, values } => {
                let child = site.child_mut(id).ok_or(RemoteError::EntityNotFound(id))?;
                Self::apply_child_update(
                    &mut child.title,
                    &mut child.content,
                    &mut child.child_style,
                    values,
                );
            }
            UpdateRequest::MobileChild { id, values } => {
                let child = site
                    .mobile_child_mut(id)
                    .ok_or(RemoteError::EntityNotFound(id))?;
                Self::apply_child_update(
                    &mut child.title,
                    &mut child.content,
                    &mut child.mobile_child_style,
                    values,
                );
            }
        }
        Ok(())
    }

    fn apply_child_update(
        title: &mut Option<String>,
        content: &mut Option<String>,
        style: &mut Option<pagedeck_model::ChildStyle>,
        values: ChildUpdate,
    ) {
        if let Some(v) = values.title {
            *title = Some(v);
        }
        if let Some(v) = values.content {
            *content = Some(v);
        }
        if let Some(v) = values.style {
            *style = Some(v);
        }
    }
}

impl SiteBackend for FakeBackend {
    async fn fetch_site(&self, id: i64) -> Result<Site, RemoteError> {
        if Self::take(&self.fail_next_fetch) {
            return Err(RemoteError::Transport("injected fetch failure".to_string()));
        }
        let state = self.state.lock().unwrap();
        if state.site.id != id {
            return Err(RemoteError::SiteNotFound(id));
        }
        Ok(state.site.clone())
    }

    async fn update(&self, request: UpdateRequest) -> Result<bool, RemoteError> {
        if Self::take(&self.fail_next_update) {
            return Err(RemoteError::Transport("injected update failure".to_string()));
        }
        if self.ignore_updates.load(Ordering::SeqCst) {
            return Ok(true);
        }
        let mut state = self.state.lock().unwrap();
        Self::apply_update(&mut state.site, request)?;
        Ok(true)
    }

    async fn create_component(
        &self,
        site_id: i64,
        component_type: ComponentType,
    ) -> Result<bool, RemoteError> {
        let mut state = self.state.lock().unwrap();
        if state.site.id != site_id {
            return Err(RemoteError::SiteNotFound(site_id));
        }
        let id = state.next_id;
        state.next_id += 1;
        let component = Component::new(id, site_id, component_type, component_type.label());
        state.site.components.push(component);
        Ok(true)
    }

    async fn create_child(&self, component_id: i64) -> Result<bool, RemoteError> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let component = state
            .site
            .component_mut(component_id)
            .ok_or(RemoteError::EntityNotFound(component_id))?;
        component.children.push(Child::new(id, component_id));
        Ok(true)
    }

    async fn create_mobile_child(&self, component_id: i64) -> Result<bool, RemoteError> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let component = state
            .site
            .component_mut(component_id)
            .ok_or(RemoteError::EntityNotFound(component_id))?;
        component.mobile_children.push(MobileChild::new(id, component_id));
        Ok(true)
    }

    async fn delete_component(&self, id: i64) -> Result<bool, RemoteError> {
        let mut state = self.state.lock().unwrap();
        let component = state
            .site
            .component_mut(id)
            .ok_or(RemoteError::EntityNotFound(id))?;
        component.is_delete = true;
        Ok(true)
    }

    async fn delete_child(&self, id: i64) -> Result<bool, RemoteError> {
        let mut state = self.state.lock().unwrap();
        let child = state
            .site
            .child_mut(id)
            .ok_or(RemoteError::EntityNotFound(id))?;
        child.is_delete = true;
        Ok(true)
    }

    async fn delete_mobile_child(&self, id: i64) -> Result<bool, RemoteError> {
        let mut state = self.state.lock().unwrap();
        let child = state
            .site
            .mobile_child_mut(id)
            .ok_or(RemoteError::EntityNotFound(id))?;
        child.is_delete = true;
        Ok(true)
    }

    async fn upload_image(&self, bytes: Vec<u8>) -> Result<String, RemoteError> {
        if Self::take(&self.fail_next_upload) {
            return Err(RemoteError::UploadRejected("injected upload failure".to_string()));
        }
        if bytes.is_empty() {
            return Err(RemoteError::UploadRejected("empty image".to_string()));
        }
        let mut state = self.state.lock().unwrap();
        state.uploads += 1;
        Ok(format!("upload://{}", state.uploads))
    }
}
