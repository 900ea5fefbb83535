//! # Document Store
//!
//! Single holder of the site document shared by every panel and the
//! preview renderer.
//!
//! Two snapshots live here:
//! - the **working** document, carrying optimistic local edits, read by the
//!   preview;
//! - the **canonical** document, the last snapshot confirmed by the remote
//!   store, the target of every reset.
//!
//! Propagation granularity is the whole document: panels re-derive their own
//! slice lazily instead of subscribing to field-level diffs. Concurrent
//! edits across panels are last-write-wins; the store tracks which panel is
//! dirty and warns when a second panel starts editing, since the surrounding
//! UI only keeps one panel expanded by convention.

use pagedeck_model::Site;
use tracing::{debug, info, warn};

use crate::commands::{CommandError, EditCommand};

/// Identifies which panel a local edit or reset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTarget {
    Header,
    Footer,
    MobileHeader,
    MobileFooter,
    /// Section or inquiry panel, desktop fields.
    Component(i64),
    /// Section or inquiry panel, mobile fields.
    MobileComponent(i64),
    Child(i64),
    MobileChild(i64),
}

impl PanelTarget {
    /// Component id this panel ultimately edits, if it targets one.
    pub fn component_id(&self) -> Option<i64> {
        match self {
            PanelTarget::Component(id) | PanelTarget::MobileComponent(id) => Some(*id),
            _ => None,
        }
    }
}

/// In-memory site document for one edit session.
#[derive(Debug)]
pub struct DocumentStore {
    working: Site,
    canonical: Site,
    /// Bumps on every applied edit, for cheap change detection.
    version: u64,
    dirty: Option<PanelTarget>,
}

impl DocumentStore {
    /// Create a store from a freshly fetched site.
    pub fn new(site: Site) -> Self {
        Self {
            working: site.clone(),
            canonical: site,
            version: 0,
            dirty: None,
        }
    }

    /// The working document, as the preview renders it.
    pub fn site(&self) -> &Site {
        &self.working
    }

    /// The last server-confirmed document.
    pub fn canonical(&self) -> &Site {
        &self.canonical
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Panel currently holding unsubmitted optimistic edits, if any.
    pub fn dirty_panel(&self) -> Option<PanelTarget> {
        self.dirty
    }

    /// Apply one optimistic edit on behalf of a panel.
    ///
    /// Whole-document granularity: the working document is the only copy
    /// mutated, and the preview picks the change up on its next read. A
    /// second panel editing while another is dirty is allowed
    /// (last-write-wins) but logged, because it can lose the first panel's
    /// unsubmitted edits on the next refetch.
    pub fn apply_local_edit(
        &mut self,
        panel: PanelTarget,
        command: &EditCommand,
    ) -> Result<(), CommandError> {
        if let Some(dirty) = self.dirty {
            if dirty != panel {
                warn!(?dirty, ?panel, "second panel editing while another holds unsubmitted edits");
            }
        }

        command.apply(&mut self.working)?;
        self.version += 1;
        self.dirty = Some(panel);
        debug!(version = self.version, ?panel, "applied local edit");
        Ok(())
    }

    /// Replace both snapshots with a freshly fetched document.
    ///
    /// The server copy wins even where it differs from what was submitted;
    /// unsubmitted optimistic edits in any panel are discarded.
    pub fn reset_from_server(&mut self, site: Site) {
        self.working = site.clone();
        self.canonical = site;
        self.version += 1;
        self.dirty = None;
        info!(version = self.version, "document replaced from server");
    }

    /// Copy one panel's slice of the canonical document over the working
    /// document, undoing that panel's optimistic edits.
    pub fn restore(&mut self, panel: PanelTarget) {
        match panel {
            PanelTarget::Header => self.working.header = self.canonical.header.clone(),
            PanelTarget::Footer => self.working.footer = self.canonical.footer.clone(),
            PanelTarget::MobileHeader => {
                self.working.mobile_header = self.canonical.mobile_header.clone()
            }
            PanelTarget::MobileFooter => {
                self.working.mobile_footer = self.canonical.mobile_footer.clone()
            }
            PanelTarget::Component(id) | PanelTarget::MobileComponent(id) => {
                if let Some(canonical) = self.canonical.component(id) {
                    if let Some(working) = self.working.component_mut(id) {
                        *working = canonical.clone();
                    }
                }
            }
            PanelTarget::Child(id) => {
                if let Some(canonical) = self.canonical.child(id) {
                    if let Some(working) = self.working.child_mut(id) {
                        *working = canonical.clone();
                    }
                }
            }
            PanelTarget::MobileChild(id) => {
                if let Some(canonical) = self.canonical.mobile_child(id) {
                    if let Some(working) = self.working.mobile_child_mut(id) {
                        *working = canonical.clone();
                    }
                }
            }
        }

        self.version += 1;
        if self.dirty == Some(panel) {
            self.dirty = None;
        }
        debug!(?panel, "restored subtree from canonical document");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{ComponentField, HeaderField};
    use pagedeck_model::{Component, ComponentType};

    fn store() -> DocumentStore {
        let mut site = Site::new(1, "acme", "acme.example", "admin@acme.example");
        site.components
            .push(Component::new(1, 1, ComponentType::Section, "hero"));
        DocumentStore::new(site)
    }

    #[test]
    fn local_edit_touches_working_only() {
        let mut store = store();
        store
            .apply_local_edit(
                PanelTarget::Component(1),
                &EditCommand::UpdateComponent {
                    id: 1,
                    field: ComponentField::Name("renamed".to_string()),
                },
            )
            .unwrap();

        assert_eq!(store.site().component(1).unwrap().name, "renamed");
        assert_eq!(store.canonical().component(1).unwrap().name, "hero");
        assert_eq!(store.dirty_panel(), Some(PanelTarget::Component(1)));
    }

    #[test]
    fn restore_undoes_panel_edits() {
        let mut store = store();
        store
            .apply_local_edit(
                PanelTarget::Component(1),
                &EditCommand::UpdateComponent {
                    id: 1,
                    field: ComponentField::Name("renamed".to_string()),
                },
            )
            .unwrap();

        store.restore(PanelTarget::Component(1));

        assert_eq!(store.site(), store.canonical());
        assert_eq!(store.dirty_panel(), None);
    }

    #[test]
    fn restore_leaves_other_panels_edits_in_place() {
        let mut store = store();
        store
            .apply_local_edit(
                PanelTarget::Header,
                &EditCommand::UpdateHeader(HeaderField::Height(Some("80px".to_string()))),
            )
            .unwrap();
        store
            .apply_local_edit(
                PanelTarget::Component(1),
                &EditCommand::UpdateComponent {
                    id: 1,
                    field: ComponentField::Name("renamed".to_string()),
                },
            )
            .unwrap();

        store.restore(PanelTarget::Component(1));

        // The header edit survives; only the component slice was restored.
        assert_eq!(
            store.site().header.as_ref().unwrap().height.as_deref(),
            Some("80px")
        );
        assert_eq!(store.site().component(1).unwrap().name, "hero");
    }

    #[test]
    fn reset_from_server_replaces_everything() {
        let mut store = store();
        store
            .apply_local_edit(
                PanelTarget::Component(1),
                &EditCommand::UpdateComponent {
                    id: 1,
                    field: ComponentField::Name("renamed".to_string()),
                },
            )
            .unwrap();

        let mut fresh = store.canonical().clone();
        fresh.component_mut(1).unwrap().name = "server-name".to_string();
        store.reset_from_server(fresh.clone());

        assert_eq!(store.site(), &fresh);
        assert_eq!(store.canonical(), &fresh);
        assert_eq!(store.dirty_panel(), None);
    }
}
