//! # Panel Controller
//!
//! Drives one open side panel: field changes, image uploads, submit, reset,
//! delete. The controller owns the panel's form snapshot and its save state;
//! the shared [`DocumentStore`] and the backend are passed into each
//! operation by the caller.
//!
//! ## Save lifecycle
//!
//! `Idle -> Submitting -> Idle`, success or failure. There is no retry, no
//! cancellation, and no rollback of optimistic edits on failure: the working
//! document keeps the user's values and the panel stays dirty until the next
//! successful submit, reset, or refetch.

use tracing::{debug, info, warn};

use crate::errors::EditorError;
use crate::forms::PanelForm;
use crate::remote::{RemoteError, SiteBackend};
use crate::store::{DocumentStore, PanelTarget};

/// Where the panel is in its save lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveState {
    #[default]
    Idle,
    /// An update round trip is in flight; further submits are rejected.
    Submitting,
}

/// One open side panel bound to a slice of the working document.
#[derive(Debug)]
pub struct Panel<F: PanelForm> {
    form: F,
    state: SaveState,
}

impl<F: PanelForm> Panel<F> {
    /// Open a panel over the working document.
    pub fn open(store: &DocumentStore, target: PanelTarget) -> Result<Self, EditorError> {
        let form = F::init(store.site(), target)?;
        debug!(?target, "panel opened");
        Ok(Self {
            form,
            state: SaveState::Idle,
        })
    }

    /// Current form snapshot, as the inputs render it.
    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn save_state(&self) -> SaveState {
        self.state
    }

    pub fn target(&self) -> PanelTarget {
        self.form.target()
    }

    /// Apply one field change: the snapshot first, then the working
    /// document. A field variant this panel does not own is rejected before
    /// either is touched, so snapshot and preview cannot drift apart.
    pub fn change(&mut self, store: &mut DocumentStore, field: F::Field) -> Result<(), EditorError> {
        let command = self.form.command(field.clone());
        self.form.set(&field)?;
        store.apply_local_edit(self.form.target(), &command)?;
        Ok(())
    }

    /// Upload image bytes and write the returned reference into this
    /// panel's image field.
    pub async fn upload<B: SiteBackend>(
        &mut self,
        store: &mut DocumentStore,
        backend: &B,
        bytes: Vec<u8>,
    ) -> Result<(), EditorError> {
        let reference = backend.upload_image(bytes).await?;
        info!(target = ?self.form.target(), %reference, "image uploaded");

        let field = self
            .form
            .upload_field(reference)
            .ok_or(EditorError::Unsupported)?;
        self.change(store, field)
    }

    /// Submit the full snapshot, then refetch and adopt the server copy.
    ///
    /// The refetched document wins even where it differs from what was
    /// submitted. On failure the optimistic edits stay in the working
    /// document and the panel returns to idle.
    pub async fn submit<B: SiteBackend>(
        &mut self,
        store: &mut DocumentStore,
        backend: &B,
    ) -> Result<(), EditorError> {
        if self.state == SaveState::Submitting {
            return Err(EditorError::Validation("submit already in flight".to_string()));
        }
        self.form.validate()?;

        let target = self.form.target();
        let site_id = store.site().id;
        self.state = SaveState::Submitting;

        let result = Self::push_and_refetch(store, backend, self.form.update_request(site_id)).await;
        self.state = SaveState::Idle;

        match result {
            Ok(()) => {
                self.form = F::init(store.site(), target)?;
                info!(?target, "panel submitted");
                Ok(())
            }
            Err(err) => {
                warn!(?target, error = %err, "panel submit failed");
                Err(err)
            }
        }
    }

    async fn push_and_refetch<B: SiteBackend>(
        store: &mut DocumentStore,
        backend: &B,
        request: crate::remote::UpdateRequest,
    ) -> Result<(), EditorError> {
        let site_id = store.site().id;
        let accepted = backend.update(request).await?;
        if !accepted {
            return Err(RemoteError::Transport("update not acknowledged".to_string()).into());
        }

        let fresh = backend.fetch_site(site_id).await?;
        store.reset_from_server(fresh);
        Ok(())
    }

    /// Discard this panel's optimistic edits and rebuild the snapshot from
    /// the last server-confirmed document.
    pub fn reset(&mut self, store: &mut DocumentStore) -> Result<(), EditorError> {
        let target = self.form.target();
        store.restore(target);
        self.form = F::init(store.site(), target)?;
        debug!(?target, "panel reset to canonical values");
        Ok(())
    }

    /// Soft-delete this panel's entity on the backend, then refetch.
    ///
    /// Only component and child panels can be deleted; chrome panels return
    /// [`EditorError::Unsupported`]. The panel is unusable afterwards.
    pub async fn delete<B: SiteBackend>(
        &mut self,
        store: &mut DocumentStore,
        backend: &B,
    ) -> Result<(), EditorError> {
        let target = self.form.target();
        let accepted = match target {
            PanelTarget::Component(id) | PanelTarget::MobileComponent(id) => {
                backend.delete_component(id).await?
            }
            PanelTarget::Child(id) => backend.delete_child(id).await?,
            PanelTarget::MobileChild(id) => backend.delete_mobile_child(id).await?,
            _ => return Err(EditorError::Unsupported),
        };
        if !accepted {
            return Err(RemoteError::Transport("delete not acknowledged".to_string()).into());
        }

        let fresh = backend.fetch_site(store.site().id).await?;
        store.reset_from_server(fresh);
        info!(?target, "panel entity deleted");
        Ok(())
    }
}
