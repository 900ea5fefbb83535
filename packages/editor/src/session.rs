//! Session-level operations: loading a site and creating entities.
//!
//! Creation is backend-first: the backend assigns ids and defaults, so the
//! editor creates remotely and refetches rather than inventing a local
//! placeholder.

use pagedeck_model::ComponentType;
use tracing::info;

use crate::errors::EditorError;
use crate::remote::{RemoteError, SiteBackend};
use crate::store::DocumentStore;

/// Fetch a site and start an edit session over it.
pub async fn load_site<B: SiteBackend>(backend: &B, id: i64) -> Result<DocumentStore, EditorError> {
    let site = backend.fetch_site(id).await?;
    info!(site_id = id, "edit session loaded");
    Ok(DocumentStore::new(site))
}

/// Create a component on the backend and adopt the refetched document.
pub async fn create_component<B: SiteBackend>(
    store: &mut DocumentStore,
    backend: &B,
    component_type: ComponentType,
) -> Result<(), EditorError> {
    let site_id = store.site().id;
    let accepted = backend.create_component(site_id, component_type).await?;
    if !accepted {
        return Err(RemoteError::Transport("create not acknowledged".to_string()).into());
    }

    let fresh = backend.fetch_site(site_id).await?;
    store.reset_from_server(fresh);
    info!(site_id, kind = component_type.label(), "component created");
    Ok(())
}

/// Create a desktop child under a component and adopt the refetched document.
pub async fn create_child<B: SiteBackend>(
    store: &mut DocumentStore,
    backend: &B,
    component_id: i64,
) -> Result<(), EditorError> {
    let accepted = backend.create_child(component_id).await?;
    if !accepted {
        return Err(RemoteError::Transport("create not acknowledged".to_string()).into());
    }

    let fresh = backend.fetch_site(store.site().id).await?;
    store.reset_from_server(fresh);
    info!(component_id, "child created");
    Ok(())
}

/// Create a mobile child under a component and adopt the refetched document.
pub async fn create_mobile_child<B: SiteBackend>(
    store: &mut DocumentStore,
    backend: &B,
    component_id: i64,
) -> Result<(), EditorError> {
    let accepted = backend.create_mobile_child(component_id).await?;
    if !accepted {
        return Err(RemoteError::Transport("create not acknowledged".to_string()).into());
    }

    let fresh = backend.fetch_site(store.site().id).await?;
    store.reset_from_server(fresh);
    info!(component_id, "mobile child created");
    Ok(())
}
