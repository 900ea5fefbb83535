//! # Remote Boundary
//!
//! The backend is an opaque request/response surface: one fetch, one update
//! operation per entity type, create/delete by id, and image upload. The
//! GraphQL client that fulfills this contract in production lives outside
//! this crate; tests use [`crate::fake::FakeBackend`].
//!
//! Update payloads carry a panel's full current snapshot, not a diff. `None`
//! on an optional group means the panel does not edit that group, and the
//! backend leaves it alone.

use pagedeck_model::{ChildStyle, ComponentStyle, ComponentType, Footer, Header, InquiryStyle, MobileHeader, Site, TextStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemoteError {
    #[error("Site not found: {0}")]
    SiteNotFound(i64),

    #[error("Entity not found: {0}")]
    EntityNotFound(i64),

    #[error("Upload rejected: {0}")]
    UploadRejected(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Full-snapshot update for a component panel. Groups the panel does not
/// edit stay `None`.
///
/// `title_style` and `content_style` are shared between the desktop and
/// mobile panels: each panel sends only its own variant's fields and the
/// backend merges them column-wise, leaving `None` fields as stored. Every
/// other group belongs to exactly one panel and is replaced whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentUpdate {
    pub name: String,
    pub title: Option<String>,
    pub mobile_title: Option<String>,
    pub content: Option<String>,
    pub mobile_content: Option<String>,
    pub component_style: Option<ComponentStyle>,
    pub component_mobile_style: Option<ComponentStyle>,
    pub title_style: Option<TextStyle>,
    pub content_style: Option<TextStyle>,
    pub inquiry_style: Option<InquiryStyle>,
    pub mobile_inquiry_style: Option<InquiryStyle>,
}

/// Full-snapshot update for a child panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub style: Option<ChildStyle>,
}

/// One update operation per entity type, as the backend exposes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UpdateRequest {
    Header { site_id: i64, values: Header },
    Footer { site_id: i64, values: Footer },
    MobileHeader { site_id: i64, values: MobileHeader },
    MobileFooter { site_id: i64, values: Footer },
    Component { id: i64, values: ComponentUpdate },
    Child { id: i64, values: ChildUpdate },
    MobileChild { id: i64, values: ChildUpdate },
}

/// Remote data store for sites.
///
/// Every method is a full round trip; the editor holds no connection state
/// and awaits each call to completion. Implementations are expected to be
/// cheap to share by reference across panels.
pub trait SiteBackend {
    /// Fetch the full aggregate by id.
    fn fetch_site(&self, id: i64) -> impl std::future::Future<Output = Result<Site, RemoteError>> + Send;

    /// Apply a panel snapshot. Returns whether the backend accepted it.
    fn update(&self, request: UpdateRequest) -> impl std::future::Future<Output = Result<bool, RemoteError>> + Send;

    /// Create a component under a site; the backend assigns the id.
    fn create_component(
        &self,
        site_id: i64,
        component_type: ComponentType,
    ) -> impl std::future::Future<Output = Result<bool, RemoteError>> + Send;

    fn create_child(&self, component_id: i64) -> impl std::future::Future<Output = Result<bool, RemoteError>> + Send;

    fn create_mobile_child(&self, component_id: i64) -> impl std::future::Future<Output = Result<bool, RemoteError>> + Send;

    /// Soft-delete on the backend side; the editor refetches afterwards.
    fn delete_component(&self, id: i64) -> impl std::future::Future<Output = Result<bool, RemoteError>> + Send;

    fn delete_child(&self, id: i64) -> impl std::future::Future<Output = Result<bool, RemoteError>> + Send;

    fn delete_mobile_child(&self, id: i64) -> impl std::future::Future<Output = Result<bool, RemoteError>> + Send;

    /// Store image bytes, returning the opaque reference written into
    /// logo/background fields.
    fn upload_image(&self, bytes: Vec<u8>) -> impl std::future::Future<Output = Result<String, RemoteError>> + Send;
}
