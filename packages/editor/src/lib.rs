//! # Pagedeck Editor
//!
//! Client-side editing core for form-driven landing pages. A session loads
//! one [`Site`](pagedeck_model::Site) aggregate into a [`DocumentStore`],
//! panels open typed form snapshots over slices of it, and every field
//! change flows through an [`EditCommand`] so the preview and the form stay
//! in step.
//!
//! ## Architecture
//!
//! ```text
//! [ Panel<F: PanelForm> ] --change--> [ EditCommand ] --apply--> [ DocumentStore ]
//!          |                                                          |
//!          +--submit--> [ SiteBackend::update ] --refetch--> reset_from_server
//! ```
//!
//! - [`commands`]: typed field updates and their application rules
//! - [`store`]: working/canonical document pair, optimistic edits, resets
//! - [`forms`]: per-panel snapshots with the editor's default values
//! - [`panel`]: the change/submit/reset/delete lifecycle of an open panel
//! - [`session`]: loading a site, creating components and children
//! - [`remote`]: the backend contract; [`fake`] implements it for tests

pub mod commands;
pub mod errors;
pub mod fake;
pub mod forms;
pub mod panel;
pub mod remote;
pub mod session;
pub mod store;

pub use commands::{
    BoxStyleField, ChildField, ChildStyleField, CommandError, ComponentField, EditCommand,
    FooterField, HeaderField, InquiryStyleField, MobileHeaderField, TextStyleField,
};
pub use errors::EditorError;
pub use forms::{
    ChildForm, FooterForm, HeaderForm, InquiryForm, MobileHeaderForm, MobileInquiryForm,
    MobileSectionForm, PanelForm, SectionForm,
};
pub use panel::{Panel, SaveState};
pub use remote::{ChildUpdate, ComponentUpdate, RemoteError, SiteBackend, UpdateRequest};
pub use session::{create_child, create_component, create_mobile_child, load_site};
pub use store::{DocumentStore, PanelTarget};
