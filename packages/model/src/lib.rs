//! # Pagedeck Model
//!
//! The `Site` aggregate edited by the pagedeck engine, plus every owned
//! sub-entity: page chrome (header/footer and mobile variants), components
//! (sections and the inquiry block), their children, and the per-field style
//! value objects.
//!
//! This crate is pure data. One `Site` is the single owned aggregate of an
//! edit session; all descendants are reached by traversal from the root and
//! are never shared between sites. Style sub-objects are optional: an absent
//! group means "no value persisted yet, apply defaults at form-init time".

pub mod chrome;
pub mod component;
pub mod site;
pub mod style;

pub use chrome::{Footer, Header, MobileHeader};
pub use component::{Child, Component, ComponentType, MobileChild};
pub use site::Site;
pub use style::{
    BackgroundType, ChildStyle, ComponentStyle, InquiryStyle, TextStyle,
};
