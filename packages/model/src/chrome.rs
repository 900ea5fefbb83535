//! Page chrome: header and footer singletons.
//!
//! One of each per site, pre-provisioned by the backend. The editor updates
//! them in place and never creates or deletes them.

use serde::{Deserialize, Serialize};

/// Desktop header: logo plus sizing/color bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Uploaded-image reference.
    pub logo: Option<String>,
    pub logo_size: Option<String>,
    pub height: Option<String>,
    pub padding: Option<String>,
    pub gap: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub text_size: Option<String>,
}

/// Mobile header: adds the menu button and menu surface styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileHeader {
    pub logo: Option<String>,
    pub logo_size: Option<String>,
    pub button: Option<String>,
    pub button_size: Option<String>,
    pub height: Option<String>,
    pub padding: Option<String>,
    pub menu_padding: Option<String>,
    pub background_color: Option<String>,
    pub menu_background_color: Option<String>,
    pub text_color: Option<String>,
    pub text_size: Option<String>,
}

/// Footer: text blocks plus sizing/color bag. The desktop and mobile
/// footers share this shape and occupy separate slots on the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub footer_type: Option<i32>,
    pub logo: Option<String>,
    pub logo_size: Option<String>,
    pub content_top: Option<String>,
    pub help_center: Option<String>,
    pub terms: Option<String>,
    pub content_bottom: Option<String>,
    pub background_color: Option<String>,
    pub padding_top: Option<String>,
    pub padding_bottom: Option<String>,
    pub text_size: Option<String>,
    pub text_color: Option<String>,
    pub line_height: Option<f64>,
}
