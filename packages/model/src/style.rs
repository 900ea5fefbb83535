//! Style value objects.
//!
//! Pure bags of CSS-like dimension/color fields. Every field is optional:
//! `None` means "unset, apply the form default", never "null with meaning".
//! The desktop and mobile variants of each group share one shape, so a
//! single struct covers both slots on the owning entity.

use serde::{Deserialize, Serialize};

/// How a `background` value should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackgroundType {
    Color,
    Image,
}

impl Default for BackgroundType {
    fn default() -> Self {
        BackgroundType::Color
    }
}

/// Outer box styling of a component (desktop or mobile slot).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStyle {
    pub height: Option<String>,
    pub padding: Option<String>,
    pub gap: Option<String>,
    pub grid: Option<i32>,
    /// Color string or an uploaded-image reference, per `background_type`.
    pub background: Option<String>,
    pub background_type: Option<BackgroundType>,
}

/// Title or content text styling, with mobile overrides alongside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub size: Option<String>,
    pub color: Option<String>,
    pub margin: Option<String>,
    pub line_height: Option<f64>,
    pub mobile_size: Option<String>,
    pub mobile_color: Option<String>,
    pub mobile_margin: Option<String>,
    pub mobile_line_height: Option<f64>,
}

/// Inquiry form block styling (desktop or mobile slot).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryStyle {
    pub padding: Option<String>,
    pub gap: Option<String>,
    pub text_size: Option<String>,
    pub text_color: Option<String>,
    pub line_height: Option<f64>,
    pub background_color: Option<String>,
    pub button_width: Option<String>,
    pub button_height: Option<String>,
    pub button_text_size: Option<String>,
    pub button_text_color: Option<String>,
    pub button_color: Option<String>,
    pub button_radius: Option<String>,
}

/// Free-form sizing/color/spacing of a child block (desktop or mobile slot).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildStyle {
    pub width: Option<String>,
    pub height: Option<String>,
    pub margin: Option<String>,
    pub padding: Option<String>,
    pub background: Option<String>,
    pub background_type: Option<BackgroundType>,
    pub border: Option<String>,
    pub border_radius: Option<String>,
    pub title_size: Option<String>,
    pub title_color: Option<String>,
    pub title_line_height: Option<f64>,
    pub title_margin: Option<String>,
    pub content_size: Option<String>,
    pub content_color: Option<String>,
    pub content_line_height: Option<f64>,
    pub content_margin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_type_wire_format() {
        let json = serde_json::to_string(&BackgroundType::Color).unwrap();
        assert_eq!(json, "\"COLOR\"");

        let parsed: BackgroundType = serde_json::from_str("\"IMAGE\"").unwrap();
        assert_eq!(parsed, BackgroundType::Image);
    }

    #[test]
    fn absent_fields_deserialize_as_none() {
        let style: ComponentStyle = serde_json::from_str("{}").unwrap();
        assert_eq!(style, ComponentStyle::default());
        assert!(style.background.is_none());
    }
}
