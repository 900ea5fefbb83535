//! # Panel Forms
//!
//! One snapshot struct per side-panel form. A snapshot is the panel's local
//! editable copy of its entity: initialized from the working document with
//! fixed defaults filled in for absent values, updated on every field change,
//! and sent whole as the update payload on submit.
//!
//! The same field enums that drive [`EditCommand`] drive the snapshots, so a
//! user edit is expressed once and lands in both places: the snapshot (for
//! controlled-input redraw) and the shared document (for the live preview).

use pagedeck_model::{
    BackgroundType, ChildStyle, ComponentStyle, Footer, Header, InquiryStyle, MobileHeader, Site,
    TextStyle,
};
use serde::Serialize;

use crate::commands::{
    BoxStyleField, ChildField, ChildStyleField, ComponentField, EditCommand, FooterField,
    HeaderField, InquiryStyleField, MobileHeaderField, TextStyleField,
};
use crate::errors::EditorError;
use crate::remote::{ChildUpdate, ComponentUpdate, UpdateRequest};
use crate::store::PanelTarget;

fn text_or<'a>(value: &'a Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

/// Local editable copy of one panel's entity.
pub trait PanelForm: Clone + Serialize {
    /// Change event this panel understands; doubles as the command payload.
    type Field: Clone;

    /// Build the snapshot from the document, substituting defaults for
    /// absent values.
    fn init(site: &Site, target: PanelTarget) -> Result<Self, EditorError>
    where
        Self: Sized;

    fn target(&self) -> PanelTarget;

    /// Fold a field change into the snapshot.
    ///
    /// A field variant this panel does not own (a mobile field on a desktop
    /// panel, say) is rejected with [`EditorError::Unsupported`], leaving
    /// the snapshot untouched.
    fn set(&mut self, field: &Self::Field) -> Result<(), EditorError>;

    /// Command that applies the same change to the shared document.
    fn command(&self, field: Self::Field) -> EditCommand;

    /// Full-snapshot payload for the backend.
    fn update_request(&self, site_id: i64) -> UpdateRequest;

    /// Validation performed before any network call.
    fn validate(&self) -> Result<(), EditorError> {
        Ok(())
    }

    /// Field that receives an uploaded image reference, if this panel has
    /// an upload control.
    fn upload_field(&self, reference: String) -> Option<Self::Field> {
        let _ = reference;
        None
    }
}

// ---------------------------------------------------------------------------
// Header / mobile header
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderForm {
    pub logo: String,
    pub logo_size: String,
    pub height: String,
    pub padding: Option<String>,
    pub gap: String,
    pub background_color: String,
    pub text_color: String,
    pub text_size: String,
}

impl PanelForm for HeaderForm {
    type Field = HeaderField;

    fn init(site: &Site, target: PanelTarget) -> Result<Self, EditorError> {
        if target != PanelTarget::Header {
            return Err(EditorError::PanelUnavailable("header".to_string()));
        }
        let empty = Header::default();
        let header = site.header.as_ref().unwrap_or(&empty);
        Ok(Self {
            logo: text_or(&header.logo, ""),
            logo_size: text_or(&header.logo_size, "100%"),
            height: text_or(&header.height, ""),
            padding: header.padding.clone(),
            gap: text_or(&header.gap, ""),
            background_color: text_or(&header.background_color, "#fff"),
            text_color: text_or(&header.text_color, "#000"),
            text_size: text_or(&header.text_size, ""),
        })
    }

    fn target(&self) -> PanelTarget {
        PanelTarget::Header
    }

    fn set(&mut self, field: &HeaderField) -> Result<(), EditorError> {
        match field {
            HeaderField::Logo(v) => self.logo = v.clone().unwrap_or_default(),
            HeaderField::LogoSize(v) => self.logo_size = v.clone().unwrap_or_default(),
            HeaderField::Height(v) => self.height = v.clone().unwrap_or_default(),
            HeaderField::Padding(v) => self.padding = v.clone(),
            HeaderField::Gap(v) => self.gap = v.clone().unwrap_or_default(),
            HeaderField::BackgroundColor(v) => {
                self.background_color = v.clone().unwrap_or_default()
            }
            HeaderField::TextColor(v) => self.text_color = v.clone().unwrap_or_default(),
            HeaderField::TextSize(v) => self.text_size = v.clone().unwrap_or_default(),
        }
        Ok(())
    }

    fn command(&self, field: HeaderField) -> EditCommand {
        EditCommand::UpdateHeader(field)
    }

    fn update_request(&self, site_id: i64) -> UpdateRequest {
        UpdateRequest::Header {
            site_id,
            values: Header {
                logo: Some(self.logo.clone()),
                logo_size: Some(self.logo_size.clone()),
                height: Some(self.height.clone()),
                padding: self.padding.clone(),
                gap: Some(self.gap.clone()),
                background_color: Some(self.background_color.clone()),
                text_color: Some(self.text_color.clone()),
                text_size: Some(self.text_size.clone()),
            },
        }
    }

    fn upload_field(&self, reference: String) -> Option<HeaderField> {
        Some(HeaderField::Logo(Some(reference)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileHeaderForm {
    pub logo: String,
    pub logo_size: String,
    pub button: String,
    pub button_size: String,
    pub height: String,
    pub padding: String,
    pub menu_padding: String,
    pub background_color: String,
    pub menu_background_color: String,
    pub text_color: String,
    pub text_size: String,
}

impl PanelForm for MobileHeaderForm {
    type Field = MobileHeaderField;

    fn init(site: &Site, target: PanelTarget) -> Result<Self, EditorError> {
        if target != PanelTarget::MobileHeader {
            return Err(EditorError::PanelUnavailable("mobile header".to_string()));
        }
        let empty = MobileHeader::default();
        let header = site.mobile_header.as_ref().unwrap_or(&empty);
        Ok(Self {
            logo: text_or(&header.logo, ""),
            logo_size: text_or(&header.logo_size, "100%"),
            button: text_or(&header.button, ""),
            button_size: text_or(&header.button_size, "100%"),
            height: text_or(&header.height, ""),
            padding: text_or(&header.padding, ""),
            menu_padding: text_or(&header.menu_padding, ""),
            background_color: text_or(&header.background_color, "#fff"),
            menu_background_color: text_or(&header.menu_background_color, "#fff"),
            text_color: text_or(&header.text_color, "#000"),
            text_size: text_or(&header.text_size, ""),
        })
    }

    fn target(&self) -> PanelTarget {
        PanelTarget::MobileHeader
    }

    fn set(&mut self, field: &MobileHeaderField) -> Result<(), EditorError> {
        match field {
            MobileHeaderField::Logo(v) => self.logo = v.clone().unwrap_or_default(),
            MobileHeaderField::LogoSize(v) => self.logo_size = v.clone().unwrap_or_default(),
            MobileHeaderField::Button(v) => self.button = v.clone().unwrap_or_default(),
            MobileHeaderField::ButtonSize(v) => self.button_size = v.clone().unwrap_or_default(),
            MobileHeaderField::Height(v) => self.height = v.clone().unwrap_or_default(),
            MobileHeaderField::Padding(v) => self.padding = v.clone().unwrap_or_default(),
            MobileHeaderField::MenuPadding(v) => self.menu_padding = v.clone().unwrap_or_default(),
            MobileHeaderField::BackgroundColor(v) => {
                self.background_color = v.clone().unwrap_or_default()
            }
            MobileHeaderField::MenuBackgroundColor(v) => {
                self.menu_background_color = v.clone().unwrap_or_default()
            }
            MobileHeaderField::TextColor(v) => self.text_color = v.clone().unwrap_or_default(),
            MobileHeaderField::TextSize(v) => self.text_size = v.clone().unwrap_or_default(),
        }
        Ok(())
    }

    fn command(&self, field: MobileHeaderField) -> EditCommand {
        EditCommand::UpdateMobileHeader(field)
    }

    fn update_request(&self, site_id: i64) -> UpdateRequest {
        UpdateRequest::MobileHeader {
            site_id,
            values: MobileHeader {
                logo: Some(self.logo.clone()),
                logo_size: Some(self.logo_size.clone()),
                button: Some(self.button.clone()),
                button_size: Some(self.button_size.clone()),
                height: Some(self.height.clone()),
                padding: Some(self.padding.clone()),
                menu_padding: Some(self.menu_padding.clone()),
                background_color: Some(self.background_color.clone()),
                menu_background_color: Some(self.menu_background_color.clone()),
                text_color: Some(self.text_color.clone()),
                text_size: Some(self.text_size.clone()),
            },
        }
    }

    fn upload_field(&self, reference: String) -> Option<MobileHeaderField> {
        Some(MobileHeaderField::Logo(Some(reference)))
    }
}

// ---------------------------------------------------------------------------
// Footer (desktop and mobile share the shape)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterForm {
    #[serde(skip)]
    target: PanelTarget,
    pub footer_type: i32,
    pub logo: String,
    pub logo_size: String,
    pub content_top: String,
    pub help_center: String,
    pub terms: String,
    pub content_bottom: String,
    pub background_color: String,
    pub padding_top: String,
    pub padding_bottom: String,
    pub text_size: String,
    pub text_color: String,
    pub line_height: f64,
}

impl PanelForm for FooterForm {
    type Field = FooterField;

    fn init(site: &Site, target: PanelTarget) -> Result<Self, EditorError> {
        let footer = match target {
            PanelTarget::Footer => site.footer.as_ref(),
            PanelTarget::MobileFooter => site.mobile_footer.as_ref(),
            _ => return Err(EditorError::PanelUnavailable("footer".to_string())),
        };
        let empty = Footer::default();
        let footer = footer.unwrap_or(&empty);
        Ok(Self {
            target,
            footer_type: footer.footer_type.unwrap_or(1),
            logo: text_or(&footer.logo, ""),
            logo_size: text_or(&footer.logo_size, ""),
            content_top: text_or(&footer.content_top, ""),
            help_center: text_or(&footer.help_center, ""),
            terms: text_or(&footer.terms, ""),
            content_bottom: text_or(&footer.content_bottom, ""),
            background_color: text_or(&footer.background_color, ""),
            padding_top: text_or(&footer.padding_top, ""),
            padding_bottom: text_or(&footer.padding_bottom, ""),
            text_size: text_or(&footer.text_size, "10px"),
            text_color: text_or(&footer.text_color, "#000"),
            line_height: footer.line_height.unwrap_or(1.0),
        })
    }

    fn target(&self) -> PanelTarget {
        self.target
    }

    fn set(&mut self, field: &FooterField) -> Result<(), EditorError> {
        match field {
            FooterField::FooterType(v) => self.footer_type = v.unwrap_or(1),
            FooterField::Logo(v) => self.logo = v.clone().unwrap_or_default(),
            FooterField::LogoSize(v) => self.logo_size = v.clone().unwrap_or_default(),
            FooterField::ContentTop(v) => self.content_top = v.clone().unwrap_or_default(),
            FooterField::HelpCenter(v) => self.help_center = v.clone().unwrap_or_default(),
            FooterField::Terms(v) => self.terms = v.clone().unwrap_or_default(),
            FooterField::ContentBottom(v) => self.content_bottom = v.clone().unwrap_or_default(),
            FooterField::BackgroundColor(v) => {
                self.background_color = v.clone().unwrap_or_default()
            }
            FooterField::PaddingTop(v) => self.padding_top = v.clone().unwrap_or_default(),
            FooterField::PaddingBottom(v) => self.padding_bottom = v.clone().unwrap_or_default(),
            FooterField::TextSize(v) => self.text_size = v.clone().unwrap_or_default(),
            FooterField::TextColor(v) => self.text_color = v.clone().unwrap_or_default(),
            FooterField::LineHeight(v) => self.line_height = v.unwrap_or(1.0),
        }
        Ok(())
    }

    fn command(&self, field: FooterField) -> EditCommand {
        match self.target {
            PanelTarget::MobileFooter => EditCommand::UpdateMobileFooter(field),
            _ => EditCommand::UpdateFooter(field),
        }
    }

    fn update_request(&self, site_id: i64) -> UpdateRequest {
        let values = Footer {
            footer_type: Some(self.footer_type),
            logo: Some(self.logo.clone()),
            logo_size: Some(self.logo_size.clone()),
            content_top: Some(self.content_top.clone()),
            help_center: Some(self.help_center.clone()),
            terms: Some(self.terms.clone()),
            content_bottom: Some(self.content_bottom.clone()),
            background_color: Some(self.background_color.clone()),
            padding_top: Some(self.padding_top.clone()),
            padding_bottom: Some(self.padding_bottom.clone()),
            text_size: Some(self.text_size.clone()),
            text_color: Some(self.text_color.clone()),
            line_height: Some(self.line_height),
        };
        match self.target {
            PanelTarget::MobileFooter => UpdateRequest::MobileFooter { site_id, values },
            _ => UpdateRequest::Footer { site_id, values },
        }
    }

    fn upload_field(&self, reference: String) -> Option<FooterField> {
        Some(FooterField::Logo(Some(reference)))
    }
}

// ---------------------------------------------------------------------------
// Section / inquiry component panels
// ---------------------------------------------------------------------------

/// Concrete outer-box values for a section snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxStyleValues {
    pub height: String,
    pub padding: String,
    pub gap: String,
    pub grid: i32,
    pub background: Option<String>,
    pub background_type: BackgroundType,
}

impl BoxStyleValues {
    fn init(style: Option<&ComponentStyle>) -> Self {
        let empty = ComponentStyle::default();
        let style = style.unwrap_or(&empty);
        Self {
            height: text_or(&style.height, ""),
            padding: text_or(&style.padding, ""),
            gap: text_or(&style.gap, ""),
            grid: style.grid.unwrap_or(1),
            background: style.background.clone(),
            background_type: style.background_type.unwrap_or_default(),
        }
    }

    fn set(&mut self, field: &BoxStyleField) {
        match field {
            BoxStyleField::Height(v) => self.height = v.clone().unwrap_or_default(),
            BoxStyleField::Padding(v) => self.padding = v.clone().unwrap_or_default(),
            BoxStyleField::Gap(v) => self.gap = v.clone().unwrap_or_default(),
            BoxStyleField::Grid(v) => self.grid = v.unwrap_or(1),
            BoxStyleField::Background(v) => self.background = v.clone(),
            BoxStyleField::BackgroundType(t) => {
                self.background_type = *t;
                self.background = None;
            }
        }
    }

    fn to_entity(&self) -> ComponentStyle {
        ComponentStyle {
            height: Some(self.height.clone()),
            padding: Some(self.padding.clone()),
            gap: Some(self.gap.clone()),
            grid: Some(self.grid),
            background: self.background.clone(),
            background_type: Some(self.background_type),
        }
    }
}

/// Concrete title/content text values for a snapshot. One struct serves the
/// desktop and mobile forms; each reads and writes its own variant fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleValues {
    pub size: String,
    pub color: String,
    pub margin: String,
    pub line_height: f64,
}

impl TextStyleValues {
    fn init_desktop(style: Option<&TextStyle>) -> Self {
        let empty = TextStyle::default();
        let style = style.unwrap_or(&empty);
        Self {
            size: text_or(&style.size, "10px"),
            color: text_or(&style.color, "#000"),
            margin: text_or(&style.margin, ""),
            line_height: style.line_height.unwrap_or(1.0),
        }
    }

    fn init_mobile(style: Option<&TextStyle>) -> Self {
        let empty = TextStyle::default();
        let style = style.unwrap_or(&empty);
        Self {
            size: text_or(&style.mobile_size, "10px"),
            color: text_or(&style.mobile_color, "#000"),
            margin: text_or(&style.mobile_margin, ""),
            line_height: style.mobile_line_height.unwrap_or(1.0),
        }
    }

    fn set_desktop(&mut self, field: &TextStyleField) -> bool {
        match field {
            TextStyleField::Size(v) => self.size = v.clone().unwrap_or_default(),
            TextStyleField::Color(v) => self.color = v.clone().unwrap_or_default(),
            TextStyleField::Margin(v) => self.margin = v.clone().unwrap_or_default(),
            TextStyleField::LineHeight(v) => self.line_height = v.unwrap_or(1.0),
            _ => return false,
        }
        true
    }

    fn set_mobile(&mut self, field: &TextStyleField) -> bool {
        match field {
            TextStyleField::MobileSize(v) => self.size = v.clone().unwrap_or_default(),
            TextStyleField::MobileColor(v) => self.color = v.clone().unwrap_or_default(),
            TextStyleField::MobileMargin(v) => self.margin = v.clone().unwrap_or_default(),
            TextStyleField::MobileLineHeight(v) => self.line_height = v.unwrap_or(1.0),
            _ => return false,
        }
        true
    }

    fn to_desktop_entity(&self) -> TextStyle {
        TextStyle {
            size: Some(self.size.clone()),
            color: Some(self.color.clone()),
            margin: Some(self.margin.clone()),
            line_height: Some(self.line_height),
            ..Default::default()
        }
    }

    fn to_mobile_entity(&self) -> TextStyle {
        TextStyle {
            mobile_size: Some(self.size.clone()),
            mobile_color: Some(self.color.clone()),
            mobile_margin: Some(self.margin.clone()),
            mobile_line_height: Some(self.line_height),
            ..Default::default()
        }
    }
}

/// Concrete inquiry block values for a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryStyleValues {
    pub padding: String,
    pub gap: String,
    pub text_size: String,
    pub text_color: String,
    pub line_height: f64,
    pub background_color: String,
    pub button_width: String,
    pub button_height: String,
    pub button_text_size: String,
    pub button_text_color: String,
    pub button_color: String,
    pub button_radius: String,
}

impl InquiryStyleValues {
    fn init(style: Option<&InquiryStyle>) -> Self {
        let empty = InquiryStyle::default();
        let style = style.unwrap_or(&empty);
        Self {
            padding: text_or(&style.padding, ""),
            gap: text_or(&style.gap, "5px"),
            text_size: text_or(&style.text_size, "10px"),
            text_color: text_or(&style.text_color, "#000"),
            line_height: style.line_height.unwrap_or(1.0),
            background_color: text_or(&style.background_color, "#fff"),
            button_width: text_or(&style.button_width, "100%"),
            button_height: text_or(&style.button_height, "40px"),
            button_text_size: text_or(&style.button_text_size, "10px"),
            button_text_color: text_or(&style.button_text_color, "#000"),
            button_color: text_or(&style.button_color, "#fff"),
            button_radius: text_or(&style.button_radius, ""),
        }
    }

    fn set(&mut self, field: &InquiryStyleField) {
        match field {
            InquiryStyleField::Padding(v) => self.padding = v.clone().unwrap_or_default(),
            InquiryStyleField::Gap(v) => self.gap = v.clone().unwrap_or_default(),
            InquiryStyleField::TextSize(v) => self.text_size = v.clone().unwrap_or_default(),
            InquiryStyleField::TextColor(v) => self.text_color = v.clone().unwrap_or_default(),
            InquiryStyleField::LineHeight(v) => self.line_height = v.unwrap_or(1.0),
            InquiryStyleField::BackgroundColor(v) => {
                self.background_color = v.clone().unwrap_or_default()
            }
            InquiryStyleField::ButtonWidth(v) => self.button_width = v.clone().unwrap_or_default(),
            InquiryStyleField::ButtonHeight(v) => {
                self.button_height = v.clone().unwrap_or_default()
            }
            InquiryStyleField::ButtonTextSize(v) => {
                self.button_text_size = v.clone().unwrap_or_default()
            }
            InquiryStyleField::ButtonTextColor(v) => {
                self.button_text_color = v.clone().unwrap_or_default()
            }
            InquiryStyleField::ButtonColor(v) => self.button_color = v.clone().unwrap_or_default(),
            InquiryStyleField::ButtonRadius(v) => {
                self.button_radius = v.clone().unwrap_or_default()
            }
        }
    }

    fn to_entity(&self) -> InquiryStyle {
        InquiryStyle {
            padding: Some(self.padding.clone()),
            gap: Some(self.gap.clone()),
            text_size: Some(self.text_size.clone()),
            text_color: Some(self.text_color.clone()),
            line_height: Some(self.line_height),
            background_color: Some(self.background_color.clone()),
            button_width: Some(self.button_width.clone()),
            button_height: Some(self.button_height.clone()),
            button_text_size: Some(self.button_text_size.clone()),
            button_text_color: Some(self.button_text_color.clone()),
            button_color: Some(self.button_color.clone()),
            button_radius: Some(self.button_radius.clone()),
        }
    }
}

fn visible_component<'a>(site: &'a Site, id: i64) -> Result<&'a pagedeck_model::Component, EditorError> {
    site.component(id)
        .filter(|c| !c.is_delete)
        .ok_or_else(|| EditorError::PanelUnavailable(format!("component {id}")))
}

/// Desktop form of a section component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionForm {
    #[serde(skip)]
    id: i64,
    pub name: String,
    pub component_style: BoxStyleValues,
    pub title: String,
    pub title_style: TextStyleValues,
    pub content: String,
    pub content_style: TextStyleValues,
}

impl PanelForm for SectionForm {
    type Field = ComponentField;

    fn init(site: &Site, target: PanelTarget) -> Result<Self, EditorError> {
        let PanelTarget::Component(id) = target else {
            return Err(EditorError::PanelUnavailable("section".to_string()));
        };
        let component = visible_component(site, id)?;
        Ok(Self {
            id,
            name: component.name.clone(),
            component_style: BoxStyleValues::init(component.component_style.as_ref()),
            title: text_or(&component.title, ""),
            title_style: TextStyleValues::init_desktop(component.title_style.as_ref()),
            content: text_or(&component.content, ""),
            content_style: TextStyleValues::init_desktop(component.content_style.as_ref()),
        })
    }

    fn target(&self) -> PanelTarget {
        PanelTarget::Component(self.id)
    }

    fn set(&mut self, field: &ComponentField) -> Result<(), EditorError> {
        match field {
            ComponentField::Name(v) => self.name = v.clone(),
            ComponentField::Title(v) => self.title = v.clone().unwrap_or_default(),
            ComponentField::Content(v) => self.content = v.clone().unwrap_or_default(),
            ComponentField::Style(f) => self.component_style.set(f),
            ComponentField::TitleStyle(f) => {
                if !self.title_style.set_desktop(f) {
                    return Err(EditorError::Unsupported);
                }
            }
            ComponentField::ContentStyle(f) => {
                if !self.content_style.set_desktop(f) {
                    return Err(EditorError::Unsupported);
                }
            }
            _ => return Err(EditorError::Unsupported),
        }
        Ok(())
    }

    fn command(&self, field: ComponentField) -> EditCommand {
        EditCommand::UpdateComponent { id: self.id, field }
    }

    fn update_request(&self, _site_id: i64) -> UpdateRequest {
        UpdateRequest::Component {
            id: self.id,
            values: ComponentUpdate {
                name: self.name.clone(),
                title: Some(self.title.clone()),
                content: Some(self.content.clone()),
                component_style: Some(self.component_style.to_entity()),
                title_style: Some(self.title_style.to_desktop_entity()),
                content_style: Some(self.content_style.to_desktop_entity()),
                ..Default::default()
            },
        }
    }

    fn validate(&self) -> Result<(), EditorError> {
        if self.name.trim().is_empty() {
            return Err(EditorError::Validation("name is required".to_string()));
        }
        Ok(())
    }

    fn upload_field(&self, reference: String) -> Option<ComponentField> {
        Some(ComponentField::Style(BoxStyleField::Background(Some(reference))))
    }
}

/// Mobile form of a section component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileSectionForm {
    #[serde(skip)]
    id: i64,
    pub name: String,
    pub component_mobile_style: BoxStyleValues,
    pub mobile_title: String,
    pub title_style: TextStyleValues,
    pub mobile_content: String,
    pub content_style: TextStyleValues,
}

impl PanelForm for MobileSectionForm {
    type Field = ComponentField;

    fn init(site: &Site, target: PanelTarget) -> Result<Self, EditorError> {
        let PanelTarget::MobileComponent(id) = target else {
            return Err(EditorError::PanelUnavailable("mobile section".to_string()));
        };
        let component = visible_component(site, id)?;
        Ok(Self {
            id,
            name: component.name.clone(),
            component_mobile_style: BoxStyleValues::init(component.component_mobile_style.as_ref()),
            mobile_title: text_or(&component.mobile_title, ""),
            title_style: TextStyleValues::init_mobile(component.title_style.as_ref()),
            mobile_content: text_or(&component.mobile_content, ""),
            content_style: TextStyleValues::init_mobile(component.content_style.as_ref()),
        })
    }

    fn target(&self) -> PanelTarget {
        PanelTarget::MobileComponent(self.id)
    }

    fn set(&mut self, field: &ComponentField) -> Result<(), EditorError> {
        match field {
            ComponentField::Name(v) => self.name = v.clone(),
            ComponentField::MobileTitle(v) => self.mobile_title = v.clone().unwrap_or_default(),
            ComponentField::MobileContent(v) => {
                self.mobile_content = v.clone().unwrap_or_default()
            }
            ComponentField::MobileStyle(f) => self.component_mobile_style.set(f),
            ComponentField::TitleStyle(f) => {
                if !self.title_style.set_mobile(f) {
                    return Err(EditorError::Unsupported);
                }
            }
            ComponentField::ContentStyle(f) => {
                if !self.content_style.set_mobile(f) {
                    return Err(EditorError::Unsupported);
                }
            }
            _ => return Err(EditorError::Unsupported),
        }
        Ok(())
    }

    fn command(&self, field: ComponentField) -> EditCommand {
        EditCommand::UpdateComponent { id: self.id, field }
    }

    fn update_request(&self, _site_id: i64) -> UpdateRequest {
        UpdateRequest::Component {
            id: self.id,
            values: ComponentUpdate {
                name: self.name.clone(),
                mobile_title: Some(self.mobile_title.clone()),
                mobile_content: Some(self.mobile_content.clone()),
                component_mobile_style: Some(self.component_mobile_style.to_entity()),
                title_style: Some(self.title_style.to_mobile_entity()),
                content_style: Some(self.content_style.to_mobile_entity()),
                ..Default::default()
            },
        }
    }

    fn validate(&self) -> Result<(), EditorError> {
        if self.name.trim().is_empty() {
            return Err(EditorError::Validation("name is required".to_string()));
        }
        Ok(())
    }

    fn upload_field(&self, reference: String) -> Option<ComponentField> {
        Some(ComponentField::MobileStyle(BoxStyleField::Background(Some(reference))))
    }
}

/// Desktop form of the inquiry component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryForm {
    #[serde(skip)]
    id: i64,
    pub name: String,
    pub component_style: BoxStyleValues,
    pub title: String,
    pub title_style: TextStyleValues,
    pub content: String,
    pub content_style: TextStyleValues,
    pub inquiry_style: InquiryStyleValues,
}

impl PanelForm for InquiryForm {
    type Field = ComponentField;

    fn init(site: &Site, target: PanelTarget) -> Result<Self, EditorError> {
        let PanelTarget::Component(id) = target else {
            return Err(EditorError::PanelUnavailable("inquiry".to_string()));
        };
        let component = visible_component(site, id)?;
        let mut component_style = BoxStyleValues::init(component.component_style.as_ref());
        // The inquiry block defaults to a plain color surface.
        if component.component_style.as_ref().and_then(|s| s.background.as_ref()).is_none() {
            component_style.background = Some("#fff".to_string());
        }
        Ok(Self {
            id,
            name: component.name.clone(),
            component_style,
            title: text_or(&component.title, ""),
            title_style: TextStyleValues::init_desktop(component.title_style.as_ref()),
            content: text_or(&component.content, ""),
            content_style: TextStyleValues::init_desktop(component.content_style.as_ref()),
            inquiry_style: InquiryStyleValues::init(component.inquiry_style.as_ref()),
        })
    }

    fn target(&self) -> PanelTarget {
        PanelTarget::Component(self.id)
    }

    fn set(&mut self, field: &ComponentField) -> Result<(), EditorError> {
        match field {
            ComponentField::Name(v) => self.name = v.clone(),
            ComponentField::Title(v) => self.title = v.clone().unwrap_or_default(),
            ComponentField::Content(v) => self.content = v.clone().unwrap_or_default(),
            ComponentField::Style(f) => self.component_style.set(f),
            ComponentField::TitleStyle(f) => {
                if !self.title_style.set_desktop(f) {
                    return Err(EditorError::Unsupported);
                }
            }
            ComponentField::ContentStyle(f) => {
                if !self.content_style.set_desktop(f) {
                    return Err(EditorError::Unsupported);
                }
            }
            ComponentField::InquiryStyle(f) => self.inquiry_style.set(f),
            _ => return Err(EditorError::Unsupported),
        }
        Ok(())
    }

    fn command(&self, field: ComponentField) -> EditCommand {
        EditCommand::UpdateComponent { id: self.id, field }
    }

    fn update_request(&self, _site_id: i64) -> UpdateRequest {
        UpdateRequest::Component {
            id: self.id,
            values: ComponentUpdate {
                name: self.name.clone(),
                title: Some(self.title.clone()),
                content: Some(self.content.clone()),
                component_style: Some(self.component_style.to_entity()),
                title_style: Some(self.title_style.to_desktop_entity()),
                content_style: Some(self.content_style.to_desktop_entity()),
                inquiry_style: Some(self.inquiry_style.to_entity()),
                ..Default::default()
            },
        }
    }

    fn validate(&self) -> Result<(), EditorError> {
        if self.name.trim().is_empty() {
            return Err(EditorError::Validation("name is required".to_string()));
        }
        Ok(())
    }

    fn upload_field(&self, reference: String) -> Option<ComponentField> {
        Some(ComponentField::Style(BoxStyleField::Background(Some(reference))))
    }
}

/// Mobile form of the inquiry component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileInquiryForm {
    #[serde(skip)]
    id: i64,
    pub name: String,
    pub component_mobile_style: BoxStyleValues,
    pub mobile_title: String,
    pub title_style: TextStyleValues,
    pub mobile_content: String,
    pub content_style: TextStyleValues,
    pub mobile_inquiry_style: InquiryStyleValues,
}

impl PanelForm for MobileInquiryForm {
    type Field = ComponentField;

    fn init(site: &Site, target: PanelTarget) -> Result<Self, EditorError> {
        let PanelTarget::MobileComponent(id) = target else {
            return Err(EditorError::PanelUnavailable("mobile inquiry".to_string()));
        };
        let component = visible_component(site, id)?;
        Ok(Self {
            id,
            name: component.name.clone(),
            component_mobile_style: BoxStyleValues::init(component.component_mobile_style.as_ref()),
            mobile_title: text_or(&component.mobile_title, ""),
            title_style: TextStyleValues::init_mobile(component.title_style.as_ref()),
            mobile_content: text_or(&component.mobile_content, ""),
            content_style: TextStyleValues::init_mobile(component.content_style.as_ref()),
            mobile_inquiry_style: InquiryStyleValues::init(component.mobile_inquiry_style.as_ref()),
        })
    }

    fn target(&self) -> PanelTarget {
        PanelTarget::MobileComponent(self.id)
    }

    fn set(&mut self, field: &ComponentField) -> Result<(), EditorError> {
        match field {
            ComponentField::Name(v) => self.name = v.clone(),
            ComponentField::MobileTitle(v) => self.mobile_title = v.clone().unwrap_or_default(),
            ComponentField::MobileContent(v) => {
                self.mobile_content = v.clone().unwrap_or_default()
            }
            ComponentField::MobileStyle(f) => self.component_mobile_style.set(f),
            ComponentField::TitleStyle(f) => {
                if !self.title_style.set_mobile(f) {
                    return Err(EditorError::Unsupported);
                }
            }
            ComponentField::ContentStyle(f) => {
                if !self.content_style.set_mobile(f) {
                    return Err(EditorError::Unsupported);
                }
            }
            ComponentField::MobileInquiryStyle(f) => self.mobile_inquiry_style.set(f),
            _ => return Err(EditorError::Unsupported),
        }
        Ok(())
    }

    fn command(&self, field: ComponentField) -> EditCommand {
        EditCommand::UpdateComponent { id: self.id, field }
    }

    fn update_request(&self, _site_id: i64) -> UpdateRequest {
        UpdateRequest::Component {
            id: self.id,
            values: ComponentUpdate {
                name: self.name.clone(),
                mobile_title: Some(self.mobile_title.clone()),
                mobile_content: Some(self.mobile_content.clone()),
                component_mobile_style: Some(self.component_mobile_style.to_entity()),
                title_style: Some(self.title_style.to_mobile_entity()),
                content_style: Some(self.content_style.to_mobile_entity()),
                mobile_inquiry_style: Some(self.mobile_inquiry_style.to_entity()),
                ..Default::default()
            },
        }
    }

    fn validate(&self) -> Result<(), EditorError> {
        if self.name.trim().is_empty() {
            return Err(EditorError::Validation("name is required".to_string()));
        }
        Ok(())
    }

    fn upload_field(&self, reference: String) -> Option<ComponentField> {
        Some(ComponentField::MobileStyle(BoxStyleField::Background(Some(reference))))
    }
}

// ---------------------------------------------------------------------------
// Child panels
// ---------------------------------------------------------------------------

/// Concrete child block values for a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildStyleValues {
    pub width: String,
    pub height: String,
    pub margin: String,
    pub padding: String,
    pub background: Option<String>,
    pub background_type: BackgroundType,
    pub border: String,
    pub border_radius: String,
    pub title_size: String,
    pub title_color: String,
    pub title_line_height: f64,
    pub title_margin: String,
    pub content_size: String,
    pub content_color: String,
    pub content_line_height: f64,
    pub content_margin: String,
}

impl ChildStyleValues {
    fn init(style: Option<&ChildStyle>, background_default: &str) -> Self {
        let empty = ChildStyle::default();
        let style = style.unwrap_or(&empty);
        Self {
            width: text_or(&style.width, "100px"),
            height: text_or(&style.height, "100px"),
            margin: text_or(&style.margin, ""),
            padding: text_or(&style.padding, ""),
            background: style
                .background
                .clone()
                .or_else(|| (!background_default.is_empty()).then(|| background_default.to_string())),
            background_type: style.background_type.unwrap_or_default(),
            border: text_or(&style.border, ""),
            border_radius: text_or(&style.border_radius, ""),
            title_size: text_or(&style.title_size, "10px"),
            title_color: text_or(&style.title_color, "#000"),
            title_line_height: style.title_line_height.unwrap_or(1.0),
            title_margin: text_or(&style.title_margin, ""),
            content_size: text_or(&style.content_size, "10px"),
            content_color: text_or(&style.content_color, "#000"),
            content_line_height: style.content_line_height.unwrap_or(1.0),
            content_margin: text_or(&style.content_margin, ""),
        }
    }

    fn set(&mut self, field: &ChildStyleField) {
        match field {
            ChildStyleField::Width(v) => self.width = v.clone().unwrap_or_default(),
            ChildStyleField::Height(v) => self.height = v.clone().unwrap_or_default(),
            ChildStyleField::Margin(v) => self.margin = v.clone().unwrap_or_default(),
            ChildStyleField::Padding(v) => self.padding = v.clone().unwrap_or_default(),
            ChildStyleField::Background(v) => self.background = v.clone(),
            ChildStyleField::BackgroundType(t) => {
                self.background_type = *t;
                self.background = None;
            }
            ChildStyleField::Border(v) => self.border = v.clone().unwrap_or_default(),
            ChildStyleField::BorderRadius(v) => self.border_radius = v.clone().unwrap_or_default(),
            ChildStyleField::TitleSize(v) => self.title_size = v.clone().unwrap_or_default(),
            ChildStyleField::TitleColor(v) => self.title_color = v.clone().unwrap_or_default(),
            ChildStyleField::TitleLineHeight(v) => self.title_line_height = v.unwrap_or(1.0),
            ChildStyleField::TitleMargin(v) => self.title_margin = v.clone().unwrap_or_default(),
            ChildStyleField::ContentSize(v) => self.content_size = v.clone().unwrap_or_default(),
            ChildStyleField::ContentColor(v) => self.content_color = v.clone().unwrap_or_default(),
            ChildStyleField::ContentLineHeight(v) => self.content_line_height = v.unwrap_or(1.0),
            ChildStyleField::ContentMargin(v) => self.content_margin = v.clone().unwrap_or_default(),
        }
    }

    fn to_entity(&self) -> ChildStyle {
        ChildStyle {
            width: Some(self.width.clone()),
            height: Some(self.height.clone()),
            margin: Some(self.margin.clone()),
            padding: Some(self.padding.clone()),
            background: self.background.clone(),
            background_type: Some(self.background_type),
            border: Some(self.border.clone()),
            border_radius: Some(self.border_radius.clone()),
            title_size: Some(self.title_size.clone()),
            title_color: Some(self.title_color.clone()),
            title_line_height: Some(self.title_line_height),
            title_margin: Some(self.title_margin.clone()),
            content_size: Some(self.content_size.clone()),
            content_color: Some(self.content_color.clone()),
            content_line_height: Some(self.content_line_height),
            content_margin: Some(self.content_margin.clone()),
        }
    }
}

/// Form of one grid child, desktop or mobile per its target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildForm {
    #[serde(skip)]
    target: PanelTarget,
    pub title: String,
    pub content: String,
    pub child_style: ChildStyleValues,
}

impl PanelForm for ChildForm {
    type Field = ChildField;

    fn init(site: &Site, target: PanelTarget) -> Result<Self, EditorError> {
        let (title, content, style, background_default) = match target {
            PanelTarget::Child(id) => {
                let child = site
                    .child(id)
                    .filter(|c| !c.is_delete)
                    .ok_or_else(|| EditorError::PanelUnavailable(format!("child {id}")))?;
                (&child.title, &child.content, child.child_style.as_ref(), "#fff")
            }
            PanelTarget::MobileChild(id) => {
                let child = site
                    .mobile_child(id)
                    .filter(|c| !c.is_delete)
                    .ok_or_else(|| EditorError::PanelUnavailable(format!("mobile child {id}")))?;
                (&child.title, &child.content, child.mobile_child_style.as_ref(), "")
            }
            _ => return Err(EditorError::PanelUnavailable("child".to_string())),
        };
        Ok(Self {
            target,
            title: text_or(title, ""),
            content: text_or(content, ""),
            child_style: ChildStyleValues::init(style, background_default),
        })
    }

    fn target(&self) -> PanelTarget {
        self.target
    }

    fn set(&mut self, field: &ChildField) -> Result<(), EditorError> {
        match field {
            ChildField::Title(v) => self.title = v.clone().unwrap_or_default(),
            ChildField::Content(v) => self.content = v.clone().unwrap_or_default(),
            ChildField::Style(f) => self.child_style.set(f),
        }
        Ok(())
    }

    fn command(&self, field: ChildField) -> EditCommand {
        match self.target {
            PanelTarget::MobileChild(id) => EditCommand::UpdateMobileChild { id, field },
            PanelTarget::Child(id) => EditCommand::UpdateChild { id, field },
            // init() guarantees a child target.
            _ => unreachable!("child form bound to non-child target"),
        }
    }

    fn update_request(&self, _site_id: i64) -> UpdateRequest {
        let values = ChildUpdate {
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
            style: Some(self.child_style.to_entity()),
        };
        match self.target {
            PanelTarget::MobileChild(id) => UpdateRequest::MobileChild { id, values },
            PanelTarget::Child(id) => UpdateRequest::Child { id, values },
            _ => unreachable!("child form bound to non-child target"),
        }
    }

    fn upload_field(&self, reference: String) -> Option<ChildField> {
        Some(ChildField::Style(ChildStyleField::Background(Some(reference))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedeck_model::{Child, Component, ComponentType};

    fn site() -> Site {
        let mut site = Site::new(1, "acme", "acme.example", "admin@acme.example");
        let mut section = Component::new(1, 1, ComponentType::Section, "hero");
        section.children.push(Child::new(10, 1));
        site.components.push(section);
        site
    }

    #[test]
    fn section_form_fills_defaults() {
        let form = SectionForm::init(&site(), PanelTarget::Component(1)).unwrap();

        assert_eq!(form.name, "hero");
        assert_eq!(form.component_style.grid, 1);
        assert_eq!(form.component_style.background_type, BackgroundType::Color);
        assert_eq!(form.title_style.size, "10px");
        assert_eq!(form.title_style.color, "#000");
        assert_eq!(form.title_style.line_height, 1.0);
    }

    #[test]
    fn child_form_fills_defaults() {
        let form = ChildForm::init(&site(), PanelTarget::Child(10)).unwrap();

        assert_eq!(form.child_style.width, "100px");
        assert_eq!(form.child_style.height, "100px");
        assert_eq!(form.child_style.background.as_deref(), Some("#fff"));
    }

    #[test]
    fn set_and_command_express_the_same_change() {
        let site = site();
        let mut form = SectionForm::init(&site, PanelTarget::Component(1)).unwrap();

        let field = ComponentField::Style(BoxStyleField::Height(Some("300px".to_string())));
        let command = form.command(field.clone());
        form.set(&field).unwrap();

        assert_eq!(form.component_style.height, "300px");
        assert_eq!(
            command,
            EditCommand::UpdateComponent {
                id: 1,
                field: ComponentField::Style(BoxStyleField::Height(Some("300px".to_string()))),
            }
        );
    }

    #[test]
    fn section_form_rejects_mobile_variant_fields() {
        let site = site();
        let mut form = SectionForm::init(&site, PanelTarget::Component(1)).unwrap();
        let before = form.clone();

        let style = ComponentField::MobileStyle(BoxStyleField::Height(Some("50px".to_string())));
        let text = ComponentField::TitleStyle(TextStyleField::MobileSize(Some("12px".to_string())));

        assert!(matches!(form.set(&style), Err(EditorError::Unsupported)));
        assert!(matches!(form.set(&text), Err(EditorError::Unsupported)));
        assert_eq!(form, before);
    }

    #[test]
    fn mobile_section_form_reads_mobile_variant_fields() {
        let mut site = site();
        site.component_mut(1).unwrap().title_style = Some(pagedeck_model::TextStyle {
            size: Some("20px".to_string()),
            mobile_size: Some("12px".to_string()),
            ..Default::default()
        });

        let desktop = SectionForm::init(&site, PanelTarget::Component(1)).unwrap();
        let mobile = MobileSectionForm::init(&site, PanelTarget::MobileComponent(1)).unwrap();

        assert_eq!(desktop.title_style.size, "20px");
        assert_eq!(mobile.title_style.size, "12px");
    }

    #[test]
    fn empty_name_fails_validation() {
        let site = site();
        let mut form = SectionForm::init(&site, PanelTarget::Component(1)).unwrap();
        form.set(&ComponentField::Name("  ".to_string())).unwrap();

        assert!(matches!(form.validate(), Err(EditorError::Validation(_))));
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let site = site();
        let form = ChildForm::init(&site, PanelTarget::Child(10)).unwrap();
        let json = serde_json::to_value(&form).unwrap();

        assert!(json.get("childStyle").is_some());
        assert!(json["childStyle"].get("titleLineHeight").is_some());
        // The panel target is session state, not payload.
        assert!(json.get("target").is_none());
    }
}
