//! # Edit Commands
//!
//! Typed field updates against the `Site` aggregate.
//!
//! ## Design Principles
//!
//! 1. **Closed field set**: every editable field has an enum variant, so a
//!    command can only name fields that exist
//! 2. **Validated targets**: commands addressing a missing component or
//!    child fail instead of writing into nothing
//! 3. **Shallow-merge semantics**: a style-field command touches exactly one
//!    field of one style group; all sibling fields and groups are preserved
//! 4. **Clearing is explicit**: `None` payloads mean "unset, apply defaults
//!    downstream", never "leave unchanged"
//!
//! ## Background type switch
//!
//! Changing a group's `background_type` clears the group's `background` in
//! the same application: a color string stops being meaningful the moment
//! the type becomes `Image`, and vice versa.

use pagedeck_model::{
    BackgroundType, ChildStyle, ComponentStyle, Footer, InquiryStyle, Site, TextStyle,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Component not found: {0}")]
    ComponentNotFound(i64),

    #[error("Child not found: {0}")]
    ChildNotFound(i64),

    #[error("Mobile child not found: {0}")]
    MobileChildNotFound(i64),
}

/// One field update on a header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HeaderField {
    Logo(Option<String>),
    LogoSize(Option<String>),
    Height(Option<String>),
    Padding(Option<String>),
    Gap(Option<String>),
    BackgroundColor(Option<String>),
    TextColor(Option<String>),
    TextSize(Option<String>),
}

/// One field update on a mobile header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MobileHeaderField {
    Logo(Option<String>),
    LogoSize(Option<String>),
    Button(Option<String>),
    ButtonSize(Option<String>),
    Height(Option<String>),
    Padding(Option<String>),
    MenuPadding(Option<String>),
    BackgroundColor(Option<String>),
    MenuBackgroundColor(Option<String>),
    TextColor(Option<String>),
    TextSize(Option<String>),
}

/// One field update on a footer (desktop and mobile share the shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FooterField {
    FooterType(Option<i32>),
    Logo(Option<String>),
    LogoSize(Option<String>),
    ContentTop(Option<String>),
    HelpCenter(Option<String>),
    Terms(Option<String>),
    ContentBottom(Option<String>),
    BackgroundColor(Option<String>),
    PaddingTop(Option<String>),
    PaddingBottom(Option<String>),
    TextSize(Option<String>),
    TextColor(Option<String>),
    LineHeight(Option<f64>),
}

/// One field update inside a component's outer box style group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoxStyleField {
    Height(Option<String>),
    Padding(Option<String>),
    Gap(Option<String>),
    Grid(Option<i32>),
    Background(Option<String>),
    BackgroundType(BackgroundType),
}

/// One field update inside a title/content text style group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TextStyleField {
    Size(Option<String>),
    Color(Option<String>),
    Margin(Option<String>),
    LineHeight(Option<f64>),
    MobileSize(Option<String>),
    MobileColor(Option<String>),
    MobileMargin(Option<String>),
    MobileLineHeight(Option<f64>),
}

/// One field update inside an inquiry style group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InquiryStyleField {
    Padding(Option<String>),
    Gap(Option<String>),
    TextSize(Option<String>),
    TextColor(Option<String>),
    LineHeight(Option<f64>),
    BackgroundColor(Option<String>),
    ButtonWidth(Option<String>),
    ButtonHeight(Option<String>),
    ButtonTextSize(Option<String>),
    ButtonTextColor(Option<String>),
    ButtonColor(Option<String>),
    ButtonRadius(Option<String>),
}

/// One field update inside a child style group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChildStyleField {
    Width(Option<String>),
    Height(Option<String>),
    Margin(Option<String>),
    Padding(Option<String>),
    Background(Option<String>),
    BackgroundType(BackgroundType),
    Border(Option<String>),
    BorderRadius(Option<String>),
    TitleSize(Option<String>),
    TitleColor(Option<String>),
    TitleLineHeight(Option<f64>),
    TitleMargin(Option<String>),
    ContentSize(Option<String>),
    ContentColor(Option<String>),
    ContentLineHeight(Option<f64>),
    ContentMargin(Option<String>),
}

/// One field update on a component, top-level or within a style group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComponentField {
    Name(String),
    Title(Option<String>),
    MobileTitle(Option<String>),
    Content(Option<String>),
    MobileContent(Option<String>),
    Style(BoxStyleField),
    MobileStyle(BoxStyleField),
    TitleStyle(TextStyleField),
    ContentStyle(TextStyleField),
    InquiryStyle(InquiryStyleField),
    MobileInquiryStyle(InquiryStyleField),
}

/// One field update on a child, top-level or within its style group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChildField {
    Title(Option<String>),
    Content(Option<String>),
    Style(ChildStyleField),
}

/// A single optimistic edit against the working document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditCommand {
    UpdateHeader(HeaderField),
    UpdateFooter(FooterField),
    UpdateMobileHeader(MobileHeaderField),
    UpdateMobileFooter(FooterField),
    UpdateComponent { id: i64, field: ComponentField },
    UpdateChild { id: i64, field: ChildField },
    UpdateMobileChild { id: i64, field: ChildField },
}

impl EditCommand {
    /// Apply this command to the aggregate.
    ///
    /// Chrome singletons and style groups are materialized with empty fields
    /// on first touch; components and children must exist.
    pub fn apply(&self, site: &mut Site) -> Result<(), CommandError> {
        match self {
            EditCommand::UpdateHeader(field) => {
                let header = site.header.get_or_insert_with(Default::default);
                match field {
                    HeaderField::Logo(v) => header.logo = v.clone(),
                    HeaderField::LogoSize(v) => header.logo_size = v.clone(),
                    HeaderField::Height(v) => header.height = v.clone(),
                    HeaderField::Padding(v) => header.padding = v.clone(),
                    HeaderField::Gap(v) => header.gap = v.clone(),
                    HeaderField::BackgroundColor(v) => header.background_color = v.clone(),
                    HeaderField::TextColor(v) => header.text_color = v.clone(),
                    HeaderField::TextSize(v) => header.text_size = v.clone(),
                }
                Ok(())
            }

            EditCommand::UpdateMobileHeader(field) => {
                let header = site.mobile_header.get_or_insert_with(Default::default);
                match field {
                    MobileHeaderField::Logo(v) => header.logo = v.clone(),
                    MobileHeaderField::LogoSize(v) => header.logo_size = v.clone(),
                    MobileHeaderField::Button(v) => header.button = v.clone(),
                    MobileHeaderField::ButtonSize(v) => header.button_size = v.clone(),
                    MobileHeaderField::Height(v) => header.height = v.clone(),
                    MobileHeaderField::Padding(v) => header.padding = v.clone(),
                    MobileHeaderField::MenuPadding(v) => header.menu_padding = v.clone(),
                    MobileHeaderField::BackgroundColor(v) => header.background_color = v.clone(),
                    MobileHeaderField::MenuBackgroundColor(v) => {
                        header.menu_background_color = v.clone()
                    }
                    MobileHeaderField::TextColor(v) => header.text_color = v.clone(),
                    MobileHeaderField::TextSize(v) => header.text_size = v.clone(),
                }
                Ok(())
            }

            EditCommand::UpdateFooter(field) => {
                apply_footer_field(site.footer.get_or_insert_with(Default::default), field);
                Ok(())
            }

            EditCommand::UpdateMobileFooter(field) => {
                apply_footer_field(site.mobile_footer.get_or_insert_with(Default::default), field);
                Ok(())
            }

            EditCommand::UpdateComponent { id, field } => {
                let component = site
                    .component_mut(*id)
                    .ok_or(CommandError::ComponentNotFound(*id))?;

                match field {
                    ComponentField::Name(v) => component.name = v.clone(),
                    ComponentField::Title(v) => component.title = v.clone(),
                    ComponentField::MobileTitle(v) => component.mobile_title = v.clone(),
                    ComponentField::Content(v) => component.content = v.clone(),
                    ComponentField::MobileContent(v) => component.mobile_content = v.clone(),
                    ComponentField::Style(f) => apply_box_style(
                        component.component_style.get_or_insert_with(Default::default),
                        f,
                    ),
                    ComponentField::MobileStyle(f) => apply_box_style(
                        component
                            .component_mobile_style
                            .get_or_insert_with(Default::default),
                        f,
                    ),
                    ComponentField::TitleStyle(f) => apply_text_style(
                        component.title_style.get_or_insert_with(Default::default),
                        f,
                    ),
                    ComponentField::ContentStyle(f) => apply_text_style(
                        component.content_style.get_or_insert_with(Default::default),
                        f,
                    ),
                    ComponentField::InquiryStyle(f) => apply_inquiry_style(
                        component.inquiry_style.get_or_insert_with(Default::default),
                        f,
                    ),
                    ComponentField::MobileInquiryStyle(f) => apply_inquiry_style(
                        component
                            .mobile_inquiry_style
                            .get_or_insert_with(Default::default),
                        f,
                    ),
                }
                Ok(())
            }

            EditCommand::UpdateChild { id, field } => {
                let child = site.child_mut(*id).ok_or(CommandError::ChildNotFound(*id))?;
                match field {
                    ChildField::Title(v) => child.title = v.clone(),
                    ChildField::Content(v) => child.content = v.clone(),
                    ChildField::Style(f) => apply_child_style(
                        child.child_style.get_or_insert_with(Default::default),
                        f,
                    ),
                }
                Ok(())
            }

            EditCommand::UpdateMobileChild { id, field } => {
                let child = site
                    .mobile_child_mut(*id)
                    .ok_or(CommandError::MobileChildNotFound(*id))?;
                match field {
                    ChildField::Title(v) => child.title = v.clone(),
                    ChildField::Content(v) => child.content = v.clone(),
                    ChildField::Style(f) => apply_child_style(
                        child.mobile_child_style.get_or_insert_with(Default::default),
                        f,
                    ),
                }
                Ok(())
            }
        }
    }

}

fn apply_footer_field(footer: &mut Footer, field: &FooterField) {
    match field {
        FooterField::FooterType(v) => footer.footer_type = *v,
        FooterField::Logo(v) => footer.logo = v.clone(),
        FooterField::LogoSize(v) => footer.logo_size = v.clone(),
        FooterField::ContentTop(v) => footer.content_top = v.clone(),
        FooterField::HelpCenter(v) => footer.help_center = v.clone(),
        FooterField::Terms(v) => footer.terms = v.clone(),
        FooterField::ContentBottom(v) => footer.content_bottom = v.clone(),
        FooterField::BackgroundColor(v) => footer.background_color = v.clone(),
        FooterField::PaddingTop(v) => footer.padding_top = v.clone(),
        FooterField::PaddingBottom(v) => footer.padding_bottom = v.clone(),
        FooterField::TextSize(v) => footer.text_size = v.clone(),
        FooterField::TextColor(v) => footer.text_color = v.clone(),
        FooterField::LineHeight(v) => footer.line_height = *v,
    }
}

fn apply_box_style(style: &mut ComponentStyle, field: &BoxStyleField) {
    match field {
        BoxStyleField::Height(v) => style.height = v.clone(),
        BoxStyleField::Padding(v) => style.padding = v.clone(),
        BoxStyleField::Gap(v) => style.gap = v.clone(),
        BoxStyleField::Grid(v) => style.grid = *v,
        BoxStyleField::Background(v) => style.background = v.clone(),
        BoxStyleField::BackgroundType(t) => {
            style.background_type = Some(*t);
            // The old value is meaningless under the new type.
            style.background = None;
        }
    }
}

fn apply_text_style(style: &mut TextStyle, field: &TextStyleField) {
    match field {
        TextStyleField::Size(v) => style.size = v.clone(),
        TextStyleField::Color(v) => style.color = v.clone(),
        TextStyleField::Margin(v) => style.margin = v.clone(),
        TextStyleField::LineHeight(v) => style.line_height = *v,
        TextStyleField::MobileSize(v) => style.mobile_size = v.clone(),
        TextStyleField::MobileColor(v) => style.mobile_color = v.clone(),
        TextStyleField::MobileMargin(v) => style.mobile_margin = v.clone(),
        TextStyleField::MobileLineHeight(v) => style.mobile_line_height = *v,
    }
}

fn apply_inquiry_style(style: &mut InquiryStyle, field: &InquiryStyleField) {
    match field {
        InquiryStyleField::Padding(v) => style.padding = v.clone(),
        InquiryStyleField::Gap(v) => style.gap = v.clone(),
        InquiryStyleField::TextSize(v) => style.text_size = v.clone(),
        InquiryStyleField::TextColor(v) => style.text_color = v.clone(),
        InquiryStyleField::LineHeight(v) => style.line_height = *v,
        InquiryStyleField::BackgroundColor(v) => style.background_color = v.clone(),
        InquiryStyleField::ButtonWidth(v) => style.button_width = v.clone(),
        InquiryStyleField::ButtonHeight(v) => style.button_height = v.clone(),
        InquiryStyleField::ButtonTextSize(v) => style.button_text_size = v.clone(),
        InquiryStyleField::ButtonTextColor(v) => style.button_text_color = v.clone(),
        InquiryStyleField::ButtonColor(v) => style.button_color = v.clone(),
        InquiryStyleField::ButtonRadius(v) => style.button_radius = v.clone(),
    }
}

fn apply_child_style(style: &mut ChildStyle, field: &ChildStyleField) {
    match field {
        ChildStyleField::Width(v) => style.width = v.clone(),
        ChildStyleField::Height(v) => style.height = v.clone(),
        ChildStyleField::Margin(v) => style.margin = v.clone(),
        ChildStyleField::Padding(v) => style.padding = v.clone(),
        ChildStyleField::Background(v) => style.background = v.clone(),
        ChildStyleField::BackgroundType(t) => {
            style.background_type = Some(*t);
            style.background = None;
        }
        ChildStyleField::Border(v) => style.border = v.clone(),
        ChildStyleField::BorderRadius(v) => style.border_radius = v.clone(),
        ChildStyleField::TitleSize(v) => style.title_size = v.clone(),
        ChildStyleField::TitleColor(v) => style.title_color = v.clone(),
        ChildStyleField::TitleLineHeight(v) => style.title_line_height = *v,
        ChildStyleField::TitleMargin(v) => style.title_margin = v.clone(),
        ChildStyleField::ContentSize(v) => style.content_size = v.clone(),
        ChildStyleField::ContentColor(v) => style.content_color = v.clone(),
        ChildStyleField::ContentLineHeight(v) => style.content_line_height = *v,
        ChildStyleField::ContentMargin(v) => style.content_margin = v.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedeck_model::{Component, ComponentType};

    fn site_with_section() -> Site {
        let mut site = Site::new(1, "acme", "acme.example", "admin@acme.example");
        let mut component = Component::new(1, 1, ComponentType::Section, "hero");
        component.component_style = Some(ComponentStyle {
            height: Some("".to_string()),
            background: Some("#fff".to_string()),
            background_type: Some(BackgroundType::Color),
            ..Default::default()
        });
        site.components.push(component);
        site
    }

    #[test]
    fn command_serialization_round_trips() {
        let command = EditCommand::UpdateComponent {
            id: 1,
            field: ComponentField::Style(BoxStyleField::Background(Some("#000".to_string()))),
        };

        let json = serde_json::to_string(&command).unwrap();
        let parsed: EditCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(command, parsed);
    }

    #[test]
    fn style_write_leaves_siblings_untouched() {
        let mut site = site_with_section();
        EditCommand::UpdateComponent {
            id: 1,
            field: ComponentField::Style(BoxStyleField::Background(Some("#000".to_string()))),
        }
        .apply(&mut site)
        .unwrap();

        let style = site.component(1).unwrap().component_style.as_ref().unwrap();
        assert_eq!(style.background.as_deref(), Some("#000"));
        assert_eq!(style.height.as_deref(), Some(""));
        assert_eq!(style.background_type, Some(BackgroundType::Color));
    }

    #[test]
    fn applying_the_same_command_twice_is_idempotent() {
        let mut site = site_with_section();
        let command = EditCommand::UpdateComponent {
            id: 1,
            field: ComponentField::Style(BoxStyleField::Background(Some("#000".to_string()))),
        };

        command.apply(&mut site).unwrap();
        let once = site.clone();
        command.apply(&mut site).unwrap();

        assert_eq!(site, once);
    }

    #[test]
    fn unknown_component_is_an_error() {
        let mut site = site_with_section();
        let before = site.clone();
        let command = EditCommand::UpdateComponent {
            id: 99,
            field: ComponentField::Name("ghost".to_string()),
        };

        assert_eq!(
            command.apply(&mut site),
            Err(CommandError::ComponentNotFound(99))
        );
        assert_eq!(site, before);
    }

    #[test]
    fn background_type_switch_clears_background() {
        let mut site = site_with_section();
        EditCommand::UpdateComponent {
            id: 1,
            field: ComponentField::Style(BoxStyleField::BackgroundType(BackgroundType::Image)),
        }
        .apply(&mut site)
        .unwrap();

        let style = site.component(1).unwrap().component_style.as_ref().unwrap();
        assert_eq!(style.background_type, Some(BackgroundType::Image));
        assert_eq!(style.background, None);
    }

    #[test]
    fn header_is_materialized_on_first_edit() {
        let mut site = site_with_section();
        assert!(site.header.is_none());

        EditCommand::UpdateHeader(HeaderField::BackgroundColor(Some("#222".to_string())))
            .apply(&mut site)
            .unwrap();

        let header = site.header.as_ref().unwrap();
        assert_eq!(header.background_color.as_deref(), Some("#222"));
        assert_eq!(header.logo, None);
    }
}
