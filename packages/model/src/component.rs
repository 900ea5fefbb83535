//! Components and their children.
//!
//! A component is one section of the page (a generic content section or the
//! inquiry block). Children are the grid items inside a section. Both are
//! soft-deleted: the backend flags `is_delete` instead of removing rows, and
//! the editor filters flagged entities out of its view.

use serde::{Deserialize, Serialize};

use crate::style::{ChildStyle, ComponentStyle, InquiryStyle, TextStyle};

/// Kind of page section a component renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Section,
    Inquiry,
}

impl ComponentType {
    /// Display label used by panel headers.
    pub fn label(&self) -> &'static str {
        match self {
            ComponentType::Section => "section",
            ComponentType::Inquiry => "inquiry",
        }
    }
}

/// One page section, with desktop and mobile content variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: i64,
    pub site_id: i64,
    pub component_type: ComponentType,
    pub name: String,
    pub title: Option<String>,
    pub mobile_title: Option<String>,
    pub content: Option<String>,
    pub mobile_content: Option<String>,
    #[serde(default)]
    pub is_delete: bool,
    pub component_style: Option<ComponentStyle>,
    pub component_mobile_style: Option<ComponentStyle>,
    pub title_style: Option<TextStyle>,
    pub content_style: Option<TextStyle>,
    pub inquiry_style: Option<InquiryStyle>,
    pub mobile_inquiry_style: Option<InquiryStyle>,
    #[serde(default)]
    pub children: Vec<Child>,
    #[serde(default)]
    pub mobile_children: Vec<MobileChild>,
}

impl Component {
    /// Bare component of the given type, as the backend would create it.
    pub fn new(id: i64, site_id: i64, component_type: ComponentType, name: impl Into<String>) -> Self {
        Self {
            id,
            site_id,
            component_type,
            name: name.into(),
            title: None,
            mobile_title: None,
            content: None,
            mobile_content: None,
            is_delete: false,
            component_style: None,
            component_mobile_style: None,
            title_style: None,
            content_style: None,
            inquiry_style: None,
            mobile_inquiry_style: None,
            children: Vec::new(),
            mobile_children: Vec::new(),
        }
    }

    /// Desktop children that have not been soft-deleted.
    pub fn visible_children(&self) -> impl Iterator<Item = &Child> {
        self.children.iter().filter(|c| !c.is_delete)
    }

    /// Mobile children that have not been soft-deleted.
    pub fn visible_mobile_children(&self) -> impl Iterator<Item = &MobileChild> {
        self.mobile_children.iter().filter(|c| !c.is_delete)
    }
}

/// Desktop grid item inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: i64,
    /// Back-reference for lookup; the parent component owns this child.
    pub component_id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub is_delete: bool,
    pub child_style: Option<ChildStyle>,
}

impl Child {
    pub fn new(id: i64, component_id: i64) -> Self {
        Self {
            id,
            component_id,
            title: None,
            content: None,
            is_delete: false,
            child_style: None,
        }
    }
}

/// Mobile grid item inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileChild {
    pub id: i64,
    pub component_id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub is_delete: bool,
    pub mobile_child_style: Option<ChildStyle>,
}

impl MobileChild {
    pub fn new(id: i64, component_id: i64) -> Self {
        Self {
            id,
            component_id,
            title: None,
            content: None,
            is_delete: false,
            mobile_child_style: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_children_filters_soft_deleted() {
        let mut component = Component::new(1, 1, ComponentType::Section, "hero");
        component.children.push(Child::new(10, 1));
        component.children.push(Child {
            is_delete: true,
            ..Child::new(11, 1)
        });

        let visible: Vec<i64> = component.visible_children().map(|c| c.id).collect();
        assert_eq!(visible, vec![10]);
    }
}
