//! The `Site` aggregate.

use serde::{Deserialize, Serialize};

use crate::chrome::{Footer, Header, MobileHeader};
use crate::component::{Child, Component, ComponentType, MobileChild};

/// A registered site and everything the editor can touch on it.
///
/// Loaded once per edit session by id and replaced wholesale on every
/// refetch; never partially deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: i64,
    pub name: String,
    pub domain: String,
    pub email: String,
    pub header: Option<Header>,
    pub footer: Option<Footer>,
    pub mobile_header: Option<MobileHeader>,
    pub mobile_footer: Option<Footer>,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Site {
    pub fn new(id: i64, name: impl Into<String>, domain: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            domain: domain.into(),
            email: email.into(),
            header: None,
            footer: None,
            mobile_header: None,
            mobile_footer: None,
            components: Vec::new(),
        }
    }

    pub fn component(&self, id: i64) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn component_mut(&mut self, id: i64) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    /// Components still shown by the editor: not soft-deleted, sections
    /// first, the inquiry block last.
    pub fn visible_components(&self) -> Vec<&Component> {
        let mut visible: Vec<&Component> = self
            .components
            .iter()
            .filter(|c| !c.is_delete && c.component_type == ComponentType::Section)
            .collect();

        if let Some(inquiry) = self
            .components
            .iter()
            .find(|c| !c.is_delete && c.component_type == ComponentType::Inquiry)
        {
            visible.push(inquiry);
        }

        visible
    }

    pub fn child(&self, id: i64) -> Option<&Child> {
        self.components
            .iter()
            .flat_map(|c| c.children.iter())
            .find(|child| child.id == id)
    }

    pub fn child_mut(&mut self, id: i64) -> Option<&mut Child> {
        self.components
            .iter_mut()
            .flat_map(|c| c.children.iter_mut())
            .find(|child| child.id == id)
    }

    pub fn mobile_child(&self, id: i64) -> Option<&MobileChild> {
        self.components
            .iter()
            .flat_map(|c| c.mobile_children.iter())
            .find(|child| child.id == id)
    }

    pub fn mobile_child_mut(&mut self, id: i64) -> Option<&mut MobileChild> {
        self.components
            .iter_mut()
            .flat_map(|c| c.mobile_children.iter_mut())
            .find(|child| child.id == id)
    }

    /// Parent component of a desktop child, by back-reference lookup.
    pub fn component_of_child(&self, child_id: i64) -> Option<&Component> {
        self.components
            .iter()
            .find(|c| c.children.iter().any(|child| child.id == child_id))
    }

    pub fn component_of_mobile_child(&self, child_id: i64) -> Option<&Component> {
        self.components
            .iter()
            .find(|c| c.mobile_children.iter().any(|child| child.id == child_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_with_components() -> Site {
        let mut site = Site::new(1, "acme", "acme.example", "admin@acme.example");
        site.components.push(Component::new(3, 1, ComponentType::Inquiry, "contact"));
        site.components.push(Component::new(1, 1, ComponentType::Section, "hero"));
        site.components.push(Component {
            is_delete: true,
            ..Component::new(2, 1, ComponentType::Section, "gone")
        });
        site
    }

    #[test]
    fn visible_components_orders_inquiry_last() {
        let site = site_with_components();
        let ids: Vec<i64> = site.visible_components().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn child_lookup_traverses_components() {
        let mut site = site_with_components();
        site.component_mut(1).unwrap().children.push(Child::new(42, 1));

        assert_eq!(site.child(42).unwrap().component_id, 1);
        assert_eq!(site.component_of_child(42).unwrap().id, 1);
        assert!(site.child(43).is_none());
    }
}
