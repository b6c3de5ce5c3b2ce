//! Menu Node
//!
//! One entry of the sidebar tree: a group, a collapsible section or a link.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Top-level titled section
    Group,
    /// Expandable section holding items
    Collapse,
    /// Navigable link
    Item,
    /// Any other type string; never rendered
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Open the link in a new tab
    #[serde(default)]
    pub target: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    fn new(id: &str, title: &str, kind: NodeType) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            url: None,
            icon: None,
            target: false,
            children: Vec::new(),
        }
    }

    pub fn group(id: &str, title: &str, children: Vec<MenuNode>) -> Self {
        Self {
            children,
            ..Self::new(id, title, NodeType::Group)
        }
    }

    pub fn collapse(id: &str, title: &str, icon: &str, children: Vec<MenuNode>) -> Self {
        Self {
            icon: Some(icon.to_string()),
            children,
            ..Self::new(id, title, NodeType::Collapse)
        }
    }

    pub fn item(id: &str, title: &str, url: &str, icon: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            icon: Some(icon.to_string()),
            ..Self::new(id, title, NodeType::Item)
        }
    }

    pub fn child(&self, id: &str) -> Option<&MenuNode> {
        self.children.iter().find(|c| c.id == id)
    }

    pub fn child_ids(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn is_renderable(&self) -> bool {
        self.kind != NodeType::Unknown
    }
}
