//! View tree of the portfolio page.
//!
//! The tree is plain data; the host walks it once to build its DOM. Two leaf
//! kinds are mount points for effects rather than static markup:
//! [`ViewNode::StarfieldCanvas`] and [`ViewNode::WaveGlyph`].

use starfolio_shared::constants::OUTBOUND_REL;
use starfolio_shared::{Icon, Profile, Section, SectionContent, SiteConfig, SocialLink};

use crate::style::classes;

/// Icon size inside the project list.
const BULLET_SIZE: u32 = 18;
/// Icon size of section headings and social links.
const ICON_SIZE: u32 = 24;

/// An element with attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name.
    pub tag: &'static str,
    /// Class list.
    pub class: &'static str,
    /// Extra attributes, in order.
    pub attrs: Vec<(&'static str, String)>,
    /// Link whose click handler the host must install.
    pub link: Option<SocialLink>,
    /// Child nodes, in order.
    pub children: Vec<ViewNode>,
}

impl Element {
    /// Creates an element with a class list and no children.
    #[must_use]
    pub fn new(tag: &'static str, class: &'static str) -> Self {
        Self {
            tag,
            class,
            attrs: Vec::new(),
            link: None,
            children: Vec::new(),
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Adds a child.
    #[must_use]
    pub fn child(mut self, node: impl Into<ViewNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Adds children.
    #[must_use]
    pub fn children(mut self, nodes: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Returns the value of attribute `name`.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A node of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    /// Element.
    Element(Element),
    /// Text run.
    Text(String),
    /// Inline icon.
    Icon {
        /// Glyph.
        icon: Icon,
        /// Size in pixels.
        size: u32,
        /// Class list of the wrapper.
        class: &'static str,
    },
    /// Full-viewport canvas for the starfield.
    StarfieldCanvas,
    /// Inline span for the waving glyph.
    WaveGlyph,
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl ViewNode {
    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the element, if this is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns this node and all its descendants in document order.
    pub fn iter_dfs(&self) -> impl Iterator<Item = &ViewNode> + '_ {
        ViewDfsIterator { stack: vec![self] }
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.iter_dfs()
            .filter_map(|node| match node {
                Self::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Depth-first iterator over a view tree.
struct ViewDfsIterator<'a> {
    stack: Vec<&'a ViewNode>,
}

impl<'a> Iterator for ViewDfsIterator<'a> {
    type Item = &'a ViewNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Push children in reverse order so they're processed left-to-right
        if let ViewNode::Element(element) = node {
            self.stack.extend(element.children.iter().rev());
        }

        Some(node)
    }
}

/// The page, built from site content.
#[derive(Debug, Clone)]
pub struct PortfolioView<'a> {
    profile: &'a Profile,
    sections: &'a [Section],
    links: &'a [SocialLink],
}

impl<'a> PortfolioView<'a> {
    /// Creates the view over `config`.
    #[must_use]
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            profile: &config.profile,
            sections: &config.sections,
            links: &config.links,
        }
    }

    /// Builds the full tree.
    #[must_use]
    pub fn build(&self) -> ViewNode {
        let card = Element::new("div", classes::CARD)
            .child(self.greeting())
            .child(Element::new("p", classes::BIO).child(ViewNode::text(self.profile.bio.as_str())))
            .children(self.sections.iter().map(section))
            .child(self.links());

        Element::new("div", classes::PAGE)
            .child(ViewNode::StarfieldCanvas)
            .child(Element::new("div", classes::CONTENT).child(card))
            .into()
    }

    fn greeting(&self) -> Element {
        Element::new("h1", classes::GREETING)
            .child(ViewNode::text(format!("{} ", self.profile.greeting)))
            .child(ViewNode::WaveGlyph)
    }

    fn links(&self) -> Element {
        Element::new("div", classes::LINKS).children(self.links.iter().map(social_link))
    }
}

fn section(section: &Section) -> ViewNode {
    let heading = Element::new("h2", classes::SECTION_HEADING)
        .child(ViewNode::Icon {
            icon: section.icon,
            size: ICON_SIZE,
            class: classes::SECTION_ICON,
        })
        .child(Element::new("span", classes::SECTION_TITLE).child(ViewNode::text(section.title.as_str())));

    let body: ViewNode = match &section.content {
        SectionContent::Prose(text) => Element::new("p", classes::PROSE)
            .child(ViewNode::text(text.as_str()))
            .into(),
        SectionContent::Projects(projects) => Element::new("ul", classes::PROJECT_LIST)
            .children(projects.iter().map(|project| {
                ViewNode::from(Element::new("li", classes::PROJECT)
                    .child(ViewNode::Icon {
                        icon: Icon::ChevronRight,
                        size: BULLET_SIZE,
                        class: classes::PROJECT_BULLET,
                    })
                    .child(
                        Element::new("div", "")
                            .child(Element::new("h3", classes::PROJECT_NAME).child(ViewNode::text(project.name.as_str())))
                            .child(Element::new("p", classes::PROJECT_DESC).child(ViewNode::text(project.desc.as_str()))),
                    ))
            }))
            .into(),
    };

    Element::new("div", classes::SECTION)
        .child(heading)
        .child(body)
        .into()
}

fn social_link(link: &SocialLink) -> ViewNode {
    let mut anchor = Element::new("a", classes::LINK)
        .attr("href", link.href.as_str())
        .attr("target", link.target())
        .attr("rel", OUTBOUND_REL)
        .attr("aria-label", link.icon.label())
        .child(ViewNode::Icon {
            icon: link.icon,
            size: ICON_SIZE,
            class: "",
        });
    anchor.link = Some(link.clone());
    anchor.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dfs_is_document_order() {
        let tree: ViewNode = Element::new("div", "")
            .child(Element::new("p", "").child(ViewNode::text("a")))
            .child(ViewNode::text("b"))
            .into();

        assert_eq!(tree.text_content(), "ab");
        assert_eq!(tree.iter_dfs().count(), 4);
    }

    #[test]
    fn test_attr_lookup() {
        let element = Element::new("a", "").attr("href", "#");
        assert_eq!(element.get_attr("href"), Some("#"));
        assert_eq!(element.get_attr("rel"), None);
    }
}
