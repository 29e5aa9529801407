//! # Portfolio View Integration Test
//!
//! Builds the page from the shipped content and checks its structure and
//! link behavior.

use std::cell::{Cell, RefCell};

use starfolio_shared::{Icon, LinkAction, SiteConfig, StarfolioResult};
use starfolio_ui::{activate_link, ClickEvent, LinkOutcome, Navigator, PortfolioView, ViewNode};

struct Click {
    prevented: Cell<u32>,
}

impl ClickEvent for Click {
    fn prevent_default(&mut self) {
        self.prevented.set(self.prevented.get() + 1);
    }
}

#[derive(Default)]
struct Recorder {
    opened: RefCell<Vec<String>>,
}

impl Navigator for Recorder {
    fn open(&self, url: &str, _target: &str) -> StarfolioResult<()> {
        self.opened.borrow_mut().push(url.to_owned());
        Ok(())
    }
}

fn page() -> (SiteConfig, ViewNode) {
    let config = SiteConfig::embedded().unwrap();
    let tree = PortfolioView::new(&config).build();
    (config, tree)
}

/// Test: exactly one canvas and one waving glyph, canvas first.
#[test]
fn test_effect_mount_points() {
    let (_, tree) = page();

    let canvases = tree.iter_dfs().filter(|n| matches!(n, ViewNode::StarfieldCanvas)).count();
    let glyphs = tree.iter_dfs().filter(|n| matches!(n, ViewNode::WaveGlyph)).count();
    assert_eq!(canvases, 1);
    assert_eq!(glyphs, 1);

    let root = tree.as_element().unwrap();
    assert_eq!(root.children[0], ViewNode::StarfieldCanvas);
}

/// Test: greeting, biography and section titles appear in declared order.
#[test]
fn test_text_in_document_order() {
    let (config, tree) = page();
    let text = tree.text_content();

    let mut cursor = text.find(config.profile.greeting.as_str()).unwrap();
    cursor = cursor.max(text.find(config.profile.bio.as_str()).unwrap());
    for section in &config.sections {
        let at = text.find(section.title.as_str()).unwrap();
        assert!(at > cursor, "section {:?} out of order", section.title);
        cursor = at;
    }
}

/// Test: project sections render one list item per project.
#[test]
fn test_projects_become_list_items() {
    let (config, tree) = page();
    let projects: usize = config
        .sections
        .iter()
        .filter_map(|s| match &s.content {
            starfolio_shared::SectionContent::Projects(p) => Some(p.len()),
            starfolio_shared::SectionContent::Prose(_) => None,
        })
        .sum();

    let items = tree
        .iter_dfs()
        .filter_map(ViewNode::as_element)
        .filter(|e| e.tag == "li")
        .count();
    assert_eq!(items, projects);

    let bullets = tree
        .iter_dfs()
        .filter(|n| matches!(n, ViewNode::Icon { icon: Icon::ChevronRight, size: 18, .. }))
        .count();
    assert_eq!(bullets, projects);
}

/// Test: four links, all isolated from the opened context.
#[test]
fn test_social_links_are_isolated() {
    let (_, tree) = page();
    let anchors: Vec<_> = tree
        .iter_dfs()
        .filter_map(ViewNode::as_element)
        .filter(|e| e.tag == "a")
        .collect();

    assert_eq!(anchors.len(), 4);
    for anchor in &anchors {
        assert_eq!(anchor.get_attr("target"), Some("_blank"));
        assert_eq!(anchor.get_attr("rel"), Some("noopener noreferrer"));
        assert!(anchor.link.is_some());
    }
}

/// Test: clicking the resume anchor opens /Resume.pdf exactly once.
#[test]
fn test_resume_anchor_click() {
    let (_, tree) = page();
    let resume = tree
        .iter_dfs()
        .filter_map(ViewNode::as_element)
        .filter_map(|e| e.link.as_ref())
        .find(|link| matches!(link.action, LinkAction::OpenDocument(_)))
        .unwrap();
    assert_eq!(resume.href, "#");

    let mut click = Click { prevented: Cell::new(0) };
    let navigator = Recorder::default();
    let outcome = activate_link(resume, &mut click, &navigator).unwrap();

    assert_eq!(outcome, LinkOutcome::OpenedDocument("/Resume.pdf".to_owned()));
    assert_eq!(click.prevented.get(), 1);
    assert_eq!(*navigator.opened.borrow(), vec!["/Resume.pdf".to_owned()]);
}
