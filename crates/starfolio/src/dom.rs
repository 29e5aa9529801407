//! Materializes the view tree as DOM.

use starfolio_shared::constants::WAVE_GLYPH;
use starfolio_shared::{LinkAction, SocialLink, StarfolioResult};
use starfolio_ui::style::classes;
use starfolio_ui::{activate_link, icons, ClickEvent, Element, ViewNode};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlCanvasElement, HtmlElement, Node};

use crate::browser::{self, host_error, BrowserNavigator};
use crate::listener::EventListener;

/// A browser click as seen by [`activate_link`].
struct DomClick<'a>(&'a Event);

impl ClickEvent for DomClick<'_> {
    fn prevent_default(&mut self) {
        self.0.prevent_default();
    }
}

/// The page's DOM. Dropping it detaches the root and its click listeners.
pub struct Page {
    root: web_sys::Element,
    canvas: Option<HtmlCanvasElement>,
    wave_glyph: Option<HtmlElement>,
    _listeners: Vec<EventListener>,
}

impl Page {
    /// Builds `tree` under `body`.
    pub fn build(document: &Document, body: &HtmlElement, tree: &ViewNode) -> StarfolioResult<Self> {
        let mut builder = Builder {
            document,
            canvas: None,
            wave_glyph: None,
            listeners: Vec::new(),
        };
        let node = builder.node(tree)?;
        let root = node
            .dyn_into::<web_sys::Element>()
            .map_err(|_| host_error("view root is not an element".into()))?;
        body.append_child(&root).map_err(host_error)?;

        tracing::debug!(listeners = builder.listeners.len(), "page built");
        Ok(Self {
            root,
            canvas: builder.canvas,
            wave_glyph: builder.wave_glyph,
            _listeners: builder.listeners,
        })
    }

    /// The starfield mount point.
    pub fn canvas(&self) -> Option<HtmlCanvasElement> {
        self.canvas.clone()
    }

    /// The waving glyph mount point.
    pub fn wave_glyph(&self) -> Option<HtmlElement> {
        self.wave_glyph.clone()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.root.remove();
    }
}

struct Builder<'a> {
    document: &'a Document,
    canvas: Option<HtmlCanvasElement>,
    wave_glyph: Option<HtmlElement>,
    listeners: Vec<EventListener>,
}

impl Builder<'_> {
    fn node(&mut self, node: &ViewNode) -> StarfolioResult<Node> {
        match node {
            ViewNode::Element(element) => self.element(element),
            ViewNode::Text(text) => Ok(self.document.create_text_node(text).into()),
            ViewNode::Icon { icon, size, class } => {
                let span = self.create("span", class)?;
                span.set_inner_html(&icons::svg(*icon, *size));
                Ok(span.into())
            }
            ViewNode::StarfieldCanvas => {
                let canvas = self
                    .create("canvas", classes::STARFIELD)?
                    .dyn_into::<HtmlCanvasElement>()
                    .map_err(|_| host_error("canvas is not a canvas".into()))?;
                self.canvas = Some(canvas.clone());
                Ok(canvas.into())
            }
            ViewNode::WaveGlyph => {
                let span = self
                    .create("span", "")?
                    .dyn_into::<HtmlElement>()
                    .map_err(|_| host_error("span is not an HtmlElement".into()))?;
                span.set_attribute("style", classes::WAVE_STYLE).map_err(host_error)?;
                span.set_text_content(Some(WAVE_GLYPH));
                self.wave_glyph = Some(span.clone());
                Ok(span.into())
            }
        }
    }

    fn element(&mut self, element: &Element) -> StarfolioResult<Node> {
        let dom = self.create(element.tag, element.class)?;
        for (name, value) in &element.attrs {
            dom.set_attribute(name, value).map_err(host_error)?;
        }
        for child in &element.children {
            let child = self.node(child)?;
            dom.append_child(&child).map_err(host_error)?;
        }
        if let Some(link) = &element.link {
            self.install_click(&dom, link)?;
        }
        Ok(dom.into())
    }

    fn create(&self, tag: &str, class: &str) -> StarfolioResult<web_sys::Element> {
        let element = self.document.create_element(tag).map_err(host_error)?;
        if !class.is_empty() {
            element.set_class_name(class);
        }
        Ok(element)
    }

    /// Outbound links are handled by their attributes alone.
    fn install_click(&mut self, anchor: &web_sys::Element, link: &SocialLink) -> StarfolioResult<()> {
        if link.action == LinkAction::External {
            return Ok(());
        }
        let navigator = BrowserNavigator::new(browser::window()?);
        let link = link.clone();
        let listener = EventListener::new(anchor, "click", move |event: Event| {
            if let Err(err) = activate_link(&link, &mut DomClick(&event), &navigator) {
                tracing::warn!(%err, href = %link.href, "link activation failed");
            }
        })?;
        self.listeners.push(listener);
        Ok(())
    }
}
