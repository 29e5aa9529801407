//! Social link activation.
//!
//! Outbound links need no code: the anchor's `target` and `rel` do the work.
//! The resume link cancels navigation and opens its document instead.

use starfolio_shared::constants::NEW_CONTEXT_TARGET;
use starfolio_shared::{LinkAction, SocialLink, StarfolioResult};

/// The click being handled.
pub trait ClickEvent {
    /// Cancels the host's default navigation.
    fn prevent_default(&mut self);
}

/// Opens new viewing contexts.
pub trait Navigator {
    /// Opens `url` in the context named `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host API call fails.
    fn open(&self, url: &str, target: &str) -> StarfolioResult<()>;
}

/// What a click ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Default navigation proceeds (`href`, `target`, `rel` on the anchor).
    FollowHref,
    /// Navigation was cancelled and this document was opened instead.
    OpenedDocument(String),
}

/// Handles a click on `link`.
///
/// # Errors
///
/// Propagates a [`Navigator::open`] failure. Default navigation is already
/// cancelled at that point.
pub fn activate_link(
    link: &SocialLink,
    event: &mut impl ClickEvent,
    navigator: &impl Navigator,
) -> StarfolioResult<LinkOutcome> {
    match &link.action {
        LinkAction::External => Ok(LinkOutcome::FollowHref),
        LinkAction::OpenDocument(path) => {
            event.prevent_default();
            navigator.open(path, NEW_CONTEXT_TARGET)?;
            tracing::info!(path = %path, "document opened");
            Ok(LinkOutcome::OpenedDocument(path.clone()))
        }
    }
}
