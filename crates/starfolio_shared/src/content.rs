//! Static page content.
//!
//! Everything here is defined once at startup and never mutated.

use serde::{Deserialize, Serialize};

use crate::constants::{NEW_CONTEXT_TARGET, RESUME_PATH};

/// Glyph reference for section headings, list bullets and social links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Right-pointing chevron (project bullet).
    ChevronRight,
    /// Professional-network profile.
    Linkedin,
    /// Code-hosting profile.
    Github,
    /// Social-media profile.
    Twitter,
    /// Identity card (resume).
    IdCard,
    /// Person silhouette.
    User,
    /// Briefcase.
    Briefcase,
    /// Angle brackets.
    Code,
}

impl Icon {
    /// Human-readable label, used for `aria-label` on icon-only links.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ChevronRight => "More",
            Self::Linkedin => "LinkedIn",
            Self::Github => "GitHub",
            Self::Twitter => "Twitter",
            Self::IdCard => "Resume",
            Self::User => "About",
            Self::Briefcase => "Experience",
            Self::Code => "Projects",
        }
    }

    /// Stable kebab-case name, used as a CSS class suffix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ChevronRight => "chevron-right",
            Self::Linkedin => "linkedin",
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::IdCard => "id-card",
            Self::User => "user",
            Self::Briefcase => "briefcase",
            Self::Code => "code",
        }
    }
}

/// A project entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// One-line description.
    pub desc: String,
}

/// Body of a section: either prose or an ordered list of projects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    /// A single paragraph.
    Prose(String),
    /// Project cards, in declared order.
    Projects(Vec<Project>),
}

/// A titled block of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text.
    pub title: String,
    /// Heading icon.
    pub icon: Icon,
    /// Section body.
    pub content: SectionContent,
}

/// What happens when a social link is activated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkAction {
    /// Follow `href` in a new viewing context, no referrer or opener leak.
    #[default]
    External,
    /// Cancel navigation and open a local document in a new viewing context.
    OpenDocument(String),
}

/// An icon link in the footer row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Link target.
    pub href: String,
    /// Link glyph.
    pub icon: Icon,
    /// Click behavior.
    #[serde(default)]
    pub action: LinkAction,
}

impl SocialLink {
    /// Creates an outbound link.
    #[must_use]
    pub fn external(href: impl Into<String>, icon: Icon) -> Self {
        Self {
            href: href.into(),
            icon,
            action: LinkAction::External,
        }
    }

    /// Creates the resume link: `href="#"`, click opens [`RESUME_PATH`].
    #[must_use]
    pub fn resume() -> Self {
        Self {
            href: "#".to_owned(),
            icon: Icon::IdCard,
            action: LinkAction::OpenDocument(RESUME_PATH.to_owned()),
        }
    }

    /// Target attribute for the rendered anchor.
    #[must_use]
    pub const fn target(&self) -> &'static str {
        NEW_CONTEXT_TARGET
    }
}

/// Greeting and biography shown above the sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Heading text placed before the waving glyph.
    pub greeting: String,
    /// Biography paragraph.
    pub bio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_link_opens_document() {
        let link = SocialLink::resume();
        assert_eq!(link.href, "#");
        assert_eq!(link.action, LinkAction::OpenDocument("/Resume.pdf".to_owned()));
        assert_eq!(link.target(), "_blank");
    }

    #[test]
    fn test_icon_names_are_kebab_case() {
        assert_eq!(Icon::ChevronRight.name(), "chevron-right");
        assert_eq!(Icon::IdCard.name(), "id-card");
        assert_eq!(Icon::Github.label(), "GitHub");
    }
}
