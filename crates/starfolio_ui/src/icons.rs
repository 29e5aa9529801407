//! Inline SVG markup for [`Icon`]s (24×24 stroke icons).

use starfolio_shared::Icon;

fn paths(icon: Icon) -> &'static str {
    match icon {
        Icon::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
        Icon::Linkedin => concat!(
            r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
            r#"<rect width="4" height="12" x="2" y="9"/>"#,
            r#"<circle cx="4" cy="4" r="2"/>"#,
        ),
        Icon::Github => concat!(
            r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
            r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
        ),
        Icon::Twitter => {
            r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#
        }
        Icon::IdCard => concat!(
            r#"<path d="M16 10h2"/><path d="M16 14h2"/>"#,
            r#"<path d="M6.17 15a3 3 0 0 1 5.66 0"/>"#,
            r#"<circle cx="9" cy="11" r="2"/>"#,
            r#"<rect x="2" y="5" width="20" height="14" rx="2"/>"#,
        ),
        Icon::User => concat!(
            r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/>"#,
            r#"<circle cx="12" cy="7" r="4"/>"#,
        ),
        Icon::Briefcase => concat!(
            r#"<path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#,
            r#"<rect width="20" height="14" x="2" y="6" rx="2"/>"#,
        ),
        Icon::Code => r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
    }
}

/// Complete `<svg>` element for `icon` at `size` pixels, stroked with
/// `currentColor` so it follows the surrounding text color.
#[must_use]
pub fn svg(icon: Icon, size: u32) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" "#,
            r#"viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" "#,
            r#"stroke-linecap="round" stroke-linejoin="round" class="icon-{name}">{paths}</svg>"#,
        ),
        size = size,
        name = icon.name(),
        paths = paths(icon),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_wraps_paths() {
        let markup = svg(Icon::ChevronRight, 18);
        assert!(markup.starts_with("<svg"));
        assert!(markup.contains(r#"width="18""#));
        assert!(markup.contains("m9 18 6-6-6-6"));
        assert!(markup.ends_with("</svg>"));
    }
}
