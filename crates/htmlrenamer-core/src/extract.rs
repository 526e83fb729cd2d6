/// Title extraction: pulls the heading text out of a saved HTML page.
///
/// Parsing is done by `scraper` (html5ever underneath), which accepts any
/// byte soup without failing, so malformed markup simply yields "no title".
use scraper::{CaseSensitivity, ElementRef, Html};
use std::fmt;
use std::path::Path;

/// Tag of the heading whose text becomes the new filename.
pub const DEFAULT_HEADING_TAG: &str = "h1";
/// Class the heading must carry.
pub const DEFAULT_HEADING_CLASS: &str = "panel__title";

/// Which element to read the title from: the first `tag` carrying `class`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSelector {
    tag: String,
    class: String,
}

impl TitleSelector {
    pub fn new(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            class: class.into(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    fn matches(&self, element: &ElementRef<'_>) -> bool {
        let value = element.value();
        value.name() == self.tag && value.has_class(&self.class, CaseSensitivity::CaseSensitive)
    }
}

impl Default for TitleSelector {
    fn default() -> Self {
        Self::new(DEFAULT_HEADING_TAG, DEFAULT_HEADING_CLASS)
    }
}

impl fmt::Display for TitleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} class=\"{}\">", self.tag, self.class)
    }
}

/// Why no title could be taken from a file.
#[derive(Debug, thiserror::Error)]
pub enum TitleMissing {
    /// The heading is absent, or contains only whitespace.
    #[error("{selector} not found or empty")]
    NotFound { selector: String },
    /// The heading had text, but none of it survives sanitising.
    #[error("heading text {0:?} has no usable filename characters")]
    Unusable(String),
    #[error("cannot read file: {0}")]
    Unreadable(#[source] std::io::Error),
    #[error("file is not valid UTF-8")]
    NotUtf8,
}

/// Return the trimmed text of the first element matching `selector`.
///
/// Only the first match is considered: if it is empty, later matches are
/// not consulted.
pub fn extract_title(html: &str, selector: &TitleSelector) -> Option<String> {
    let document = Html::parse_document(html);
    let heading = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| selector.matches(el))?;

    let text: String = heading.text().collect();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read `path` as UTF-8 and extract its title.
pub fn read_title(path: &Path, selector: &TitleSelector) -> Result<String, TitleMissing> {
    let bytes = std::fs::read(path).map_err(TitleMissing::Unreadable)?;
    let content = String::from_utf8(bytes).map_err(|_| TitleMissing::NotUtf8)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    extract_title(content, selector).ok_or_else(|| TitleMissing::NotFound {
        selector: selector.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!("<!DOCTYPE html><html><head><title>ignored</title></head><body>{body}</body></html>")
    }

    #[test]
    fn outer_whitespace_is_stripped() {
        let html = page(r#"<h1 class="panel__title">  My Title </h1>"#);
        assert_eq!(
            extract_title(&html, &TitleSelector::default()).as_deref(),
            Some("My Title")
        );
    }

    #[test]
    fn empty_heading_is_absent() {
        let html = page(r#"<h1 class="panel__title"></h1>"#);
        assert_eq!(extract_title(&html, &TitleSelector::default()), None);

        let blank = page("<h1 class=\"panel__title\">  \n\t </h1>");
        assert_eq!(extract_title(&blank, &TitleSelector::default()), None);
    }

    #[test]
    fn heading_without_class_is_ignored() {
        let html = page(r#"<h1>Plain</h1><h1 class="other">Other</h1>"#);
        assert_eq!(extract_title(&html, &TitleSelector::default()), None);
    }

    #[test]
    fn first_matching_heading_wins() {
        let html = page(
            r#"<h1 class="panel__title">First</h1><h1 class="panel__title">Second</h1>"#,
        );
        assert_eq!(
            extract_title(&html, &TitleSelector::default()).as_deref(),
            Some("First")
        );
    }

    #[test]
    fn class_matches_among_several() {
        let html = page(r#"<h1 class="big panel__title bold">Chapter <em>One</em></h1>"#);
        assert_eq!(
            extract_title(&html, &TitleSelector::default()).as_deref(),
            Some("Chapter One")
        );
    }

    /// Inner text nodes keep their spacing; only the ends are trimmed.
    #[test]
    fn inner_spacing_between_nodes_is_kept() {
        let html = page(r#"<h1 class="panel__title"><span> A </span> <em>B</em></h1>"#);
        let title = extract_title(&html, &TitleSelector::default()).unwrap();
        assert_eq!(title, "A  B");
        assert_eq!(crate::sanitize::sanitize(&title), "A_B");
    }

    #[test]
    fn other_tags_with_the_class_do_not_match() {
        let html = page(r#"<h2 class="panel__title">Sub</h2><div class="panel__title">Div</div>"#);
        assert_eq!(extract_title(&html, &TitleSelector::default()), None);
    }

    #[test]
    fn malformed_markup_does_not_panic() {
        let inputs = [
            "",
            "<<<>>>",
            "<h1 class=\"panel__title\">Unclosed",
            "</h1></body><h1 class='panel__title'>Late</h1",
            "\u{0}\u{1}<h1",
        ];
        for input in inputs {
            let _ = extract_title(input, &TitleSelector::default());
        }
        assert_eq!(
            extract_title(
                "<h1 class=\"panel__title\">Unclosed",
                &TitleSelector::default()
            )
            .as_deref(),
            Some("Unclosed")
        );
    }

    #[test]
    fn custom_selector_is_respected() {
        let html = page(r#"<H2 class="note">Note text</H2>"#);
        let selector = TitleSelector::new("H2", "note");
        assert_eq!(selector.tag(), "h2");
        assert_eq!(extract_title(&html, &selector).as_deref(), Some("Note text"));
        assert_eq!(selector.to_string(), "<h2 class=\"note\">");
    }

    #[test]
    fn read_title_reports_cause() {
        let dir = tempfile::TempDir::new().unwrap();

        let good = dir.path().join("good.html");
        std::fs::write(&good, page(r#"<h1 class="panel__title">Good</h1>"#)).unwrap();
        assert_eq!(read_title(&good, &TitleSelector::default()).unwrap(), "Good");

        let bom = dir.path().join("bom.html");
        std::fs::write(
            &bom,
            format!("\u{feff}{}", page(r#"<h1 class="panel__title">Bom</h1>"#)),
        )
        .unwrap();
        assert_eq!(read_title(&bom, &TitleSelector::default()).unwrap(), "Bom");

        let missing = dir.path().join("missing.html");
        std::fs::write(&missing, page("<p>nothing</p>")).unwrap();
        assert!(matches!(
            read_title(&missing, &TitleSelector::default()),
            Err(TitleMissing::NotFound { .. })
        ));

        let binary = dir.path().join("binary.html");
        std::fs::write(&binary, [0xff, 0xfe, 0x00, 0x41]).unwrap();
        assert!(matches!(
            read_title(&binary, &TitleSelector::default()),
            Err(TitleMissing::NotUtf8)
        ));

        let gone = dir.path().join("gone.html");
        assert!(matches!(
            read_title(&gone, &TitleSelector::default()),
            Err(TitleMissing::Unreadable(_))
        ));
    }
}
