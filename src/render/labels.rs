//! Shared hyperlink helpers for publication-like entries.

use super::non_empty;
use crate::document::LinkLabels;

/// Format a DOI as a clean hyperlink.
pub fn doi_link(doi: &str) -> String {
    format!("<a href=\"https://doi.org/{}\">{}</a>", doi, doi)
}

/// Render the CODE/PDF/custom label chips for one entry.
///
/// Returns an empty string when the entry carries no links, so callers can
/// skip the wrapping line entirely.
pub fn link_labels(links: &LinkLabels) -> String {
    let mut chips = Vec::new();

    if let Some(code) = non_empty(&links.code) {
        chips.push(format!("<span class=\"quarto-label\"><a href=\"{}\">CODE</a></span>", code));
    }
    if let Some(pdf) = non_empty(&links.pdf) {
        chips.push(format!("<span class=\"quarto-label\"><a href=\"{}\">PDF</a></span>", pdf));
    }
    for label in &links.labels {
        if let Some(url) = non_empty(&label.url) {
            chips.push(format!(
                "<span class=\"quarto-label\"><a href=\"{}\">{}</a></span>",
                url,
                label.name.to_uppercase()
            ));
        }
    }

    if chips.is_empty() {
        String::new()
    } else {
        format!("<div class=\"quarto-labels\">{}</div>", chips.join(" "))
    }
}
