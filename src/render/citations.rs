//! APA-like citation lists for publications and presentations.

use super::{labels, non_empty};
use crate::date;
use crate::document::{Article, Chapter, ConferencePaper, Presentation};

/// Error for a conditionally-mandatory field that turned out to be absent.
fn missing_field(field: &str, title: &str) -> String {
    format!("Missing mandatory field '{}' in record '{}'", field, title)
}

/// Render journal articles as an APA-like citation list.
///
/// Shape: Author (Year). Title. *Journal, Volume*(Number). DOI
///
/// Records carrying a `jif` value must also carry `jif_year`,
/// `jif_quartile`, and `jif_category`; a gap there is a data fault.
pub fn render_journal_articles(articles: &[Article]) -> Result<String, String> {
    let mut lines = vec!["```{=html}".to_string(), "<ul id=\"quarto-journal\">".to_string()];

    for item in articles {
        lines.push("    <li class=\"quarto-publication\">".to_string());

        // Author (Year). Title.
        let mut citation = format!("{} ({}). {}. ", item.author, item.year, item.title);

        // *Journal, Volume*(Number).
        citation.push_str(&format!("<i>{}", item.journal));
        if let Some(volume) = &item.volume {
            citation.push_str(&format!(", {}", volume));
        }
        citation.push_str("</i>");
        if let Some(number) = &item.number {
            citation.push_str(&format!("({})", number));
        }
        citation.push_str(". ");

        // DOI
        citation.push_str(&labels::doi_link(&item.doi));

        lines.push(format!("        {}", citation));

        // Impact-factor annotation
        if let Some(jif) = &item.jif {
            let jif_year =
                item.jif_year.as_ref().ok_or_else(|| missing_field("jif_year", &item.title))?;
            let quartile = item
                .jif_quartile
                .as_ref()
                .ok_or_else(|| missing_field("jif_quartile", &item.title))?;
            let category = item
                .jif_category
                .as_ref()
                .ok_or_else(|| missing_field("jif_category", &item.title))?;
            lines.push(format!(
                "        <br><small class=\"text-muted\">{} JIF: {} ({} in {})</small>",
                jif_year, jif, quartile, category
            ));
        }

        let chips = labels::link_labels(&item.links);
        if !chips.is_empty() {
            lines.push(format!("        {}", chips));
        }

        lines.push("    </li>".to_string());
    }

    lines.push("</ul>".to_string());
    lines.push("```".to_string());
    Ok(lines.join("\n"))
}

/// Render book chapters or conference proceedings.
///
/// Shape: Author (Year). Title. In *Book title* (Series). Publisher. DOI
///
/// The two fragments share one record shape and differ only in the id of
/// the wrapping `<ul>`.
pub fn render_in_collection(chapters: &[Chapter], ul_id: &str) -> String {
    let mut lines = vec!["```{=html}".to_string(), format!("<ul id=\"{}\">", ul_id)];

    for item in chapters {
        lines.push("    <li class=\"quarto-publication\">".to_string());

        // Author (Year). Title. In *Book title*
        let mut citation = format!("{} ({}). {}. ", item.author, item.year, item.title);
        citation.push_str(&format!("In <i>{}</i>", item.booktitle));

        // (Series)
        if let Some(series) = non_empty(&item.series) {
            citation.push_str(&format!(" ({})", series));
        }

        // Publisher. DOI
        citation.push_str(&format!(". {}. ", item.publisher));
        citation.push_str(&labels::doi_link(&item.doi));

        lines.push(format!("        {}", citation));

        let chips = labels::link_labels(&item.links);
        if !chips.is_empty() {
            lines.push(format!("        {}", chips));
        }

        lines.push("    </li>".to_string());
    }

    lines.push("</ul>".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}

/// Render conference presentations.
///
/// Shape: Author (Date). *Title* [Conference presentation]. Conference, Location.
pub fn render_presentations(presentations: &[Presentation]) -> String {
    let mut lines = vec!["```{=html}".to_string(), "<ul id=\"quarto-conference\">".to_string()];

    for item in presentations {
        lines.push("    <li class=\"quarto-publication\">".to_string());

        let mut citation = format!("{} ({}). ", item.author, date::long_date(item.date.as_deref()));
        citation.push_str(&format!("<i>{}</i> [Conference presentation]. ", item.title));
        citation.push_str(&format!("{}, {}.", item.conference, item.location));

        lines.push(format!("        {}", citation));

        if let Some(note) = non_empty(&item.note) {
            lines.push(format!("        <br><small class=\"text-muted\"><i>{}</i></small>", note));
        }

        let chips = labels::link_labels(&item.links);
        if !chips.is_empty() {
            lines.push(format!("        {}", chips));
        }

        lines.push("    </li>".to_string());
    }

    lines.push("</ul>".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}

/// Render teaching conference papers.
///
/// Shape: Author (Date). *Title* [Conference paper]. Conference, Location. DOI
pub fn render_conference_papers(papers: &[ConferencePaper]) -> String {
    let mut lines = vec!["```{=html}".to_string(), "<ul id=\"quarto-conference\">".to_string()];

    for item in papers {
        lines.push("    <li class=\"quarto-publication\">".to_string());

        let mut citation = format!("{} ({}). ", item.author, date::long_date(item.date.as_deref()));
        citation.push_str(&format!("<i>{}</i> [Conference paper]. ", item.title));
        citation.push_str(&format!("{}, {}.", item.conference, item.location));

        if let Some(doi) = non_empty(&item.doi) {
            citation.push_str(&format!(" {}", labels::doi_link(doi)));
        }

        lines.push(format!("        {}", citation));

        let chips = labels::link_labels(&item.links);
        if !chips.is_empty() {
            lines.push(format!("        {}", chips));
        }

        lines.push("    </li>".to_string());
    }

    lines.push("</ul>".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}

#[cfg(test)]
#[path = "citations_test.rs"]
mod citations_test;
