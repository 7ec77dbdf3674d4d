//! Fragment rendering - the data-to-text transformations.
//!
//! Each CV section has one stateless formatter that maps its records to a
//! fixed-shape text block. Formatters are independent: no ordering
//! requirement among sections, no shared state, output a pure function of
//! input.
//!
//! # Module Organization
//!
//! - `labels` - Shared DOI and link-label helpers
//! - `citations` - APA-like citation lists (articles, chapters, proceedings,
//!   presentations, conference papers)
//! - `lists` - Plain HTML lists (stays, awards, grants, languages, service,
//!   funded projects)
//! - `tables` - The teaching-experience table
//! - `cards` - Project card grid and interest chips
//! - `markdown` - Markdown-bodied fragments (work experience, education,
//!   about, social links)

mod cards;
mod citations;
mod labels;
mod lists;
mod markdown;
mod tables;

pub use cards::{render_interests, render_projects};
pub use citations::{
    render_conference_papers, render_in_collection, render_journal_articles, render_presentations,
};
pub use labels::{doi_link, link_labels};
pub use lists::{
    render_awards, render_grants, render_languages, render_research_projects, render_service,
    render_stays, render_teaching_projects,
};
pub use markdown::{render_about, render_education, render_social_links, render_work_experience};
pub use tables::render_teaching_experience;

use crate::document::CvDocument;

/// One generated include file: target name plus fully rendered body.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub filename: &'static str,
    pub body: String,
}

/// Element id of the `<ul>` wrapping book chapters.
const BOOK_CHAPTER_ID: &str = "quarto-book-chapter";
/// Element id of the `<ul>` wrapping conference proceedings.
const PROCEEDING_ID: &str = "quarto-proceeding";

/// Render every fragment of the document, in its fixed generation order.
///
/// All fragments are built in memory before the caller writes anything, so
/// a data fault in any section aborts the run with no partial output.
pub fn render_document(cv: &CvDocument) -> Result<Vec<Fragment>, String> {
    let fragments = vec![
        Fragment {
            filename: "journal-publications.qmd",
            body: render_journal_articles(&cv.publications.articles)?,
        },
        Fragment {
            filename: "book-chapters.qmd",
            body: render_in_collection(&cv.publications.incollection, BOOK_CHAPTER_ID),
        },
        Fragment {
            filename: "conference-proceedings.qmd",
            body: render_in_collection(&cv.publications.inproceedings, PROCEEDING_ID),
        },
        Fragment {
            filename: "conference-contributions.qmd",
            body: render_presentations(&cv.publications.presentations),
        },
        Fragment {
            filename: "other-contributions.qmd",
            body: render_presentations(&cv.publications.other),
        },
        Fragment { filename: "research-stays.qmd", body: render_stays(&cv.research_stays) },
        Fragment {
            filename: "teaching-experience.qmd",
            body: render_teaching_experience(&cv.teaching.experience),
        },
        Fragment {
            filename: "teaching-publications.qmd",
            body: render_journal_articles(&cv.teaching.publications)?,
        },
        Fragment {
            filename: "teaching-conferences.qmd",
            body: render_conference_papers(&cv.teaching.conferences),
        },
        Fragment { filename: "projects.qmd", body: render_projects(&cv.projects) },
        Fragment { filename: "work-experience.qmd", body: render_work_experience(&cv.work_experience) },
        Fragment { filename: "education.qmd", body: render_education(&cv.education) },
        Fragment { filename: "interests.qmd", body: render_interests(&cv.interests) },
        Fragment { filename: "about.qmd", body: render_about(&cv.personal) },
        Fragment { filename: "awards.qmd", body: render_awards(&cv.awards) },
        Fragment { filename: "grants.qmd", body: render_grants(&cv.grants) },
        Fragment { filename: "languages.qmd", body: render_languages(&cv.languages) },
        Fragment { filename: "research-service.qmd", body: render_service(&cv.research_service) },
        Fragment { filename: "teaching-service.qmd", body: render_service(&cv.teaching_service) },
        Fragment {
            filename: "research-projects.qmd",
            body: render_research_projects(&cv.research_projects),
        },
        Fragment {
            filename: "teaching-projects.qmd",
            body: render_teaching_projects(&cv.teaching_projects),
        },
        Fragment { filename: "social-links.qmd", body: render_social_links(&cv.personal.social) },
    ];

    Ok(fragments)
}

/// Treat a missing and an empty optional field the same way: no output line.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
