/// Unified CV document model
///
/// This module handles:
/// - The serde data model for every section of the CV data file
/// - Loading and validating the YAML document
/// - Scalar tolerance for fields that may be numbers or strings
use log::debug;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// A YAML scalar that may arrive as a number or a string.
///
/// Fields like `year`, `volume`, or `credits` are hand-maintained and show
/// up both ways in practice; either renders as its plain scalar text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// The root CV document: every recognized section, loaded once per run.
///
/// Sections are mandatory; a record missing a mandatory field fails the
/// load with a message naming the field and its location.
#[derive(Debug, Clone, Deserialize)]
pub struct CvDocument {
    pub personal: Personal,
    pub publications: Publications,
    pub research_stays: Vec<Stay>,
    pub teaching: Teaching,
    pub projects: Vec<ProjectCategory>,
    pub work_experience: Vec<Job>,
    pub education: Vec<Degree>,
    pub interests: Vec<String>,
    pub awards: Vec<Award>,
    pub grants: Vec<Grant>,
    pub languages: Vec<Language>,
    pub research_service: Vec<ServiceEntry>,
    pub teaching_service: Vec<ServiceEntry>,
    pub research_projects: Vec<ResearchProject>,
    pub teaching_projects: Vec<TeachingProject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Personal {
    pub cv_url: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Publications {
    pub articles: Vec<Article>,
    pub incollection: Vec<Chapter>,
    pub inproceedings: Vec<Chapter>,
    pub presentations: Vec<Presentation>,
    pub other: Vec<Presentation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Teaching {
    pub experience: Vec<Course>,
    pub publications: Vec<Article>,
    pub conferences: Vec<ConferencePaper>,
}

/// Shared optional link trio carried by publication-like records.
///
/// `code` and `pdf` are bare URLs; `labels` are named links rendered only
/// when they carry a URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkLabels {
    pub code: Option<String>,
    pub pdf: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
    pub url: Option<String>,
}

/// One journal article (also used for teaching publications).
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub author: String,
    pub year: Scalar,
    pub title: String,
    pub journal: String,
    pub doi: String,
    pub volume: Option<Scalar>,
    pub number: Option<Scalar>,
    /// Journal impact factor; when present, `jif_year`, `jif_quartile`,
    /// and `jif_category` become mandatory for the record.
    pub jif: Option<Scalar>,
    pub jif_year: Option<Scalar>,
    pub jif_quartile: Option<String>,
    pub jif_category: Option<String>,
    #[serde(flatten)]
    pub links: LinkLabels,
}

/// One book chapter or conference-proceedings paper.
#[derive(Debug, Clone, Deserialize)]
pub struct Chapter {
    pub author: String,
    pub year: Scalar,
    pub title: String,
    pub booktitle: String,
    pub publisher: String,
    pub doi: String,
    pub series: Option<String>,
    #[serde(flatten)]
    pub links: LinkLabels,
}

/// One conference presentation (no published paper).
#[derive(Debug, Clone, Deserialize)]
pub struct Presentation {
    pub author: String,
    pub title: String,
    pub conference: String,
    pub location: String,
    pub date: Option<String>,
    pub note: Option<String>,
    #[serde(flatten)]
    pub links: LinkLabels,
}

/// One teaching-innovation conference paper.
#[derive(Debug, Clone, Deserialize)]
pub struct ConferencePaper {
    pub author: String,
    pub title: String,
    pub conference: String,
    pub location: String,
    pub date: Option<String>,
    pub doi: Option<String>,
    #[serde(flatten)]
    pub links: LinkLabels,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stay {
    pub institution: String,
    pub location: String,
    pub dates: String,
    pub host: String,
    pub description: String,
}

/// One taught course. `year` must be an integer: the output shows the
/// academic year as `year-1/year`.
#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub course: String,
    pub degree: String,
    pub entity: String,
    pub credits: Scalar,
    pub year: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectCategory {
    pub category: String,
    pub items: Vec<ProjectCard>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectCard {
    pub href: String,
    pub title: String,
    pub description: String,
    pub role: String,
    pub date: String,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub position: String,
    pub institution: String,
    pub location: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub department: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Degree {
    pub degree: String,
    pub start_year: Scalar,
    pub institution: String,
    pub location: String,
    pub end_year: Option<Scalar>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Award {
    pub title: String,
    pub year: Scalar,
    pub institution: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Grant {
    pub name: String,
    pub entity: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub date: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    pub language: String,
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceEntry {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResearchProject {
    pub title: String,
    pub funder: String,
    pub pi: String,
    pub dates: String,
    pub code: Option<String>,
    pub program: Option<String>,
    pub amount: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeachingProject {
    pub title: String,
    pub funder: String,
    pub role: String,
    pub dates: String,
    pub code: Option<String>,
    pub description: Option<String>,
}

/// Load and validate the CV document from disk
pub fn load_document(path: &Path) -> Result<CvDocument, String> {
    debug!("Loading CV data from {:?}", path);

    let text =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    serde_yaml::from_str(&text).map_err(|e| format!("Invalid CV data in {}: {}", path.display(), e))
}

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;
