//! Plain HTML list fragments: stays, awards, grants, languages, service,
//! and funded projects.

use super::non_empty;
use crate::date;
use crate::document::{
    Award, Grant, Language, ResearchProject, ServiceEntry, Stay, TeachingProject,
};

/// Render research stays.
pub fn render_stays(stays: &[Stay]) -> String {
    let mut lines = vec!["```{=html}".to_string(), "<ul id=\"quarto-stays\">".to_string()];
    for item in stays {
        lines.push("    <li class=\"quarto-publication\">".to_string());
        lines.push(format!(
            "        <strong>{}</strong>, {} ({})",
            item.institution, item.location, item.dates
        ));
        lines.push(format!("        <br>Host: {}", item.host));
        lines.push(format!("        <br><i>{}</i>", item.description));
        lines.push("    </li>".to_string());
    }
    lines.push("</ul>".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}

/// Render awards and honors.
pub fn render_awards(awards: &[Award]) -> String {
    let mut lines = vec!["```{=html}".to_string(), "<ul id=\"quarto-awards\">".to_string()];
    for item in awards {
        lines.push("    <li class=\"quarto-publication\">".to_string());
        lines.push(format!("        <strong>{}</strong> ({})", item.title, item.year));
        lines.push(format!("        <br>{}", item.institution));
        if let Some(description) = non_empty(&item.description) {
            lines.push(format!("        <br><i>{}</i>", description));
        }
        lines.push("    </li>".to_string());
    }
    lines.push("</ul>".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}

/// Render grants and fellowships.
///
/// The duration annotation only appears alongside a date line.
pub fn render_grants(grants: &[Grant]) -> String {
    let mut lines = vec!["```{=html}".to_string(), "<ul id=\"quarto-grants\">".to_string()];
    for item in grants {
        lines.push("    <li class=\"quarto-publication\">".to_string());
        lines.push(format!("        <strong>{}</strong>", item.name));
        lines.push(format!("        <br>{}", item.entity));
        if let Some(kind) = non_empty(&item.kind) {
            lines.push(format!("        <br><i>{}</i>", kind));
        }
        let date_str = date::long_date(item.date.as_deref());
        if !date_str.is_empty() {
            let duration = match non_empty(&item.duration) {
                Some(duration) => format!(" ({})", duration),
                None => String::new(),
            };
            lines.push(format!(
                "        <br><small class=\"text-muted\">{}{}</small>",
                date_str, duration
            ));
        }
        lines.push("    </li>".to_string());
    }
    lines.push("</ul>".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}

/// Render spoken languages.
pub fn render_languages(languages: &[Language]) -> String {
    let mut lines = vec!["```{=html}".to_string(), "<ul id=\"quarto-languages\">".to_string()];
    for item in languages {
        lines.push("    <li>".to_string());
        lines.push(format!("        <strong>{}</strong>: {}", item.language, item.level));
        lines.push("    </li>".to_string());
    }
    lines.push("</ul>".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}

/// Render professional service entries (shared by research and teaching).
pub fn render_service(service: &[ServiceEntry]) -> String {
    let mut lines = vec!["```{=html}".to_string(), "<ul id=\"quarto-service\">".to_string()];
    for item in service {
        lines.push("    <li>".to_string());
        lines.push(format!("        {}", item.description));
        lines.push("    </li>".to_string());
    }
    lines.push("</ul>".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}

/// Render funded research projects.
pub fn render_research_projects(projects: &[ResearchProject]) -> String {
    let mut lines =
        vec!["```{=html}".to_string(), "<ul id=\"quarto-research-projects\">".to_string()];
    for item in projects {
        lines.push("    <li class=\"quarto-publication\">".to_string());
        lines.push(format!("        <strong>{}</strong>", item.title));
        if let Some(code) = non_empty(&item.code) {
            lines.push(format!("        <br>Code: {}", code));
        }
        if let Some(program) = non_empty(&item.program) {
            lines.push(format!("        <br>Program: {}", program));
        }
        lines.push(format!("        <br>Funder: {}", item.funder));
        lines.push(format!("        <br>PI: {}", item.pi));
        lines.push(format!("        <br>Period: {}", item.dates));
        if let Some(amount) = non_empty(&item.amount) {
            lines.push(format!("        <br>Funding: {}", amount));
        }
        if let Some(role) = non_empty(&item.role) {
            lines.push(format!("        <br><small class=\"text-muted\">Role: {}</small>", role));
        }
        lines.push("    </li>".to_string());
    }
    lines.push("</ul>".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}

/// Render teaching innovation projects.
pub fn render_teaching_projects(projects: &[TeachingProject]) -> String {
    let mut lines =
        vec!["```{=html}".to_string(), "<ul id=\"quarto-teaching-projects\">".to_string()];
    for item in projects {
        lines.push("    <li class=\"quarto-publication\">".to_string());
        lines.push(format!("        <strong>{}</strong>", item.title));
        if let Some(code) = non_empty(&item.code) {
            lines.push(format!("        <br>Code: {}", code));
        }
        lines.push(format!("        <br>Funder: {}", item.funder));
        lines.push(format!("        <br>Role: {}", item.role));
        lines.push(format!("        <br>Period: {}", item.dates));
        if let Some(description) = non_empty(&item.description) {
            lines.push(format!("        <br><i>{}</i>", description));
        }
        lines.push("    </li>".to_string());
    }
    lines.push("</ul>".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}
