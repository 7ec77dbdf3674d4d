//! Card-grid fragments: open source project tiles and interest chips.

use super::non_empty;
use crate::document::ProjectCategory;

/// Render categorized open source project cards.
pub fn render_projects(projects: &[ProjectCategory]) -> String {
    let mut lines = vec!["```{=html}".to_string()];
    for category in projects {
        lines.push("<div class=\"projects-section\">".to_string());
        lines.push(format!("<h2>{}</h2>", category.category));
        lines.push("<div class=\"projects-grid\">".to_string());
        for tile in &category.items {
            lines.push("  <div class=\"card project-card\">".to_string());
            lines.push("    <div class=\"card-header\">".to_string());
            lines.push(format!(
                "      <a href=\"{}\" class=\"listing-title\">{}</a>",
                tile.href, tile.title
            ));
            if let Some(code) = non_empty(&tile.code) {
                lines.push(format!("      <a href=\"{}\" title=\"View source code\">", code));
                lines.push("        <i class=\"bi-github\"></i>".to_string());
                lines.push("      </a>".to_string());
            }
            lines.push("    </div>".to_string());
            lines.push("    <div class=\"card-body\">".to_string());
            lines.push(format!("      <span class=\"card-text\">{}</span>", tile.description));
            lines.push("    </div>".to_string());
            lines.push("    <div class=\"card-footer\">".to_string());
            lines.push(format!("      <span class=\"role-text\">{}</span>", tile.role));
            lines.push(format!("      <span class=\"date-text\">{}</span>", tile.date));
            lines.push("    </div>".to_string());
            lines.push("  </div>".to_string());
        }
        lines.push("</div>".to_string());
        lines.push("</div>".to_string());
    }
    lines.push("```".to_string());
    lines.join("\n")
}

/// Bootstrap icon for a known interest; anything else gets a star.
fn interest_icon(interest: &str) -> &'static str {
    match interest {
        "Archetypal Analysis" => "bi-graph-up",
        "Machine Learning" => "bi-robot",
        "Data Visualisation" => "bi-bar-chart",
        "Reinforcement Learning" => "bi-cpu",
        "HPC and Software Optimization" => "bi-speedometer2",
        "Knowledge Sharing" => "bi-share",
        _ => "bi-star",
    }
}

/// Render research interests as icon-tag chips.
pub fn render_interests(interests: &[String]) -> String {
    let mut lines = vec!["```{=html}".to_string(), "<div class=\"interests-container\">".to_string()];
    for interest in interests {
        lines.push(format!(
            "  <span class=\"interest-tag\"><i class=\"bi {}\"></i>{}</span>",
            interest_icon(interest),
            interest
        ));
    }
    lines.push("</div>".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}
