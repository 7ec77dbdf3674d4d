//! The teaching-experience table fragment.

use crate::document::Course;

/// Render the teaching experience table.
///
/// `year` names the closing year of the academic cycle; the cell shows the
/// full `year-1/year` range.
pub fn render_teaching_experience(experience: &[Course]) -> String {
    let mut lines = vec!["```{=html}".to_string(), "<div class=\"table-responsive\">".to_string()];
    lines.push("    <table class=\"table table-hover\">".to_string());
    lines.push("        <thead style=\"white-space: nowrap\">".to_string());
    lines.push("        <tr>".to_string());
    lines.push("            <th scope=\"col\">Course</th>".to_string());
    lines.push("            <th scope=\"col\">Degree</th>".to_string());
    lines.push("            <th scope=\"col\">Entity</th>".to_string());
    lines.push("            <th scope=\"col\">ECTS</th>".to_string());
    lines.push("            <th scope=\"col\">Year</th>".to_string());
    lines.push("        </tr>".to_string());
    lines.push("        </thead>".to_string());
    lines.push("        <tbody>".to_string());
    for item in experience {
        lines.push("            <tr>".to_string());
        lines.push(format!("                <td>{}</td>", item.course));
        lines.push(format!("                <td>{}</td>", item.degree));
        lines.push(format!("                <td>{}</td>", item.entity));
        lines.push(format!("                <td>{}</td>", item.credits));
        lines.push(format!("                <td>{}/{}</td>", item.year - 1, item.year));
        lines.push("            </tr>".to_string());
    }
    lines.push("        </tbody>".to_string());
    lines.push("    </table>".to_string());
    lines.push("</div>".to_string());
    lines.push("```".to_string());
    lines.join("\n")
}
