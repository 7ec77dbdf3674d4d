//! Markdown-bodied fragments: work experience, education, the about blurb,
//! and the social-link stanzas used in page frontmatter.

use super::non_empty;
use crate::date;
use crate::document::{Degree, Job, Personal, SocialLink};

/// Render the work experience list.
///
/// The position line ends with two spaces (a markdown hard break). A
/// missing end date renders as "present".
pub fn render_work_experience(jobs: &[Job]) -> String {
    let mut lines = Vec::new();
    for item in jobs {
        let start = date::month_year(item.start_date.as_deref());
        let end = date::month_year(item.end_date.as_deref());

        lines.push(format!("- **{}** | {} - {}  ", item.position, start, end));

        let mut inst_line = format!("  {}", item.institution);
        if let Some(department) = non_empty(&item.department) {
            inst_line.push_str(&format!(", {}", department));
        }
        inst_line.push_str(&format!(", {}", item.location));
        lines.push(inst_line);

        if let Some(description) = non_empty(&item.description) {
            lines.push(format!("  *{}*", description));
        }

        lines.push(String::new());
    }
    lines.join("\n")
}

/// Render the education list.
pub fn render_education(education: &[Degree]) -> String {
    let mut lines = Vec::new();
    for item in education {
        let end_year = match &item.end_year {
            Some(year) => year.to_string(),
            None => "present".to_string(),
        };
        lines.push(format!("- **{}** | {} - {}  ", item.degree, item.start_year, end_year));
        lines.push(format!("  {}, {}", item.institution, item.location));
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Render the about/bio blurb followed by the CV link.
pub fn render_about(personal: &Personal) -> String {
    let mut lines = Vec::new();
    for paragraph in personal.bio.trim().split("\n\n") {
        lines.push(paragraph.trim().to_string());
        lines.push(String::new());
    }
    lines.push(format!("[View my complete CV]({}).", personal.cv_url));
    lines.join("\n")
}

/// Render social links as YAML frontmatter stanzas.
///
/// The icon field rewrites Font Awesome's space-separated classes into the
/// shortcode form the site templates expect.
pub fn render_social_links(social: &[SocialLink]) -> String {
    let mut lines = Vec::new();
    for item in social {
        let icon = item.icon.replace("fa ", "fa-").replace(' ', " fa-");
        lines.push(format!("    - text: \"{{{{< {} >}}}} {}\"", icon, item.label));
        lines.push(format!("      href: \"{}\"", item.url));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Scalar;

    fn job() -> Job {
        Job {
            position: "Researcher".to_string(),
            institution: "Some University".to_string(),
            location: "Madrid, Spain".to_string(),
            start_date: Some("2021-10-01".to_string()),
            end_date: None,
            department: None,
            description: None,
        }
    }

    #[test]
    fn test_open_ended_job_renders_present() {
        let md = render_work_experience(&[job()]);
        assert!(md.contains("- **Researcher** | Oct 2021 - present  "));
        assert!(md.contains("  Some University, Madrid, Spain"));
    }

    #[test]
    fn test_job_with_department_and_description() {
        let mut item = job();
        item.end_date = Some("2023-06-30".to_string());
        item.department = Some("AI Lab".to_string());
        item.description = Some("Worked on things".to_string());
        let md = render_work_experience(&[item]);
        assert!(md.contains("| Oct 2021 - Jun 2023  "));
        assert!(md.contains("  Some University, AI Lab, Madrid, Spain"));
        assert!(md.contains("  *Worked on things*"));
    }

    #[test]
    fn test_education_open_ended() {
        let degree = Degree {
            degree: "PhD in Computer Science".to_string(),
            start_year: Scalar::Int(2020),
            institution: "Some University".to_string(),
            location: "Madrid, Spain".to_string(),
            end_year: None,
        };
        let md = render_education(&[degree]);
        assert!(md.contains("- **PhD in Computer Science** | 2020 - present  "));
    }

    #[test]
    fn test_about_splits_bio_paragraphs() {
        let personal = Personal {
            cv_url: "/files/cv.pdf".to_string(),
            bio: "First paragraph.\n\nSecond paragraph.\n".to_string(),
            social: vec![],
        };
        let md = render_about(&personal);
        assert_eq!(
            md,
            "First paragraph.\n\nSecond paragraph.\n\n[View my complete CV](/files/cv.pdf)."
        );
    }

    #[test]
    fn test_social_link_stanza() {
        let social = vec![SocialLink {
            label: "GitHub".to_string(),
            url: "https://github.com/jdoe".to_string(),
            icon: "fa brands github".to_string(),
        }];
        let md = render_social_links(&social);
        assert_eq!(
            md,
            "    - text: \"{{< fa-brands fa-github >}} GitHub\"\n      href: \"https://github.com/jdoe\""
        );
    }
}
