/// Tests for citation rendering
#[cfg(test)]
mod tests {
    use crate::document::{
        Article, Chapter, ConferencePaper, LinkLabels, Presentation, Scalar,
    };
    use crate::render::{
        render_conference_papers, render_in_collection, render_journal_articles,
        render_presentations,
    };

    fn article(title: &str) -> Article {
        Article {
            author: "Doe, J.".to_string(),
            year: Scalar::Int(2023),
            title: title.to_string(),
            journal: "Journal of Things".to_string(),
            doi: "10.1000/182".to_string(),
            volume: None,
            number: None,
            jif: None,
            jif_year: None,
            jif_quartile: None,
            jif_category: None,
            links: LinkLabels::default(),
        }
    }

    #[test]
    fn test_article_minimal_citation() {
        let html = render_journal_articles(&[article("On Things")]).expect("Should render");
        assert!(html.starts_with("```{=html}\n<ul id=\"quarto-journal\">"));
        assert!(html.ends_with("</ul>\n```"));
        assert!(html.contains(
            "Doe, J. (2023). On Things. <i>Journal of Things</i>. \
             <a href=\"https://doi.org/10.1000/182\">10.1000/182</a>"
        ));
    }

    #[test]
    fn test_article_with_volume_and_number() {
        let mut item = article("On Things");
        item.volume = Some(Scalar::Int(12));
        item.number = Some(Scalar::Int(3));
        let html = render_journal_articles(&[item]).expect("Should render");
        assert!(html.contains("<i>Journal of Things, 12</i>(3). "));
    }

    #[test]
    fn test_article_jif_line_requires_companions() {
        let mut item = article("On Things");
        item.jif = Some(Scalar::Float(8.5));
        let err = render_journal_articles(&[item]).expect_err("Should fault on missing jif_year");
        assert!(err.contains("jif_year"), "Error should name the field: {}", err);
        assert!(err.contains("On Things"), "Error should name the record: {}", err);
    }

    #[test]
    fn test_article_full_jif_annotation() {
        let mut item = article("On Things");
        item.jif = Some(Scalar::Float(8.5));
        item.jif_year = Some(Scalar::Int(2022));
        item.jif_quartile = Some("Q1".to_string());
        item.jif_category = Some("Computer Science".to_string());
        let html = render_journal_articles(&[item]).expect("Should render");
        assert!(html.contains(
            "<br><small class=\"text-muted\">2022 JIF: 8.5 (Q1 in Computer Science)</small>"
        ));
    }

    #[test]
    fn test_articles_keep_input_order() {
        let html = render_journal_articles(&[article("First"), article("Second")])
            .expect("Should render");
        let first = html.find("First").expect("first entry");
        let second = html.find("Second").expect("second entry");
        assert!(first < second, "Output order should match input order");
    }

    fn chapter() -> Chapter {
        Chapter {
            author: "Doe, J.".to_string(),
            year: Scalar::Int(2021),
            title: "A Chapter".to_string(),
            booktitle: "Big Book".to_string(),
            publisher: "Springer".to_string(),
            doi: "10.1000/999".to_string(),
            series: None,
            links: LinkLabels::default(),
        }
    }

    #[test]
    fn test_chapter_without_series() {
        let html = render_in_collection(&[chapter()], "quarto-book-chapter");
        assert!(html.contains("<ul id=\"quarto-book-chapter\">"));
        assert!(html.contains("A Chapter. In <i>Big Book</i>. Springer. "));
    }

    #[test]
    fn test_chapter_with_series() {
        let mut item = chapter();
        item.series = Some("LNCS 1234".to_string());
        let html = render_in_collection(&[item], "quarto-proceeding");
        assert!(html.contains("<ul id=\"quarto-proceeding\">"));
        assert!(html.contains("In <i>Big Book</i> (LNCS 1234). Springer. "));
    }

    fn presentation() -> Presentation {
        Presentation {
            author: "Doe, J.".to_string(),
            title: "A Talk".to_string(),
            conference: "RustConf".to_string(),
            location: "Portland, USA".to_string(),
            date: Some("2023-09-12".to_string()),
            note: None,
            links: LinkLabels::default(),
        }
    }

    #[test]
    fn test_presentation_citation() {
        let html = render_presentations(&[presentation()]);
        assert!(html.contains(
            "Doe, J. (September 12, 2023). <i>A Talk</i> [Conference presentation]. \
             RustConf, Portland, USA."
        ));
    }

    #[test]
    fn test_presentation_without_date_renders_empty_parens() {
        let mut item = presentation();
        item.date = None;
        let html = render_presentations(&[item]);
        assert!(html.contains("Doe, J. (). <i>A Talk</i>"));
    }

    #[test]
    fn test_presentation_note_line() {
        let mut item = presentation();
        item.note = Some("Invited talk".to_string());
        let html = render_presentations(&[item]);
        assert!(html.contains("<br><small class=\"text-muted\"><i>Invited talk</i></small>"));
    }

    #[test]
    fn test_conference_paper_with_doi() {
        let paper = ConferencePaper {
            author: "Doe, J.".to_string(),
            title: "A Paper".to_string(),
            conference: "EduConf".to_string(),
            location: "Madrid, Spain".to_string(),
            date: Some("2022/07/04".to_string()),
            doi: Some("10.1000/777".to_string()),
            links: LinkLabels::default(),
        };
        let html = render_conference_papers(&[paper]);
        assert!(html.contains(
            "Doe, J. (July 4, 2022). <i>A Paper</i> [Conference paper]. EduConf, Madrid, Spain. \
             <a href=\"https://doi.org/10.1000/777\">10.1000/777</a>"
        ));
    }
}
