/// Startup checks for catalog records.
///
/// The tables are authored by hand, so a typo (empty url, bad color, grade 90) is caught
/// once at boot instead of surfacing as a broken card.
use regex::Regex;

use crate::error::CatalogError;
use crate::model::{ExternalLink, Guide};

pub const MIN_GRADE: u8 = 9;
pub const MAX_GRADE: u8 = 12;

const GUIDE_URL_PREFIX: &str = "/guides/";

pub fn validate_guides(guides: &[Guide]) -> Result<(), CatalogError> {
    for guide in guides {
        let invalid = |message: String| CatalogError::InvalidRecord {
            kind: "guide",
            name: guide.name.to_string(),
            message,
        };

        require_text("name", guide.name).map_err(invalid)?;
        require_text("subject", guide.subject).map_err(invalid)?;
        require_text("url", guide.url).map_err(invalid)?;

        if !(MIN_GRADE..=MAX_GRADE).contains(&guide.grade) {
            return Err(invalid(format!(
                "grade {} outside {MIN_GRADE}..={MAX_GRADE}",
                guide.grade
            )));
        }
        if !guide.url.starts_with(GUIDE_URL_PREFIX) || guide.url.len() == GUIDE_URL_PREFIX.len() {
            return Err(invalid(format!(
                "url '{}' must point at a file under {GUIDE_URL_PREFIX}",
                guide.url
            )));
        }
    }
    Ok(())
}

pub fn validate_links(links: &[ExternalLink]) -> Result<(), CatalogError> {
    let url_re = Regex::new(r"^https?://[^\s/]+").expect("valid regex");
    let color_re = Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid regex");

    for link in links {
        let invalid = |message: String| CatalogError::InvalidRecord {
            kind: "link",
            name: link.name.to_string(),
            message,
        };

        require_text("name", link.name).map_err(invalid)?;
        require_text("description", link.description).map_err(invalid)?;
        require_text("category", link.category).map_err(invalid)?;
        require_text("url", link.url).map_err(invalid)?;

        if !url_re.is_match(link.url) {
            return Err(invalid(format!("url '{}' is not an absolute http(s) address", link.url)));
        }
        if !color_re.is_match(link.color) {
            return Err(invalid(format!("color '{}' is not #rrggbb", link.color)));
        }
    }
    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} must not be empty"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{EXTERNAL_LINKS, GUIDES};
    use crate::model::Level;

    fn guide(grade: u8, url: &'static str) -> Guide {
        Guide {
            grade,
            subject: "Physics",
            level: Level::Honors,
            name: "Optics",
            url,
        }
    }

    fn link(url: &'static str, color: &'static str) -> ExternalLink {
        ExternalLink {
            name: "Tool",
            description: "A tool.",
            category: "General",
            url,
            color,
        }
    }

    #[test]
    fn builtin_tables_are_valid() {
        validate_guides(&GUIDES).unwrap();
        validate_links(&EXTERNAL_LINKS).unwrap();
    }

    #[test]
    fn rejects_grade_out_of_range() {
        let err = validate_guides(&[guide(13, "/guides/optics.pdf")]).unwrap_err();
        assert!(err.to_string().contains("grade 13"));
    }

    #[test]
    fn rejects_empty_guide_url() {
        let err = validate_guides(&[guide(11, "")]).unwrap_err();
        assert!(err.to_string().contains("url must not be empty"));
        assert!(validate_guides(&[guide(11, "/guides/")]).is_err());
        assert!(validate_guides(&[guide(11, "optics.pdf")]).is_err());
    }

    #[test]
    fn rejects_bad_link_url_and_color() {
        assert!(validate_links(&[link("www.example.com", "#000000")]).is_err());
        assert!(validate_links(&[link("https://example.com", "blue")]).is_err());
        assert!(validate_links(&[link("https://example.com", "#ABCDEF")]).is_ok());
    }
}
