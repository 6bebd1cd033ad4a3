/// Filter parameters as they arrive from the page query string.
///
/// Empty values mean "any". A grade or level that cannot be parsed can never match a
/// record, so it resolves to `None` and callers render an empty list.
use serde::Deserialize;

use study_catalog::{GuideFilter, Level, LinkFilter};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    pub grade: Option<String>,
    pub subject: Option<String>,
    pub level: Option<String>,
    pub category: Option<String>,
}

impl CatalogQuery {
    pub fn guide_filter(&self) -> Option<GuideFilter> {
        let mut filter = GuideFilter::any();
        if let Some(grade) = non_empty(&self.grade) {
            filter.grade = Some(grade.parse::<u8>().ok()?);
        }
        if let Some(subject) = non_empty(&self.subject) {
            filter.subject = Some(subject.to_string());
        }
        if let Some(level) = non_empty(&self.level) {
            filter.level = Some(level.parse::<Level>().ok()?);
        }
        Some(filter)
    }

    /// What the filter controls should show as chosen. Each value is parsed on its own,
    /// so one unparseable value does not clear the others.
    pub fn selection(&self) -> GuideFilter {
        GuideFilter {
            grade: non_empty(&self.grade).and_then(|g| g.parse::<u8>().ok()),
            subject: non_empty(&self.subject).map(str::to_string),
            level: non_empty(&self.level).and_then(|l| l.parse::<Level>().ok()),
        }
    }

    pub fn link_filter(&self) -> LinkFilter {
        LinkFilter {
            category: non_empty(&self.category).map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        [&self.grade, &self.subject, &self.level, &self.category]
            .into_iter()
            .all(|v| non_empty(v).is_none())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(grade: &str, subject: &str, level: &str, category: &str) -> CatalogQuery {
        let opt = |s: &str| Some(s.to_string());
        CatalogQuery {
            grade: opt(grade),
            subject: opt(subject),
            level: opt(level),
            category: opt(category),
        }
    }

    #[test]
    fn empty_values_mean_any() {
        let q = query("", " ", "", "");
        assert!(q.is_empty());
        assert_eq!(q.guide_filter(), Some(GuideFilter::any()));
        assert_eq!(q.link_filter(), LinkFilter::any());
    }

    #[test]
    fn parses_all_criteria() {
        let q = query("10", "Physics", "H", "Mathematics");
        assert_eq!(
            q.guide_filter(),
            Some(
                GuideFilter::any()
                    .grade(10)
                    .subject("Physics")
                    .level(Level::Honors)
            )
        );
        assert_eq!(q.link_filter(), LinkFilter::any().category("Mathematics"));
    }

    #[test]
    fn selection_keeps_parseable_values() {
        let q = query("ninth", "History", "AP", "");
        assert_eq!(q.guide_filter(), None);
        assert_eq!(
            q.selection(),
            GuideFilter::any()
                .subject("History")
                .level(Level::AdvancedPlacement)
        );
    }

    #[test]
    fn unparseable_values_match_nothing() {
        assert_eq!(query("ninth", "", "", "").guide_filter(), None);
        assert_eq!(query("", "", "Expert", "").guide_filter(), None);
    }
}
