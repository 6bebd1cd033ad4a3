/// Record filters for the guide and link catalogs.
///
/// Every criterion is either `None` ("any") or an exact value. Filtering preserves the
/// source order and never fails: no matches is simply an empty sequence.
use serde::Serialize;

use crate::model::{ExternalLink, Guide, Level};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideFilter {
    pub grade: Option<u8>,
    pub subject: Option<String>,
    pub level: Option<Level>,
}

impl GuideFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn grade(mut self, grade: u8) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn is_any(&self) -> bool {
        self.grade.is_none() && self.subject.is_none() && self.level.is_none()
    }

    pub fn matches(&self, guide: &Guide) -> bool {
        self.grade.is_none_or(|grade| guide.grade == grade)
            && self
                .subject
                .as_deref()
                .is_none_or(|subject| guide.subject == subject)
            && self.level.is_none_or(|level| guide.level == level)
    }

    /// Lazily yield matching guides in source order.
    pub fn apply<'a>(&'a self, guides: &'a [Guide]) -> impl Iterator<Item = &'a Guide> + 'a {
        guides.iter().filter(move |g| self.matches(g))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkFilter {
    pub category: Option<String>,
}

impl LinkFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches(&self, link: &ExternalLink) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| link.category == category)
    }

    pub fn apply<'a>(
        &'a self,
        links: &'a [ExternalLink],
    ) -> impl Iterator<Item = &'a ExternalLink> + 'a {
        links.iter().filter(move |l| self.matches(l))
    }
}

/// Distinct values present in the catalog, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub grades: Vec<u8>,
    pub subjects: Vec<&'static str>,
    pub levels: Vec<Level>,
    pub categories: Vec<&'static str>,
}

impl Facets {
    pub fn collect(guides: &[Guide], links: &[ExternalLink]) -> Self {
        Self {
            grades: distinct(guides.iter().map(|g| g.grade)),
            subjects: distinct(guides.iter().map(|g| g.subject)),
            levels: distinct(guides.iter().map(|g| g.level)),
            categories: distinct(links.iter().map(|l| l.category)),
        }
    }
}

fn distinct<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Group records by a key, keeping groups and their members in first-appearance order.
pub fn group_by<'a, T, K, F>(records: impl IntoIterator<Item = &'a T>, key: F) -> Vec<(K, Vec<&'a T>)>
where
    T: 'a,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();
    for record in records {
        let k = key(record);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(record),
            None => groups.push((k, vec![record])),
        }
    }
    groups
}
