use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::filter::{Facets, LinkFilter};
use crate::model::{ExternalLink, Guide, Level};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListGuidesParams {
    /// School grade to match exactly (9-12). Omit for any grade.
    pub grade: Option<u8>,
    /// Subject label to match exactly, e.g. "Chemistry". Omit for any subject.
    pub subject: Option<String>,
    /// Level code: one of "S", "S+", "H", "AP", "IB". Omit for any level.
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListLinksParams {
    /// Category label to match exactly, e.g. "Mathematics". Omit for all links.
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GuideEntry {
    pub grade: u8,
    pub subject: String,
    pub level: Level,
    pub level_label: String,
    pub name: String,
    pub url: String,
}

impl From<&Guide> for GuideEntry {
    fn from(guide: &Guide) -> Self {
        Self {
            grade: guide.grade,
            subject: guide.subject.to_string(),
            level: guide.level,
            level_label: guide.level.label().to_string(),
            name: guide.name.to_string(),
            url: guide.url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LinkEntry {
    pub name: String,
    pub description: String,
    pub category: String,
    pub url: String,
    pub color: String,
}

impl From<&ExternalLink> for LinkEntry {
    fn from(link: &ExternalLink) -> Self {
        Self {
            name: link.name.to_string(),
            description: link.description.to_string(),
            category: link.category.to_string(),
            url: link.url.to_string(),
            color: link.color.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListGuidesResponse {
    pub guides: Vec<GuideEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LinkCategoryGroup {
    pub category: String,
    pub links: Vec<LinkEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListLinksResponse {
    pub links: Vec<LinkEntry>,
    /// The same links grouped by category, in first-appearance order.
    pub categories: Vec<LinkCategoryGroup>,
}

impl ListLinksResponse {
    pub fn from_catalog(catalog: &Catalog, filter: &LinkFilter) -> Self {
        let categories = catalog
            .links_by_category(filter)
            .into_iter()
            .map(|(category, links)| LinkCategoryGroup {
                category: category.to_string(),
                links: links.into_iter().map(LinkEntry::from).collect(),
            })
            .collect();
        let links = catalog
            .filter_links(filter)
            .into_iter()
            .map(LinkEntry::from)
            .collect();
        Self { links, categories }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FacetsResponse {
    pub grades: Vec<u8>,
    pub subjects: Vec<String>,
    pub levels: Vec<Level>,
    pub categories: Vec<String>,
}

impl From<Facets> for FacetsResponse {
    fn from(facets: Facets) -> Self {
        Self {
            grades: facets.grades,
            subjects: facets.subjects.into_iter().map(str::to_string).collect(),
            levels: facets.levels,
            categories: facets.categories.into_iter().map(str::to_string).collect(),
        }
    }
}
