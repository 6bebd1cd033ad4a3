/// HTML rendering of the catalog page.
///
/// The page is a plain shell whose mount element holds the filter form, the guides
/// grouped by grade, and the external resources grouped by category.
use askama::Template;
use sha2::{Digest, Sha256};

use study_catalog::{Catalog, ExternalLink, Guide, GuideFilter, Level, LinkFilter};

use crate::error::AppError;
use crate::query::CatalogQuery;

/// Page-level settings taken from config.
#[derive(Debug, Clone)]
pub struct Shell {
    pub title: String,
    pub mount_id: String,
}

pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub struct GradeSection {
    pub grade: u8,
    pub guides: Vec<&'static Guide>,
}

pub struct CategorySection {
    pub category: &'static str,
    pub links: Vec<&'static ExternalLink>,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub mount_id: &'a str,
    pub grade_options: Vec<SelectOption>,
    pub subject_options: Vec<SelectOption>,
    pub level_options: Vec<SelectOption>,
    pub category_options: Vec<SelectOption>,
    pub guide_sections: Vec<GradeSection>,
    pub link_sections: Vec<CategorySection>,
    pub guide_count: usize,
    pub link_count: usize,
}

pub fn render_index(catalog: &Catalog, shell: &Shell, query: &CatalogQuery) -> Result<String, AppError> {
    let guide_filter = query.guide_filter();
    let link_filter = query.link_filter();

    let guide_sections: Vec<GradeSection> = match &guide_filter {
        Some(filter) => catalog
            .guides_by_grade(filter)
            .into_iter()
            .map(|(grade, guides)| GradeSection { grade, guides })
            .collect(),
        None => Vec::new(),
    };
    let link_sections: Vec<CategorySection> = catalog
        .links_by_category(&link_filter)
        .into_iter()
        .map(|(category, links)| CategorySection { category, links })
        .collect();

    let selected = query.selection();
    let facets = catalog.facets();

    let template = IndexTemplate {
        title: &shell.title,
        mount_id: &shell.mount_id,
        grade_options: facets
            .grades
            .iter()
            .map(|g| option(g.to_string(), format!("Grade {g}"), selected.grade == Some(*g)))
            .collect(),
        subject_options: facets
            .subjects
            .iter()
            .map(|s| option(s.to_string(), s.to_string(), selected.subject.as_deref() == Some(*s)))
            .collect(),
        level_options: level_options(&selected),
        category_options: category_options(&facets.categories, &link_filter),
        guide_count: guide_sections.iter().map(|s| s.guides.len()).sum(),
        link_count: link_sections.iter().map(|s| s.links.len()).sum(),
        guide_sections,
        link_sections,
    };
    Ok(template.render()?)
}

/// Strong validator over the rendered body.
pub fn etag(body: &str) -> String {
    let hash = Sha256::digest(body.as_bytes());
    format!("\"{:x}\"", hash)
}

/// `If-None-Match` check for GET: `*` matches, and weak validators compare by their
/// opaque tag.
pub fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    let strip_weak = |tag: &str| tag.strip_prefix("W/").unwrap_or(tag).to_string();
    let current = strip_weak(etag);
    if_none_match
        .split(',')
        .map(str::trim)
        .any(|tag| tag == "*" || strip_weak(tag) == current)
}

fn option(value: String, label: String, selected: bool) -> SelectOption {
    SelectOption {
        value,
        label,
        selected,
    }
}

// All five levels are offered even if no guide uses one yet.
fn level_options(selected: &GuideFilter) -> Vec<SelectOption> {
    Level::ALL
        .into_iter()
        .map(|level| {
            option(
                level.code().to_string(),
                format!("{} ({})", level.label(), level.code()),
                selected.level == Some(level),
            )
        })
        .collect()
}

fn category_options(categories: &[&'static str], selected: &LinkFilter) -> Vec<SelectOption> {
    categories
        .iter()
        .map(|c| option(c.to_string(), c.to_string(), selected.category.as_deref() == Some(*c)))
        .collect()
}
