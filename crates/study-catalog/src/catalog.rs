use tracing::debug;

use crate::data::{EXTERNAL_LINKS, GUIDES};
use crate::error::CatalogError;
use crate::filter::{group_by, Facets, GuideFilter, LinkFilter};
use crate::model::{ExternalLink, Guide};
use crate::validate;

/// Read-only view over the guide and link tables.
///
/// Cheap to copy; every query borrows from the `'static` tables.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    guides: &'static [Guide],
    links: &'static [ExternalLink],
}

impl Catalog {
    pub fn new(guides: &'static [Guide], links: &'static [ExternalLink]) -> Self {
        Self { guides, links }
    }

    /// The compiled-in tables.
    pub fn builtin() -> Self {
        Self::new(&GUIDES, &EXTERNAL_LINKS)
    }

    pub fn guides(&self) -> &'static [Guide] {
        self.guides
    }

    pub fn links(&self) -> &'static [ExternalLink] {
        self.links
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        validate::validate_guides(self.guides)?;
        validate::validate_links(self.links)?;
        debug!(
            guides = self.guides.len(),
            links = self.links.len(),
            "catalog validated"
        );
        Ok(())
    }

    pub fn filter_guides(&self, filter: &GuideFilter) -> Vec<&'static Guide> {
        self.guides.iter().filter(|g| filter.matches(g)).collect()
    }

    pub fn filter_links(&self, filter: &LinkFilter) -> Vec<&'static ExternalLink> {
        self.links.iter().filter(|l| filter.matches(l)).collect()
    }

    pub fn guides_by_grade(&self, filter: &GuideFilter) -> Vec<(u8, Vec<&'static Guide>)> {
        group_by(self.filter_guides(filter), |g| g.grade)
    }

    pub fn links_by_category(
        &self,
        filter: &LinkFilter,
    ) -> Vec<(&'static str, Vec<&'static ExternalLink>)> {
        group_by(self.filter_links(filter), |l| l.category)
    }

    pub fn facets(&self) -> Facets {
        Facets::collect(self.guides, self.links)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
