use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::debug;

use study_catalog::mcp_api::{
    FacetsResponse, GuideEntry, ListGuidesParams, ListGuidesResponse, ListLinksParams,
    ListLinksResponse,
};
use study_catalog::{Catalog, GuideFilter, Level, LinkFilter};

#[derive(Clone)]
pub struct StudyHubServer {
    catalog: Catalog,
    tool_router: ToolRouter<StudyHubServer>,
}

impl StudyHubServer {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl StudyHubServer {
    #[tool(description = "List study guides, optionally filtered by exact grade, subject, and level (S, S+, H, AP, IB).")]
    async fn list_guides(
        &self,
        Parameters(params): Parameters<ListGuidesParams>,
    ) -> Result<Json<ListGuidesResponse>, String> {
        let mut filter = GuideFilter::any();
        filter.grade = params.grade;
        filter.subject = params
            .subject
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        if let Some(level) = params.level.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            filter.level = Some(level.parse::<Level>().map_err(|e| e.to_string())?);
        }

        let guides: Vec<GuideEntry> = self
            .catalog
            .filter_guides(&filter)
            .into_iter()
            .map(GuideEntry::from)
            .collect();
        debug!(matches = guides.len(), "list_guides");

        Ok(Json(ListGuidesResponse { guides }))
    }

    #[tool(description = "List external learning resources, optionally filtered by exact category (e.g. 'Mathematics').")]
    async fn list_links(
        &self,
        Parameters(params): Parameters<ListLinksParams>,
    ) -> Result<Json<ListLinksResponse>, String> {
        let filter = LinkFilter {
            category: params
                .category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        };

        let response = ListLinksResponse::from_catalog(&self.catalog, &filter);
        debug!(matches = response.links.len(), "list_links");

        Ok(Json(response))
    }

    #[tool(description = "List the distinct grades, subjects, levels, and link categories present in the catalog.")]
    async fn list_facets(&self) -> Result<Json<FacetsResponse>, String> {
        Ok(Json(self.catalog.facets().into()))
    }
}

#[tool_handler]
impl ServerHandler for StudyHubServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "study-hub".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Study Hub catalog server. Use list_guides to find study guides by grade, \
                 subject, or level, list_links to browse external learning resources by \
                 category, and list_facets to discover the available filter values."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StudyHubServer;
    use rmcp::handler::server::wrapper::Parameters;
    use study_catalog::mcp_api::{ListGuidesParams, ListLinksParams};
    use study_catalog::Catalog;

    #[test]
    fn tools_publish_output_schemas() {
        let tools = StudyHubServer::tool_router().list_all();
        for name in ["list_guides", "list_links", "list_facets"] {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            assert!(
                tool.output_schema.is_some(),
                "tool {name} should publish output_schema"
            );
        }
    }

    #[tokio::test]
    async fn list_guides_filters_by_subject() {
        let server = StudyHubServer::new(Catalog::builtin());
        let response = server
            .list_guides(Parameters(ListGuidesParams {
                subject: Some("History".to_string()),
                ..Default::default()
            }))
            .await
            .unwrap();
        let names: Vec<&str> = response.0.guides.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["WWII Political Review"]);
        assert_eq!(response.0.guides[0].level_label, "Standard+");
    }

    #[tokio::test]
    async fn list_guides_rejects_unknown_level() {
        let server = StudyHubServer::new(Catalog::builtin());
        let result = server
            .list_guides(Parameters(ListGuidesParams {
                level: Some("Expert".to_string()),
                ..Default::default()
            }))
            .await;
        let Err(err) = result else {
            panic!("expected an unknown level error");
        };
        assert!(err.contains("unknown level"));
    }

    #[tokio::test]
    async fn list_facets_reports_values_in_catalog_order() {
        let server = StudyHubServer::new(Catalog::builtin());
        let response = server.list_facets().await.unwrap();
        assert_eq!(response.0.grades, vec![9, 10]);
        assert_eq!(
            response.0.categories,
            vec!["Mathematics", "Geography", "All Subjects", "General"]
        );
        assert_eq!(response.0.subjects.first().map(String::as_str), Some("Chemistry"));
    }

    #[tokio::test]
    async fn list_links_groups_by_category() {
        let server = StudyHubServer::new(Catalog::builtin());
        let response = server
            .list_links(Parameters(ListLinksParams {
                category: Some("Mathematics".to_string()),
            }))
            .await
            .unwrap();
        assert_eq!(response.0.links.len(), 1);
        assert_eq!(response.0.links[0].name, "Desmos");
        assert_eq!(response.0.categories.len(), 1);
        assert_eq!(response.0.categories[0].category, "Mathematics");

        let empty = server
            .list_links(Parameters(ListLinksParams {
                category: Some("Astronomy".to_string()),
            }))
            .await
            .unwrap();
        assert!(empty.0.links.is_empty());
        assert!(empty.0.categories.is_empty());
    }
}
