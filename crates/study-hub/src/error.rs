#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("mount error: {0}")]
    Mount(String),

    #[error("render error: {0}")]
    Render(#[from] askama::Error),

    #[error("telemetry error: {0}")]
    Telemetry(#[from] reqwest::Error),

    #[error(transparent)]
    Catalog(#[from] study_catalog::error::CatalogError),
}
