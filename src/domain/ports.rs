use crate::domain::model::{Project, Repository};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn account(&self) -> &str;
    fn api_base(&self) -> &str;
    fn token(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn page_title(&self) -> &str;
    fn container_width(&self) -> f64;
    fn concurrent_requests(&self) -> usize;
    /// Per-request timeout. `None` leaves the transport default in place.
    fn timeout_seconds(&self) -> Option<u64>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// List the repositories to showcase. Listing failures are absorbed here:
    /// an unreachable or unhappy API yields an empty list, not an error.
    async fn extract(&self) -> Result<Vec<Repository>>;

    /// Enrich every repository into a render-ready project, preserving the
    /// input order. Individual enrichment failures degrade to empty details.
    async fn transform(&self, repos: Vec<Repository>) -> Result<Vec<Project>>;

    /// Render the portfolio document and write it out; returns the path of
    /// the written file.
    async fn load(&self, projects: Vec<Project>) -> Result<String>;

    /// Fallback output for when the normal sequence fails unexpectedly.
    async fn load_failure(&self) -> Result<String>;
}
