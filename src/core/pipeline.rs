use crate::adapters::github::GithubClient;
use crate::core::carousel::CarouselState;
use crate::core::{ConfigProvider, Pipeline, Project, Repository, Storage};
use crate::render::markup;
use crate::utils::error::{PortfolioError, Result};
use std::time::Duration;

pub struct GithubPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: GithubClient,
}

impl<S: Storage, C: ConfigProvider> GithubPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = GithubClient::new(
            config.account(),
            config.api_base(),
            config.token().map(String::from),
            config.timeout_seconds().map(Duration::from_secs),
        )?;
        Ok(Self {
            storage,
            config,
            client,
        })
    }

    fn output_file(&self) -> String {
        format!("{}/index.html", self.config.output_path())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for GithubPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Repository>> {
        tracing::debug!("Listing repositories for {}", self.config.account());

        let repos = match self.client.list_repositories().await {
            Ok(repos) => repos,
            Err(e) => {
                tracing::error!("❌ Repository listing failed: {}", e);
                return Ok(Vec::new());
            }
        };

        let total = repos.len();
        let repos: Vec<Repository> = repos
            .into_iter()
            .filter(|repo| !repo.fork && !repo.archived)
            .collect();
        tracing::info!(
            "📊 Keeping {} of {} repositories after dropping forks and archives",
            repos.len(),
            total
        );
        Ok(repos)
    }

    async fn transform(&self, repos: Vec<Repository>) -> Result<Vec<Project>> {
        let batch_size = self.config.concurrent_requests().max(1);
        tracing::debug!(
            "Enriching {} repositories, {} requests at a time",
            repos.len(),
            batch_size
        );

        let mut projects = Vec::with_capacity(repos.len());
        for batch in repos.chunks(batch_size) {
            let mut handles = Vec::with_capacity(batch.len());
            for repo in batch {
                let client = self.client.clone();
                let repo = repo.clone();
                handles.push(tokio::spawn(async move {
                    let details = client.repo_details(&repo.name).await;
                    Project::new(repo, details)
                }));
            }
            // Join in spawn order so the page keeps the listing order.
            for handle in handles {
                let project = handle.await.map_err(|e| PortfolioError::ProcessingError {
                    message: format!("enrichment task failed: {}", e),
                })?;
                projects.push(project);
            }
        }
        Ok(projects)
    }

    async fn load(&self, projects: Vec<Project>) -> Result<String> {
        let html = if projects.is_empty() {
            tracing::warn!("No projects to showcase, rendering the empty page");
            markup::render_empty(self.config.page_title())
        } else {
            let state = CarouselState::new(projects.len(), self.config.container_width());
            tracing::debug!(
                "Rendering {} cards, {} per view",
                state.card_count(),
                state.visible_cards()
            );
            markup::render_portfolio(
                &projects,
                &state,
                self.config.page_title(),
                self.config.account(),
            )
        };

        self.storage
            .write_file("index.html", html.as_bytes())
            .await?;
        tracing::debug!("Portfolio page saved ({} bytes)", html.len());
        Ok(self.output_file())
    }

    async fn load_failure(&self) -> Result<String> {
        let html = markup::render_load_error(self.config.page_title());
        self.storage
            .write_file("index.html", html.as_bytes())
            .await?;
        Ok(self.output_file())
    }
}
