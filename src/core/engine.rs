use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct PortfolioEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> PortfolioEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(enabled),
        }
    }

    /// Runs the whole build. A failed stage is not a crash: the engine writes
    /// the fallback error page and then reports the original error.
    pub async fn run(&self) -> Result<String> {
        match self.build().await {
            Ok(output_path) => {
                self.monitor.log_final_stats();
                Ok(output_path)
            }
            Err(e) => {
                tracing::error!("❌ Portfolio build failed: {}", e);
                match self.pipeline.load_failure().await {
                    Ok(path) => tracing::warn!("⚠️ Fallback error page written to {}", path),
                    Err(write_err) => {
                        tracing::error!("❌ Could not write the fallback page: {}", write_err)
                    }
                }
                Err(e)
            }
        }
    }

    async fn build(&self) -> Result<String> {
        println!("Building the portfolio page...");

        println!("Fetching repositories...");
        let repos = self.pipeline.extract().await?;
        println!("Found {} repositories", repos.len());
        self.monitor.log_stats("extract");

        println!("Collecting project details...");
        let projects = self.pipeline.transform(repos).await?;
        println!("Prepared {} project cards", projects.len());
        self.monitor.log_stats("transform");

        println!("Rendering...");
        let output_path = self.pipeline.load(projects).await?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_stats("load");

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Project, RepoDetails, Repository};
    use crate::utils::error::PortfolioError;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn sample_repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            html_url: format!("https://github.com/octocat/{}", name),
            description: None,
            fork: false,
            archived: false,
        }
    }

    struct HappyPipeline;

    #[async_trait::async_trait]
    impl Pipeline for HappyPipeline {
        async fn extract(&self) -> Result<Vec<Repository>> {
            Ok(vec![sample_repo("alpha"), sample_repo("beta")])
        }

        async fn transform(&self, repos: Vec<Repository>) -> Result<Vec<Project>> {
            Ok(repos
                .into_iter()
                .map(|r| Project::new(r, RepoDetails::default()))
                .collect())
        }

        async fn load(&self, projects: Vec<Project>) -> Result<String> {
            assert_eq!(projects.len(), 2);
            Ok("out/index.html".to_string())
        }

        async fn load_failure(&self) -> Result<String> {
            panic!("must not run on a successful build");
        }
    }

    struct FailingPipeline {
        fallback_written: Arc<AtomicBool>,
        fallback_fails: bool,
    }

    #[async_trait::async_trait]
    impl Pipeline for FailingPipeline {
        async fn extract(&self) -> Result<Vec<Repository>> {
            Ok(vec![sample_repo("alpha")])
        }

        async fn transform(&self, _repos: Vec<Repository>) -> Result<Vec<Project>> {
            Err(PortfolioError::ProcessingError {
                message: "enrichment blew up".to_string(),
            })
        }

        async fn load(&self, _projects: Vec<Project>) -> Result<String> {
            panic!("must not run after a failed transform");
        }

        async fn load_failure(&self) -> Result<String> {
            if self.fallback_fails {
                return Err(PortfolioError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "disk says no",
                )));
            }
            self.fallback_written.store(true, Ordering::SeqCst);
            Ok("out/index.html".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_returns_output_path() {
        let engine = PortfolioEngine::new(HappyPipeline);
        let output = engine.run().await.unwrap();
        assert_eq!(output, "out/index.html");
    }

    #[tokio::test]
    async fn test_failed_stage_writes_fallback_and_reports_error() {
        let written = Arc::new(AtomicBool::new(false));
        let pipeline = FailingPipeline {
            fallback_written: Arc::clone(&written),
            fallback_fails: false,
        };
        let engine = PortfolioEngine::new(pipeline);

        let result = engine.run().await;

        assert!(written.load(Ordering::SeqCst));
        match result {
            Err(PortfolioError::ProcessingError { message }) => {
                assert!(message.contains("enrichment blew up"));
            }
            other => panic!("expected the transform error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_original_error_survives_fallback_failure() {
        let pipeline = FailingPipeline {
            fallback_written: Arc::new(AtomicBool::new(false)),
            fallback_fails: true,
        };
        let engine = PortfolioEngine::new(pipeline);

        let result = engine.run().await;

        // The transform error is reported, not the later write error.
        assert!(matches!(
            result,
            Err(PortfolioError::ProcessingError { .. })
        ));
    }
}
