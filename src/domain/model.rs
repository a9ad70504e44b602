use serde::{Deserialize, Serialize};

/// A repository as returned by the GitHub list endpoint. Only the fields the
/// portfolio consumes are kept; everything else in the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
}

/// Per-repository enrichment: language names from the languages endpoint and
/// keyword tags read out of a manifest file. Both lists may be empty; a
/// failed lookup degrades to exactly this empty shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoDetails {
    pub languages: Vec<String>,
    pub dependencies: Vec<String>,
}

/// Render-ready composite of a repository and its enrichment. Derived once,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub repository: Repository,
    pub details: RepoDetails,
}

impl Project {
    pub fn new(repository: Repository, details: RepoDetails) -> Self {
        Self {
            repository,
            details,
        }
    }

    /// Combined badge list: languages first (already sorted by the client),
    /// then manifest keywords, duplicates dropped at first occurrence.
    pub fn technologies(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for tech in self
            .details
            .languages
            .iter()
            .chain(self.details.dependencies.iter())
        {
            if !seen.contains(&tech.as_str()) {
                seen.push(tech.as_str());
            }
        }
        seen
    }
}

/// Contents-endpoint payload; `content` is base64 with embedded line breaks.
#[derive(Debug, Deserialize)]
pub struct ContentsResponse {
    pub content: String,
}

/// The slice of a manifest file the portfolio cares about.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}
