use std::fmt;

use thiserror::Error;

use crate::record::{self, Record};

pub const DEFAULT_SOURCE: &str = "./job_postings_dataset.csv";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    FilePath(String),
    Url(String),
}

impl DataSource {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        let lower = trimmed.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::FilePath(crate::config::expand_tilde_string(trimmed))
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::FilePath(DEFAULT_SOURCE.to_string())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilePath(path) => write!(f, "{path}"),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset file: {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch dataset: {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse dataset as CSV: {source}")]
    Parse {
        #[source]
        source: csv::Error,
    },
}

pub async fn read_text(source: &DataSource) -> Result<String, LoadError> {
    match source {
        DataSource::FilePath(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::FileRead {
                    path: path.clone(),
                    source,
                })
        }
        DataSource::Url(url) => {
            let fetch_err = |source| LoadError::Fetch {
                url: url.clone(),
                source,
            };
            let response = reqwest::get(url.as_str()).await.map_err(fetch_err)?;
            let response = response.error_for_status().map_err(fetch_err)?;
            response.text().await.map_err(fetch_err)
        }
    }
}

pub async fn load_records(source: &DataSource) -> Result<Vec<Record>, LoadError> {
    log::info!("loading dataset from {source}");
    let text = read_text(source).await?;
    record::parse_records(&text)
}
