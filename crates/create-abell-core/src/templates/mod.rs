//! Template resolution and scaffolding
//!
//! This module provides:
//! - Template selection from an alias, URL, GitHub shorthand or local path
//! - Templates compiled into the binary, with an on-disk override
//! - Recursive copying of local templates
//! - Fetching remote templates (zip archives and git repositories)

pub mod bundled;
pub mod copier;
pub mod fetcher;
pub mod resolver;

use crate::config::Config;
use anyhow::Result;
use std::path::Path;

pub use copier::copy_dir;
pub use fetcher::TemplateFetcher;
pub use resolver::{get_template, TemplateError, TemplateSource, DEFAULT_TEMPLATE};

/// Copy the resolved template into `project_path`.
///
/// Returns the relative paths that were written. For git templates the
/// repository is cloned as a whole, so the list holds the top-level entries.
pub async fn scaffold_template(
    config: &Config,
    template: &TemplateSource,
    project_path: &Path,
) -> Result<Vec<String>> {
    match template {
        TemplateSource::Bundled(name) => match &config.templates_dir {
            Some(dir) => copier::copy_dir(&dir.join(name), project_path).await,
            None => bundled::write_template(name, project_path).await,
        },
        TemplateSource::Local(path) => copier::copy_dir(path, project_path).await,
        TemplateSource::Archive(url) => {
            TemplateFetcher::new(&config.user_agent)
                .fetch_archive(url, project_path)
                .await
        }
        TemplateSource::Git(url) => fetcher::clone_repository(url, project_path).await,
    }
}
