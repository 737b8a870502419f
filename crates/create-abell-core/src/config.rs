//! Runtime configuration

use std::path::PathBuf;

/// Environment variable overriding where bundled templates are read from
pub const TEMPLATE_DIR_ENV: &str = "CREATE_ABELL_TEMPLATE_DIR";

/// Settings shared by the template fetcher and the create flow
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory read instead of the templates compiled into the binary,
    /// one sub-directory per template
    pub templates_dir: Option<PathBuf>,
    /// User agent for template downloads
    pub user_agent: String,
}

impl Config {
    /// Build the config from an optional `--template-dir` flag, then the
    /// environment. Without either, the embedded templates are used.
    pub fn new(template_dir: Option<PathBuf>, cli_version: &str) -> Self {
        let templates_dir =
            template_dir.or_else(|| std::env::var_os(TEMPLATE_DIR_ENV).map(PathBuf::from));

        Self {
            templates_dir,
            user_agent: format!("create-abell/{}", cli_version),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, crate::DEFAULT_CLI_VERSION)
    }
}
