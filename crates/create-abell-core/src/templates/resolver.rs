//! Template name/alias resolution

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Template used when none is given
pub const DEFAULT_TEMPLATE: &str = "default";

const GITHUB: &str = "https://github.com";

/// Known template aliases
const ALIASES: &[(&str, Alias)] = &[
    ("default", Alias::Bundled("default")),
    ("minima", Alias::GitHub("abelljs/abell-starter-minima")),
];

#[derive(Debug, Clone, Copy)]
enum Alias {
    Bundled(&'static str),
    GitHub(&'static str),
}

/// Where a template's files come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Directory shipped with the CLI, by name
    Bundled(String),
    /// Directory on the local filesystem
    Local(PathBuf),
    /// Git repository, cloned into the destination
    Git(String),
    /// Zip archive downloaded over HTTP(S)
    Archive(Url),
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Bundled(name) => write!(f, "{}", name),
            TemplateSource::Local(path) => write!(f, "{}", path.display()),
            TemplateSource::Git(url) => write!(f, "{}", url),
            TemplateSource::Archive(url) => write!(f, "{}", url),
        }
    }
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{name}' not found. Known templates: {known}. A URL, GitHub owner/repo or local directory also works.")]
    Unknown { name: String, known: String },
    #[error("Invalid template URL '{0}': {1}")]
    InvalidUrl(String, url::ParseError),
}

fn github(repo: &str) -> TemplateSource {
    TemplateSource::Git(format!("{}/{}", GITHUB, repo.trim_end_matches(".git")))
}

fn is_github_shorthand(value: &str) -> bool {
    let mut parts = value.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(repo), None) => [owner, repo].iter().all(|p| {
            !p.is_empty()
                && !p.chars().all(|c| c == '.')
                && p.chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        }),
        _ => false,
    }
}

/// Resolve a template identifier relative to `base` (used for local paths).
pub fn resolve_in(base: &Path, template: Option<&str>) -> Result<TemplateSource, TemplateError> {
    let name = template.map(str::trim).unwrap_or(DEFAULT_TEMPLATE);

    if let Some((_, alias)) = ALIASES.iter().find(|(alias, _)| *alias == name) {
        return Ok(match alias {
            Alias::Bundled(dir) => TemplateSource::Bundled(dir.to_string()),
            Alias::GitHub(repo) => github(repo),
        });
    }

    if name.starts_with("http://") || name.starts_with("https://") {
        let url = Url::parse(name).map_err(|e| TemplateError::InvalidUrl(name.to_string(), e))?;
        if url.path().ends_with(".zip") {
            return Ok(TemplateSource::Archive(url));
        }
        return Ok(TemplateSource::Git(name.to_string()));
    }

    if name.starts_with("git@") {
        return Ok(TemplateSource::Git(name.to_string()));
    }

    if let Some(repo) = name.strip_prefix("github:") {
        if is_github_shorthand(repo) {
            return Ok(github(repo));
        }
    }

    let local = base.join(name);
    if !name.is_empty() && local.is_dir() {
        return Ok(TemplateSource::Local(local));
    }

    if is_github_shorthand(name) {
        return Ok(github(name));
    }

    Err(TemplateError::Unknown {
        name: name.to_string(),
        known: ALIASES
            .iter()
            .map(|(alias, _)| *alias)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Resolve a template identifier, falling back to the default template
pub fn get_template(template: Option<&str>) -> anyhow::Result<TemplateSource> {
    let cwd = std::env::current_dir()?;
    Ok(resolve_in(&cwd, template)?)
}
