//! Project name and destination resolution

use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name suggested when the user is prompted for one
pub const DEFAULT_PROJECT_NAME: &str = "my-abell-site";

/// Where and under which name the project is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Human-readable name, also written to package.json
    pub display_name: String,
    /// Absolute destination directory
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project name cannot be empty")]
    EmptyName,
    #[error("Directory {0} already exists and is not empty")]
    NotEmpty(PathBuf),
}

/// Turn a display name into a directory name: whitespace runs become `-` and
/// letters are lowercased.
pub fn to_directory_name(display_name: &str) -> String {
    display_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Resolve project info against an explicit base directory.
///
/// The name may carry parent directories (`Work/My Blog`, `/srv/Sites/blog`).
/// Only the last component is turned into a directory name; the parent part
/// is used as written, with `\` read as `/`.
///
/// Fails when the name is empty after normalization or when the destination
/// already holds files.
pub fn resolve_in(base: &Path, raw_name: &str) -> Result<ProjectInfo> {
    let display_name = raw_name.trim().to_string();
    let normalized = display_name.replace('\\', "/");
    let normalized = normalized.trim_end_matches('/');
    let (parent, leaf) = match normalized.rsplit_once('/') {
        Some(("", leaf)) => (Some("/"), leaf),
        Some((parent, leaf)) => (Some(parent), leaf),
        None => (None, normalized),
    };

    let dir_name = to_directory_name(leaf);
    if dir_name.is_empty() || dir_name == "." {
        return Err(ProjectError::EmptyName.into());
    }

    // Joining an absolute parent replaces `base`
    let path = match parent {
        Some(parent) => base.join(parent).join(dir_name),
        None => base.join(dir_name),
    };

    if is_non_empty_dir(&path) {
        return Err(ProjectError::NotEmpty(path).into());
    }

    Ok(ProjectInfo { display_name, path })
}

/// Resolve project info from an optional CLI argument, asking `prompt` for a
/// name when the argument is absent
pub fn get_project_info<F>(name_arg: Option<&str>, prompt: F) -> Result<ProjectInfo>
where
    F: FnOnce() -> Result<String>,
{
    let raw_name = match name_arg {
        Some(name) => name.to_string(),
        None => prompt()?,
    };
    let cwd = std::env::current_dir()?;
    resolve_in(&cwd, &raw_name)
}

fn is_non_empty_dir(path: &Path) -> bool {
    path.is_dir()
        && std::fs::read_dir(path)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false)
}
