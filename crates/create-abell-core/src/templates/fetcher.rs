//! Remote template fetching
//!
//! Two kinds of remote templates are supported:
//! - Zip archives over HTTP(S), downloaded and extracted in memory
//! - Git repositories, shallow-cloned straight into the destination
//!
//! Archives produced by GitHub ("Download ZIP") wrap everything in a single
//! `<repo>-<branch>/` directory, which is stripped on extraction.

use crate::utils;
use anyhow::{Context, Result};
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use tokio::fs;
use url::Url;
use zip::ZipArchive;

/// Downloads template archives
pub struct TemplateFetcher {
    client: reqwest::Client,
}

impl TemplateFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Download a zip archive
    pub async fn download(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch template from {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Failed to fetch template from {}: HTTP {}",
                url,
                response.status()
            );
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Download a zip archive and extract it into `target_dir`
    pub async fn fetch_archive(&self, url: &Url, target_dir: &Path) -> Result<Vec<String>> {
        let zip_bytes = self.download(url).await?;
        let files = read_archive(&zip_bytes)
            .with_context(|| format!("Failed to read zip archive from {}", url))?;
        write_files(target_dir, files).await
    }
}

/// Extract the files of a zip archive into memory, keyed by relative path.
///
/// Entries that would escape the destination are rejected.
pub fn read_archive(zip_bytes: &[u8]) -> Result<Vec<(PathBuf, Vec<u8>)>> {
    let mut archive = ZipArchive::new(Cursor::new(zip_bytes))?;
    let mut files = Vec::new();

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;

        // Skip directories
        if file.is_dir() {
            continue;
        }

        let path = file
            .enclosed_name()
            .ok_or_else(|| anyhow::anyhow!("Unsafe path in archive: {}", file.name()))?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        files.push((path, contents));
    }

    Ok(strip_common_root(files))
}

/// Drop a top-level directory shared by every entry
fn strip_common_root(files: Vec<(PathBuf, Vec<u8>)>) -> Vec<(PathBuf, Vec<u8>)> {
    let root = match files.first().and_then(|(p, _)| p.components().next()) {
        Some(root) => PathBuf::from(root.as_os_str()),
        None => return files,
    };

    let shared = files
        .iter()
        .all(|(p, _)| p.starts_with(&root) && p.components().count() > 1);
    if !shared {
        return files;
    }

    files
        .into_iter()
        .map(|(p, contents)| {
            let stripped = p.strip_prefix(&root).map(Path::to_path_buf).unwrap_or(p);
            (stripped, contents)
        })
        .collect()
}

async fn write_files(target_dir: &Path, files: Vec<(PathBuf, Vec<u8>)>) -> Result<Vec<String>> {
    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    let mut written = Vec::with_capacity(files.len());
    for (relative, contents) in files {
        let target_path = target_dir.join(&relative);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target_path, &contents)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
        written.push(relative.to_string_lossy().replace('\\', "/"));
    }

    Ok(written)
}

/// Shallow-clone a git repository into `target_dir`.
///
/// Returns the top-level entries of the clone, `.git` excluded.
pub async fn clone_repository(url: &str, target_dir: &Path) -> Result<Vec<String>> {
    let parent = target_dir
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let target = target_dir.to_string_lossy();

    utils::run_program("git", &["clone", "--depth", "1", url, target.as_ref()], parent)
        .await
        .with_context(|| format!("Failed to clone template repository {}", url))?;

    let mut entries = Vec::new();
    let mut dir = fs::read_dir(target_dir).await?;
    while let Some(entry) = dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().to_string();
        if name != ".git" {
            entries.push(name);
        }
    }
    entries.sort();

    Ok(entries)
}
