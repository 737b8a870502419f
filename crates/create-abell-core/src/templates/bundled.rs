//! Templates compiled into the binary

use anyhow::{anyhow, Context, Result};
use rust_embed::RustEmbed;
use std::path::Path;
use tokio::fs;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates"]
struct BundledTemplates;

/// Files of the bundled template `name`, relative to its root, sorted
fn template_files(name: &str) -> Vec<String> {
    let prefix = format!("{}/", name);
    let mut files: Vec<String> = BundledTemplates::iter()
        .filter_map(|path| path.strip_prefix(prefix.as_str()).map(str::to_string))
        .collect();
    files.sort();
    files
}

/// Write the bundled template `name` into `target_dir`.
///
/// Returns the written files as `/`-separated relative paths.
pub async fn write_template(name: &str, target_dir: &Path) -> Result<Vec<String>> {
    let files = template_files(name);
    if files.is_empty() {
        anyhow::bail!("Bundled template not found: {}", name);
    }

    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    for relative in &files {
        let file = BundledTemplates::get(&format!("{}/{}", name, relative))
            .ok_or_else(|| anyhow!("Bundled template file missing: {}/{}", name, relative))?;
        let target_path = target_dir.join(relative);

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target_path, file.data.as_ref())
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_template_matches_sources() {
        let dest = tempfile::TempDir::new().unwrap();
        let written = write_template("default", dest.path()).await.unwrap();

        assert!(written.contains(&"package.json".to_string()));
        assert!(written.contains(&"components/Navbar.abell".to_string()));

        let sources = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/default");
        for relative in &written {
            assert_eq!(
                std::fs::read(dest.path().join(relative)).unwrap(),
                std::fs::read(sources.join(relative)).unwrap(),
                "{} differs from the template source",
                relative
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_template_writes_nothing() {
        let dest = tempfile::TempDir::new().unwrap();
        let target = dest.path().join("site");

        let err = write_template("no-such-template", &target).await.unwrap_err();
        assert!(err.to_string().contains("Bundled template not found"));
        assert!(!target.exists());
    }

    #[test]
    fn test_prefix_matches_whole_name() {
        // "def" must not pick up files of "default"
        assert!(template_files("def").is_empty());
    }
}
