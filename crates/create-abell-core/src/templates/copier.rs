//! Recursive template directory copying

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Copy every file under `source` into `target_dir`, creating directories as
/// needed. Returns the copied files as `/`-separated relative paths.
///
/// When `target_dir` lies inside `source`, that subtree is not copied.
pub async fn copy_dir(source: &Path, target_dir: &Path) -> Result<Vec<String>> {
    if !source.is_dir() {
        anyhow::bail!("Template directory not found: {}", source.display());
    }

    // Ensure target directory exists
    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    let nested_target = nested_target(source, target_dir).await?;
    let mut copied_files = Vec::new();

    let walker = WalkDir::new(source)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| match (&nested_target, e.path().strip_prefix(source)) {
            (Some(nested), Ok(relative)) => !relative.starts_with(nested),
            _ => true,
        });

    for entry in walker {
        let entry = entry
            .with_context(|| format!("Failed to read template directory {}", source.display()))?;
        let relative = entry.path().strip_prefix(source)?;
        let target_path = target_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .with_context(|| format!("Failed to create directory: {}", target_path.display()))?;
            continue;
        }

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::copy(entry.path(), &target_path)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        copied_files.push(
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
        );
    }

    Ok(copied_files)
}

/// `target_dir` relative to `source`, if it lies inside it
async fn nested_target(source: &Path, target_dir: &Path) -> Result<Option<PathBuf>> {
    let source_root = fs::canonicalize(source)
        .await
        .with_context(|| format!("Failed to resolve {}", source.display()))?;
    let target_root = fs::canonicalize(target_dir)
        .await
        .with_context(|| format!("Failed to resolve {}", target_dir.display()))?;
    Ok(target_root
        .strip_prefix(&source_root)
        .ok()
        .map(Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Map of relative path -> contents (None for directories)
    fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .map(|e| e.unwrap())
            .map(|e| {
                let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
                let contents = if e.file_type().is_file() {
                    Some(std::fs::read(e.path()).unwrap())
                } else {
                    None
                };
                (rel, contents)
            })
            .collect()
    }

    fn sample_template(root: &Path) {
        std::fs::create_dir_all(root.join("src/components")).unwrap();
        std::fs::create_dir_all(root.join("public/empty")).unwrap();
        std::fs::write(root.join("package.json"), r#"{"name": "starter"}"#).unwrap();
        std::fs::write(root.join(".gitignore"), "node_modules\n").unwrap();
        std::fs::write(root.join("src/index.abell"), "<h1>{{ 1 + 1 }}</h1>").unwrap();
        std::fs::write(root.join("src/components/Nav.abell"), "<nav></nav>").unwrap();
        std::fs::write(root.join("public/logo.png"), [0x89, 0x50, 0x4e, 0x47, 0x00, 0xff]).unwrap();
    }

    #[tokio::test]
    async fn test_copy_produces_identical_tree() {
        let source = tempfile::TempDir::new().unwrap();
        let dest = tempfile::TempDir::new().unwrap();
        sample_template(source.path());

        let target = dest.path().join("my-site");
        copy_dir(source.path(), &target).await.unwrap();

        assert_eq!(snapshot(source.path()), snapshot(&target));
    }

    #[tokio::test]
    async fn test_copy_reports_files_only() {
        let source = tempfile::TempDir::new().unwrap();
        let dest = tempfile::TempDir::new().unwrap();
        sample_template(source.path());

        let copied = copy_dir(source.path(), dest.path()).await.unwrap();

        assert_eq!(copied.len(), 5);
        assert!(copied.contains(&"src/components/Nav.abell".to_string()));
        assert!(copied.contains(&".gitignore".to_string()));
        assert!(!copied.contains(&"public/empty".to_string()));
    }

    #[tokio::test]
    async fn test_missing_source_fails() {
        let dest = tempfile::TempDir::new().unwrap();
        let err = copy_dir(&dest.path().join("nope"), &dest.path().join("out"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Template directory not found"));
        assert!(!dest.path().join("out").exists());
    }

    #[tokio::test]
    async fn test_target_inside_source_is_not_copied() {
        let source = tempfile::TempDir::new().unwrap();
        std::fs::write(source.path().join("a.json"), "{}").unwrap();
        let target = source.path().join("z-site");

        let copied = copy_dir(source.path(), &target).await.unwrap();

        assert_eq!(copied, vec!["a.json"]);
        assert!(!target.join("z-site").exists());
        assert_eq!(std::fs::read_to_string(target.join("a.json")).unwrap(), "{}");
    }
}
