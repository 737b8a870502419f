//! Path display helpers

use std::path::{Path, PathBuf};

/// Express `path` relative to `base` for display.
///
/// Returns `.` when both are the same directory and the path unchanged when it
/// does not live under `base`.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    match path.strip_prefix(base) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

/// Express `path` relative to the current working directory for display
pub fn relative(path: &Path) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => relative_to(path, &cwd),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_path_is_relativized() {
        let base = Path::new("/home/user/code");
        let rel = relative_to(Path::new("/home/user/code/my-site"), base);
        assert_eq!(rel, PathBuf::from("my-site"));
    }

    #[test]
    fn test_same_path_is_dot() {
        let base = Path::new("/home/user/code");
        assert_eq!(relative_to(base, base), PathBuf::from("."));
    }

    #[test]
    fn test_outside_path_is_unchanged() {
        let base = Path::new("/home/user/code");
        let outside = Path::new("/tmp/elsewhere");
        assert_eq!(relative_to(outside, base), outside.to_path_buf());
    }
}
