use std::path::PathBuf;

use ignore::WalkBuilder;

use crate::error::Result;

/// A transcript discovered under the input root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Absolute (or root-joined) path to the transcript.
    pub path: PathBuf,
    /// Directory of the file relative to the input root (empty at the root).
    pub relative_dir: PathBuf,
    /// Relative path from the input root (forward slashes).
    pub relative_path: String,
}

/// Recursive transcript scanner.
///
/// Walks every directory under the root, hidden ones included, and ignores
/// `.gitignore` rules: the input tree is data, not a source checkout.
pub struct Scanner {
    root: PathBuf,
    extension: String,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_extension(root, "txt")
    }

    /// Create a scanner matching `*.{extension}` instead of `*.txt`.
    pub fn with_extension(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Collect matching files in a stable, sorted order.
    ///
    /// A missing or unreadable entry aborts the scan.
    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let matches_ext = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == self.extension);
            if !matches_ext {
                continue;
            }

            let path = entry.into_path();
            let relative = path.strip_prefix(&self.root).unwrap_or(&path).to_path_buf();
            let relative_dir = relative
                .parent()
                .map(std::path::Path::to_path_buf)
                .unwrap_or_default();
            files.push(ScannedFile {
                relative_path: relative.to_string_lossy().replace('\\', "/"),
                relative_dir,
                path,
            });
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scanner_finds_txt_files_only() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("ACME-Mar-15-2025.txt"), "Hi.").unwrap();
        fs::write(tmp.path().join("notes.md"), "# notes").unwrap();
        fs::write(tmp.path().join("UPPER-Mar-15-2025.TXT"), "Hi.").unwrap();

        let files = Scanner::new(tmp.path()).scan().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, "ACME-Mar-15-2025.txt");
        assert_eq!(files[0].relative_dir, PathBuf::new());
    }

    #[test]
    fn scanner_recurses_and_records_subdirs() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("2025").join("q1");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("ACME-Jan-30-2025.txt"), "Hi.").unwrap();

        let files = Scanner::new(tmp.path()).scan().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_dir, PathBuf::from("2025").join("q1"));
        assert_eq!(files[0].relative_path, "2025/q1/ACME-Jan-30-2025.txt");
    }

    #[test]
    fn scanner_does_not_apply_gitignore_or_hidden_rules() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join(".gitignore"), "*.txt\n").unwrap();
        fs::create_dir(tmp.path().join(".archive")).unwrap();
        fs::write(tmp.path().join(".archive/OLD-Feb-01-2020.txt"), "Hi.").unwrap();
        fs::write(tmp.path().join("NEW-Feb-01-2025.txt"), "Hi.").unwrap();

        let files = Scanner::new(tmp.path()).scan().unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn scanner_output_is_sorted() {
        let tmp = TempDir::new().unwrap();
        for name in ["c-Mar-1-2025.txt", "a-Mar-1-2025.txt", "b-Mar-1-2025.txt"] {
            fs::write(tmp.path().join(name), "Hi.").unwrap();
        }
        let files = Scanner::new(tmp.path()).scan().unwrap();
        let names: Vec<_> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(names, ["a-Mar-1-2025.txt", "b-Mar-1-2025.txt", "c-Mar-1-2025.txt"]);
    }

    #[test]
    fn with_extension_strips_dot() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a-Mar-1-2025.text"), "Hi.").unwrap();
        let files = Scanner::with_extension(tmp.path(), ".text").scan().unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(Scanner::new(tmp.path().join("absent")).scan().is_err());
    }
}
