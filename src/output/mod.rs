//! Summary output: file writing and ZIP archives.

mod archive;

pub use archive::zip_batch;

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Turn a video title into a file-name-safe base.
///
/// Whitespace becomes hyphens; path separators and NULs are dropped.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | '\0'))
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Write a summary to `<dir>/<base_name>.txt`, never overwriting.
///
/// Existing files push the name to `<base_name>-1.txt`, `<base_name>-2.txt`,
/// and so on until a free slot is found. Returns the path written.
pub fn write_summary(content: &str, base_name: &str, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let mut counter = 0u32;
    let path = loop {
        let file_name = if counter == 0 {
            format!("{}.txt", base_name)
        } else {
            format!("{}-{}.txt", base_name, counter)
        };
        let candidate = dir.join(file_name);
        if !candidate.exists() {
            break candidate;
        }
        counter += 1;
    };

    std::fs::write(&path, content)?;
    debug!("Wrote summary to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title() {
        assert_eq!(sanitize_title("LLM with Python"), "LLM-with-Python");
        assert_eq!(sanitize_title("a/b\\c"), "abc");
        assert_eq!(sanitize_title("tabs\tand  spaces"), "tabs-and--spaces");
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("summaries");

        let path = write_summary("content", "My-Video-summary", &target).unwrap();
        assert_eq!(path, target.join("My-Video-summary.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_collision_appends_numeric_suffix() {
        let dir = tempfile::tempdir().unwrap();

        let first = write_summary("first", "My-Video-summary", dir.path()).unwrap();
        let second = write_summary("second", "My-Video-summary", dir.path()).unwrap();
        let third = write_summary("third", "My-Video-summary", dir.path()).unwrap();

        assert_eq!(first.file_name().unwrap(), "My-Video-summary.txt");
        assert_eq!(second.file_name().unwrap(), "My-Video-summary-1.txt");
        assert_eq!(third.file_name().unwrap(), "My-Video-summary-2.txt");

        assert_eq!(std::fs::read_to_string(&first).unwrap(), "first");
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "second");
        assert_eq!(std::fs::read_to_string(&third).unwrap(), "third");
    }

    #[test]
    fn test_utf8_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_summary("résumé — ✓", "notes", dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "résumé — ✓");
    }
}
