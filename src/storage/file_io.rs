//! Line-file I/O utilities
//!
//! The stores persist one record per line. Reading tolerates a missing file
//! (an empty collection); appending grows the file in place; rewriting
//! replaces the whole file atomically (write to temp, then rename) so a
//! crash mid-write cannot leave a half-written file behind.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{VaultError, VaultResult};

/// Read all lines from a file. A missing file yields an empty Vec.
pub fn read_lines<P: AsRef<Path>>(path: P) -> VaultResult<Vec<String>> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| VaultError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| VaultError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Append a single line to a file, creating it if needed
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> VaultResult<()> {
    let path = path.as_ref();

    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| VaultError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    writeln!(file, "{}", line)
        .map_err(|e| VaultError::Storage(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(())
}

/// Replace a file's contents with the given lines, atomically
/// (write to temp, flush, sync, rename).
pub fn rewrite_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> VaultResult<()> {
    let path = path.as_ref();

    ensure_parent(path)?;

    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| VaultError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)
            .map_err(|e| VaultError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| VaultError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| VaultError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        VaultError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn ensure_parent(path: &Path) -> VaultResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                VaultError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let lines = read_lines(temp_dir.path().join("nonexistent.txt")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_append_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.txt");

        append_line(&path, "first").unwrap();
        append_line(&path, "second").unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_append_preserves_prior_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.txt");

        append_line(&path, "keep me").unwrap();
        append_line(&path, "new").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines[0], "keep me");
    }

    #[test]
    fn test_rewrite_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.txt");

        append_line(&path, "stale").unwrap();
        rewrite_lines(&path, &["fresh".to_string(), "lines".to_string()]).unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["fresh", "lines"]);
    }

    #[test]
    fn test_rewrite_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.txt");

        rewrite_lines(&path, &["only".to_string()]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("data.txt.tmp").exists());
    }

    #[test]
    fn test_rewrite_empty_creates_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.txt");

        rewrite_lines(&path, &[]).unwrap();

        assert!(path.exists());
        assert!(read_lines(&path).unwrap().is_empty());
    }
}
