//! Size-rotating line writer for trace files.
//!
//! Each exported span batch is one line. When the file grows past the size
//! limit it is renamed with a `chrono` timestamp suffix and a fresh file is
//! started; only the newest backups are kept.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the file exceeds 5 MB.
const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

const DEFAULT_MAX_BACKUPS: usize = 3;

/// Sortable timestamp suffix for rotated files.
const BACKUP_STAMP: &str = "%Y%m%dT%H%M%S%.3f";

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write, so construction never fails.
///
/// # Example
///
/// ```rust,ignore
/// let writer = RotatingWriter::new(PathBuf::from("/tmp/flashquiz-otlp.json"));
/// writer.write_line(r#"{"resourceSpans":[]}"#)?;
/// ```
pub struct RotatingWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or the file cannot be rotated,
    /// opened, written, or flushed.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        let file = match guard.take() {
            Some(file) => file,
            None => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?,
        };
        let file = guard.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Local::now().format(BACKUP_STAMP);
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{stamp}"));

        fs::rename(&self.file_path, PathBuf::from(backup))?;
        self.prune_backups()
    }

    /// Deletes all but the newest `max_backups` rotated files.
    fn prune_backups(&self) -> io::Result<()> {
        let Some(dir) = self.file_path.parent() else {
            return Ok(());
        };
        let mut backups = backup_files(dir, &self.file_path)?;

        // timestamp suffixes sort chronologically
        backups.sort_unstable_by(|a, b| b.cmp(a));
        for stale in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

fn backup_files(dir: &Path, file_path: &Path) -> io::Result<Vec<PathBuf>> {
    let Some(prefix) = file_path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| format!("{name}."))
    else {
        return Ok(Vec::new());
    };

    Ok(fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&prefix))
        })
        .collect())
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingWriter::new(path.clone());

        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn rotates_when_over_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingWriter::with_limits(path.clone(), 8, 3);

        writer.write_line("0123456789").unwrap();
        writer.write_line("fresh").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
        let backups = backup_files(dir.path(), &path).unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "0123456789\n");
    }

    #[test]
    fn keeps_only_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        for stamp in ["20240101T000000.000", "20240102T000000.000", "20240103T000000.000"] {
            fs::write(dir.path().join(format!("trace.json.{stamp}")), "old").unwrap();
        }
        let writer = RotatingWriter::with_limits(path.clone(), 1, 2);

        fs::write(&path, "too large").unwrap();
        writer.write_line("new").unwrap();

        let mut names: Vec<String> = backup_files(dir.path(), &path)
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name()?.to_str().map(String::from))
            .collect();
        names.sort();

        assert_eq!(names.len(), 2);
        assert!(!names.contains(&"trace.json.20240101T000000.000".to_string()));
        assert!(!names.contains(&"trace.json.20240102T000000.000".to_string()));
    }
}
