//! Rotating file writer with size-based rotation and backup retention.
//!
//! Thread-safe writer that rotates the log file when it exceeds a size
//! threshold, keeping a fixed number of timestamped backups so log output
//! never consumes unbounded disk.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file handle opens lazily on the first write, so construction succeeds
/// even when the file cannot be opened yet. Before each write the current
/// size is checked; past the threshold the file is renamed to
/// `<name>.log.<unix_timestamp>` and a fresh one is started. Backups beyond
/// the retention limit are removed.
pub struct FileWriter {
    file_path: PathBuf,
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer for the given path. The file is not opened until the
    /// first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Appends bytes to the file, rotating first if it grew past the limit.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors or when the internal lock is poisoned.
    pub fn append(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| std::io::Error::other(format!("log writer lock poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| std::io::Error::other("no log file available"))?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(())
    }

    /// Closes the handle and rotates when the file exceeds the size limit.
    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("log.{timestamp}"));
        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;
        Ok(())
    }

    /// Deletes backups past the retention limit, newest first kept.
    ///
    /// Individual deletion failures are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| std::io::Error::other("log file has no parent directory"))?;
        let file_stem = self
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| std::io::Error::other("invalid log file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".log."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

/// `io::Write` adapter so the subscriber's fmt layer can target a shared
/// [`FileWriter`].
#[derive(Debug, Clone)]
pub struct RotatingWriter(pub Arc<FileWriter>);

impl Write for RotatingWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_the_file_and_writes() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("marquee.log");
        let writer = FileWriter::new(path.clone());

        writer.append(b"hello\n").expect("append");
        writer.append(b"world\n").expect("append");

        let contents = fs::read_to_string(&path).expect("read log");
        assert_eq!(contents, "hello\nworld\n");
    }

    #[test]
    fn oversized_file_rotates_to_a_backup() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("marquee.log");
        fs::write(&path, vec![b'x'; (MAX_FILE_SIZE_BYTES + 1) as usize]).expect("seed log");

        let writer = FileWriter::new(path.clone());
        writer.append(b"fresh\n").expect("append");

        assert_eq!(fs::read_to_string(&path).expect("read log"), "fresh\n");
        let backups = fs::read_dir(dir.path())
            .expect("read dir")
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains(".log."))
            .count();
        assert_eq!(backups, 1);
    }
}
