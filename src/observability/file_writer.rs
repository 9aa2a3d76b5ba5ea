//! Rotating log file writer with size-based rotation and backup retention.
//!
//! [`FileWriter`] implements [`MakeWriter`] so it can back a
//! `tracing_subscriber::fmt` layer directly. Each formatted event is appended
//! and flushed; when the file grows past its size limit it is renamed with a
//! timestamp suffix and a fresh file is started.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size exceeds the limit, rotate:
///    - Rename current file to `<name>.<timestamp>`
///    - Create new empty file on the next write
///    - Remove oldest backups beyond the retention limit
pub struct FileWriter {
    file_path: PathBuf,
    max_file_size: u64,
    max_backups: usize,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits (10 MB, 3 backups).
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_file_size: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_file_size,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `buf` to the file, rotating first if necessary.
    ///
    /// # Errors
    ///
    /// May fail due to filesystem permissions, disk space exhaustion, or a
    /// poisoned mutex.
    pub fn write_bytes(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

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
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()
    }

    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_file_size {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to `<name>.<micros since epoch>` and prunes old backups.
    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = chrono::Utc::now().timestamp_micros();
        let mut backup_name = self.file_path.as_os_str().to_owned();
        backup_name.push(format!(".{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup_name))?;
        }

        self.cleanup_old_backups()
    }

    /// Removes backups beyond the retention limit, oldest first.
    ///
    /// Individual deletion errors are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let mut backups = self.backups()?;
        backups.sort_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }

    /// Lists existing backup files of this log.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let prefix = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        Ok(fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_file_size", &self.max_file_size)
            .finish_non_exhaustive()
    }
}

/// Per-event handle handed out to the fmt layer.
#[derive(Debug)]
pub struct FileWriterHandle<'a> {
    inner: &'a FileWriter,
}

impl Write for FileWriterHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileWriterHandle<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriterHandle { inner: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("practicio.log");
        let writer = FileWriter::new(path.clone());

        writer.make_writer().write_all(b"first\n").unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_rotation_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("practicio.log");
        let writer = FileWriter::with_limits(path.clone(), 64, 2);
        let line = [b'x'; 40];

        for _ in 0..12 {
            writer.write_bytes(&line).unwrap();
        }

        let backups = writer.backups().unwrap();
        assert!(!backups.is_empty());
        assert!(backups.len() <= 2);
        assert!(fs::metadata(&path).unwrap().len() <= 80);
    }
}
