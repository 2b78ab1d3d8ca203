//! Size-capped rotating file sink

use crate::{Handler, Layout, LogRecord};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use traylog_core::LogResult;

/// Appends records to a file, rolling over when it grows too large
///
/// When either `max_bytes` or `backup_count` is 0 the file grows without
/// bound. Otherwise, when the pending line would bring the file to
/// `max_bytes` or beyond, the file is rolled over first: `path.N-1` moves to
/// `path.N` down to `path` moving to `path.1`, keeping at most
/// `backup_count` backups.
pub struct RotatingFileSink {
    path: PathBuf,
    max_bytes: u64,
    backup_count: u32,
    file: Option<File>,
    layout: Layout,
}

impl RotatingFileSink {
    /// Open (or create) the log file in append mode
    pub fn open(path: impl AsRef<Path>, max_bytes: u64, backup_count: u32) -> LogResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = open_append(&path)?;
        Ok(Self {
            path,
            max_bytes,
            backup_count,
            file: Some(file),
            layout: Layout::Timestamped,
        })
    }

    /// Use a different layout
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Path of the active log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the `index`-th backup, e.g. `tray.log.2`
    pub fn backup_path(&self, index: u32) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    fn stream(&mut self) -> io::Result<&mut File> {
        let file = match self.file.take() {
            Some(file) => file,
            None => open_append(&self.path)?,
        };
        Ok(self.file.insert(file))
    }

    fn should_rollover(&mut self, pending: usize) -> io::Result<bool> {
        if self.max_bytes == 0 || self.backup_count == 0 {
            return Ok(false);
        }
        let position = self.stream()?.seek(SeekFrom::End(0))?;
        // An empty file is never rolled over, even for an oversized line
        Ok(position > 0 && position + pending as u64 >= self.max_bytes)
    }

    fn rollover(&mut self) -> io::Result<()> {
        self.file = None;

        for index in (1..self.backup_count).rev() {
            let src = self.backup_path(index);
            if src.exists() {
                let dst = self.backup_path(index + 1);
                remove_if_exists(&dst)?;
                fs::rename(&src, &dst)?;
            }
        }
        let first = self.backup_path(1);
        remove_if_exists(&first)?;
        if self.path.exists() {
            fs::rename(&self.path, &first)?;
        }

        self.file = Some(open_append(&self.path)?);
        Ok(())
    }
}

impl Handler for RotatingFileSink {
    fn name(&self) -> &str {
        "rotating_file"
    }

    fn emit(&mut self, record: &LogRecord) -> LogResult<()> {
        let mut line = self.layout.format(record);
        line.push('\n');

        if self.should_rollover(line.len())? {
            self.rollover()?;
        }

        let file = self.stream()?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> LogResult<()> {
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
        _ => Ok(()),
    }
}
