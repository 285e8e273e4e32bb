use crate::ports::outbound::OutputPresenter;
use crate::shared::error::SentinelError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// DashboardFileWriter adapter that saves a rendered dashboard to disk
///
/// Refuses to write through a symbolic link or into a missing directory.
/// Each render of the results screen overwrites the file.
pub struct DashboardFileWriter {
    output_path: PathBuf,
}

impl DashboardFileWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn write_error(&self, details: impl Into<String>) -> SentinelError {
        SentinelError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
    }

    fn check_target(&self) -> std::result::Result<(), SentinelError> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self.write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        match fs::symlink_metadata(&self.output_path) {
            Ok(metadata) if metadata.is_symlink() => Err(self.write_error(
                "Output path is a symbolic link; refusing to write through it",
            )),
            Ok(metadata) if metadata.is_dir() => {
                Err(self.write_error("Output path is a directory"))
            }
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.write_error(format!("Failed to read file metadata: {}", e))),
        }
    }
}

impl OutputPresenter for DashboardFileWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.check_target()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        tracing::debug!(path = %self.output_path.display(), bytes = content.len(), "dashboard written");
        eprintln!("✅ Dashboard saved: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter that prints the dashboard to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| {
                if content.ends_with('\n') {
                    Ok(())
                } else {
                    stdout.write_all(b"\n")
                }
            })
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_dashboard_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("dashboard.html");

        let writer = DashboardFileWriter::new(output_path.clone());
        writer.present("<html></html>").unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_overwrites_previous_render() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("dashboard.txt");
        fs::write(&output_path, "old").unwrap();

        DashboardFileWriter::new(output_path.clone())
            .present("new")
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
    }

    #[test]
    fn test_missing_parent_directory() {
        let writer = DashboardFileWriter::new(PathBuf::from("/nonexistent/directory/out.txt"));
        let err = writer.present("content").unwrap_err();
        assert!(err.to_string().contains("Parent directory does not exist"));
    }

    #[test]
    fn test_directory_target_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let writer = DashboardFileWriter::new(temp_dir.path().to_path_buf());
        let err = writer.present("content").unwrap_err();
        assert!(err.to_string().contains("Output path is a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_target_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&real, "original").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let err = DashboardFileWriter::new(link).present("content").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
        assert_eq!(fs::read_to_string(&real).unwrap(), "original");
    }

    #[test]
    fn test_stdout_presenter_success() {
        assert!(StdoutPresenter::new().present("dashboard\n").is_ok());
    }
}
