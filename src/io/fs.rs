use std::{fs::{self, File}, path::{Path, PathBuf}};

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;

/// Create the directory if it doesn’t exist; error if a non-directory exists there.
pub(crate) fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            bail!("Path exists but is not a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Output files written to temporary siblings first and moved into place
/// together on [`StagedFiles::commit`]. Dropping without committing leaves
/// nothing behind.
#[derive(Default)]
pub(crate) struct StagedFiles {
    staged: Vec<(NamedTempFile, PathBuf)>,
}

impl StagedFiles {
    pub(crate) fn new() -> Self { Self::default() }

    /// Write the contents of `path` into a temporary file in the same directory.
    pub(crate) fn stage<F>(&mut self, path: &Path, write: F) -> Result<()>
    where
        F: FnOnce(&mut File) -> Result<()>,
    {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("[io::fs] Failed to create temporary file in {}", dir.display()))?;
        write(temp.as_file_mut())
            .with_context(|| format!("[io::fs] Failed to write {}", path.display()))?;
        self.staged.push((temp, path.to_path_buf()));
        Ok(())
    }

    #[inline] pub(crate) fn len(&self) -> usize { self.staged.len() }

    /// Move every staged file to its final path.
    ///
    /// Targets are checked before anything is moved. If a move still fails,
    /// the files already moved are removed again before the error is returned.
    pub(crate) fn commit(self) -> Result<Vec<PathBuf>> {
        for (_, path) in &self.staged {
            if path.is_dir() {
                bail!("[io::fs] Cannot write {}: a directory exists there", path.display());
            }
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !parent.is_dir() {
                    bail!("[io::fs] Cannot write {}: parent directory is missing", path.display());
                }
            }
        }

        let mut written = Vec::with_capacity(self.staged.len());
        for (temp, path) in self.staged {
            if let Err(err) = temp.persist(&path) {
                written.iter().for_each(|done: &PathBuf| { let _ = fs::remove_file(done); });
                return Err(err.error)
                    .with_context(|| format!("[io::fs] Failed to persist {}", path.display()));
            }
            written.push(path);
        }
        Ok(written)
    }
}
