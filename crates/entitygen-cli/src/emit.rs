//! Artifact emission.
//!
//! An [`ArtifactEmitter`] persists one rendered artifact at a time. Each
//! emission opens its destination, writes, flushes and closes it before
//! returning, on success and on failure alike.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A rendered artifact ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    /// Qualified name of the entity the artifact was generated from
    pub source_class: String,
    /// Qualified name of the generated class
    pub class_name: String,
    /// Path relative to the output root, e.g. `com/example/DcOrder.java`
    pub relative_path: PathBuf,
    pub source: String,
}

/// Errors that can occur while emitting an artifact.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The destination directory could not be created.
    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination file could not be created or written.
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Destination for rendered artifacts
pub trait ArtifactEmitter: Send + Sync {
    /// Persist one artifact and return where it went
    fn emit(&self, artifact: &RenderedArtifact) -> Result<PathBuf, EmitError>;
}

/// Writes artifacts as source files below an output directory.
#[derive(Debug, Clone)]
pub struct FileEmitter {
    output_dir: PathBuf,
}

impl FileEmitter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ArtifactEmitter for FileEmitter {
    fn emit(&self, artifact: &RenderedArtifact) -> Result<PathBuf, EmitError> {
        let path = self.output_dir.join(&artifact.relative_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| EmitError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        write_file(&path, artifact.source.as_bytes()).map_err(|source| EmitError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(class = %artifact.class_name, path = %path.display(), "wrote artifact");
        Ok(path)
    }
}

/// Scoped write: the file handle is dropped on every return path, and the
/// buffer is flushed explicitly so late write errors are reported.
fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents)?;
    writer.flush()
}

/// Prints artifacts to standard output instead of writing files.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutEmitter;

impl ArtifactEmitter for StdoutEmitter {
    fn emit(&self, artifact: &RenderedArtifact) -> Result<PathBuf, EmitError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        writeln!(out, "// {}", artifact.relative_path.display())
            .and_then(|_| out.write_all(artifact.source.as_bytes()))
            .and_then(|_| out.flush())
            .map_err(|source| EmitError::Write {
                path: artifact.relative_path.clone(),
                source,
            })?;

        Ok(artifact.relative_path.clone())
    }
}
