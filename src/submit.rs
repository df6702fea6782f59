//! Submission Module
//!
//! The boundary between the accumulator and whatever processes batches.
//!
//! ## Responsibilities
//! - Hand one rendered document to the external batch endpoint
//! - Return its acknowledgement text, or fail
//!
//! Transport, authentication and endpoint addressing live entirely on the
//! implementor's side. Calls are made one at a time, in segment order.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{BatchError, Result};
use crate::protocol::Document;

/// Processes one batch document per call
pub trait Submitter {
    /// Error surfaced to the caller of `BatchAccumulator::run` unchanged
    type Error;

    /// Submit a document and return the processor's acknowledgement
    fn submit(&mut self, document: &Document) -> std::result::Result<String, Self::Error>;
}

impl<F, E> Submitter for F
where
    F: FnMut(&Document) -> std::result::Result<String, E>,
{
    type Error = E;

    fn submit(&mut self, document: &Document) -> std::result::Result<String, E> {
        self(document)
    }
}

/// Writes each document to a sink, one per line
///
/// Acknowledges every document with a short summary line. Useful for dry
/// runs and for piping batches to another process.
pub struct WriterSubmitter<W: Write> {
    writer: W,
    submitted: usize,
}

impl<W: Write> WriterSubmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            submitted: 0,
        }
    }

    /// Number of documents written so far
    pub fn submitted(&self) -> usize {
        self.submitted
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Submitter for WriterSubmitter<W> {
    type Error = BatchError;

    fn submit(&mut self, document: &Document) -> Result<String> {
        self.writer.write_all(document.as_str().as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        let index = self.submitted;
        self.submitted += 1;
        Ok(format!(
            "batch {}: {} methods written",
            index,
            document.method_count()
        ))
    }
}

/// Spools each document into its own file in a directory
///
/// Files are named `batch-00000.xml`, `batch-00001.xml`, ... in submission
/// order. The acknowledgement is the path written.
pub struct DirectorySubmitter {
    dir: PathBuf,
    next_index: usize,
}

impl DirectorySubmitter {
    /// Create the directory if needed and start numbering at zero
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            next_index: 0,
        })
    }

    /// Path the next document will be written to
    pub fn next_path(&self) -> PathBuf {
        self.dir.join(format!("batch-{:05}.xml", self.next_index))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Submitter for DirectorySubmitter {
    type Error = BatchError;

    fn submit(&mut self, document: &Document) -> Result<String> {
        let path = self.next_path();
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(BatchError::Submission(format!(
                    "refusing to overwrite {}",
                    path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };

        file.write_all(document.as_str().as_bytes())?;
        file.sync_all()?;
        self.next_index += 1;
        Ok(path.display().to_string())
    }
}
