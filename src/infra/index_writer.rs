// ============================================================
// Layer 5 — Index File Writer
// ============================================================
// Writes index lists as plain text, one integer per line,
// every line newline-terminated:
//
//   indices/indices_30k_train.txt
//     18342
//     77
//     50213
//     ...
//
// Existing files are truncated and rewritten, never appended
// to. The output directory is created on first use.
//
// Any I/O failure is returned as IndexError::Io carrying the
// path that could not be written.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::domain::error::IndexError;

/// Writes index and text files into one output directory.
pub struct IndexWriter {
    /// Directory every file is written into
    dir: PathBuf,
}

impl IndexWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write `indices` to `<dir>/<file_name>`, one per line.
    /// Prints a confirmation with the entry count.
    pub fn write_indices(&self, file_name: &str, indices: &[usize]) -> Result<PathBuf, IndexError> {
        let path = self.prepare(file_name)?;

        let file = File::create(&path).map_err(|e| IndexError::io(&path, e))?;
        let mut out = BufWriter::new(file);
        for idx in indices {
            writeln!(out, "{idx}").map_err(|e| IndexError::io(&path, e))?;
        }
        out.flush().map_err(|e| IndexError::io(&path, e))?;

        println!("Saved {}  ({} entries)", path.display(), indices.len());
        tracing::debug!("Wrote {} indices to '{}'", indices.len(), path.display());
        Ok(path)
    }

    /// Write a text file verbatim to `<dir>/<file_name>`.
    pub fn write_text(&self, file_name: &str, text: &str) -> Result<PathBuf, IndexError> {
        let path = self.prepare(file_name)?;
        fs::write(&path, text).map_err(|e| IndexError::io(&path, e))?;
        tracing::debug!("Wrote {} bytes to '{}'", text.len(), path.display());
        Ok(path)
    }

    /// Ensure the output directory exists and return the target path
    fn prepare(&self, file_name: &str) -> Result<PathBuf, IndexError> {
        // create_dir_all is a no-op when the directory already exists
        fs::create_dir_all(&self.dir).map_err(|e| IndexError::io(&self.dir, e))?;
        Ok(self.dir.join(file_name))
    }
}
