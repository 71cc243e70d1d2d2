// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// Every failure in this tool is fatal. There are no retries
// and no partial-success mode; the error travels up to main()
// and the process exits non-zero with the message below.
//
//   InsufficientSamples     → a class is smaller than its quota
//   NoClasses               → a non-empty balanced subset was
//                             requested over zero classes
//   CollaboratorUnavailable → a dataset archive is missing or
//                             cannot be decoded
//   SampleOutOfRange        → a label was requested past the
//                             end of a split
//   Io                      → an output file could not be written

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::split::DatasetSplit;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("class {class} has only {available} samples, {requested} requested")]
    InsufficientSamples {
        class:     usize,
        requested: usize,
        available: usize,
    },

    #[error("cannot draw {requested} balanced samples from zero classes")]
    NoClasses { requested: usize },

    #[error("dataset {dataset} is unavailable: {reason}")]
    CollaboratorUnavailable {
        dataset: String,
        reason:  String,
    },

    #[error("sample {index} is out of range for {dataset} {split} split ({len} samples)")]
    SampleOutOfRange {
        dataset: String,
        split:   DatasetSplit,
        index:   usize,
        len:     usize,
    },

    #[error("cannot write '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    pub fn unavailable(dataset: impl Into<String>, reason: impl Into<String>) -> Self {
        IndexError::CollaboratorUnavailable {
            dataset: dataset.into(),
            reason:  reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io { path: path.into(), source }
    }
}
