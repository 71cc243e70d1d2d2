// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The generator never talks to MedMNIST directly. It sees a
// LabelSource, so the same drivers run against:
//
//   - MedMnistSource → labels read from a .npz archive
//   - InMemoryLabels → synthetic labels in unit tests

use crate::domain::{error::IndexError, split::DatasetSplit};

// ─── LabelSource ──────────────────────────────────────────────────────────────
/// Read-only access to a dataset's per-sample class labels.
///
/// Implementations must keep sample ordering stable across
/// runs; the generated index files are only meaningful if
/// index `i` names the same image every time.
pub trait LabelSource {
    /// Human-readable dataset name used in logs and errors
    fn name(&self) -> &str;

    /// Total number of samples in `split`
    fn sample_count(&self, split: DatasetSplit) -> Result<usize, IndexError>;

    /// Integer class label of sample `index` in `split`
    fn label_of(&self, split: DatasetSplit, index: usize) -> Result<usize, IndexError>;
}
