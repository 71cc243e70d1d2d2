// ============================================================
// Layer 3 — Splits, Ratios and Partitions
// ============================================================
// Two different "splits" show up in this tool:
//
//   DatasetSplit → a split as published by MedMNIST
//                  (train / val / test). We only ever read
//                  the "train" split.
//   Segment      → one of the three pieces WE produce from
//                  a candidate index sequence.
//
// Segment sizes for a sequence of length `total`:
//
//   n_train = floor(total * train)
//   n_val   = floor(total * val)
//   n_test  = total - n_train - n_val   ← absorbs rounding
//
// Example: total = 17092 at 70/15/15
//   n_train = 11964, n_val = 2563, n_test = 2565

use std::fmt;

/// A split as defined by the upstream dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetSplit {
    Train,
    Val,
    Test,
}

impl DatasetSplit {
    pub const ALL: [DatasetSplit; 3] = [DatasetSplit::Train, DatasetSplit::Val, DatasetSplit::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetSplit::Train => "train",
            DatasetSplit::Val   => "val",
            DatasetSplit::Test  => "test",
        }
    }
}

impl fmt::Display for DatasetSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three generated pieces of a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Train,
    Val,
    Test,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Train => "train",
            Segment::Val   => "val",
            Segment::Test  => "test",
        }
    }
}

/// Train/validation/test proportions.
///
/// Not re-validated to sum to 1.0: whatever `train` and `val`
/// leave over ends up in the test segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitRatio {
    pub train: f64,
    pub val:   f64,
    pub test:  f64,
}

impl SplitRatio {
    /// The 70/15/15 split used for every generated file
    pub const SEVENTY_FIFTEEN_FIFTEEN: Self = Self { train: 0.70, val: 0.15, test: 0.15 };

    /// Segment lengths `(n_train, n_val, n_test)` for `total` items.
    /// Truncating conversion, test takes the remainder.
    pub fn counts(&self, total: usize) -> (usize, usize, usize) {
        let n_train = ((total as f64 * self.train) as usize).min(total);
        let n_val   = ((total as f64 * self.val) as usize).min(total - n_train);
        (n_train, n_val, total - n_train - n_val)
    }

    /// Whole-number percentages for documentation, e.g. "70/15/15"
    pub fn percent_label(&self) -> String {
        format!(
            "{}/{}/{}",
            (self.train * 100.0).round() as u32,
            (self.val   * 100.0).round() as u32,
            (self.test  * 100.0).round() as u32,
        )
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self::SEVENTY_FIFTEEN_FIFTEEN
    }
}

/// Three disjoint index sequences covering the input exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitPartition {
    pub train: Vec<usize>,
    pub val:   Vec<usize>,
    pub test:  Vec<usize>,
}

impl SplitPartition {
    pub fn len(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }

    /// Segments in write order: train, val, test
    pub fn segments(&self) -> [(Segment, &[usize]); 3] {
        [
            (Segment::Train, self.train.as_slice()),
            (Segment::Val,   self.val.as_slice()),
            (Segment::Test,  self.test.as_slice()),
        ]
    }
}
