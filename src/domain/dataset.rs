// ============================================================
// Layer 3 — Dataset Configurations
// ============================================================
// Each generated index family is described by a DatasetConfig:
//
//   tag        → file name fragment, e.g. "30k" gives
//                indices_30k_train.txt
//   dataset    → which MedMNIST collaborator to ask
//   selection  → use every sample, or a class-balanced subset
//
// The three configurations the generator runs, in order:
//
//   30k               PathMNIST   Balanced { 30000, 9 }
//   full_pathmnist    PathMNIST   Full
//   full_bloodmnist   BloodMNIST  Full
//
// Order matters: all three share one random source, so
// reordering them changes every draw that follows.

use std::fmt;

/// The MedMNIST datasets this tool knows how to split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetId {
    PathMnist,
    BloodMnist,
}

impl DatasetId {
    /// Lower-case MedMNIST flag, also the archive stem: pathmnist.npz
    pub fn flag(&self) -> &'static str {
        match self {
            DatasetId::PathMnist  => "pathmnist",
            DatasetId::BloodMnist => "bloodmnist",
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetId::PathMnist  => write!(f, "PathMNIST"),
            DatasetId::BloodMnist => write!(f, "BloodMNIST"),
        }
    }
}

/// How the candidate index sequence is built before splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every sample of the split, 0..N
    Full,

    /// `total` samples drawn as evenly as possible from
    /// classes 0..classes
    Balanced { total: usize, classes: usize },
}

/// One driver's worth of configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub tag:       String,
    pub dataset:   DatasetId,
    pub selection: Selection,
}

impl DatasetConfig {
    pub fn new(tag: impl Into<String>, dataset: DatasetId, selection: Selection) -> Self {
        Self { tag: tag.into(), dataset, selection }
    }

    /// Output file name for one segment, e.g. `indices_30k_val.txt`
    pub fn file_name(&self, segment: &str) -> String {
        format!("indices_{}_{}.txt", self.tag, segment)
    }

    /// The fixed run: balanced 30k PathMNIST, full PathMNIST,
    /// full BloodMNIST, in that order.
    pub fn standard_set(balanced_total: usize, balanced_classes: usize) -> Vec<DatasetConfig> {
        vec![
            DatasetConfig::new(
                "30k",
                DatasetId::PathMnist,
                Selection::Balanced { total: balanced_total, classes: balanced_classes },
            ),
            DatasetConfig::new("full_pathmnist",  DatasetId::PathMnist,  Selection::Full),
            DatasetConfig::new("full_bloodmnist", DatasetId::BloodMnist, Selection::Full),
        ]
    }
}
