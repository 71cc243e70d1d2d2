// ============================================================
// Layer 4 — MedMNIST Label Source
// ============================================================
// Reads class labels out of a MedMNIST .npz archive.
//
// A MedMNIST archive is a ZIP of .npy arrays:
//
//   pathmnist.npz
//     ├── train_images.npy   (N, 28, 28, 3) uint8   ← never read
//     ├── train_labels.npy   (N, 1)         uint8
//     ├── val_images.npy / val_labels.npy
//     └── test_images.npy / test_labels.npy
//
// Only the *_labels arrays are decoded. Sample `i` of a split is
// row `i` of its label array, which is the ordering the index
// files refer to.
//
// Archives are expected at <data_dir>/<flag>.npz, the layout
// the MedMNIST download tools produce. Fetching them is not
// this tool's job; a missing archive aborts the run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use npyz::npz::NpzArchive;

use crate::domain::{
    dataset::DatasetId,
    error::IndexError,
    split::DatasetSplit,
    traits::LabelSource,
};

/// Labels of one MedMNIST dataset, loaded once on open.
/// Implements the LabelSource trait from Layer 3.
pub struct MedMnistSource {
    name:    String,
    labels:  HashMap<DatasetSplit, Vec<u8>>,
}

impl MedMnistSource {
    /// Archive path for `dataset` under `data_dir`
    pub fn archive_path(data_dir: &Path, dataset: DatasetId) -> PathBuf {
        data_dir.join(format!("{}.npz", dataset.flag()))
    }

    /// Open `<data_dir>/<flag>.npz` and decode its label arrays.
    /// The train split must be present; val and test are optional.
    pub fn open(data_dir: impl AsRef<Path>, dataset: DatasetId) -> Result<Self, IndexError> {
        let path = Self::archive_path(data_dir.as_ref(), dataset);
        let name = dataset.to_string();

        tracing::info!("Reading {} labels from '{}'", name, path.display());

        let mut archive = NpzArchive::open(&path).map_err(|e| {
            IndexError::unavailable(&name, format!("cannot open '{}': {e}", path.display()))
        })?;

        let mut labels = HashMap::new();
        for split in DatasetSplit::ALL {
            if let Some(values) = read_labels(&mut archive, &name, split)? {
                tracing::debug!("{} {}: {} labels", name, split, values.len());
                labels.insert(split, values);
            }
        }

        if !labels.contains_key(&DatasetSplit::Train) {
            return Err(IndexError::unavailable(
                &name,
                format!("'{}' has no train_labels array", path.display()),
            ));
        }

        Ok(Self { name, labels })
    }
}

impl LabelSource for MedMnistSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample_count(&self, split: DatasetSplit) -> Result<usize, IndexError> {
        self.labels
            .get(&split)
            .map(Vec::len)
            .ok_or_else(|| IndexError::unavailable(&self.name, format!("no {split} split")))
    }

    fn label_of(&self, split: DatasetSplit, index: usize) -> Result<usize, IndexError> {
        let labels = self
            .labels
            .get(&split)
            .ok_or_else(|| IndexError::unavailable(&self.name, format!("no {split} split")))?;

        labels
            .get(index)
            .map(|&label| usize::from(label))
            .ok_or_else(|| IndexError::SampleOutOfRange {
                dataset: self.name.clone(),
                split,
                index,
                len: labels.len(),
            })
    }
}

/// Decode `<split>_labels` if the archive has it.
/// Labels are stored as (N, 1) so the flat vector has one value per sample.
fn read_labels<R: std::io::Read + std::io::Seek>(
    archive: &mut NpzArchive<R>,
    name:    &str,
    split:   DatasetSplit,
) -> Result<Option<Vec<u8>>, IndexError> {
    let array_name = format!("{split}_labels");

    let npy = archive
        .by_name(&array_name)
        .map_err(|e| IndexError::unavailable(name, format!("cannot read {array_name}: {e}")))?;

    let Some(npy) = npy else {
        return Ok(None);
    };

    let values = npy
        .into_vec::<u8>()
        .map_err(|e| IndexError::unavailable(name, format!("cannot decode {array_name}: {e}")))?;

    Ok(Some(values))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use npyz::npz::NpzWriter;
    use npyz::{AutoSerialize, WriterBuilder};

    /// Write `<dir>/<flag>.npz` holding each named array as shape (N, 1),
    /// the way MedMNIST stores its labels.
    fn write_archive<T: AutoSerialize + Copy>(
        dir:     &Path,
        dataset: DatasetId,
        arrays:  &[(&str, &[T])],
    ) {
        let path    = MedMnistSource::archive_path(dir, dataset);
        let mut npz = NpzWriter::create(&path).unwrap();
        for &(name, values) in arrays {
            let mut writer = npz
                .array(name, Default::default())
                .unwrap()
                .default_dtype()
                .shape(&[values.len() as u64, 1])
                .begin_nd()
                .unwrap();
            writer.extend(values.iter().copied()).unwrap();
            writer.finish().unwrap();
        }
        // Dropping the writer finalises the zip directory
    }

    #[test]
    fn test_archive_path_uses_flag() {
        let path = MedMnistSource::archive_path(Path::new("data"), DatasetId::BloodMnist);
        assert_eq!(path, PathBuf::from("data/bloodmnist.npz"));
    }

    #[test]
    fn test_missing_archive_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = MedMnistSource::open(dir.path(), DatasetId::PathMnist)
            .err()
            .expect("open should fail");
        match err {
            IndexError::CollaboratorUnavailable { dataset, reason } => {
                assert_eq!(dataset, "PathMNIST");
                assert!(reason.contains("pathmnist.npz"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reads_train_labels() {
        let dir    = tempfile::tempdir().unwrap();
        let labels: Vec<u8> = (0..40).map(|i| (i % 9) as u8).collect();
        write_archive(dir.path(), DatasetId::PathMnist, &[
            ("train_labels", labels.as_slice()),
            ("val_labels",   &[3u8, 1, 4][..]),
        ]);

        let source = MedMnistSource::open(dir.path(), DatasetId::PathMnist).unwrap();
        assert_eq!(source.name(), "PathMNIST");
        assert_eq!(source.sample_count(DatasetSplit::Train).unwrap(), 40);
        assert_eq!(source.sample_count(DatasetSplit::Val).unwrap(), 3);
        for (i, &label) in labels.iter().enumerate() {
            assert_eq!(source.label_of(DatasetSplit::Train, i).unwrap(), usize::from(label));
        }
        assert_eq!(source.label_of(DatasetSplit::Val, 2).unwrap(), 4);
    }

    #[test]
    fn test_label_past_end_is_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        write_archive(dir.path(), DatasetId::BloodMnist, &[("train_labels", &[0u8, 1, 2, 3][..])]);

        let source = MedMnistSource::open(dir.path(), DatasetId::BloodMnist).unwrap();
        let err    = source.label_of(DatasetSplit::Train, 4).unwrap_err();
        assert!(matches!(
            err,
            IndexError::SampleOutOfRange { split: DatasetSplit::Train, index: 4, len: 4, .. }
        ));
    }

    #[test]
    fn test_archive_without_train_labels_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        write_archive(dir.path(), DatasetId::PathMnist, &[("test_labels", &[1u8, 2][..])]);

        let err = MedMnistSource::open(dir.path(), DatasetId::PathMnist)
            .err()
            .expect("open should fail");
        match err {
            IndexError::CollaboratorUnavailable { reason, .. } => {
                assert!(reason.contains("train_labels"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_absent_split_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_archive(dir.path(), DatasetId::BloodMnist, &[("train_labels", &[5u8, 6][..])]);

        let source = MedMnistSource::open(dir.path(), DatasetId::BloodMnist).unwrap();
        assert!(matches!(
            source.sample_count(DatasetSplit::Test),
            Err(IndexError::CollaboratorUnavailable { .. })
        ));
        assert!(matches!(
            source.label_of(DatasetSplit::Test, 0),
            Err(IndexError::CollaboratorUnavailable { .. })
        ));
    }

    #[test]
    fn test_non_uint8_labels_fail_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        write_archive(dir.path(), DatasetId::PathMnist, &[("train_labels", &[0.5f32, 1.5][..])]);

        let err = MedMnistSource::open(dir.path(), DatasetId::PathMnist)
            .err()
            .expect("open should fail");
        match err {
            IndexError::CollaboratorUnavailable { reason, .. } => {
                assert!(reason.contains("cannot decode train_labels"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
