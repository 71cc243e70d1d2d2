// Synthetic LabelSource for tests. Only the train split is
// populated; the other splits report zero samples.

use crate::domain::{error::IndexError, split::DatasetSplit, traits::LabelSource};

pub struct InMemoryLabels {
    name:   String,
    labels: Vec<usize>,
}

impl InMemoryLabels {
    pub fn new(name: impl Into<String>, labels: Vec<usize>) -> Self {
        Self { name: name.into(), labels }
    }

    /// `counts[c]` samples of class `c`, interleaved round-robin so
    /// classes are not stored in contiguous blocks.
    pub fn with_class_counts(name: impl Into<String>, counts: &[usize]) -> Self {
        let mut remaining = counts.to_vec();
        let mut labels    = Vec::with_capacity(counts.iter().sum());
        while remaining.iter().any(|&n| n > 0) {
            for (class, left) in remaining.iter_mut().enumerate() {
                if *left > 0 {
                    labels.push(class);
                    *left -= 1;
                }
            }
        }
        Self::new(name, labels)
    }
}

impl LabelSource for InMemoryLabels {
    fn name(&self) -> &str {
        &self.name
    }

    fn sample_count(&self, split: DatasetSplit) -> Result<usize, IndexError> {
        match split {
            DatasetSplit::Train => Ok(self.labels.len()),
            _                   => Ok(0),
        }
    }

    fn label_of(&self, split: DatasetSplit, index: usize) -> Result<usize, IndexError> {
        let len = self.sample_count(split)?;
        match split {
            DatasetSplit::Train if index < len => Ok(self.labels[index]),
            _ => Err(IndexError::SampleOutOfRange {
                dataset: self.name.clone(),
                split,
                index,
                len,
            }),
        }
    }
}
