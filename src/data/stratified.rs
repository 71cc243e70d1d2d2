// ============================================================
// Layer 4 — Stratified (Class-Balanced) Subset Selector
// ============================================================
// Builds a fixed-size subset with (almost) the same number of
// samples from every class.
//
// Per-class quota for `total` samples over `classes` classes:
//
//   base  = total / classes
//   extra = total % classes
//   quota[c] = base + 1   if c < extra
//              base       otherwise
//
// Example: total = 30000, classes = 9
//   base = 3333, extra = 3
//   quotas = [3334, 3334, 3334, 3333, 3333, 3333, 3333, 3333, 3333]
//   sum    = 30000
//
// Selection steps:
//   1. Group sample ids by label
//   2. For c = 0, 1, ... draw quota[c] ids without replacement
//      (ascending class order, each draw consuming the shared rng)
//   3. Concatenate, then shuffle the whole subset once
//
// A class with fewer samples than its quota is an error; we
// never silently hand back a smaller subset.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{error::IndexError, split::DatasetSplit, traits::LabelSource};

/// Sample ids grouped by class label, in original order
pub type ClassGroups = BTreeMap<usize, Vec<usize>>;

/// Ask `source` for every label in `split` and group ids by class.
pub fn group_by_class(
    source: &dyn LabelSource,
    split:  DatasetSplit,
) -> Result<ClassGroups, IndexError> {
    let count = source.sample_count(split)?;
    let mut groups = ClassGroups::new();

    for index in 0..count {
        let label = source.label_of(split, index)?;
        groups.entry(label).or_default().push(index);
    }

    tracing::debug!(
        "Grouped {} {} samples into {} classes",
        count,
        source.name(),
        groups.len()
    );
    Ok(groups)
}

/// Quota per class; always sums to `total` when `classes > 0`.
pub fn per_class_targets(total: usize, classes: usize) -> Vec<usize> {
    if classes == 0 {
        return Vec::new();
    }
    let base  = total / classes;
    let extra = total % classes;
    (0..classes)
        .map(|c| if c < extra { base + 1 } else { base })
        .collect()
}

/// Draw a balanced subset of `total` ids from classes `0..classes`.
///
/// Labels outside `0..classes` are never drawn from.
pub fn select_balanced<R: Rng + ?Sized>(
    groups:  &ClassGroups,
    total:   usize,
    classes: usize,
    rng:     &mut R,
) -> Result<Vec<usize>, IndexError> {
    // Zero classes can only ever yield an empty subset
    if classes == 0 && total > 0 {
        return Err(IndexError::NoClasses { requested: total });
    }

    let ignored = groups.range(classes..).map(|(_, ids)| ids.len()).sum::<usize>();
    if ignored > 0 {
        tracing::warn!("{} samples carry labels outside 0..{} and are ignored", ignored, classes);
    }

    let mut selected = Vec::with_capacity(total);

    for (class, target) in per_class_targets(total, classes).into_iter().enumerate() {
        let pool = groups.get(&class).map(Vec::as_slice).unwrap_or(&[]);

        if pool.len() < target {
            return Err(IndexError::InsufficientSamples {
                class,
                requested: target,
                available: pool.len(),
            });
        }

        selected.extend(pool.choose_multiple(rng, target).copied());
        tracing::debug!("Class {}: drew {} of {}", class, target, pool.len());
    }

    selected.shuffle(rng);
    Ok(selected)
}
