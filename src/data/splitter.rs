// ============================================================
// Layer 4 — Train/Validation/Test Splitter
// ============================================================
// Shuffles a candidate index sequence and cuts it into three
// contiguous pieces:
//
//   [ ─────── train ─────── | ── val ── | ── test ── ]
//
// Sizes come from SplitRatio::counts (truncating, test takes
// the remainder), so the three lengths always add up to the
// input length and no index can appear twice.
//
// The split itself is NOT stratified. If balanced classes are
// needed, build the candidate sequence with the stratified
// selector first.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom, drawing
// from the caller's random source.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::split::{SplitPartition, SplitRatio};

/// Shuffle `indices` in place and split into (train, val, test).
///
/// # Arguments
/// * `indices` - Candidate sample ids (consumed by this function)
/// * `ratio`   - Segment proportions, e.g. 70/15/15
/// * `rng`     - The run's shared random source
pub fn split_three_way<R: Rng + ?Sized>(
    mut indices: Vec<usize>,
    ratio:       SplitRatio,
    rng:         &mut R,
) -> SplitPartition {
    indices.shuffle(rng);

    let total = indices.len();
    let (n_train, n_val, n_test) = ratio.counts(total);

    // split_off(n) leaves [0..n) behind and returns [n..)
    let test = indices.split_off(n_train + n_val);
    let val  = indices.split_off(n_train);
    let train = indices;

    tracing::debug!(
        "Split {} indices: {} train, {} val, {} test",
        total,
        train.len(),
        val.len(),
        n_test,
    );

    SplitPartition { train, val, test }
}
