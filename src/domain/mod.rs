// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing what the generator
// works with: datasets, splits, ratios, partitions, errors.
//
// Rules for this layer:
//   - NO file I/O
//   - NO random number generation
//   - NO .npz decoding
//
// Everything here can be unit tested without a single byte
// of MedMNIST data on disk.

/// Which dataset a configuration draws from, and how
pub mod dataset;

/// Dataset splits, split ratios and the three-way partition
pub mod split;

/// Typed error taxonomy for the whole generator
pub mod error;

/// The collaborator contract: sample counts and labels
pub mod traits;

/// In-memory label source used by tests across layers
#[cfg(test)]
pub mod testing;
