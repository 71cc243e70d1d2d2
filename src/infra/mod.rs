// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Concerns shared by every driver:
//
//   random.rs        — the single seeded random source
//   index_writer.rs  — one-integer-per-line output files
//   readme.rs        — indices_readme.txt rendering

/// Seeded ChaCha8 random source
pub mod random;

/// Plain-text index file writer
pub mod index_writer;

/// README template and writer
pub mod readme;
