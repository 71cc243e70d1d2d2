// ============================================================
// Layer 5 — Seeded Random Source
// ============================================================
// One generator for the whole run, created once from the fixed
// seed and passed by `&mut` into every function that shuffles
// or samples. Nothing in the crate calls thread_rng().
//
// ChaCha8Rng's stream is fixed by rand_chacha; StdRng's
// algorithm is allowed to change between rand releases.
//
// The output is deterministic within this implementation only;
// it is not bit-identical to any other language's generator.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The random source threaded through selection and splitting
pub type RandomSource = ChaCha8Rng;

/// Seed used for every published index file
pub const DEFAULT_SEED: u64 = 42;

/// Build the run's random source from `seed`
pub fn seeded(seed: u64) -> RandomSource {
    tracing::debug!("Seeding random source with {}", seed);
    ChaCha8Rng::seed_from_u64(seed)
}
