// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// The generator takes no required arguments: a bare run
// reproduces the published index files. Only the two
// locations can be changed; seed, ratios and subset size are
// fixed in GeneratorConfig.

use std::path::PathBuf;

use clap::Args;

use crate::application::generate_use_case::GeneratorConfig;

/// Input and output locations
#[derive(Args, Debug)]
pub struct LocationArgs {
    /// Directory holding pathmnist.npz and bloodmnist.npz
    #[arg(long, default_value = "data/medmnist")]
    pub data_dir: PathBuf,

    /// Directory the index files and README are written to
    #[arg(long, default_value = "indices")]
    pub output_dir: PathBuf,
}

/// Convert CLI locations into the application-layer GeneratorConfig.
/// The application layer never sees clap types.
impl From<LocationArgs> for GeneratorConfig {
    fn from(a: LocationArgs) -> Self {
        GeneratorConfig {
            data_dir:   a.data_dir,
            output_dir: a.output_dir,
            ..GeneratorConfig::default()
        }
    }
}
