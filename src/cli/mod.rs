// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for the generator. Parses the (optional)
// locations, prints the progress banner and hands everything
// else to Layer 2.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::LocationArgs;

use crate::application::generate_use_case::GenerateUseCase;

/// A bare `medmnist-indices` invocation is the supported surface;
/// the location flags exist only to point at other directories.
#[derive(Parser, Debug)]
#[command(
    name = "medmnist-indices",
    version = "0.1.0",
    about = "Generate reproducible 70/15/15 index splits for PathMNIST and BloodMNIST.",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub locations: LocationArgs,
}

impl Cli {
    /// Run the full generator once.
    pub fn run(self) -> Result<()> {
        println!("Generating dataset indices...");

        let use_case = GenerateUseCase::new(self.locations.into());
        let summary  = use_case.execute()?;

        for c in &summary.configs {
            tracing::info!(
                "{}: {} train, {} val, {} test",
                c.tag,
                c.train,
                c.val,
                c.test
            );
        }

        tracing::debug!("README at '{}'", summary.readme.display());

        println!("All indices generated successfully!");
        Ok(())
    }
}
