// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// Runs the whole generator, top to bottom:
//
//   Step 1: Seed the random source                (Layer 5)
//   Step 2: For each dataset configuration, in order:
//             a. Build the candidate indices      (Layer 4)
//                  Full     → 0..N
//                  Balanced → stratified subset
//             b. Shuffle + 70/15/15 split          (Layer 4)
//             c. Write train/val/test files        (Layer 5)
//   Step 3: Write indices_readme.txt              (Layer 5)
//
// All drivers share ONE random source. Running them in a
// different order changes every later draw, so the order in
// GeneratorConfig::configs is part of the output's identity.
//
// A driver computes its whole partition in memory before
// writing, so a failing selection leaves no files behind for
// that configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::Rng;

use crate::data::{
    medmnist::MedMnistSource,
    splitter::split_three_way,
    stratified::{group_by_class, select_balanced},
};
use crate::domain::{
    dataset::{DatasetConfig, DatasetId, Selection},
    split::{DatasetSplit, SplitPartition, SplitRatio},
    traits::LabelSource,
};
use crate::infra::{
    index_writer::IndexWriter,
    random::{self, DEFAULT_SEED},
    readme::{write_readme, ReadmeContext},
};

// ─── Generator Configuration ─────────────────────────────────────────────────
// Every constant of a run. Default gives the published setup:
// seed 42, 70/15/15, balanced 30k subset over 9 classes.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub seed:       u64,
    pub data_dir:   PathBuf,
    pub output_dir: PathBuf,
    pub ratio:      SplitRatio,
    pub split:      DatasetSplit,
    pub configs:    Vec<DatasetConfig>,
}

impl GeneratorConfig {
    pub const BALANCED_TOTAL:   usize = 30_000;
    pub const BALANCED_CLASSES: usize = 9;
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed:       DEFAULT_SEED,
            data_dir:   PathBuf::from("data/medmnist"),
            output_dir: PathBuf::from("indices"),
            ratio:      SplitRatio::default(),
            split:      DatasetSplit::Train,
            configs:    DatasetConfig::standard_set(Self::BALANCED_TOTAL, Self::BALANCED_CLASSES),
        }
    }
}

// ─── Run Summary ─────────────────────────────────────────────────────────────
/// Segment sizes produced for one configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSummary {
    pub tag:   String,
    pub train: usize,
    pub val:   usize,
    pub test:  usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub configs: Vec<ConfigSummary>,
    pub readme:  PathBuf,
}

// ─── GenerateUseCase ─────────────────────────────────────────────────────────
pub struct GenerateUseCase {
    config: GeneratorConfig,
}

impl GenerateUseCase {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Open the MedMNIST archives and run every driver.
    pub fn execute(&self) -> Result<RunSummary> {
        let data_dir = &self.config.data_dir;

        let path_mnist = MedMnistSource::open(data_dir, DatasetId::PathMnist)
            .context("Cannot load PathMNIST labels")?;
        let blood_mnist = MedMnistSource::open(data_dir, DatasetId::BloodMnist)
            .context("Cannot load BloodMNIST labels")?;

        self.run(&path_mnist, &blood_mnist)
    }

    /// Run every configured driver against the given label sources,
    /// then write the README.
    pub fn run(
        &self,
        path_mnist:  &dyn LabelSource,
        blood_mnist: &dyn LabelSource,
    ) -> Result<RunSummary> {
        let cfg    = &self.config;
        let writer = IndexWriter::new(&cfg.output_dir);

        // ── Step 1: one random source for the whole run ──────────────────────
        let mut rng = random::seeded(cfg.seed);

        // ── Step 2: drivers, strictly in configured order ────────────────────
        let mut summary = RunSummary::default();
        for dataset_cfg in &cfg.configs {
            let source = match dataset_cfg.dataset {
                DatasetId::PathMnist  => path_mnist,
                DatasetId::BloodMnist => blood_mnist,
            };
            let result = run_driver(dataset_cfg, source, cfg, &writer, &mut rng)
                .with_context(|| format!("Failed to generate '{}' indices", dataset_cfg.tag))?;
            summary.configs.push(result);
        }

        // ── Step 3: README ───────────────────────────────────────────────────
        let ctx = ReadmeContext {
            seed:    cfg.seed,
            ratio:   cfg.ratio,
            configs: &cfg.configs,
        };
        summary.readme = write_readme(&writer, &ctx).context("Failed to write README")?;

        Ok(summary)
    }
}

/// Build, split and write one configuration's indices.
fn run_driver<R: Rng + ?Sized>(
    dataset_cfg: &DatasetConfig,
    source:      &dyn LabelSource,
    cfg:         &GeneratorConfig,
    writer:      &IndexWriter,
    rng:         &mut R,
) -> Result<ConfigSummary> {
    tracing::info!("Generating '{}' indices from {}", dataset_cfg.tag, source.name());

    let partition = build_partition(dataset_cfg.selection, source, cfg.split, cfg.ratio, rng)?;

    for (segment, indices) in partition.segments() {
        writer.write_indices(&dataset_cfg.file_name(segment.as_str()), indices)?;
    }
    tracing::debug!("Wrote {} indices for '{}'", partition.len(), dataset_cfg.tag);

    Ok(ConfigSummary {
        tag:   dataset_cfg.tag.clone(),
        train: partition.train.len(),
        val:   partition.val.len(),
        test:  partition.test.len(),
    })
}

/// Candidate indices for `selection`, shuffled and split.
pub fn build_partition<R: Rng + ?Sized>(
    selection: Selection,
    source:    &dyn LabelSource,
    split:     DatasetSplit,
    ratio:     SplitRatio,
    rng:       &mut R,
) -> Result<SplitPartition> {
    let candidates: Vec<usize> = match selection {
        Selection::Full => {
            let count = source.sample_count(split)?;
            tracing::info!("{} {} split: {} samples", source.name(), split, count);
            (0..count).collect()
        }
        Selection::Balanced { total, classes } => {
            let groups = group_by_class(source, split)?;
            let subset = select_balanced(&groups, total, classes, rng)?;
            tracing::info!(
                "Selected balanced subset of {} over {} classes from {}",
                subset.len(),
                classes,
                source.name()
            );
            subset
        }
    };

    Ok(split_three_way(candidates, ratio, rng))
}
