// ============================================================
// Layer 5 — Index README
// ============================================================
// Renders indices_readme.txt: a fixed description of every
// generated file family, the seed and the split ratio.
//
// Rendering is a pure function of ReadmeContext, so it has no
// dependency on the drivers having run (or succeeded).

use std::path::PathBuf;

use crate::domain::{
    dataset::{DatasetConfig, Selection},
    error::IndexError,
    split::SplitRatio,
};
use crate::infra::index_writer::IndexWriter;

/// File name of the generated README
pub const README_FILE: &str = "indices_readme.txt";

const RULE: &str = "--------------------------------------------";

/// Everything the README mentions
pub struct ReadmeContext<'a> {
    pub seed:    u64,
    pub ratio:   SplitRatio,
    pub configs: &'a [DatasetConfig],
}

/// Render the README text. Every line, the last included,
/// ends with a newline.
pub fn render_readme(ctx: &ReadmeContext<'_>) -> String {
    let ratio = ctx.ratio.percent_label();

    let mut lines: Vec<String> = vec![
        "Indices Documentation".to_string(),
        "=====================".to_string(),
        String::new(),
        "This directory contains the exact sample indices used in all experiments.".to_string(),
        format!("These indices reproduce the {ratio} train, validation, and test splits"),
        format!("using the same random seed ({}).", ctx.seed),
    ];

    for (n, cfg) in ctx.configs.iter().enumerate() {
        lines.push(String::new());
        lines.push(RULE.to_string());
        lines.push(format!("{}. {}", n + 1, heading(cfg)));
        lines.push(RULE.to_string());
        lines.push(String::new());
        lines.push("Files:".to_string());
        for segment in ["train", "val", "test"] {
            lines.push(format!("- {}", cfg.file_name(segment)));
        }

        if let Selection::Balanced { total, classes } = cfg.selection {
            lines.push(String::new());
            lines.push("Constructed as:".to_string());
            lines.push(format!("- balanced subset across {classes} classes"));
            lines.push(format!("- total = {} samples", thousands(total)));
            lines.push(format!("- random seed = {}", ctx.seed));
            lines.push(format!("- split ratio = {ratio}"));
        }
    }

    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.push("Format:".to_string());
    lines.push("Each file contains one integer index per line.".to_string());
    lines.push("These indices correspond to MedMNIST dataset sample ordering".to_string());
    lines.push("within the train split.".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Render and write the README through `writer`.
pub fn write_readme(writer: &IndexWriter, ctx: &ReadmeContext<'_>) -> Result<PathBuf, IndexError> {
    let path = writer.write_text(README_FILE, &render_readme(ctx))?;
    println!("Saved README: {}", path.display());
    Ok(path)
}

fn heading(cfg: &DatasetConfig) -> String {
    match cfg.selection {
        Selection::Balanced { total, .. } => {
            format!("{} {}-sample balanced subset", cfg.dataset, thousands(total))
        }
        Selection::Full => format!("{} Full Dataset (train split)", cfg.dataset),
    }
}

/// 30000 → "30,000"
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::random::DEFAULT_SEED;

    fn standard_readme() -> String {
        let configs = DatasetConfig::standard_set(30_000, 9);
        render_readme(&ReadmeContext {
            seed:    DEFAULT_SEED,
            ratio:   SplitRatio::default(),
            configs: &configs,
        })
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(30_000), "30,000");
        assert_eq!(thousands(1_107_180), "1,107,180");
    }

    #[test]
    fn test_mentions_seed_and_ratio() {
        let text = standard_readme();
        assert!(text.contains("random seed (42)"));
        assert!(text.contains("- random seed = 42"));
        assert!(text.contains("70/15/15"));
    }

    #[test]
    fn test_lists_every_file() {
        let text = standard_readme();
        for tag in ["30k", "full_pathmnist", "full_bloodmnist"] {
            for segment in ["train", "val", "test"] {
                assert!(text.contains(&format!("- indices_{tag}_{segment}.txt")));
            }
        }
    }

    #[test]
    fn test_section_headings() {
        let text = standard_readme();
        assert!(text.contains("1. PathMNIST 30,000-sample balanced subset"));
        assert!(text.contains("2. PathMNIST Full Dataset"));
        assert!(text.contains("3. BloodMNIST Full Dataset"));
        assert!(text.contains("balanced subset across 9 classes"));
    }

    #[test]
    fn test_layout_is_line_terminated() {
        let text = standard_readme();
        assert!(text.starts_with("Indices Documentation\n=====================\n\n"));
        assert!(text.ends_with("within the train split.\n"));
        assert!(!text.ends_with("\n\n"));
        assert!(text.contains("Files:\n- indices_30k_train.txt\n- indices_30k_val.txt\n- indices_30k_test.txt\n"));
    }

    #[test]
    fn test_write_readme() {
        let tmp    = tempfile::tempdir().unwrap();
        let writer = IndexWriter::new(tmp.path());
        let configs = DatasetConfig::standard_set(30_000, 9);
        let ctx = ReadmeContext { seed: 7, ratio: SplitRatio::default(), configs: &configs };

        let path = write_readme(&writer, &ctx).unwrap();
        assert_eq!(path, tmp.path().join(README_FILE));
        assert_eq!(std::fs::read_to_string(path).unwrap(), render_readme(&ctx));
    }
}
