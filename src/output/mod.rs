pub mod formatter;

pub use formatter::{
    format_checks, format_checks_table, format_feedback, format_field_badges, format_json,
    format_keyphrase_usage, format_report, format_score_bar, format_score_header, format_snippet,
    should_use_colors, Report,
};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

/// Write the JSON report to `path` atomically.
pub fn write_report_file(path: &Path, report: &Report) -> Result<()> {
    let json = format_json(report)?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    file.write_all(b"\n")
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    file.commit().context("Failed to save report")?;

    Ok(())
}
