// src/cli.rs
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use crate::config::{consts::LOG_FILE, options::AppOptions};
use crate::progress::Progress;

/// Logs each pipeline step to the run log.
struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, input: &Path) {
        logf!("CLI: reading {}", input.display());
    }
    fn parsed(&mut self, records: usize) {
        logd!("CLI: {} rows to render", records);
    }
    fn written(&mut self, output: &Path) {
        logf!("CLI: wrote {}", output.display());
    }
}

/// No flags: fixed input/output names in the working directory.
pub fn run() -> Result<()> {
    crate::log::init(LOG_FILE);

    let opts = AppOptions::default();
    let summary = crate::runner::run(&opts, Some(&mut LogProgress))
        .wrap_err_with(|| {
            format!(
                "Failed to generate {} from {}",
                opts.output.display(),
                opts.input.display()
            )
        })?;

    println!(
        "Successfully generated {} with all NAICS codes from {}",
        summary.output.display(),
        summary.input.display()
    );
    Ok(())
}
