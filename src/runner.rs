// src/runner.rs
use std::io;
use std::path::PathBuf;

use crate::{
    config::options::{AppOptions, RenderOptions},
    csv, file, html,
    progress::Progress,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
}

/// CSV text in, HTML document out. No I/O.
pub fn generate(text: &str, opts: &RenderOptions) -> String {
    let records = csv::parse_records(text);
    html::render_document(&records, opts)
}

/// Read `opts.input`, render it, write `opts.output`.
/// Any read or write failure aborts the run; nothing is retried.
pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> io::Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(&opts.input);
    }

    let text = file::read_input(&opts.input).inspect_err(|e| {
        loge!("Run: read failed {}: {}", opts.input.display(), e);
    })?;

    let records = csv::parse_records(&text);
    logf!("Run: parsed {} records from {}", records.len(), opts.input.display());
    if let Some(p) = progress.as_deref_mut() {
        p.parsed(records.len());
    }

    let doc = html::render_document(&records, &opts.render);
    file::write_output(&opts.output, &doc).inspect_err(|e| {
        loge!("Run: write failed {}: {}", opts.output.display(), e);
    })?;

    if let Some(p) = progress.as_deref_mut() {
        p.written(&opts.output);
    }

    Ok(RunSummary {
        input: opts.input.clone(),
        output: opts.output.clone(),
        records: records.len(),
    })
}
