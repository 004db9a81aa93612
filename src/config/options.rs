// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub render: RenderOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            render: RenderOptions::default(),
        }
    }
}

/// Text placed in the document's `<title>` and `<h1>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    pub heading: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            heading: PAGE_HEADING.to_string(),
        }
    }
}
