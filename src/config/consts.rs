// src/config/consts.rs

// Files (working directory)
pub const DEFAULT_INPUT_FILE: &str = "naics.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";
pub const LOG_FILE: &str = "naics_html.log";

// Document
pub const PAGE_TITLE: &str = "NAICS Codes";
pub const PAGE_HEADING: &str = "NAICS Code Listing";
