//! Configuration management for pms-tracker.
//!
//! Configuration is optional. Without a file every value has a built-in
//! default; a YAML file given with `--config` overrides any subset of them.

mod settings;

pub use settings::{Config, ReportConfig, DEFAULT_OUTPUT_FILE};
