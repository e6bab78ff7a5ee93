//! CLI command implementations for pulsepilot.
//!
//! This module provides implementations for all CLI subcommands:
//! - `scan`: One-shot network listing
//! - `track`: Signal tracking for one SSID
//! - `analyze`: Channel, security and band analysis
//! - `lookup`: Access point manufacturer lookup
//! - `report`: CSV report generation
//! - `run`: The full pipeline
//! - `config`: Configuration file generation
//! - `generate`: Synthetic scan capture generation

pub mod analyze;
pub mod config;
pub mod generate;
pub mod lookup;
pub mod report;
pub mod run;
pub mod scan;
pub mod track;

// Re-export command functions
pub use analyze::command_analyze;
pub use config::command_config;
pub use generate::command_generate_testdata;
pub use lookup::command_lookup;
pub use report::command_report;
pub use run::command_run;
pub use scan::command_scan;
pub use track::command_track;
