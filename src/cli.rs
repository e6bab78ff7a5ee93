//! CLI arguments and subcommands for pulsepilot.
//!
//! This module defines the command-line interface structure using the clap library,
//! including all flags, options, and subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Configuration format options for output
#[derive(Debug, Clone, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Scan output format selectable for `generate-testdata`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CaptureFormat {
    Linux,
    Windows,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "pulsepilot",
    about = "Scan nearby WiFi networks, track a network's signal and write a CSV report",
    long_about = "Scan nearby WiFi networks, track a network's signal and write a CSV report.\n\n\
                  Uses nmcli on Linux and netsh on Windows to list access points, then \
                  tabulates signal, channel and security, tracks one SSID over time, \
                  analyzes channel crowding and frequency bands, looks up access point \
                  manufacturers and saves everything to a CSV report.",
    version = "0.1.0",
    propagate_version = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Config file (YAML/JSON/TOML)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable all config file loading
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Print effective merged config and exit
    #[arg(long)]
    pub show_config: bool,

    /// Output format for --show-config
    #[arg(long, value_enum, default_value = "yaml")]
    pub config_format: ConfigFormat,

    /// Validate config and exit (return code 1 on error)
    #[arg(long)]
    pub check_config: bool,

    /// Override the detected platform (linux, windows)
    #[arg(long, global = true)]
    pub platform: Option<String>,

    /// Replay a captured scan output file instead of running the OS scan command
    #[arg(long, global = true)]
    pub scan_file: Option<PathBuf>,

    /// CSV report path
    #[arg(long, global = true)]
    pub report_file: Option<PathBuf>,

    /// Base URL of the MAC vendor lookup service
    #[arg(long, global = true)]
    pub vendor_api_url: Option<String>,

    /// Skip manufacturer lookups
    #[arg(long, global = true)]
    pub disable_vendor_lookup: bool,

    /// Width of terminal charts in characters
    #[arg(long, global = true)]
    pub chart_width: Option<usize>,
}

/// Subcommands for additional functionality
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan once and list visible networks
    Scan {
        /// Also draw a signal strength bar chart
        #[arg(long)]
        chart: bool,
    },

    /// Track the signal of one network over time
    Track {
        /// SSID to track (prompts with a numbered menu when omitted)
        #[arg(short = 's', long)]
        ssid: Option<String>,

        /// Tracking duration in seconds
        #[arg(short = 'd', long)]
        duration: Option<u64>,

        /// Sampling interval in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Draw a signal-over-time chart when done
        #[arg(long)]
        chart: bool,
    },

    /// Analyze channel distribution, security levels and frequency bands
    Analyze,

    /// Look up the manufacturer of every scanned access point
    Lookup,

    /// Scan and save the CSV analysis report
    Report {
        /// Output file path (overrides report_file)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Full pipeline: scan, chart, select, track, analyze, lookup, report
    Run {
        /// SSID to track (prompts with a numbered menu when omitted)
        #[arg(short = 's', long)]
        ssid: Option<String>,
    },

    /// Generate configuration files
    Config {
        /// Output file path ("-" for stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: ConfigFormat,

        /// Include comments and examples
        #[arg(long)]
        commented: bool,
    },

    /// Generate a synthetic scan capture for use with --scan-file
    GenerateTestdata {
        /// Output file path
        #[arg(short = 'o', long, default_value = "scan-capture.txt")]
        output: PathBuf,

        /// Output format to imitate
        #[arg(long, value_enum, default_value = "linux")]
        format: CaptureFormat,

        /// Number of networks to generate
        #[arg(short = 'n', long, default_value_t = 12)]
        networks: usize,
    },
}
