//! pulsepilot - version 0.1.0
//!
//! WiFi scanner with tracing logging.
//! This is the main entry point that resolves configuration and dispatches subcommands.

mod cli;
mod commands;
mod config;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

use cli::{Args, Commands, LogLevel};
use commands::{
    command_analyze, command_config, command_generate_testdata, command_lookup, command_report,
    command_run, command_scan, command_track,
};
use config::{resolve_config, show_config, validate_effective_config, Config};

/// Initializes tracing logging subsystem with configured log level.
///
/// Logs go to stderr so tables and charts on stdout stay clean.
fn setup_logging(config: &Config, args: &Args) {
    let log_level = match args.log_level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    debug!(
        "Logging initialized with level: {:?} (config file level: {:?})",
        args.log_level, config.log_level
    );
}

/// Helper function to load and validate configuration.
/// Exits the process with error code 1 if validation fails.
fn load_validated_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let config = resolve_config(args)?;
    if let Err(e) = validate_effective_config(&config) {
        eprintln!("❌ Configuration invalid: {}", e);
        std::process::exit(1);
    }
    Ok(config)
}

/// Main application entry point.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Early config resolution for show/check modes
    if args.show_config || args.check_config {
        let config = resolve_config(&args)?;

        if args.check_config {
            if let Err(e) = validate_effective_config(&config) {
                eprintln!("❌ Configuration invalid: {}", e);
                std::process::exit(1);
            }
            println!("✅ Configuration is valid");
            return Ok(());
        }

        return show_config(&config, args.config_format.clone());
    }

    // Config and GenerateTestdata don't need config validation
    match &args.command {
        Some(Commands::Config {
            output,
            format,
            commented,
        }) => return command_config(output.clone(), format.clone(), *commented),
        Some(Commands::GenerateTestdata {
            output,
            format,
            networks,
        }) => return command_generate_testdata(output.clone(), *format, *networks),
        _ => {}
    }

    let config = load_validated_config(&args)?;
    setup_logging(&config, &args);

    info!("Starting pulsepilot");

    match args.command {
        Some(Commands::Scan { chart }) => command_scan(chart, &config),
        Some(Commands::Track {
            ssid,
            duration,
            interval_ms,
            chart,
        }) => command_track(ssid, duration, interval_ms, chart, &config),
        Some(Commands::Analyze) => command_analyze(&config),
        Some(Commands::Lookup) => command_lookup(&config),
        Some(Commands::Report { output }) => command_report(output, &config),
        Some(Commands::Run { ssid }) => command_run(ssid, &config),
        None => command_run(None, &config),
        Some(Commands::Config { .. }) => unreachable!("Config handled above"),
        Some(Commands::GenerateTestdata { .. }) => {
            unreachable!("GenerateTestdata handled above")
        }
    }
}
