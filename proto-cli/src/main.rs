//! Command-line interface for proto
//! This binary compiles proto files and prints one stage of the pipeline.
//!
//! Usage:
//!   proto `<path>` [--format `<format>`] [--screen `<name>`]   - Compile and print a stage
//!   proto `<path>` --config `<file>` --set render.theme=dark   - Layer configuration

mod logging;
mod output;

use clap::{Arg, ArgAction, Command};
use proto_config::{Loader, ProtoConfig};
use proto_parser::Severity;
use std::process;

fn main() {
    let matches = Command::new("proto")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile and render proto UI descriptions")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the proto file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(output::FORMATS)
                .default_value("html"),
        )
        .arg(
            Arg::new("screen")
                .long("screen")
                .short('s')
                .help("Screen to render as current (defaults to the default screen)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .help("Override a configuration key (e.g. render.theme=dark)")
                .value_name("KEY=VALUE")
                .action(ArgAction::Append),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or_default();
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("html");
    let screen = matches.get_one::<String>("screen").map(String::as_str);
    let overrides: Vec<&String> = matches
        .get_many::<String>("set")
        .map(|values| values.collect())
        .unwrap_or_default();

    let config = match load_config(matches.get_one::<String>("config"), &overrides) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };

    logging::init_logging(&config.logging.level);
    handle_compile_command(path, format, screen, &config);
}

fn load_config(file: Option<&String>, overrides: &[&String]) -> Result<ProtoConfig, String> {
    let mut loader = Loader::new();
    if let Some(file) = file {
        loader = loader.with_file(file);
    }
    for entry in overrides {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("Invalid override '{}': expected KEY=VALUE", entry))?;
        loader = loader
            .set_override(key.trim(), value.trim().to_string())
            .map_err(|e| format!("Invalid override '{}': {}", entry, e))?;
    }
    loader
        .build()
        .map_err(|e| format!("Failed to load configuration: {}", e))
}

/// Handle the compile command
fn handle_compile_command(path: &str, format: &str, screen: Option<&str>, config: &ProtoConfig) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error: failed to read '{}': {}", path, e);
        process::exit(1);
    });
    log::info!("compiling {} as {}", path, format);

    let output = output::produce(format, &source, config, screen).unwrap_or_else(|e| {
        eprintln!("Error: failed to serialize output: {}", e);
        process::exit(1);
    });

    println!("{}", output.text);

    // The errors format already prints them on stdout.
    if format != "errors" {
        for diagnostic in &output.diagnostics {
            eprintln!("{}: {}", path, diagnostic);
        }
    }

    if output
        .diagnostics
        .iter()
        .any(|diagnostic| diagnostic.severity != Severity::Warning)
    {
        process::exit(1);
    }
}
