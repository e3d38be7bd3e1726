//! Command-line interface for lyrictag
//! This binary is used to inspect / convert annotated lyrics files into different formats.
//!
//! Usage:
//!   lyrictag process `<path>` [--format `<format>`]  - Parse a lyrics file and print the result
//!   lyrictag list-formats                          - List all available processing formats

use clap::{Arg, ArgAction, Command};
use lyrictag::lyrictag::processor::{process_file, ProcessingSpec};
use lyrictag::RenderOptions;

fn main() {
    let matches = Command::new("lyrictag")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and processing annotated lyrics files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("process")
                .about("Parse a lyrics file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the lyrics file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'sections-json', 'render-simple')")
                        .default_value("render-simple"),
                )
                .arg(
                    Arg::new("hide-style-tags")
                        .long("hide-style-tags")
                        .help("Drop style tags from rendered output")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("hide-effect-tags")
                        .long("hide-effect-tags")
                        .help("Drop effect tags from rendered output")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available processing formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("process", process_matches)) => {
            let path = process_matches.get_one::<String>("path").unwrap();
            let format = process_matches.get_one::<String>("format").unwrap();
            let options = RenderOptions {
                show_style_tags: !process_matches.get_flag("hide-style-tags"),
                show_effect_tags: !process_matches.get_flag("hide-effect-tags"),
            };
            handle_process_command(path, format, options);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the process command
fn handle_process_command(path: &str, format: &str, options: RenderOptions) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = process_file(path, &spec, options).unwrap_or_else(|e| {
        eprintln!("Processing error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available processing formats:\n");
    for spec in ProcessingSpec::all() {
        println!("  {}", spec.name());
    }
}
