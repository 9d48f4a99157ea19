//! Command-line interface for marklet
//! This binary renders marklet sources to HTML, or dumps the intermediate
//! token stream and tree for inspection.
//!
//! Usage:
//!   marklet render [`<path>`] [--format `<format>`] [--config `<file>`] [--trace]
//!   marklet list-formats
//!
//! With no path, or with `-`, the source is read from stdin.

use clap::{Arg, ArgAction, ArgMatches, Command};
use marklet::config::{LoadError, Loader, MarkletConfig, TraceConfig};
use marklet::formats::to_treeviz_str;
use marklet::pipeline::{Pipeline, Trace};
use marklet::processor::{
    available_formats, format_tokens, process_with, OutputFormat, ProcessingSpec,
};
use std::io::Read;

fn main() {
    let matches = Command::new("marklet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render marklet markup to HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render a source file (or stdin)")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file, or '-' for stdin")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'html-fragment', 'ast-treeviz')"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                )
                .arg(
                    Arg::new("trace")
                        .long("trace")
                        .help("Write tokens and tree to stderr while rendering")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("render", render_matches)) => handle_render_command(render_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_config(matches: &ArgMatches) -> Result<MarkletConfig, LoadError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("render.format", format.as_str())?;
    }
    if matches.get_flag("trace") {
        loader = loader
            .set_override("trace.tokens", true)?
            .set_override("trace.tree", true)?;
    }
    loader.build()
}

fn read_source(path: Option<&String>) -> std::io::Result<String> {
    match path.map(String::as_str) {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

/// Write the stages selected in `trace` to stderr
fn trace_to_stderr(trace: TraceConfig, stage: Trace<'_>) {
    match stage {
        Trace::Tokens(tokens) if trace.tokens => {
            let dump = format_tokens(tokens, OutputFormat::Simple).unwrap_or_default();
            eprintln!("=== tokens ===\n{}", dump);
        }
        Trace::Tree(doc) if trace.tree => {
            eprintln!("=== tree ===\n{}", to_treeviz_str(doc));
        }
        Trace::Html(html) if trace.html => {
            eprintln!("=== html ===\n{}", html);
        }
        _ => {}
    }
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) {
    let config = load_config(matches).unwrap_or_else(|e| fail(e));
    let spec = ProcessingSpec::from_string(&config.render.format).unwrap_or_else(|e| fail(e));
    let source = read_source(matches.get_one::<String>("path"))
        .unwrap_or_else(|e| fail(format!("reading source: {}", e)));

    let mut pipeline = Pipeline::new();
    if config.trace.any() {
        let trace = config.trace;
        pipeline = pipeline.with_hook(move |stage| trace_to_stderr(trace, stage));
    }

    let output = process_with(&mut pipeline, &source, &spec).unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
