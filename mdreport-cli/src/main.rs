// Command-line interface for mdreport
//
// This binary converts markdown analysis reports into standalone HTML pages.
//
// Converting:
//
// The renderer and page kind default to the configuration (mdreport.toml
// layered over the embedded defaults) and can be overridden per invocation.
// Usage:
//  mdreport <input> [--page <kind>] [--output <file>]          - Convert a report (default)
//  mdreport convert <input> [--renderer <name>] [-o <file>]    - Same as above (explicit)
//  mdreport inspect <input>                                    - Print extracted metadata as JSON
//  mdreport generate-css                                       - Print the embedded stylesheet
//  mdreport --list-renderers                                   - List available renderers

use clap::{Arg, ArgAction, Command, ValueHint};
use mdreport_config::{Loader, MdreportConfig};
use mdreport_render::meta::{Clock, SystemClock};
use mdreport_render::page::{self, PageKind, PageOptions};
use mdreport_render::{convert_report, RendererRegistry};
use std::fs;
use std::path::Path;

fn build_cli() -> Command {
    Command::new("mdreport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting markdown analysis reports to HTML pages")
        .long_about(
            "mdreport is a command-line tool for turning markdown analysis reports\n\
            into standalone HTML pages with navigation, a table of contents and a\n\
            theme toggle.\n\n\
            Commands:\n  \
            - convert: Render a markdown report to a full HTML page (default)\n  \
            - inspect: Print the extracted title, date and headings as JSON\n  \
            - generate-css: Print the embedded stylesheet\n\n\
            Examples:\n  \
            mdreport market_2025-07-14.md -o market.html   # Convert a report\n  \
            mdreport report.md --page holdings             # Mark the holdings nav entry active\n  \
            mdreport report.md --fragment                  # Emit only the body fragment\n  \
            mdreport inspect report.md                     # Show metadata and headings",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-renderers")
                .long("list-renderers")
                .help("List available renderers")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdreport.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a markdown report to an HTML page (default command)")
                .long_about(
                    "Convert a markdown report into a standalone HTML page.\n\n\
                    The page embeds its stylesheet and behavior script, so the output\n\
                    file has no external dependencies.\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    mdreport convert report.md -o market.html      # Write the page to a file\n  \
                    mdreport convert report.md --page home         # Highlight the Home nav entry\n  \
                    mdreport convert report.md --renderer cmark    # Full CommonMark parsing\n  \
                    mdreport convert report.md --no-toc            # Drop the TOC sidebar\n  \
                    mdreport report.md -o market.html              # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input markdown file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("renderer")
                        .long("renderer")
                        .help("Renderer to use (defaults to the configured renderer)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("page")
                        .long("page")
                        .help("Page kind, controls the active navigation entry")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "market", "holdings", "home",
                        ]))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("site-name")
                        .long("site-name")
                        .help("Site name shown in the navigation brand and page title")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("no-toc")
                        .long("no-toc")
                        .help("Skip the table-of-contents sidebar")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("fragment")
                        .long("fragment")
                        .help("Emit only the rendered body fragment, without the page shell")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print extracted metadata and headings as JSON")
                .long_about(
                    "Extract the title, date and h2-h4 headings from a markdown report\n\
                    and print them as JSON, without assembling a page.\n\n\
                    Examples:\n  \
                    mdreport inspect report.md                   # Metadata from the default renderer\n  \
                    mdreport inspect report.md --renderer cmark  # Headings as comrak sees them",
                )
                .arg(
                    Arg::new("input")
                        .help("Input markdown file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("renderer")
                        .long("renderer")
                        .help("Renderer to use (defaults to the configured renderer)")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the stylesheet embedded into generated pages")
                .long_about(
                    "Outputs the stylesheet that gets embedded into every generated page.\n\n\
                    Use this as a starting point for custom styling, e.g. to serve the\n\
                    sheet separately instead of inlining it.\n\n\
                    Examples:\n  \
                    mdreport generate-css                  # Print CSS to stdout\n  \
                    mdreport generate-css > report.css     # Save to file for editing",
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the first arg looks like a file
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "inspect"
                && args[1] != "generate-css"
                && args[1] != "help"
            {
                // Inject "convert" as the subcommand
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject convert, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-renderers") {
        handle_list_renderers_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let renderer = sub_matches
                .get_one::<String>("renderer")
                .unwrap_or(&config.convert.renderer)
                .to_string();
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

            let options = page_options_from_matches(sub_matches, &config);
            let fragment = sub_matches.get_flag("fragment");
            handle_convert_command(input, &renderer, output, fragment, options, &config);
        }
        Some(("inspect", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let renderer = sub_matches
                .get_one::<String>("renderer")
                .unwrap_or(&config.convert.renderer)
                .to_string();
            handle_inspect_command(input, &renderer, &config);
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn page_options_from_matches(
    sub_matches: &clap::ArgMatches,
    config: &MdreportConfig,
) -> PageOptions {
    let mut options = config.page_options().unwrap_or_else(|err| {
        eprintln!("Invalid configuration: {err}");
        std::process::exit(1);
    });

    if let Some(kind) = sub_matches.get_one::<String>("page") {
        options.kind = kind.parse::<PageKind>().unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            std::process::exit(1);
        });
    }
    if let Some(site_name) = sub_matches.get_one::<String>("site-name") {
        options.site_name = site_name.clone();
    }
    if sub_matches.get_flag("no-toc") {
        options.toc = false;
    }

    options
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    renderer: &str,
    output: Option<&str>,
    fragment: bool,
    mut options: PageOptions,
    config: &MdreportConfig,
) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let clock = SystemClock::from_env(&config.date.timezone);
    options.generated_at = Some(clock.timestamp());

    let filename = Path::new(input).file_name().and_then(|n| n.to_str());
    let report = convert_report(&source, renderer, filename, &clock, &options)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    let result = if fragment {
        let mut body = report.rendered.html.clone();
        body.push('\n');
        body
    } else {
        report.html
    };

    match output {
        Some(path) => {
            fs::write(path, &result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            eprintln!("Converted '{input}' -> '{path}'");
            eprintln!("  Title: {}", report.meta.title);
            eprintln!("  Date:  {}", report.meta.date);
        }
        None => {
            print!("{result}");
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, renderer: &str, config: &MdreportConfig) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let registry = RendererRegistry::with_defaults();
    let rendered = registry.render(&source, renderer).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let clock = SystemClock::from_env(&config.date.timezone);
    let filename = Path::new(input).file_name().and_then(|n| n.to_str());
    let meta = mdreport_render::meta::extract_with_fallback(&source, filename, &clock);

    let report = serde_json::json!({
        "title": meta.title,
        "date": meta.date,
        "headings": rendered.headings,
    });

    match serde_json::to_string_pretty(&report) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error serializing metadata: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", page::default_css());
}

/// Handle the list-renderers command
fn handle_list_renderers_command() {
    println!("Available renderers:\n");
    let registry = RendererRegistry::with_defaults();
    for name in registry.list_renderers() {
        match registry.get(&name) {
            Ok(renderer) => println!("  {name:<10} {}", renderer.description()),
            Err(_) => println!("  {name}"),
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MdreportConfig {
    let loader = Loader::new().with_optional_file("mdreport.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
