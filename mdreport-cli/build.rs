use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the renderer names from mdreport-render.
// We need to duplicate this here since build scripts can't access dependency modules.
const RENDERERS: &[&str] = &["pipeline", "cmark"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdreport")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting markdown reports to HTML pages")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the markdown report")
                .required_unless_present("list-renderers")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("renderer")
                .long("renderer")
                .help("Renderer to use")
                .value_parser(clap::builder::PossibleValuesParser::new(RENDERERS))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-renderers")
                .long("list-renderers")
                .help("List available renderers")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdreport", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdreport", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdreport", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
