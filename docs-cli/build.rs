use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn build_cli() -> Command {
    Command::new("docs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown docs to MDX and generate the site navigation config")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_parser(clap::builder::PossibleValuesParser::new(["human", "json"]))
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a Markdown tree to MDX")
                .arg(
                    Arg::new("source")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("dest")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate the JSON site config from YAML files")
                .arg(
                    Arg::new("configs")
                        .required(true)
                        .num_args(1..)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("detect-missing")
                        .long("detect-missing")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("skip-validation")
                        .long("skip-validation")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("schema")
                        .long("schema")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("root")
                        .long("root")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "docs", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "docs", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "docs", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
