// Command-line interface for the docs pipeline
//
// This binary wraps the two tools of the documentation build, both implemented in docs-babel:
//
// Converting:
//
// Rewrites a tree of Hugo Markdown documents into MDX. The destination is cleaned first (see
// convert.clean_destination) and every .md file except section indexes is converted to .mdx at
// the same relative path.
//
// Generating:
//
// Merges one or more YAML site configs and prints the JSON site config, validated against the
// schema it references. Schemas are only read from disk: a remote $schema needs --schema (or
// generate.schema_path) pointing at a local copy, otherwise validation is skipped with a warning.
//
// Usage:
//  docs convert <source_dir> <dest_dir>
//  docs generate [--detect-missing] [--skip-validation] [--schema <path>] [-o <file>] <config>...
//
// Configuration is read from ./docs.toml when present, then from --config <path>.

mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use docs_babel::navigation::{find_unlisted_pages, generate, merge_configs, DocsJson, SiteConfig};
use docs_babel::{convert_tree, ConvertOptions, GenerateOptions, SchemaSource, SchemaValidator};
use docs_config::{DocsConfig, Loader};
use logging::{init_logging, LogFormat};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn build_cli() -> Command {
    Command::new("docs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown docs to MDX and generate the site navigation config")
        .long_about(
            "docs prepares a documentation site for an MDX based docs platform.\n\n\
            Commands:\n  \
            - convert:  Rewrite a Markdown tree into MDX\n  \
            - generate: Build the JSON site config from YAML navigation files\n\n\
            Examples:\n  \
            docs convert content/en/docs docs                 # Convert the Hugo tree\n  \
            docs generate docs-config.yaml > docs.json        # Generate the site config\n  \
            docs generate --detect-missing docs-config.yaml   # List pages missing from navigation"
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a docs.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .help("Log output format")
                .value_parser(clap::builder::PossibleValuesParser::new(LogFormat::NAMES))
                .default_value("human")
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a Markdown tree to MDX")
                .long_about(
                    "Convert every Markdown document below <source_dir> into MDX below <dest_dir>.\n\n\
                    The destination directory is removed and recreated unless\n\
                    convert.clean_destination is false. Section index documents (_index.md)\n\
                    are skipped.\n\n\
                    Examples:\n  \
                    docs convert content/en/docs docs\n  \
                    docs -v convert content/en/docs docs    # Log every converted file"
                )
                .arg(
                    Arg::new("source")
                        .help("Directory holding the Markdown sources")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("dest")
                        .help("Directory to write MDX documents to")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate the JSON site config from YAML files")
                .long_about(
                    "Merge the given YAML configs and print the resulting JSON site config.\n\n\
                    The first file provides every setting; navigation tabs of all files are\n\
                    concatenated in order.\n\n\
                    Examples:\n  \
                    docs generate docs-config.yaml extra-tabs.yaml > docs.json\n  \
                    docs generate --schema schema/docs.json -o docs.json docs-config.yaml\n  \
                    docs generate --detect-missing docs-config.yaml"
                )
                .arg(
                    Arg::new("configs")
                        .help("YAML site configuration files, base file first")
                        .required(true)
                        .num_args(1..)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("detect-missing")
                        .long("detect-missing")
                        .help("List page files not covered by any navigation group")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("skip-validation")
                        .long("skip-validation")
                        .help("Skip JSON schema validation")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("schema")
                        .long("schema")
                        .value_name("PATH")
                        .help("Local JSON schema to validate against")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("root")
                        .long("root")
                        .value_name("DIR")
                        .help("Directory searched by --detect-missing")
                        .default_value(".")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let log_format = matches
        .get_one::<String>("log-format")
        .and_then(|name| LogFormat::from_name(name))
        .unwrap_or_default();
    init_logging(log_format, matches.get_count("verbose"));

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let source = sub_matches
                .get_one::<String>("source")
                .expect("source is required");
            let dest = sub_matches
                .get_one::<String>("dest")
                .expect("dest is required");
            handle_convert_command(Path::new(source), Path::new(dest), &config);
        }
        Some(("generate", sub_matches)) => {
            handle_generate_command(sub_matches, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(source: &Path, dest: &Path, config: &DocsConfig) {
    let options = ConvertOptions::from(&config.convert);
    let report = convert_tree(source, dest, &options).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    println!("Conversion complete!");
    println!("Converted files: {}", report.converted_count());
}

/// Handle the generate command
fn handle_generate_command(matches: &ArgMatches, config: &DocsConfig) {
    let paths: Vec<&String> = matches
        .get_many::<String>("configs")
        .expect("configs are required")
        .collect();
    let options = GenerateOptions::from(&config.generate);

    let site = merge_configs(&paths).unwrap_or_else(|e| {
        eprintln!("Error processing config files: {e}");
        std::process::exit(1);
    });

    if matches.get_flag("detect-missing") {
        let root = matches
            .get_one::<String>("root")
            .expect("root has a default");
        handle_detect_missing(&site, Path::new(root), &options);
        return;
    }

    let docs = generate(&site, &options);

    if !matches.get_flag("skip-validation") && config.generate.validate {
        let local_schema = matches
            .get_one::<String>("schema")
            .or(config.generate.schema_path.as_ref())
            .map(PathBuf::from);
        validate_docs(&docs, &site.schema, local_schema).unwrap_or_else(|e| {
            eprintln!("Schema validation failed: {e}");
            std::process::exit(1);
        });
    }

    let json = docs.to_json_pretty().unwrap_or_else(|e| {
        eprintln!("Error marshaling JSON: {e}");
        std::process::exit(1);
    });

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, format!("{json}\n")).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            info!("Wrote {path}");
        }
        None => println!("{json}"),
    }
}

/// Validate against the local schema if given, else against the referenced one when it is local.
fn validate_docs(
    docs: &DocsJson,
    reference: &str,
    local_schema: Option<PathBuf>,
) -> docs_babel::Result<()> {
    let schema_path = match local_schema {
        Some(path) => path,
        None if reference.is_empty() => return Ok(()),
        None => match SchemaSource::from_reference(reference) {
            SchemaSource::Local(path) => path,
            SchemaSource::Remote(url) => {
                warn!("Skipping schema validation: {url} is remote, pass --schema with a local copy");
                return Ok(());
            }
        },
    };

    let validator = SchemaValidator::from_path(&schema_path)?;
    validator.validate(&serde_json::to_value(docs)?)?;
    info!("Validated against {}", schema_path.display());
    Ok(())
}

/// Handle `generate --detect-missing`
fn handle_detect_missing(site: &SiteConfig, root: &Path, options: &GenerateOptions) {
    let missing = find_unlisted_pages(site, root, options).unwrap_or_else(|e| {
        eprintln!("Error checking missing files: {e}");
        std::process::exit(1);
    });

    if missing.is_empty() {
        println!("✅ All page files are included in configured folders");
        return;
    }

    println!(
        "⚠️  Found {} page files not included in any configured folder:\n",
        missing.len()
    );
    for file in &missing {
        println!("  - {file}");
    }
    println!("\nTo include these files, add their parent folders to the navigation groups.");
}

fn load_cli_config(explicit_path: Option<&str>) -> DocsConfig {
    let loader = Loader::new().with_optional_file("docs.toml");
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
