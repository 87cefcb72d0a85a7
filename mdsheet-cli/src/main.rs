//! Command-line interface for mdsheet
//! Generates one datasheet per configured module from the module READMEs
//! under a repository root, printing one status line per module.
//!
//! Usage:
//!   mdsheet <root> [--strategy full|summary] [--format docx|markdown|tag]
//!   mdsheet <root> --config overrides.toml
//!   mdsheet --list-formats

use clap::{Arg, ArgAction, Command};
use std::path::Path;

use mdsheet_babel::FormatRegistry;
use mdsheet_config::Loader;

mod runner;

use runner::{BatchRunner, ModuleOutcome, Strategy};

fn main() {
    let matches = Command::new("mdsheet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate module datasheets from product READMEs")
        .arg_required_else_help(true)
        .arg(
            Arg::new("root")
                .help("Repository root containing the module directories")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .short('s')
                .help("Assembly strategy: 'full' (structural copy) or 'summary' (selective extraction)")
                .default_value("full"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (see --list-formats)")
                .default_value("docx"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let registry = FormatRegistry::with_defaults();

    if matches.get_flag("list-formats") {
        handle_list_formats(&registry);
        return;
    }

    let root = matches
        .get_one::<String>("root")
        .expect("root is required unless listing formats");
    let strategy = matches.get_one::<String>("strategy").expect("has default");
    let format = matches.get_one::<String>("format").expect("has default");
    let config_path = matches.get_one::<String>("config");

    handle_generate(&registry, root, strategy, format, config_path);
}

fn handle_generate(
    registry: &FormatRegistry,
    root: &str,
    strategy: &str,
    format: &str,
    config_path: Option<&String>,
) {
    let strategy = Strategy::parse(strategy).unwrap_or_else(|| {
        eprintln!("Unknown strategy '{}'", strategy);
        eprintln!("Available strategies: full, summary");
        std::process::exit(1);
    });

    if !registry.has(format) {
        eprintln!("Format '{}' not found", format);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    }

    let mut loader = Loader::new();
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let root = Path::new(root);
    let runner = BatchRunner::new(&config, registry, strategy, format);

    println!("Generating module datasheets from READMEs...");
    for module in runner.modules() {
        match runner.process_module(root, module) {
            ModuleOutcome::Written(path) => {
                let shown = path.strip_prefix(root).unwrap_or(&path);
                println!("  OK {} -> {}", module, shown.display());
            }
            ModuleOutcome::Skipped(reason) => println!("  Skip {}: {}", module, reason),
            ModuleOutcome::Failed(detail) => println!("  Error {}: {}", module, detail),
        }
    }
    println!("Done.");
}

fn handle_list_formats(registry: &FormatRegistry) {
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        let format = registry.get(&name).expect("listed format exists");
        println!("  {}", name);
        println!("    {}", format.description());
        println!();
    }
}
