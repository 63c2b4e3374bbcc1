/**
 * Bundle Finaliser CLI - export-block
 *
 * Prints the namespace markers and export block of every unit in the given manifests
 */
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use std::process;

use bundle_finaliser_cli::compile::finalise_units;
use bundle_finaliser_cli::logging::{init_tracing, ConsoleLogger, LogLevel, Logger};
use bundle_finaliser_cli::manifest::{resolve_manifest_paths, Manifest, OptionOverrides};

fn main() {
    let matches = Command::new("export-block")
        .version(bundle_finaliser_cli::version())
        .about("Render export blocks for CommonJS and AMD units")
        .arg(
            Arg::new("manifest")
                .value_name("PATH")
                .help("Unit manifest (JSON) or glob pattern")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .action(ArgAction::SetTrue)
                .help("Drop optional whitespace"),
        )
        .arg(
            Arg::new("arrow-functions")
                .long("arrow-functions")
                .action(ArgAction::SetTrue)
                .help("Use arrow functions for getters and callbacks"),
        )
        .arg(
            Arg::new("const-bindings")
                .long("const-bindings")
                .action(ArgAction::SetTrue)
                .help("Declare loop variables with const"),
        )
        .arg(
            Arg::new("mechanism")
                .long("mechanism")
                .value_name("PREFIX")
                .help("Prefix of the default-only export statement, e.g. 'module.exports = '"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .default_value("warn")
                .help("debug, info, warn or error"),
        )
        .get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map(|l| l.parse::<LogLevel>())
        .unwrap_or(Ok(LogLevel::Warn))
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(2);
        });
    init_tracing(level);
    let logger = ConsoleLogger::new(level);

    let inputs: Vec<String> = matches
        .get_many::<String>("manifest")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let overrides = OptionOverrides {
        compact: matches.get_flag("compact"),
        arrow_functions: matches.get_flag("arrow-functions"),
        const_bindings: matches.get_flag("const-bindings"),
        mechanism: matches.get_one::<String>("mechanism").cloned(),
    };

    let paths = match resolve_manifest_paths(&inputs) {
        Ok(paths) => paths,
        Err(e) => {
            logger.error(&format!("{:#}", e));
            process::exit(1);
        }
    };

    let mut failed = false;
    for path in paths {
        if !run_manifest(&path, &overrides, &logger) {
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}

fn run_manifest(path: &Path, overrides: &OptionOverrides, logger: &ConsoleLogger) -> bool {
    let mut manifest = match Manifest::load(path) {
        Ok(manifest) => manifest,
        Err(e) => {
            logger.error(&format!("{:#}", e));
            return false;
        }
    };
    overrides.apply(&mut manifest.options);
    logger.info(&format!("{}: {} units", path.display(), manifest.units.len()));

    let mut ok = true;
    for report in finalise_units(&manifest.units, &manifest.options, logger) {
        match report.output {
            Ok(output) => {
                println!("// {}:{}", path.display(), report.name);
                println!("{}", output);
            }
            Err(e) => {
                logger.error(&format!("{}:{}: {}", path.display(), report.name, e));
                ok = false;
            }
        }
    }
    ok
}
