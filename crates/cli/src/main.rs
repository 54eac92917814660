#![deny(unsafe_code)]
//! CLI binary for the gl-conform conformance checks.
//!
//! Subcommands:
//! - `list`: print every test with its requirements
//! - `run [TESTS...]`: run tests against the reference GL, optionally write results
//! - `summary <FILE>`: print a results file written by `run`

mod error;

use clap::{ArgAction, Parser, Subcommand};
use error::{verdict_exit_code, CliError};
use gl_conform_core::harness::run_all;
use gl_conform_core::{ConformanceTest, RunResults, Status, ROOT_GROUP};
use gl_conform_reference::{ReferenceGl, ReferenceProfile};
use gl_conform_suites::TestKind;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "gl-conform", about = "OpenGL conformance checks")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Raise the log level (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every test and what it needs from the context.
    List,
    /// Run tests against the reference GL.
    Run {
        /// Test names (e.g. "gl-1.0/simple-readbuffer"). All tests when empty.
        tests: Vec<String>,

        /// Reference profile as a JSON file. Conformant defaults when absent.
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Write the results file here.
        #[arg(short, long)]
        results: Option<PathBuf>,
    },
    /// Print the per-test status and totals of a results file.
    Summary {
        /// Results file written by `run --results`.
        file: PathBuf,
    },
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_logging(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or(default_log_level(verbose));
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn select_tests(names: &[String]) -> Result<Vec<TestKind>, CliError> {
    if names.is_empty() {
        return Ok(TestKind::all());
    }
    Ok(names
        .iter()
        .map(|name| TestKind::from_name(name))
        .collect::<Result<Vec<_>, _>>()?)
}

fn load_profile(path: Option<&Path>) -> Result<ReferenceProfile, CliError> {
    match path {
        Some(path) => Ok(ReferenceProfile::load(path)?),
        None => Ok(ReferenceProfile::conformant()),
    }
}

fn run_reference(kinds: &[TestKind], profile: ReferenceProfile) -> RunResults {
    let mut gl = ReferenceGl::new(profile);
    run_all(
        "reference",
        kinds.iter().map(|k| k as &dyn ConformanceTest),
        &mut gl,
    )
}

fn print_results(results: &RunResults, json: bool) -> Result<(), CliError> {
    let totals = results.totals();
    if json {
        let info = serde_json::json!({
            "name": results.name,
            "tests": results.tests,
            "totals": totals,
            "groups": results.group_totals(),
            "verdict": results.verdict(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    for (name, result) in &results.tests {
        let status = result.status();
        println!("{name}: {status}");
        if status != Status::Pass {
            for line in &result.out {
                println!("    {line}");
            }
        }
    }
    for (group, counts) in results.group_totals() {
        if group != ROOT_GROUP {
            println!(
                "group {group}: pass {}, fail {}, skip {}",
                counts.pass,
                counts.fail,
                counts.skip
            );
        }
    }
    println!(
        "pass {}, fail {}, skip {} of {}",
        totals.pass,
        totals.fail,
        totals.skip,
        totals.total()
    );
    Ok(())
}

fn run(cli: Cli) -> Result<Option<Status>, CliError> {
    match cli.command {
        Command::List => {
            let kinds = TestKind::all();
            if cli.json {
                let info: Vec<_> = kinds
                    .iter()
                    .map(|k| {
                        serde_json::json!({
                            "name": k.name(),
                            "description": k.description(),
                            "config": k.config(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for kind in kinds {
                    let config = kind.config();
                    println!("{}", kind.name());
                    println!("    {}", kind.description());
                    println!("    requires {}", config.version_requirement());
                    if !config.required_extensions.is_empty() {
                        println!("    extensions {}", config.required_extensions.join(", "));
                    }
                }
            }
            Ok(None)
        }
        Command::Run {
            tests,
            profile,
            results,
        } => {
            let kinds = select_tests(&tests)?;
            let profile = load_profile(profile.as_deref())?;
            let outcome = run_reference(&kinds, profile);

            if let Some(path) = &results {
                outcome.write(path)?;
                log::info!("wrote results to {}", path.display());
            }
            print_results(&outcome, cli.json)?;
            Ok(Some(outcome.verdict()))
        }
        Command::Summary { file } => {
            let results = RunResults::load(&file)?;
            print_results(&results, cli.json)?;
            Ok(Some(results.verdict()))
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    init_logging(cli.verbose);
    match run(cli) {
        Ok(Some(verdict)) => process::exit(verdict_exit_code(verdict)),
        Ok(None) => {}
        Err(e) => {
            if json_mode {
                let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
                eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
            } else {
                eprintln!("error: {e}");
            }
            process::exit(e.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gl_conform_reference::Quirk;

    #[test]
    fn verbosity_raises_the_default_level() {
        assert_eq!(default_log_level(0), "warn");
        assert_eq!(default_log_level(1), "info");
        assert_eq!(default_log_level(2), "debug");
        assert_eq!(default_log_level(5), "debug");
    }

    #[test]
    fn no_names_selects_everything() {
        assert_eq!(select_tests(&[]).unwrap(), TestKind::all());
    }

    #[test]
    fn unknown_name_is_a_registry_error() {
        let err = select_tests(&["gl-9.9/nothing".to_string()]).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn malformed_profile_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_profile(Some(&path)).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn missing_profile_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profile(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn written_results_summarise_to_the_same_verdict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let profile = ReferenceProfile::conformant().with_quirk(Quirk::RejectFrontReadBuffer);
        let outcome = run_reference(&TestKind::all(), profile);
        outcome.write(&path).unwrap();

        let loaded = RunResults::load(&path).unwrap();
        assert_eq!(loaded.verdict(), Status::Fail);
        assert_eq!(loaded.totals(), outcome.totals());
        assert_eq!(verdict_exit_code(loaded.verdict()), 1);
    }

    #[test]
    fn cli_parses_run_arguments() {
        let cli = Cli::try_parse_from([
            "gl-conform",
            "-vv",
            "run",
            "gl-1.0/simple-readbuffer",
            "--results",
            "out.json",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        match cli.command {
            Command::Run { tests, results, profile } => {
                assert_eq!(tests, vec!["gl-1.0/simple-readbuffer".to_string()]);
                assert_eq!(results, Some(PathBuf::from("out.json")));
                assert!(profile.is_none());
            }
            _ => panic!("expected run"),
        }
    }
}
