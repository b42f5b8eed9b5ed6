//! wordchain CLI.
//!
//! Mode dispatch is purely by argument count, program name included — this
//! is the external contract, fragile as it is:
//!
//! - `wordchain <dictionary> <begin> <end>` — ladder mode: print a shortest
//!   word ladder from begin to end, or `No word ladder found.`
//! - `wordchain <dictionary> <begin>` — explore mode: print the size of
//!   begin's connected component and a longest BFS path from it.
//!
//! Query words are uppercased before searching; dictionary entries are used
//! exactly as read from the file. Results go to stdout, diagnostics and logs
//! to stderr. An optional TOML config is read from the path in the
//! `WORDCHAIN_CONFIG` environment variable.

mod exit;

use std::env;
use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};

use wordchain_core::{trace, Dictionary, QueryError, WordchainConfig};
use wordchain_search::{explore_component, find_ladder};

use exit::CliExitCode;

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Ladder {
        dict_path: String,
        begin: String,
        end: String,
    },
    Explore {
        dict_path: String,
        begin: String,
    },
}

/// Dispatch purely by argument count: 4 (with program name) is ladder mode,
/// 3 is explore mode, anything else is a usage error.
fn parse_mode(args: &[String]) -> Option<Mode> {
    match args {
        [_, dict_path, begin, end] => Some(Mode::Ladder {
            dict_path: dict_path.clone(),
            begin: begin.clone(),
            end: end.clone(),
        }),
        [_, dict_path, begin] => Some(Mode::Explore {
            dict_path: dict_path.clone(),
            begin: begin.clone(),
        }),
        _ => None,
    }
}

fn load_config() -> Result<WordchainConfig, CliExitCode> {
    match env::var_os("WORDCHAIN_CONFIG") {
        Some(path) => WordchainConfig::load(Path::new(&path)).map_err(|err| {
            error!(%err, "config load failed");
            eprintln!("{err}");
            CliExitCode::Usage
        }),
        None => Ok(WordchainConfig::default()),
    }
}

fn load_dictionary(path: &str) -> Result<Dictionary, CliExitCode> {
    Dictionary::load(Path::new(path)).map_err(|err| {
        error!(%err, "dictionary load failed");
        eprintln!("Failed to read dictionary file.");
        CliExitCode::from(&err)
    })
}

/// Precondition failures print to stdout, as the contract demands.
fn report_query_error(err: &QueryError) -> CliExitCode {
    println!("{err}");
    CliExitCode::from(err)
}

fn run_ladder(config: &WordchainConfig, dict_path: &str, begin: &str, end: &str) -> CliExitCode {
    let dict = match load_dictionary(dict_path) {
        Ok(dict) => dict,
        Err(code) => return code,
    };

    match find_ladder(&dict, begin, end, config) {
        Ok(Some(ladder)) => {
            info!(begin, end, length = ladder.len(), "ladder found");
            println!("{ladder}");
            CliExitCode::Success
        }
        Ok(None) => {
            info!(begin, end, "no ladder");
            println!("No word ladder found.");
            CliExitCode::Success
        }
        Err(err) => report_query_error(&err),
    }
}

fn run_explore(config: &WordchainConfig, dict_path: &str, begin: &str) -> CliExitCode {
    let dict = match load_dictionary(dict_path) {
        Ok(dict) => dict,
        Err(code) => return code,
    };

    match explore_component(&dict, begin, config) {
        Ok(report) => {
            info!(begin, size = report.component_size, "component explored");
            println!(
                "Connected component of {} has {} elements.",
                report.start, report.component_size
            );
            println!(
                "A longest path starting from {}: {} is of length {}",
                report.start,
                report.longest_path,
                report.longest_path.len()
            );
            CliExitCode::Success
        }
        Err(err) => report_query_error(&err),
    }
}

fn run(args: &[String]) -> CliExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(code) => return code,
    };

    let normalize = |word: &str| {
        if config.effective_normalize_queries() {
            word.to_uppercase()
        } else {
            word.to_owned()
        }
    };

    match parse_mode(args) {
        Some(Mode::Ladder {
            dict_path,
            begin,
            end,
        }) => run_ladder(&config, &dict_path, &normalize(&begin), &normalize(&end)),
        Some(Mode::Explore { dict_path, begin }) => {
            run_explore(&config, &dict_path, &normalize(&begin))
        }
        None => {
            eprintln!("Invalid number of arguments.");
            eprintln!("Usage: wordchain <dictionary> <begin> [<end>]");
            CliExitCode::Usage
        }
    }
}

fn main() -> ExitCode {
    trace::init_tracing();
    let args: Vec<String> = env::args().collect();
    run(&args).into()
}
