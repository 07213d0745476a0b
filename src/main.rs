use std::path::{Path, PathBuf};
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;

pub mod models;
pub mod output;
pub mod simulation;
pub mod system;
pub mod utils;

use simulation::{OUTPUT_DIR, SimConfig};

const OUTPUT_DIR_ENV: &str = "SIM_OUTPUT_DIR";

fn cli() -> Command {
    Command::new("system-response-sim")
        .about("Simulates a first-order system driven by a sinusoid and a step, then plots and logs the response")
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .help("Folder for plots and logs (default: $SIM_OUTPUT_DIR or 'outputs')"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Also write summary.json next to the run log"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Silence structured logging on stderr"),
        )
}

fn config_from(matches: &ArgMatches) -> SimConfig {
    let output_dir = matches
        .get_one::<String>("output-dir")
        .cloned()
        .unwrap_or_else(|| utils::get_env(OUTPUT_DIR_ENV, Some(OUTPUT_DIR)));
    SimConfig {
        output_dir: PathBuf::from(output_dir),
        write_json: matches.get_flag("json"),
    }
}

fn saved_message(output_dir: &Path) -> String {
    let shown = output_dir.display().to_string();
    format!(
        "Simulation completed successfully. Outputs saved in '{}/' folder.",
        shown.trim_end_matches(['/', '\\'])
    )
}

fn main() {
    let matches = cli().get_matches();
    let config = config_from(&matches);
    let logger = if matches.get_flag("quiet") {
        utils::discard_logger()
    } else {
        utils::get_logger()
    };

    match simulation::run_simulation(&config, &logger) {
        Ok(_) => {
            println!("{}", saved_message(&config.output_dir).green());
        }
        Err(e) => {
            utils::error_context(&logger, "Simulation failed", &e);
            println!("{}", e.to_string().red());
            process::exit(e.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_without_arguments() {
        let matches = cli().try_get_matches_from(["system-response-sim"]).unwrap();
        let config = config_from(&matches);
        assert!(!config.write_json);
        assert!(!matches.get_flag("quiet"));
        // whatever the environment says, the folder is never blank
        assert!(!config.output_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_cli_flags() {
        let matches = cli()
            .try_get_matches_from(["system-response-sim", "-o", "runs/today", "--json", "-q"])
            .unwrap();
        let config = config_from(&matches);
        assert_eq!(config.output_dir, PathBuf::from("runs/today"));
        assert!(config.write_json);
        assert!(matches.get_flag("quiet"));
    }

    #[test]
    fn test_saved_message_names_the_folder_once() {
        let expected = "Simulation completed successfully. Outputs saved in 'outputs/' folder.";
        assert_eq!(saved_message(Path::new("outputs")), expected);
        assert_eq!(
            saved_message(Path::new("runs/")),
            "Simulation completed successfully. Outputs saved in 'runs/' folder."
        );
        assert_eq!(
            saved_message(Path::new("runs/today//")),
            "Simulation completed successfully. Outputs saved in 'runs/today/' folder."
        );
        assert_eq!(
            saved_message(Path::new("/")),
            "Simulation completed successfully. Outputs saved in '/' folder."
        );
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        assert!(cli().try_get_matches_from(["system-response-sim", "extra"]).is_err());
    }
}
