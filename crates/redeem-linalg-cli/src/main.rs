use anyhow::Result;
use clap::ArgMatches;
use log::LevelFilter;

use redeem_linalg::config::LinalgConfig;
use redeem_linalg_cli::cli::build_cli;
use redeem_linalg_cli::commands::{run_config, run_demo, run_rotate};
use redeem_linalg_cli::input::config_from_arguments;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(
            env_logger::Env::default().filter_or("REDEEM_LINALG_LOG", "error,redeem_linalg=info"),
        )
        .init();

    let matches = build_cli().get_matches();
    let config = config_from_arguments(&matches)?;

    let result = match matches.subcommand() {
        Some(("demo", _)) => run_demo(&config),
        Some(("rotate", rotate_matches)) => handle_rotate(&config, rotate_matches),
        Some(("config", _)) => run_config(&config),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_rotate(config: &LinalgConfig, matches: &ArgMatches) -> Result<String> {
    let axis: &String = matches.get_one::<String>("axis").unwrap();
    let angle: f64 = *matches.get_one::<f64>("angle").unwrap();
    let components: Vec<f64> = matches
        .get_many::<f64>("components")
        .unwrap()
        .copied()
        .collect();
    run_rotate(config, axis, angle, &components)
}
