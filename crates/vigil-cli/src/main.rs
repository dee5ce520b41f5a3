use std::io::Read;
use std::path::PathBuf;

use eyre::Result;
use tracing_subscriber::EnvFilter;
use vigil_cli::config::{self, VigilConfig};
use vigil_cli::request::{self, Command};
use vigil_core::clock::SystemClock;

const USAGE: &str = "usage: vigil-eval <sepsis|risk|care-gaps> [FILE|-]\n       \
                     vigil-eval <scales|measures>\n       \
                     vigil-eval init-config PATH";

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let mut args = std::env::args().skip(1);
    let command: Command = args
        .next()
        .ok_or_else(|| eyre::eyre!("{USAGE}"))?
        .parse()?;
    let target = args.next();

    if command == Command::InitConfig {
        let path = PathBuf::from(target.ok_or_else(|| eyre::eyre!("{USAGE}"))?);
        return config::save_config(&VigilConfig::default(), &path);
    }

    let config = config::load_from_env()?;
    let body = if command.takes_input() {
        read_body(target.as_deref())?
    } else {
        String::new()
    };

    let output = request::evaluate(command, &body, &config.engine, &SystemClock)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn read_body(target: Option<&str>) -> Result<String> {
    match target {
        None | Some("-") => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read request at {path}: {e}")),
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var("VIGIL_LOG_JSON").is_ok_and(|v| v == "1") {
        builder.json().init();
    } else {
        builder.init();
    }
}
