// SPDX-License-Identifier: MPL-2.0
use fitflow::app::{self, App, Flags};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
FitFlow: push/pull/legs workout guide

USAGE:
  fitflow [OPTIONS]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --catalog <file>     Workout catalog replacing the built-in one
  --page <path>        Page to open first (/, /workouts, /push, /pull, /legs)
  -h, --help           Print this help

ENVIRONMENT:
  FITFLOW_CONFIG_DIR   Config directory (overridden by --config-dir)
  RUST_LOG             Log filter (default: fitflow=info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        catalog: args.opt_value_from_str::<_, PathBuf>("--catalog")?,
        page: args.opt_value_from_str("--page")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fitflow=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let app = match App::new(flags) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("cannot start: {err}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("event loop failed: {err}");
            ExitCode::FAILURE
        }
    }
}
