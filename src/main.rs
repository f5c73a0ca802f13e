use std::{path::Path, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, FileArgs};
use dal::{load_routes, save_routes};
use display::render_routes;
use dotenvy::dotenv;
use model::{DepartureTime, Route};
use operations::{add_route, select_routes};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};
use utils::resolve_path;

mod cli;
mod dal;
mod display;
mod model;
mod operations;
mod utils;

fn main() -> ExitCode {
    _ = dotenv();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    Registry::default().with(stderr_log).with(env_filter).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Add {
            file,
            destination,
            number,
            time,
        } => {
            let path = resolve_path(&file.filename, file.home)?;
            let routes = load_existing(&path)?;

            let routes = add_route(routes, destination, number, time)?;

            save_routes(&path, &routes)?;
            info!("{} routes in {}", routes.len(), path.display());
        }

        Command::Display { file } => {
            let routes = load_for(&file)?;
            print!("{}", render_routes(&routes));
        }

        Command::Select { file, time } => {
            let threshold: DepartureTime = time.parse()?;
            let routes = load_for(&file)?;

            let selected = select_routes(&routes, threshold)
                .context("a stored route has an unreadable time")?;
            print!("{}", render_routes(&selected));
        }
    }

    Ok(())
}

fn load_for(file: &FileArgs) -> Result<Vec<Route>> {
    let path = resolve_path(&file.filename, file.home)?;
    load_existing(&path)
}

/// A file that doesn't exist yet is an empty list.
fn load_existing(path: &Path) -> Result<Vec<Route>> {
    if !path.exists() {
        info!("{} doesn't exist, starting with no routes", path.display());
        return Ok(vec![]);
    }

    Ok(load_routes(path)?)
}
