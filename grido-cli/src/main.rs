mod cli;
mod demo;

use std::fs::File;

use anyhow::Context;
use clap::Parser;
use grido_lib::{GridConfig, Request};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use cli::CliArgs;

fn init_logger(args: &CliArgs) -> anyhow::Result<()> {
    let level = cli::log_level();
    match &args.log_file {
        Some(path) => {
            let log_file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), log_file)?;
        }
        None => {
            TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logger(&args).context("Failed to initialize logger")?;

    let config = match &args.config {
        Some(path) => GridConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GridConfig::default(),
    };

    let mut grid = demo::order_grid(config)?;

    if !args.no_render {
        println!("{}", grid.render()?);
    }

    for query in &args.query {
        let request = Request::from_query(query, !args.plain);
        let response = grid
            .dispatch(&request)
            .with_context(|| format!("Request '{}' failed", query))?;

        match response.content_type() {
            Some(content_type) => println!("{}\n{}", content_type, response.body()),
            None => println!("(terminated)"),
        }
    }

    Ok(())
}
