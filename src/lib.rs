pub mod cli;
pub mod config;
pub mod database;
pub mod dataset;
pub mod errors;
pub mod output;
pub mod rating;
pub mod services;

use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::rating::{GenderFilter, Method};
use crate::services::import::ImportService;
use crate::services::ranking::RankingService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_rank(
    method: Method,
    gender: GenderFilter,
    maximum: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = AppConfig::new().with_maximum(maximum);
    let service = RankingService::new(config);
    service.run_rank(method, gender, json)
}

pub fn handle_lists(method: Method, gender: GenderFilter, json: bool) -> Result<()> {
    let service = RankingService::new(AppConfig::new());
    service.run_lists(method, gender, json)
}

pub fn handle_menus(json: bool) -> Result<()> {
    let service = RankingService::new(AppConfig::new());
    service.run_menus(json)
}

pub fn handle_setup() -> Result<()> {
    let service = ImportService::new(AppConfig::new());
    service.run_setup()
}

pub fn handle_import(path: &Path, reset: bool) -> Result<()> {
    let service = ImportService::new(AppConfig::new());
    service.run(path, reset)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
