use anyhow::Result;

use war_ranking::cli::Command;
use war_ranking::{
    handle_completions, handle_import, handle_lists, handle_menus, handle_rank, handle_setup,
    interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Rank {
            method,
            gender,
            maximum,
            json,
        } => handle_rank(
            method.unwrap_or_default(),
            gender.unwrap_or_default(),
            *maximum,
            *json,
        ),
        Command::Lists {
            method,
            gender,
            json,
        } => handle_lists(method.unwrap_or_default(), gender.unwrap_or_default(), *json),
        Command::Menus { json } => handle_menus(*json),
        Command::Setup => handle_setup(),
        Command::Import { path, reset } => handle_import(path, *reset),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
