/*!
  Binary for the CLI of colonnade: cln
*/

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod cli;
pub mod error;
mod reader;

use clap::Parser;
use cli::{CliApp, Command};
use colonnade::{Column, Selection, TextColumn};
use colored::Colorize;
use error::CliError;

fn print_column(column: &TextColumn) {
    println!("{}", column.name());
    for value in column {
        println!("{value}");
    }
}

fn print_rows(selection: &Selection) {
    for index in selection.iter() {
        println!("{index}");
    }
}

fn run(cli: CliApp) -> Result<(), CliError> {
    log::info!("Reading column `{}` ...", cli.input.column);
    let mut column = reader::read_column(&cli.input)?;
    log::debug!("Loaded {column:?}");

    match cli.command {
        Command::Summary => print!("{}", column.summary()?),
        Command::Unique => print_column(&column.unique()?),
        Command::Count { value } => println!("{}", column.count_occurrences(&value)),
        Command::IsIn { values } => print_rows(&column.is_in(&values)),
        Command::IsNotIn { values } => print_rows(&column.is_not_in(&values)),
        Command::Lag { n } => print_column(&column.lag(n)?),
        Command::Lead { n } => print_column(&column.lead(n)?),
        Command::Sort { descending } => {
            if descending {
                column.sort_descending();
            } else {
                column.sort_ascending();
            }
            print_column(&column);
        }
        Command::RemoveMissing => print_column(&column.remove_missing()?),
        Command::Print => print_column(&column),
    }

    Ok(())
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());
    log::debug!("Input file: {:?}", cli.input.file);

    run(cli).unwrap_or_else(|err| {
        log::error!("{} {err}", "error:".red().bold());
        std::process::exit(1)
    })
}
