use std::process;

use anyhow::Result;
use clap::Parser;

pub mod args;
pub mod model;
pub mod report;

fn main() {
    if let Err(error) = run() {
        // diagnostics go to stdout, next to the report they replace
        println!("{error}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let query = args::Query::parse();
    let config = args::Config::default();

    let tickets = model::Tickets::load(query.source_file(&config))?;

    let (origin_name, destination_name) = query.route(&config);
    let matching = tickets.matching(origin_name, destination_name);

    if query.overall {
        report::overall(&matching, origin_name, destination_name)?;
    } else {
        report::grouped(&matching, origin_name, destination_name)?;
    }

    Ok(())
}
