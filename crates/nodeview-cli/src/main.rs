mod args;
mod input;
mod output;

use anyhow::{Context, Result};
use clap::Parser;

use nodeview_common::telemetry::init_tracing;

use crate::args::{Args, Command};
use crate::input::{build_list, parse_list, read_input};
use crate::output::print_node_list;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let bytes = read_input(&args.input)?;

    match args.command {
        Command::List { total, pretty } => {
            let list = build_list(&bytes, total)?;
            let json = if pretty {
                list.to_json_string_pretty()
            } else {
                list.to_json_string()
            }
            .context("failed to encode node summary list")?;
            println!("{json}");
        }
        Command::Show => {
            let list = parse_list(&bytes)?;
            if list.is_partial() {
                tracing::info!(
                    returned = list.nodes().len(),
                    total = list.total(),
                    "list carries a subset of the cluster's nodes"
                );
            }
            print_node_list(&list);
        }
    }

    Ok(())
}
