use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "nodeview")]
#[command(about = "Inspect cluster node summary lists", long_about = None)]
pub struct Args {
    /// Input file, or `-` for stdin
    #[arg(long, env = "NODEVIEW_INPUT", default_value = "-")]
    pub input: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "NODEVIEW_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Wrap a JSON array of node summaries into a list payload
    List {
        /// Total nodes available; defaults to the number of nodes read
        #[arg(long)]
        total: Option<usize>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print a node summary list payload as a table
    Show,
}
