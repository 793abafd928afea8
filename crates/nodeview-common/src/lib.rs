pub mod error;
pub mod node_summary;
pub mod node_summary_list;

pub use error::Error;
pub use node_summary::NodeSummary;
pub use node_summary_list::NodeSummaryList;

pub mod telemetry;
