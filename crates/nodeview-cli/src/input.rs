use std::io::Read;

use anyhow::{Context, Result};

use nodeview_common::{NodeSummary, NodeSummaryList};

pub fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("failed to read {path}"))
}

/// Builds a list payload from a JSON array of node summaries.
///
/// Without `total` the list reports exactly the nodes it carries.
pub fn build_list(bytes: &[u8], total: Option<usize>) -> Result<NodeSummaryList> {
    let nodes: Vec<NodeSummary> =
        serde_json::from_slice(bytes).context("input is not a JSON array of node summaries")?;
    tracing::debug!(count = nodes.len(), total = ?total, "read node summaries");

    Ok(match total {
        Some(total) => NodeSummaryList::new(nodes, total),
        None => NodeSummaryList::from_nodes(nodes),
    })
}

pub fn parse_list(bytes: &[u8]) -> Result<NodeSummaryList> {
    NodeSummaryList::from_json(bytes).context("input is not a node summary list")
}
