use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::node_summary::NodeSummary;

/// Node summaries returned by a cluster listing, plus a total count.
///
/// `total` is independent of `nodes.len()`. A paginated response carries one
/// page of nodes and the number available overall; an unpaginated one uses
/// [`NodeSummaryList::from_nodes`] so the two agree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "RawNodeSummaryList")]
pub struct NodeSummaryList {
    nodes: Vec<NodeSummary>,
    total: usize,
}

/// Wire shape before the nodes sequence is checked for presence.
#[derive(Deserialize)]
struct RawNodeSummaryList {
    nodes: Option<Vec<NodeSummary>>,
    total: usize,
}

impl TryFrom<RawNodeSummaryList> for NodeSummaryList {
    type Error = Error;

    fn try_from(raw: RawNodeSummaryList) -> Result<Self, Self::Error> {
        let Some(nodes) = raw.nodes else {
            return Err(Error::InvalidArgument(
                "nodes must be present and not null".to_string(),
            ));
        };
        Ok(Self::new(nodes, raw.total))
    }
}

impl NodeSummaryList {
    /// Builds a list with an explicit total. `total` is not checked against
    /// `nodes.len()`.
    pub fn new(nodes: Vec<NodeSummary>, total: usize) -> Self {
        if total < nodes.len() {
            tracing::debug!(
                total,
                returned = nodes.len(),
                "node summary total is smaller than the returned slice"
            );
        }
        Self { nodes, total }
    }

    /// Builds a list whose total is the number of nodes given.
    pub fn from_nodes(nodes: Vec<NodeSummary>) -> Self {
        let total = nodes.len();
        Self { nodes, total }
    }

    pub fn nodes(&self) -> &[NodeSummary] {
        &self.nodes
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// True when more nodes exist than this list carries.
    pub fn is_partial(&self) -> bool {
        self.total > self.nodes.len()
    }

    pub fn into_nodes(self) -> Vec<NodeSummary> {
        self.nodes
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, Error> {
        let raw: RawNodeSummaryList = serde_json::from_slice(bytes)?;
        Self::try_from(raw)
    }

    pub fn from_json_str(s: &str) -> Result<Self, Error> {
        Self::from_json(s.as_bytes())
    }

    pub fn to_json_vec(&self) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Vec<NodeSummary>> for NodeSummaryList {
    fn from(nodes: Vec<NodeSummary>) -> Self {
        Self::from_nodes(nodes)
    }
}

impl FromIterator<NodeSummary> for NodeSummaryList {
    fn from_iter<I: IntoIterator<Item = NodeSummary>>(iter: I) -> Self {
        Self::from_nodes(iter.into_iter().collect())
    }
}
