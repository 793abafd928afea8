use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of the abbreviated node id shown in listings.
const SHORT_NODE_ID_LEN: usize = 8;

/// One cluster node as reported by a node listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NodeSummary {
    cluster_id: String,
    node_id: String,

    /// Node kind, e.g. "server". Sent as `type` on the wire.
    #[serde(rename = "type")]
    node_type: String,

    is_leader: bool,
    transport_address: String,
    last_seen: DateTime<Utc>,
    short_node_id: String,
    hostname: String,
}

impl NodeSummary {
    pub fn new(
        cluster_id: impl Into<String>,
        node_id: impl Into<String>,
        node_type: impl Into<String>,
        is_leader: bool,
        transport_address: impl Into<String>,
        last_seen: DateTime<Utc>,
        hostname: impl Into<String>,
    ) -> Self {
        let node_id = node_id.into();
        let short_node_id = node_id.chars().take(SHORT_NODE_ID_LEN).collect();
        Self {
            cluster_id: cluster_id.into(),
            node_id,
            node_type: node_type.into(),
            is_leader,
            transport_address: transport_address.into(),
            last_seen,
            short_node_id,
            hostname: hostname.into(),
        }
    }

    pub fn cluster_id(&self) -> &str {
        &self.cluster_id
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    pub fn is_leader(&self) -> bool {
        self.is_leader
    }

    pub fn transport_address(&self) -> &str {
        &self.transport_address
    }

    pub fn last_seen(&self) -> DateTime<Utc> {
        self.last_seen
    }

    pub fn short_node_id(&self) -> &str {
        &self.short_node_id
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }
}
