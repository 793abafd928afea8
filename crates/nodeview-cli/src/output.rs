use std::fmt::Write;

use chrono::SecondsFormat;

use nodeview_common::NodeSummaryList;

pub fn print_node_list(list: &NodeSummaryList) {
    print!("{}", render_node_list(list));
}

pub fn render_node_list(list: &NodeSummaryList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Cluster Nodes ===\n");

    if list.nodes().is_empty() {
        let _ = writeln!(out, "  (No nodes returned)");
    } else {
        let _ = writeln!(
            out,
            "  {:<10} {:<24} {:<10} {:<7} {:<32} {:<20}",
            "Node", "Hostname", "Type", "Leader", "Transport Address", "Last Seen"
        );
        for node in list.nodes() {
            let _ = writeln!(
                out,
                "  {:<10} {:<24} {:<10} {:<7} {:<32} {:<20}",
                node.short_node_id(),
                node.hostname(),
                node.node_type(),
                if node.is_leader() { "yes" } else { "no" },
                node.transport_address(),
                node.last_seen().to_rfc3339_opts(SecondsFormat::Secs, true)
            );
        }
    }

    let _ = writeln!(
        out,
        "\nshowing {} of {} nodes",
        list.nodes().len(),
        list.total()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use nodeview_common::NodeSummary;

    fn make_node(hostname: &str, leader: bool) -> NodeSummary {
        NodeSummary::new(
            "c1",
            format!("{hostname}-0000-4000-8000-000000000000"),
            "server",
            leader,
            "http://10.0.0.1:9000/api/",
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            hostname,
        )
    }

    #[test]
    fn test_render_partial_list() {
        let list = NodeSummaryList::new(vec![make_node("alpha", true), make_node("beta", false)], 9);
        let text = render_node_list(&list);

        assert!(text.contains("showing 2 of 9 nodes"));
        assert!(text.contains("2024-05-01T12:00:00Z"));
        let alpha = text.find("alpha").unwrap();
        let beta = text.find("beta").unwrap();
        assert!(alpha < beta);

        let alpha_line = text.lines().find(|l| l.contains("alpha")).unwrap();
        assert!(alpha_line.contains("yes"));
    }

    #[test]
    fn test_render_empty_list() {
        let text = render_node_list(&NodeSummaryList::from_nodes(Vec::new()));
        assert!(text.contains("(No nodes returned)"));
        assert!(text.contains("showing 0 of 0 nodes"));
    }
}
