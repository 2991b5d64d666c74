//! Graphviz DOT rendering of a built graph.

use std::collections::HashMap;

use log::debug;
use petgraph::{
    dot::{Config, Dot},
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use loadpath_core::element::ElementId;

use super::{Error, Exporter};
use crate::{
    risk::RiskClassifier,
    structure::{ConnectionType, ElementCache},
};

/// One rendered node: its label and fill color.
#[derive(Debug)]
struct NodeStyle {
    label: String,
    fill: String,
}

/// Renders built graphs as DOT documents.
///
/// Every element becomes a node labelled `<category>-<id> [<count>]` and
/// filled with its risk color. Every connection except `SupportedBy` becomes
/// an edge labelled with the connection type, so each support relation is
/// drawn once, from supporter to supported.
#[derive(Debug, Default)]
pub struct DotExporter {
    output: String,
}

impl DotExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered document.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl Exporter for DotExporter {
    fn export_graph<S>(&mut self, cache: &ElementCache<S>, risk: &RiskClassifier) -> Result<(), Error> {
        let mut graph: DiGraph<NodeStyle, &'static str> = DiGraph::new();
        let mut indices: HashMap<ElementId, NodeIndex> = HashMap::new();

        for node in cache.nodes() {
            let count = risk.count(node);
            let style = NodeStyle {
                label: format!("{}-{} [{count}]", node.category().short_name(), node.id()),
                fill: risk.level_for(count).display_color().to_hex(),
            };
            indices.insert(node.id(), graph.add_node(style));
        }

        for node in cache.nodes() {
            let from = indices[&node.id()];
            for connection in node.connections() {
                if connection.kind() == ConnectionType::SupportedBy {
                    continue;
                }
                let to = indices.get(&connection.connected_with()).ok_or_else(|| {
                    Error::Render(format!(
                        "element {} is connected with {}, which is not in the graph",
                        node.id(),
                        connection.connected_with()
                    ))
                })?;
                graph.add_edge(from, *to, connection.kind().label());
            }
        }

        debug!(
            nodes_count = graph.node_count(),
            edges_count = graph.edge_count();
            "Rendering DOT graph"
        );

        let dot = Dot::with_attr_getters(
            &graph,
            &[Config::NodeNoLabel, Config::EdgeNoLabel],
            &|_, edge| format!("label = \"{}\"", edge.weight()),
            &|_, (_, style)| {
                format!(
                    "label = \"{}\" style = \"filled\" fillcolor = \"{}\"",
                    style.label.replace('"', "\\\""),
                    style.fill
                )
            },
        );
        self.output = format!("{dot:?}");
        Ok(())
    }
}
