use super::{GameSnapshot, StationId};
use crate::error::SceneError;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Directed station graph with one edge per authored connection entry
///
/// Edges are not deduplicated: a connection listed by both of its stations
/// appears twice, a one-sided listing once.
#[derive(Debug, Clone, Default)]
pub struct StationNetwork {
    pub graph: DiGraph<StationId, ()>,
    node_lookup: HashMap<StationId, NodeIndex>,
}

impl StationNetwork {
    /// Build the network, skipping connections to unknown stations
    ///
    /// Every skipped entry is returned as a `MissingStation` issue.
    #[must_use]
    pub fn build(snapshot: &GameSnapshot) -> (Self, Vec<SceneError>) {
        let mut network = Self::default();
        let mut issues = Vec::new();

        for station in snapshot.stations() {
            network.add_station(station.id);
        }

        for station in snapshot.stations() {
            for &target in &station.connections {
                if snapshot.station(target).is_none() {
                    issues.push(SceneError::MissingStation { from: station.id, to: target });
                    continue;
                }
                let from = network.add_station(station.id);
                let to = network.add_station(target);
                network.graph.add_edge(from, to, ());
            }
        }

        (network, issues)
    }

    fn add_station(&mut self, id: StationId) -> NodeIndex {
        if let Some(&idx) = self.node_lookup.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id);
        self.node_lookup.insert(id, idx);
        idx
    }

    /// Connections in authoring order as `(from, to)` pairs
    pub fn connections(&self) -> impl Iterator<Item = (StationId, StationId)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (self.graph[edge.source()], self.graph[edge.target()]))
    }

    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OccupancyTable, Station};

    fn station(id: u32, connections: &[u32]) -> Station {
        Station {
            id: StationId(id),
            x: f64::from(id) * 10.0,
            y: 0.0,
            name: id.to_string(),
            connections: connections.iter().copied().map(StationId).collect(),
        }
    }

    #[test]
    fn test_one_sided_connection_appears_once() {
        let snapshot = GameSnapshot::new(
            Vec::new(),
            vec![station(1, &[2]), station(2, &[])],
            OccupancyTable::new(),
        );
        let (network, issues) = StationNetwork::build(&snapshot);

        assert!(issues.is_empty());
        assert_eq!(network.connections().collect::<Vec<_>>(), vec![(StationId(1), StationId(2))]);
    }

    #[test]
    fn test_symmetric_connection_appears_twice() {
        let snapshot = GameSnapshot::new(
            Vec::new(),
            vec![station(1, &[2]), station(2, &[1])],
            OccupancyTable::new(),
        );
        let (network, _) = StationNetwork::build(&snapshot);

        assert_eq!(network.connection_count(), 2);
        assert_eq!(
            network.connections().collect::<Vec<_>>(),
            vec![(StationId(1), StationId(2)), (StationId(2), StationId(1))]
        );
    }

    #[test]
    fn test_unknown_target_is_skipped() {
        let snapshot = GameSnapshot::new(
            Vec::new(),
            vec![station(1, &[2, 99]), station(2, &[])],
            OccupancyTable::new(),
        );
        let (network, issues) = StationNetwork::build(&snapshot);

        assert_eq!(network.connection_count(), 1);
        assert_eq!(network.graph.node_count(), 2);
        assert!(matches!(
            issues.as_slice(),
            [SceneError::MissingStation { from: StationId(1), to: StationId(99) }]
        ));
    }
}
