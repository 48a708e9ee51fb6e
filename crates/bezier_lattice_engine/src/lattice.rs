//! Dreiecks-Lattice: alle Interpolations-Nodes einer Kurve in einem flachen Array.
//!
//! Reihe 0 enthält die `N` Anker, Reihe `k` enthält `N - k` Nodes. Node `j` in
//! Reihe `k` hat die Eltern `j` und `j + 1` aus Reihe `k - 1`. Insgesamt
//! `T(N) = N(N+1)/2` Nodes; der letzte ist der Terminal-Node, dessen Position
//! die eigentliche Kurve nachzeichnet.

use crate::capacity::{CapacityPolicy, PolicyVec};
use crate::error::LatticeError;
use crate::node::{derive_segment, Node, NodeId};
use glam::Vec2;


/// Dreieckszahl `T(n) = n(n+1)/2`.
pub fn triangle_number(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Flacher Offset des ersten Nodes in `row` bei `order` Ankern: `Σ_{i<row}(order - i)`.
pub fn row_offset(order: usize, row: usize) -> usize {
    row * order - row * row.saturating_sub(1) / 2
}

/// Alleiniger Besitzer aller Nodes einer Geste.
#[derive(Debug, Clone)]
pub struct Lattice {
    nodes: PolicyVec<Node>,
    order: usize,
}

impl Lattice {
    /// Erstellt eine leere Lattice; das Node-Array folgt `policy`.
    pub fn new(policy: CapacityPolicy) -> Self {
        Self {
            nodes: PolicyVec::new(policy),
            order: 0,
        }
    }

    /// Baut eine Lattice direkt aus den Ankern auf.
    pub fn build(anchors: &[Vec2], policy: CapacityPolicy) -> Result<Self, LatticeError> {
        let mut lattice = Self::new(policy);
        lattice.rebuild(anchors)?;
        Ok(lattice)
    }

    /// Verwirft alle Nodes und baut `T(N)` neue aus den Ankern auf.
    ///
    /// Das Node-Array wird wiederverwendet und seine Kapazität per Politik auf
    /// `T(N)` gebracht. Bei weniger als 2 Ankern bleibt die Lattice leer.
    pub fn rebuild(&mut self, anchors: &[Vec2]) -> Result<(), LatticeError> {
        let order = anchors.len();
        if order < 2 {
            self.clear();
            return Err(LatticeError::TooFewAnchors { count: order });
        }

        self.order = 0;
        self.nodes.clear_and_fit(triangle_number(order))?;

        for &anchor in anchors {
            self.nodes.push(Node::anchor(anchor))?;
        }

        let mut degenerate = 0usize;
        for row in 1..order {
            let parent_offset = row_offset(order, row - 1);
            for column in 0..order - row {
                let first = NodeId(parent_offset + column);
                let second = NodeId(parent_offset + column + 1);
                let start = self.nodes[first.index()].position();
                let target = self.nodes[second.index()].position();

                // Startet deckungsgleich mit dem ersten Elternteil
                let mut node = Node::interpolated(start, [first, second]);
                match derive_segment(start, target) {
                    Ok((direction, equation)) => node.set_segment(direction, equation),
                    Err(LatticeError::DegenerateSegment { at }) => {
                        log::debug!("Degeneriertes Segment bei {} (Reihe {}, Spalte {}), Node gesperrt", at, row, column);
                        node.lock();
                        degenerate += 1;
                    }
                    Err(other) => return Err(other),
                }
                self.nodes.push(node)?;
            }
        }

        self.order = order;
        log::debug!(
            "Lattice aufgebaut: {} Anker, {} Nodes, Kapazität {}, {} degeneriert",
            order,
            self.nodes.len(),
            self.nodes.capacity(),
            degenerate
        );
        Ok(())
    }

    /// Verwirft alle Nodes (Geste beendet).
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.order = 0;
    }

    /// Anzahl der Anker `N` (0 bei leerer Lattice).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Anzahl aller Nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True wenn keine Lattice aufgebaut ist.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Politik-Kapazität des Node-Arrays.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Alle Nodes in flacher Reihenfolge.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        self.nodes.as_mut_slice()
    }

    /// Node per Id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Position eines Nodes.
    pub fn position(&self, id: NodeId) -> Option<Vec2> {
        self.node(id).map(Node::position)
    }

    /// Anzahl der Reihen (= `order`).
    pub fn row_count(&self) -> usize {
        self.order
    }

    /// Flacher Offset des ersten Nodes einer Reihe.
    pub fn row_offset(&self, row: usize) -> Option<usize> {
        (row < self.order).then(|| row_offset(self.order, row))
    }

    /// Id des Nodes in `(row, column)`.
    pub fn index_of(&self, row: usize, column: usize) -> Option<NodeId> {
        if row >= self.order || column >= self.order - row {
            return None;
        }
        Some(NodeId(row_offset(self.order, row) + column))
    }

    /// Alle Nodes einer Reihe.
    pub fn row(&self, row: usize) -> &[Node] {
        match self.row_offset(row) {
            Some(offset) => &self.nodes[offset..offset + self.order - row],
            None => &[],
        }
    }

    /// Id des Terminal-Nodes (einziger Node der letzten Reihe).
    pub fn terminal_id(&self) -> Option<NodeId> {
        (self.order >= 2).then(|| NodeId(self.nodes.len() - 1))
    }

    /// Der Terminal-Node.
    pub fn terminal(&self) -> Option<&Node> {
        self.terminal_id().and_then(|id| self.node(id))
    }

    /// True sobald der Terminal-Node gesperrt ist.
    pub fn is_finished(&self) -> bool {
        self.terminal().is_some_and(Node::is_locked)
    }

    /// Restdistanz eines Nodes zu seinem Ziel-Elternteil (None bei Ankern).
    pub fn remaining_distance(&self, id: NodeId) -> Option<f32> {
        let node = self.node(id)?;
        let destination = self.position(node.destination()?)?;
        Some(node.position().distance(destination))
    }
}
