//! Vertex-map graph representation.
//!
//! Stores the graph as a mapping from vertex label to a per-vertex record
//! holding that vertex's outgoing adjacency. `targets` and outgoing-edge
//! mutation touch a single record; `sources` and vertex removal sweep every
//! record, O(V), touching one entry each.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Per-vertex record: the vertex's own outgoing adjacency map
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct VertexRecord {
    outgoing: HashMap<String, i32>,
}

impl VertexRecord {
    /// Insert, update, or drop the entry for `target`, returning the prior
    /// weight (0 if absent).
    fn set_edge(&mut self, target: &str, weight: i32) -> i32 {
        let old_weight = self.outgoing.get(target).copied().unwrap_or(0);
        if weight == 0 {
            self.outgoing.remove(target);
        } else {
            self.outgoing.insert(target.to_string(), weight);
        }
        old_weight
    }

    fn remove_edge(&mut self, target: &str) {
        self.outgoing.remove(target);
    }

    fn edge_weight(&self, target: &str) -> i32 {
        self.outgoing.get(target).copied().unwrap_or(0)
    }
}

/// Graph stored as a label -> outgoing-adjacency mapping.
#[derive(Debug, Default)]
pub struct VertexMapGraph {
    vertices: HashMap<String, VertexRecord>,
}

impl VertexMapGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graph for VertexMapGraph {
    fn add(&mut self, vertex: &str) -> bool {
        if self.vertices.contains_key(vertex) {
            return false;
        }
        self.vertices
            .insert(vertex.to_string(), VertexRecord::default());
        true
    }

    fn set(&mut self, source: &str, target: &str, weight: i32) -> GraphResult<i32> {
        if weight < 0 {
            return Err(GraphError::negative_weight(source, target, weight));
        }

        self.add(target);
        let record = self.vertices.entry(source.to_string()).or_default();
        Ok(record.set_edge(target, weight))
    }

    fn remove(&mut self, vertex: &str) -> bool {
        if self.vertices.remove(vertex).is_none() {
            return false;
        }
        for record in self.vertices.values_mut() {
            record.remove_edge(vertex);
        }
        debug!(vertex, "removed vertex");
        true
    }

    fn vertices(&self) -> HashSet<String> {
        self.vertices.keys().cloned().collect()
    }

    fn sources(&self, target: &str) -> HashMap<String, i32> {
        let mut sources = HashMap::new();
        for (label, record) in &self.vertices {
            let weight = record.edge_weight(target);
            if weight > 0 {
                sources.insert(label.clone(), weight);
            }
        }
        sources
    }

    fn targets(&self, source: &str) -> HashMap<String, i32> {
        self.vertices
            .get(source)
            .map(|record| record.outgoing.clone())
            .unwrap_or_default()
    }
}

impl fmt::Display for VertexMapGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices: Vec<&String> = self.vertices.keys().collect();
        vertices.sort();
        let mut edges: Vec<(&String, &String, i32)> = self
            .vertices
            .iter()
            .flat_map(|(source, record)| {
                record
                    .outgoing
                    .iter()
                    .map(move |(target, weight)| (source, target, *weight))
            })
            .collect();
        edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        write!(f, "vertices: {{")?;
        for (i, vertex) in vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, "}}, edges: [")?;
        for (i, (source, target, weight)) in edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{source} -> {target} ({weight})")?;
        }
        write!(f, "]")
    }
}
