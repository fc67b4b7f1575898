//! Edge-list graph representation.
//!
//! Stores the graph as a vertex set plus discrete directed weighted edge
//! records. The record list is the single source of truth for edge state:
//! every mutation and query scans it, O(E), and vertex removal is O(V + E).
//! Appropriate for small-to-medium graphs where simplicity matters more
//! than asymptotic query cost.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// A directed weighted edge record
#[derive(Debug, Clone, PartialEq, Eq)]
struct Edge {
    source: String,
    target: String,
    weight: i32,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

/// Graph stored as a vertex set and a list of discrete edge records.
#[derive(Debug, Default)]
pub struct EdgeListGraph {
    vertices: HashSet<String>,
    edges: Vec<Edge>,
}

impl EdgeListGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graph for EdgeListGraph {
    fn add(&mut self, vertex: &str) -> bool {
        self.vertices.insert(vertex.to_string())
    }

    fn set(&mut self, source: &str, target: &str, weight: i32) -> GraphResult<i32> {
        if weight < 0 {
            return Err(GraphError::negative_weight(source, target, weight));
        }

        self.add(source);
        self.add(target);

        if let Some(pos) = self
            .edges
            .iter()
            .position(|edge| edge.source == source && edge.target == target)
        {
            let old_weight = self.edges[pos].weight;
            if weight == 0 {
                self.edges.remove(pos);
            } else {
                self.edges[pos].weight = weight;
            }
            return Ok(old_weight);
        }

        if weight > 0 {
            self.edges.push(Edge {
                source: source.to_string(),
                target: target.to_string(),
                weight,
            });
        }
        Ok(0)
    }

    fn remove(&mut self, vertex: &str) -> bool {
        if !self.vertices.remove(vertex) {
            return false;
        }
        let before = self.edges.len();
        self.edges
            .retain(|edge| edge.source != vertex && edge.target != vertex);
        debug!(vertex, dropped_edges = before - self.edges.len(), "removed vertex");
        true
    }

    fn vertices(&self) -> HashSet<String> {
        self.vertices.clone()
    }

    fn sources(&self, target: &str) -> HashMap<String, i32> {
        self.edges
            .iter()
            .filter(|edge| edge.target == target)
            .map(|edge| (edge.source.clone(), edge.weight))
            .collect()
    }

    fn targets(&self, source: &str) -> HashMap<String, i32> {
        self.edges
            .iter()
            .filter(|edge| edge.source == source)
            .map(|edge| (edge.target.clone(), edge.weight))
            .collect()
    }
}

impl fmt::Display for EdgeListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices: Vec<&String> = self.vertices.iter().collect();
        vertices.sort();
        let mut edges: Vec<&Edge> = self.edges.iter().collect();
        edges.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));

        write!(f, "vertices: {{")?;
        for (i, vertex) in vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, "}}, edges: [")?;
        for (i, edge) in edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{edge}")?;
        }
        write!(f, "]")
    }
}
