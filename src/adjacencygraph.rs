/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! A weighted graph stored as adjacency lists keyed by node.
//!
//! Nodes are arbitrary ordered keys (usually integers). The node set is kept
//! sorted, neighbor lists and the edge list keep their insertion order. Every
//! node that appears in an edge has an entry in the adjacency map, possibly
//! with an empty neighbor list.

use crate::builder::{Buildable, Builder};
use crate::num::traits::Float;
use crate::trace::report;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A weighted edge as given by the caller.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge<N, W> {
    pub from: N,
    pub to: N,
    pub weight: W,
}

/// Graph with adjacency lists.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AdjacencyGraph<N, W>
where
    N: Ord,
{
    directed: bool,
    /// The outgoing `(neighbor, weight)` pairs of each node.
    adjacency: BTreeMap<N, Vec<(N, W)>>,
    /// All edges in insertion order.
    edges: Vec<Edge<N, W>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Copy + Ord,
    W: Copy,
{
    /// Create a graph from a list of `(from, to, weight)` triples.
    ///
    /// For undirected graphs each edge is also inserted in reverse direction
    /// into the adjacency lists. Parallel edges are kept as separate entries.
    pub fn from_edges<I>(edges: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        Self::new_with(directed, |b| {
            for (u, v, w) in edges {
                b.add_edge(u, v, w);
            }
        })
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Return the number of edges as given, not counting reverse entries.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return an iterator over all nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn contains(&self, u: N) -> bool {
        self.adjacency.contains_key(&u)
    }

    /// Return the `(neighbor, weight)` pairs reachable from `u`.
    ///
    /// An unknown node has no neighbors.
    pub fn neighbors(&self, u: N) -> &[(N, W)] {
        self.adjacency.get(&u).map(|adj| &adj[..]).unwrap_or(&[])
    }

    /// Return all edges in insertion order.
    pub fn edges(&self) -> &[Edge<N, W>] {
        &self.edges
    }
}

impl<W> AdjacencyGraph<usize, W>
where
    W: Float,
{
    /// Create a graph from a square adjacency matrix.
    ///
    /// Nodes are numbered starting at 1, every strictly positive and finite
    /// entry `matrix[i][j]` becomes an edge `(i+1, j+1)`. Zero and infinite
    /// entries mean "no edge".
    ///
    /// For undirected graphs the entries above the diagonal are read first.
    /// An entry below the diagonal is only used if its mirror entry above the
    /// diagonal is not an edge, so a symmetric matrix yields each edge once
    /// and a triangular matrix may be given in either half. The diagonal is
    /// ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_orsteps::AdjacencyGraph;
    ///
    /// let g = AdjacencyGraph::from_matrix(&[
    ///     vec![0.0, 4.0, 1.0],
    ///     vec![4.0, 0.0, 0.0],
    ///     vec![1.0, 0.0, 0.0],
    /// ], false);
    /// assert_eq!(g.num_nodes(), 3);
    /// assert_eq!(g.num_edges(), 2);
    /// assert_eq!(g.neighbors(1), &[(2, 4.0), (3, 1.0)]);
    /// ```
    pub fn from_matrix(matrix: &[Vec<W>], directed: bool) -> Self {
        let is_edge = |w: W| w > W::zero() && w.is_finite();
        Self::new_with(directed, |b| {
            for (i, row) in matrix.iter().enumerate() {
                for (j, &w) in row.iter().enumerate() {
                    if !is_edge(w) {
                        continue;
                    }
                    let read = directed
                        || i < j
                        || (i > j && !matrix.get(j).and_then(|r| r.get(i)).map_or(false, |&m| is_edge(m)));
                    if read {
                        b.add_edge(i + 1, j + 1, w);
                    }
                }
            }
        })
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Copy + Ord + fmt::Display,
    W: Float,
{
    /// Return a rendering snapshot of the graph.
    ///
    /// For undirected graphs an edge is skipped if its reverse has already
    /// been listed.
    pub fn snapshot(&self) -> GraphData<N> {
        let mut seen = BTreeSet::new();
        let edges = self
            .edges
            .iter()
            .filter(|e| {
                let keep = self.directed || !seen.contains(&(e.to, e.from));
                if keep {
                    seen.insert((e.from, e.to));
                }
                keep
            })
            .map(|e| (e.from, e.to, e.weight));
        GraphData::new(self.nodes(), edges)
    }
}

/// Builder for an [`AdjacencyGraph`].
pub struct AdjacencyGraphBuilder<N, W>
where
    N: Ord,
{
    graph: AdjacencyGraph<N, W>,
}

impl<N, W> Builder for AdjacencyGraphBuilder<N, W>
where
    N: Copy + Ord,
    W: Copy,
{
    type Graph = AdjacencyGraph<N, W>;
    type Node = N;
    type Weight = W;

    fn with_capacities(directed: bool, _nnodes: usize, nedges: usize) -> Self {
        AdjacencyGraphBuilder {
            graph: AdjacencyGraph {
                directed,
                adjacency: BTreeMap::new(),
                edges: Vec::with_capacity(nedges),
            },
        }
    }

    fn reserve(&mut self, nedges: usize) {
        self.graph.edges.reserve(nedges);
    }

    fn num_nodes(&self) -> usize {
        self.graph.adjacency.len()
    }

    fn num_edges(&self) -> usize {
        self.graph.edges.len()
    }

    fn add_node(&mut self, u: N) -> bool {
        if self.graph.adjacency.contains_key(&u) {
            false
        } else {
            self.graph.adjacency.insert(u, vec![]);
            true
        }
    }

    fn add_edge(&mut self, u: N, v: N, weight: W) {
        self.add_node(u);
        self.add_node(v);
        self.graph.adjacency.entry(u).or_default().push((v, weight));
        if !self.graph.directed {
            self.graph.adjacency.entry(v).or_default().push((u, weight));
        }
        self.graph.edges.push(Edge { from: u, to: v, weight });
    }

    fn into_graph(self) -> AdjacencyGraph<N, W> {
        self.graph
    }
}

impl<N, W> Buildable for AdjacencyGraph<N, W>
where
    N: Copy + Ord,
    W: Copy,
{
    type Builder = AdjacencyGraphBuilder<N, W>;
}

/// A node of a rendering snapshot.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct NodeData<N> {
    pub id: N,
    pub label: String,
}

/// An edge of a rendering snapshot.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EdgeData<N> {
    pub from: N,
    pub to: N,
    pub weight: f64,
    pub label: String,
}

/// A graph in a form suitable for drawing.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct GraphData<N> {
    pub nodes: Vec<NodeData<N>>,
    pub edges: Vec<EdgeData<N>>,
}

impl<N> GraphData<N>
where
    N: Copy + fmt::Display,
{
    pub(crate) fn new<I, E, W>(nodes: I, edges: E) -> Self
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N, W)>,
        W: Float,
    {
        GraphData {
            nodes: nodes
                .into_iter()
                .map(|id| NodeData {
                    id,
                    label: id.to_string(),
                })
                .collect(),
            edges: edges
                .into_iter()
                .map(|(from, to, w)| {
                    let weight = report(w);
                    EdgeData {
                        from,
                        to,
                        weight,
                        label: weight.to_string(),
                    }
                })
                .collect(),
        }
    }
}
