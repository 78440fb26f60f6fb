// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Implementation of Kruskal's algorithm

use crate::adjacencygraph::{AdjacencyGraph, Edge, GraphData};
use crate::collections::UnionFind;
use crate::error::{self, Error, Result};
use crate::num::traits::Float;
use crate::trace::{report, Trace};

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// What happened to an edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Verdict {
    /// The edge joins two components and has been added to the tree.
    Accepted,
    /// Both end nodes are already connected.
    FormsCycle,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        match self {
            Verdict::Accepted => write!(f, "added to the spanning tree"),
            Verdict::FormsCycle => write!(f, "rejected (forms a cycle)"),
        }
    }
}

/// Snapshot taken after an edge has been examined.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Iteration<N> {
    pub iteration: usize,
    pub edge: (N, N),
    pub weight: f64,
    pub verdict: Verdict,
    /// The tree edges accepted so far.
    pub tree_edges: Vec<Edge<N, f64>>,
    /// The total weight of `tree_edges`.
    pub total_weight: f64,
}

impl<N> Iteration<N> {
    pub fn is_accepted(&self) -> bool {
        self.verdict == Verdict::Accepted
    }
}

/// The result of Kruskal's algorithm.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SpanningTree<N> {
    /// The tree edges in the order they have been accepted.
    pub edges: Vec<Edge<N, f64>>,
    pub total_weight: f64,
    pub num_nodes: usize,
    pub num_edges: usize,
    pub iterations: Trace<Iteration<N>>,
    /// The input graph.
    pub graph: GraphData<N>,
    /// The spanning tree alone.
    pub tree: GraphData<N>,
    /// All edges in the order they are examined.
    pub sorted_edges: Vec<Edge<N, f64>>,
}

/// Run Kruskal's algorithm to solve the *Minimum Spanning Tree*
/// problem on a graph.
///
/// The edges of `g` are treated as undirected. They are examined by
/// ascending weight, edges with equal weight in input order. The algorithm
/// stops as soon as the tree is complete.
///
/// Fails if the graph has no edges or fewer than two nodes, if an edge has
/// a NaN weight, or if the graph is not connected.
///
/// # Example
///
/// ```
/// use rs_orsteps::mst::{kruskal, Verdict};
///
/// let tree = kruskal::solve_edges(vec![
///     (1, 2, 4.0), (1, 3, 2.0), (2, 3, 5.0), (2, 4, 10.0), (3, 4, 3.0),
///     (3, 5, 8.0), (4, 5, 7.0), (4, 6, 6.0), (5, 6, 9.0), (2, 5, 12.0),
/// ]).unwrap();
///
/// assert_eq!(tree.total_weight, 22.0);
/// assert_eq!(tree.num_edges, 5);
///
/// let verdicts: Vec<_> = tree.iterations.iter().map(|it| (it.edge, it.verdict)).collect();
/// assert_eq!(verdicts[3], ((2, 3), Verdict::FormsCycle));
/// ```
pub fn solve<N, W>(g: &AdjacencyGraph<N, W>) -> Result<SpanningTree<N>>
where
    N: Copy + Ord + Hash + fmt::Display,
    W: Float,
{
    error::guard("Kruskal", || run(g))
}

/// Build an undirected graph from `(from, to, weight)` triples and run
/// [`solve`].
pub fn solve_edges<N, W, I>(edges: I) -> Result<SpanningTree<N>>
where
    N: Copy + Ord + Hash + fmt::Display,
    W: Float,
    I: IntoIterator<Item = (N, N, W)>,
{
    let g = AdjacencyGraph::from_edges(edges, false);
    solve(&g)
}

fn run<N, W>(g: &AdjacencyGraph<N, W>) -> Result<SpanningTree<N>>
where
    N: Copy + Ord + Hash + fmt::Display,
    W: Float,
{
    if g.num_edges() == 0 {
        return Err(Error::InsufficientGraph("the graph has no edges"));
    }
    if g.num_nodes() < 2 {
        return Err(Error::InsufficientGraph("the graph must have at least 2 nodes"));
    }
    if let Some(e) = g.edges().iter().find(|e| e.weight.is_nan()) {
        return Err(Error::InvalidWeight(format!("edge ({}, {}) has no numeric weight", e.from, e.to)));
    }

    tracing::debug!(nodes = g.num_nodes(), edges = g.num_edges(), "start Kruskal");

    // `sort_by` is stable, equal weights keep the input order
    let mut edges: Vec<_> = g.edges().to_vec();
    edges.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    let needed = g.num_nodes() - 1;
    let mut comps = UnionFind::new(g.nodes());
    let mut tree: Vec<Edge<N, W>> = Vec::with_capacity(needed);
    let mut total = W::zero();
    let mut iterations = Trace::new();

    for e in &edges {
        let verdict = if comps.union(e.from, e.to) {
            tree.push(*e);
            total = total + e.weight;
            Verdict::Accepted
        } else {
            Verdict::FormsCycle
        };

        iterations.push(Iteration {
            iteration: iterations.len(),
            edge: (e.from, e.to),
            weight: report(e.weight),
            verdict,
            tree_edges: tree.iter().map(reported).collect(),
            total_weight: report(total),
        });

        if tree.len() == needed {
            break;
        }
    }

    if tree.len() != needed {
        return Err(Error::DisconnectedGraph {
            found: tree.len(),
            needed,
        });
    }

    tracing::debug!(
        examined = iterations.len(),
        total_weight = report(total),
        "Kruskal finished"
    );

    Ok(SpanningTree {
        edges: tree.iter().map(reported).collect(),
        total_weight: report(total),
        num_nodes: g.num_nodes(),
        num_edges: tree.len(),
        iterations,
        graph: GraphData::new(g.nodes(), g.edges().iter().map(|e| (e.from, e.to, e.weight))),
        tree: GraphData::new(g.nodes(), tree.iter().map(|e| (e.from, e.to, e.weight))),
        sorted_edges: edges.iter().map(reported).collect(),
    })
}

fn reported<N, W>(e: &Edge<N, W>) -> Edge<N, f64>
where
    N: Copy,
    W: Float,
{
    Edge {
        from: e.from,
        to: e.to,
        weight: report(e.weight),
    }
}
