/*
 * Copyright (c) 2017, 2018, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start node $s \in
//! V$ to all other nodes in a (directed or undirected) graph. Each edge is
//! assigned a non-negative weight (or length) $w \colon E \to \mathbb{R}_+$.
//!
//! The frontier is a binary heap with lazy deletion: an improved distance is
//! pushed as a new entry and outdated entries are skipped when popped. Entries
//! with equal distance are settled in ascending node order. Every settled node
//! produces one [`Iteration`] snapshot.
//!
//! # Example
//!
//! ```
//! use rs_orsteps::shortestpath::dijkstra;
//! use rs_orsteps::Distance;
//!
//! let edges = vec![
//!     (1, 2, 7.0), (1, 3, 9.0), (1, 6, 14.0),
//!     (2, 3, 10.0), (2, 4, 15.0), (3, 4, 11.0),
//!     (3, 6, 2.0), (4, 5, 6.0), (5, 6, 9.0),
//! ];
//!
//! let sol = dijkstra::solve_edges(edges, 1, Some(5), false).unwrap();
//! assert_eq!(sol.distance, Some(20.0));
//! assert_eq!(sol.path, vec![1, 3, 6, 5]);
//! assert_eq!(sol.path_edges, vec![(1, 3), (3, 6), (6, 5)]);
//!
//! // the order in which the nodes have been settled
//! let order: Vec<_> = sol.iterations.iter().map(|it| it.current_node).collect();
//! assert_eq!(order, vec![1, 2, 3, 6, 4, 5]);
//! assert_eq!(sol.distances[&4], Distance::Finite(20.0));
//! ```

use crate::adjacencygraph::{AdjacencyGraph, GraphData};
use crate::collections::{BinHeap, PriQueue};
use crate::error::{self, Error, Result};
use crate::num::traits::Float;
use crate::trace::{report, Distance, Trace};

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Snapshot taken right after a node has been settled.
///
/// The distances are those known at that moment, i.e. before the edges of
/// `current_node` have been relaxed.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Iteration<N>
where
    N: Ord,
{
    pub iteration: usize,
    pub current_node: N,
    pub current_distance: Distance,
    pub distances: BTreeMap<N, Distance>,
    /// Settled nodes in ascending order.
    pub visited: Vec<N>,
    /// Unsettled nodes in ascending order.
    pub unvisited: Vec<N>,
}

/// The result of a Dijkstra run.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ShortestPaths<N>
where
    N: Ord,
{
    pub start: N,
    /// The target node, if any.
    pub end: Option<N>,
    /// Length of the path to `end`.
    pub distance: Option<f64>,
    /// The nodes on the path from `start` to `end`.
    pub path: Vec<N>,
    /// The edges on the path from `start` to `end`.
    pub path_edges: Vec<(N, N)>,
    /// The distance of every node as known at termination.
    pub distances: BTreeMap<N, Distance>,
    /// Without a target: the path to every reachable node other than `start`.
    pub paths: BTreeMap<N, Vec<N>>,
    pub iterations: Trace<Iteration<N>>,
    pub graph: GraphData<N>,
    pub directed: bool,
}

/// Run Dijkstra's algorithm on `g` starting at `start`.
///
/// If `end` is given the search stops as soon as `end` has been settled and
/// the path to it is returned. Otherwise all reachable nodes are settled and
/// paths to all of them are returned.
///
/// Fails if one of the nodes is not contained in the graph, if the graph
/// contains a negative (or NaN) weight or if `end` cannot be reached.
pub fn solve<N, W>(g: &AdjacencyGraph<N, W>, start: N, end: Option<N>) -> Result<ShortestPaths<N>>
where
    N: Copy + Ord + fmt::Display,
    W: Float,
{
    error::guard("Dijkstra", || run(g, start, end))
}

/// Build a graph from `(from, to, weight)` triples and run [`solve`].
pub fn solve_edges<N, W, I>(edges: I, start: N, end: Option<N>, directed: bool) -> Result<ShortestPaths<N>>
where
    N: Copy + Ord + fmt::Display,
    W: Float,
    I: IntoIterator<Item = (N, N, W)>,
{
    let g = AdjacencyGraph::from_edges(edges, directed);
    solve(&g, start, end)
}

fn run<N, W>(g: &AdjacencyGraph<N, W>, start: N, end: Option<N>) -> Result<ShortestPaths<N>>
where
    N: Copy + Ord + fmt::Display,
    W: Float,
{
    if !g.contains(start) {
        return Err(Error::InvalidNode {
            role: "start",
            node: start.to_string(),
        });
    }
    if let Some(end) = end {
        if !g.contains(end) {
            return Err(Error::InvalidNode {
                role: "end",
                node: end.to_string(),
            });
        }
    }
    if let Some(e) = g.edges().iter().find(|e| e.weight.is_nan() || e.weight < W::zero()) {
        return Err(Error::InvalidWeight(format!(
            "edge ({}, {}) has weight {}, Dijkstra's algorithm requires non-negative weights",
            e.from,
            e.to,
            report(e.weight)
        )));
    }

    tracing::debug!(
        nodes = g.num_nodes(),
        edges = g.num_edges(),
        directed = g.is_directed(),
        %start,
        "start Dijkstra"
    );

    let mut dist: BTreeMap<N, W> = g.nodes().map(|u| (u, W::infinity())).collect();
    let mut pred: BTreeMap<N, N> = BTreeMap::new();
    let mut visited = BTreeSet::new();
    let mut iterations = Trace::new();
    let mut frontier = BinHeap::new();

    dist.insert(start, W::zero());
    frontier.push(start, W::zero());

    while let Some((u, d)) = frontier.pop_min() {
        if !visited.insert(u) {
            continue;
        }

        iterations.push(Iteration {
            iteration: iterations.len(),
            current_node: u,
            current_distance: Distance::from_weight(d),
            distances: reported(&dist),
            visited: visited.iter().copied().collect(),
            unvisited: g.nodes().filter(|v| !visited.contains(v)).collect(),
        });

        if end == Some(u) {
            break;
        }

        for &(v, w) in g.neighbors(u) {
            if visited.contains(&v) {
                continue;
            }
            let newdist = d + w;
            if dist.get(&v).map(|&old| newdist < old).unwrap_or(true) {
                dist.insert(v, newdist);
                pred.insert(v, u);
                frontier.push(v, newdist);
            }
        }
    }

    let distances = reported(&dist);
    let mut sol = ShortestPaths {
        start,
        end,
        distance: None,
        path: vec![],
        path_edges: vec![],
        distances,
        paths: BTreeMap::new(),
        iterations,
        graph: g.snapshot(),
        directed: g.is_directed(),
    };

    if let Some(end) = end {
        let d = dist.get(&end).copied().unwrap_or_else(W::infinity);
        if d.is_infinite() {
            return Err(Error::NoPath {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        sol.distance = Some(report(d));
        sol.path = path_to(&pred, end);
        sol.path_edges = sol.path.windows(2).map(|uv| (uv[0], uv[1])).collect();
    } else {
        sol.paths = dist
            .iter()
            .filter(|&(&v, d)| v != start && !d.is_infinite())
            .map(|(&v, _)| (v, path_to(&pred, v)))
            .collect();
    }

    tracing::debug!(
        settled = visited.len(),
        iterations = sol.iterations.len(),
        distance = ?sol.distance,
        "Dijkstra finished"
    );

    Ok(sol)
}

/// Walk the predecessor links from `v` back to the start node.
fn path_to<N>(pred: &BTreeMap<N, N>, v: N) -> Vec<N>
where
    N: Copy + Ord,
{
    let mut path = vec![v];
    let mut v = v;
    while let Some(&u) = pred.get(&v) {
        path.push(u);
        v = u;
    }
    path.reverse();
    path
}

fn reported<N, W>(dist: &BTreeMap<N, W>) -> BTreeMap<N, Distance>
where
    N: Copy + Ord,
    W: Float,
{
    dist.iter().map(|(&u, &d)| (u, Distance::from_weight(d))).collect()
}

#[cfg(test)]
mod tests {
    use super::{solve, solve_edges};
    use crate::error::ErrorKind;
    use crate::trace::Distance;
    use crate::AdjacencyGraph;

    fn roads() -> Vec<(u32, u32, f64)> {
        vec![
            (1, 2, 7.0),
            (1, 3, 9.0),
            (1, 6, 14.0),
            (2, 3, 10.0),
            (2, 4, 15.0),
            (3, 4, 11.0),
            (3, 6, 2.0),
            (4, 5, 6.0),
            (5, 6, 9.0),
        ]
    }

    #[test]
    fn test_target() {
        let sol = solve_edges(roads(), 1, Some(5), false).unwrap();
        assert_eq!(sol.start, 1);
        assert_eq!(sol.end, Some(5));
        assert_eq!(sol.distance, Some(20.0));
        assert_eq!(sol.path, vec![1, 3, 6, 5]);
        assert!(sol.paths.is_empty());
        assert_eq!(sol.graph.edges.len(), 9);

        let first = &sol.iterations[0];
        assert_eq!(first.iteration, 0);
        assert_eq!(first.current_node, 1);
        assert_eq!(first.current_distance, Distance::Finite(0.0));
        assert_eq!(first.visited, vec![1]);
        assert_eq!(first.unvisited, vec![2, 3, 4, 5, 6]);
        assert_eq!(first.distances[&2], Distance::Infinite);

        let third = &sol.iterations[2];
        assert_eq!(third.current_node, 3);
        assert_eq!(third.distances[&4], Distance::Finite(22.0));
        assert_eq!(third.distances[&6], Distance::Finite(14.0));

        let last = sol.iterations.last().unwrap();
        assert_eq!(last.current_node, 5);
        assert!(last.unvisited.is_empty());
    }

    #[test]
    fn test_all_nodes() {
        let sol = solve_edges(roads(), 1, None, false).unwrap();
        assert_eq!(sol.distance, None);
        assert!(sol.path.is_empty());
        assert_eq!(sol.iterations.len(), 6);
        let d: Vec<_> = sol.distances.values().map(|d| d.value().unwrap()).collect();
        assert_eq!(d, vec![0.0, 7.0, 9.0, 20.0, 20.0, 11.0]);
        assert_eq!(sol.paths.len(), 5);
        assert_eq!(sol.paths[&4], vec![1, 3, 4]);
        assert_eq!(sol.paths[&6], vec![1, 3, 6]);
    }

    #[test]
    fn test_directed() {
        let edges = vec![
            (1, 2, 4.0),
            (1, 3, 2.0),
            (2, 3, 5.0),
            (2, 4, 10.0),
            (3, 4, 3.0),
            (3, 5, 8.0),
            (4, 5, 7.0),
            (5, 2, 1.0),
        ];
        let sol = solve_edges(edges.clone(), 1, Some(5), true).unwrap();
        assert_eq!(sol.distance, Some(10.0));
        assert_eq!(sol.path, vec![1, 3, 5]);

        let sol = solve_edges(edges, 5, None, true).unwrap();
        assert_eq!(sol.distances[&1], Distance::Infinite);
        assert_eq!(sol.distances[&4], Distance::Finite(9.0));
        assert!(!sol.paths.contains_key(&1));
    }

    #[test]
    fn test_errors() {
        let err = solve_edges(roads(), 7, None, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNode);
        assert_eq!(err.to_string(), "the start node 7 does not exist in the graph");

        let err = solve_edges(roads(), 1, Some(0), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNode);

        let err = solve_edges(vec![(1, 2, 1.0), (3, 4, 1.0)], 1, Some(4), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoPath);
        assert_eq!(err.to_string(), "there is no path from 1 to 4");

        let err = solve_edges(vec![(1, 2, 1.0), (2, 3, -1.0)], 1, None, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidWeight);
    }

    #[test]
    fn test_parallel_edges_and_loops() {
        let g = AdjacencyGraph::from_edges(vec![(1, 1, 0.5), (1, 2, 3.0), (1, 2, 1.25)], false);
        let sol = solve(&g, 1, Some(2)).unwrap();
        assert_eq!(sol.distance, Some(1.25));
        assert_eq!(sol.iterations.len(), 2);
    }

    #[test]
    fn test_rounding_only_in_report() {
        // 0.004 + 0.004 rounds to 0.01 but each edge alone rounds to 0
        let edges = vec![(1, 2, 0.004), (2, 3, 0.004), (1, 3, 0.009)];
        let sol = solve_edges(edges, 1, Some(3), true).unwrap();
        assert_eq!(sol.path, vec![1, 2, 3]);
        assert_eq!(sol.distance, Some(0.01));
    }

    #[test]
    fn test_start_is_end() {
        let sol = solve_edges(roads(), 4, Some(4), false).unwrap();
        assert_eq!(sol.distance, Some(0.0));
        assert_eq!(sol.path, vec![4]);
        assert!(sol.path_edges.is_empty());
        assert_eq!(sol.iterations.len(), 1);
    }
}
