/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Traits for constructing graphs.

/// A trait to construct graphs.
///
/// Graphs are static objects once a solver works on them. In order to build
/// a graph incrementally, one should use a graph builder and, once the
/// construction is complete, convert it into a graph.
///
/// Nodes are identified by caller supplied keys. Adding an edge adds its end
/// nodes implicitly.
pub trait Builder
where
    Self: Sized,
{
    /// The graph type produced by this builder.
    type Graph;

    /// The type of a node key.
    type Node: Copy + Eq;

    /// The type of an edge weight.
    type Weight: Copy;

    /// Create a new, empty builder.
    fn new(directed: bool) -> Self {
        Self::with_capacities(directed, 0, 0)
    }

    /// Create a new, empty builder.
    ///
    /// The builder might be passed a guess of the number of nodes and
    /// edges. This might be used to reserve the appropriate internal
    /// memory, but is no strict requirement for the number of nodes
    /// and edges to be added to the graph.
    fn with_capacities(directed: bool, nnodes: usize, nedges: usize) -> Self;

    /// Reserve memory for a certain number of edges.
    fn reserve(&mut self, nedges: usize);

    /// Return the current number of nodes.
    fn num_nodes(&self) -> usize;

    /// Return the current number of edges.
    fn num_edges(&self) -> usize;

    /// Add a node without edges.
    ///
    /// Returns `true` if the node had not been contained in the graph.
    fn add_node(&mut self, u: Self::Node) -> bool;

    /// Add a new edge.
    ///
    /// Parallel edges and loops are allowed.
    fn add_edge(&mut self, u: Self::Node, v: Self::Node, weight: Self::Weight);

    /// Turn the builder into a graph.
    fn into_graph(self) -> Self::Graph;
}

/// A graph with a default builder.
pub trait Buildable
where
    Self: Sized,
{
    type Builder: Builder<Graph = Self>;

    /// Create a new builder for this graph type.
    fn new_builder(directed: bool) -> Self::Builder {
        Self::Builder::new(directed)
    }

    /// Create a new graph by passing the builder to the callback `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_orsteps::{AdjacencyGraph, Buildable, Builder};
    ///
    /// let g = AdjacencyGraph::<u32, f64>::new_with(false, |b| {
    ///     b.add_edge(1, 2, 3.0);
    ///     b.add_edge(2, 3, 1.5);
    ///     b.add_node(7);
    /// });
    ///
    /// assert_eq!(g.num_nodes(), 4);
    /// assert_eq!(g.num_edges(), 2);
    /// assert_eq!(g.neighbors(2), &[(1, 3.0), (3, 1.5)]);
    /// ```
    fn new_with<F>(directed: bool, f: F) -> Self
    where
        F: FnOnce(&mut Self::Builder),
    {
        let mut b = Self::new_builder(directed);
        f(&mut b);
        b.into_graph()
    }
}
