// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! Classical operations research algorithms that record every step.
//!
//! Each solver returns its final answer together with a [`Trace`] of
//! immutable snapshots, one per decision, so that the computation can be
//! replayed step by step.
//!
//! - [`transport`]: Northwest Corner, Minimum Cost and Vogel's approximation
//!   for (automatically balanced) transportation problems,
//! - [`shortestpath::dijkstra`]: single source shortest paths,
//! - [`mst::kruskal`]: minimum spanning trees.

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod builder;
pub use crate::builder::{Buildable, Builder};

pub mod adjacencygraph;
pub use self::adjacencygraph::{AdjacencyGraph, Edge, GraphData};

pub mod collections;

pub mod trace;
pub use self::trace::{Distance, Trace};

pub mod error;
pub use self::error::{Error, ErrorKind, Outcome, Result};

// # Algorithms

pub mod mst;
pub mod shortestpath;
pub mod transport;
