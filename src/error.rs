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

//! Errors reported by the solvers.
//!
//! Every solver returns a [`Result`]. Callers that need a flat
//! "success flag plus message" view can convert it into an [`Outcome`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The class of a solver failure.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// A start or end node is not part of the graph.
    InvalidNode,
    /// The target node cannot be reached from the start node.
    NoPath,
    /// The graph has no edges or fewer than two nodes.
    InsufficientGraph,
    /// The graph does not admit a spanning tree.
    DisconnectedGraph,
    /// The transportation data is incomplete or has mismatching dimensions.
    MalformedInput,
    /// An edge weight is not supported by the algorithm.
    InvalidWeight,
    /// Any other failure inside a solver.
    Internal,
}

/// Error of a solver run.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum Error {
    #[error("the {role} node {node} does not exist in the graph")]
    InvalidNode { role: &'static str, node: String },
    #[error("there is no path from {start} to {end}")]
    NoPath { start: String, end: String },
    #[error("insufficient graph: {0}")]
    InsufficientGraph(&'static str),
    #[error("the graph is not connected: found {found} edges, but a spanning tree needs {needed}")]
    DisconnectedGraph { found: usize, needed: usize },
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("invalid weight: {0}")]
    InvalidWeight(String),
    #[error("error while running {engine}: {msg}")]
    Internal { engine: &'static str, msg: String },
}

impl Error {
    /// Return the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidNode { .. } => ErrorKind::InvalidNode,
            Error::NoPath { .. } => ErrorKind::NoPath,
            Error::InsufficientGraph(_) => ErrorKind::InsufficientGraph,
            Error::DisconnectedGraph { .. } => ErrorKind::DisconnectedGraph,
            Error::MalformedInput(_) => ErrorKind::MalformedInput,
            Error::InvalidWeight(_) => ErrorKind::InvalidWeight,
            Error::Internal { .. } => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The result of a solver run as seen by a presentation layer.
///
/// This is a [`Result`] flattened into a success flag: either the solution or
/// the error class with a human readable message.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Outcome<T> {
    Success(T),
    Failure { kind: ErrorKind, message: String },
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Return the solution or `None` on failure.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(x) => Some(x),
            Outcome::Failure { .. } => None,
        }
    }

    /// Return the error class on failure.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { kind, .. } => Some(*kind),
        }
    }
}

impl<T> From<Result<T>> for Outcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(x) => Outcome::Success(x),
            Err(err) => Outcome::Failure {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// Run a solver and turn a panic inside it into [`Error::Internal`].
pub(crate) fn guard<T, F>(engine: &'static str, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            tracing::error!(engine, %msg, "solver failed unexpectedly");
            Err(Error::Internal { engine, msg })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown failure".to_string()
    }
}
