// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Iteration traces and the numeric conventions of reported values.
//!
//! All solvers compute with full precision. Only values that end up in a
//! trace snapshot or in a solution are rounded to [`DECIMALS`] decimal places.

use crate::num::traits::Float;

use std::fmt;
use std::ops::Index;
use std::slice::Iter as SliceIter;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Number of decimal places of reported values.
pub const DECIMALS: i32 = 2;

/// Round a value to [`DECIMALS`] decimal places.
pub fn round(x: f64) -> f64 {
    let scale = 10f64.powi(DECIMALS);
    (x * scale).round() / scale
}

/// Convert a weight to a rounded `f64` for reporting.
pub fn report<W: Float>(w: W) -> f64 {
    w.to_f64().map(round).unwrap_or(f64::NAN)
}

/// Format a quantity for a step description.
///
/// Integral values are written without decimals.
pub(crate) fn fmt_amount(x: f64) -> String {
    let x = round(x);
    if x.fract() == 0.0 {
        format!("{:.0}", x)
    } else {
        format!("{:.*}", DECIMALS as usize, x)
    }
}

/// A reported distance.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Distance {
    /// A finite distance, rounded to [`DECIMALS`] decimal places.
    Finite(f64),
    /// The node has not been reached.
    #[cfg_attr(feature = "serialize", serde(rename = "INF"))]
    Infinite,
}

impl Distance {
    /// Turn a computed weight into a reported distance.
    pub fn from_weight<W: Float>(w: W) -> Distance {
        if w.is_infinite() {
            Distance::Infinite
        } else {
            Distance::Finite(report(w))
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Return the finite value or `None`.
    pub fn value(&self) -> Option<f64> {
        match *self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "INF"),
        }
    }
}

/// An append-only sequence of snapshots.
///
/// A solver owns its trace while it runs and pushes one snapshot per step.
/// Once the trace is handed out as part of a solution there is no way to
/// change or remove a snapshot.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize), serde(transparent))]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Trace { steps: vec![] }
    }
}

impl<S> Trace<S> {
    pub(crate) fn new() -> Self {
        Default::default()
    }

    /// Append a snapshot.
    pub(crate) fn push(&mut self, step: S) {
        tracing::trace!(step = self.steps.len(), "snapshot recorded");
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&S> {
        self.steps.get(i)
    }

    pub fn first(&self) -> Option<&S> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn iter(&self) -> SliceIter<S> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.steps
    }
}

impl<S> Index<usize> for Trace<S> {
    type Output = S;

    fn index(&self, i: usize) -> &S {
        &self.steps[i]
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = SliceIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{fmt_amount, report, round, Distance, Trace};

    #[test]
    fn test_round() {
        assert_eq!(round(1.0 / 3.0), 0.33);
        assert_eq!(round(2.675_1), 2.68);
        assert_eq!(round(-1.005_1), -1.01);
        assert_eq!(report(7.25f32), 7.25);
    }

    #[test]
    fn test_fmt_amount() {
        assert_eq!(fmt_amount(80.0), "80");
        assert_eq!(fmt_amount(12.5), "12.50");
        assert_eq!(fmt_amount(0.000_001), "0");
    }

    #[test]
    fn test_distance() {
        assert_eq!(Distance::from_weight(f64::INFINITY), Distance::Infinite);
        assert_eq!(Distance::from_weight(3.14159), Distance::Finite(3.14));
        assert_eq!(Distance::Infinite.value(), None);
        assert_eq!(Distance::Infinite.to_string(), "INF");
        assert_eq!(Distance::Finite(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_trace() {
        let mut trace = Trace::new();
        assert!(trace.is_empty());
        trace.push("a");
        trace.push("b");
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0], "a");
        assert_eq!(trace.last(), Some(&"b"));
        assert_eq!(trace.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_serde() {
        let mut trace = Trace::new();
        trace.push(Distance::Finite(1.5));
        trace.push(Distance::Infinite);
        let s = serde_json::to_string(&trace).unwrap();
        assert_eq!(s, r#"[{"Finite":1.5},"INF"]"#);
        let t: Trace<Distance> = serde_json::from_str(&s).unwrap();
        assert_eq!(t, trace);
    }
}
