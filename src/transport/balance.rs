// Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Balancing of supply and demand.

use super::Problem;
use crate::trace::round;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The dummy line added to a problem.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Padding {
    /// The problem was balanced.
    None,
    /// A dummy origin absorbing the excess demand.
    DummyRow,
    /// A dummy destination absorbing the excess supply.
    DummyColumn,
}

/// How a problem has been balanced.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Balancing {
    pub was_balanced: bool,
    pub padding: Padding,
    /// Number of origins and destinations before balancing.
    pub original_dimensions: (usize, usize),
    /// The absolute difference of total supply and total demand.
    pub difference: f64,
}

impl Problem {
    /// Return a balanced copy of this problem.
    ///
    /// If total supply exceeds total demand, a destination with zero costs
    /// and the difference as demand is appended. If total demand exceeds
    /// total supply, an origin with zero costs and the difference as supply
    /// is appended. A balanced problem is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_orsteps::transport::{Padding, Problem};
    ///
    /// let p = Problem::new(vec![vec![5.0, 3.0], vec![7.0, 9.0]], vec![100.0, 100.0], vec![60.0, 70.0]).unwrap();
    /// let (q, b) = p.balance();
    /// assert_eq!(b.padding, Padding::DummyColumn);
    /// assert_eq!(b.difference, 70.0);
    /// assert_eq!(q.demand(), &[60.0, 70.0, 70.0]);
    /// assert_eq!(q.costs()[1], vec![7.0, 9.0, 0.0]);
    /// assert!(q.is_balanced());
    /// ```
    pub fn balance(&self) -> (Problem, Balancing) {
        let total_supply = self.total_supply();
        let total_demand = self.total_demand();
        let mut balancing = Balancing {
            was_balanced: true,
            padding: Padding::None,
            original_dimensions: (self.num_origins(), self.num_destinations()),
            difference: 0.0,
        };

        let mut balanced = self.clone();
        if self.is_balanced() {
            return (balanced, balancing);
        }

        balancing.was_balanced = false;
        if total_supply > total_demand {
            let diff = total_supply - total_demand;
            for row in &mut balanced.costs {
                row.push(0.0);
            }
            balanced.demand.push(diff);
            balancing.padding = Padding::DummyColumn;
            balancing.difference = round(diff);
        } else {
            let diff = total_demand - total_supply;
            balanced.costs.push(vec![0.0; self.num_destinations()]);
            balanced.supply.push(diff);
            balancing.padding = Padding::DummyRow;
            balancing.difference = round(diff);
        }

        tracing::warn!(
            total_supply,
            total_demand,
            padding = ?balancing.padding,
            "unbalanced transportation problem, added a dummy line"
        );

        (balanced, balancing)
    }
}
