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

//! The Northwest Corner rule.
//!
//! Starting at the upper left cell, each step assigns as much as possible to
//! the current cell and then moves down if the row is exhausted, right if the
//! column is exhausted, or diagonally if both are. Costs are ignored.

use super::{Method, Problem, Solution, Tableau};
use crate::error::Result;

/// Solve `problem` with the Northwest Corner rule.
pub fn solve(problem: &Problem) -> Result<Solution> {
    problem.solve(Method::NorthwestCorner)
}

pub(super) fn run(t: &mut Tableau) {
    let m = t.num_rows();
    let n = t.num_cols();
    let (mut i, mut j) = (0, 0);

    while i < m && j < n {
        t.assign(i, j, "", None);
        match (t.row_exhausted(i), t.col_exhausted(j)) {
            (true, true) => {
                i += 1;
                j += 1;
            }
            (true, false) => i += 1,
            _ => j += 1,
        }
    }
}
