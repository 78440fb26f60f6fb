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

//! The Minimum Cost (least cost) method.
//!
//! Each step assigns as much as possible to the cheapest cell whose row and
//! column are still open. Ties are broken by row-major order.

use super::{Method, Problem, Solution, Tableau};
use crate::error::Result;
use crate::trace::fmt_amount;

/// Solve `problem` with the Minimum Cost method.
pub fn solve(problem: &Problem) -> Result<Solution> {
    problem.solve(Method::MinimumCost)
}

pub(super) fn run(t: &mut Tableau) {
    let m = t.num_rows();
    let n = t.num_cols();
    let mut row_open = vec![true; m];
    let mut col_open = vec![true; n];

    while t.has_remaining() {
        let mut best: Option<(usize, usize)> = None;
        for i in (0..m).filter(|&i| row_open[i]) {
            for j in (0..n).filter(|&j| col_open[j]) {
                if best.map_or(true, |(bi, bj)| t.cost(i, j) < t.cost(bi, bj)) {
                    best = Some((i, j));
                }
            }
        }
        let (i, j) = match best {
            Some(cell) => cell,
            None => break,
        };

        let note = format!(" with cost {}", fmt_amount(t.cost(i, j)));
        t.assign(i, j, &note, None);

        if t.row_exhausted(i) {
            row_open[i] = false;
        }
        if t.col_exhausted(j) {
            col_open[j] = false;
        }
    }
}
