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

//! Vogel's approximation method (VAM).
//!
//! The penalty of a row (column) is the difference between its two smallest
//! costs among the open cells. Each step selects the line with the largest
//! penalty and assigns as much as possible to its cheapest open cell.
//!
//! Ties are broken in favour of the first row (column), and rows win over
//! columns with the same penalty.

use super::{Method, Problem, Solution, Tableau};
use crate::error::Result;
use crate::trace::{fmt_amount, round};

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A row or column of the transportation table (0-based).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Line {
    Row(usize),
    Column(usize),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        match self {
            Line::Row(i) => write!(f, "Row {}", i + 1),
            Line::Column(j) => write!(f, "Column {}", j + 1),
        }
    }
}

/// The penalties of a single step.
///
/// A line without open cells has no penalty (`None`).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Penalties {
    pub rows: Vec<Option<f64>>,
    pub columns: Vec<Option<f64>>,
    /// The line that has been selected.
    pub selected: Line,
    /// The penalty of the selected line.
    pub penalty: f64,
}

/// Solve `problem` with Vogel's approximation method.
pub fn solve(problem: &Problem) -> Result<Solution> {
    problem.solve(Method::Vogel)
}

/// Return the penalty of a line given the costs of its open cells.
fn penalty<I>(costs: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut first = None;
    let mut second = None;
    for c in costs {
        match first {
            Some(f) if c >= f => {
                if second.map_or(true, |s| c < s) {
                    second = Some(c);
                }
            }
            _ => {
                second = first;
                first = Some(c);
            }
        }
    }
    match (first, second) {
        (Some(f), Some(s)) => Some(s - f),
        (Some(f), None) => Some(f),
        _ => None,
    }
}

/// Return the first line with maximal penalty.
fn argmax(penalties: &[Option<f64>]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (k, p) in penalties.iter().enumerate() {
        if let Some(p) = *p {
            if best.map_or(true, |(_, b)| p > b) {
                best = Some((k, p));
            }
        }
    }
    best
}

/// Return the first index with minimal cost.
fn cheapest<I>(cells: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, f64)>,
{
    let mut best: Option<(usize, f64)> = None;
    for (k, c) in cells {
        if best.map_or(true, |(_, b)| c < b) {
            best = Some((k, c));
        }
    }
    best.map(|(k, _)| k)
}

pub(super) fn run(t: &mut Tableau) {
    let m = t.num_rows();
    let n = t.num_cols();
    let mut row_open = vec![true; m];
    let mut col_open = vec![true; n];

    while t.has_remaining() {
        let rows: Vec<Option<f64>> = (0..m)
            .map(|i| {
                if row_open[i] {
                    penalty((0..n).filter(|&j| col_open[j]).map(|j| t.cost(i, j)))
                } else {
                    None
                }
            })
            .collect();
        let columns: Vec<Option<f64>> = (0..n)
            .map(|j| {
                if col_open[j] {
                    penalty((0..m).filter(|&i| row_open[i]).map(|i| t.cost(i, j)))
                } else {
                    None
                }
            })
            .collect();

        let (selected, max_penalty) = match (argmax(&rows), argmax(&columns)) {
            (None, None) => break,
            (Some((i, p)), None) => (Line::Row(i), p),
            (None, Some((j, p))) => (Line::Column(j), p),
            (Some((i, pr)), Some((j, pc))) => {
                if pr >= pc {
                    (Line::Row(i), pr)
                } else {
                    (Line::Column(j), pc)
                }
            }
        };

        let cell = match selected {
            Line::Row(i) => cheapest((0..n).filter(|&j| col_open[j]).map(|j| (j, t.cost(i, j)))).map(|j| (i, j)),
            Line::Column(j) => cheapest((0..m).filter(|&i| row_open[i]).map(|i| (i, t.cost(i, j)))).map(|i| (i, j)),
        };
        let (i, j) = match cell {
            Some(cell) => cell,
            None => break,
        };

        let note = format!(" - {} (penalty: {})", selected, fmt_amount(max_penalty));
        let penalties = Penalties {
            rows: rows.into_iter().map(|p| p.map(round)).collect(),
            columns: columns.into_iter().map(|p| p.map(round)).collect(),
            selected,
            penalty: round(max_penalty),
        };
        t.assign(i, j, &note, Some(penalties));

        if t.row_exhausted(i) {
            row_open[i] = false;
        }
        if t.col_exhausted(j) {
            col_open[j] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{argmax, cheapest, penalty, solve, Line};
    use crate::transport::Problem;

    #[test]
    fn test_penalty() {
        assert_eq!(penalty(vec![4.0, 8.0, 8.0]), Some(4.0));
        assert_eq!(penalty(vec![16.0, 24.0, 16.0]), Some(0.0));
        assert_eq!(penalty(vec![9.0, 3.0, 5.0]), Some(2.0));
        assert_eq!(penalty(vec![7.0]), Some(7.0));
        assert_eq!(penalty(vec![]), None);
    }

    #[test]
    fn test_ties() {
        assert_eq!(argmax(&[Some(1.0), None, Some(3.0), Some(3.0)]), Some((2, 3.0)));
        assert_eq!(argmax(&[None, None]), None);
        assert_eq!(cheapest(vec![(1, 5.0), (2, 4.0), (3, 4.0)]), Some(2));
    }

    #[test]
    fn test_small() {
        let p = Problem::new(
            vec![vec![4.0, 8.0, 8.0], vec![16.0, 24.0, 16.0]],
            vec![120.0, 130.0],
            vec![80.0, 90.0, 80.0],
        )
        .unwrap();
        let sol = solve(&p).unwrap();
        assert_eq!(sol.allocation, vec![vec![30.0, 90.0, 0.0], vec![50.0, 0.0, 80.0]]);
        assert_eq!(sol.total_cost, 2920.0);

        let cells: Vec<_> = sol.iterations.iter().filter_map(|step| step.cell).collect();
        assert_eq!(cells, vec![(0, 1), (0, 0), (1, 0), (1, 2)]);

        let first = &sol.iterations[1];
        assert_eq!(first.description, "Assign 90 units to cell (1, 2) - Column 2 (penalty: 16)");
        let penalties = first.penalties.as_ref().unwrap();
        assert_eq!(penalties.rows, vec![Some(4.0), Some(0.0)]);
        assert_eq!(penalties.columns, vec![Some(12.0), Some(16.0), Some(8.0)]);
        assert_eq!(penalties.selected, Line::Column(1));

        // rows win ties against columns
        let last = sol.iterations.last().unwrap();
        let penalties = last.penalties.as_ref().unwrap();
        assert_eq!(penalties.rows, vec![None, Some(16.0)]);
        assert_eq!(penalties.columns, vec![None, None, Some(16.0)]);
        assert_eq!(penalties.selected, Line::Row(1));
        assert!(last.is_complete);
    }

    #[test]
    fn test_4x4() {
        let p = Problem::new(
            vec![
                vec![5.0, 2.0, 7.0, 3.0],
                vec![3.0, 6.0, 6.0, 1.0],
                vec![6.0, 1.0, 2.0, 4.0],
                vec![4.0, 3.0, 6.0, 6.0],
            ],
            vec![80.0, 30.0, 60.0, 45.0],
            vec![70.0, 40.0, 70.0, 35.0],
        )
        .unwrap();
        let sol = solve(&p).unwrap();
        assert_eq!(sol.row_sums(), vec![80.0, 30.0, 60.0, 45.0]);
        assert_eq!(sol.column_sums(), vec![70.0, 40.0, 70.0, 35.0]);
        assert!(sol.iterations.len() <= 1 + 4 + 4);
        assert!(sol.iterations.iter().skip(1).all(|step| step.penalties.is_some()));
    }
}
