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

//! Initial solutions of the transportation problem.
//!
//! A transportation problem consists of $m$ origins with supplies $s_i$, $n$
//! destinations with demands $d_j$ and unit costs $c_{ij}$ for shipping from
//! origin $i$ to destination $j$. The heuristics in this module compute a
//! feasible allocation $x_{ij} \ge 0$ with $\sum_j x_{ij} = s_i$ and $\sum_i
//! x_{ij} = d_j$.
//!
//! Unbalanced problems are balanced first (see [`Problem::balance`]). Each
//! heuristic records the empty table and one [`Step`] per assignment.
//!
//! # Example
//!
//! ```
//! use rs_orsteps::transport::{self, Method};
//!
//! let sol = transport::solve(
//!     vec![vec![4.0, 8.0, 8.0], vec![16.0, 24.0, 16.0]],
//!     vec![120.0, 130.0],
//!     vec![80.0, 90.0, 80.0],
//!     Method::NorthwestCorner,
//! )
//! .unwrap();
//!
//! assert_eq!(sol.allocation, vec![vec![80.0, 40.0, 0.0], vec![0.0, 50.0, 80.0]]);
//! assert_eq!(sol.total_cost, 3120.0);
//! assert_eq!(sol.iterations.len(), 5);
//! assert_eq!(sol.iterations[1].description, "Assign 80 units to cell (1, 1)");
//!
//! let all = transport::solve_all(
//!     vec![vec![4.0, 8.0, 8.0], vec![16.0, 24.0, 16.0]],
//!     vec![120.0, 130.0],
//!     vec![80.0, 90.0, 80.0],
//! )
//! .unwrap();
//! assert_eq!(all.comparison.best_method, Method::Vogel);
//! assert_eq!(all.vogel.total_cost, 2920.0);
//! ```

mod balance;
pub mod mincost;
pub mod northwest;
pub mod vogel;

pub use self::balance::{Balancing, Padding};
pub use self::vogel::{Line, Penalties};

use crate::error::{self, Error, Result};
use crate::trace::{fmt_amount, round, Trace};

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Default zero threshold for quantities.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// A heuristic for the initial solution.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Method {
    NorthwestCorner,
    MinimumCost,
    Vogel,
}

impl Method {
    /// All methods in evaluation order.
    pub const ALL: [Method; 3] = [Method::NorthwestCorner, Method::MinimumCost, Method::Vogel];

    /// Return the display name of the method.
    pub fn name(self) -> &'static str {
        match self {
            Method::NorthwestCorner => "Northwest Corner",
            Method::MinimumCost => "Minimum Cost",
            Method::Vogel => "Vogel (VAM)",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Parse one of `northwest`, `minimum_cost` or `vogel`.
    fn from_str(s: &str) -> Result<Method> {
        match s {
            "northwest" => Ok(Method::NorthwestCorner),
            "minimum_cost" => Ok(Method::MinimumCost),
            "vogel" => Ok(Method::Vogel),
            _ => Err(Error::MalformedInput(format!("unknown method: {}", s))),
        }
    }
}

/// A transportation problem.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Problem {
    costs: Vec<Vec<f64>>,
    supply: Vec<f64>,
    demand: Vec<f64>,
    /// Quantities up to this value are considered zero.
    tolerance: f64,
}

impl Problem {
    /// Create a new problem.
    ///
    /// `costs` must have one row per origin (entry of `supply`) and one
    /// column per destination (entry of `demand`). All numbers must be
    /// finite, supplies and demands non-negative.
    pub fn new(costs: Vec<Vec<f64>>, supply: Vec<f64>, demand: Vec<f64>) -> Result<Problem> {
        if costs.is_empty() || supply.is_empty() || demand.is_empty() {
            return Err(Error::MalformedInput(
                "incomplete data, costs, supply and demand are required".to_string(),
            ));
        }
        if costs.len() != supply.len() {
            return Err(Error::MalformedInput(format!(
                "the cost matrix has {} rows but there are {} origins",
                costs.len(),
                supply.len()
            )));
        }
        if let Some((i, row)) = costs.iter().enumerate().find(|(_, row)| row.len() != demand.len()) {
            return Err(Error::MalformedInput(format!(
                "row {} of the cost matrix has {} columns but there are {} destinations",
                i + 1,
                row.len(),
                demand.len()
            )));
        }
        if costs.iter().flatten().any(|c| !c.is_finite()) {
            return Err(Error::MalformedInput("all costs must be finite numbers".to_string()));
        }
        if supply.iter().chain(demand.iter()).any(|x| !x.is_finite() || *x < 0.0) {
            return Err(Error::MalformedInput(
                "supplies and demands must be non-negative numbers".to_string(),
            ));
        }

        Ok(Problem {
            costs,
            supply,
            demand,
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    pub fn costs(&self) -> &[Vec<f64>] {
        &self.costs
    }

    pub fn supply(&self) -> &[f64] {
        &self.supply
    }

    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    /// Return the zero threshold for quantities.
    ///
    /// Used for the balance test, for closing exhausted rows and columns and
    /// for reporting decision variables. Defaults to [`DEFAULT_TOLERANCE`].
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Set the zero threshold for quantities.
    ///
    /// The threshold must be finite and non-negative. A threshold of `0`
    /// means exact comparisons.
    pub fn set_tolerance(&mut self, tolerance: f64) -> Result<()> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::MalformedInput(format!(
                "the tolerance must be a non-negative number, got {}",
                tolerance
            )));
        }
        self.tolerance = tolerance;
        Ok(())
    }

    pub fn num_origins(&self) -> usize {
        self.supply.len()
    }

    pub fn num_destinations(&self) -> usize {
        self.demand.len()
    }

    pub fn total_supply(&self) -> f64 {
        self.supply.iter().sum()
    }

    pub fn total_demand(&self) -> f64 {
        self.demand.iter().sum()
    }

    /// Return `true` if total supply equals total demand up to the tolerance.
    pub fn is_balanced(&self) -> bool {
        (self.total_supply() - self.total_demand()).abs() <= self.tolerance
    }

    /// Balance the problem and run a single heuristic.
    pub fn solve(&self, method: Method) -> Result<Solution> {
        error::guard("transportation", || {
            let (balanced, balancing) = self.balance();
            Ok(balanced.run(method, &balancing))
        })
    }

    /// Balance the problem and run all heuristics on the same instance.
    pub fn solve_all(&self) -> Result<AllMethods> {
        error::guard("transportation", || {
            let (balanced, balancing) = self.balance();
            let northwest = balanced.run(Method::NorthwestCorner, &balancing);
            let minimum_cost = balanced.run(Method::MinimumCost, &balancing);
            let vogel = balanced.run(Method::Vogel, &balancing);
            let comparison = Comparison::new([&northwest, &minimum_cost, &vogel]);

            tracing::debug!(best = %comparison.best_method, "compared all methods");

            Ok(AllMethods {
                northwest,
                minimum_cost,
                vogel,
                comparison,
                costs: self.costs.clone(),
                supply: self.supply.clone(),
                demand: self.demand.clone(),
                balancing,
            })
        })
    }

    /// Run a heuristic on this (balanced) problem.
    fn run(&self, method: Method, balancing: &Balancing) -> Solution {
        tracing::debug!(
            %method,
            origins = self.num_origins(),
            destinations = self.num_destinations(),
            "start transportation heuristic"
        );

        let mut tableau = Tableau::new(self, method);
        match method {
            Method::NorthwestCorner => northwest::run(&mut tableau),
            Method::MinimumCost => mincost::run(&mut tableau),
            Method::Vogel => vogel::run(&mut tableau),
        }
        let sol = tableau.into_solution(method, balancing.clone());

        tracing::debug!(
            %method,
            steps = sol.iterations.len(),
            total_cost = sol.total_cost,
            "transportation heuristic finished"
        );
        sol
    }
}

/// Balance a problem and run a single heuristic.
pub fn solve(costs: Vec<Vec<f64>>, supply: Vec<f64>, demand: Vec<f64>, method: Method) -> Result<Solution> {
    Problem::new(costs, supply, demand)?.solve(method)
}

/// Balance a problem and run all heuristics.
pub fn solve_all(costs: Vec<Vec<f64>>, supply: Vec<f64>, demand: Vec<f64>) -> Result<AllMethods> {
    Problem::new(costs, supply, demand)?.solve_all()
}

/// Snapshot of the transportation table.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Step {
    pub iteration: usize,
    pub description: String,
    pub allocation: Vec<Vec<f64>>,
    pub supply_left: Vec<f64>,
    pub demand_left: Vec<f64>,
    /// Cost of the allocation so far.
    pub total_cost: f64,
    /// The cell assigned in this step (0-based row and column).
    pub cell: Option<(usize, usize)>,
    pub amount: Option<f64>,
    /// `true` if all supplies and demands are exhausted.
    pub is_complete: bool,
    /// The penalties the choice was based on (only for Vogel's method).
    pub penalties: Option<Penalties>,
}

/// A positive decision variable of a solution.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Variable {
    /// The name `X<row><column>` with 1-based indices, see [`variable_name`].
    pub name: String,
    pub row: usize,
    pub column: usize,
    pub value: f64,
    pub cost: f64,
    /// `value * cost`
    pub total: f64,
}

/// The result of a single heuristic.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Solution {
    pub method: Method,
    pub allocation: Vec<Vec<f64>>,
    pub total_cost: f64,
    /// Variables with positive value in row-major order.
    pub variables: Vec<Variable>,
    pub iterations: Trace<Step>,
    /// Costs of the balanced problem.
    pub costs: Vec<Vec<f64>>,
    /// Supplies of the balanced problem.
    pub supply: Vec<f64>,
    /// Demands of the balanced problem.
    pub demand: Vec<f64>,
    pub balancing: Balancing,
}

/// Return the name of the decision variable of cell `(i, j)` (0-based).
///
/// Indices are written 1-based and back to back, as in `X23`. If one of them
/// has more than one digit they are separated by an underscore, as in
/// `X2_11`, so that names stay distinct.
///
/// # Example
///
/// ```
/// use rs_orsteps::transport::variable_name;
///
/// assert_eq!(variable_name(1, 2), "X23");
/// assert_eq!(variable_name(0, 10), "X1_11");
/// assert_ne!(variable_name(0, 10), variable_name(10, 0));
/// ```
pub fn variable_name(i: usize, j: usize) -> String {
    if i < 9 && j < 9 {
        format!("X{}{}", i + 1, j + 1)
    } else {
        format!("X{}_{}", i + 1, j + 1)
    }
}

impl Solution {
    /// Return the variable with the given name.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Return the variable of cell `(i, j)` (0-based) if it is positive.
    pub fn variable_at(&self, i: usize, j: usize) -> Option<&Variable> {
        self.variables.iter().find(|v| v.row == i && v.column == j)
    }

    pub fn row_sums(&self) -> Vec<f64> {
        self.allocation.iter().map(|row| row.iter().sum::<f64>()).collect()
    }

    pub fn column_sums(&self) -> Vec<f64> {
        let n = self.demand.len();
        (0..n).map(|j| self.allocation.iter().map(|row| row[j]).sum::<f64>()).collect()
    }
}

/// Side by side comparison of all heuristics.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Comparison {
    /// Names of all variables positive in at least one solution, sorted by
    /// row and then by column.
    pub variables: Vec<String>,
    /// Values of `variables` in the Northwest Corner solution.
    pub northwest: Vec<f64>,
    /// Values of `variables` in the Minimum Cost solution.
    pub minimum_cost: Vec<f64>,
    /// Values of `variables` in Vogel's solution.
    pub vogel: Vec<f64>,
    /// Total cost of each method in evaluation order.
    pub totals: Vec<(Method, f64)>,
    /// The method with the smallest total cost, the first one on ties.
    pub best_method: Method,
}

impl Comparison {
    fn new(solutions: [&Solution; 3]) -> Comparison {
        let cells: BTreeSet<(usize, usize)> = solutions
            .iter()
            .flat_map(|sol| sol.variables.iter().map(|v| (v.row, v.column)))
            .collect();
        let values = |sol: &Solution| -> Vec<f64> {
            cells
                .iter()
                .map(|&(i, j)| sol.variable_at(i, j).map(|v| v.value).unwrap_or(0.0))
                .collect()
        };

        let mut best = solutions[0];
        for &sol in &solutions[1..] {
            if sol.total_cost < best.total_cost {
                best = sol;
            }
        }

        Comparison {
            northwest: values(solutions[0]),
            minimum_cost: values(solutions[1]),
            vogel: values(solutions[2]),
            totals: solutions.iter().map(|sol| (sol.method, sol.total_cost)).collect(),
            best_method: best.method,
            variables: cells.iter().map(|&(i, j)| variable_name(i, j)).collect(),
        }
    }
}

/// The results of all heuristics on the same balanced problem.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AllMethods {
    pub northwest: Solution,
    pub minimum_cost: Solution,
    pub vogel: Solution,
    pub comparison: Comparison,
    /// Costs of the original problem.
    pub costs: Vec<Vec<f64>>,
    /// Supplies of the original problem.
    pub supply: Vec<f64>,
    /// Demands of the original problem.
    pub demand: Vec<f64>,
    pub balancing: Balancing,
}

impl AllMethods {
    /// Return the solution of a method.
    pub fn get(&self, method: Method) -> &Solution {
        match method {
            Method::NorthwestCorner => &self.northwest,
            Method::MinimumCost => &self.minimum_cost,
            Method::Vogel => &self.vogel,
        }
    }

    /// Return the solution of the best method.
    pub fn best(&self) -> &Solution {
        self.get(self.comparison.best_method)
    }
}

/// The working state shared by the heuristics.
struct Tableau<'a> {
    problem: &'a Problem,
    allocation: Vec<Vec<f64>>,
    supply_left: Vec<f64>,
    demand_left: Vec<f64>,
    steps: Trace<Step>,
}

impl<'a> Tableau<'a> {
    /// Create the empty table and record it as first step.
    fn new(problem: &'a Problem, method: Method) -> Self {
        let mut tableau = Tableau {
            problem,
            allocation: vec![vec![0.0; problem.num_destinations()]; problem.num_origins()],
            supply_left: problem.supply.clone(),
            demand_left: problem.demand.clone(),
            steps: Trace::new(),
        };
        tableau.record(format!("Initial table - {} method", method), None, None, None);
        tableau
    }

    fn num_rows(&self) -> usize {
        self.supply_left.len()
    }

    fn num_cols(&self) -> usize {
        self.demand_left.len()
    }

    fn cost(&self, i: usize, j: usize) -> f64 {
        self.problem.costs[i][j]
    }

    fn row_exhausted(&self, i: usize) -> bool {
        self.supply_left[i] <= self.problem.tolerance
    }

    fn col_exhausted(&self, j: usize) -> bool {
        self.demand_left[j] <= self.problem.tolerance
    }

    /// Return `true` while some supply and some demand are left.
    fn has_remaining(&self) -> bool {
        let tol = self.problem.tolerance;
        self.supply_left.iter().any(|&s| s > tol) && self.demand_left.iter().any(|&d| d > tol)
    }

    /// Assign as much as possible to cell `(i, j)` and record the step.
    ///
    /// `note` is appended to the step description.
    fn assign(&mut self, i: usize, j: usize, note: &str, penalties: Option<Penalties>) -> f64 {
        let amount = self.supply_left[i].min(self.demand_left[j]);
        self.allocation[i][j] = amount;
        self.supply_left[i] -= amount;
        self.demand_left[j] -= amount;

        let description = format!(
            "Assign {} units to cell ({}, {}){}",
            fmt_amount(amount),
            i + 1,
            j + 1,
            note
        );
        self.record(description, Some((i, j)), Some(amount), penalties);
        amount
    }

    fn record(
        &mut self,
        description: String,
        cell: Option<(usize, usize)>,
        amount: Option<f64>,
        penalties: Option<Penalties>,
    ) {
        let tol = self.problem.tolerance;
        let step = Step {
            iteration: self.steps.len(),
            description,
            allocation: self.allocation.clone(),
            supply_left: self.supply_left.clone(),
            demand_left: self.demand_left.clone(),
            total_cost: round(self.cost_so_far()),
            cell,
            amount: amount.map(round),
            is_complete: self.supply_left.iter().all(|&s| s <= tol) && self.demand_left.iter().all(|&d| d <= tol),
            penalties,
        };
        self.steps.push(step);
    }

    fn cost_so_far(&self) -> f64 {
        self.allocation
            .iter()
            .zip(&self.problem.costs)
            .map(|(x, c)| x.iter().zip(c).map(|(x, c)| x * c).sum::<f64>())
            .sum()
    }

    fn into_solution(self, method: Method, balancing: Balancing) -> Solution {
        let tol = self.problem.tolerance;
        let mut variables = vec![];
        for (i, row) in self.allocation.iter().enumerate() {
            for (j, &x) in row.iter().enumerate() {
                if x > tol {
                    let c = self.cost(i, j);
                    variables.push(Variable {
                        name: variable_name(i, j),
                        row: i,
                        column: j,
                        value: round(x),
                        cost: round(c),
                        total: round(x * c),
                    });
                }
            }
        }

        Solution {
            method,
            total_cost: round(self.cost_so_far()),
            allocation: self.allocation,
            variables,
            iterations: self.steps,
            costs: self.problem.costs.clone(),
            supply: self.problem.supply.clone(),
            demand: self.problem.demand.clone(),
            balancing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{solve, solve_all, Method, Padding, Problem, DEFAULT_TOLERANCE};
    use crate::error::ErrorKind;

    fn small() -> (Vec<Vec<f64>>, Vec<f64>, Vec<f64>) {
        (
            vec![vec![4.0, 8.0, 8.0], vec![16.0, 24.0, 16.0]],
            vec![120.0, 130.0],
            vec![80.0, 90.0, 80.0],
        )
    }

    #[test]
    fn test_malformed() {
        let err = Problem::new(vec![], vec![1.0], vec![1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);

        let err = Problem::new(vec![vec![1.0, 2.0]], vec![1.0, 2.0], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err.to_string(), "malformed input: the cost matrix has 1 rows but there are 2 origins");

        let err = Problem::new(vec![vec![1.0, 2.0], vec![1.0]], vec![1.0, 2.0], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed input: row 2 of the cost matrix has 1 columns but there are 2 destinations"
        );

        let err = Problem::new(vec![vec![f64::NAN]], vec![1.0], vec![1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);

        let err = Problem::new(vec![vec![1.0]], vec![-1.0], vec![1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_method_names() {
        assert_eq!("northwest".parse::<Method>().unwrap(), Method::NorthwestCorner);
        assert_eq!("minimum_cost".parse::<Method>().unwrap(), Method::MinimumCost);
        assert_eq!("vogel".parse::<Method>().unwrap(), Method::Vogel);
        assert_eq!("simplex".parse::<Method>().unwrap_err().kind(), ErrorKind::MalformedInput);
        assert_eq!(Method::Vogel.to_string(), "Vogel (VAM)");
    }

    #[test]
    fn test_steps() {
        let (c, s, d) = small();
        let sol = solve(c, s, d, Method::NorthwestCorner).unwrap();
        let first = &sol.iterations[0];
        assert_eq!(first.description, "Initial table - Northwest Corner method");
        assert_eq!(first.cell, None);
        assert_eq!(first.total_cost, 0.0);
        assert!(!first.is_complete);

        let second = &sol.iterations[1];
        assert_eq!(second.cell, Some((0, 0)));
        assert_eq!(second.amount, Some(80.0));
        assert_eq!(second.supply_left, vec![40.0, 130.0]);
        assert_eq!(second.demand_left, vec![0.0, 90.0, 80.0]);
        assert_eq!(second.total_cost, 320.0);

        let last = sol.iterations.last().unwrap();
        assert!(last.is_complete);
        assert_eq!(last.total_cost, sol.total_cost);
        assert!(sol.iterations.iter().all(|step| step.penalties.is_none()));
    }

    #[test]
    fn test_variables() {
        let (c, s, d) = small();
        let sol = solve(c, s, d, Method::NorthwestCorner).unwrap();
        let names: Vec<_> = sol.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["X11", "X12", "X22", "X23"]);
        let x22 = sol.variable("X22").unwrap();
        assert_eq!((x22.row, x22.column), (1, 1));
        assert_eq!(x22.value, 50.0);
        assert_eq!(x22.cost, 24.0);
        assert_eq!(x22.total, 1200.0);
        assert!(sol.variable("X21").is_none());
        assert_eq!(sol.row_sums(), vec![120.0, 130.0]);
        assert_eq!(sol.column_sums(), vec![80.0, 90.0, 80.0]);
    }

    #[test]
    fn test_comparison() {
        let (c, s, d) = small();
        let all = solve_all(c, s, d).unwrap();
        let cmp = &all.comparison;
        assert_eq!(cmp.variables, vec!["X11", "X12", "X21", "X22", "X23"]);
        assert_eq!(cmp.northwest, vec![80.0, 40.0, 0.0, 50.0, 80.0]);
        assert_eq!(cmp.minimum_cost, vec![80.0, 40.0, 0.0, 50.0, 80.0]);
        assert_eq!(cmp.vogel, vec![30.0, 90.0, 50.0, 0.0, 80.0]);
        assert_eq!(
            cmp.totals,
            vec![
                (Method::NorthwestCorner, 3120.0),
                (Method::MinimumCost, 3120.0),
                (Method::Vogel, 2920.0)
            ]
        );
        assert_eq!(cmp.best_method, Method::Vogel);
        assert_eq!(all.best().method, Method::Vogel);
        assert_eq!(all.get(Method::MinimumCost).total_cost, 3120.0);
    }

    #[test]
    fn test_best_method_ties() {
        // every feasible allocation has the same cost
        let all = solve_all(vec![vec![1.0, 1.0], vec![1.0, 1.0]], vec![5.0, 5.0], vec![4.0, 6.0]).unwrap();
        assert_eq!(all.comparison.best_method, Method::NorthwestCorner);
    }

    #[test]
    fn test_custom_tolerance() {
        let (c, s, d) = small();
        let mut problem = Problem::new(c, s, d).unwrap();
        problem.set_tolerance(1e-3).unwrap();
        let sol = problem.solve(Method::MinimumCost).unwrap();
        assert_eq!(sol.total_cost, 3120.0);
    }

    #[test]
    fn test_zero_tolerance() {
        let (c, s, d) = small();
        let mut problem = Problem::new(c, s, d).unwrap();
        problem.set_tolerance(0.0).unwrap();
        assert_eq!(problem.tolerance(), 0.0);
        assert!(problem.is_balanced());

        let all = problem.solve_all().unwrap();
        assert_eq!(all.balancing.padding, Padding::None);
        assert_eq!(all.northwest.allocation, vec![vec![80.0, 40.0, 0.0], vec![0.0, 50.0, 80.0]]);
        for &method in &Method::ALL {
            let sol = all.get(method);
            assert!(sol.iterations.len() <= 1 + 2 + 3, "{} took {} steps", method, sol.iterations.len());
            assert!(sol.iterations.last().unwrap().is_complete);
            assert_eq!(sol.row_sums(), vec![120.0, 130.0]);
            assert_eq!(sol.column_sums(), vec![80.0, 90.0, 80.0]);
        }
    }

    #[test]
    fn test_invalid_tolerance() {
        let (c, s, d) = small();
        let mut problem = Problem::new(c, s, d).unwrap();
        for &tol in &[-1e-9, f64::NAN, f64::INFINITY] {
            let err = problem.set_tolerance(tol).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput);
        }
        assert_eq!(problem.tolerance(), DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_many_lines_variable_names() {
        // row 1 ships to column 11 and row 11 to column 1, all others stay on the diagonal
        let n = 11;
        let costs: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let cheap = if i == 0 || i == n - 1 { i + j == n - 1 } else { i == j };
                        if cheap {
                            1.0
                        } else {
                            5.0
                        }
                    })
                    .collect()
            })
            .collect();
        let all = solve_all(costs, vec![1.0; n], vec![1.0; n]).unwrap();

        let sol = &all.minimum_cost;
        assert_eq!(sol.total_cost, 11.0);
        assert_eq!(sol.variable_at(0, 10).unwrap().name, "X1_11");
        assert_eq!(sol.variable_at(10, 0).unwrap().name, "X11_1");
        assert_eq!(sol.variable_at(1, 1).unwrap().name, "X22");
        assert!(sol.variable("X1_11").is_some());

        let cmp = &all.comparison;
        let names: std::collections::BTreeSet<_> = cmp.variables.iter().collect();
        assert_eq!(names.len(), cmp.variables.len());
        for name in &["X1_11", "X11_1"] {
            let k = cmp.variables.iter().position(|v| v == name).unwrap();
            assert_eq!(cmp.minimum_cost[k], 1.0);
        }
        assert_eq!(cmp.minimum_cost.iter().sum::<f64>(), 11.0);
        assert_eq!(cmp.northwest.iter().sum::<f64>(), 11.0);
    }
}
