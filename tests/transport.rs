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

use rs_orsteps::transport::{self, Method, Padding, Problem, Solution};
use rs_orsteps::{ErrorKind, Outcome};

fn basic() -> Problem {
    Problem::new(
        vec![vec![8.0, 6.0, 10.0], vec![9.0, 12.0, 13.0], vec![14.0, 9.0, 16.0]],
        vec![150.0, 80.0, 70.0],
        vec![100.0, 120.0, 80.0],
    )
    .unwrap()
}

fn balanced_4x4() -> Problem {
    Problem::new(
        vec![
            vec![5.0, 2.0, 7.0, 3.0],
            vec![3.0, 6.0, 6.0, 1.0],
            vec![6.0, 1.0, 2.0, 4.0],
            vec![4.0, 3.0, 6.0, 6.0],
        ],
        vec![80.0, 30.0, 60.0, 45.0],
        vec![70.0, 40.0, 70.0, 35.0],
    )
    .unwrap()
}

fn excess_supply() -> Problem {
    Problem::new(
        vec![vec![7.0, 8.0, 5.0], vec![6.0, 9.0, 11.0], vec![10.0, 7.0, 8.0]],
        vec![150.0, 120.0, 80.0],
        vec![100.0, 100.0, 100.0],
    )
    .unwrap()
}

fn excess_demand() -> Problem {
    Problem::new(
        vec![vec![5.0, 3.0, 6.0, 4.0], vec![7.0, 9.0, 8.0, 5.0]],
        vec![100.0, 100.0],
        vec![60.0, 70.0, 50.0, 60.0],
    )
    .unwrap()
}

fn check_feasible(sol: &Solution) {
    for (sum, s) in sol.row_sums().iter().zip(&sol.supply) {
        assert!((sum - s).abs() < 1e-9, "row sum {} != supply {}", sum, s);
    }
    for (sum, d) in sol.column_sums().iter().zip(&sol.demand) {
        assert!((sum - d).abs() < 1e-9, "column sum {} != demand {}", sum, d);
    }
    assert!(sol.allocation.iter().flatten().all(|&x| x >= 0.0));
    assert!(sol.iterations.last().unwrap().is_complete);
    assert!(sol.iterations.len() <= 1 + sol.supply.len() + sol.demand.len());
}

#[test]
fn test_northwest_scenario() {
    let sol = transport::solve(
        vec![vec![4.0, 8.0, 8.0], vec![16.0, 24.0, 16.0]],
        vec![120.0, 130.0],
        vec![80.0, 90.0, 80.0],
        Method::NorthwestCorner,
    )
    .unwrap();
    assert_eq!(sol.allocation, vec![vec![80.0, 40.0, 0.0], vec![0.0, 50.0, 80.0]]);
    assert_eq!(sol.total_cost, 3120.0);
    assert_eq!(sol.iterations.len(), 5);
    assert!(sol.balancing.was_balanced);
    check_feasible(&sol);
}

#[test]
fn test_basic_3x3() {
    let all = basic().solve_all().unwrap();
    assert_eq!(all.northwest.total_cost, 3190.0);
    assert_eq!(all.minimum_cost.total_cost, 2840.0);
    assert_eq!(all.vogel.total_cost, 2610.0);
    assert_eq!(all.comparison.best_method, Method::Vogel);

    assert_eq!(
        all.northwest.allocation,
        vec![vec![100.0, 50.0, 0.0], vec![0.0, 70.0, 10.0], vec![0.0, 0.0, 70.0]]
    );
    assert_eq!(
        all.vogel.allocation,
        vec![vec![20.0, 50.0, 80.0], vec![80.0, 0.0, 0.0], vec![0.0, 70.0, 0.0]]
    );
    for method in &Method::ALL {
        check_feasible(all.get(*method));
    }
}

#[test]
fn test_balanced_4x4() {
    let p = balanced_4x4();
    let totals: Vec<_> = Method::ALL.iter().map(|&m| p.solve(m).unwrap().total_cost).collect();
    assert_eq!(totals, vec![940.0, 780.0, 620.0]);

    let vogel = p.solve(Method::Vogel).unwrap();
    assert_eq!(vogel.iterations.len(), 8);
    check_feasible(&vogel);
}

#[test]
fn test_excess_supply() {
    let all = excess_supply().solve_all().unwrap();
    assert_eq!(all.balancing.padding, Padding::DummyColumn);
    assert_eq!(all.balancing.difference, 50.0);
    assert_eq!(all.balancing.original_dimensions, (3, 3));

    // the solutions refer to the balanced problem, the result keeps the original
    assert_eq!(all.northwest.demand, vec![100.0, 100.0, 100.0, 50.0]);
    assert_eq!(all.demand, vec![100.0, 100.0, 100.0]);

    assert_eq!(all.northwest.total_cost, 2560.0);
    assert_eq!(all.minimum_cost.total_cost, 1840.0);
    assert_eq!(all.vogel.total_cost, 1890.0);
    assert_eq!(all.comparison.best_method, Method::MinimumCost);
    assert!(all.minimum_cost.variable("X14").is_some());
    for method in &Method::ALL {
        check_feasible(all.get(*method));
    }
}

#[test]
fn test_excess_demand() {
    let all = excess_demand().solve_all().unwrap();
    assert_eq!(all.balancing.padding, Padding::DummyRow);
    assert_eq!(all.balancing.difference, 40.0);
    assert_eq!(all.vogel.supply, vec![100.0, 100.0, 40.0]);

    assert_eq!(all.northwest.total_cost, 1190.0);
    assert_eq!(all.minimum_cost.total_cost, 1020.0);
    assert_eq!(all.vogel.total_cost, 950.0);
    assert_eq!(all.best().method, Method::Vogel);

    // the dummy origin only serves at zero cost
    let dummy: f64 = all.vogel.variables.iter().filter(|v| v.row == 2).map(|v| v.total).sum();
    assert_eq!(dummy, 0.0);
    for method in &Method::ALL {
        check_feasible(all.get(*method));
    }
}

#[test]
fn test_comparison_columns() {
    let all = basic().solve_all().unwrap();
    let cmp = &all.comparison;
    let mut sorted = cmp.variables.clone();
    sorted.sort();
    assert_eq!(cmp.variables, sorted);
    assert_eq!(cmp.northwest.len(), cmp.variables.len());
    assert_eq!(cmp.minimum_cost.len(), cmp.variables.len());
    assert_eq!(cmp.vogel.len(), cmp.variables.len());
    for sol in &[&all.northwest, &all.minimum_cost, &all.vogel] {
        for v in &sol.variables {
            assert!(cmp.variables.contains(&v.name));
        }
    }
}

#[test]
fn test_determinism() {
    let p = balanced_4x4();
    for &method in &Method::ALL {
        assert_eq!(p.solve(method).unwrap(), p.solve(method).unwrap());
    }
}

#[test]
fn test_outcome() {
    let outcome: Outcome<_> = transport::solve(vec![], vec![], vec![], Method::Vogel).into();
    assert!(!outcome.is_success());
    assert_eq!(outcome.kind(), Some(ErrorKind::MalformedInput));

    let outcome: Outcome<_> = basic().solve(Method::Vogel).into();
    assert!(outcome.is_success());
    assert_eq!(outcome.success().map(|sol| sol.total_cost), Some(2610.0));
}

#[test]
fn test_zero_problem() {
    // nothing to ship, only the initial table is recorded
    let sol = transport::solve(vec![vec![1.0, 2.0]], vec![0.0], vec![0.0, 0.0], Method::Vogel).unwrap();
    assert_eq!(sol.iterations.len(), 1);
    assert!(sol.iterations[0].is_complete);
    assert!(sol.variables.is_empty());
    assert_eq!(sol.total_cost, 0.0);
}

#[cfg(feature = "serialize")]
#[test]
fn test_serialize() {
    let sol = basic().solve(Method::Vogel).unwrap();
    let json = serde_json::to_string(&sol).unwrap();
    let back: Solution = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sol);
}
