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

use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use rustop::opts;

use rs_orsteps::transport::{Method, Problem, Solution};

type Sample = (&'static str, Vec<Vec<f64>>, Vec<f64>, Vec<f64>);

fn samples() -> Vec<Sample> {
    vec![
        (
            "basic 3x3",
            vec![vec![8.0, 6.0, 10.0], vec![9.0, 12.0, 13.0], vec![14.0, 9.0, 16.0]],
            vec![150.0, 80.0, 70.0],
            vec![100.0, 120.0, 80.0],
        ),
        (
            "balanced 4x4",
            vec![
                vec![5.0, 2.0, 7.0, 3.0],
                vec![3.0, 6.0, 6.0, 1.0],
                vec![6.0, 1.0, 2.0, 4.0],
                vec![4.0, 3.0, 6.0, 6.0],
            ],
            vec![80.0, 30.0, 60.0, 45.0],
            vec![70.0, 40.0, 70.0, 35.0],
        ),
        (
            "small 2x3",
            vec![vec![4.0, 8.0, 8.0], vec![16.0, 24.0, 16.0]],
            vec![120.0, 130.0],
            vec![80.0, 90.0, 80.0],
        ),
        (
            "excess supply",
            vec![vec![7.0, 8.0, 5.0], vec![6.0, 9.0, 11.0], vec![10.0, 7.0, 8.0]],
            vec![150.0, 120.0, 80.0],
            vec![100.0, 100.0, 100.0],
        ),
        (
            "excess demand",
            vec![vec![5.0, 3.0, 6.0, 4.0], vec![7.0, 9.0, 8.0, 5.0]],
            vec![100.0, 100.0],
            vec![60.0, 70.0, 50.0, 60.0],
        ),
    ]
}

fn print_solution(sol: &Solution, steps: bool) {
    println!("{}", sol.method);
    if steps {
        for step in &sol.iterations {
            println!("  [{}] {} (cost so far: {})", step.iteration, step.description, step.total_cost);
        }
    }
    for row in &sol.allocation {
        let cells: Vec<_> = row.iter().map(|x| format!("{:8.2}", x)).collect();
        println!("  {}", cells.join(" "));
    }
    for v in &sol.variables {
        println!("  {} = {} (cost {}, total {})", v.name, v.value, v.cost, v.total);
    }
    println!("  total cost: {}", sol.total_cost);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (args, _) = opts! {
        synopsis "Compute initial solutions of a transportation problem.";
        opt sample:usize=1, desc:"Number of the built-in sample problem (1-5).";
        opt method:Option<String>, desc:"Only run this method (northwest, minimum_cost, vogel).";
        opt steps:bool, desc:"Print every step.";
    }
    .parse_or_exit();

    let samples = samples();
    if args.sample == 0 || args.sample > samples.len() {
        eprintln!("Unknown sample {}, choose one of 1-{}", args.sample, samples.len());
        std::process::exit(1);
    }
    let (name, costs, supply, demand) = samples[args.sample - 1].clone();
    println!("Problem: {}", name);

    let problem = match Problem::new(costs, supply, demand) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let tstart = OffsetDateTime::now_utc();
    let solutions = match args.method {
        Some(ref method) => method
            .parse::<Method>()
            .and_then(|method| problem.solve(method))
            .map(|sol| vec![sol]),
        None => problem
            .solve_all()
            .map(|all| vec![all.northwest, all.minimum_cost, all.vogel]),
    };
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());

    let solutions = match solutions {
        Ok(sols) => sols,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let balancing = &solutions[0].balancing;
    if !balancing.was_balanced {
        println!("Balanced with {:?} (difference {})", balancing.padding, balancing.difference);
    }
    for sol in &solutions {
        print_solution(sol, args.steps);
    }

    if let Some(best) = solutions
        .iter()
        .fold(None, |best: Option<&Solution>, sol| match best {
            Some(b) if b.total_cost <= sol.total_cost => Some(b),
            _ => Some(sol),
        })
    {
        println!("Best method: {} ({})", best.method, best.total_cost);
    }
}
