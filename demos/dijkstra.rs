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

use rs_orsteps::shortestpath::dijkstra;

use std::error::Error;
use std::fs;

type Sample = (&'static str, Vec<(u32, u32, f64)>, u32, Option<u32>, bool);

fn samples() -> Vec<Sample> {
    vec![
        (
            "road network",
            vec![
                (1, 2, 7.0),
                (1, 3, 9.0),
                (1, 6, 14.0),
                (2, 3, 10.0),
                (2, 4, 15.0),
                (3, 4, 11.0),
                (3, 6, 2.0),
                (4, 5, 6.0),
                (5, 6, 9.0),
            ],
            1,
            Some(5),
            false,
        ),
        (
            "telecommunication network",
            vec![
                (1, 2, 4.0),
                (1, 3, 2.0),
                (2, 3, 5.0),
                (2, 4, 10.0),
                (3, 4, 3.0),
                (3, 5, 8.0),
                (4, 5, 7.0),
                (5, 2, 1.0),
            ],
            1,
            Some(5),
            true,
        ),
        (
            "distribution network",
            vec![
                (1, 2, 5.0),
                (1, 3, 3.0),
                (2, 4, 8.0),
                (2, 5, 6.0),
                (3, 4, 4.0),
                (3, 5, 7.0),
                (4, 5, 2.0),
                (4, 6, 9.0),
                (5, 6, 5.0),
                (5, 7, 10.0),
                (6, 7, 4.0),
            ],
            1,
            Some(7),
            false,
        ),
    ]
}

/// Read an edge list with one `from to weight` triple per line.
fn read_edges(file: &str) -> Result<Vec<(u32, u32, f64)>, Box<dyn Error>> {
    let mut edges = vec![];
    for (lineno, line) in fs::read_to_string(file)?.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let toks: Vec<_> = line.split_whitespace().collect();
        if toks.len() != 3 {
            return Err(format!("line {}: expected 'from to weight'", lineno + 1).into());
        }
        edges.push((toks[0].parse::<u32>()?, toks[1].parse::<u32>()?, toks[2].parse::<f64>()?));
    }
    Ok(edges)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (args, _) = opts! {
        synopsis "Solve a shortest path problem with Dijkstra's algorithm.";
        opt sample:usize=1, desc:"Number of the built-in sample network (1-3).";
        opt start:Option<u32>, desc:"Start node.";
        opt end:Option<u32>, desc:"End node.";
        opt all:bool, desc:"Compute the distances to all nodes.";
        opt directed:bool, desc:"Treat the edges of the input file as directed.";
        param file:Option<String>, desc:"Edge list file (one 'from to weight' per line).";
    }
    .parse_or_exit();

    let (name, edges, start, end, directed) = match args.file {
        Some(ref file) => match read_edges(file) {
            Ok(edges) => {
                let first = edges.first().map(|e| e.0).unwrap_or(1);
                (file.as_str(), edges, first, None, args.directed)
            }
            Err(err) => {
                eprintln!("Error reading {}: {}", file, err);
                std::process::exit(1);
            }
        },
        None => {
            let samples = samples();
            if args.sample == 0 || args.sample > samples.len() {
                eprintln!("Unknown sample {}, choose one of 1-{}", args.sample, samples.len());
                std::process::exit(1);
            }
            samples[args.sample - 1].clone()
        }
    };
    let start = args.start.unwrap_or(start);
    let end = if args.all { None } else { args.end.or(end) };

    println!("Network: {}", name);
    println!("  number of edges: {}", edges.len());
    println!("  directed: {}", directed);

    let tstart = OffsetDateTime::now_utc();
    let sol = match dijkstra::solve_edges(edges, start, end, directed) {
        Ok(sol) => sol,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());

    for it in &sol.iterations {
        println!(
            "  [{}] settle {} at distance {}, unvisited: {:?}",
            it.iteration, it.current_node, it.current_distance, it.unvisited
        );
    }

    match sol.end {
        Some(end) => {
            let path: Vec<_> = sol.path.iter().map(|u| u.to_string()).collect();
            println!("Shortest path {} -> {}: {}", start, end, path.join(" -> "));
            if let Some(d) = sol.distance {
                println!("Distance: {}", d);
            }
        }
        None => {
            for (u, d) in &sol.distances {
                println!("  {}: {}", u, d);
            }
        }
    }
}
