//! Genetic line fit CLI - Evolve a line through points loaded from a file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use genetic_line_fit::{
    compute::FitSession,
    schema::{EngineConfig, PointSet},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <points.txt> [generations] [config.json]", args[0]);
        eprintln!();
        eprintln!("Fit a straight line to a point set with a genetic search.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  points.txt   One point per line: two integers `x y`");
        eprintln!("  generations  Number of generations to run (default: 10000)");
        eprintln!("  config.json  Engine configuration (default: built-in)");
        eprintln!();
        eprintln!("Example configuration is printed with the --example flag.");
        std::process::exit(1);
    }

    let points_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10_000);

    let points = PointSet::load(&points_path).unwrap_or_else(|e| {
        eprintln!("Error loading points from {}: {}", points_path.display(), e);
        std::process::exit(1);
    });

    let config: EngineConfig = match args.get(3) {
        Some(path) => {
            let config_str = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {}", e);
                std::process::exit(1);
            });
            serde_json::from_str(&config_str).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {}", e);
                std::process::exit(1);
            })
        }
        None => EngineConfig::default(),
    };

    println!("Genetic Line Fit");
    println!("================");
    println!("Points: {}", points.len());
    println!("Population: {}", config.population_size);
    println!("Cost: {:?}", config.cost);
    println!("Generations: {}", generations);
    println!();

    let mut session = FitSession::new(config).with_points(points);
    if let Err(e) = session.start() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if generations == 0 {
        session.stop();
    }

    let start = Instant::now();
    let report_every = (generations / 10).max(1);

    while session.tick() {
        let Some(engine) = session.engine() else {
            break;
        };
        let generation = engine.generation();

        if generation % report_every == 0 {
            match engine.best() {
                Some(best) => log::info!(
                    "Generation {}/{}: best cost {:.4}, slope {:.4}",
                    generation,
                    generations,
                    best.cost,
                    best.chromosome.slope()
                ),
                None => log::info!(
                    "Generation {}/{}: no finite candidate",
                    generation,
                    generations
                ),
            }
        }

        if generation >= generations {
            session.stop();
        }
    }

    let elapsed = start.elapsed();

    println!("Result:");
    match session.snapshot().and_then(|s| s.best) {
        Some(best) => {
            let c = best.chromosome;
            println!(
                "  Line: y = {:.6} * (x - {:.4}) + {:.4}",
                c.slope(),
                c.x0(),
                c.y0()
            );
            println!(
                "  Genes: dx={:.4} dy={:.4} x0={:.4} y0={:.4}",
                c.dx(),
                c.dy(),
                c.x0(),
                c.y0()
            );
            println!("  Cost: {:.6}", best.cost);
        }
        None => println!("  No finite candidate in the final generation"),
    }
    println!(
        "Time: {:.2}s ({:.1} generations/s)",
        elapsed.as_secs_f32(),
        generations as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_config() {
    let config = EngineConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
