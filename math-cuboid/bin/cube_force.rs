//! Cuboid gravitational force calculator
//!
//! Computes the attraction between two axis-aligned cubes. Identical
//! touching cubes go through the Prideaux octant recursion; every other
//! configuration goes through direct 6D integration.
//!
//! Usage:
//!   cargo run --release --bin cube-force -- --order 6
//!   cargo run --release --bin cube-force -- --size 1.0 --size2 2.0 --gap 0.5

use clap::Parser;
use math_gravity_cuboid::{TouchingForce, general_cube_force, touching_cube_force};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "cube-force")]
#[command(about = "Gravitational force between two axis-aligned cubes", long_about = None)]
struct Args {
    /// Gauss-Legendre quadrature order per dimension
    #[arg(short = 'n', long, default_value_t = 6)]
    order: usize,

    /// Edge length of the first cube
    #[arg(long, default_value_t = 1.0)]
    size: f64,

    /// Edge length of the second cube (defaults to the first)
    #[arg(long)]
    size2: Option<f64>,

    /// Gap between the facing cube surfaces
    #[arg(long, default_value_t = 0.0)]
    gap: f64,

    /// Write the result as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of parallel threads (default: all cores)
    #[arg(short = 't', long)]
    threads: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ForceReport {
    method: &'static str,
    order: usize,
    size1: f64,
    size2: f64,
    gap: f64,
    force: f64,
    normalized: Option<f64>,
    breakdown: Option<TouchingForce>,
    seconds: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    #[cfg(feature = "native")]
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
        println!("Using {} threads\n", threads);
    }
    #[cfg(not(feature = "native"))]
    if args.threads.is_some() {
        println!("Built without the `native` feature; running sequentially\n");
    }

    let size2 = args.size2.unwrap_or(args.size);

    let total_points = (args.order as u64).pow(6);
    println!(
        "order N = {} ({} kernel points per cube pair)",
        args.order, total_points
    );
    if args.order > 6 {
        println!("note: cost grows as N^6, orders above 6 get slow quickly");
    }

    // Identical touching cubes have a singular direct integral; route them
    // through the recursion exactly when its precondition holds.
    let use_prideaux = args.gap == 0.0 && size2 == args.size;

    let start = Instant::now();
    let report = if use_prideaux {
        let result = touching_cube_force(args.order, args.size)?;
        let seconds = start.elapsed().as_secs_f64();
        print_touching(&result, args.size);
        ForceReport {
            method: "prideaux",
            order: args.order,
            size1: args.size,
            size2,
            gap: args.gap,
            force: result.force,
            normalized: Some(result.normalized(args.size)),
            breakdown: Some(result),
            seconds,
        }
    } else {
        let force = general_cube_force(args.order, args.size, size2, args.gap)?;
        let seconds = start.elapsed().as_secs_f64();
        println!("\n=== Direct integration ===");
        println!("F = {:.10}", force);
        ForceReport {
            method: "direct",
            order: args.order,
            size1: args.size,
            size2,
            gap: args.gap,
            force,
            normalized: None,
            breakdown: None,
            seconds,
        }
    };

    println!("\ncomputed in {:.2} s", report.seconds);

    if let Some(path) = &args.output {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn print_touching(result: &TouchingForce, size: f64) {
    println!("\n=== Prideaux recursion ===");
    println!("S_F (face basis):   {:.10}", result.s_face);
    println!("S_E (edge basis):   {:.10}", result.s_edge);
    println!("S_V (vertex basis): {:.10}", result.s_vertex);
    println!("V (vertex force):   {:.10}", result.vertex_force);
    println!("E (edge force):     {:.10}", result.edge_force);
    println!(
        "unique separated pairs integrated: {}",
        result.unique_pairs
    );
    println!("\nF       = {:.10}", result.force);
    println!(
        "F / L^4 = {:.10} (published unit-cube value: ~0.9259812606)",
        result.normalized(size)
    );
}
