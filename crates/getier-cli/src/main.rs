//! Headless demo driver for the Getier creature engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "getier",
    about = "Getier — a behavior engine for autonomous desktop creatures",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the creature simulation headless for a number of ticks
    Simulate {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "100")]
        ticks: u64,

        /// Seconds of simulated time per tick
        #[arg(long, default_value = "0.1")]
        dt: f64,

        /// World width in pixels
        #[arg(long, default_value = "800.0")]
        width: f64,

        /// World height in pixels
        #[arg(long, default_value = "600.0")]
        height: f64,

        /// Number of walking creatures (movement + gravity + bounce)
        #[arg(long, default_value = "3")]
        walkers: u32,

        /// Number of wall-crawling creatures (movement + wall crawler)
        #[arg(long, default_value = "1")]
        crawlers: u32,

        /// RNG seed for deterministic creature placement
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Print every state transition as it happens
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the boundary sentinel layout for given world bounds
    Layout {
        /// World width in pixels
        #[arg(long, default_value = "800.0")]
        width: f64,

        /// World height in pixels
        #[arg(long, default_value = "600.0")]
        height: f64,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            ticks,
            dt,
            width,
            height,
            walkers,
            crawlers,
            seed,
            verbose,
        } => commands::simulate::run(ticks, dt, width, height, walkers, crawlers, seed, verbose),
        Commands::Layout { width, height } => commands::layout::run(width, height),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
