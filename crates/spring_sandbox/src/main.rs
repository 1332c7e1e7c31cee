//! Spring Sandbox
//!
//! Runs a scene file headlessly: builds the physics world and interaction
//! components, plays the scripted input timeline and reports what happened.
//!
//! Run with: cargo run -p spring_sandbox -- --scene crates/spring_sandbox/scenes/demo.toml

mod config;
mod sandbox;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Scene;
use crate::sandbox::{Report, Sandbox};

#[derive(Parser, Debug)]
#[command(about = "Headless runner for Spring interaction scenes", version)]
struct Args {
    /// Scene file to run
    #[arg(long, default_value = "crates/spring_sandbox/scenes/demo.toml")]
    scene: PathBuf,

    /// Physics steps to run, overriding the scene
    #[arg(long)]
    steps: Option<u64>,

    /// Path to write the run report as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let scene = Scene::load(&args.scene)?;
    let steps = args.steps.unwrap_or(scene.steps);

    let report = Sandbox::new(scene)?.run(steps);
    print_summary(&report);

    if let Some(path) = &args.report {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &report)?;
        log::info!("Wrote report to {}", path.display());
    }
    Ok(())
}

fn print_summary(report: &Report) {
    log::info!(
        "Ran {} steps: {} events, {} ray casts ({} cached), {} feed renders",
        report.steps,
        report.events.len(),
        report.ray_casts,
        report.cache_hits,
        report.feeds_rendered
    );
    for event in &report.events {
        log::info!(
            "  [{:>4}] {:<10} {:<12} {}",
            event.step,
            event.kind,
            event.object,
            event.detail
        );
    }
    for (action, text) in &report.visible_prompts {
        log::info!("  prompt {action}: {}", text.as_deref().unwrap_or("-"));
    }
}
