use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::time::Duration;

mod cli;
mod models;
mod services;

use cli::CommandArgs;
use models::{ResolvedProcess, SampleMatrix};
use services::{plot, resolve_processes, Sampler};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandArgs::parse();
    run(args)
}

fn run(args: CommandArgs) -> Result<()> {
    let targets = resolve_processes(&args.process);
    if targets.is_empty() {
        bail!(
            "no process named '{}' found. the name has to exactly match, \
             e.g. chrome.exe, not chrome.EXE nor Chrome.exe",
            args.process
        );
    }

    let pids: Vec<String> = targets.iter().map(|t| t.pid.to_string()).collect();
    log::info!(
        "matched {} process(es) named '{}': PID {}",
        targets.len(),
        args.process,
        pids.join(", ")
    );
    log::info!(
        "sampling {} iterations of {}s each, about {:.1}s total",
        args.iterations,
        args.interval,
        args.iterations as f64 * args.interval * targets.len() as f64
    );

    let mut sampler = Sampler::new(Duration::from_secs_f64(args.interval));
    let samples = sampler.sample(&targets, args.iterations);

    if let Some(path) = &args.json {
        let report = Report {
            process: &args.process,
            interval: args.interval,
            processes: &targets,
            samples: &samples,
        };
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("samples written to {}", path.display());
    }

    plot::render(&samples, &targets, &args.process, args.interval, &args.output)
        .with_context(|| format!("failed to render plot to {}", args.output.display()))?;
    log::info!("plot written to {}", args.output.display());

    Ok(())
}

/// JSON export of one finished run.
#[derive(Serialize)]
struct Report<'a> {
    process: &'a str,
    interval: f64,
    processes: &'a [ResolvedProcess],
    samples: &'a SampleMatrix,
}
