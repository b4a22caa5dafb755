mod renderer;

use std::io::{Write, stdout};

use anyhow::{Context, Result, anyhow, bail};
use scrollspy_core::{ActiveSectionResolver, ResolverConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const USAGE: &str = "Usage: scrollspy <sections> [--threshold T] [--sweep [--step S]]";

#[derive(Debug, Clone, PartialEq)]
struct Args {
    sections: usize,
    threshold: Option<f64>,
    sweep: bool,
    step: f64,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut iter = args.iter();
    let sections = iter
        .next()
        .ok_or_else(|| anyhow!(USAGE))?
        .parse::<usize>()
        .context("section count must be a non-negative integer")?;

    let mut parsed = Args {
        sections,
        threshold: None,
        sweep: false,
        step: 0.001,
    };
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--sweep" => parsed.sweep = true,
            "--threshold" => {
                let value = iter.next().ok_or_else(|| anyhow!("--threshold needs a value"))?;
                parsed.threshold = Some(value.parse().context("invalid --threshold")?);
            }
            "--step" => {
                let value = iter.next().ok_or_else(|| anyhow!("--step needs a value"))?;
                parsed.step = value.parse().context("invalid --step")?;
            }
            other => bail!("unknown argument: {other}\n{USAGE}"),
        }
    }
    if !(parsed.step > 0.0 && parsed.step <= 1.0) {
        bail!("--step must be in (0, 1]");
    }
    Ok(parsed)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(env_filter),
        )
        .init();
}

/// Sweep progress from 0 to 1 and write every change as a JSON line.
fn run_sweep(resolver: &mut ActiveSectionResolver, step: f64) -> Result<()> {
    let steps = (1.0 / step).ceil() as u64;
    let mut out = stdout().lock();
    for i in 0..=steps {
        let progress = (i as f64 * step).min(1.0);
        if let Some(change) = resolver.update(progress) {
            writeln!(out, "{}", serde_json::to_string(&change)?)?;
        }
    }
    info!(changes = resolver.generation(), "sweep finished");
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;

    let mut config = ResolverConfig::default();
    if let Some(threshold) = args.threshold {
        config = config.with_threshold(threshold);
    }
    let mut resolver = ActiveSectionResolver::with_config(args.sections, config)?;

    if args.sweep {
        init_tracing();
        return run_sweep(&mut resolver, args.step);
    }

    renderer::render_tui(&mut resolver)
}
