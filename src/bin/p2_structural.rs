// Pattern 2: Structural Patterns - Composite
// Usage: p2_structural [config.toml]

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use design_patterns::config::DemoConfig;
use design_patterns::{demo, logging};

fn main() -> Result<()> {
    logging::init("info");
    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(&path).with_context(|| format!("Loading {path}"))?,
        None => DemoConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", "Pattern 2: Structural Patterns".bold())?;
    writeln!(out, "===============================\n")?;

    writeln!(out, "{}", "=== Composite Pattern ===".cyan())?;
    let chart = demo::run_composite(&config, &mut out).context("Running composite demo")?;
    writeln!(out, "\nHeadcount: {}, depth: {}", chart.headcount(), chart.depth())?;

    Ok(())
}
