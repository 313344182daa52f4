// Pattern 1: Creational Patterns - Prototype, Factory Method, Singleton
// Usage: p1_creational [config.toml]

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use design_patterns::config::DemoConfig;
use design_patterns::{demo, logging};

fn load_config() -> Result<DemoConfig> {
    match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(&path).with_context(|| format!("Loading {path}")),
        None => Ok(DemoConfig::default()),
    }
}

fn main() -> Result<()> {
    logging::init("info");
    let config = load_config()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", "Pattern 1: Creational Patterns".bold())?;
    writeln!(out, "===============================\n")?;

    writeln!(out, "{}", "=== Prototype Pattern ===".cyan())?;
    demo::run_prototype(&config, &mut out).context("Running prototype demo")?;
    writeln!(out)?;

    writeln!(out, "{}", "=== Factory Method Pattern ===".cyan())?;
    demo::run_factory(&config, &mut out).context("Running factory demo")?;
    writeln!(out)?;

    writeln!(out, "{}", "=== Singleton Pattern ===".cyan())?;
    demo::run_singleton(&mut out).context("Running singleton demo")?;

    Ok(())
}
