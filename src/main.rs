//! ragecalc - combat statistics calculator

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ragecalc::config::{self, BaseConfig};
use ragecalc::session::{Command, Session, DEFAULT_HIT_COUNT};
use ragecalc::{Modifier, ModifierState};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Attack and damage calculator for a raging melee build
#[derive(Parser, Debug)]
#[command(name = "ragecalc", version, about)]
struct Args {
    /// Configuration file (JSON, or TOML by extension).
    /// Defaults to configuration.json next to the executable, then the bundled stats.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Active modifier (can be specified multiple times):
    /// two-handed, medium-size, inspire-courage, haste, raging, power-attack, flanking.
    /// Every modifier starts off; pass `-m two-handed` for a two-handed grip.
    #[arg(short, long = "modifier")]
    modifiers: Vec<Modifier>,

    /// Number of attacks that land (clamped to the attacks available)
    #[arg(long, default_value_t = DEFAULT_HIT_COUNT)]
    hits: u32,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Read commands from stdin and re-render after each one
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only calculator output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ragecalc=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let config_path = args.config.clone().or_else(config::locate_default);
    let config = BaseConfig::load(config_path.as_deref()).context("Failed to load configuration")?;

    let modifiers: ModifierState = args.modifiers.iter().copied().collect();
    let mut session = Session::new(config, modifiers, args.hits);
    if session.hit_count() != args.hits {
        warn!(
            "Hit count {} exceeds the {} attacks available, using {}",
            args.hits,
            session.max_hits(),
            session.hit_count()
        );
    }

    if args.interactive {
        run_interactive(&mut session)
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&session.evaluate())?);
        Ok(())
    } else {
        println!("{}", session.readout());
        Ok(())
    }
}

fn run_interactive(session: &mut Session) -> Result<()> {
    info!("Starting interactive session");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", session.readout())?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(&mut stdout)?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Event(event)) => writeln!(stdout, "{}", session.dispatch(event))?,
            Ok(Command::Show) => writeln!(stdout, "{}", session.readout())?,
            Ok(Command::Status) => writeln!(
                stdout,
                "Modifiers: {}\nHits: {}/{}",
                session.modifiers(),
                session.hit_count(),
                session.max_hits()
            )?,
            Ok(Command::Help) => print_help(&mut stdout)?,
            Ok(Command::Quit) => break,
            Err(e) => writeln!(stdout, "Error: {} (type 'help' for commands)", e)?,
        }

        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()
}

fn print_help(stdout: &mut io::Stdout) -> io::Result<()> {
    writeln!(stdout, "Commands:")?;
    writeln!(stdout, "  <modifier>             toggle a modifier")?;
    writeln!(stdout, "  toggle <modifier>      toggle a modifier")?;
    writeln!(stdout, "  <modifier> on|off      switch a modifier on or off")?;
    writeln!(stdout, "  set <modifier> on|off  switch a modifier on or off")?;
    writeln!(stdout, "  hits <n>               set the number of attacks that land")?;
    writeln!(stdout, "  show                   print the current numbers")?;
    writeln!(stdout, "  status                 print active modifiers and hit count")?;
    writeln!(stdout, "  quit                   leave")?;
    let names: Vec<&str> = Modifier::all().iter().map(|m| m.name()).collect();
    writeln!(stdout, "Modifiers: {}", names.join(", "))
}
