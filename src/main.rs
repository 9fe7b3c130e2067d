use std::fs::File;
use std::io::{stdout, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use moth_hunt::assets::AssetProvider;
use moth_hunt::clock::MonotonicClock;
use moth_hunt::display::{TerminalInput, TerminalRenderer, TerminalSession};
use moth_hunt::game;

#[derive(Parser)]
#[command(name = "moth_hunt")]
#[command(about = "Steer a dragonfly, eat moths, dodge bats")]
struct Args {
    /// Directory holding dragonfly.txt, moth.txt, bat.txt and night_sky.txt
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Seed the random number generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write tracing output to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Assets load before the terminal switches modes so a failure prints
    // normally.
    let assets = match &args.assets {
        Some(dir) => AssetProvider::load(dir)
            .with_context(|| format!("failed to load assets from {}", dir.display()))?,
        None => AssetProvider::builtin(),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Restores the terminal when dropped, on every exit path.
    let session = TerminalSession::enter(stdout()).context("failed to set up the terminal")?;
    info!(keyboard_enhanced = session.keyboard_enhanced(), "terminal ready");

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&assets, rx, &mut rng);
    drop(session);

    let best_score = result?;
    info!(best_score, "session ended");
    Ok(())
}

fn run(assets: &AssetProvider, rx: mpsc::Receiver<Event>, rng: &mut StdRng) -> Result<u32> {
    let mut renderer =
        TerminalRenderer::for_terminal(BufWriter::new(stdout()), assets.background.clone())
            .context("failed to query terminal size")?;
    let mut input = TerminalInput::new(rx);
    let clock = MonotonicClock::new();

    let best_score = game::run(&mut input, &mut renderer, &clock, assets, rng)?;
    Ok(best_score)
}
