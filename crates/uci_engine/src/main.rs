use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chess_core::{
    Engine, Position, SearchInfo, SearchLimits, UciCommand, apply_position, move_to_uci,
    parse_command,
};
use classical_engine::ClassicalEngine;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut engine = match parse_args(std::env::args().skip(1))? {
        Some(path) => ClassicalEngine::from_config_file(&path)
            .with_context(|| format!("loading engine profile {}", path.display()))?,
        None => ClassicalEngine::new(),
    };
    info!(engine = engine.name(), "ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut engine, stdin.lock(), stdout.lock())
}

/// Accepts `--config <file.toml>`; returns the profile path if given.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>> {
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a file path")?;
                config = Some(PathBuf::from(path));
            }
            other => bail!("unknown argument `{other}`"),
        }
    }
    Ok(config)
}

/// UCI loop. Malformed input is logged and ignored; only I/O errors end it early.
fn run(engine: &mut dyn Engine, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut pos = Position::startpos();

    for line in input.lines() {
        let line = line.context("reading command")?;
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "ignoring command");
                continue;
            }
        };

        match cmd {
            UciCommand::Uci => {
                writeln!(out, "id name {}", engine.name())?;
                writeln!(out, "id author {}", engine.author())?;
                writeln!(out, "uciok")?;
            }
            UciCommand::IsReady => writeln!(out, "readyok")?,
            UciCommand::NewGame => {
                engine.new_game();
                pos = Position::startpos();
            }
            UciCommand::Position(setup) => {
                if let Err(e) = apply_position(&mut pos, &setup) {
                    warn!(error = %e, fen = %pos.fen(), "position setup stopped early");
                }
            }
            UciCommand::Go(params) => {
                let limits = SearchLimits::from_go(&params, pos.side_to_move());
                let mut written: io::Result<()> = Ok(());
                let result = engine.search(&mut pos, &limits, &mut |info: &SearchInfo| {
                    if written.is_ok() {
                        written = writeln!(out, "info depth {} score cp {}", info.depth, info.score)
                            .and_then(|()| out.flush());
                    }
                });
                written?;

                match result.best_move {
                    Some(mv) => writeln!(out, "bestmove {}", move_to_uci(&pos, mv))?,
                    None => writeln!(out, "bestmove 0000")?,
                }
            }
            UciCommand::Quit => break,
        }
        out.flush()?;
    }
    Ok(())
}
