//! Pulse Grid headless driver
//!
//! Stands in for the window/input layer: reads one intent per line from
//! stdin, runs the simulation and prints a JSON snapshot after every frame.
//!
//! Usage: `pulse-grid [seed] [tuning.json]`
//!
//! Commands: `up` `down` `left` `right` `place` `reset`, `tick [dt] [count]`,
//! `show`, `quit`.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pulse_grid::sim::{Direction, GameState, Intent, TickInput, tick};
use pulse_grid::{Snapshot, Tuning};

/// Default frame length when `tick` is given no duration (60 Hz)
const DEFAULT_DT: f32 = 1.0 / 60.0;

/// One parsed driver command
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Move(Direction),
    Place,
    Reset,
    Tick { dt: f32, count: u32 },
    Show,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next()?.to_lowercase();
    let command = match cmd.as_str() {
        "up" | "w" => Command::Move(Direction::Up),
        "down" | "s" => Command::Move(Direction::Down),
        "left" | "a" => Command::Move(Direction::Left),
        "right" | "d" => Command::Move(Direction::Right),
        "place" | "space" => Command::Place,
        "reset" | "r" => Command::Reset,
        "tick" | "t" => {
            let dt = match parts.next() {
                Some(s) => s.parse().ok().filter(|dt: &f32| dt.is_finite() && *dt >= 0.0)?,
                None => DEFAULT_DT,
            };
            let count = match parts.next() {
                Some(s) => s.parse().ok()?,
                None => 1,
            };
            Command::Tick { dt, count }
        }
        "show" => Command::Show,
        "quit" | "exit" | "esc" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// The simulation intent a command queues, if any
fn intent_for(command: &Command) -> Option<Intent> {
    match *command {
        Command::Move(dir) => Some(Intent::Move(dir)),
        Command::Place => Some(Intent::PlacePulse),
        Command::Reset => Some(Intent::Reset),
        Command::Tick { .. } | Command::Show | Command::Quit => None,
    }
}

/// Seed from the system clock when none is supplied
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => clock_seed(),
    };
    let tuning = match args.next() {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    log::info!("Pulse Grid (headless) starting...");
    let mut state = GameState::with_tuning(seed, tuning)?;

    // Intents queue up in arrival order until the next tick, like key
    // presses between frames
    let mut pending = TickInput::default();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = parse_command(&line) else {
            log::warn!("Unknown command: {}", line.trim());
            continue;
        };

        if let Some(intent) = intent_for(&command) {
            pending.push(intent);
            continue;
        }

        match command {
            Command::Tick { dt, count } => {
                for _ in 0..count {
                    let input = std::mem::take(&mut pending);
                    tick(&mut state, &input, dt);
                    writeln!(out, "{}", Snapshot::capture(&state).to_json()?)?;
                }
            }
            Command::Show => writeln!(out, "{}", Snapshot::capture(&state).to_json()?)?,
            Command::Quit => break,
            Command::Move(_) | Command::Place | Command::Reset => {}
        }
    }

    log::info!(
        "Exiting after {} frames, outcome {:?}",
        state.frames(),
        state.outcome()
    );
    Ok(())
}
