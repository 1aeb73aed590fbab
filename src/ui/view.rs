//! Interactive add / edit views driven by line commands on stdin.

use crate::config::TimeFormat;
use crate::core::{Coordinator, EditingSession, Phase, StopwatchState};
use crate::errors::{AppError, AppResult};
use crate::models::StopwatchRecord;
use crate::store::RecordStore;
use crate::ui::messages::{clock_line, header, info, warning};
use crate::utils::colors::colorize_phase;
use crate::utils::time::render;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Add,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    Start,
    Pause,
    Stop,
    Title(String),
    Save,
    Status,
    Help,
    Quit,
}

impl FromStr for ViewCommand {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "start" | "s" | "play" => Ok(ViewCommand::Start),
            "pause" | "p" => Ok(ViewCommand::Pause),
            "stop" | "x" | "reset" => Ok(ViewCommand::Stop),
            "title" | "t" => Ok(ViewCommand::Title(rest.to_string())),
            "save" | "w" => Ok(ViewCommand::Save),
            "status" | "st" => Ok(ViewCommand::Status),
            "help" | "h" | "?" => Ok(ViewCommand::Help),
            "quit" | "q" | "back" => Ok(ViewCommand::Quit),
            _ => Err(AppError::InvalidCommand(format!(
                "'{}' (type 'help' for the list of commands)",
                line
            ))),
        }
    }
}

#[derive(Debug)]
pub enum ViewOutcome {
    Saved(StopwatchRecord),
    Abandoned,
}

const HELP: &str = "\
  start | s          start or resume the stopwatch
  pause | p          pause the stopwatch
  stop  | x          reset time and title
  title | t <TEXT>   set the title
  save  | w          save and leave
  status             show the current state
  quit  | q          leave without saving";

fn phase_label(state: &StopwatchState) -> String {
    let label = match state.phase() {
        Phase::Idle => "idle",
        Phase::Running => "running",
        Phase::Paused => "paused",
    };
    colorize_phase(label, state.running, state.dirty)
}

fn draw(state: &StopwatchState, fmt: TimeFormat) {
    clock_line(format!(
        "{}  [{}]  {}",
        render(state.elapsed_millis, fmt),
        phase_label(state),
        state.title
    ));
}

/// Run one view until the user saves or leaves.
///
/// The session is consumed: whatever way this returns, the session is
/// dropped here and its stopwatch is reset.
pub async fn run_view<S, R>(
    mut session: EditingSession,
    coordinator: &Coordinator<S>,
    kind: ViewKind,
    fmt: TimeFormat,
    input: R,
) -> AppResult<ViewOutcome>
where
    S: RecordStore,
    R: AsyncBufRead + Unpin,
{
    match kind {
        ViewKind::Add => header("ADD CRONO"),
        ViewKind::Edit => header(format!(
            "EDIT CRONO #{}",
            session.record_id().unwrap_or_default()
        )),
    }
    info("Type 'help' for commands.");

    let mut updates = session.subscribe();
    draw(&session.snapshot(), fmt);

    let mut lines = input.lines();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut signals_ok = true;

    let outcome = loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break ViewOutcome::Abandoned;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let cmd = match line.parse::<ViewCommand>() {
                    Ok(cmd) => cmd,
                    Err(e) => {
                        println!();
                        warning(e);
                        continue;
                    }
                };

                match cmd {
                    ViewCommand::Start => session.start(),
                    ViewCommand::Pause => session.pause(),
                    ViewCommand::Stop => session.stop(),
                    ViewCommand::Title(text) => session.set_title(text),
                    ViewCommand::Status => {
                        println!();
                        draw(&session.snapshot(), fmt);
                    }
                    ViewCommand::Help => {
                        println!();
                        println!("{}", HELP);
                    }
                    ViewCommand::Quit => break ViewOutcome::Abandoned,
                    ViewCommand::Save => {
                        // the add screen only offers saving once there is paused progress
                        if kind == ViewKind::Add && !session.snapshot().dirty {
                            println!();
                            warning("Pause the stopwatch before saving.");
                            continue;
                        }
                        let record = session.save(coordinator)?;
                        break ViewOutcome::Saved(record);
                    }
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break ViewOutcome::Abandoned;
                }
                let state = updates.borrow_and_update().clone();
                draw(&state, fmt);
            }
            res = &mut ctrl_c, if signals_ok => {
                if let Err(e) = res {
                    ::log::warn!("cannot listen for Ctrl-C: {}", e);
                    signals_ok = false;
                    continue;
                }
                println!();
                warning("Interrupted.");
                break ViewOutcome::Abandoned;
            }
        }
    };

    println!();
    Ok(outcome)
}
