//! Command script parsing and replay.

use std::io::Write;

use dockframe_common::Event;
use dockframe_layout::{FrameCommand, WorkspaceManager};
use serde::Serialize;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;

/// Parse a script given either as a JSON array of commands or as one
/// command per line. Blank lines and `#` comments are skipped in the
/// line form.
pub fn parse_script(text: &str) -> Result<Vec<FrameCommand>, serde_json::Error> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text);
    }
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum OutputLine<'a> {
    Result {
        command: &'static str,
        value: dockframe_layout::CommandResult,
    },
    Error {
        command: &'static str,
        message: String,
    },
    Event {
        name: &'static str,
        event: &'a Event,
    },
}

/// Outcome of a replay.
#[derive(Debug, Default, PartialEq)]
pub struct ReplaySummary {
    pub executed: usize,
    pub failed: usize,
}

/// Run every command, writing each result or error followed by the
/// domain events it raised, one JSON object per line.
pub async fn replay(
    manager: &mut WorkspaceManager,
    commands: Vec<FrameCommand>,
    fail_fast: bool,
    out: &mut impl Write,
) -> std::io::Result<ReplaySummary> {
    let mut events = manager.subscribe();
    let mut summary = ReplaySummary::default();

    for command in commands {
        let name = command.name();
        summary.executed += 1;
        let line = match manager.execute(command).await {
            Ok(value) => OutputLine::Result {
                command: name,
                value,
            },
            Err(e) => {
                tracing::warn!(command = name, error = %e, "command failed");
                summary.failed += 1;
                OutputLine::Error {
                    command: name,
                    message: e.to_string(),
                }
            }
        };
        write_line(out, &line)?;
        drain_events(&mut events, out)?;

        if fail_fast && summary.failed > 0 {
            break;
        }
    }
    Ok(summary)
}

fn drain_events(events: &mut Receiver<Event>, out: &mut impl Write) -> std::io::Result<()> {
    loop {
        match events.try_recv() {
            Ok(event) => write_line(
                out,
                &OutputLine::Event {
                    name: event.name(),
                    event: &event,
                },
            )?,
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event output lagged");
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return Ok(()),
        }
    }
}

fn write_line(out: &mut impl Write, line: &OutputLine<'_>) -> std::io::Result<()> {
    let json = serde_json::to_string(line).map_err(std::io::Error::other)?;
    writeln!(out, "{json}")
}
