//! Action execution.
//!
//! Kept apart from `main` so it can be driven with in-memory streams.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;
use commit_stats::{from_bytes, optional_from_bytes, optional_to_bytes, to_bytes, CommitSnapshot};
use tracing::debug;

use crate::format::{format_hex, format_snapshot};
use crate::parse::{parse_hex, CliAction, SnapshotSource};

/// Run `action`, reading from `stdin` and writing to `stdout` when no file
/// is named.
pub fn execute(
    action: CliAction,
    stdin: &mut dyn Read,
    stdout: &mut dyn Write,
) -> anyhow::Result<()> {
    match action {
        CliAction::Encode {
            source,
            optional,
            output,
            hex,
        } => {
            let snapshot = load_snapshot(source)?;
            let bytes = match (&snapshot, optional) {
                (Some(snapshot), false) => to_bytes(snapshot),
                (snapshot, _) => optional_to_bytes(snapshot.as_ref()),
            };
            debug!(len = bytes.len(), optional, "encoded snapshot");

            let payload = if hex {
                let mut text = format_hex(&bytes);
                text.push('\n');
                text.into_bytes()
            } else {
                bytes
            };
            match output {
                Some(path) => fs::write(&path, payload)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => stdout.write_all(&payload)?,
            }
        }
        CliAction::Decode {
            input,
            optional,
            hex,
            pretty,
        } => {
            let raw = match input {
                Some(path) => {
                    fs::read(&path).with_context(|| format!("reading {}", path.display()))?
                }
                None => {
                    let mut buf = Vec::new();
                    stdin.read_to_end(&mut buf).context("reading stdin")?;
                    buf
                }
            };
            let bytes = if hex {
                let text = std::str::from_utf8(&raw).context("hex input is not utf-8")?;
                parse_hex(text)?
            } else {
                raw
            };
            debug!(len = bytes.len(), optional, "decoding snapshot");

            let snapshot = if optional {
                optional_from_bytes(&bytes)?
            } else {
                Some(from_bytes(&bytes)?)
            };
            writeln!(stdout, "{}", format_snapshot(snapshot.as_ref(), pretty)?)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn load_snapshot(source: SnapshotSource) -> anyhow::Result<Option<CommitSnapshot>> {
    match source {
        SnapshotSource::Absent => Ok(None),
        SnapshotSource::Flags {
            generation,
            entries,
        } => Ok(Some(CommitSnapshot::new(
            entries.into_iter().collect(),
            generation,
        ))),
        SnapshotSource::JsonFile(path) => read_json_snapshot(&path).map(Some),
    }
}

fn read_json_snapshot(path: &Path) -> anyhow::Result<CommitSnapshot> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
