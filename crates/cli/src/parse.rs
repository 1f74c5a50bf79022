//! ArgMatches → CliAction conversion.
//!
//! Also holds the small text parsers the CLI needs: `KEY[=VALUE]` entries
//! and hex input.

use anyhow::{bail, Context};
use clap::ArgMatches;
use std::path::PathBuf;

/// Where `encode` gets its snapshot from.
#[derive(Debug, PartialEq)]
pub enum SnapshotSource {
    /// Built from `--generation` and `--entry` flags
    Flags {
        generation: i64,
        entries: Vec<(String, Option<String>)>,
    },
    /// Read from a JSON file
    JsonFile(PathBuf),
    /// The absent optional snapshot
    Absent,
}

/// The result of parsing the command line.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    Encode {
        source: SnapshotSource,
        optional: bool,
        output: Option<PathBuf>,
        hex: bool,
    },
    Decode {
        input: Option<PathBuf>,
        optional: bool,
        hex: bool,
        pretty: bool,
    },
}

/// Translate parsed arguments into an action.
pub fn matches_to_action(matches: &ArgMatches) -> anyhow::Result<CliAction> {
    match matches.subcommand() {
        Some(("encode", sub)) => {
            let absent = sub.get_flag("absent");
            let source = if absent {
                SnapshotSource::Absent
            } else if let Some(path) = sub.get_one::<String>("from-json") {
                SnapshotSource::JsonFile(PathBuf::from(path))
            } else {
                let generation = sub.get_one::<i64>("generation").copied().unwrap_or(0);
                let entries = sub
                    .get_many::<String>("entry")
                    .into_iter()
                    .flatten()
                    .map(|raw| parse_entry(raw))
                    .collect();
                SnapshotSource::Flags {
                    generation,
                    entries,
                }
            };
            Ok(CliAction::Encode {
                source,
                // An absent snapshot only exists in the optional form
                optional: absent || sub.get_flag("optional"),
                output: sub.get_one::<String>("output").map(PathBuf::from),
                hex: sub.get_flag("hex"),
            })
        }
        Some(("decode", sub)) => Ok(CliAction::Decode {
            input: sub.get_one::<String>("input").map(PathBuf::from),
            optional: sub.get_flag("optional"),
            hex: sub.get_flag("hex"),
            pretty: sub.get_flag("pretty"),
        }),
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("no command given"),
    }
}

/// Split `KEY=VALUE` at the first `=`; a bare `KEY` has a null value.
pub fn parse_entry(raw: &str) -> (String, Option<String>) {
    match raw.split_once('=') {
        Some((key, value)) => (key.to_string(), Some(value.to_string())),
        None => (raw.to_string(), None),
    }
}

/// Parse hex text, ignoring ASCII whitespace.
pub fn parse_hex(text: &str) -> anyhow::Result<Vec<u8>> {
    let digits: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    hex::decode(&digits).context("invalid hex input")
}
