//! Clap command tree.

use clap::{Arg, ArgAction, Command};

/// Build the `commit-stats` command.
pub fn build_cli() -> Command {
    Command::new("commit-stats")
        .about("Encode, decode and render commit snapshots")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("encode")
                .about("Encode a snapshot to its binary wire form")
                .arg(
                    Arg::new("generation")
                        .long("generation")
                        .short('g')
                        .value_parser(clap::value_parser!(i64))
                        .allow_negative_numbers(true)
                        .default_value("0")
                        .help("Commit generation"),
                )
                .arg(
                    Arg::new("entry")
                        .long("entry")
                        .short('e')
                        .action(ArgAction::Append)
                        .value_name("KEY[=VALUE]")
                        .help("User data entry; a key without '=' has a null value"),
                )
                .arg(
                    Arg::new("from-json")
                        .long("from-json")
                        .value_name("FILE")
                        .conflicts_with_all(["generation", "entry"])
                        .help("Read {\"user_data\":{..},\"generation\":N} from a JSON file"),
                )
                .arg(
                    Arg::new("optional")
                        .long("optional")
                        .action(ArgAction::SetTrue)
                        .help("Use the optional form (leading presence byte)"),
                )
                .arg(
                    Arg::new("absent")
                        .long("absent")
                        .action(ArgAction::SetTrue)
                        .conflicts_with_all(["generation", "entry", "from-json"])
                        .help("Encode an absent optional snapshot"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Write to FILE instead of stdout"),
                )
                .arg(
                    Arg::new("hex")
                        .long("hex")
                        .action(ArgAction::SetTrue)
                        .help("Write lowercase hex instead of raw bytes"),
                ),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode a binary snapshot and render it as JSON")
                .arg(
                    Arg::new("input")
                        .value_name("FILE")
                        .help("Encoded snapshot; reads stdin when omitted"),
                )
                .arg(
                    Arg::new("optional")
                        .long("optional")
                        .action(ArgAction::SetTrue)
                        .help("Input uses the optional form"),
                )
                .arg(
                    Arg::new("hex")
                        .long("hex")
                        .action(ArgAction::SetTrue)
                        .help("Input is hex text"),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Pretty-print the JSON output"),
                ),
        )
}
