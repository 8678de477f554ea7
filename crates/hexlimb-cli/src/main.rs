use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::process;

use anyhow::{Context, anyhow};
use hexlimb_io::core::{BLS12_381_SCALAR_MODULUS_HEX, WordSplit, parse_value};
use hexlimb_io::emit::{
    ArrayBase, ArrayOrder, SplitTelemetry, WordPacketV1, parse_prefixed_lines, to_byte_array,
    to_prefixed_lines, to_rust_array,
};
use tabwriter::TabWriter;

#[derive(Debug, Parser)]
#[command(
    name = "hexlimb",
    version,
    about = "Split integer constants into 64-bit hex words"
)]
struct Cli {
    /// Emit a machine-readable JSON record of the operation to stderr.
    #[arg(long, global = true)]
    telemetry: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a value as `0x`-prefixed 64-bit words, most significant first.
    Split {
        /// Value literal: decimal, or hex with a `0x` prefix.
        #[arg(default_value = BLS12_381_SCALAR_MODULUS_HEX)]
        value: String,
    },
    /// Print a value as a word packet (JSON).
    Packet {
        /// Value literal: decimal, or hex with a `0x` prefix.
        #[arg(default_value = BLS12_381_SCALAR_MODULUS_HEX)]
        value: String,
        /// Output minified JSON
        #[arg(long)]
        min: bool,
    },
    /// Print a value as a Rust array literal of 64-bit words.
    Array {
        /// Value literal: decimal, or hex with a `0x` prefix.
        #[arg(default_value = BLS12_381_SCALAR_MODULUS_HEX)]
        value: String,
        /// Least significant element first (`from_raw`-style limb order).
        #[arg(long)]
        little_endian: bool,
        /// Decimal elements instead of hex.
        #[arg(long, conflicts_with = "bytes")]
        decimal: bool,
        /// Bytes (8 per word) instead of 64-bit words.
        #[arg(long)]
        bytes: bool,
    },
    /// Tabulate the words of a value.
    Inspect {
        /// Value literal: decimal, or hex with a `0x` prefix.
        #[arg(default_value = BLS12_381_SCALAR_MODULUS_HEX)]
        value: String,
    },
    /// Check a file of `0x`-prefixed word lines (as written by `split`).
    Verify {
        /// Path of the line file.
        file: String,
        /// Require the file to reconstruct exactly this value.
        #[arg(long)]
        value: Option<String>,
    },
}

fn report(enabled: bool, record: &SplitTelemetry) {
    if !enabled {
        return;
    }
    if let Ok(json) = serde_json::to_string(record) {
        eprintln!("{json}");
    }
}

/// Parse a value literal or exit with the validator contract (stderr + code 2).
fn split_or_exit(op: &str, literal: &str, telemetry: bool) -> WordSplit {
    match parse_value(literal) {
        Ok(value) => WordSplit::of(&value),
        Err(e) => {
            report(
                telemetry,
                &SplitTelemetry::failure(op, literal.len(), e.code()),
            );
            eprintln!("{e}");
            process::exit(2);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Split { value } => {
            let split = split_or_exit("split", &value, cli.telemetry);
            let out = to_prefixed_lines(&split);
            print!("{out}");
            report(
                cli.telemetry,
                &SplitTelemetry::success("split", split.word_count(), value.len(), out.len()),
            );
        }
        Command::Packet { value, min } => {
            let split = split_or_exit("packet", &value, cli.telemetry);
            let packet = WordPacketV1::from_split(&split);
            let out = if min {
                packet.to_minified_json()?
            } else {
                packet.to_pretty_json()?
            };
            println!("{out}");
            report(
                cli.telemetry,
                &SplitTelemetry::success("packet", split.word_count(), value.len(), out.len()),
            );
        }
        Command::Array {
            value,
            little_endian,
            decimal,
            bytes,
        } => {
            let split = split_or_exit("array", &value, cli.telemetry);
            let order = if little_endian {
                ArrayOrder::LittleEndian
            } else {
                ArrayOrder::BigEndian
            };
            let out = if bytes {
                to_byte_array(&split, order)
            } else {
                let base = if decimal {
                    ArrayBase::Decimal
                } else {
                    ArrayBase::Hex
                };
                to_rust_array(&split, order, base)
            };
            println!("{out}");
            report(
                cli.telemetry,
                &SplitTelemetry::success("array", split.word_count(), value.len(), out.len()),
            );
        }
        Command::Inspect { value } => {
            let split = split_or_exit("inspect", &value, cli.telemetry);
            let mut tw = TabWriter::new(Vec::new());
            writeln!(tw, "index\thex\tu64")?;
            for (i, (chunk, w)) in split.chunks().iter().zip(split.words()).enumerate() {
                writeln!(tw, "{i}\t{chunk}\t{w}")?;
            }
            tw.flush()?;
            let buf = tw.into_inner().map_err(|_| anyhow!("failed to flush table"))?;
            let out = String::from_utf8(buf)?;
            print!("{out}");
            report(
                cli.telemetry,
                &SplitTelemetry::success("inspect", split.word_count(), value.len(), out.len()),
            );
        }
        Command::Verify { file, value } => {
            let text =
                fs::read_to_string(&file).with_context(|| format!("failed to read {file}"))?;
            match parse_prefixed_lines(&text) {
                Ok(split) => {
                    if let Some(literal) = value {
                        let expected = match parse_value(&literal) {
                            Ok(v) => v,
                            Err(e) => {
                                report(
                                    cli.telemetry,
                                    &SplitTelemetry::failure("verify", literal.len(), e.code()),
                                );
                                eprintln!("{e}");
                                process::exit(2);
                            }
                        };
                        let got = split.value();
                        if got != expected {
                            report(
                                cli.telemetry,
                                &SplitTelemetry::failure("verify", text.len(), "value_mismatch"),
                            );
                            eprintln!(
                                "words reconstruct 0x{} but expected 0x{}",
                                got.to_str_radix(16),
                                expected.to_str_radix(16)
                            );
                            process::exit(2);
                        }
                    }
                    let out = "OK\n";
                    print!("{out}");
                    report(
                        cli.telemetry,
                        &SplitTelemetry::success("verify", split.word_count(), text.len(), out.len()),
                    );
                }
                Err(e) => {
                    report(
                        cli.telemetry,
                        &SplitTelemetry::failure("verify", text.len(), e.code()),
                    );
                    eprintln!("{e}");
                    process::exit(2);
                }
            }
        }
    }

    Ok(())
}
