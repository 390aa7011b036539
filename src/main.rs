//! s2-variants: host tool for the ESP32-S2 board variants.
//!
//! Prints the `boards.txt` section for registry boards, dumps a board's pin
//! table as NDJSON, validates every compiled-in table, and lists the TinyUF2
//! bootloader assets the board-support package installs.

use std::io::{self, Write};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use esp32s2_variants::boards_txt::{write_board, write_boards};
use esp32s2_variants::protocol::{serialize_message, VariantMessage, MAX_MSG_LEN, VERSION};
use esp32s2_variants::tinyuf2::{self, IMAGE_MEMBERS, TINYUF2_VERSION};
use esp32s2_variants::variant::BoardVariant;
use esp32s2_variants::{board, defaults, variants};

/// ESP32-S2 board variant tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// enable debug messages
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print boards.txt sections (all registry boards if none named)
    Boards { names: Vec<String> },
    /// Print a board's pin table as NDJSON
    Pins {
        board: String,
        /// hardware revision; latest if omitted
        revision: Option<String>,
    },
    /// Validate every pin table
    Check,
    /// List TinyUF2 release assets and where their files are installed
    Tinyuf2 {
        /// archive members to map; the two images if omitted
        members: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if args.verbose {
        builder.filter(None, log::LevelFilter::Debug);
    }
    builder.init();

    log::debug!("s2-variants v{VERSION}, default board {}", board::BOARD_NAME);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Command::Boards { names: Vec::new() }) {
        Command::Boards { names } => print_boards(&mut out, &names),
        Command::Pins { board, revision } => print_pins(&mut out, &board, revision.as_deref()),
        Command::Check => check(&mut out),
        Command::Tinyuf2 { members } => print_tinyuf2(&mut out, &members),
    }
}

fn print_boards(out: &mut impl Write, names: &[String]) -> anyhow::Result<()> {
    let mut text = String::new();
    if names.is_empty() {
        write_boards(&mut text, defaults::BOARDS)?;
    } else {
        for name in names {
            let entry = defaults::board(name).with_context(|| format!("unknown board {name}"))?;
            write_board(&mut text, entry)?;
        }
    }
    out.write_all(text.as_bytes())?;
    Ok(())
}

fn emit(out: &mut impl Write, msg: &VariantMessage) -> anyhow::Result<()> {
    let mut buf = vec![0u8; MAX_MSG_LEN];
    let len = serialize_message(msg, &mut buf).context("message does not fit the output buffer")?;
    out.write_all(&buf[..len])?;
    Ok(())
}

fn print_pins(out: &mut impl Write, name: &str, revision: Option<&str>) -> anyhow::Result<()> {
    let variant = match revision {
        Some(rev) => variants::find_revision(name, rev)
            .with_context(|| format!("no revision {rev} of {name}"))?,
        None => variants::find(name).with_context(|| format!("no pin table for {name}"))?,
    };
    emit(out, &VariantMessage::board(variant))?;
    for shared in variant.shared_gpios() {
        emit(out, &VariantMessage::shared_gpio(variant, &shared))?;
    }
    Ok(())
}

fn label(v: &BoardVariant) -> String {
    match v.revision {
        Some(rev) => format!("{} rev {rev}", v.name),
        None => v.name.to_string(),
    }
}

fn check(out: &mut impl Write) -> anyhow::Result<()> {
    let mut failed = 0;
    for v in variants::ALL {
        match v.validate() {
            Ok(()) => log::info!("{}: ok", label(v)),
            Err(e) => {
                log::error!("{}: {e}", label(v));
                emit(out, &VariantMessage::invalid(v, &e))?;
                failed += 1;
            }
        }
        for shared in v.shared_gpios() {
            emit(out, &VariantMessage::shared_gpio(v, &shared))?;
        }
    }
    if failed > 0 {
        bail!("{failed} of {} pin tables failed validation", variants::ALL.len());
    }
    Ok(())
}

fn print_tinyuf2(out: &mut impl Write, members: &[String]) -> anyhow::Result<()> {
    log::info!("TinyUF2 {TINYUF2_VERSION}");
    let members: Vec<&str> = if members.is_empty() {
        IMAGE_MEMBERS.to_vec()
    } else {
        members.iter().map(String::as_str).collect()
    };
    let mut text = String::new();
    for v in tinyuf2::VARIANTS {
        tinyuf2::write_install_plan(&mut text, v, &members)
            .with_context(|| format!("asset name for {} too long", v.variant))?;
    }
    out.write_all(text.as_bytes())?;
    Ok(())
}
