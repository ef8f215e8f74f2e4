use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Print `value` as pretty JSON in `--json` mode, otherwise `plain` line by line.
pub fn print<T: Serialize>(value: &T, plain: &[String]) -> anyhow::Result<()> {
    if is_json() {
        let s = serde_json::to_string_pretty(value)?;
        println!("{s}");
        return Ok(());
    }
    let mut out = io::stdout().lock();
    for line in plain {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print a colored status word (`match` / `no match`).
pub fn print_status(ok: bool, word: &str) -> anyhow::Result<()> {
    let mut out = stdout();
    let color = if ok { Color::Green } else { Color::Red };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{word}")?;
    out.reset()?;
    writeln!(out)?;
    Ok(())
}

pub fn eprintln_line(msg: &str) {
    let _ = writeln!(io::stderr(), "{msg}");
}

pub fn stdout() -> StandardStream {
    let choice = if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}
