//! Colored status lines for the CLI. Distance sums and trees go through
//! [`info`] uncolored so they can be piped.
//!
//! `colored` honors NO_COLOR and CLICOLOR_FORCE.

use std::io::Write;

use colored::Colorize;

pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Non-fatal notice, e.g. `config init` refusing to overwrite.
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "warning".yellow(), msg);
}

/// One passed check from `check`.
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "ok".green().bold(), msg);
}

/// Labelled path line used by the `config` subcommands.
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{:>8}: {}", label.green(), msg);
}

pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{msg}");
}

/// Interactive question; the answer is read on the same line.
pub fn prompt(msg: &(impl std::fmt::Display + ?Sized)) {
    print!("{} ", msg.to_string().cyan());
    let _ = std::io::stdout().flush();
}
