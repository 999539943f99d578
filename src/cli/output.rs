//! Styled status output.
//!
//! Status and progress lines go to stderr so reports on stdout stay clean
//! for piping. Styling degrades automatically when stderr is not a TTY.

use console::style;

pub fn success(message: &str) {
    eprintln!("{} {message}", style("✔").green());
}

pub fn error(message: &str) {
    eprintln!("{} {message}", style("✖").red());
}

pub fn warning(message: &str) {
    eprintln!("{} {message}", style("⚠").yellow());
}

pub fn info(message: &str) {
    eprintln!("{} {message}", style("ℹ").blue());
}

pub fn step(message: &str) {
    eprintln!("{} {message}", style("❯").cyan());
}
