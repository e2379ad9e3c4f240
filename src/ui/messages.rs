//! User-facing notifications. Every recoverable error and every completed
//! action surfaces through these helpers, never through bare println.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

fn paint(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", paint("\x1b[34m", "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", paint("\x1b[32m", "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", paint("\x1b[33m", "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint("\x1b[31m", "❌", msg));
}
