use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const FG_GREY: &str = "\x1b[90m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}::{} {}", FG_CYAN, BOLD, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}ok{} {}", FG_GREEN, BOLD, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}warn{} {}", FG_YELLOW, BOLD, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}error{} {}", FG_RED, BOLD, RESET, msg);
}

/// One `label: value` line of the quality summary; zero counts are greyed
/// out so the anomalies stand out.
pub fn stat<T: fmt::Display + PartialEq + Default>(label: &str, value: T) {
    let color = if value == T::default() { FG_GREY } else { RESET };
    println!("  {}{:<24} {}{}", color, label, value, RESET);
}
