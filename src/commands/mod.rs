pub mod add;
pub mod clear;
pub mod delete;
pub mod export;
pub mod search;
pub mod show;
pub mod update;

use owo_colors::OwoColorize;

/// Print a success line.
pub(crate) fn success(message: &str) {
    println!("{}", format!("  {message}").green());
}

/// Print a guidance line (nothing went wrong, but nothing happened either).
pub(crate) fn hint(message: &str) {
    println!("{}", format!("  {message}").yellow());
}
