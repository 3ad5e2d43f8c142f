//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and the scanning loop
//! - `comment` - Block comments and runs of line comments
//! - `number` - Integer and float literals
//! - `string` - String literals
//! - `identifier` - Identifiers and their escaping underscore
//!
//! The scanners are plain functions over the remaining input so they can
//! back custom [`Rule`](crate::Rule)s as well as the Web IDL table.

mod comment;
mod core;
mod identifier;
mod number;
mod string;

pub use comment::scan_comment;
pub use core::Lexer;
pub use identifier::{identifier_name, scan_identifier};
pub use number::{parse_float, parse_integer, scan_float, scan_integer};
pub use string::{scan_string, string_body};

#[cfg(test)]
mod properties;
