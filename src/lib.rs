//! # studentdb - student records in a terminal
//!
//! A small command-line utility for adding, viewing, updating and deleting
//! student records kept in a single SQLite table.
//!
//! ## Features
//!
//! - **Interactive form**: edit the five fields, pick rows from the table,
//!   run Add / View / Update / Delete from a menu
//! - **One-shot commands**: the same four actions as subcommands
//! - **Validation**: required name, email and phone formats checked before
//!   anything is written
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studentdb::commands::Cli;
//!
//! fn main() -> anyhow::Result<std::process::ExitCode> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
