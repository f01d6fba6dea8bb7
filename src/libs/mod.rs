//! Core library modules for studentdb.
//!
//! - **Records**: the `Student` type, dynamic result rows and the table view model
//! - **Form handling**: form state, field validation and the session that ties
//!   the form to the record store
//! - **Infrastructure**: configuration, data directory, errors, logging, messages
//!
//! ```rust
//! use studentdb::libs::form::StudentForm;
//! use studentdb::libs::validator::validate_fields;
//!
//! let form = StudentForm::new("", "Alice", "alice@x.com", "5551234567", "1 Main St");
//! assert!(validate_fields(&form, false).is_ok());
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod form;
pub mod logging;
pub mod messages;
pub mod record;
pub mod session;
pub mod student;
pub mod validator;
pub mod view;
