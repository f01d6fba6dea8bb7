//! Database layer for studentdb.
//!
//! One SQLite connection, opened from injected [`DatabaseConfig`] settings,
//! and the record store that runs the four student statements on it.
//!
//! ```rust
//! use studentdb::db::students::Students;
//! use studentdb::libs::config::DatabaseConfig;
//! use studentdb::libs::student::Student;
//!
//! let mut students = Students::open(&DatabaseConfig::in_memory())?;
//! students.create(&Student::new("Alice", "alice@x.com", "5551234567", "1 Main St"))?;
//! assert_eq!(students.list_all()?.len(), 1);
//! # Ok::<(), studentdb::libs::error::StorageError>(())
//! ```
//!
//! [`DatabaseConfig`]: crate::libs::config::DatabaseConfig

/// Connection opening.
pub mod db;

/// CRUD statements against the `students` table.
pub mod students;
