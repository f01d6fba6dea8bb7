//! The one active form and the one active record store.
//!
//! Every user action goes through a [`Session`]: validate the form, run the
//! statement, then reload the table so it always reflects the database.
//! The status line is updated whether the action succeeds or fails.
//!
//! ```rust
//! use studentdb::libs::config::DatabaseConfig;
//! use studentdb::libs::session::{Outcome, Session};
//!
//! let mut session = Session::start(&DatabaseConfig::in_memory());
//! session.form.name = "Alice".to_string();
//! session.form.email = "alice@x.com".to_string();
//! assert!(matches!(session.add_student()?, Outcome::Added(_)));
//! assert_eq!(session.table().len(), 1);
//! assert!(session.form.name.is_empty());
//! # Ok::<(), studentdb::libs::error::StudentError>(())
//! ```

use crate::db::students::Students;
use crate::libs::config::DatabaseConfig;
use crate::libs::error::{StorageError, StudentError};
use crate::libs::form::StudentForm;
use crate::libs::messages::Message;
use crate::libs::validator::{validate_fields, validate_id};
use crate::libs::view::ViewModel;
use tracing::{debug, warn};

/// Result of a completed action. Zero affected rows is reported as
/// [`Outcome::NotUpdated`] or [`Outcome::NotDeleted`], not as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A student was inserted; carries the new id when known.
    Added(Option<i64>),
    /// The table was reloaded with this many rows.
    Loaded(usize),
    Updated,
    Deleted,
    /// Update matched no row.
    NotUpdated,
    /// Delete matched no row.
    NotDeleted,
    /// The user declined the delete confirmation.
    Cancelled,
}

impl Outcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotUpdated | Outcome::NotDeleted)
    }

    /// Whether the table has to be reloaded after this outcome.
    fn ran_statement(&self) -> bool {
        matches!(
            self,
            Outcome::Added(_) | Outcome::Updated | Outcome::Deleted | Outcome::NotUpdated | Outcome::NotDeleted
        )
    }
}

pub struct Session {
    store: Students,
    pub form: StudentForm,
    table: ViewModel,
    stale: bool,
    status: Message,
}

impl Session {
    /// Opens the store. A failed connection is reported on the status line
    /// and the session keeps running with a disconnected store.
    pub fn start(config: &DatabaseConfig) -> Session {
        match Students::open(config) {
            Ok(store) => Session::with_store(store, Message::Connected),
            Err(e) => {
                warn!(error = %e, "starting without a database connection");
                let status = Message::DbConnectionFailed(e.to_string());
                Session::with_store(Students::disconnected(e.to_string()), status)
            }
        }
    }

    pub fn with_store(store: Students, status: Message) -> Session {
        Session {
            store,
            form: StudentForm::default(),
            table: ViewModel::default(),
            stale: false,
            status,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.store.is_connected()
    }

    pub fn status(&self) -> &Message {
        &self.status
    }

    pub fn table(&self) -> &ViewModel {
        &self.table
    }

    /// True while the table shown no longer matches the database.
    pub fn is_table_stale(&self) -> bool {
        self.stale
    }

    /// "Add Student": validate without ID, insert, clear the form except the
    /// ID field, reload.
    pub fn add_student(&mut self) -> Result<Outcome, StudentError> {
        let result = self.try_add();
        self.finish(result)
    }

    /// "View Students": reload the table.
    pub fn view_students(&mut self) -> Result<Outcome, StudentError> {
        let result = self.refresh().map_err(StudentError::from);
        self.finish(result)
    }

    /// "Update Student": validate with ID, update, reload.
    pub fn update_student(&mut self) -> Result<Outcome, StudentError> {
        let result = self.try_update();
        self.finish(result)
    }

    /// "Delete Student": needs an ID, then `confirm(id)` must return `true`
    /// before the row is removed. Clears the whole form after the statement
    /// has run.
    pub fn delete_student<F>(&mut self, confirm: F) -> Result<Outcome, StudentError>
    where
        F: FnOnce(i64) -> bool,
    {
        let result = self.try_delete(confirm);
        self.finish(result)
    }

    /// Copies a table row into the form for editing.
    pub fn select_row(&mut self, row: usize) -> bool {
        let selected = self.form.populate_from(&self.table, row);
        if selected {
            self.status = Message::FormPopulated(self.form.student_id.clone());
        }
        selected
    }

    /// Sorts the current table by `column`. The order lasts until the next
    /// reload.
    pub fn sort_table(&mut self, column: &str, descending: bool) -> bool {
        if !self.table.sort_by(column, descending) {
            return false;
        }
        self.status = Message::TableSorted {
            column: column.to_string(),
            descending,
        };
        true
    }

    /// Ascending first; sorting the same column again flips the direction.
    pub fn toggle_sort(&mut self, column: &str) -> bool {
        let descending = match (self.table.sorted_by(), self.table.column_index(column)) {
            (Some(key), Some(index)) => key.column == index && !key.descending,
            _ => false,
        };
        self.sort_table(column, descending)
    }

    pub fn clear_form(&mut self) {
        self.form.clear_all();
        self.status = Message::FormCleared;
    }

    fn try_add(&mut self) -> Result<Outcome, StudentError> {
        validate_fields(&self.form, false)?;
        self.store.create(&self.form.to_student())?;
        let id = self.store.last_insert_id();
        self.form.clear_non_id();
        Ok(Outcome::Added(id))
    }

    fn try_update(&mut self) -> Result<Outcome, StudentError> {
        validate_fields(&self.form, true)?;
        let id = validate_id(&self.form)?;
        let affected = self.store.update(id, &self.form.to_student())?;
        Ok(if affected == 0 { Outcome::NotUpdated } else { Outcome::Updated })
    }

    fn try_delete<F>(&mut self, confirm: F) -> Result<Outcome, StudentError>
    where
        F: FnOnce(i64) -> bool,
    {
        let id = validate_id(&self.form)?;
        if !confirm(id) {
            return Ok(Outcome::Cancelled);
        }

        let affected = self.store.delete(id)?;
        self.form.clear_all();
        Ok(if affected == 0 { Outcome::NotDeleted } else { Outcome::Deleted })
    }

    fn refresh(&mut self) -> Result<Outcome, StorageError> {
        let result = self.store.list_all()?;
        self.table = ViewModel::from_result_set(&result);
        self.stale = false;
        Ok(Outcome::Loaded(self.table.len()))
    }

    /// Sets the status line and, once a statement has run, reloads the
    /// table. A failed reload keeps the outcome: the row was written.
    fn finish(&mut self, result: Result<Outcome, StudentError>) -> Result<Outcome, StudentError> {
        self.status = match &result {
            Ok(Outcome::Added(_)) => Message::StudentAdded,
            Ok(Outcome::Loaded(count)) => Message::RecordsLoaded(*count),
            Ok(Outcome::Updated) => Message::StudentUpdated,
            Ok(Outcome::Deleted) => Message::StudentDeleted,
            Ok(Outcome::NotUpdated) => Message::NoRecordUpdated,
            Ok(Outcome::NotDeleted) => Message::NoRecordDeleted,
            Ok(Outcome::Cancelled) => Message::DeleteCancelled,
            Err(StudentError::Validation(e)) => Message::ValidationFailed(e.to_string()),
            Err(StudentError::Storage(e)) => Message::StatusError(e.to_string()),
        };

        if matches!(&result, Ok(outcome) if outcome.ran_statement()) {
            if let Err(e) = self.refresh() {
                self.stale = true;
                warn!(error = %e, "table not reloaded");
                self.status = Message::RefreshFailed(Box::new(self.status.clone()), e.to_string());
            }
        }

        debug!(status = %self.status, "action finished");
        result
    }
}
