//! `Display` for [`Message`]: the single source of user-facing wording.
//!
//! Status texts mirror what a user of the windowed tool would expect to see
//! in its status bar ("Student added.", "Loaded 3 record(s).", ...).

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STATUS LINE ===
            Message::Connected => "Connected to database.".to_string(),
            Message::StudentAdded => "Student added.".to_string(),
            Message::RecordsLoaded(count) => format!("Loaded {} record(s).", count),
            Message::StudentUpdated => "Student updated.".to_string(),
            Message::NoRecordUpdated => "No record updated.".to_string(),
            Message::StudentDeleted => "Student deleted.".to_string(),
            Message::NoRecordDeleted => "No record deleted.".to_string(),
            Message::DeleteCancelled => "Delete cancelled.".to_string(),
            Message::StatusError(cause) => format!("Error: {}", cause),
            Message::RefreshFailed(status, cause) => format!("{} Table not reloaded: {}", status, cause),

            // === FORM ===
            Message::FormHeader => "Student".to_string(),
            Message::FormCleared => "Form cleared.".to_string(),
            Message::FormPopulated(id) => format!("Loaded student {} into the form.", id),
            Message::FieldStudentId => "Student ID".to_string(),
            Message::FieldName => "Name".to_string(),
            Message::FieldEmail => "Email".to_string(),
            Message::FieldPhone => "Phone".to_string(),
            Message::FieldAddress => "Address".to_string(),

            // === TABLE ===
            Message::StudentsHeader => "Students".to_string(),
            Message::NoStudentsFound => "No students found.".to_string(),
            Message::NoRowsToSelect => "The table is empty, use View Students first.".to_string(),
            Message::RowOutOfRange(index) => format!("Row {} is not in the table.", index),
            Message::TableSorted { column, descending } => {
                format!("Sorted by {}, {}.", column, if *descending { "descending" } else { "ascending" })
            }
            Message::UnknownColumn(column) => format!("No column named '{}'.", column),

            // === ACTIONS ===
            Message::ActionAdd => "Add Student".to_string(),
            Message::ActionView => "View Students".to_string(),
            Message::ActionUpdate => "Update Student".to_string(),
            Message::ActionDelete => "Delete Student".to_string(),
            Message::ActionEditForm => "Edit Form".to_string(),
            Message::ActionSelectRow => "Select Row".to_string(),
            Message::ActionClearForm => "Clear Form".to_string(),
            Message::ActionSortTable => "Sort Table".to_string(),
            Message::ActionQuit => "Quit".to_string(),
            Message::SelectAction => "Add • View • Update • Delete".to_string(),
            Message::SelectRow => "Select a student to edit".to_string(),
            Message::SelectSortColumn => "Sort by column".to_string(),
            Message::ConfirmDeleteStudent(id) => format!("Delete student with ID {}?", id),
            Message::Goodbye => "Bye.".to_string(),

            // === VALIDATION ===
            Message::ValidationFailed(reason) => format!("Validation: {}", reason),

            // === DATABASE ===
            Message::DbConnectionFailed(cause) => format!("Could not connect to the database. Check the configured path: {}", cause),

            // === CONFIGURATION ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleDatabase => "Database".to_string(),
            Message::PromptDatabasePath => "Enter the SQLite database path".to_string(),
        };
        write!(f, "{}", text)
    }
}
