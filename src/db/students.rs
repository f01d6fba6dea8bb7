//! Record store for the `students` table.
//!
//! All statements are parameterized; values are never spliced into SQL.
//! The store holds at most one connection. If opening it failed, the store
//! is created disconnected and every call fails fast with
//! [`StorageError::Unavailable`]; nothing reconnects or retries.

use super::db::Db;
use crate::libs::config::DatabaseConfig;
use crate::libs::error::StorageError;
use crate::libs::record::{CellValue, Record, ResultSet};
use crate::libs::student::Student;
use rusqlite::{params, Connection};
use tracing::debug;

const SCHEMA_STUDENTS: &str = "CREATE TABLE IF NOT EXISTS students (
    student_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    address TEXT
)";
const INSERT_STUDENT: &str = "INSERT INTO students (name, email, phone, address) VALUES (?, ?, ?, ?)";
const SELECT_STUDENTS: &str = "SELECT * FROM students ORDER BY student_id DESC";
const UPDATE_STUDENT: &str = "UPDATE students SET name=?, email=?, phone=?, address=? WHERE student_id=?";
const DELETE_STUDENT: &str = "DELETE FROM students WHERE student_id = ?";

pub struct Students {
    conn: Option<Connection>,
    unavailable: String,
}

impl Students {
    /// Opens the database and makes sure the table exists.
    pub fn open(config: &DatabaseConfig) -> Result<Students, StorageError> {
        let db = Db::open(config)?;
        db.conn.execute(SCHEMA_STUDENTS, []).map_err(StorageError::statement("Create table failed"))?;

        Ok(Students {
            conn: Some(db.conn),
            unavailable: String::new(),
        })
    }

    /// A store without a connection, remembering why it has none.
    pub fn disconnected(reason: impl Into<String>) -> Students {
        Students {
            conn: None,
            unavailable: reason.into(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    fn conn(&self) -> Result<&Connection, StorageError> {
        self.conn.as_ref().ok_or_else(|| StorageError::Unavailable {
            reason: self.unavailable.clone(),
        })
    }

    /// Inserts a new row; the database assigns `student_id`. Returns the
    /// affected row count, 1 on success.
    pub fn create(&mut self, student: &Student) -> Result<usize, StorageError> {
        let conn = self.conn()?;
        let affected = conn
            .execute(INSERT_STUDENT, params![student.name, student.email, student.phone, student.address])
            .map_err(StorageError::statement("Add failed"))?;

        debug!(affected, student_id = conn.last_insert_rowid(), "student inserted");
        Ok(affected)
    }

    /// The id assigned by the most recent successful insert on this
    /// connection.
    pub fn last_insert_id(&self) -> Option<i64> {
        let id = self.conn.as_ref()?.last_insert_rowid();
        (id > 0).then_some(id)
    }

    /// Every row, newest first, with column names from the statement.
    pub fn list_all(&mut self) -> Result<ResultSet, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(SELECT_STUDENTS).map_err(StorageError::statement("Load failed"))?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(str::to_string).collect();

        let mut query = stmt.query([]).map_err(StorageError::statement("Load failed"))?;
        let mut rows = Vec::new();
        while let Some(row) = query.next().map_err(StorageError::statement("Load failed"))? {
            let mut fields = Vec::with_capacity(columns.len());
            for (index, column) in columns.iter().enumerate() {
                let value = row.get_ref(index).map_err(StorageError::statement("Load failed"))?;
                fields.push((column.clone(), CellValue::from(value)));
            }
            rows.push(Record::new(fields));
        }

        debug!(rows = rows.len(), "students loaded");
        Ok(ResultSet { columns, rows })
    }

    /// Rewrites the four fields of row `id`. Returns 0 when no such row.
    pub fn update(&mut self, id: i64, student: &Student) -> Result<usize, StorageError> {
        let affected = self
            .conn()?
            .execute(UPDATE_STUDENT, params![student.name, student.email, student.phone, student.address, id])
            .map_err(StorageError::statement("Update failed"))?;

        debug!(affected, student_id = id, "student updated");
        Ok(affected)
    }

    /// Removes row `id`. Returns 0 when no such row.
    pub fn delete(&mut self, id: i64) -> Result<usize, StorageError> {
        let affected = self.conn()?.execute(DELETE_STUDENT, params![id]).map_err(StorageError::statement("Delete failed"))?;

        debug!(affected, student_id = id, "student deleted");
        Ok(affected)
    }
}
