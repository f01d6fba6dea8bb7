use crate::libs::record::Record;
use crate::libs::validator::trim_field;

/// One row of the `students` table.
///
/// `student_id` is assigned by the database and is `None` for a student that
/// has not been stored yet. Optional text fields are `None` when the form
/// field was left blank; they are stored as SQL NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub student_id: Option<i64>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Student {
    pub fn new(name: &str, email: &str, phone: &str, address: &str) -> Self {
        Student {
            student_id: None,
            name: trim_field(name).to_string(),
            email: non_empty(email),
            phone: non_empty(phone),
            address: non_empty(address),
        }
    }

    /// Reads a student back out of a `SELECT *` row. Returns `None` if the
    /// row lacks a `name` column.
    pub fn from_record(record: &Record) -> Option<Self> {
        let text = |column: &str| record.get(column).and_then(|value| value.as_text()).map(str::to_string);

        Some(Student {
            student_id: record.get("student_id").and_then(|value| value.as_integer()),
            name: text("name")?,
            email: text("email"),
            phone: text("phone"),
            address: text("address"),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = trim_field(value);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optional_fields_become_none() {
        let student = Student::new(" Alice ", "", "  ", "1 Main St");
        assert_eq!(student.name, "Alice");
        assert_eq!(student.email, None);
        assert_eq!(student.phone, None);
        assert_eq!(student.address.as_deref(), Some("1 Main St"));
        assert_eq!(student.student_id, None);
    }
}
