use crate::libs::student::Student;
use crate::libs::view::ViewModel;

/// The five text inputs of the student form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl StudentForm {
    pub fn new(student_id: &str, name: &str, email: &str, phone: &str, address: &str) -> Self {
        StudentForm {
            student_id: student_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        }
    }

    /// Everything except the ID, as after a successful add.
    pub fn clear_non_id(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.address.clear();
    }

    pub fn clear_all(&mut self) {
        self.student_id.clear();
        self.clear_non_id();
    }

    /// Copies row `row` of the table into the form, matching columns by name
    /// (case-insensitive). Columns the table lacks leave the field empty.
    /// Returns `false` if the row does not exist.
    pub fn populate_from(&mut self, view: &ViewModel, row: usize) -> bool {
        if row >= view.len() {
            return false;
        }
        let cell = |column: &str| view.value(row, column).unwrap_or_default().to_string();

        self.student_id = cell("student_id");
        self.name = cell("name");
        self.email = cell("email");
        self.phone = cell("phone");
        self.address = cell("address");
        true
    }

    /// The client-supplied fields, trimmed. The ID is not part of it.
    pub fn to_student(&self) -> Student {
        Student::new(&self.name, &self.email, &self.phone, &self.address)
    }
}
