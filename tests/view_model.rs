#[cfg(test)]
mod tests {
    use studentdb::db::students::Students;
    use studentdb::libs::config::DatabaseConfig;
    use studentdb::libs::form::StudentForm;
    use studentdb::libs::record::{CellValue, Record, ResultSet};
    use studentdb::libs::student::Student;
    use studentdb::libs::view::ViewModel;

    #[test]
    fn test_empty_table_keeps_column_names() {
        let mut students = Students::open(&DatabaseConfig::in_memory()).unwrap();
        let view = ViewModel::from_result_set(&students.list_all().unwrap());

        assert!(view.is_empty());
        assert_eq!(view.columns(), ["student_id", "name", "email", "phone", "address"]);
    }

    #[test]
    fn test_null_cells_display_empty() {
        let mut students = Students::open(&DatabaseConfig::in_memory()).unwrap();
        students.create(&Student::new("Alice", "", "5551234567", "")).unwrap();

        let view = ViewModel::from_result_set(&students.list_all().unwrap());
        assert_eq!(view.len(), 1);
        assert_eq!(view.value(0, "email"), Some(""));
        assert_eq!(view.value(0, "phone"), Some("5551234567"));
        assert_eq!(view.value(0, "address"), Some(""));
    }

    #[test]
    fn test_columns_follow_metadata_order() {
        let result = ResultSet {
            columns: vec!["Name".into(), "Student_ID".into()],
            rows: vec![Record::new(vec![
                ("Name".into(), CellValue::Text("Alice".into())),
                ("Student_ID".into(), CellValue::Integer(4)),
            ])],
        };

        let view = ViewModel::from_result_set(&result);
        assert_eq!(view.rows(), [vec!["Alice".to_string(), "4".to_string()]]);
        assert_eq!(view.column_index("student_id"), Some(1));
    }

    #[test]
    fn test_form_matches_columns_case_insensitively() {
        let result = ResultSet {
            columns: vec!["STUDENT_ID".into(), "NAME".into(), "EMAIL".into()],
            rows: vec![Record::new(vec![
                ("STUDENT_ID".into(), CellValue::Integer(4)),
                ("NAME".into(), CellValue::Text("Alice".into())),
                ("EMAIL".into(), CellValue::Null),
            ])],
        };
        let view = ViewModel::from_result_set(&result);

        let mut form = StudentForm::new("", "", "", "555", "old address");
        assert!(form.populate_from(&view, 0));
        // Columns the table lacks are cleared
        assert_eq!(form, StudentForm::new("4", "Alice", "", "", ""));

        assert!(!form.populate_from(&view, 1));
    }
}
