/// Every piece of text the application shows to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === STATUS LINE ===
    Connected,
    StudentAdded,
    RecordsLoaded(usize),
    StudentUpdated,
    NoRecordUpdated,
    StudentDeleted,
    NoRecordDeleted,
    DeleteCancelled,
    StatusError(String),
    RefreshFailed(Box<Message>, String), // status of the action, load error

    // === FORM ===
    FormHeader,
    FormCleared,
    FormPopulated(String), // student id
    FieldStudentId,
    FieldName,
    FieldEmail,
    FieldPhone,
    FieldAddress,

    // === TABLE ===
    StudentsHeader,
    NoStudentsFound,
    NoRowsToSelect,
    RowOutOfRange(usize),
    TableSorted { column: String, descending: bool },
    UnknownColumn(String),

    // === ACTIONS ===
    ActionAdd,
    ActionView,
    ActionUpdate,
    ActionDelete,
    ActionEditForm,
    ActionSelectRow,
    ActionClearForm,
    ActionSortTable,
    ActionQuit,
    SelectAction,
    SelectRow,
    SelectSortColumn,
    ConfirmDeleteStudent(i64),
    Goodbye,

    // === VALIDATION ===
    ValidationFailed(String),

    // === DATABASE ===
    DbConnectionFailed(String),

    // === CONFIGURATION ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleDatabase,
    PromptDatabasePath,
}
