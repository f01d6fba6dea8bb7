//! Interactive student form.
//!
//! The terminal counterpart of a form-and-table window: the form and the
//! table are redrawn after each action, the status line sits underneath,
//! and a menu stands in for the row of buttons.

use super::delete::confirm_delete;
use super::{open_session, report, show_table};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::view::form_table;
use crate::{msg_debug, msg_info, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::fs;
use std::process::ExitCode;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Optional decorative banner in the data directory.
const BANNER_FILE_NAME: &str = "banner.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellAction {
    Add,
    View,
    Update,
    Delete,
    EditForm,
    SelectRow,
    SortTable,
    ClearForm,
    Quit,
}

impl ShellAction {
    const ALL: [ShellAction; 9] = [
        ShellAction::Add,
        ShellAction::View,
        ShellAction::Update,
        ShellAction::Delete,
        ShellAction::EditForm,
        ShellAction::SelectRow,
        ShellAction::SortTable,
        ShellAction::ClearForm,
        ShellAction::Quit,
    ];

    fn label(self) -> Message {
        match self {
            ShellAction::Add => Message::ActionAdd,
            ShellAction::View => Message::ActionView,
            ShellAction::Update => Message::ActionUpdate,
            ShellAction::Delete => Message::ActionDelete,
            ShellAction::EditForm => Message::ActionEditForm,
            ShellAction::SelectRow => Message::ActionSelectRow,
            ShellAction::SortTable => Message::ActionSortTable,
            ShellAction::ClearForm => Message::ActionClearForm,
            ShellAction::Quit => Message::ActionQuit,
        }
    }
}

pub fn cmd() -> Result<ExitCode> {
    let mut session = open_session()?;

    msg_print!(banner(), true);
    if session.is_connected() {
        msg_info!(session.status());
    }

    let labels: Vec<String> = ShellAction::ALL.iter().map(|action| action.label().to_string()).collect();
    let mut last = 0;

    loop {
        form_table(&session.form).printstd();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&labels)
            .default(last)
            .interact()?;
        last = selection;

        let action = ShellAction::ALL[selection];
        msg_debug!(format!("shell action: {:?}", action));

        let result = match action {
            ShellAction::Add => session.add_student(),
            ShellAction::View => session.view_students(),
            ShellAction::Update => session.update_student(),
            ShellAction::Delete => session.delete_student(confirm_delete),
            ShellAction::EditForm => {
                edit_form(&mut session)?;
                continue;
            }
            ShellAction::SelectRow => {
                select_row(&mut session)?;
                continue;
            }
            ShellAction::SortTable => {
                sort_table(&mut session)?;
                continue;
            }
            ShellAction::ClearForm => {
                session.clear_form();
                msg_info!(session.status());
                continue;
            }
            ShellAction::Quit => break,
        };

        show_table(&session, &result, true);
        report(&session, &result);
    }

    msg_print!(Message::Goodbye);
    Ok(ExitCode::SUCCESS)
}

/// Prompts for each form field, pre-filled with its current text.
fn edit_form(session: &mut Session) -> Result<()> {
    let form = &mut session.form;
    form.student_id = prompt_field(Message::FieldStudentId, &form.student_id)?;
    form.name = prompt_field(Message::FieldName, &form.name)?;
    form.email = prompt_field(Message::FieldEmail, &form.email)?;
    form.phone = prompt_field(Message::FieldPhone, &form.phone)?;
    form.address = prompt_field(Message::FieldAddress, &form.address)?;
    Ok(())
}

fn prompt_field(label: Message, current: &str) -> Result<String> {
    let value = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label.to_string())
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Lets the user pick a row of the current table and loads it into the form.
fn select_row(session: &mut Session) -> Result<()> {
    if session.table().is_empty() {
        msg_info!(Message::NoRowsToSelect);
        return Ok(());
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectRow.to_string())
        .items(&session.table().row_labels())
        .default(0)
        .interact()?;

    if session.select_row(selection) {
        msg_info!(session.status());
    } else {
        msg_info!(Message::RowOutOfRange(selection));
    }
    Ok(())
}

/// Sorts the table by a chosen column; choosing the same column again
/// reverses the order.
fn sort_table(session: &mut Session) -> Result<()> {
    if session.table().is_empty() {
        msg_info!(Message::NoRowsToSelect);
        return Ok(());
    }

    let columns = session.table().columns().to_vec();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectSortColumn.to_string())
        .items(&columns)
        .default(session.table().sorted_by().map_or(0, |key| key.column))
        .interact()?;

    if session.toggle_sort(&columns[selection]) {
        msg_print!(Message::StudentsHeader);
        session.table().print();
        msg_info!(session.status());
    }
    Ok(())
}

/// The banner file if there is a readable one, otherwise the built-in title.
fn banner() -> String {
    fs::read_to_string(DataStorage::new().peek_path(BANNER_FILE_NAME))
        .ok()
        .filter(|text| !text.trim().is_empty())
        .map(|text| text.trim_end().to_string())
        .unwrap_or_else(default_banner)
}

fn default_banner() -> String {
    format!("{} {}\n{}", APP_METADATA_TITLE, APP_METADATA_VERSION, Message::SelectAction)
}
