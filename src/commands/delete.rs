use super::{finish, open_session};
use crate::libs::messages::Message;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the student to delete
    #[arg(long)]
    id: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<ExitCode> {
    let mut session = open_session()?;
    session.form.student_id = args.id.unwrap_or_default();

    let result = session.delete_student(|id| args.yes || confirm_delete(id));
    Ok(finish(&session, result))
}

/// Asks before a delete. A prompt that cannot be shown counts as "no".
pub(crate) fn confirm_delete(id: i64) -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteStudent(id).to_string())
        .default(false)
        .interact()
        .unwrap_or(false)
}
