use super::{finish, open_session, FieldArgs};
use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

/// All four fields are rewritten; a field left out is cleared.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// ID of the student to update
    #[arg(long)]
    id: Option<String>,

    #[command(flatten)]
    fields: FieldArgs,
}

pub fn cmd(args: UpdateArgs) -> Result<ExitCode> {
    let mut session = open_session()?;
    session.form.student_id = args.id.unwrap_or_default();
    args.fields.fill(&mut session.form);

    let result = session.update_student();
    Ok(finish(&session, result))
}
