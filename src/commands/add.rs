use super::{finish, open_session, FieldArgs};
use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    fields: FieldArgs,
}

pub fn cmd(args: AddArgs) -> Result<ExitCode> {
    let mut session = open_session()?;
    args.fields.fill(&mut session.form);

    let result = session.add_student();
    Ok(finish(&session, result))
}
