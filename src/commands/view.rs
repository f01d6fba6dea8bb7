use super::{finish, open_session};
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Sort the listing by this column instead of newest first
    #[arg(long, short)]
    sort: Option<String>,

    /// Sort in descending order
    #[arg(long, short, requires = "sort")]
    desc: bool,
}

pub fn cmd(args: ViewArgs) -> Result<ExitCode> {
    let mut session = open_session()?;
    let result = session.view_students();

    if let (Ok(_), Some(column)) = (&result, args.sort.as_deref()) {
        if !session.sort_table(column, args.desc) {
            msg_warning!(Message::UnknownColumn(column.to_string()));
        }
    }
    Ok(finish(&session, result))
}
