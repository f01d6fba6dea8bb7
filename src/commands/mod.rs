pub mod add;
pub mod delete;
pub mod init;
pub mod shell;
pub mod update;
pub mod view;

use crate::libs::config::Config;
use crate::libs::error::StudentError;
use crate::libs::form::StudentForm;
use crate::libs::logging::init_logging;
use crate::libs::messages::Message;
use crate::libs::session::{Outcome, Session};
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Open the interactive student form (default)")]
    Shell,
    #[command(about = "Add a student")]
    Add(add::AddArgs),
    #[command(about = "List all students, newest first")]
    View(view::ViewArgs),
    #[command(about = "Update a student by ID")]
    Update(update::UpdateArgs),
    #[command(about = "Delete a student by ID")]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<ExitCode> {
        let cli = Self::parse();
        init_logging(cli.verbose)?;

        match cli.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Shell) | None => shell::cmd(),
            Some(Commands::Add(args)) => add::cmd(args),
            Some(Commands::View(args)) => view::cmd(args),
            Some(Commands::Update(args)) => update::cmd(args),
            Some(Commands::Delete(args)) => delete::cmd(args),
        }
    }
}

/// Student fields shared by `add` and `update`.
#[derive(Debug, Args)]
pub struct FieldArgs {
    /// Student name
    #[arg(long, short)]
    name: Option<String>,

    /// Email address (local@domain.tld)
    #[arg(long, short)]
    email: Option<String>,

    /// Phone number, 7 to 15 digits
    #[arg(long, short)]
    phone: Option<String>,

    /// Postal address
    #[arg(long, short)]
    address: Option<String>,
}

impl FieldArgs {
    fn fill(self, form: &mut StudentForm) {
        form.name = self.name.unwrap_or_default();
        form.email = self.email.unwrap_or_default();
        form.phone = self.phone.unwrap_or_default();
        form.address = self.address.unwrap_or_default();
    }
}

/// Starts a session from the configured database. A failed connection is
/// reported here; the session still starts so the action reports its own
/// storage error.
pub(crate) fn open_session() -> Result<Session> {
    let database = Config::read()?.database()?;
    let session = Session::start(&database);
    if !session.is_connected() {
        msg_error!(session.status());
    }
    Ok(session)
}

/// Prints the status line with a prefix matching how the action ended.
pub(crate) fn report(session: &Session, result: &Result<Outcome, StudentError>) {
    match result {
        Ok(_) if session.is_table_stale() => msg_warning!(session.status()),
        Ok(outcome) if outcome.is_not_found() => msg_warning!(session.status()),
        Ok(Outcome::Cancelled) => msg_info!(session.status()),
        Ok(_) => msg_success!(session.status()),
        Err(e) if e.is_validation() => msg_warning!(session.status()),
        Err(_) => msg_error!(session.status()),
    }
}

/// Prints the reloaded table. Skipped when the action was cancelled, failed
/// or could not reload.
pub(crate) fn show_table(session: &Session, result: &Result<Outcome, StudentError>, header: bool) {
    if !matches!(result, Ok(outcome) if *outcome != Outcome::Cancelled) || session.is_table_stale() {
        return;
    }

    if session.table().is_empty() {
        msg_info!(Message::NoStudentsFound);
    } else {
        if header {
            msg_print!(Message::StudentsHeader);
        }
        session.table().print();
    }
}

/// Table, then status line. Used by the one-shot commands.
pub(crate) fn finish(session: &Session, result: Result<Outcome, StudentError>) -> ExitCode {
    show_table(session, &result, false);
    report(session, &result);

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
