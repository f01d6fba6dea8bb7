//! Configuration initialization command.
//!
//! Walks the user through the database settings and saves them, or removes
//! the saved configuration with `--delete`.

use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<ExitCode> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigNotFound);
        }
        return Ok(ExitCode::SUCCESS);
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(ExitCode::SUCCESS)
}
