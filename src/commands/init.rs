//! Application configuration initialization command.
//!
//! Interactive setup wizard for first-time use: mail gateway credentials and
//! watcher timing.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::default().save()?;
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
