use crate::db::users::{User, Users};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    command: UserCommands,
}

#[derive(Debug, Subcommand)]
enum UserCommands {
    #[command(about = "Register a new user")]
    Add {
        #[arg(required = true)]
        name: String,
        #[arg(required = true)]
        email: String,
    },
    #[command(about = "List registered users")]
    Ls,
}

pub fn cmd(user_args: UserArgs) -> Result<()> {
    match user_args.command {
        UserCommands::Add { name, email } => {
            let user = Users::new()?.register(&User::new(&name, &email))?;
            msg_success!(Message::UserCreated(user.email));
            Ok(())
        }
        UserCommands::Ls => {
            let users = Users::new()?.fetch_all()?;
            if users.is_empty() {
                msg_info!(Message::UsersNotFound);
                return Ok(());
            }
            View::users(&users)
        }
    }
}
