use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sheetbot")]
#[command(author, version, about = "Telegram bot that relays commands to a Google spreadsheet", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (default when no subcommand is given)
    Run {
        /// Also serve the payment page and static files
        #[arg(long)]
        with_web: bool,
    },

    /// Serve the payment page and static files only
    Serve {
        /// Port to listen on (overrides WEB_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory to serve files from (overrides WEB_ROOT)
        #[arg(short, long)]
        root: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The subcommand to run, `run` without the web server when none was given.
    pub fn command_or_default(self) -> Commands {
        self.command.unwrap_or(Commands::Run { with_web: false })
    }
}
