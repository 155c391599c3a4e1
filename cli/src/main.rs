mod commands;
mod terminal;

use appctl_common::config::Config;
use commands::{CommandLine, Commands, create};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg: Config = commands.config();

    match commands.command {
        Commands::Create { app_name, app_type } => {
            print::header("creating application", cfg.quiet);
            create::create(app_name, app_type, &cfg).await
        }
    }
}
