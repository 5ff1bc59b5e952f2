use std::process;

use clap::Parser;
use colored::Colorize;

use setup_mobiledev::executor::SystemRunner;
use setup_mobiledev::installer::Installer;
use setup_mobiledev::platform::Platform;
use setup_mobiledev::prompt::ConsolePrompter;
use setup_mobiledev::{log_error, log_warn, logger};

#[derive(Parser)]
#[command(name = "setup-mobiledev")]
#[command(about = "Set up a React Native development environment with ease", long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.debug);

    let mut installer = Installer::new(
        Platform::detect(),
        Box::new(SystemRunner),
        Box::new(ConsolePrompter),
    );

    // Environment gaps the installer cannot remediate go out on the
    // warning path; everything else is the generic error path. Both
    // exit with code 1.
    let code = match installer.run() {
        Ok(()) => 0,
        Err(err) if err.is_unsupported_environment() => {
            log_warn!("{err}");
            1
        }
        Err(err) => {
            log_error!("Setup failed: {err}");
            1
        }
    };
    process::exit(code);
}
