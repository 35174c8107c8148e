//! phonopath 命令行入口，子命令实现见 `phonopath::commands`。

use clap::Parser;
use phonopath::cli::Cli;
use phonopath::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
