use anyhow::Context;
use hiphop_hangman::cli::{CliInterface, parse_cli};
use hiphop_hangman::game_loop::farewell;
use hiphop_hangman::tui::TuiInterface;
use hiphop_hangman::{WordSupply, game_loop, logging};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    let log_output = logging::choose_output(cli.log_file.as_deref(), !cli.cli);
    logging::init(cli.verbose, &log_output).context("failed to initialise logging")?;

    let supply = WordSupply::discover(cli.wordlist_dir);
    let stats = if cli.cli {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&supply, &mut interface)
    } else {
        let mut interface = TuiInterface::new().context("failed to set up the terminal")?;
        let stats = game_loop(&supply, &mut interface);
        drop(interface);
        for line in farewell(&stats) {
            println!("{line}");
        }
        stats
    };

    log::info!("Session over: {}", stats.summary());
    Ok(())
}
