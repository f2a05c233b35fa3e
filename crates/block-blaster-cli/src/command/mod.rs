use clap::Parser;

use self::play::PlayArg;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Falling-block puzzle game for the terminal", long_about = None)]
pub struct CommandArgs {
    #[command(flatten)]
    play: PlayArg,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    play::run(&args.play)
}
