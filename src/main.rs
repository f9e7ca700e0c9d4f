use clap::Parser;

mod commands;
mod logging;
mod scaffold;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,

    /// Used when no subcommand is given
    #[command(flatten)]
    next: commands::next::Args,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Scaffold the next day (the default)
    Next(commands::next::Args),
    /// Write the starter template
    Template(commands::template::Args),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    match &cli.command {
        Some(Command::Next(args)) => commands::next::entrypoint(args),
        Some(Command::Template(args)) => commands::template::entrypoint(args),
        None => commands::next::entrypoint(&cli.next),
    }
}
