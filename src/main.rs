use clap::Parser;
use gridatlas::cli::{completions, convert, Cli};
use gridatlas::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        completions::run(shell)?;
        return Ok(());
    }

    let printer = Printer::with_verbosity(cli.verbosity());
    convert::run(&cli.convert, &printer)?;

    Ok(())
}
