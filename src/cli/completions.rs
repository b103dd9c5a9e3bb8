//! Shell completions generation.

use std::io::Write;

use clap_complete::Shell;

/// Write completions for `shell` to `out`.
pub fn generate(shell: Shell, out: &mut dyn Write) {
    let mut cmd = <super::Cli as clap::CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "gridatlas", out);
}

pub fn run(shell: Shell) -> crate::error::Result<()> {
    generate(shell, &mut std::io::stdout());
    Ok(())
}
