use clap::Parser;
use miette::Result;
use workr::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Role(cmd) => workr::cli::commands::role::run(cmd, &cli.global),
        Commands::Catalog(cmd) => workr::cli::commands::catalog::run(cmd, &cli.global),
        Commands::Browse(args) => workr::cli::commands::browse::run(args, &cli.global),
    }
}
