use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "job-board",
    about = "Job board API: job postings and candidate applications",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Apply migrations and start the HTTP server (default command)
    Serve(ServeArgs),
    /// Apply pending database migrations and exit
    Migrate,
    /// Insert the demonstration job postings
    Seed(SeedArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured listen address, e.g. 127.0.0.1:8000
    #[arg(long)]
    pub(crate) addr: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SeedArgs {
    /// Delete every existing job (and its applications) before seeding
    #[arg(long)]
    pub(crate) fresh: bool,
}

impl Cli {
    pub(crate) fn command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}
