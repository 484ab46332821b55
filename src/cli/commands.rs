use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nicol", version, about = "Nicol fan-out summarizer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Run one fan-out/summarize cycle from the terminal
    Ask(AskArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Bind port
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,
}

#[derive(Args, Clone)]
pub struct AskArgs {
    /// The prompt sent to every provider
    pub prompt: String,
}
