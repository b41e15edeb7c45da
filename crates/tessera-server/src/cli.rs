use clap::Parser;

/// Tessera: serve the active site theme.
#[derive(Parser, Debug)]
#[command(name = "tessera-server", version, about)]
pub struct Args {
    /// Port to listen on.
    #[arg(short, long, default_value_t = 4321)]
    pub port: u16,

    /// Themes root directory (defaults to $THEMES_ROOT, then ./theme).
    #[arg(long)]
    pub themes_root: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
