use clap::Args;
use tracing_subscriber::EnvFilter;

/// Verbosity flags shared by the command-line tools.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LogArgs {
    /// plus de logs sur stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// seulement les erreurs
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl LogArgs {
    pub fn init(&self) {
        init(self.verbose, self.quiet);
    }
}

/// Installs the stderr `tracing` subscriber for the command-line tools.
///
/// `RUST_LOG` wins when set; otherwise the level comes from the
/// `-q`/`-v` flags (error, warn, info, debug).
pub fn init(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},trust_dns_proto=warn,trust_dns_resolver=warn"
        ))
    });

    // a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
