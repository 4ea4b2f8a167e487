use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use maillist_lib::ValidationMode;
use maillist_lib::logging::LogArgs;
use maillist_lib::verify::{DEFAULT_WORKERS, INVALID_FILE, VALID_FILE, VerifyOptions};

/// Verify email validity and DNS records.
#[derive(Parser)]
#[command(name = "maillist-verify", version)]
pub struct Cli {
    /// fichier texte d'entrée (une adresse par ligne)
    pub file: PathBuf,

    /// nombre de threads parallèles
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// règles de la partie locale
    #[arg(long, value_enum, default_value_t = ModeArg::Strict)]
    pub mode: ModeArg,

    /// syntaxe seulement, sans requête DNS
    #[arg(long)]
    pub no_deliverability: bool,

    /// timeout par requête DNS (ms, 0 = valeur système)
    #[arg(long = "timeout-ms", default_value_t = 5_000)]
    pub timeout_ms: u64,

    /// fichier des adresses valides
    #[arg(long, default_value = VALID_FILE)]
    pub valid_out: PathBuf,

    /// fichier des adresses invalides (`email | Reason: ...`)
    #[arg(long, default_value = INVALID_FILE)]
    pub invalid_out: PathBuf,

    /// écrit chaque résultat en NDJSON (feature `with-serde`)
    #[arg(long)]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn verify_options(&self) -> VerifyOptions {
        VerifyOptions {
            workers: self.workers,
            mode: self.mode.into(),
            check_deliverability: !self.no_deliverability,
            dns_timeout: (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms)),
            valid_path: self.valid_out.clone(),
            invalid_path: self.invalid_out.clone(),
            ..VerifyOptions::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// dot-atom uniquement
    Strict,
    /// accepte aussi une chaîne entre guillemets
    Relaxed,
}

impl From<ModeArg> for ValidationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Strict => ValidationMode::Strict,
            ModeArg::Relaxed => ValidationMode::Relaxed,
        }
    }
}
