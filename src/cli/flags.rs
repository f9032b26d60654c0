use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use passcraft::settings::Settings;

/// Generate a secure, random password.
#[derive(Parser, Debug, Default)]
#[command(name = "passcraft", version, about)]
pub struct CliFlags {
    /// Desired password length (default: 16).
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Exclude lowercase letters (a-z).
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude uppercase letters (A-Z).
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude digits (0-9).
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude symbols. Cannot be combined with --custom-symbols.
    #[arg(long)]
    pub no_symbols: bool,

    /// Use this set of symbols instead of ASCII punctuation.
    #[arg(long, value_name = "SET")]
    pub custom_symbols: Option<String>,

    /// Include spaces.
    #[arg(long)]
    pub include_spaces: bool,

    /// Build the password from dictionary words (passphrase mode).
    #[arg(long)]
    pub dictionary: bool,

    /// Comma-separated word file for dictionary mode (needs --dictionary or saved dictionary mode).
    #[arg(long, value_name = "PATH")]
    pub dictionary_file: Option<PathBuf>,

    /// Number of passwords to generate.
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Append passwords to a file instead of printing them.
    #[arg(short, long, value_name = "PATH", conflicts_with = "clipboard")]
    pub output: Option<PathBuf>,

    /// Copy passwords to the clipboard.
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Draw every random value from /dev/urandom.
    #[arg(short, long, conflicts_with = "seed")]
    pub urandom: bool,

    /// Reproducible output from a fixed seed. Testing only.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Start from saved settings instead of built-in defaults.
    #[arg(short, long)]
    pub saved: bool,

    /// Save the effective settings as the new saved defaults.
    #[arg(long)]
    pub save: bool,

    /// Print an entropy summary after generating.
    #[arg(long)]
    pub stats: bool,

    /// Suppress warnings and non-essential output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    /// Overlay explicit flags on `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(len) = self.length {
            settings.length = len;
        }
        if let Some(num) = self.number {
            settings.number = num;
        }

        if self.no_lowercase {
            settings.lowercase = false;
        }
        if self.no_uppercase {
            settings.uppercase = false;
        }
        if self.no_digits {
            settings.digits = false;
        }
        if self.no_symbols {
            settings.symbols = false;
            // a saved custom set does not outlive an explicit --no-symbols
            if self.custom_symbols.is_none() {
                settings.custom_symbols = None;
            }
        }
        if let Some(ref symbols) = self.custom_symbols {
            settings.custom_symbols = Some(symbols.clone());
        }
        if self.include_spaces {
            settings.spaces = true;
        }

        if self.dictionary {
            settings.dictionary = true;
        }
        if let Some(ref path) = self.dictionary_file {
            settings.dictionary_file = Some(path.clone());
        }
    }

    /// Flag combinations that only become invalid once saved settings are applied.
    pub fn usage_error(&self, settings: &Settings) -> Option<clap::Error> {
        if self.dictionary_file.is_some() && !settings.dictionary {
            return Some(Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "--dictionary-file needs dictionary mode: pass --dictionary or use -s with saved dictionary mode",
            ));
        }
        None
    }
}
