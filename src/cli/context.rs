//! CLI context - bundles settings, flags, and clipboard state.

use std::io;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use passcraft::corpus;
use passcraft::entropy::EntropySource;
use passcraft::settings::{self, Settings};

use super::output::{BatchError, Sink, generate_batch};
use super::{CliFlags, prompts, quiet};
use crate::terminal;

/// Why a CLI run stopped early.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Batch(#[from] BatchError),
    #[error("could not open output file: {0}")]
    Output(#[source] io::Error),
    #[error("clipboard error: {0}")]
    Clipboard(String),
    /// The user declined a fallback. Not a failure.
    #[error("aborted")]
    Aborted,
}

impl CliError {
    /// Errors that end the run without being reported.
    pub fn is_silent(&self) -> bool {
        match self {
            CliError::Aborted => true,
            CliError::Batch(BatchError::Io(e)) => e.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Build the effective settings: saved or built-in defaults, then explicit flags.
    pub fn new(flags: CliFlags) -> Result<Self, clap::Error> {
        quiet::set(flags.quiet);

        let mut settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        } else {
            Settings::default()
        };
        flags.apply(&mut settings);
        if let Some(err) = flags.usage_error(&settings) {
            return Err(err);
        }

        Ok(Self {
            settings,
            flags,
            clipboard: None,
        })
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        let source = self.entropy_source();
        let mut sink = self.open_sink()?;

        let words = self.load_words();
        let policy = self.settings.policy(words);
        let count = self.settings.number.max(1);
        debug!(count, source = source.name(), "generating batch");

        let mut rng = source.rng();
        let summary = generate_batch(
            &policy,
            corpus::default_words(),
            count,
            rng.as_mut(),
            &mut sink,
        )?;

        prompts::shortfall(policy.target_length, &summary.dropped, summary.cut_words);
        self.finish(sink)?;
        self.handle_save();

        if self.flags.stats
            && !quiet::enabled()
            && let Some(report) = &summary.last
        {
            terminal::print_summary(report, source.name(), summary.count);
        }
        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(&settings::default_path()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    fn entropy_source(&self) -> EntropySource {
        let source = match self.flags.seed {
            Some(seed) => EntropySource::Seeded(seed),
            None if self.flags.urandom => EntropySource::Urandom,
            None => EntropySource::Thread,
        };
        if source.is_reproducible() {
            prompts::seeded_output();
        }
        source
    }

    /// Word file contents, or an empty list meaning "use the built-in corpus".
    fn load_words(&self) -> Vec<String> {
        if !self.settings.dictionary {
            return Vec::new();
        }
        let Some(path) = &self.settings.dictionary_file else {
            return Vec::new();
        };
        corpus::load_words(path).unwrap_or_else(|e| {
            prompts::corpus_fallback(&e);
            Vec::new()
        })
    }

    fn open_sink(&mut self) -> Result<Sink, CliError> {
        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(ctx) => {
                    self.clipboard = Some(ctx);
                    return Ok(Sink::Buffer(Zeroizing::new(String::new())));
                }
                Err(_) => {
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(CliError::Aborted);
                    }
                }
            }
        }

        match &self.flags.output {
            Some(path) => Sink::append_to(path).map_err(CliError::Output),
            None => Ok(Sink::Stdout),
        }
    }

    /// Hand collected passwords to the clipboard and report file output.
    fn finish(&mut self, sink: Sink) -> Result<(), CliError> {
        match sink {
            Sink::Buffer(passwords) => {
                let Some(ctx) = self.clipboard.as_mut() else {
                    return Ok(());
                };
                ctx.set_contents(passwords.to_string())
                    .map_err(|e| CliError::Clipboard(e.to_string()))?;
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied();
            }
            Sink::File(_) => {
                if let Some(path) = &self.flags.output {
                    prompts::passwords_written(self.settings.number.max(1), path);
                }
            }
            Sink::Stdout => {}
        }
        Ok(())
    }
}
