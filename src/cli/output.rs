//! Batch generation and output routing.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use rand::RngCore;
use zeroize::{Zeroize, Zeroizing};

use passcraft::{Category, GenerationError, Policy, Report, generate_with_fallback};

const BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that wipes its buffer after every flush.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        let _ = self.inner.flush();
    }
}

/// Where generated passwords go.
pub enum Sink {
    Stdout,
    File(File),
    /// Collected for the clipboard.
    Buffer(Zeroizing<String>),
}

impl Sink {
    /// Open `path` for appending, creating missing parent directories.
    pub fn append_to(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Sink::File(file))
    }
}

/// Error from a batch run.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

/// What a batch run produced, minus the passwords themselves.
#[derive(Debug, Default)]
pub struct Summary {
    pub count: usize,
    /// Report of the last password generated.
    pub last: Option<Report>,
    /// Categories dropped by the length cut in any password.
    pub dropped: Vec<Category>,
    pub cut_words: usize,
}

impl Summary {
    fn record(&mut self, report: &Report) {
        self.count += 1;
        for &category in &report.dropped {
            if !self.dropped.contains(&category) {
                self.dropped.push(category);
            }
        }
        self.cut_words += report.cut_words;
        self.last = Some(report.clone());
    }
}

/// Generate `count` passwords into `sink`, one per line.
pub fn generate_batch(
    policy: &Policy,
    fallback: &[&str],
    count: usize,
    rng: &mut dyn RngCore,
    sink: &mut Sink,
) -> Result<Summary, BatchError> {
    let mut summary = Summary::default();

    match sink {
        Sink::Stdout => {
            let stdout = io::stdout();
            let mut out = SecureBufWriter::new(stdout.lock());
            write_lines(policy, fallback, count, rng, &mut out, &mut summary)?;
            out.flush()?;
        }
        Sink::File(file) => {
            let mut out = SecureBufWriter::new(file);
            write_lines(policy, fallback, count, rng, &mut out, &mut summary)?;
            out.flush()?;
        }
        Sink::Buffer(passwords) => {
            for _ in 0..count {
                let generated = generate_with_fallback(policy, fallback, rng)?;
                summary.record(generated.report());
                let password = generated.into_password();
                passwords.push_str(&password);
                passwords.push('\n');
            }
        }
    }

    Ok(summary)
}

fn write_lines<W: Write>(
    policy: &Policy,
    fallback: &[&str],
    count: usize,
    rng: &mut dyn RngCore,
    out: &mut W,
    summary: &mut Summary,
) -> Result<(), BatchError> {
    let mut line = Vec::with_capacity(policy.target_length * 4 + 1);
    for _ in 0..count {
        let generated = generate_with_fallback(policy, fallback, rng)?;
        summary.record(generated.report());

        line.extend_from_slice(generated.as_str().as_bytes());
        line.push(b'\n');
        let written = out.write_all(&line);
        line.zeroize();
        written?;
    }
    Ok(())
}
