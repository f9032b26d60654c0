use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod terminal;

fn main() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };
    init_logging();

    let flags = cli::CliFlags::parse();
    std::process::exit(cli::run(flags));
}

/// Diagnostics go to stderr, filtered by `PASSCRAFT_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("PASSCRAFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
