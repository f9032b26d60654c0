mod context;
mod flags;
mod output;
pub mod prompts;
mod quiet;

pub use context::Context;
pub use flags::CliFlags;

/// Run the CLI and return the process exit code.
pub fn run(flags: CliFlags) -> i32 {
    let mut ctx = match Context::new(flags) {
        Ok(ctx) => ctx,
        Err(usage) => {
            let _ = usage.print();
            return usage.exit_code();
        }
    };
    match ctx.run() {
        Ok(()) => 0,
        Err(e) if e.is_silent() => 0,
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            1
        }
    }
}
