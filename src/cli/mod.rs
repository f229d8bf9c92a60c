//! Non-interactive command line: generate, check, history.

mod args;
mod context;
mod prompts;
pub mod quiet;
mod report;

pub use args::Args;
use context::Context;

/// Run with parsed arguments and return the process exit code.
pub fn run(args: Args) -> i32 {
    quiet::set(args.quiet);
    Context::new(args).run()
}
