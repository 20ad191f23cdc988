//! Blocking prompt/choice boundary with the user.
//!
//! - [`Prompter`]: the operations the application loop depends on
//! - [`LinePrompter`]: line-oriented implementation over any writer
//! - [`Interrupt`]: delivers Ctrl-C / SIGTERM into a waiting prompt

mod interrupt;
mod line;

pub use interrupt::{Interrupt, InterruptTrigger, listen_for_signals};
pub use line::{LinePrompter, stdin_lines};

use crate::error::Result;

/// Interaction contract used by the application loop.
///
/// Every method may fail with [`PrioError::Interrupted`](crate::error::PrioError::Interrupted)
/// when a shutdown signal arrives or input runs out; that is the only way a
/// prompt ends without an answer.
#[allow(async_fn_in_trait)]
pub trait Prompter {
    /// Show `prompt` and return the next line of input without its newline.
    async fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Show `prompt` and a 1-based numbered menu of `options`, re-prompting
    /// until a valid number is entered. Returns the 0-based index.
    async fn pick(&mut self, prompt: &str, options: &[&str]) -> Result<usize>;

    /// Write text to the output stream.
    fn say(&mut self, text: &str) -> Result<()>;
}

/// Parse a 1-based menu choice into a 0-based index.
pub fn parse_choice(input: &str, option_count: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=option_count).contains(n))
        .map(|n| n - 1)
}
