use crate::import::Confirm;
use std::io::{self, BufRead, Stderr, StdinLock, Write};
use tracing::warn;

/// Asks on the terminal before anything is written.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl PromptConfirm<StdinLock<'static>, Stderr> {
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), assume_yes)
    }
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            assume_yes,
        }
    }

    fn ask(&mut self, total: u64) -> io::Result<bool> {
        write!(self.output, "Import {total} log lines? [y/N] ")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, total: u64) -> bool {
        if self.assume_yes {
            return true;
        }
        match self.ask(total) {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "confirmation prompt failed");
                false
            }
        }
    }
}
