use super::{Interrupt, Prompter, parse_choice};
use crate::error::{PrioError, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tokio::sync::mpsc;

/// Read stdin line by line on a background thread.
///
/// A plain thread is used because a blocking stdin read cannot be
/// cancelled; the thread is simply abandoned at exit. The channel closes on
/// end of input or a read error.
pub fn stdin_lines() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        forward_lines(io::stdin().lock(), &tx);
        tracing::debug!("stdin closed");
    });
    rx
}

/// Send each line of `reader` to `tx` until end of input, a read error, or
/// the receiver going away. Bytes that are not valid UTF-8 are replaced
/// rather than ending the stream.
fn forward_lines<R: BufRead>(mut reader: R, tx: &mpsc::UnboundedSender<String>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                if tx.send(decode_line(&buf)).is_err() {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read from stdin");
                break;
            }
        }
    }
}

fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

/// Prompter that writes menus to `out` and takes answers from a stream of
/// lines.
pub struct LinePrompter<W: Write> {
    lines: mpsc::UnboundedReceiver<String>,
    out: W,
    interrupt: Interrupt,
}

impl LinePrompter<io::Stdout> {
    pub fn stdio(interrupt: Interrupt) -> Self {
        Self::new(stdin_lines(), io::stdout(), interrupt)
    }
}

impl<W: Write> LinePrompter<W> {
    pub fn new(lines: mpsc::UnboundedReceiver<String>, out: W, interrupt: Interrupt) -> Self {
        Self {
            lines,
            out,
            interrupt,
        }
    }

    /// End of input counts as an interrupt.
    async fn next_line(&mut self) -> Result<String> {
        tokio::select! {
            biased;
            _ = self.interrupt.fired() => Err(PrioError::Interrupted),
            line = self.lines.recv() => line.ok_or(PrioError::Interrupted),
        }
    }
}

impl<W: Write> Prompter for LinePrompter<W> {
    async fn ask(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.out, "{prompt}")?;
        self.out.flush()?;
        self.next_line().await
    }

    async fn pick(&mut self, prompt: &str, options: &[&str]) -> Result<usize> {
        loop {
            writeln!(self.out, "{prompt}: ")?;
            for (index, option) in options.iter().enumerate() {
                writeln!(self.out, "{}. {}", index + 1, option)?;
            }
            self.out.flush()?;

            let input = self.next_line().await?;
            if let Some(index) = parse_choice(&input, options.len()) {
                return Ok(index);
            }

            tracing::debug!(input = %input, options = options.len(), "Rejected menu choice");
            writeln!(self.out, "{}\n", "Invalid input".yellow())?;
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}
