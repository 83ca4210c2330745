use crate::types::Selection;
use colored::*;
use log::debug;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// Asks the operator to pick one of `choices`.
pub trait Selector {
    async fn select(&mut self, message: &str, choices: &[String]) -> io::Result<Selection>;
}

/// Numbered list on a terminal. Ctrl-C or end of input cancels.
pub struct TerminalSelector<R, W> {
    input: R,
    output: W,
}

impl TerminalSelector<BufReader<Stdin>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), io::stdout())
    }
}

impl<R, W> TerminalSelector<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn render(&mut self, message: &str, choices: &[String]) -> io::Result<()> {
        writeln!(self.output, "{} {}", "?".green(), message.bold())?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {:>3}) {}", i + 1, choice)?;
        }
        self.ask(choices.len())
    }

    fn ask(&mut self, count: usize) -> io::Result<()> {
        write!(self.output, "Enter a number (1-{}): ", count)?;
        self.output.flush()
    }

    /// `None` on end of input.
    async fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal?;
                debug!("Prompt interrupted");
                Ok(None)
            }
            read = self.input.read_line(&mut line) => {
                if read? == 0 {
                    Ok(None)
                } else {
                    Ok(Some(line.trim().to_string()))
                }
            }
        }
    }
}

impl<R, W> Selector for TerminalSelector<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    async fn select(&mut self, message: &str, choices: &[String]) -> io::Result<Selection> {
        if choices.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "nothing to choose from"));
        }
        self.render(message, choices)?;

        loop {
            let Some(answer) = self.read_answer().await? else {
                writeln!(self.output)?;
                return Ok(Selection::Cancelled);
            };

            if let Some(choice) = resolve(&answer, choices) {
                debug!("Operator chose {}", choice);
                return Ok(Selection::Chosen(choice.to_string()));
            }

            if !answer.is_empty() {
                writeln!(self.output, "{} {}", "Not a valid choice:".red(), answer)?;
            }
            self.ask(choices.len())?;
        }
    }
}

/// Accepts a 1-based index or an exact name.
fn resolve<'a>(answer: &str, choices: &'a [String]) -> Option<&'a str> {
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| choices.get(i)).map(String::as_str);
    }
    choices.iter().find(|c| c.as_str() == answer).map(String::as_str)
}
