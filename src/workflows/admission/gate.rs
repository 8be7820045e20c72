use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Question asked before every stage.
pub const STAGE_PROMPT: &str = "Proceed to the next filter? (yes/no)";

/// Operator answer at a stage gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Decline,
    /// Input ran out before an answer arrived.
    Exhausted,
}

impl Confirmation {
    /// Only a case-insensitive "no" declines; anything else, blank included, proceeds.
    pub fn from_reply(reply: &str) -> Self {
        let reply = reply.trim_end_matches(['\r', '\n']);
        if reply.eq_ignore_ascii_case("no") {
            Self::Decline
        } else {
            Self::Proceed
        }
    }

    pub fn is_proceed(self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Supplies the continue/abort decision before each stage.
pub trait ConfirmationGate {
    fn confirm(&mut self, prompt: &str) -> io::Result<Confirmation>;
}

/// Prints the prompt and blocks for one line of input.
pub struct ConsoleGate<R, W> {
    input: R,
    output: W,
}

impl<R, W> ConsoleGate<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl ConsoleGate<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> ConfirmationGate for ConsoleGate<R, W>
where
    R: BufRead,
    W: Write,
{
    fn confirm(&mut self, prompt: &str) -> io::Result<Confirmation> {
        writeln!(self.output, "\n{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(Confirmation::Exhausted);
        }
        Ok(Confirmation::from_reply(&String::from_utf8_lossy(&line)))
    }
}

/// Answers every prompt with "yes", echoing the exchange so the transcript reads
/// the same as an interactive run.
pub struct AutoConfirm<W> {
    output: W,
}

impl<W: Write> AutoConfirm<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> ConfirmationGate for AutoConfirm<W> {
    fn confirm(&mut self, prompt: &str) -> io::Result<Confirmation> {
        writeln!(self.output, "\n{prompt}")?;
        writeln!(self.output, "yes")?;
        Ok(Confirmation::Proceed)
    }
}

/// Replays a fixed list of replies; reports `Exhausted` once they run out.
#[derive(Debug, Default, Clone)]
pub struct ScriptedGate {
    replies: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedGate {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl ConfirmationGate for ScriptedGate {
    fn confirm(&mut self, prompt: &str) -> io::Result<Confirmation> {
        self.prompts.push(prompt.to_string());
        Ok(self
            .replies
            .pop_front()
            .map(|reply| Confirmation::from_reply(&reply))
            .unwrap_or(Confirmation::Exhausted))
    }
}
