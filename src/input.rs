use std::io::{BufRead, Write};

use anyhow::Context;

pub const PROMPT: &str = "Please enter a postal code";

/// Prompt on `output` and read the first whitespace-delimited token from `input`.
///
/// Blank lines are skipped. Running out of input before any token shows up is an error.
pub fn read_postal_code<R: BufRead, W: Write>(mut input: R, mut output: W) -> anyhow::Result<String> {
    writeln!(output, "{PROMPT}").context("fail to write prompt")?;
    output.flush().context("fail to write prompt")?;

    let mut line = String::new();
    loop {
        line.clear();
        let read = input
            .read_line(&mut line)
            .context("fail to read postal code from input")?;
        if read == 0 {
            anyhow::bail!("no postal code given, input closed");
        }

        if let Some(token) = first_token(&line) {
            return Ok(token.to_string());
        }
    }
}

/// The postal code part of a line: its first whitespace-delimited word.
pub fn first_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}
