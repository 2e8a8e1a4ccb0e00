use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use crate::source::Tokens;

/// Outcome of one prompt.
#[derive(Debug, PartialEq)]
pub(crate) enum Answer<T> {
    Value(T),
    /// The token did not parse; carries the token as typed.
    Invalid(String),
    /// Input is exhausted.
    Closed,
}

/// Writes a prompt, then takes the first token of the next non-blank line.
/// Whatever else was typed on that line is discarded.
pub(crate) struct Prompter<R, W> {
    input: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, out: W) -> Self {
        Self {
            input: Tokens::new(input),
            out,
        }
    }

    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub(crate) fn into_output(self) -> W {
        self.out
    }

    pub(crate) fn token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let token = self.input.next().transpose()?;
        self.input.discard_line();
        Ok(token)
    }

    pub(crate) fn parse<T: FromStr>(&mut self, prompt: &str) -> io::Result<Answer<T>> {
        Ok(match self.token(prompt)? {
            None => Answer::Closed,
            Some(token) => match token.parse() {
                Ok(value) => Answer::Value(value),
                Err(_) => Answer::Invalid(token),
            },
        })
    }

    /// Ask until the answer passes `check`; `None` once input is exhausted.
    pub(crate) fn until_valid<T>(
        &mut self,
        prompt: &str,
        check: impl Fn(&str) -> Result<T, String>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(token) = self.token(prompt)? else {
                return Ok(None);
            };
            match check(&token) {
                Ok(value) => return Ok(Some(value)),
                Err(reason) => writeln!(self.out, "Invalid input: {reason}.")?,
            }
        }
    }

    /// Ask a 1/0 question until one of the two is entered.
    pub(crate) fn confirm(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        loop {
            match self.parse::<u8>(prompt)? {
                Answer::Value(1) => return Ok(Some(true)),
                Answer::Value(0) => return Ok(Some(false)),
                Answer::Closed => return Ok(None),
                _ => writeln!(self.out, "Invalid input. Please enter 0 or 1.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<&str>, Vec<u8>> {
        Prompter::new(Cursor::new(input), Vec::new())
    }

    #[test]
    fn takes_first_token_per_line() {
        let mut p = prompter("\n  Ada Byron\nLovelace\n");
        assert_eq!(p.token("first: ").unwrap().as_deref(), Some("Ada"));
        assert_eq!(p.token("last: ").unwrap().as_deref(), Some("Lovelace"));
        assert_eq!(p.token("more: ").unwrap(), None);
        assert_eq!(
            String::from_utf8(p.into_output()).unwrap(),
            "first: last: more: "
        );
    }

    #[test]
    fn parse_reports_bad_tokens() {
        let mut p = prompter("abc\n7\n");
        assert_eq!(
            p.parse::<i64>("n: ").unwrap(),
            Answer::Invalid("abc".into())
        );
        assert_eq!(p.parse::<i64>("n: ").unwrap(), Answer::Value(7));
        assert_eq!(p.parse::<i64>("n: ").unwrap(), Answer::Closed);
    }

    #[test]
    fn confirm_reprompts() {
        let mut p = prompter("2\nyes\n0\n");
        assert_eq!(p.confirm("ok? ").unwrap(), Some(false));
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("Please enter 0 or 1").count(), 2);
    }
}
