use std::{collections::VecDeque, io, io::BufRead};

use tracing::warn;

/// Whitespace-delimited tokens pulled from a line-oriented reader.
///
/// Lines are read lazily, so an interactive reader is only consulted once
/// the tokens of the previous line are used up. A line that is not valid
/// UTF-8 ends the stream.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
    exhausted: bool,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
            exhausted: false,
        }
    }

    /// Drop what is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.exhausted {
                return None;
            }
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => self.exhausted = true,
                Ok(_) => self
                    .pending
                    .extend(self.line.split_whitespace().map(str::to_owned)),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!(error = %e, "input is not valid UTF-8; stopping");
                    self.exhausted = true;
                }
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn collect(input: &str) -> Vec<String> {
        Tokens::new(Cursor::new(input))
            .collect::<io::Result<_>>()
            .unwrap()
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(collect("  a b\n\n\tc  \r\nd"), ["a", "b", "c", "d"]);
        assert!(collect("").is_empty());
    }

    #[test]
    fn discard_skips_rest_of_line() {
        let mut tokens = Tokens::new(Cursor::new("1 2 3\n4\n"));
        assert_eq!(tokens.next().unwrap().unwrap(), "1");
        tokens.discard_line();
        assert_eq!(tokens.next().unwrap().unwrap(), "4");
        assert!(tokens.next().is_none());
    }

    #[test]
    fn invalid_utf8_ends_stream() {
        let input: &[u8] = b"1 2\n3 \xff\xfe\n4\n";
        let tokens: Vec<String> = Tokens::new(input).collect::<io::Result<_>>().unwrap();
        assert_eq!(tokens, ["1", "2"]);
    }
}
