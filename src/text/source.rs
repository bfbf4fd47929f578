use std::io::{BufRead, Cursor};

use crate::foundation::error::{CarverError, CarverResult};

/// Number of spaces a tab expands to. Tab stops are not aligned.
pub const TAB_WIDTH: usize = 4;

/// Where the lines to render come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextSource {
    Literal(String),
    Stdin,
}

impl TextSource {
    /// An empty literal means "read stdin".
    pub fn from_arg(text: Option<String>) -> Self {
        match text {
            Some(t) if !t.is_empty() => Self::Literal(t),
            _ => Self::Stdin,
        }
    }

    pub fn read_lines(&self) -> CarverResult<Vec<String>> {
        match self {
            Self::Literal(text) => read_lines(Cursor::new(text.as_bytes())),
            Self::Stdin => read_lines(std::io::stdin().lock()),
        }
    }
}

/// Read every line from `reader`, expanding tabs.
///
/// Lines end at `\n`; a trailing `\r` is dropped and a final newline does not produce an
/// empty last line. Bytes that are not valid UTF-8 become U+FFFD. Any read error aborts
/// without returning the lines read so far.
pub fn read_lines<R: BufRead>(mut reader: R) -> CarverResult<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| CarverError::io(format!("read text: {e}")))?;
        if n == 0 {
            break;
        }
        let mut line = buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
        lines.push(expand_tabs(&String::from_utf8_lossy(line)));
    }
    Ok(lines)
}

pub fn expand_tabs(line: &str) -> String {
    line.replace('\t', &" ".repeat(TAB_WIDTH))
}

#[cfg(test)]
#[path = "../../tests/unit/text/source.rs"]
mod tests;
