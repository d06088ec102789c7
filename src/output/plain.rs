//! Plain text formatter

use std::io::{self, Write};

use super::TreeOutput;

/// Writes tree lines, newline-terminated, to the wrapped writer.
pub struct PlainFormatter<W: Write> {
    out: W,
}

impl<W: Write> PlainFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TreeOutput for PlainFormatter<W> {
    fn root_line(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "{}", name)
    }

    fn entry_line(&mut self, prefix: &str, branch: &str, name: &str) -> io::Result<()> {
        writeln!(self.out, "{}{}{}", prefix, branch, name)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
