use std::fmt::Display;
use std::io::{self, Write};

/// Line-oriented writer for the plain text report.
///
/// Every helper writes exactly one line. The output carries no color codes so
/// it can be redirected and diffed.
pub struct Printer<W: Write> {
    out: W,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "=== {msg} ===")
    }

    pub fn line(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "{msg}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// `1. name (detail)`
    pub fn ranked(&mut self, rank: usize, name: &str, detail: impl Display) -> io::Result<()> {
        writeln!(self.out, "{rank}. {name} ({detail})")
    }

    pub fn bullet(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "- {msg}")
    }

    /// Continuation of the previous bullet, aligned under its text.
    pub fn continuation(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.out, "  {msg}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
