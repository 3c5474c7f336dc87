use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

/// Result writer over an output stream.
pub struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    Json,
    Normal,
}

/// The two labeled integers produced by the analysis.
#[derive(Serialize)]
pub struct Results {
    pub part1: usize,
    pub part2: usize,
}

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Part 1: {}", self.part1)?;
        write!(f, "Part 2: {}", self.part2)
    }
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    /// Emit the final results.
    pub fn results(&mut self, results: &Results) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Result,
                    data: results,
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{results}")?;
            }
        }

        Ok(())
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Result,
}
