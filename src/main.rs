use std::io::Read;

use anyhow::{Context, Result};
use maze::cli::{Opts, Results};

fn main() -> Result<()> {
    let opts = Opts::parse()?;

    let mut sketch = Vec::new();
    std::io::stdin()
        .read_to_end(&mut sketch)
        .context("reading maze sketch from stdin")?;

    let (farthest, enclosed) = maze::solve(&sketch)?;

    let mut o = opts.output();

    o.results(&Results {
        part1: farthest,
        part2: enclosed,
    })?;

    Ok(())
}
