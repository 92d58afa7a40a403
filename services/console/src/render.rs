use std::fmt::Display;
use std::io::{self, Write};

/// Writes one item per line, or `none` when there is nothing to show.
pub(crate) fn write_lines<W, I>(out: &mut W, items: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    let mut written = 0;
    for item in items {
        writeln!(out, "{item}")?;
        written += 1;
    }

    if written == 0 {
        writeln!(out, "none")?;
    }
    Ok(written)
}
