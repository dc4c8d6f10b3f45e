//! Output handling for the CLI
//!
//! stdout carries exactly the compiled validator, one line.
//! Logs go to stderr.

use std::io::{self, Write};

use super::errors::CliResult;

/// Write the compiled output to stdout
pub fn write_output(text: &str) -> CliResult<()> {
    let stdout = io::stdout();
    write_line(&mut stdout.lock(), text)
}

fn write_line<W: Write>(writer: &mut W, text: &str) -> CliResult<()> {
    writeln!(writer, "{}", text)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_appends_newline() {
        let mut buffer = Vec::new();
        write_line(&mut buffer, "lambda var_1: True").unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "lambda var_1: True\n");
    }
}
