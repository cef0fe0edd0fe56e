//! Console output helpers.

use std::io::{self, Write};

/// Write `text` followed by a carriage return and flush, so the next call
/// overwrites it on the same terminal line.
pub fn print_string_in_line<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    write!(writer, "{}\r", text)?;
    writer.flush()
}

/// Program banner with the copyright range ending at `year`.
pub fn welcome_banner(name: &str, year: i32) -> String {
    format!(
        "\nmoltool - {}\nCopyright © 2019-{} moltool contributors. All rights reserved.\n",
        name, year
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_string_in_line() {
        let mut out = Vec::new();
        print_string_in_line(&mut out, "42%").unwrap();
        print_string_in_line(&mut out, "43%").unwrap();
        assert_eq!(out, b"42%\r43%\r");
    }

    #[test]
    fn test_welcome_banner() {
        let banner = welcome_banner("Structure Finder", 2026);
        assert!(banner.contains("moltool - Structure Finder\n"));
        assert!(banner.contains("2019-2026"));
    }
}
