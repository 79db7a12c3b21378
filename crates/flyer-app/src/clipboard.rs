//! Terminal clipboard via the OSC 52 escape sequence

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Escape sequence asking the terminal to place `text` on the system clipboard
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

/// Write the OSC 52 sequence for `text` and flush
pub fn copy_to<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

/// Copy `text` through the controlling terminal
pub fn copy(text: &str) -> std::io::Result<()> {
    copy_to(&mut std::io::stdout().lock(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence_encodes_utf8() {
        let seq = osc52_sequence("¡Sumate!");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));

        let payload = &seq["\x1b]52;c;".len()..seq.len() - 1];
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "¡Sumate!");
    }

    #[test]
    fn test_copy_to_writes_sequence() {
        let mut buf = Vec::new();
        copy_to(&mut buf, "#a #b").unwrap();
        assert_eq!(buf, osc52_sequence("#a #b").into_bytes());
    }
}
