use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    let sequence = encode_osc52(text);

    let mut stdout = io::stdout();
    stdout
        .write_all(sequence.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|_| ClipboardError::WriteError)
}

/// OSC 52 "set clipboard" sequence, BEL terminated
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_osc52_wraps_base64() {
        assert_eq!(encode_osc52("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_encode_osc52_empty() {
        assert_eq!(encode_osc52(""), "\x1b]52;c;\x07");
    }

    #[test]
    fn test_encode_osc52_unicode_round_trips() {
        let text = "√2 ≈ 1.414";
        let encoded = encode_osc52(text);
        let payload = encoded
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .unwrap();

        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), text);
    }
}
