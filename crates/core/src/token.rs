//! Random hex tokens.

use rand::RngCore;

/// Bytes of entropy behind each token.
pub const TOKEN_BYTES: usize = 32;

/// 64 lowercase hex characters encoding 32 bytes from a CSPRNG.
pub fn random_hex() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    to_hex(&bytes)
}

fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;

    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
            let _ = write!(out, "{b:02x}");
            out
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_64_lowercase_hex_chars() {
        let token = random_hex();
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn tokens_differ() {
        assert_ne!(random_hex(), random_hex());
    }

    #[test]
    fn hex_encoding_pads_bytes() {
        assert_eq!(to_hex(&[0x00, 0x0f, 0xab, 0xff]), "000fabff");
    }
}
