//! The URL-safe text form of a compressed payload.
//!
//! This is base64 with `-` and `_` standing in for `+` and `/`, and with all `=` padding
//! removed. The same text appears in URL fragments and in commit messages, so the alphabet can
//! never change.

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

use crate::error::DecodeError;

const CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::RequireNone)
    .with_decode_allow_trailing_bits(true);

/// URL-safe alphabet, no padding on output, stray low bits in the last symbol ignored the same way
/// browser `atob` ignores them.
pub const ENGINE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, CONFIG);

/// Returns true if the byte is part of the transport alphabet `[A-Za-z0-9_-]`.
#[inline]
pub fn is_transport_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Encode a compressed payload as transport text.
pub fn to_transport_text(payload: &[u8]) -> String {
    ENGINE.encode(payload)
}

/// Decode transport text back into the compressed payload.
///
/// Anything outside the alphabet is rejected up front, including `+`, `/`, and `=`, so the error
/// names the exact character that broke the payload.
pub fn from_transport_text(text: &str) -> Result<Vec<u8>, DecodeError> {
    if let Some((index, character)) = text
        .char_indices()
        .find(|&(_, c)| !c.is_ascii() || !is_transport_byte(c as u8))
    {
        return Err(DecodeError::InvalidCharacter { index, character });
    }
    if text.len() % 4 == 1 {
        return Err(DecodeError::InvalidLength(text.len()));
    }
    ENGINE.decode(text).map_err(|e| DecodeError::Transport(e.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;

    #[test]
    fn alphabet_substitution() {
        // 0xfb 0xff encodes to "+/8=" in standard base64
        assert_eq!(to_transport_text(&[0xfb, 0xff]), "-_8");
        assert_eq!(from_transport_text("-_8").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn padding_is_stripped() {
        assert_eq!(to_transport_text(b"a"), "YQ");
        assert_eq!(to_transport_text(b"ab"), "YWI");
        assert_eq!(to_transport_text(b"abc"), "YWJj");
        assert_eq!(from_transport_text("YQ").unwrap(), b"a");
        assert_eq!(from_transport_text("YWI").unwrap(), b"ab");
    }

    #[test]
    fn random_payloads() {
        let mut rng = rand::thread_rng();
        for len in 0..300 {
            let payload: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let text = to_transport_text(&payload);
            assert!(text.bytes().all(is_transport_byte));
            assert!(!text.contains(&['+', '/', '='][..]));
            assert_eq!(from_transport_text(&text).unwrap(), payload);
        }
    }

    #[test]
    fn rejects_standard_alphabet() {
        assert_eq!(
            from_transport_text("ab+c").unwrap_err(),
            DecodeError::InvalidCharacter {
                index: 2,
                character: '+'
            }
        );
        assert_eq!(
            from_transport_text("ab/c").unwrap_err(),
            DecodeError::InvalidCharacter {
                index: 2,
                character: '/'
            }
        );
        assert_eq!(
            from_transport_text("YQ==").unwrap_err(),
            DecodeError::InvalidCharacter {
                index: 2,
                character: '='
            }
        );
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(matches!(
            from_transport_text("YWJjé").unwrap_err(),
            DecodeError::InvalidCharacter { character: 'é', .. }
        ));
        assert!(matches!(
            from_transport_text("YW Jj").unwrap_err(),
            DecodeError::InvalidCharacter { character: ' ', .. }
        ));
    }

    #[test]
    fn rejects_impossible_length() {
        assert_eq!(
            from_transport_text("YWJjZ").unwrap_err(),
            DecodeError::InvalidLength(5)
        );
    }

    #[test]
    fn tolerates_trailing_bits() {
        // "YR" has non-zero bits past the single encoded byte
        assert_eq!(from_transport_text("YR").unwrap(), b"a");
    }
}
