//! Property-based tests for the LZSS implementation
//!
//! These tests use randomized inputs to verify correctness across a wide range
//! of data patterns and edge cases.

use lzss::{compress, expand, tokenize, Token, TokenDecoder, MAX_DISTANCE, MAX_LENGTH};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_decompression_never_panics(data in prop::collection::vec(any::<u8>(), 0..1000)) {
        // random bytes are rarely a valid stream, but decoding must fail cleanly
        let _ = expand(&data);
        let _ = TokenDecoder::new(&data).count();
    }
}

proptest! {
    #[test]
    fn test_round_trip(data in prop::collection::vec(any::<u8>(), 0..2000)) {
        let compressed = compress(&data);
        let decompressed = expand(&compressed).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(&data[..], &decompressed[..]);
    }
}

proptest! {
    #[test]
    fn test_ascii_round_trip(
        data in prop::collection::vec(prop::char::range(' ', '~'), 10..500)
    ) {
        let ascii_bytes: Vec<u8> = data.into_iter().map(|c| c as u8).collect();
        let compressed = compress(&ascii_bytes);
        let decompressed = expand(&compressed).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(&ascii_bytes[..], &decompressed[..]);
    }
}

proptest! {
    #[test]
    fn test_repetitive_patterns(
        pattern in prop::collection::vec(any::<u8>(), 1..20),
        repeat_count in 2..50u8
    ) {
        let mut data = Vec::new();
        for _ in 0..repeat_count {
            data.extend_from_slice(&pattern);
        }

        let compressed = compress(&data);
        let decompressed = expand(&compressed).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(&data[..], &decompressed[..]);

        // worst case is one flag byte per eight literals
        prop_assert!(compressed.len() <= data.len() + data.len().div_ceil(8));
    }
}

proptest! {
    #[test]
    fn test_tokens_respect_limits(data in prop::collection::vec(0u8..4, 0..3000)) {
        let tokens = tokenize(&data);
        let mut position = 0usize;

        for token in &tokens {
            if let Token::Reference { distance, length } = *token {
                prop_assert!((1..=MAX_DISTANCE).contains(&distance));
                prop_assert!((3..=MAX_LENGTH).contains(&length));
                prop_assert!(distance <= position);
            }
            position += token.decoded_len();
        }
        prop_assert_eq!(position, data.len());
    }
}

proptest! {
    #[test]
    fn test_encoded_tokens_decode_back(data in prop::collection::vec(0u8..8, 0..1000)) {
        let tokens = tokenize(&data);
        let decoded: Vec<Token> = TokenDecoder::new(&compress(&data))
            .collect::<lzss::Result<_>>()
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(tokens, decoded);
    }
}

proptest! {
    #[test]
    fn test_compression_deterministic(data in prop::collection::vec(any::<u8>(), 0..500)) {
        prop_assert_eq!(compress(&data), compress(&data));
    }
}

proptest! {
    #[test]
    fn test_single_byte_runs(byte in any::<u8>(), len in 1usize..400) {
        let data = vec![byte; len];
        let tokens = tokenize(&data);

        prop_assert_eq!(tokens[0], Token::Literal(byte));
        // one literal, then as few distance-1 references as the length cap allows
        let remaining = len - 1;
        let expected = match remaining {
            0 => 1,
            r if r % MAX_LENGTH >= 3 || r % MAX_LENGTH == 0 => 1 + r.div_ceil(MAX_LENGTH),
            r => 1 + r / MAX_LENGTH + r % MAX_LENGTH,
        };
        prop_assert_eq!(tokens.len(), expected);
    }
}
