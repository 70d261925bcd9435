use std::collections::VecDeque;

use tokengen::entropy::{EntropyError, EntropySource};
use tokengen::token::{Alphabet, DEFAULT_LENGTH, TokenError, TokenGenerator, generate, generate_with};

/// Serves a fixed byte sequence, failing once it runs dry.
struct ScriptedSource {
    bytes: VecDeque<u8>,
}

impl ScriptedSource {
    fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl EntropySource for ScriptedSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        if self.bytes.len() < buf.len() {
            return Err(EntropyError::Exhausted);
        }

        for slot in buf.iter_mut() {
            *slot = self.bytes.pop_front().unwrap();
        }

        Ok(())
    }
}

#[test]
fn default_call_yields_44_alphanumeric_symbols() {
    let token = generate().unwrap();

    assert_eq!(token.chars().count(), DEFAULT_LENGTH);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn generate_with_respects_length_and_alphabet() {
    let alphabet = Alphabet::hex();

    let token = generate_with(20, &alphabet).unwrap();

    assert_eq!(token.chars().count(), 20);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_with_zero_length_yields_empty_token() {
    let token = generate_with(0, &Alphabet::default()).unwrap();

    assert_eq!(token, "");
}

#[test]
fn consecutive_default_tokens_differ() {
    let a = generate().unwrap();
    let b = generate().unwrap();

    assert_ne!(a, b);
}

#[test]
fn bound_configuration_holds_across_calls() {
    let generator = TokenGenerator::new(10, Alphabet::new("AB").unwrap());

    for _ in 0..50 {
        let token = generator.get().unwrap();

        assert_eq!(token.chars().count(), 10);
        assert!(token.chars().all(|c| c == 'A' || c == 'B'));
    }
}

#[test]
fn generator_exposes_its_configuration() {
    let generator = TokenGenerator::new(16, Alphabet::hex());

    assert_eq!(generator.length(), 16);
    assert_eq!(generator.alphabet().size(), 16);
}

#[test]
fn default_generator_matches_the_stateless_default() {
    let generator = TokenGenerator::default();

    assert_eq!(generator.length(), DEFAULT_LENGTH);
    assert_eq!(generator.alphabet(), &Alphabet::default());
}

#[test]
fn get_from_draws_from_the_supplied_source() {
    let generator = TokenGenerator::new(4, Alphabet::default());

    // 8 is the rejection threshold for 62 symbols; 8..12 select the
    // symbols at positions 8..12.
    let mut bytes = vec![0u8; 64];
    bytes[..4].copy_from_slice(&[8, 9, 10, 11]);
    let mut source = ScriptedSource::new(bytes);

    let token = generator.get_from(&mut source).unwrap();

    assert_eq!(token, "IJKL");
}

#[test]
fn alphabet_errors_convert_into_token_errors() {
    fn token_over(symbols: &str, length: usize) -> Result<String, TokenError> {
        let alphabet = Alphabet::new(symbols)?;

        generate_with(length, &alphabet)
    }

    let err = token_over("x", 8).unwrap_err();

    assert!(matches!(err, TokenError::InvalidAlphabet(_)));
}

#[test]
fn generator_is_reusable_after_a_failed_source() {
    let generator = TokenGenerator::new(4, Alphabet::default());

    let mut empty = ScriptedSource::new(Vec::new());
    assert!(generator.get_from(&mut empty).is_err());

    let token = generator.get().unwrap();
    assert_eq!(token.chars().count(), 4);
}
