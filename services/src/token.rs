//! Rotating token issuance.

use chrono::Utc;
use db::models::session_token::{ROTATION_SECONDS, SessionToken};
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};

/// Length of the random suffix appended to the time component.
const SUFFIX_LEN: usize = 9;

/// Issues fresh attendance tokens. Values combine the current unix
/// milliseconds with a random alphanumeric suffix: unique enough for the
/// operational timeframe, with no cryptographic guarantee intended.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenGenerator;

impl TokenGenerator {
    pub fn generate(&self) -> SessionToken {
        let issued_at = Utc::now();
        let suffix: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(char::from)
            .collect();
        let value = format!(
            "session_{}_{}",
            issued_at.timestamp_millis(),
            suffix.to_lowercase()
        );

        log::debug!("issued attendance token {value}");
        SessionToken {
            value,
            issued_at,
            validity_secs: ROTATION_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successive_tokens_are_pairwise_distinct() {
        let generator = TokenGenerator;
        let values: Vec<String> = (0..50).map(|_| generator.generate().value).collect();
        for (i, a) in values.iter().enumerate() {
            for b in &values[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn token_carries_the_display_format() {
        let token = TokenGenerator.generate();
        assert!(token.value.starts_with("session_"));
        assert_eq!(token.validity_secs, ROTATION_SECONDS);
        let suffix = token.value.rsplit('_').next().unwrap();
        assert_eq!(suffix.len(), SUFFIX_LEN);
    }
}
