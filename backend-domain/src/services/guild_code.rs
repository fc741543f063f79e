// Guild invitation codes
//
// Codes are random uppercase alphanumerics. Collisions are retried a bounded number of
// times; the unique index on `guilds.code` still rejects a concurrent duplicate.

use std::future::Future;

use rand::Rng;

use crate::{DomainError, DomainResult};

pub const GUILD_CODE_LENGTH: usize = 6;
pub const GUILD_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 32;

#[derive(Debug, Clone)]
pub struct GuildCodeGenerator {
    alphabet: Vec<u8>,
    length: usize,
    max_attempts: u32,
}

impl Default for GuildCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl GuildCodeGenerator {
    pub fn new(max_attempts: u32) -> Self {
        Self::with_alphabet(GUILD_CODE_ALPHABET, GUILD_CODE_LENGTH, max_attempts)
    }

    pub fn with_alphabet(alphabet: &[u8], length: usize, max_attempts: u32) -> Self {
        Self {
            alphabet: alphabet.to_vec(),
            length,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        (0..self.length)
            .map(|_| char::from(self.alphabet[rng.gen_range(0..self.alphabet.len())]))
            .collect()
    }

    /// Draws candidates until `exists` reports a free one or the attempts run out.
    pub async fn generate<F, Fut>(&self, mut exists: F) -> DomainResult<String>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = DomainResult<bool>>,
    {
        for _ in 0..self.max_attempts {
            // ThreadRng is not Send; keep it out of the await below.
            let code = {
                let mut rng = rand::thread_rng();
                self.candidate(&mut rng)
            };
            if !exists(code.clone()).await? {
                return Ok(code);
            }
        }
        Err(DomainError::CodeSpaceExhausted(self.max_attempts))
    }
}

pub fn normalize_guild_code(code: &str) -> String {
    code.trim().to_uppercase()
}

pub fn is_valid_guild_code(code: &str) -> bool {
    code.len() == GUILD_CODE_LENGTH && code.bytes().all(|b| GUILD_CODE_ALPHABET.contains(&b))
}
