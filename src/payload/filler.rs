// src/payload/filler.rs
//! Junk content generation
//!
//! All randomness flows through [`JunkGenerator`], which wraps any
//! [`rand::Rng`]. Production runs seed from OS entropy; tests and `--seed`
//! runs use a fixed seed so the output is reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Characters used for obfuscated filler and key suffixes
pub const OBFUSCATION_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

/// Filler character when obfuscation is off
pub const FILLER_CHAR: char = 'a';

/// Length of the random suffix appended to generated keys
pub const KEY_SUFFIX_LEN: usize = 6;

/// Prefix used by [`KeyStyle::Token`]
pub const TOKEN_PREFIX: &str = "token";

/// Parameter-like words used by [`KeyStyle::RandomWord`]
pub const KEY_PREFIXES: &[&str] = &[
    "id", "user", "session", "token", "auth", "request", "data", "temp", "cache",
    "author", "authorID", "authorName", "authorized", "autoupdate", "avatar", "b",
    "balance", "ban", "barcode", "base", "basket", "batch", "backup", "bill", "binary",
    "bio", "birthdate", "block", "blog", "board", "body", "browser", "btn", "bucket",
    "calendar", "call", "campaign", "card", "cart", "case", "category", "check",
    "client", "code", "comment", "config", "connection", "content", "cookie", "country",
    "course", "create", "database", "date", "day", "debug", "delete", "device",
    "dir", "download", "email", "enable", "entry", "event", "file", "filter", "form",
    "folder", "friend", "group", "host", "image", "import", "info", "input", "invoice",
];

/// How junk keys are named
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// `token_XXXXXX`
    Token,
    /// `<word>_XXXXXX` with `<word>` drawn from [`KEY_PREFIXES`]
    RandomWord,
}

/// One synthetic JSON field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunkField {
    pub key: String,
    pub value: String,
}

impl JunkField {
    /// `{key: value}`
    pub fn to_object(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert(self.key.clone(), serde_json::Value::String(self.value.clone()));
        map
    }

    /// `{"status": "accepted", key: value}`
    pub fn to_status_object(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("status".to_string(), serde_json::Value::from(super::splice::STATUS_ACCEPTED));
        map.insert(self.key.clone(), serde_json::Value::String(self.value.clone()));
        map
    }
}

pub struct JunkGenerator<R: Rng> {
    rng: R,
}

impl JunkGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> JunkGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// String of `len` characters drawn uniformly from [`OBFUSCATION_CHARSET`]
    pub fn random_string(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| OBFUSCATION_CHARSET[self.rng.gen_range(0..OBFUSCATION_CHARSET.len())] as char)
            .collect()
    }

    /// Filler of exactly `len` characters
    pub fn filler(&mut self, len: usize, obfuscate: bool) -> String {
        if obfuscate {
            self.random_string(len)
        } else {
            FILLER_CHAR.to_string().repeat(len)
        }
    }

    pub fn key(&mut self, style: KeyStyle) -> String {
        let prefix = match style {
            KeyStyle::Token => TOKEN_PREFIX,
            KeyStyle::RandomWord => KEY_PREFIXES[self.rng.gen_range(0..KEY_PREFIXES.len())],
        };
        format!("{}_{}", prefix, self.random_string(KEY_SUFFIX_LEN))
    }

    pub fn junk_field(&mut self, len: usize, obfuscate: bool, style: KeyStyle) -> JunkField {
        let key = self.key(style);
        let value = self.filler(len, obfuscate);
        JunkField { key, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_charset(s: &str) -> bool {
        s.bytes().all(|b| OBFUSCATION_CHARSET.contains(&b))
    }

    #[test]
    fn test_charset_shape() {
        assert_eq!(OBFUSCATION_CHARSET.len(), 64);
        assert!(OBFUSCATION_CHARSET.contains(&b'-'));
        assert!(OBFUSCATION_CHARSET.contains(&b'_'));
    }

    #[test]
    fn test_plain_filler_is_uniform() {
        let mut generator = JunkGenerator::seeded(1);
        for len in [0usize, 1, 10, 1024, 8192] {
            let filler = generator.filler(len, false);
            assert_eq!(filler.len(), len);
            assert!(filler.chars().all(|c| c == FILLER_CHAR));
        }
    }

    #[test]
    fn test_obfuscated_filler_uses_charset() {
        let mut generator = JunkGenerator::seeded(2);
        for len in [0usize, 1, 10, 4096] {
            let filler = generator.filler(len, true);
            assert_eq!(filler.len(), len);
            assert!(in_charset(&filler));
        }
    }

    #[test]
    fn test_obfuscated_filler_is_not_constant() {
        let mut generator = JunkGenerator::seeded(3);
        let filler = generator.filler(256, true);
        let first = filler.chars().next().unwrap();
        assert!(filler.chars().any(|c| c != first));
    }

    #[test]
    fn test_seeded_generators_are_reproducible() {
        let mut a = JunkGenerator::seeded(42);
        let mut b = JunkGenerator::seeded(42);
        assert_eq!(
            a.junk_field(64, true, KeyStyle::RandomWord),
            b.junk_field(64, true, KeyStyle::RandomWord)
        );
    }

    #[test]
    fn test_token_key_shape() {
        let mut generator = JunkGenerator::seeded(4);
        let key = generator.key(KeyStyle::Token);
        let suffix = key.strip_prefix("token_").expect("token prefix");
        assert_eq!(suffix.len(), KEY_SUFFIX_LEN);
        assert!(in_charset(suffix));
    }

    #[test]
    fn test_random_word_key_shape() {
        let mut generator = JunkGenerator::seeded(5);
        for _ in 0..50 {
            let key = generator.key(KeyStyle::RandomWord);
            let (prefix, suffix) = key.split_at(key.len() - KEY_SUFFIX_LEN);
            let word = prefix.strip_suffix('_').expect("separator");
            assert!(KEY_PREFIXES.contains(&word), "unexpected prefix {word}");
            assert!(in_charset(suffix));
        }
    }

    #[test]
    fn test_junk_field_objects() {
        let field = JunkField {
            key: "token_abc123".to_string(),
            value: "aaaa".to_string(),
        };

        let plain = field.to_object();
        assert_eq!(plain.len(), 1);
        assert_eq!(plain["token_abc123"], "aaaa");

        let with_status = field.to_status_object();
        let keys: Vec<&String> = with_status.keys().collect();
        assert_eq!(keys, ["status", "token_abc123"]);
        assert_eq!(with_status["status"], "accepted");
    }
}
