use std::collections::HashMap;
use std::sync::Arc;

use crate::memo::{ByAddress, Memo};
use crate::types::chain::{ChainConfig, TokenDescriptor};

/// Decimals assumed when a token cannot be resolved.
pub const DEFAULT_TOKEN_DECIMALS: u8 = 6;

/// Lowercase token key (symbol or name) → decimals for one chain config.
#[derive(Debug, Clone, Default)]
pub struct DecimalCache {
    entries: HashMap<String, u8>,
}

impl DecimalCache {
    /// Build the table from scratch. Descriptors are visited in order,
    /// symbol key before name key, so a later key overwrites an earlier
    /// identical one.
    pub fn build(config: &ChainConfig) -> Self {
        let mut entries = HashMap::new();
        for token in &config.tokens {
            for key in token.keys() {
                entries.insert(key, token.decimal);
            }
        }
        Self { entries }
    }

    /// Look up an already lowercased key.
    pub fn get(&self, key: &str) -> Option<u8> {
        self.entries.get(key).copied()
    }

    pub fn insert(&mut self, key: String, decimal: u8) {
        self.entries.insert(key, decimal);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves token identifiers to decimals, caching per chain config.
///
/// The cache is keyed by the identity of the `Arc<ChainConfig>` passed in:
/// handing over a new `Arc` (even with equal contents) rebuilds it, while
/// repeated calls with the same `Arc` are served from the table.
#[derive(Debug, Default)]
pub struct TokenDecimalResolver {
    cache: Memo<Option<ByAddress<ChainConfig>>, DecimalCache>,
    rebuilds: usize,
}

impl TokenDecimalResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decimals for `token_id` on `config`, or [`DEFAULT_TOKEN_DECIMALS`].
    ///
    /// Matching is case-insensitive but whitespace-sensitive. An absent
    /// config behaves like one without tokens.
    pub fn resolve(&mut self, config: Option<&Arc<ChainConfig>>, token_id: Option<&str>) -> u8 {
        let key = match token_id {
            Some(id) if !id.is_empty() => id.to_lowercase(),
            _ => return DEFAULT_TOKEN_DECIMALS,
        };

        let rebuilds = &mut self.rebuilds;
        let cache = self
            .cache
            .get_or_compute(config.cloned().map(ByAddress), || {
                *rebuilds += 1;
                let cache = config
                    .map(|c| DecimalCache::build(c))
                    .unwrap_or_default();
                tracing::debug!(
                    chain = config.map(|c| c.chain.as_str()).unwrap_or(""),
                    entries = cache.len(),
                    "rebuilt token decimal cache"
                );
                cache
            });

        let tokens = config.map(|c| c.tokens.as_slice()).unwrap_or_default();
        lookup(cache, tokens, key)
    }

    /// Number of cache rebuilds performed so far.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    /// Forget the cached table; the next lookup rebuilds it.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }
}

/// One-shot lookup without a persistent cache. Returns the same value
/// [`TokenDecimalResolver::resolve`] would.
pub fn token_decimals(config: Option<&ChainConfig>, token_id: Option<&str>) -> u8 {
    let key = match token_id {
        Some(id) if !id.is_empty() => id.to_lowercase(),
        _ => return DEFAULT_TOKEN_DECIMALS,
    };
    let Some(config) = config else {
        return DEFAULT_TOKEN_DECIMALS;
    };
    let mut cache = DecimalCache::build(config);
    lookup(&mut cache, &config.tokens, key)
}

fn lookup(cache: &mut DecimalCache, tokens: &[TokenDescriptor], key: String) -> u8 {
    if let Some(decimal) = cache.get(&key) {
        return decimal;
    }

    // Linear scan for anything the table missed; memoize the hit.
    match tokens.iter().find(|t| t.matches(&key)) {
        Some(token) => {
            cache.insert(key, token.decimal);
            token.decimal
        }
        None => DEFAULT_TOKEN_DECIMALS,
    }
}
