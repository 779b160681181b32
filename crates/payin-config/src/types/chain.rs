use serde::{Deserialize, Serialize};

/// Configuration of a single blockchain network as sent by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Network identifier, e.g. `"trx"` or `"eth"`.
    pub chain: String,

    /// Tokens supported on this chain, in backend order.
    #[serde(default)]
    pub tokens: Vec<TokenDescriptor>,
}

impl ChainConfig {
    pub fn new(chain: impl Into<String>, tokens: Vec<TokenDescriptor>) -> Self {
        Self {
            chain: chain.into(),
            tokens,
        }
    }

    /// Parse a chain configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A token entry. `symbol` and `name` are both optional lookup keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Number of fractional digits of the token's smallest unit.
    pub decimal: u8,
}

impl TokenDescriptor {
    pub fn with_symbol(symbol: &str, decimal: u8) -> Self {
        Self {
            symbol: Some(symbol.to_string()),
            name: None,
            decimal,
        }
    }

    pub fn with_name(name: &str, decimal: u8) -> Self {
        Self {
            symbol: None,
            name: Some(name.to_string()),
            decimal,
        }
    }

    /// Lowercase lookup keys, symbol first.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.symbol
            .iter()
            .chain(self.name.iter())
            .map(|k| k.to_lowercase())
    }

    /// Case-insensitive match of `key` against symbol, then name.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.keys().any(|k| k == key)
    }
}
