pub mod amount;
pub mod collection;
pub mod diagnostics;
pub mod error;
pub mod memo;
pub mod token;
pub mod types;

use std::sync::Arc;

use num_bigint::BigUint;

// Re-exports for convenience
pub use collection::{collection_address, CollectionAddressResolver};
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, TracingSink};
pub use error::{AmountError, Error};
pub use token::{token_decimals, TokenDecimalResolver, DEFAULT_TOKEN_DECIMALS};
pub use types::chain::{ChainConfig, TokenDescriptor};
pub use types::profile::{CollectionAddressInfo, Profile, ProfileCollectionAddress};

/// Format a smallest-unit amount of `token_id` on `config` for display,
/// e.g. `"1.5 USDT"`.
///
/// Without a token id the bare number is returned, formatted with
/// [`DEFAULT_TOKEN_DECIMALS`].
pub fn format_token_amount(
    resolver: &mut TokenDecimalResolver,
    config: Option<&Arc<ChainConfig>>,
    token_id: Option<&str>,
    raw: &BigUint,
) -> String {
    let decimals = resolver.resolve(config, token_id);
    let formatted = amount::format_units(raw, decimals);
    match token_id {
        Some(id) if !id.is_empty() => format!("{} {}", formatted, id.to_uppercase()),
        _ => formatted,
    }
}

/// Convert a user-entered amount of `token_id` into smallest units for
/// transaction building.
pub fn parse_token_amount(
    resolver: &mut TokenDecimalResolver,
    config: Option<&Arc<ChainConfig>>,
    token_id: Option<&str>,
    value: &str,
) -> Result<BigUint, Error> {
    let decimals = resolver.resolve(config, token_id);
    Ok(amount::parse_units(value, decimals)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_config_json() -> &'static str {
        r#"{
            "chain": "trx",
            "tokens": [
                { "symbol": "USDT", "name": "Tether USD", "decimal": 6 },
                { "symbol": "BTT", "decimal": 18 },
                { "name": "TRX", "decimal": 6 }
            ]
        }"#
    }

    fn profile_json() -> &'static str {
        r#"{
            "collection_addresses": [
                {
                    "chain": "trx",
                    "collection_address": "TCollect",
                    "payout_contract_address": "TPayout",
                    "payout_contract_version": "v2"
                },
                {
                    "chain": "eth",
                    "collection_address": "0xA",
                    "payout_contract_address": null,
                    "payout_contract_version": null
                }
            ]
        }"#
    }

    #[test]
    fn test_format_token_amount() {
        let config = Arc::new(ChainConfig::from_json(chain_config_json()).unwrap());
        let mut resolver = TokenDecimalResolver::new();

        let raw = BigUint::from(1_500_000u64);
        assert_eq!(
            format_token_amount(&mut resolver, Some(&config), Some("usdt"), &raw),
            "1.5 USDT"
        );
        assert_eq!(
            format_token_amount(&mut resolver, Some(&config), None, &raw),
            "1.5"
        );

        let raw = BigUint::from(10u64).pow(18);
        assert_eq!(
            format_token_amount(&mut resolver, Some(&config), Some("BTT"), &raw),
            "1 BTT"
        );
        assert_eq!(resolver.rebuilds(), 1);
    }

    #[test]
    fn test_parse_token_amount() {
        let config = Arc::new(ChainConfig::from_json(chain_config_json()).unwrap());
        let mut resolver = TokenDecimalResolver::new();

        let units = parse_token_amount(&mut resolver, Some(&config), Some("Tether USD"), "12.25")
            .unwrap();
        assert_eq!(units, BigUint::from(12_250_000u64));

        let err = parse_token_amount(&mut resolver, Some(&config), Some("trx"), "0.0000001");
        assert!(matches!(
            err,
            Err(Error::Amount(AmountError::TooPrecise { allowed: 6, .. }))
        ));
    }

    #[test]
    fn test_dashboard_flow() {
        let config = Arc::new(ChainConfig::from_json(chain_config_json()).unwrap());
        let profile = Profile::from_json(profile_json()).unwrap();
        let addresses = profile.collection_addresses.as_slice();

        let sink = RecordingSink::new();
        let info = collection_address(Some(config.chain.as_str()), Some(addresses), &sink);
        assert_eq!(info.collection_address, "TCollect");
        assert_eq!(info.payout_contract_address, "TPayout");
        assert_eq!(info.payout_contract_version, "v2");

        let info = collection_address(Some("eth"), Some(addresses), &sink);
        assert_eq!(info.collection_address, "0xA");
        assert_eq!(info.payout_contract_address, "");
        assert!(sink.is_empty());

        let info = collection_address(Some("bsc"), Some(addresses), &sink);
        assert!(!info.is_configured());
        assert_eq!(sink.reported().len(), 1);

        assert_eq!(token_decimals(Some(&*config), Some("trx")), 6);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            ChainConfig::from_json("{ \"tokens\": [] }").map_err(Error::from),
            Err(Error::Parse(_))
        ));
    }
}
