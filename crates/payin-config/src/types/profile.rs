use serde::{Deserialize, Serialize};

/// Per-chain collection settings stored on the merchant profile.
///
/// Every field except `chain` may be `null` or missing in the backend
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCollectionAddress {
    pub chain: String,

    #[serde(default)]
    pub collection_address: Option<String>,

    #[serde(default)]
    pub payout_contract_address: Option<String>,

    #[serde(default)]
    pub payout_contract_version: Option<String>,
}

/// The subset of the authenticated profile this crate reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub collection_addresses: Vec<ProfileCollectionAddress>,
}

impl Profile {
    /// Parse a profile from JSON. Unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Collection settings for the selected chain. Empty strings mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionAddressInfo {
    pub chain: String,
    pub collection_address: String,
    pub payout_contract_address: String,
    pub payout_contract_version: String,
}

impl CollectionAddressInfo {
    /// An info with only `chain` filled in.
    pub fn unset(chain: &str) -> Self {
        Self {
            chain: chain.to_string(),
            ..Self::default()
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.collection_address.is_empty()
    }
}

impl From<&ProfileCollectionAddress> for CollectionAddressInfo {
    fn from(record: &ProfileCollectionAddress) -> Self {
        Self {
            chain: record.chain.clone(),
            collection_address: record.collection_address.clone().unwrap_or_default(),
            payout_contract_address: record.payout_contract_address.clone().unwrap_or_default(),
            payout_contract_version: record.payout_contract_version.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile_with_nulls() {
        let json = r#"{
            "username": "merchant",
            "collection_addresses": [
                {
                    "chain": "eth",
                    "collection_address": "0xA",
                    "payout_contract_address": null,
                    "payout_contract_version": "v1"
                },
                { "chain": "trx" }
            ]
        }"#;

        let profile = Profile::from_json(json).unwrap();
        assert_eq!(profile.collection_addresses.len(), 2);

        let eth = CollectionAddressInfo::from(&profile.collection_addresses[0]);
        assert_eq!(eth.collection_address, "0xA");
        assert_eq!(eth.payout_contract_address, "");
        assert_eq!(eth.payout_contract_version, "v1");

        let trx = CollectionAddressInfo::from(&profile.collection_addresses[1]);
        assert_eq!(trx, CollectionAddressInfo::unset("trx"));
        assert!(!trx.is_configured());
    }

    #[test]
    fn test_missing_list_is_empty() {
        let profile = Profile::from_json("{}").unwrap();
        assert!(profile.collection_addresses.is_empty());
    }
}
