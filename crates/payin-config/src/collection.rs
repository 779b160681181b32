use std::sync::Arc;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::memo::{ByAddress, Memo};
use crate::types::profile::{CollectionAddressInfo, ProfileCollectionAddress};

/// Pick the collection settings for `current_chain` out of the profile's
/// per-chain records.
///
/// Chain identifiers are compared exactly. A missing chain or an empty
/// list yields an unset info silently; a populated list without a record
/// for the chain yields an unset info and reports
/// [`Diagnostic::MissingCollectionAddress`].
pub fn collection_address(
    current_chain: Option<&str>,
    addresses: Option<&[ProfileCollectionAddress]>,
    sink: &dyn DiagnosticSink,
) -> CollectionAddressInfo {
    let chain = current_chain.unwrap_or_default();
    let addresses = addresses.unwrap_or_default();
    if chain.is_empty() || addresses.is_empty() {
        return CollectionAddressInfo::unset(chain);
    }

    match addresses.iter().find(|record| record.chain == chain) {
        Some(record) => CollectionAddressInfo::from(record),
        None => {
            sink.report(Diagnostic::MissingCollectionAddress {
                chain: chain.to_string(),
            });
            CollectionAddressInfo::unset(chain)
        }
    }
}

type Inputs = (Option<String>, Option<ByAddress<[ProfileCollectionAddress]>>);

/// Memoized [`collection_address`]: recomputes only when the selected
/// chain changes by value or the address list changes by `Arc` identity.
pub struct CollectionAddressResolver {
    memo: Memo<Inputs, CollectionAddressInfo>,
    sink: Box<dyn DiagnosticSink>,
}

impl CollectionAddressResolver {
    pub fn new(sink: Box<dyn DiagnosticSink>) -> Self {
        Self {
            memo: Memo::new(),
            sink,
        }
    }

    pub fn resolve(
        &mut self,
        current_chain: Option<&str>,
        addresses: Option<&Arc<[ProfileCollectionAddress]>>,
    ) -> &CollectionAddressInfo {
        let inputs = (
            current_chain.map(str::to_string),
            addresses.cloned().map(ByAddress),
        );
        let sink = &*self.sink;
        self.memo.get_or_compute(inputs, || {
            collection_address(current_chain, addresses.map(|a| &**a), sink)
        })
    }
}

impl Default for CollectionAddressResolver {
    fn default() -> Self {
        Self::new(Box::new(crate::diagnostics::TracingSink))
    }
}

impl std::fmt::Debug for CollectionAddressResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionAddressResolver")
            .field("memo", &self.memo)
            .finish_non_exhaustive()
    }
}
