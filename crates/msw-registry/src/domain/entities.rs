//! # Creation Records & Address Derivation

use msw_signature::keccak256;
use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

/// Domain prefix salted into every derived account address.
const ADDRESS_DERIVATION_TAG: &[u8] = b"msw/account";

/// One entry in the registry's append-only creation log.
///
/// Captures the account as it was at creation time. Live state (balance,
/// current quorum, current owners) is read from the engine instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Derived account address.
    pub address: Address,
    /// Quorum at creation.
    pub quorum: u64,
    /// Funding at creation.
    pub funding: U256,
    /// Position in the creation log, starting at 0.
    pub index: u64,
}

/// Derive the address of the `creation_index`-th account in a domain.
///
/// Keccak-256 over a fixed-width preimage of tag, domain, creation index,
/// quorum, and the owner list; last 20 bytes. The creation index makes the
/// result unique for the registry's entire history even when the same
/// owners and quorum are registered twice.
#[must_use]
pub fn derive_address(
    domain_id: u64,
    creation_index: u64,
    quorum: u64,
    owners: &[Address],
) -> Address {
    let mut preimage =
        Vec::with_capacity(ADDRESS_DERIVATION_TAG.len() + 24 + owners.len() * 20);
    preimage.extend_from_slice(ADDRESS_DERIVATION_TAG);
    preimage.extend_from_slice(&domain_id.to_be_bytes());
    preimage.extend_from_slice(&creation_index.to_be_bytes());
    preimage.extend_from_slice(&quorum.to_be_bytes());
    for owner in owners {
        preimage.extend_from_slice(owner.as_bytes());
    }

    let hash = keccak256(&preimage);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash.as_bytes()[12..]);
    Address::new(address)
}

// =============================================================================
// TESTS
// =============================================================================
