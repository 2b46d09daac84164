use soroban_sdk::{contracttype, Address, BytesN};

use crate::types::Role;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    CollectionConfig,

    // Access control & pause
    Role(Role, Address),
    Paused,

    // Minting
    MintFee,
    /// Ethereum-style secp256k1 address authorizing free mints.
    Signer,
    /// Consumed one-time free-mint authorizations. Entries are never removed.
    UsedAuth(BytesN<32>),

    // Ledger
    TotalSupply,
    Owner(u64),
    Balance(Address),

    // Royalties
    DefaultRoyalty,
    TokenRoyalty(u64),

    // Metadata
    BaseUri,
    UriExtension,
    ContractUri,

    ReentrancyLock,
}
