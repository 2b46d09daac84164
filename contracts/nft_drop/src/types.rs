use soroban_sdk::{contracttype, Address, String};

/// Collection-level configuration provided at initialization.
#[derive(Clone, Debug)]
#[contracttype]
pub struct CollectionConfig {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    /// Appended after the decimal token id in `token_uri` (may be empty).
    pub uri_extension: String,
    pub contract_uri: String,
    /// Token contract the mint fee is paid in (native XLM SAC in production).
    pub payment_token: Address,
    /// Exact price of one public mint, in the payment token's units.
    pub mint_fee: i128,
}

/// Role-based access control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum Role {
    /// May grant and revoke any role, including itself.
    DefaultAdmin = 0,
    /// Gates administrative operations: admin mint, fee/signer updates,
    /// pause, royalty and URI configuration, withdrawal.
    Admin = 1,
}

/// Royalty configuration (EIP-2981 equivalent).
#[derive(Clone, Debug)]
#[contracttype]
pub struct RoyaltyInfo {
    pub receiver: Address,
    /// Basis points (0-10000, where 10000 = 100%)
    pub bps: u32,
}
