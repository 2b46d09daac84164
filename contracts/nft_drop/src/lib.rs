#![no_std]

mod access_control;
mod error;
mod events;
mod metadata;
mod mint;
mod reentrancy;
mod royalty;
mod signature;
mod storage;
mod treasury;
mod types;

pub use error::ContractError;
pub use types::{CollectionConfig, Role, RoyaltyInfo};

use soroban_sdk::Address;
use soroban_sdk::BytesN;
use soroban_sdk::Env;
use soroban_sdk::String;
use soroban_sdk::Vec;
use soroban_sdk::contract;
use soroban_sdk::contractimpl;

use crate::error::ContractError as Err;
use crate::storage::DataKey;

#[contract]
pub struct NftDropContract;

#[contractimpl]
impl NftDropContract {
    /// Initializes the collection. `owner` receives both the default-admin
    /// and admin roles.
    pub fn initialize(env: Env, owner: Address, config: CollectionConfig) -> Result<(), Err> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Err::AlreadyInitialized);
        }
        if config.mint_fee < 0 {
            return Err(Err::InvalidMintFee);
        }
        metadata::validate_uri_budget(&config.base_uri, &config.uri_extension)?;

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage()
            .instance()
            .set(&DataKey::CollectionConfig, &config);
        env.storage()
            .instance()
            .set(&DataKey::MintFee, &config.mint_fee);
        env.storage()
            .instance()
            .set(&DataKey::BaseUri, &config.base_uri);
        env.storage()
            .instance()
            .set(&DataKey::UriExtension, &config.uri_extension);
        env.storage()
            .instance()
            .set(&DataKey::ContractUri, &config.contract_uri);
        env.storage().instance().set(&DataKey::TotalSupply, &0u64);
        env.storage().instance().set(&DataKey::Paused, &false);
        access_control::grant_role_unchecked(&env, Role::DefaultAdmin, &owner);
        access_control::grant_role_unchecked(&env, Role::Admin, &owner);
        Ok(())
    }

    // --- Issuance ---
    pub fn mint_nft(env: Env, caller: Address, payment: i128) -> Result<u64, Err> {
        mint::mint_nft(&env, caller, payment)
    }

    pub fn free_mint(
        env: Env,
        caller: Address,
        quantity: u32,
        auth_token: BytesN<32>,
        sig: BytesN<64>,
        recovery_id: u32,
    ) -> Result<u64, Err> {
        mint::free_mint(&env, caller, quantity, auth_token, sig, recovery_id)
    }

    pub fn admin_mint(
        env: Env,
        caller: Address,
        recipients: Vec<Address>,
        quantities: Vec<u32>,
    ) -> Result<Vec<u64>, Err> {
        mint::admin_mint(&env, caller, recipients, quantities)
    }

    // --- Administration ---
    pub fn set_signer(env: Env, caller: Address, signer: BytesN<20>) -> Result<(), Err> {
        caller.require_auth();
        access_control::require_role(&env, &caller, Role::Admin)?;
        env.storage().instance().set(&DataKey::Signer, &signer);
        events::emit_signer_updated(&env, signer);
        Ok(())
    }

    pub fn set_mint_fee(env: Env, caller: Address, amount: i128) -> Result<(), Err> {
        caller.require_auth();
        access_control::require_role(&env, &caller, Role::Admin)?;
        if amount < 0 {
            return Err(Err::InvalidMintFee);
        }
        env.storage().instance().set(&DataKey::MintFee, &amount);
        events::emit_fee_updated(&env, amount);
        Ok(())
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), Err> {
        caller.require_auth();
        access_control::require_role(&env, &caller, Role::Admin)?;
        env.storage().instance().set(&DataKey::Paused, &true);
        events::emit_pause_change(&env, true, caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Err> {
        caller.require_auth();
        access_control::require_role(&env, &caller, Role::Admin)?;
        env.storage().instance().set(&DataKey::Paused, &false);
        events::emit_pause_change(&env, false, caller);
        Ok(())
    }

    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Err> {
        treasury::withdraw(&env, caller)
    }

    pub fn grant_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), Err> {
        access_control::grant_role(&env, caller, role, account)
    }

    pub fn revoke_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), Err> {
        access_control::revoke_role(&env, caller, role, account)
    }

    // --- Royalty ---
    pub fn set_default_royalty(
        env: Env,
        caller: Address,
        receiver: Address,
        bps: u32,
    ) -> Result<(), Err> {
        royalty::set_default_royalty(&env, caller, receiver, bps)
    }

    pub fn delete_default_royalty(env: Env, caller: Address) -> Result<(), Err> {
        royalty::delete_default_royalty(&env, caller)
    }

    pub fn set_token_royalty(
        env: Env,
        caller: Address,
        token_id: u64,
        receiver: Address,
        bps: u32,
    ) -> Result<(), Err> {
        royalty::set_token_royalty(&env, caller, token_id, receiver, bps)
    }

    pub fn reset_token_royalty(env: Env, caller: Address, token_id: u64) -> Result<(), Err> {
        royalty::reset_token_royalty(&env, caller, token_id)
    }

    pub fn royalty_info(env: Env, token_id: u64, sale_price: i128) -> Option<(Address, i128)> {
        royalty::royalty_info(&env, token_id, sale_price)
    }

    // --- Metadata ---
    pub fn set_base_uri(env: Env, caller: Address, base_uri: String) -> Result<(), Err> {
        metadata::set_base_uri(&env, caller, base_uri)
    }

    pub fn set_uri_extension(env: Env, caller: Address, extension: String) -> Result<(), Err> {
        metadata::set_uri_extension(&env, caller, extension)
    }

    pub fn set_contract_uri(env: Env, caller: Address, contract_uri: String) -> Result<(), Err> {
        metadata::set_contract_uri(&env, caller, contract_uri)
    }

    pub fn token_uri(env: Env, token_id: u64) -> Result<String, Err> {
        metadata::token_uri(&env, token_id)
    }

    pub fn contract_uri(env: Env) -> Result<String, Err> {
        metadata::contract_uri(&env)
    }

    // --- Reads ---
    pub fn balance_of(env: Env, owner: Address) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }

    pub fn total_supply(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, Err> {
        env.storage()
            .instance()
            .get(&DataKey::Owner(token_id))
            .ok_or(Err::TokenNotFound)
    }

    pub fn is_paused(env: Env) -> bool {
        access_control::is_paused(&env)
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        access_control::has_role(&env, role, &account)
    }

    /// Role identifier gating `admin_mint` and the other administrative
    /// operations; exposed for clients building `grant_role` invocations.
    pub fn admin_role(env: Env) -> Role {
        let _ = env;
        Role::Admin
    }

    pub fn mint_fee(env: Env) -> Result<i128, Err> {
        env.storage()
            .instance()
            .get(&DataKey::MintFee)
            .ok_or(Err::NotInitialized)
    }

    pub fn signer(env: Env) -> Option<BytesN<20>> {
        env.storage().instance().get(&DataKey::Signer)
    }

    pub fn is_auth_used(env: Env, auth_token: BytesN<32>) -> bool {
        mint::is_auth_used(&env, &auth_token)
    }

    pub fn name(env: Env) -> Result<String, Err> {
        let config: CollectionConfig = env
            .storage()
            .instance()
            .get(&DataKey::CollectionConfig)
            .ok_or(Err::NotInitialized)?;
        Ok(config.name)
    }

    pub fn symbol(env: Env) -> Result<String, Err> {
        let config: CollectionConfig = env
            .storage()
            .instance()
            .get(&DataKey::CollectionConfig)
            .ok_or(Err::NotInitialized)?;
        Ok(config.symbol)
    }
}
