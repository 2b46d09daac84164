use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String};

use crate::types::Role;

#[contracttype]
#[derive(Clone, Debug)]
pub struct Mint {
    pub to: Address,
    pub first_token_id: u64,
    pub amount: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RoleChange {
    pub role: Role,
    pub account: Address,
    pub by: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PauseChange {
    pub paused: bool,
    pub by: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct FeeUpdate {
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SignerUpdate {
    pub signer: BytesN<20>,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RoyaltyChange {
    /// None for the collection default, Some(id) for a per-token entry.
    pub token_id: Option<u64>,
    /// None when the entry was deleted or reset.
    pub receiver: Option<Address>,
    pub bps: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Withdrawal {
    pub to: Address,
    pub amount: i128,
}

pub fn emit_mint(env: &Env, to: Address, first_token_id: u64, amount: u32) {
    env.events().publish(
        (symbol_short!("mint"),),
        Mint {
            to,
            first_token_id,
            amount,
        },
    );
}

pub fn emit_role_granted(env: &Env, role: Role, account: Address, by: Address) {
    env.events()
        .publish((symbol_short!("role_gr"),), RoleChange { role, account, by });
}

pub fn emit_role_revoked(env: &Env, role: Role, account: Address, by: Address) {
    env.events()
        .publish((symbol_short!("role_rv"),), RoleChange { role, account, by });
}

pub fn emit_pause_change(env: &Env, paused: bool, by: Address) {
    env.events()
        .publish((symbol_short!("pause"),), PauseChange { paused, by });
}

pub fn emit_fee_updated(env: &Env, fee: i128) {
    env.events()
        .publish((symbol_short!("fee"),), FeeUpdate { fee });
}

pub fn emit_signer_updated(env: &Env, signer: BytesN<20>) {
    env.events()
        .publish((symbol_short!("signer"),), SignerUpdate { signer });
}

pub fn emit_royalty_change(env: &Env, token_id: Option<u64>, receiver: Option<Address>, bps: u32) {
    env.events().publish(
        (symbol_short!("royalty"),),
        RoyaltyChange {
            token_id,
            receiver,
            bps,
        },
    );
}

pub fn emit_base_uri_updated(env: &Env, base_uri: String) {
    env.events().publish((symbol_short!("base_uri"),), base_uri);
}

pub fn emit_uri_extension_updated(env: &Env, extension: String) {
    env.events().publish((symbol_short!("uri_ext"),), extension);
}

pub fn emit_contract_uri_updated(env: &Env, contract_uri: String) {
    env.events()
        .publish((symbol_short!("coll_uri"),), contract_uri);
}

pub fn emit_withdrawal(env: &Env, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("withdraw"),), Withdrawal { to, amount });
}
