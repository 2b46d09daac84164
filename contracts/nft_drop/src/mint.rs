use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::access_control;
use crate::error::ContractError;
use crate::events;
use crate::reentrancy;
use crate::signature;
use crate::storage::DataKey;
use crate::treasury;
use crate::types::Role;

/// Public paid mint. The payment must equal the configured fee exactly;
/// both underpayment and overpayment are rejected.
pub fn mint_nft(env: &Env, caller: Address, payment: i128) -> Result<u64, ContractError> {
    caller.require_auth();
    access_control::require_not_paused(env)?;

    let fee: i128 = env
        .storage()
        .instance()
        .get(&DataKey::MintFee)
        .ok_or(ContractError::NotInitialized)?;
    if payment != fee {
        return Err(ContractError::WrongPaymentAmount);
    }

    reentrancy::acquire(env)?;
    let result = (|| {
        treasury::collect(env, &caller, payment)?;
        let first_id = mint_units(env, &caller, 1)?;
        events::emit_mint(env, caller.clone(), first_id, 1);
        Ok(first_id)
    })();
    reentrancy::release(env);
    result
}

/// Signature-authorized free mint. The authorization token is one-shot:
/// it is consumed in the same invocation that mints.
pub fn free_mint(
    env: &Env,
    caller: Address,
    quantity: u32,
    auth_token: BytesN<32>,
    sig: BytesN<64>,
    recovery_id: u32,
) -> Result<u64, ContractError> {
    caller.require_auth();
    access_control::require_not_paused(env)?;

    signature::verify_free_mint(env, &caller, quantity, &auth_token, &sig, recovery_id)?;
    if is_auth_used(env, &auth_token) {
        return Err(ContractError::AuthorizationUsed);
    }

    reentrancy::acquire(env)?;
    let result = (|| {
        let first_id = mint_units(env, &caller, quantity)?;
        env.storage()
            .instance()
            .set(&DataKey::UsedAuth(auth_token.clone()), &true);
        events::emit_mint(env, caller.clone(), first_id, quantity);
        Ok(first_id)
    })();
    reentrancy::release(env);
    result
}

/// Role-gated batch mint. All-or-nothing across the whole batch; each
/// recipient's quantity is assigned as a contiguous id range, in array
/// order.
pub fn admin_mint(
    env: &Env,
    caller: Address,
    recipients: Vec<Address>,
    quantities: Vec<u32>,
) -> Result<Vec<u64>, ContractError> {
    caller.require_auth();
    access_control::require_role(env, &caller, Role::Admin)?;
    if recipients.len() != quantities.len() {
        return Err(ContractError::ArraysLengthMismatch);
    }
    access_control::require_not_paused(env)?;

    reentrancy::acquire(env)?;
    let result = (|| {
        let mut first_ids = Vec::new(env);
        for i in 0..recipients.len() {
            let to = recipients.get_unchecked(i);
            let quantity = quantities.get_unchecked(i);
            let first_id = mint_units(env, &to, quantity)?;
            events::emit_mint(env, to, first_id, quantity);
            first_ids.push_back(first_id);
        }
        Ok(first_ids)
    })();
    reentrancy::release(env);
    result
}

pub fn is_auth_used(env: &Env, auth_token: &BytesN<32>) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::UsedAuth(auth_token.clone()))
        .unwrap_or(false)
}

/// Ledger mutation shared by all issuance paths. Ids are drawn
/// sequentially from the supply counter, starting at 0. Returns the first
/// id assigned; a quantity of zero mints nothing and returns the current
/// counter value.
pub(crate) fn mint_units(env: &Env, to: &Address, quantity: u32) -> Result<u64, ContractError> {
    let supply: u64 = env
        .storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0);
    let first_id = supply;

    for offset in 0..u64::from(quantity) {
        env.storage()
            .instance()
            .set(&DataKey::Owner(first_id + offset), to);
    }

    let balance: u64 = env
        .storage()
        .instance()
        .get(&DataKey::Balance(to.clone()))
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::Balance(to.clone()), &(balance + u64::from(quantity)));
    env.storage()
        .instance()
        .set(&DataKey::TotalSupply, &(supply + u64::from(quantity)));

    Ok(first_id)
}
