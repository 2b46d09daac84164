use soroban_sdk::{Address, Env};

use crate::access_control;
use crate::error::ContractError;
use crate::events;
use crate::storage::DataKey;
use crate::types::{Role, RoyaltyInfo};

const BPS_DENOMINATOR: u32 = 10_000;

fn validate_bps(bps: u32) -> Result<(), ContractError> {
    if bps > BPS_DENOMINATOR {
        return Err(ContractError::InvalidRoyalty);
    }
    Ok(())
}

/// Sets the collection-wide royalty used by tokens without an override.
pub fn set_default_royalty(
    env: &Env,
    caller: Address,
    receiver: Address,
    bps: u32,
) -> Result<(), ContractError> {
    caller.require_auth();
    access_control::require_role(env, &caller, Role::Admin)?;
    validate_bps(bps)?;
    env.storage().instance().set(
        &DataKey::DefaultRoyalty,
        &RoyaltyInfo {
            receiver: receiver.clone(),
            bps,
        },
    );
    events::emit_royalty_change(env, None, Some(receiver), bps);
    Ok(())
}

/// Clears the collection default. Tokens without an override then report
/// no royalty at all.
pub fn delete_default_royalty(env: &Env, caller: Address) -> Result<(), ContractError> {
    caller.require_auth();
    access_control::require_role(env, &caller, Role::Admin)?;
    env.storage().instance().remove(&DataKey::DefaultRoyalty);
    events::emit_royalty_change(env, None, None, 0);
    Ok(())
}

/// Per-token override; supersedes the default for that token only.
pub fn set_token_royalty(
    env: &Env,
    caller: Address,
    token_id: u64,
    receiver: Address,
    bps: u32,
) -> Result<(), ContractError> {
    caller.require_auth();
    access_control::require_role(env, &caller, Role::Admin)?;
    validate_bps(bps)?;
    env.storage().instance().set(
        &DataKey::TokenRoyalty(token_id),
        &RoyaltyInfo {
            receiver: receiver.clone(),
            bps,
        },
    );
    events::emit_royalty_change(env, Some(token_id), Some(receiver), bps);
    Ok(())
}

/// Removes a token's override, reverting it to the collection default.
pub fn reset_token_royalty(env: &Env, caller: Address, token_id: u64) -> Result<(), ContractError> {
    caller.require_auth();
    access_control::require_role(env, &caller, Role::Admin)?;
    env.storage()
        .instance()
        .remove(&DataKey::TokenRoyalty(token_id));
    events::emit_royalty_change(env, Some(token_id), None, 0);
    Ok(())
}

/// Resolution order: per-token override, else collection default, else
/// no royalty. The amount truncates toward zero.
pub fn royalty_info(env: &Env, token_id: u64, sale_price: i128) -> Option<(Address, i128)> {
    let info: RoyaltyInfo = env
        .storage()
        .instance()
        .get(&DataKey::TokenRoyalty(token_id))
        .or_else(|| env.storage().instance().get(&DataKey::DefaultRoyalty))?;
    let amount = sale_price * i128::from(info.bps) / i128::from(BPS_DENOMINATOR);
    Some((info.receiver, amount))
}
