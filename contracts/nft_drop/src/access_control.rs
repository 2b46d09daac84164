//! Role registry and pause gate checks shared by the gated entry points.

use soroban_sdk::{Address, Env};

use crate::error::ContractError;
use crate::events;
use crate::storage::DataKey;
use crate::types::Role;

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Role(role, account.clone()))
        .unwrap_or(false)
}

/// Capability check for gated operations. Runs before any other
/// precondition or side effect of the operation.
pub fn require_role(env: &Env, account: &Address, role: Role) -> Result<(), ContractError> {
    if !has_role(env, role, account) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Grants `role` to `account`. Caller must hold the default-admin role.
pub fn grant_role(
    env: &Env,
    caller: Address,
    role: Role,
    account: Address,
) -> Result<(), ContractError> {
    caller.require_auth();
    require_role(env, &caller, Role::DefaultAdmin)?;
    env.storage()
        .instance()
        .set(&DataKey::Role(role, account.clone()), &true);
    events::emit_role_granted(env, role, account, caller);
    Ok(())
}

/// Revokes `role` from `account`. Caller must hold the default-admin role;
/// revoking the caller's own default-admin role is allowed.
pub fn revoke_role(
    env: &Env,
    caller: Address,
    role: Role,
    account: Address,
) -> Result<(), ContractError> {
    caller.require_auth();
    require_role(env, &caller, Role::DefaultAdmin)?;
    env.storage()
        .instance()
        .remove(&DataKey::Role(role, account.clone()));
    events::emit_role_revoked(env, role, account, caller);
    Ok(())
}

pub(crate) fn grant_role_unchecked(env: &Env, role: Role, account: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Role(role, account.clone()), &true);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

/// First precondition of every issuance path.
pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::EnforcedPause);
    }
    Ok(())
}
