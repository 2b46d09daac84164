use soroban_sdk::{Address, Env, String};

use crate::access_control;
use crate::error::ContractError;
use crate::events;
use crate::storage::DataKey;
use crate::types::Role;

/// Combined base URI + extension budget. Keeps `token_uri` assembly inside
/// a fixed-size buffer alongside the up-to-20 decimal digits of a u64 id.
const URI_BUDGET: u32 = 200;
const URI_BUF: usize = 220;

/// Computed locator: base URI ++ decimal(token id) ++ extension.
pub fn token_uri(env: &Env, token_id: u64) -> Result<String, ContractError> {
    if !env.storage().instance().has(&DataKey::Owner(token_id)) {
        return Err(ContractError::TokenNotFound);
    }
    let base: String = env
        .storage()
        .instance()
        .get(&DataKey::BaseUri)
        .ok_or(ContractError::NotInitialized)?;
    let extension: String = env
        .storage()
        .instance()
        .get(&DataKey::UriExtension)
        .ok_or(ContractError::NotInitialized)?;

    let base_len = base.len() as usize;
    let ext_len = extension.len() as usize;

    let mut buf = [0u8; URI_BUF];
    base.copy_into_slice(&mut buf[..base_len]);
    let digits = write_decimal(token_id, &mut buf[base_len..base_len + 20]);
    extension.copy_into_slice(&mut buf[base_len + digits..base_len + digits + ext_len]);

    Ok(String::from_bytes(env, &buf[..base_len + digits + ext_len]))
}

/// Collection-level locator, stored verbatim.
pub fn contract_uri(env: &Env) -> Result<String, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::ContractUri)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_base_uri(env: &Env, caller: Address, base_uri: String) -> Result<(), ContractError> {
    caller.require_auth();
    access_control::require_role(env, &caller, Role::Admin)?;
    let extension: String = env
        .storage()
        .instance()
        .get(&DataKey::UriExtension)
        .ok_or(ContractError::NotInitialized)?;
    validate_uri_budget(&base_uri, &extension)?;
    env.storage().instance().set(&DataKey::BaseUri, &base_uri);
    events::emit_base_uri_updated(env, base_uri);
    Ok(())
}

pub fn set_uri_extension(env: &Env, caller: Address, extension: String) -> Result<(), ContractError> {
    caller.require_auth();
    access_control::require_role(env, &caller, Role::Admin)?;
    let base: String = env
        .storage()
        .instance()
        .get(&DataKey::BaseUri)
        .ok_or(ContractError::NotInitialized)?;
    validate_uri_budget(&base, &extension)?;
    env.storage()
        .instance()
        .set(&DataKey::UriExtension, &extension);
    events::emit_uri_extension_updated(env, extension);
    Ok(())
}

pub fn set_contract_uri(env: &Env, caller: Address, contract_uri: String) -> Result<(), ContractError> {
    caller.require_auth();
    access_control::require_role(env, &caller, Role::Admin)?;
    env.storage()
        .instance()
        .set(&DataKey::ContractUri, &contract_uri);
    events::emit_contract_uri_updated(env, contract_uri);
    Ok(())
}

pub(crate) fn validate_uri_budget(base: &String, extension: &String) -> Result<(), ContractError> {
    if base.len() + extension.len() > URI_BUDGET {
        return Err(ContractError::UriTooLong);
    }
    Ok(())
}

/// Writes `value` as decimal ASCII into the head of `out`, returning the
/// digit count. `out` must hold at least 20 bytes.
fn write_decimal(value: u64, out: &mut [u8]) -> usize {
    let mut reversed = [0u8; 20];
    let mut len = 0;
    let mut v = value;
    loop {
        reversed[len] = b'0' + (v % 10) as u8;
        v /= 10;
        len += 1;
        if v == 0 {
            break;
        }
    }
    for i in 0..len {
        out[i] = reversed[len - 1 - i];
    }
    len
}
