//! Reentrancy lock around operations that call out to the payment token.

use crate::error::ContractError;
use crate::storage::DataKey;
use soroban_sdk::Env;

/// Acquires the lock; fails if a nested invocation already holds it.
#[inline]
pub fn acquire(env: &Env) -> Result<(), ContractError> {
    let locked: bool = env
        .storage()
        .instance()
        .get(&DataKey::ReentrancyLock)
        .unwrap_or(false);
    if locked {
        return Err(ContractError::ReentrancyDetected);
    }
    env.storage()
        .instance()
        .set(&DataKey::ReentrancyLock, &true);
    Ok(())
}

/// Releases the lock. Must run on both success and failure paths.
#[inline]
pub fn release(env: &Env) {
    env.storage()
        .instance()
        .set(&DataKey::ReentrancyLock, &false);
}
