use soroban_sdk::{token, Address, Env};

use crate::access_control;
use crate::error::ContractError;
use crate::events;
use crate::reentrancy;
use crate::storage::DataKey;
use crate::types::{CollectionConfig, Role};

fn payment_token(env: &Env) -> Result<Address, ContractError> {
    let config: CollectionConfig = env
        .storage()
        .instance()
        .get(&DataKey::CollectionConfig)
        .ok_or(ContractError::NotInitialized)?;
    Ok(config.payment_token)
}

/// Pulls the public-mint fee from `from` into the contract.
pub(crate) fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    let client = token::Client::new(env, &payment_token(env)?);
    client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Moves the contract's entire payment-token balance to the caller.
pub fn withdraw(env: &Env, caller: Address) -> Result<i128, ContractError> {
    caller.require_auth();
    access_control::require_role(env, &caller, Role::Admin)?;

    reentrancy::acquire(env)?;
    let result = (|| {
        let client = token::Client::new(env, &payment_token(env)?);
        let contract = env.current_contract_address();
        let amount = client.balance(&contract);
        if amount > 0 {
            client.transfer(&contract, &caller, &amount);
        }
        events::emit_withdrawal(env, caller.clone(), amount);
        Ok(amount)
    })();
    reentrancy::release(env);
    result
}
