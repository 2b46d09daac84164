//! Free-mint authorization signatures.
//!
//! Authorizations are produced off-chain by the configured signer with
//! standard Ethereum wallet tooling and verified here via secp256k1
//! recovery. The signed digest is fixed bit-for-bit:
//!
//! ```text
//! payload = xdr(recipient) ++ quantity as 32-byte big-endian ++ auth_token
//! digest  = keccak256("\x19Ethereum Signed Message:\n32" ++ keccak256(payload))
//! ```
//!
//! The recipient is the invoking caller, so a signature issued for one
//! address cannot be redeemed by another.

use soroban_sdk::{crypto::Hash, xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::error::ContractError;
use crate::storage::DataKey;

const SIGNED_MESSAGE_PREFIX: &[u8; 28] = b"\x19Ethereum Signed Message:\n32";

/// Canonical digest over (recipient, quantity, authorization token).
pub(crate) fn mint_digest(
    env: &Env,
    recipient: &Address,
    quantity: u32,
    auth_token: &BytesN<32>,
) -> Hash<32> {
    let mut payload = recipient.clone().to_xdr(env);
    let mut quantity_word = [0u8; 32];
    quantity_word[28..].copy_from_slice(&quantity.to_be_bytes());
    payload.extend_from_array(&quantity_word);
    payload.extend_from_array(&auth_token.to_array());

    let inner = env.crypto().keccak256(&payload);
    let mut framed = Bytes::from_slice(env, SIGNED_MESSAGE_PREFIX);
    framed.extend_from_array(&inner.to_array());
    env.crypto().keccak256(&framed)
}

/// Ethereum-style address of the key that signed `digest`: last 20 bytes
/// of keccak256 over the uncompressed public key without its 0x04 tag.
fn recover_address(
    env: &Env,
    digest: &Hash<32>,
    signature: &BytesN<64>,
    recovery_id: u32,
) -> Result<BytesN<20>, ContractError> {
    let public_key = env.crypto().secp256k1_recover(digest, signature, recovery_id);
    let key_hash = env.crypto().keccak256(&Bytes::from(public_key).slice(1..));
    Bytes::from(key_hash.to_bytes())
        .slice(12..)
        .try_into()
        .map_err(|_| ContractError::SignatureVerificationFailed)
}

/// Verifies a free-mint authorization for `caller`. All mismatches fail
/// the same way so an observer cannot tell which field was wrong.
pub(crate) fn verify_free_mint(
    env: &Env,
    caller: &Address,
    quantity: u32,
    auth_token: &BytesN<32>,
    signature: &BytesN<64>,
    recovery_id: u32,
) -> Result<(), ContractError> {
    let signer: Option<BytesN<20>> = env.storage().instance().get(&DataKey::Signer);
    let signer = signer.ok_or(ContractError::SignatureVerificationFailed)?;
    if recovery_id > 3 {
        return Err(ContractError::SignatureVerificationFailed);
    }
    let digest = mint_digest(env, caller, quantity, auth_token);
    let recovered = recover_address(env, &digest, signature, recovery_id)?;
    if recovered != signer {
        return Err(ContractError::SignatureVerificationFailed);
    }
    Ok(())
}
