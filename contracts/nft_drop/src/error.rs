use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller does not hold the role required by the operation
    Unauthorized = 3,
    /// Issuance is blocked while the collection is paused
    EnforcedPause = 4,
    /// Public mint payment does not equal the configured fee exactly
    WrongPaymentAmount = 5,
    /// Free-mint signature did not verify against the configured signer
    SignatureVerificationFailed = 6,
    /// Free-mint authorization token was already consumed
    AuthorizationUsed = 7,
    /// Admin mint recipient and quantity arrays differ in length
    ArraysLengthMismatch = 8,
    /// Royalty basis points exceed 10000
    InvalidRoyalty = 9,
    /// Mint fee must be non-negative
    InvalidMintFee = 10,
    /// Token id has not been minted
    TokenNotFound = 11,
    /// Combined base URI and extension exceed the assembly buffer
    UriTooLong = 12,
    /// Nested call into a locked critical section
    ReentrancyDetected = 13,
}
