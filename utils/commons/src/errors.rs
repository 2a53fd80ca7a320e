use super::*;

/// The custom errors the token contracts can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Failing to mint new tokens because one of the token IDs already exists
    /// in this contract (Error code: -4).
    TokenIdAlreadyExists,
    /// Token must be created before it can be minted (Error code: -5).
    TokenNotDefined,
    /// Either the signature is wrong or the parameters have been corrupted
    /// (Error code: -6).
    InvalidSignature,
    /// Minting would push the total supply over the cap (Error code: -7).
    CapExceeded,
    /// Attached amount does not match the signed price (Error code: -8).
    PriceMismatch,
    /// Only the contract owner can call this function (Error code: -9).
    OnlyOwner,
    /// Caller is neither the contract owner nor an admin (Error code: -10).
    OnlyOwnerOrAdmin,
    /// Caller has no minter role (Error code: -11).
    MissingMinterRole,
    /// Caller has no burner role (Error code: -12).
    MissingBurnerRole,
    /// Caller has no transferor role (Error code: -13).
    MissingTransferorRole,
    /// Caller has neither the default admin nor the admin role
    /// (Error code: -14).
    MissingAdminRole,
    /// Only account addresses are accepted here (Error code: -15).
    OnlyAccountAddress,
    /// Attempt to call function on an uninitialized contract (Error code: -16).
    NotInitialized,
    /// Contract was already initialized (Error code: -17).
    AlreadyInitialized,
    /// The token ID counter can only move forward (Error code: -18).
    TokenIdTooLow,
    /// Token ID zero is reserved for automatic ID assignment (Error code: -19).
    ReservedTokenId,
    /// Contract instance was already registered (Error code: -20).
    AlreadyRegistered,
    /// Failed to invoke a contract (Error code: -21).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -22).
    InvokeTransferError,
    /// Amount arithmetic overflowed (Error code: -23).
    Overflow,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to transfer invocations to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
