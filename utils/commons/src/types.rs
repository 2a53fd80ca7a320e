use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Token ID type used by the non-fungible and semi-fungible contracts.
/// IDs are assigned by the backend, so a fixed width integer is enough.
pub type ContractTokenId = TokenIdU64;

/// Token amount type shared by all contracts in the family.
pub type ContractTokenAmount = TokenAmountU64;

/// Wrapping the custom errors in a type with CIS-2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

pub type TransferParameter = TransferParams<ContractTokenId, ContractTokenAmount>;

/// Parameter type for the CIS-2 function `balanceOf` specialized to the
/// token IDs used by the non-fungible and semi-fungible contracts.
pub type ContractBalanceOfQueryParams = BalanceOfQueryParams<ContractTokenId>;

pub type ContractBalanceOfQueryResponse = BalanceOfQueryResponse<ContractTokenAmount>;
