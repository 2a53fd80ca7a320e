use super::*;

/// Parameter type for the `mint` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct MintParams {
    /// Receiver of the minted amount.
    pub to: Address,
    pub amount: ContractTokenAmount,
}

/// Parameter type for the `burn` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct BurnParams {
    pub amount: ContractTokenAmount,
}

/// Parameter type for the `burnAs` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct BurnAsParams {
    pub from: Address,
    pub amount: ContractTokenAmount,
}

/// Parameter type for the `transfer` and `transferAs` functions.
pub type FungibleTransferParameter = TransferParams<TokenIdUnit, ContractTokenAmount>;

/// Parameter type for the `balanceOf` function.
pub type FungibleBalanceOfQueryParams = BalanceOfQueryParams<TokenIdUnit>;

/// Return type of the `view` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct ViewState {
    pub owner: Address,
    pub initialized: bool,
    pub name: String,
    pub symbol: String,
    pub cap: ContractTokenAmount,
    pub supply: ContractTokenAmount,
}
