use super::*;

/// Parameter type for the `mint` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct MintParams {
    /// Receiver of the minted token.
    pub to: Address,
    pub token_id: ContractTokenId,
    pub content_ref: String,
}

/// Parameter type for the `mintAuto` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct MintAutoParams {
    pub to: Address,
    pub content_ref: String,
}

/// Parameter type for the `mintWithSignature` function. The receiver is the
/// caller, which is what the backend signed.
#[derive(Debug, Serialize, SchemaType)]
pub struct SignedMintParams {
    pub token_id: ContractTokenId,
    pub content_ref: String,
    pub signature: SignatureEd25519,
}

/// Parameter type for the `mintAutoWithSignature` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct SignedMintAutoParams {
    pub content_ref: String,
    pub signature: SignatureEd25519,
}

/// Parameter type for the `mintPriced` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct SignedPricedMintParams {
    pub token_id: ContractTokenId,
    /// The signed price. Must match the attached amount exactly.
    pub price: Amount,
    pub content_ref: String,
    pub signature: SignatureEd25519,
}

/// Parameter type for the `burnAs` and `burn` functions.
#[derive(Debug, Serialize, SchemaType)]
pub struct BurnParams {
    pub token_id: ContractTokenId,
}

/// Return type of the `view` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct ViewState {
    pub owner: Address,
    pub initialized: bool,
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub signer: PublicKeyEd25519,
    pub supply: u64,
    pub current_token_id: ContractTokenId,
}
