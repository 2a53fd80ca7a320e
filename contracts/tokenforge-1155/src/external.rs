use super::*;

/// Parameter type for the `create` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct CreateParams {
    /// Receiver of the initial amount.
    pub to: Address,
    pub token_id: ContractTokenId,
    /// Initial amount minted on creation.
    pub amount: ContractTokenAmount,
    pub content_ref: String,
}

/// Parameter type for the `mint` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct MintParams {
    pub to: Address,
    pub token_id: ContractTokenId,
    pub amount: ContractTokenAmount,
}

/// Parameter type for the `createWithSignature` function. The receiver is
/// the caller, which is what the backend signed.
#[derive(Debug, Serialize, SchemaType)]
pub struct SignedCreateParams {
    pub token_id: ContractTokenId,
    pub amount: ContractTokenAmount,
    pub content_ref: String,
    pub signature: SignatureEd25519,
}

/// Parameter type for the `mintWithSignature` function. The signed message
/// carries an empty content reference since the token is already defined.
#[derive(Debug, Serialize, SchemaType)]
pub struct SignedMintParams {
    pub token_id: ContractTokenId,
    pub amount: ContractTokenAmount,
    pub signature: SignatureEd25519,
}

/// Parameter type for the `burn` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct BurnParams {
    pub token_id: ContractTokenId,
    pub amount: ContractTokenAmount,
}

/// Parameter type for the `burnAs` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct BurnAsParams {
    pub from: Address,
    pub token_id: ContractTokenId,
    pub amount: ContractTokenAmount,
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
}
