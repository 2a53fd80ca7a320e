use super::*;

/// The token contract flavours the factory can register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub enum TokenKind {
    /// Non-fungible, one owner per token ID.
    Nft,
    /// Semi-fungible, token IDs with supply.
    SemiFungible,
    /// Fungible with a supply cap.
    Fungible,
}

/// Collection settings shared by all token contract flavours.
#[derive(Debug, Clone, Serialize, SchemaType)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    /// Prefix for token URIs. The semi-fungible contract keeps it for
    /// compatibility but serves plain content references.
    pub base_uri: String,
    /// Public key of the backend that authorizes mints.
    pub signer: PublicKeyEd25519,
    /// Supply cap, only meaningful for the fungible flavour.
    pub cap: Option<ContractTokenAmount>,
}

/// Parameter type for the `initialize` function of every token contract.
/// Called by the factory right after registration.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitializeParams {
    /// Address that receives ownership and the initial roles.
    pub admin: Address,
    pub config: TokenConfig,
}

/// Return type of the factory `createToken` function.
#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct DeployResult {
    pub contract: ContractAddress,
    pub kind: TokenKind,
}
