use super::*;

/// The backend signer public key was replaced.
#[derive(Debug, Serialize, SchemaType)]
pub struct SignerChangedEvent {
    pub previous: PublicKeyEd25519,
    pub new: PublicKeyEd25519,
}

/// The base URI for token metadata was replaced.
#[derive(Debug, Serialize, SchemaType)]
pub struct BaseUriChangedEvent {
    pub previous: String,
    pub new: String,
}

/// A role was granted to or revoked from an address.
#[derive(Debug, Serialize, SchemaType)]
pub struct RoleUpdateEvent {
    pub role: Role,
    pub address: Address,
    pub sender: Address,
}

/// Contract ownership moved to a new address.
#[derive(Debug, Serialize, SchemaType)]
pub struct OwnershipTransferredEvent {
    pub previous: Address,
    pub new: Address,
}

/// A token contract instance was registered and initialized by the factory.
#[derive(Debug, Serialize, SchemaType)]
pub struct ContractDeployedEvent {
    pub contract: ContractAddress,
    pub kind: TokenKind,
    pub deployer: Address,
}

/// A token was issued together with its content reference.
#[derive(Debug, Serialize, SchemaType)]
pub struct IssuedEvent {
    pub token_id: ContractTokenId,
    pub owner: Address,
    pub content_ref: String,
}
