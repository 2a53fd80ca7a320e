use super::*;

/// Tag for the `SignerChanged` event.
pub const SIGNER_CHANGED_TAG: u8 = 0;
/// Tag for the `BaseUriChanged` event.
pub const BASE_URI_CHANGED_TAG: u8 = 1;
/// Tag for the `RoleGranted` event.
pub const ROLE_GRANTED_TAG: u8 = 2;
/// Tag for the `RoleRevoked` event.
pub const ROLE_REVOKED_TAG: u8 = 3;
/// Tag for the `OwnershipTransferred` event.
pub const OWNERSHIP_TRANSFERRED_TAG: u8 = 4;
/// Tag for the `Issued` event.
pub const ISSUED_TAG: u8 = 5;
/// Tag for the `ContractDeployed` event.
pub const CONTRACT_DEPLOYED_TAG: u8 = 6;

/// Token ID that is never minted. A signed mint message carrying this ID
/// lets the contract assign the next free ID.
pub const TOKEN_ID_AUTO: ContractTokenId = TokenIdU64(0);

/// Supply cap applied to fungible tokens deployed without an explicit cap.
pub const DEFAULT_SUPPLY_CAP: TokenAmountU64 = TokenAmountU64(50);
