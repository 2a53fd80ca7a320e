use super::*;

/// Payload signed by the backend to authorize a non-fungible mint.
///
/// The contract rebuilds this message from the caller and the call
/// parameters, so a signature only works for the address it was issued to.
#[derive(Debug, Serialize, SchemaType)]
pub struct MintMessage {
    /// Receiver of the minted token.
    pub to: Address,
    /// Token to mint. [`TOKEN_ID_AUTO`] lets the contract assign the next
    /// free ID.
    pub token_id: ContractTokenId,
    /// Content reference of the token, typically a content hash.
    pub content_ref: String,
}

/// Payload signed by the backend to authorize a paid mint. The receiver is
/// not part of the message, whoever pays the signed price gets the token.
#[derive(Debug, Serialize, SchemaType)]
pub struct PricedMintMessage {
    pub token_id: ContractTokenId,
    /// Exact amount that has to be attached to the mint call.
    pub price: Amount,
    pub content_ref: String,
}

/// Payload signed by the backend to authorize semi-fungible create and mint
/// operations. A create message carries the content reference, a mint
/// message leaves it empty since the token is already defined.
#[derive(Debug, Serialize, SchemaType)]
pub struct SupplyMintMessage {
    pub to: Address,
    pub token_id: ContractTokenId,
    pub amount: ContractTokenAmount,
    pub content_ref: String,
}

/// The digest the backend signs: SHA2-256 over the serialized message.
pub fn signing_digest<T: Serial>(
    crypto_primitives: &impl HasCryptoPrimitives,
    message: &T,
) -> HashSha2256 {
    crypto_primitives.hash_sha2_256(&to_bytes(message))
}

/// Check an ed25519 signature of the backend signer over the digest of
/// `message`.
pub fn verify_backend_signature<T: Serial>(
    crypto_primitives: &impl HasCryptoPrimitives,
    signer: PublicKeyEd25519,
    signature: SignatureEd25519,
    message: &T,
) -> bool {
    let digest = signing_digest(crypto_primitives, message);
    crypto_primitives.verify_ed25519_signature(signer, signature, &digest.0)
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const AXEL: Address = Address::Account(AccountAddress([1; 32]));

    const CONTENT_REF: &str = "NgcFOAfYXwVrmQrUOyB0U5kWU4w1a8Gf2gPPTPBrGTqTl-6qe7ERStbEMamFV4niv1bhFKI5167vzMLApLOEBs0ArvvUiClrRAFb=w600";

    const SIGNER: PublicKeyEd25519 = PublicKeyEd25519([
        95, 174, 191, 9, 20, 203, 166, 103, 85, 59, 188, 31, 36, 17, 174, 26,
        51, 89, 253, 148, 124, 222, 1, 239, 178, 50, 139, 32, 22, 107, 169, 102,
    ]);

    const SIGNATURE: SignatureEd25519 = SignatureEd25519([
        175, 161, 136, 96, 246, 230, 225, 97, 207, 129, 112, 157, 191, 243, 90, 150,
        151, 232, 48, 143, 93, 51, 172, 31, 18, 174, 170, 178, 18, 75, 168, 177,
        228, 233, 85, 79, 118, 149, 100, 169, 9, 180, 92, 95, 166, 146, 167, 44,
        94, 124, 137, 178, 204, 223, 94, 175, 187, 32, 161, 66, 23, 170, 133, 2,
    ]);

    fn message() -> MintMessage {
        MintMessage {
            to: AXEL,
            token_id: TokenIdU64(1001),
            content_ref: CONTENT_REF.to_string(),
        }
    }

    /// The digest is part of the protocol between the backend and the
    /// contracts, so pin it down with a precomputed value.
    #[concordium_test]
    fn test_signing_digest_is_stable() {
        let crypto_primitives = TestCryptoPrimitives::new();
        let digest = signing_digest(&crypto_primitives, &message());
        claim_eq!(
            digest.0,
            [
                132, 161, 207, 127, 253, 235, 82, 101, 38, 230, 83, 99, 239, 72, 208, 41,
                108, 241, 88, 60, 169, 136, 51, 14, 179, 31, 78, 253, 35, 146, 55, 194,
            ]
        );
    }

    #[concordium_test]
    fn test_verify_backend_signature() {
        let crypto_primitives = TestCryptoPrimitives::new();
        claim!(verify_backend_signature(
            &crypto_primitives,
            SIGNER,
            SIGNATURE,
            &message()
        ));

        // Any change to the message invalidates the signature.
        let mut corrupted = message();
        corrupted.token_id = TokenIdU64(1002);
        claim!(!verify_backend_signature(
            &crypto_primitives,
            SIGNER,
            SIGNATURE,
            &corrupted
        ));
    }
}
