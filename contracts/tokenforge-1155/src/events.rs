use super::*;

/// Tagged custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent {
    /// The backend signer public key was replaced.
    SignerChanged(SignerChangedEvent),
    /// The base URI was replaced.
    BaseUriChanged(BaseUriChangedEvent),
    /// A role was granted to an address.
    RoleGranted(RoleUpdateEvent),
    /// A role was revoked from an address.
    RoleRevoked(RoleUpdateEvent),
    /// Contract ownership moved to a new address.
    OwnershipTransferred(OwnershipTransferredEvent),
    /// A token was defined together with its content reference.
    Issued(IssuedEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::SignerChanged(event) => {
                out.write_u8(SIGNER_CHANGED_TAG)?;
                event.serial(out)
            }
            CustomEvent::BaseUriChanged(event) => {
                out.write_u8(BASE_URI_CHANGED_TAG)?;
                event.serial(out)
            }
            CustomEvent::RoleGranted(event) => {
                out.write_u8(ROLE_GRANTED_TAG)?;
                event.serial(out)
            }
            CustomEvent::RoleRevoked(event) => {
                out.write_u8(ROLE_REVOKED_TAG)?;
                event.serial(out)
            }
            CustomEvent::OwnershipTransferred(event) => {
                out.write_u8(OWNERSHIP_TRANSFERRED_TAG)?;
                event.serial(out)
            }
            CustomEvent::Issued(event) => {
                out.write_u8(ISSUED_TAG)?;
                event.serial(out)
            }
        }
    }
}
