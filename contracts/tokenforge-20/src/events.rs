use super::*;

/// Tagged custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent {
    /// A role was granted to an address.
    RoleGranted(RoleUpdateEvent),
    /// A role was revoked from an address.
    RoleRevoked(RoleUpdateEvent),
    /// Contract ownership moved to a new address.
    OwnershipTransferred(OwnershipTransferredEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
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
        }
    }
}
