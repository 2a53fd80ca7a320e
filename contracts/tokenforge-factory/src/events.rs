use super::*;

/// Tagged custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent {
    /// A token contract instance was registered and initialized.
    ContractDeployed(ContractDeployedEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::ContractDeployed(event) => {
                out.write_u8(CONTRACT_DEPLOYED_TAG)?;
                event.serial(out)
            }
        }
    }
}
