use super::*;
use core::ops::DerefMut;

/// Access control roles recognised by the token contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub enum Role {
    /// Can grant and revoke every role, including itself.
    DefaultAdmin,
    /// Can maintain contract settings such as the backend signer.
    Admin,
    /// Can mint tokens without a backend signature.
    Minter,
    /// Can burn tokens held by any address.
    Burner,
    /// Can move tokens held by any address.
    Transferor,
}

/// Role assignments for each address.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct Roles<S: HasStateApi> {
    roles: StateMap<Address, StateSet<Role, S>, S>,
}

impl<S: HasStateApi> Roles<S> {
    pub fn new(state_builder: &mut StateBuilder<S>) -> Self {
        Self {
            roles: state_builder.new_map(),
        }
    }

    /// Grant `role` to `address`.
    ///
    /// Succeeds even if the `address` already holds the `role`.
    pub fn grant(&mut self, address: &Address, role: Role, state_builder: &mut StateBuilder<S>) {
        self.roles
            .entry(*address)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(role);
    }

    /// Revoke `role` from `address`.
    /// Succeeds even if the `address` does _not_ hold the `role`.
    pub fn revoke(&mut self, address: &Address, role: Role) {
        self.roles.get_mut(address).map(|mut roles| roles.remove(&role));
    }

    /// Check if `address` holds `role`.
    pub fn has_role(&self, address: &Address, role: Role) -> bool {
        self.roles
            .get(address)
            .map(|roles| roles.contains(&role))
            .unwrap_or(false)
    }

    /// Roles issued to the admin of a freshly deployed token contract.
    pub fn grant_initial(&mut self, admin: &Address, state_builder: &mut StateBuilder<S>) {
        self.grant(admin, Role::DefaultAdmin, state_builder);
        self.grant(admin, Role::Admin, state_builder);
        self.grant(admin, Role::Minter, state_builder);
    }

    /// Check that `sender` is allowed to grant and revoke roles. Both the
    /// default admin and the admin role qualify.
    pub fn ensure_can_manage(&self, sender: &Address) -> ContractResult<()> {
        ensure!(
            self.has_role(sender, Role::DefaultAdmin) || self.has_role(sender, Role::Admin),
            CustomContractError::MissingAdminRole.into()
        );
        Ok(())
    }
}

/// Parameter type for the `grantRole`, `revokeRole` and `hasRole` functions.
#[derive(Debug, Serialize, SchemaType)]
pub struct RoleParams {
    pub address: Address,
    pub role: Role,
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const ADMIN: Address = Address::Account(AccountAddress([0; 32]));
    const USER: Address = Address::Account(AccountAddress([1; 32]));

    #[concordium_test]
    fn test_grant_and_revoke() {
        let mut state_builder = TestStateBuilder::new();
        let mut roles: Roles<TestStateApi> = Roles::new(&mut state_builder);

        roles.grant_initial(&ADMIN, &mut state_builder);
        claim!(roles.has_role(&ADMIN, Role::DefaultAdmin));
        claim!(roles.has_role(&ADMIN, Role::Admin));
        claim!(roles.has_role(&ADMIN, Role::Minter));
        claim!(!roles.has_role(&ADMIN, Role::Burner));
        claim!(roles.ensure_can_manage(&ADMIN).is_ok());

        claim!(!roles.has_role(&USER, Role::Minter));
        claim_eq!(
            roles.ensure_can_manage(&USER),
            Err(CustomContractError::MissingAdminRole.into())
        );

        roles.grant(&USER, Role::Minter, &mut state_builder);
        claim!(roles.has_role(&USER, Role::Minter));
        claim!(!roles.has_role(&USER, Role::DefaultAdmin));

        // The plain admin role also manages roles.
        roles.grant(&USER, Role::Admin, &mut state_builder);
        claim!(roles.ensure_can_manage(&USER).is_ok());
        roles.revoke(&USER, Role::Admin);
        claim_eq!(
            roles.ensure_can_manage(&USER),
            Err(CustomContractError::MissingAdminRole.into())
        );

        roles.revoke(&USER, Role::Minter);
        claim!(!roles.has_role(&USER, Role::Minter));

        // Revoking an absent role is a no-op.
        roles.revoke(&USER, Role::Burner);
        claim!(!roles.has_role(&USER, Role::Burner));
    }
}
