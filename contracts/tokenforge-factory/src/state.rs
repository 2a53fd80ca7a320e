use super::*;

/// Data tracked for a registered token contract instance.
#[derive(Debug, Clone, Serialize)]
pub struct Deployment {
    /// Flavour of the instance.
    pub kind: TokenKind,
    /// Address that requested the deployment and received ownership.
    pub deployer: Address,
    /// Collection name the instance was initialized with.
    pub name: String,
    /// Collection symbol the instance was initialized with.
    pub symbol: String,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// All registered instances.
    pub deployments: StateMap<ContractAddress, Deployment, S>,
    /// Number of registered instances.
    pub count: u64,
}

impl<S: HasStateApi> State<S> {
    /// Creates an empty registry.
    pub fn new(state_builder: &mut StateBuilder<S>) -> Self {
        Self {
            deployments: state_builder.new_map(),
            count: 0,
        }
    }

    /// Register an instance. Fails when the address is already registered.
    pub fn register(
        &mut self,
        contract: ContractAddress,
        deployment: Deployment,
    ) -> ContractResult<()> {
        ensure!(
            self.deployments.get(&contract).is_none(),
            CustomContractError::AlreadyRegistered.into()
        );
        self.deployments.insert(contract, deployment);
        self.count += 1;
        Ok(())
    }
}
