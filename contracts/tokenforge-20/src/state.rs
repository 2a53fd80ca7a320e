use super::*;
use core::ops::DerefMut;

/// Token ID of the single fungible token managed by the contract.
pub const FUNGIBLE_TOKEN_ID: TokenIdUnit = TokenIdUnit();

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Address that owns the contract and is the only one allowed to mint.
    pub owner: Address,
    /// Whether the instance received its settings. Blank instances reject
    /// every operation until `initialize` is called.
    pub initialized: bool,
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Hard limit on the total supply.
    pub cap: ContractTokenAmount,
    /// Circulating supply.
    pub supply: ContractTokenAmount,
    /// Amount held by each address.
    pub balances: StateMap<Address, ContractTokenAmount, S>,
    /// Operators for each address.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
    /// Role assignments.
    pub roles: Roles<S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a configured state with zero supply.
    pub fn new(state_builder: &mut StateBuilder<S>, config: TokenConfig, owner: Address) -> Self {
        Self {
            owner,
            initialized: true,
            name: config.name,
            symbol: config.symbol,
            cap: config.cap.unwrap_or(DEFAULT_SUPPLY_CAP),
            supply: TokenAmountU64(0),
            balances: state_builder.new_map(),
            operators: state_builder.new_map(),
            roles: Roles::new(state_builder),
        }
    }

    /// Creates a blank state awaiting `initialize` from a factory.
    pub fn blank(state_builder: &mut StateBuilder<S>, owner: Address) -> Self {
        Self {
            initialized: false,
            ..Self::new(
                state_builder,
                TokenConfig {
                    name: String::new(),
                    symbol: String::new(),
                    base_uri: String::new(),
                    signer: PublicKeyEd25519([0; 32]),
                    cap: None,
                },
                owner,
            )
        }
    }

    /// Apply the settings delivered by the factory.
    pub fn configure(&mut self, config: TokenConfig) {
        self.name = config.name;
        self.symbol = config.symbol;
        self.cap = config.cap.unwrap_or(DEFAULT_SUPPLY_CAP);
        self.initialized = true;
    }

    /// Mint an amount to `to`. Fails when the supply would exceed the cap.
    /// Checked arithmetic, an amount that wraps the supply counter must not
    /// slip under the cap.
    pub fn mint(&mut self, to: &Address, amount: ContractTokenAmount) -> ContractResult<()> {
        let new_supply = self
            .supply
            .0
            .checked_add(amount.0)
            .ok_or(ContractError::Custom(CustomContractError::CapExceeded))?;
        ensure!(
            new_supply <= self.cap.0,
            CustomContractError::CapExceeded.into()
        );
        *self.balances.entry(*to).or_insert(TokenAmountU64(0)) += amount;
        self.supply = TokenAmountU64(new_supply);
        Ok(())
    }

    /// Burn an amount held by `from`.
    pub fn burn(&mut self, from: &Address, amount: ContractTokenAmount) -> ContractResult<()> {
        let mut balance = self
            .balances
            .get_mut(from)
            .ok_or(ContractError::InsufficientFunds)?;
        ensure!(*balance >= amount, ContractError::InsufficientFunds);
        *balance -= amount;
        drop(balance);
        self.supply -= amount;
        Ok(())
    }

    /// Move an amount from `from` to `to`.
    pub fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: ContractTokenAmount,
    ) -> ContractResult<()> {
        if amount == TokenAmountU64(0) {
            return Ok(());
        }
        let mut from_balance = self
            .balances
            .get_mut(from)
            .ok_or(ContractError::InsufficientFunds)?;
        ensure!(*from_balance >= amount, ContractError::InsufficientFunds);
        *from_balance -= amount;
        drop(from_balance);
        *self.balances.entry(*to).or_insert(TokenAmountU64(0)) += amount;
        Ok(())
    }

    /// Amount held by `address`.
    pub fn balance(&self, address: &Address) -> ContractTokenAmount {
        self.balances
            .get(address)
            .map(|balance| *balance)
            .unwrap_or(TokenAmountU64(0))
    }

    /// Add a new operator for the given address.
    ///
    /// Succeeds even if the `operator` is already an operator for the `owner`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        self.operators
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the `address`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.operators
            .get_mut(owner)
            .map(|mut operators| operators.remove(operator));
    }

    /// Check if `address` is an operator for `owner`.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(address))
            .unwrap_or(false)
    }
}
