use super::*;
use core::ops::DerefMut;

/// Data tracked for a defined token.
#[derive(Debug, Clone, Serialize)]
pub struct TokenDef {
    /// Content reference served as the token URI.
    pub content_ref: String,
    /// Total amount in circulation.
    pub supply: ContractTokenAmount,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Address that owns the contract.
    pub owner: Address,
    /// Whether the instance received its settings.
    pub initialized: bool,
    /// Collection name.
    pub name: String,
    /// Collection symbol.
    pub symbol: String,
    /// Kept for parity with the non-fungible contract. Token URIs are served
    /// as plain content references.
    pub base_uri: String,
    /// Public key of the backend that authorizes creates and mints.
    pub signer: PublicKeyEd25519,
    /// Role assignments.
    pub roles: Roles<S>,
    /// All defined tokens.
    pub tokens: StateMap<ContractTokenId, TokenDef, S>,
    /// Balance of each address per token.
    pub balances: StateMap<(ContractTokenId, Address), ContractTokenAmount, S>,
    /// Operators for each address.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a configured state with no tokens.
    pub fn new(state_builder: &mut StateBuilder<S>, config: TokenConfig, owner: Address) -> Self {
        Self {
            owner,
            initialized: true,
            name: config.name,
            symbol: config.symbol,
            base_uri: config.base_uri,
            signer: config.signer,
            roles: Roles::new(state_builder),
            tokens: state_builder.new_map(),
            balances: state_builder.new_map(),
            operators: state_builder.new_map(),
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
        self.base_uri = config.base_uri;
        self.signer = config.signer;
        self.initialized = true;
    }

    /// Define a new token and mint its initial amount to `to`.
    pub fn create(
        &mut self,
        token_id: ContractTokenId,
        to: &Address,
        amount: ContractTokenAmount,
        content_ref: String,
    ) -> ContractResult<()> {
        ensure!(
            self.tokens.get(&token_id).is_none(),
            CustomContractError::TokenIdAlreadyExists.into()
        );
        self.tokens.insert(
            token_id,
            TokenDef {
                content_ref,
                supply: amount,
            },
        );
        *self
            .balances
            .entry((token_id, *to))
            .or_insert(ContractTokenAmount::from(0)) += amount;
        Ok(())
    }

    /// Mint an amount of an already defined token to `to`. Checked
    /// arithmetic, the supply and balance counters never wrap.
    pub fn mint(
        &mut self,
        token_id: ContractTokenId,
        to: &Address,
        amount: ContractTokenAmount,
    ) -> ContractResult<()> {
        let mut def = self
            .tokens
            .get_mut(&token_id)
            .ok_or(ContractError::Custom(CustomContractError::TokenNotDefined))?;
        def.supply = TokenAmountU64(
            def.supply
                .0
                .checked_add(amount.0)
                .ok_or(ContractError::Custom(CustomContractError::Overflow))?,
        );
        drop(def);
        let mut balance = self
            .balances
            .entry((token_id, *to))
            .or_insert(ContractTokenAmount::from(0));
        *balance = TokenAmountU64(
            balance
                .0
                .checked_add(amount.0)
                .ok_or(ContractError::Custom(CustomContractError::Overflow))?,
        );
        Ok(())
    }

    /// Burn an amount of a token held by `from`.
    pub fn burn(
        &mut self,
        token_id: ContractTokenId,
        from: &Address,
        amount: ContractTokenAmount,
    ) -> ContractResult<()> {
        let mut balance = self
            .balances
            .get_mut(&(token_id, *from))
            .ok_or(ContractError::InsufficientFunds)?;
        ensure!(*balance >= amount, ContractError::InsufficientFunds);
        *balance -= amount;
        drop(balance);
        self.tokens
            .get_mut(&token_id)
            .map(|mut def| def.supply -= amount);
        Ok(())
    }

    /// Move an amount of a token from `from` to `to`.
    pub fn transfer(
        &mut self,
        token_id: ContractTokenId,
        from: &Address,
        to: &Address,
        amount: ContractTokenAmount,
    ) -> ContractResult<()> {
        ensure!(
            self.tokens.get(&token_id).is_some(),
            ContractError::InvalidTokenId
        );
        if amount == ContractTokenAmount::from(0) {
            return Ok(());
        }
        let mut balance = self
            .balances
            .get_mut(&(token_id, *from))
            .ok_or(ContractError::InsufficientFunds)?;
        ensure!(*balance >= amount, ContractError::InsufficientFunds);
        *balance -= amount;
        drop(balance);
        *self
            .balances
            .entry((token_id, *to))
            .or_insert(ContractTokenAmount::from(0)) += amount;
        Ok(())
    }

    /// Balance of `address` for `token_id`.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        ensure!(
            self.tokens.get(token_id).is_some(),
            ContractError::InvalidTokenId
        );
        Ok(self
            .balances
            .get(&(*token_id, *address))
            .map(|balance| *balance)
            .unwrap_or_else(|| ContractTokenAmount::from(0)))
    }

    /// Total circulating amount of `token_id`. Zero when the token is not
    /// defined.
    pub fn supply(&self, token_id: &ContractTokenId) -> ContractTokenAmount {
        self.tokens
            .get(token_id)
            .map(|def| def.supply)
            .unwrap_or_else(|| ContractTokenAmount::from(0))
    }

    /// The URI of a token: its plain content reference.
    pub fn token_uri(&self, token_id: &ContractTokenId) -> ContractResult<String> {
        Ok(self
            .tokens
            .get(token_id)
            .ok_or(ContractError::InvalidTokenId)?
            .content_ref
            .clone())
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
