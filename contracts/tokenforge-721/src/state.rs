use super::*;
use core::ops::DerefMut;

/// Data tracked for a single token.
#[derive(Debug, Clone, Serialize)]
pub struct TokenData {
    /// Current owner of the token.
    pub owner: Address,
    /// Content reference, appended to the base URI to form the token URI.
    pub content_ref: String,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Address that owns the contract. Set by `init` or by the factory
    /// through `initialize`.
    pub owner: Address,
    /// Whether the instance received its settings. Blank instances reject
    /// every operation until `initialize` is called.
    pub initialized: bool,
    /// Collection name.
    pub name: String,
    /// Collection symbol.
    pub symbol: String,
    /// Prefix for token URIs.
    pub base_uri: String,
    /// Public key of the backend that authorizes mints.
    pub signer: PublicKeyEd25519,
    /// Role assignments.
    pub roles: Roles<S>,
    /// All minted tokens.
    pub tokens: StateMap<ContractTokenId, TokenData, S>,
    /// Number of tokens held by each address.
    pub balances: StateMap<Address, u64, S>,
    /// Operators for each address.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
    /// Number of live tokens.
    pub supply: u64,
    /// Highest token ID handed out so far. Only ever moves forward.
    pub current_token_id: ContractTokenId,
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
            supply: 0,
            current_token_id: TOKEN_ID_AUTO,
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

    /// Next token ID for automatic assignment.
    pub fn next_token_id(&self) -> ContractTokenId {
        TokenIdU64(self.current_token_id.0 + 1)
    }

    /// Mint a token to `to`. Moves the ID counter forward when the minted ID
    /// is ahead of it.
    pub fn mint(
        &mut self,
        token_id: ContractTokenId,
        to: &Address,
        content_ref: String,
    ) -> ContractResult<()> {
        ensure!(
            self.tokens.get(&token_id).is_none(),
            CustomContractError::TokenIdAlreadyExists.into()
        );
        self.tokens.insert(
            token_id,
            TokenData {
                owner: *to,
                content_ref,
            },
        );
        *self.balances.entry(*to).or_insert(0) += 1;
        self.supply += 1;
        if token_id > self.current_token_id {
            self.current_token_id = token_id;
        }
        Ok(())
    }

    /// Remove a token. Returns the data of the burnt token.
    pub fn burn(&mut self, token_id: &ContractTokenId) -> ContractResult<TokenData> {
        let data = self
            .tokens
            .remove_and_get(token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        self.balances
            .get_mut(&data.owner)
            .map(|mut balance| *balance -= 1);
        self.supply -= 1;
        Ok(data)
    }

    /// Move a token from `from` to `to`. Fails unless `from` owns the token.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        from: &Address,
        to: &Address,
    ) -> ContractResult<()> {
        let mut data = self
            .tokens
            .get_mut(token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        ensure!(data.owner == *from, ContractError::InsufficientFunds);
        data.owner = *to;
        drop(data);
        self.balances
            .get_mut(from)
            .map(|mut balance| *balance -= 1);
        *self.balances.entry(*to).or_insert(0) += 1;
        Ok(())
    }

    /// Number of tokens of `token_id` held by `address`. Either zero or one.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        let data = self
            .tokens
            .get(token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        let amount = if data.owner == *address { 1u64 } else { 0u64 };
        Ok(ContractTokenAmount::from(amount))
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

    /// The full URI of a token: the base URI followed by the content
    /// reference of the token.
    pub fn token_uri(&self, token_id: &ContractTokenId) -> ContractResult<String> {
        let data = self
            .tokens
            .get(token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        let mut uri = self.base_uri.clone();
        uri.push_str(&data.content_ref);
        Ok(uri)
    }
}
