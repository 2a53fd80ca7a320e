use super::*;

/// Initialize a new contract instance. With a config the instance is ready
/// to use and the creator receives ownership and the initial roles. Without
/// one the instance stays blank until a factory calls `initialize`.
#[init(contract = "TokenForge20", parameter = "Option<TokenConfig>")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let owner = Address::Account(ctx.init_origin());
    let state = match ctx.parameter_cursor().get()? {
        Some(config) => {
            let mut state = State::new(state_builder, config, owner);
            state.roles.grant_initial(&owner, state_builder);
            state
        }
        None => State::blank(state_builder, owner),
    };
    Ok(state)
}

/// Deliver the settings to a blank instance. Called by the factory right
/// after registering the instance.
///
/// Logs a `RoleGranted` event for every initial role and an
/// `OwnershipTransferred` event.
#[receive(
    contract = "TokenForge20",
    name = "initialize",
    parameter = "InitializeParams",
    mutable,
    enable_logger
)]
fn initialize<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: InitializeParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let (state, state_builder) = host.state_and_builder();
    ensure!(
        !state.initialized,
        CustomContractError::AlreadyInitialized.into()
    );

    let previous_owner = state.owner;
    state.configure(params.config);
    state.owner = params.admin;
    state.roles.grant_initial(&params.admin, state_builder);

    for role in [Role::DefaultAdmin, Role::Admin, Role::Minter] {
        logger.log(&CustomEvent::RoleGranted(RoleUpdateEvent {
            role,
            address: params.admin,
            sender,
        }))?;
    }
    logger.log(&CustomEvent::OwnershipTransferred(OwnershipTransferredEvent {
        previous: previous_owner,
        new: params.admin,
    }))?;

    Ok(())
}

/// Mint an amount of the token. Restricted to the contract owner, and the
/// supply can never exceed the cap.
///
/// Logs a `Mint` event.
#[receive(
    contract = "TokenForge20",
    name = "mint",
    parameter = "MintParams",
    mutable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let state = host.state();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());
    ensure!(ctx.sender() == state.owner, CustomContractError::OnlyOwner.into());

    let params: MintParams = ctx.parameter_cursor().get()?;
    host.state_mut().mint(&params.to, params.amount)?;

    logger.log(&Cis2Event::Mint(MintEvent {
        token_id: FUNGIBLE_TOKEN_ID,
        amount: params.amount,
        owner: params.to,
    }))?;
    Ok(())
}

/// Burn an amount held by the caller.
///
/// Logs a `Burn` event.
#[receive(
    contract = "TokenForge20",
    name = "burn",
    parameter = "BurnParams",
    mutable,
    enable_logger
)]
fn burn<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        host.state().initialized,
        CustomContractError::NotInitialized.into()
    );

    let params: BurnParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    host.state_mut().burn(&sender, params.amount)?;

    logger.log(&Cis2Event::Burn::<TokenIdUnit, ContractTokenAmount>(
        BurnEvent {
            token_id: FUNGIBLE_TOKEN_ID,
            amount: params.amount,
            owner: sender,
        },
    ))?;
    Ok(())
}

/// Burn an amount held by any address. Restricted to addresses with the
/// burner role.
#[receive(
    contract = "TokenForge20",
    name = "burnAs",
    parameter = "BurnAsParams",
    mutable,
    enable_logger
)]
fn burn_as<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let state = host.state();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());
    ensure!(
        state.roles.has_role(&ctx.sender(), Role::Burner),
        CustomContractError::MissingBurnerRole.into()
    );

    let params: BurnAsParams = ctx.parameter_cursor().get()?;
    host.state_mut().burn(&params.from, params.amount)?;

    logger.log(&Cis2Event::Burn::<TokenIdUnit, ContractTokenAmount>(
        BurnEvent {
            token_id: FUNGIBLE_TOKEN_ID,
            amount: params.amount,
            owner: params.from,
        },
    ))?;
    Ok(())
}

/// Execute a list of token transfers. The sender has to own the amounts or
/// be an operator of the owner.
///
/// Logs a `Transfer` event for each transfer and invokes the receive hook
/// function when the receiver is a contract.
#[receive(
    contract = "TokenForge20",
    name = "transfer",
    parameter = "FungibleTransferParameter",
    mutable,
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        host.state().initialized,
        CustomContractError::NotInitialized.into()
    );

    let TransferParams(transfers): FungibleTransferParameter = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    for Transfer {
        token_id,
        amount,
        from,
        to,
        data,
    } in transfers
    {
        let state = host.state_mut();
        ensure!(
            from == sender || state.is_operator(&from, &sender),
            ContractError::Unauthorized
        );
        let to_address = to.address();
        state.transfer(&from, &to_address, amount)?;

        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id,
            amount,
            from,
            to: to_address,
        }))?;

        if let Receiver::Contract(address, function) = to {
            let parameter = OnReceivingCis2Params {
                token_id,
                amount,
                from,
                data,
            };
            host.invoke_contract(
                &address,
                &parameter,
                function.as_entrypoint_name(),
                Amount::zero(),
            )?;
        }
    }
    Ok(())
}

/// Execute a list of token transfers on behalf of the owners. Restricted to
/// addresses with the transferor role.
#[receive(
    contract = "TokenForge20",
    name = "transferAs",
    parameter = "FungibleTransferParameter",
    mutable,
    enable_logger
)]
fn transfer_as<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let state = host.state();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());
    ensure!(
        state.roles.has_role(&ctx.sender(), Role::Transferor),
        CustomContractError::MissingTransferorRole.into()
    );

    let TransferParams(transfers): FungibleTransferParameter = ctx.parameter_cursor().get()?;
    for Transfer {
        token_id,
        amount,
        from,
        to,
        ..
    } in transfers
    {
        let to_address = to.address();
        host.state_mut().transfer(&from, &to_address, amount)?;

        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id,
            amount,
            from,
            to: to_address,
        }))?;
    }
    Ok(())
}

/// Add or remove operators of the sender.
///
/// Logs an `UpdateOperator` event for each update.
#[receive(
    contract = "TokenForge20",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    mutable,
    enable_logger
)]
fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        host.state().initialized,
        CustomContractError::NotInitialized.into()
    );

    let UpdateOperatorParams(updates): UpdateOperatorParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    let (state, state_builder) = host.state_and_builder();

    for update in updates {
        match update.update {
            OperatorUpdate::Add => state.add_operator(&sender, &update.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &update.operator),
        }
        logger.log(
            &Cis2Event::<TokenIdUnit, ContractTokenAmount>::UpdateOperator(UpdateOperatorEvent {
                owner: sender,
                operator: update.operator,
                update: update.update,
            }),
        )?;
    }
    Ok(())
}

/// View function checking whether given addresses are operators of given
/// owners.
#[receive(
    contract = "TokenForge20",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    let params: OperatorOfQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    for query in params.queries {
        response.push(host.state().is_operator(&query.owner, &query.address));
    }
    Ok(OperatorOfQueryResponse::from(response))
}

/// View function querying the balance of given addresses.
#[receive(
    contract = "TokenForge20",
    name = "balanceOf",
    parameter = "FungibleBalanceOfQueryParams",
    return_value = "BalanceOfQueryResponse<ContractTokenAmount>"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<BalanceOfQueryResponse<ContractTokenAmount>> {
    let params: FungibleBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    for query in params.queries {
        response.push(host.state().balance(&query.address));
    }
    Ok(BalanceOfQueryResponse::from(response))
}

/// View function returning the circulating supply.
#[receive(
    contract = "TokenForge20",
    name = "totalSupply",
    return_value = "ContractTokenAmount"
)]
fn total_supply<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractTokenAmount> {
    Ok(host.state().supply)
}

/// Grant a role to an address. Restricted to addresses with the default
/// admin role.
///
/// Logs a `RoleGranted` event.
#[receive(
    contract = "TokenForge20",
    name = "grantRole",
    parameter = "RoleParams",
    mutable,
    enable_logger
)]
fn grant_role<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        host.state().initialized,
        CustomContractError::NotInitialized.into()
    );
    let sender = ctx.sender();
    host.state().roles.ensure_can_manage(&sender)?;

    let params: RoleParams = ctx.parameter_cursor().get()?;
    let (state, state_builder) = host.state_and_builder();
    state.roles.grant(&params.address, params.role, state_builder);

    logger.log(&CustomEvent::RoleGranted(RoleUpdateEvent {
        role: params.role,
        address: params.address,
        sender,
    }))?;
    Ok(())
}

/// Revoke a role from an address. Restricted to addresses with the default
/// admin role.
///
/// Logs a `RoleRevoked` event.
#[receive(
    contract = "TokenForge20",
    name = "revokeRole",
    parameter = "RoleParams",
    mutable,
    enable_logger
)]
fn revoke_role<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        host.state().initialized,
        CustomContractError::NotInitialized.into()
    );
    let sender = ctx.sender();
    host.state().roles.ensure_can_manage(&sender)?;

    let params: RoleParams = ctx.parameter_cursor().get()?;
    host.state_mut().roles.revoke(&params.address, params.role);

    logger.log(&CustomEvent::RoleRevoked(RoleUpdateEvent {
        role: params.role,
        address: params.address,
        sender,
    }))?;
    Ok(())
}

/// View function checking whether an address holds a role.
#[receive(
    contract = "TokenForge20",
    name = "hasRole",
    parameter = "RoleParams",
    return_value = "bool"
)]
fn has_role<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let params: RoleParams = ctx.parameter_cursor().get()?;
    Ok(host.state().roles.has_role(&params.address, params.role))
}

/// Move contract ownership, and with it the minting right, to a new address.
/// Restricted to the contract owner.
///
/// Logs an `OwnershipTransferred` event.
#[receive(
    contract = "TokenForge20",
    name = "transferOwnership",
    parameter = "Address",
    mutable,
    enable_logger
)]
fn transfer_ownership<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let state = host.state_mut();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());
    ensure!(ctx.sender() == state.owner, CustomContractError::OnlyOwner.into());

    let new_owner: Address = ctx.parameter_cursor().get()?;
    let previous = state.owner;
    state.owner = new_owner;

    logger.log(&CustomEvent::OwnershipTransferred(OwnershipTransferredEvent {
        previous,
        new: new_owner,
    }))?;
    Ok(())
}

/// View function returning the contract settings and supply.
#[receive(contract = "TokenForge20", name = "view", return_value = "ViewState")]
fn view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewState> {
    let state = host.state();
    Ok(ViewState {
        owner: state.owner,
        initialized: state.initialized,
        name: state.name.clone(),
        symbol: state.symbol.clone(),
        cap: state.cap,
        supply: state.supply,
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([0; 32]);
    const AXEL: AccountAddress = AccountAddress([1; 32]);
    const BEN: AccountAddress = AccountAddress([2; 32]);

    const ADDR_OWNER: Address = Address::Account(OWNER);
    const ADDR_AXEL: Address = Address::Account(AXEL);
    const ADDR_BEN: Address = Address::Account(BEN);

    fn token_config() -> TokenConfig {
        TokenConfig {
            name: "TokenForge Coin".to_string(),
            symbol: "TFC".to_string(),
            base_uri: String::new(),
            signer: PublicKeyEd25519([0; 32]),
            cap: None,
        }
    }

    fn initial_host() -> TestHost<State<TestStateApi>> {
        let mut state_builder = TestStateBuilder::new();
        let mut state = State::new(&mut state_builder, token_config(), ADDR_OWNER);
        state.roles.grant_initial(&ADDR_OWNER, &mut state_builder);
        TestHost::new(state, state_builder)
    }

    fn receive_ctx<'a>(sender: Address) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender);
        ctx
    }

    fn mint_to(host: &mut TestHost<State<TestStateApi>>, to: Address, amount: u64) {
        let params = MintParams {
            to,
            amount: TokenAmountU64(amount),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        mint(&ctx, host, &mut logger).expect_report("Minting failed");
    }

    #[concordium_test]
    fn test_init_uses_default_cap() {
        let config = Some(token_config());
        let parameter_bytes = to_bytes(&config);
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect_report("Init failed");

        claim!(state.initialized);
        claim_eq!(state.cap, DEFAULT_SUPPLY_CAP);
        claim_eq!(state.supply, TokenAmountU64(0));
    }

    #[concordium_test]
    fn test_mint_restricted_to_owner() {
        let mut host = initial_host();
        let params = MintParams {
            to: ADDR_AXEL,
            amount: TokenAmountU64(10),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        claim_eq!(
            mint(&ctx, &mut host, &mut logger),
            Err(CustomContractError::OnlyOwner.into())
        );
    }

    #[concordium_test]
    fn test_mint_and_cap() {
        let mut host = initial_host();
        mint_to(&mut host, ADDR_AXEL, 30);
        mint_to(&mut host, ADDR_BEN, 20);

        let state = host.state();
        claim_eq!(state.supply, DEFAULT_SUPPLY_CAP);
        claim_eq!(state.balance(&ADDR_AXEL), TokenAmountU64(30));
        claim_eq!(state.balance(&ADDR_BEN), TokenAmountU64(20));

        // The cap of 50 has been reached, a single extra unit is rejected.
        let params = MintParams {
            to: ADDR_AXEL,
            amount: TokenAmountU64(1),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            mint(&ctx, &mut host, &mut logger),
            Err(CustomContractError::CapExceeded.into())
        );
    }

    #[concordium_test]
    fn test_mint_rejects_wrapping_amount() {
        let mut host = initial_host();
        mint_to(&mut host, ADDR_AXEL, 1);

        // An amount that wraps the supply counter must not slip under the
        // cap.
        let params = MintParams {
            to: ADDR_BEN,
            amount: TokenAmountU64(u64::MAX),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            mint(&ctx, &mut host, &mut logger),
            Err(CustomContractError::CapExceeded.into())
        );
        claim_eq!(host.state().supply, TokenAmountU64(1));
        claim_eq!(host.state().balance(&ADDR_BEN), TokenAmountU64(0));
    }

    #[concordium_test]
    fn test_configured_cap_applies() {
        let mut state_builder = TestStateBuilder::new();
        let mut config = token_config();
        config.cap = Some(TokenAmountU64(5));
        let mut state = State::new(&mut state_builder, config, ADDR_OWNER);
        state.roles.grant_initial(&ADDR_OWNER, &mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        mint_to(&mut host, ADDR_AXEL, 5);

        let params = MintParams {
            to: ADDR_AXEL,
            amount: TokenAmountU64(1),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            mint(&ctx, &mut host, &mut logger),
            Err(CustomContractError::CapExceeded.into())
        );
    }

    #[concordium_test]
    fn test_transfer() {
        let mut host = initial_host();
        mint_to(&mut host, ADDR_AXEL, 10);

        let params = TransferParams::from(vec![Transfer {
            token_id: FUNGIBLE_TOKEN_ID,
            amount: TokenAmountU64(4),
            from: ADDR_AXEL,
            to: Receiver::from_account(BEN),
            data: AdditionalData::empty(),
        }]);
        let parameter_bytes = to_bytes(&params);

        // A third party can not move the amount.
        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            transfer(&ctx, &mut host, &mut logger),
            Err(ContractError::Unauthorized)
        );

        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        transfer(&ctx, &mut host, &mut logger).expect_report("Transfer failed");

        let state = host.state();
        claim_eq!(state.balance(&ADDR_AXEL), TokenAmountU64(6));
        claim_eq!(state.balance(&ADDR_BEN), TokenAmountU64(4));
        claim!(logger
            .logs
            .contains(&to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: FUNGIBLE_TOKEN_ID,
                amount: TokenAmountU64(4),
                from: ADDR_AXEL,
                to: ADDR_BEN,
            }))));
    }

    #[concordium_test]
    fn test_operator_transfer() {
        let mut host = initial_host();
        mint_to(&mut host, ADDR_AXEL, 10);

        let (state, state_builder) = host.state_and_builder();
        state.add_operator(&ADDR_AXEL, &ADDR_BEN, state_builder);

        let params = TransferParams::from(vec![Transfer {
            token_id: FUNGIBLE_TOKEN_ID,
            amount: TokenAmountU64(10),
            from: ADDR_AXEL,
            to: Receiver::from_account(BEN),
            data: AdditionalData::empty(),
        }]);
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        transfer(&ctx, &mut host, &mut logger).expect_report("Operator transfer failed");

        claim_eq!(host.state().balance(&ADDR_BEN), TokenAmountU64(10));
    }

    #[concordium_test]
    fn test_burn_frees_cap() {
        let mut host = initial_host();
        mint_to(&mut host, ADDR_AXEL, 50);

        let params = BurnParams {
            amount: TokenAmountU64(20),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        burn(&ctx, &mut host, &mut logger).expect_report("Burn failed");

        claim_eq!(host.state().supply, TokenAmountU64(30));

        // Burnt supply can be minted again.
        mint_to(&mut host, ADDR_BEN, 20);
        claim_eq!(host.state().supply, DEFAULT_SUPPLY_CAP);
    }

    #[concordium_test]
    fn test_burn_as_requires_role() {
        let mut host = initial_host();
        mint_to(&mut host, ADDR_AXEL, 10);

        let params = BurnAsParams {
            from: ADDR_AXEL,
            amount: TokenAmountU64(10),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            burn_as(&ctx, &mut host, &mut logger),
            Err(CustomContractError::MissingBurnerRole.into())
        );

        let (state, state_builder) = host.state_and_builder();
        state.roles.grant(&ADDR_BEN, Role::Burner, state_builder);

        let mut logger = TestLogger::init();
        burn_as(&ctx, &mut host, &mut logger).expect_report("Burn as failed");
        claim_eq!(host.state().supply, TokenAmountU64(0));
    }

    #[concordium_test]
    fn test_minting_right_follows_ownership() {
        let mut host = initial_host();

        let parameter_bytes = to_bytes(&ADDR_AXEL);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        transfer_ownership(&ctx, &mut host, &mut logger).expect_report("Ownership transfer failed");
        claim!(logger
            .logs
            .contains(&to_bytes(&CustomEvent::OwnershipTransferred(
                OwnershipTransferredEvent {
                    previous: ADDR_OWNER,
                    new: ADDR_AXEL,
                }
            ))));

        let params = MintParams {
            to: ADDR_BEN,
            amount: TokenAmountU64(1),
        };
        let parameter_bytes = to_bytes(&params);

        // The previous owner lost the minting right.
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            mint(&ctx, &mut host, &mut logger),
            Err(CustomContractError::OnlyOwner.into())
        );

        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        mint(&ctx, &mut host, &mut logger).expect_report("Minting failed");
        claim_eq!(host.state().balance(&ADDR_BEN), TokenAmountU64(1));
    }
}
