use super::*;

/// Initialize a new contract instance. With a config the instance is ready
/// to use and the creator receives ownership and the initial roles. Without
/// one the instance stays blank until a factory calls `initialize`.
#[init(contract = "TokenForge721", parameter = "Option<TokenConfig>")]
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
/// after registering the instance. Ownership and the initial roles go to the
/// admin chosen by the factory, not to the factory itself.
///
/// Logs a `RoleGranted` event for every initial role and an
/// `OwnershipTransferred` event.
///
/// It rejects if:
/// - The instance was already initialized.
/// - Fails to parse parameter.
/// - Fails to log an event.
#[receive(
    contract = "TokenForge721",
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

/// View function returning the digest the backend has to sign to authorize
/// the mint described by the message.
#[receive(
    contract = "TokenForge721",
    name = "createMessage",
    parameter = "MintMessage",
    return_value = "HashSha2256",
    crypto_primitives
)]
fn create_message<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    _host: &impl HasHost<State<S>, StateApiType = S>,
    crypto_primitives: &impl HasCryptoPrimitives,
) -> ContractResult<HashSha2256> {
    let message: MintMessage = ctx.parameter_cursor().get()?;
    Ok(signing_digest(crypto_primitives, &message))
}

/// Mint a token in the state and log the `Mint`, `TokenMetadata` and
/// `Issued` events. Authorization is checked by the caller.
fn mint_token<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    to: Address,
    token_id: ContractTokenId,
    content_ref: String,
) -> ContractResult<()> {
    ensure!(
        token_id != TOKEN_ID_AUTO,
        CustomContractError::ReservedTokenId.into()
    );

    let state = host.state_mut();
    state.mint(token_id, &to, content_ref.clone())?;
    let url = state.token_uri(&token_id)?;

    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner: to,
    }))?;
    logger.log(&Cis2Event::TokenMetadata::<_, ContractTokenAmount>(
        TokenMetadataEvent {
            token_id,
            metadata_url: MetadataUrl { url, hash: None },
        },
    ))?;
    logger.log(&CustomEvent::Issued(IssuedEvent {
        token_id,
        owner: to,
        content_ref,
    }))?;

    Ok(())
}

/// Mint a token with an explicit ID. Restricted to addresses with the minter
/// role.
///
/// It rejects if:
/// - The instance is not initialized.
/// - The sender has no minter role.
/// - The token ID already exists or is the reserved ID zero.
#[receive(
    contract = "TokenForge721",
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
    ensure!(
        state.roles.has_role(&ctx.sender(), Role::Minter),
        CustomContractError::MissingMinterRole.into()
    );

    let params: MintParams = ctx.parameter_cursor().get()?;
    mint_token(host, logger, params.to, params.token_id, params.content_ref)
}

/// Mint a token with the next free ID. Restricted to addresses with the
/// minter role.
#[receive(
    contract = "TokenForge721",
    name = "mintAuto",
    parameter = "MintAutoParams",
    mutable,
    enable_logger
)]
fn mint_auto<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let state = host.state();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());
    ensure!(
        state.roles.has_role(&ctx.sender(), Role::Minter),
        CustomContractError::MissingMinterRole.into()
    );

    let params: MintAutoParams = ctx.parameter_cursor().get()?;
    let token_id = host.state().next_token_id();
    mint_token(host, logger, params.to, token_id, params.content_ref)
}

/// Mint a token with an explicit ID to the caller, authorized by a backend
/// signature. The signed message is rebuilt from the caller and the
/// parameters, so a stolen signature is useless to any other address.
///
/// It rejects if:
/// - The instance is not initialized.
/// - The signature does not verify against the current backend signer.
/// - The token ID already exists or is the reserved ID zero.
#[receive(
    contract = "TokenForge721",
    name = "mintWithSignature",
    parameter = "SignedMintParams",
    mutable,
    enable_logger,
    crypto_primitives
)]
fn mint_with_signature<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    crypto_primitives: &impl HasCryptoPrimitives,
) -> ContractResult<()> {
    let state = host.state();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());

    let params: SignedMintParams = ctx.parameter_cursor().get()?;
    let message = MintMessage {
        to: ctx.sender(),
        token_id: params.token_id,
        content_ref: params.content_ref,
    };
    ensure!(
        verify_backend_signature(crypto_primitives, state.signer, params.signature, &message),
        CustomContractError::InvalidSignature.into()
    );

    mint_token(host, logger, message.to, message.token_id, message.content_ref)
}

/// Mint a token with the next free ID to the caller, authorized by a backend
/// signature over the reserved ID zero.
#[receive(
    contract = "TokenForge721",
    name = "mintAutoWithSignature",
    parameter = "SignedMintAutoParams",
    mutable,
    enable_logger,
    crypto_primitives
)]
fn mint_auto_with_signature<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    crypto_primitives: &impl HasCryptoPrimitives,
) -> ContractResult<()> {
    let state = host.state();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());

    let params: SignedMintAutoParams = ctx.parameter_cursor().get()?;
    let message = MintMessage {
        to: ctx.sender(),
        token_id: TOKEN_ID_AUTO,
        content_ref: params.content_ref,
    };
    ensure!(
        verify_backend_signature(crypto_primitives, state.signer, params.signature, &message),
        CustomContractError::InvalidSignature.into()
    );

    let token_id = host.state().next_token_id();
    mint_token(host, logger, message.to, token_id, message.content_ref)
}

/// Mint a token against payment, authorized by a backend signature over the
/// token ID and the price. The attached amount has to match the signed price
/// exactly. The receiver is not part of the message, whoever pays first gets
/// the token.
///
/// It rejects if:
/// - The instance is not initialized.
/// - The attached amount does not match the signed price.
/// - The signature does not verify against the current backend signer.
/// - The token ID already exists or is the reserved ID zero.
#[receive(
    contract = "TokenForge721",
    name = "mintPriced",
    parameter = "SignedPricedMintParams",
    mutable,
    payable,
    enable_logger,
    crypto_primitives
)]
fn mint_priced<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
    crypto_primitives: &impl HasCryptoPrimitives,
) -> ContractResult<()> {
    let state = host.state();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());

    let params: SignedPricedMintParams = ctx.parameter_cursor().get()?;
    ensure!(
        amount == params.price,
        CustomContractError::PriceMismatch.into()
    );

    let message = PricedMintMessage {
        token_id: params.token_id,
        price: params.price,
        content_ref: params.content_ref,
    };
    ensure!(
        verify_backend_signature(crypto_primitives, state.signer, params.signature, &message),
        CustomContractError::InvalidSignature.into()
    );

    mint_token(host, logger, ctx.sender(), message.token_id, message.content_ref)
}

/// Burn a token of the caller. Operators of the token owner may burn as
/// well.
///
/// Logs a `Burn` event.
#[receive(
    contract = "TokenForge721",
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
    let state = host.state();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());

    let params: BurnParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    let owner = state
        .tokens
        .get(&params.token_id)
        .ok_or(ContractError::InvalidTokenId)?
        .owner;
    ensure!(
        sender == owner || state.is_operator(&owner, &sender),
        ContractError::Unauthorized
    );

    host.state_mut().burn(&params.token_id)?;
    logger.log(&Cis2Event::Burn::<_, ContractTokenAmount>(BurnEvent {
        token_id: params.token_id,
        amount: ContractTokenAmount::from(1),
        owner,
    }))?;
    Ok(())
}

/// Burn any token. Restricted to addresses with the burner role.
#[receive(
    contract = "TokenForge721",
    name = "burnAs",
    parameter = "BurnParams",
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

    let params: BurnParams = ctx.parameter_cursor().get()?;
    let data = host.state_mut().burn(&params.token_id)?;
    logger.log(&Cis2Event::Burn::<_, ContractTokenAmount>(BurnEvent {
        token_id: params.token_id,
        amount: ContractTokenAmount::from(1),
        owner: data.owner,
    }))?;
    Ok(())
}

/// Execute a list of token transfers. The sender has to own the tokens or be
/// an operator of the owner.
///
/// Logs a `Transfer` event for each transfer and invokes the receive hook
/// function when the receiver is a contract.
#[receive(
    contract = "TokenForge721",
    name = "transfer",
    parameter = "TransferParameter",
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

    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
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
            amount == ContractTokenAmount::from(1),
            ContractError::InsufficientFunds
        );
        ensure!(
            from == sender || state.is_operator(&from, &sender),
            ContractError::Unauthorized
        );
        let to_address = to.address();
        state.transfer(&token_id, &from, &to_address)?;

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

/// Execute a list of token transfers on behalf of the token owners.
/// Restricted to addresses with the transferor role.
#[receive(
    contract = "TokenForge721",
    name = "transferAs",
    parameter = "TransferParameter",
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

    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    for Transfer {
        token_id,
        amount,
        from,
        to,
        ..
    } in transfers
    {
        ensure!(
            amount == ContractTokenAmount::from(1),
            ContractError::InsufficientFunds
        );
        let to_address = to.address();
        host.state_mut().transfer(&token_id, &from, &to_address)?;

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
    contract = "TokenForge721",
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
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: update.operator,
                    update: update.update,
                },
            ),
        )?;
    }
    Ok(())
}

/// View function checking whether given addresses are operators of given
/// owners.
#[receive(
    contract = "TokenForge721",
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

/// View function querying the balance of given token IDs and addresses.
#[receive(
    contract = "TokenForge721",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    let params: ContractBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    for query in params.queries {
        response.push(host.state().balance(&query.token_id, &query.address)?);
    }
    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// View function returning the full URI of a token.
#[receive(
    contract = "TokenForge721",
    name = "tokenUri",
    parameter = "ContractTokenId",
    return_value = "String"
)]
fn token_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().token_uri(&token_id)
}

/// View function returning the number of live tokens.
#[receive(
    contract = "TokenForge721",
    name = "totalSupply",
    return_value = "ContractTokenAmount"
)]
fn total_supply<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractTokenAmount> {
    Ok(ContractTokenAmount::from(host.state().supply))
}

/// View function returning the highest token ID handed out so far.
#[receive(
    contract = "TokenForge721",
    name = "currentTokenId",
    return_value = "ContractTokenId"
)]
fn current_token_id<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractTokenId> {
    Ok(host.state().current_token_id)
}

/// Move the token ID counter forward. Restricted to the contract owner. The
/// counter never moves backwards, so already minted IDs stay untouched.
#[receive(
    contract = "TokenForge721",
    name = "setTokenId",
    parameter = "ContractTokenId",
    mutable
)]
fn set_token_id<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let state = host.state_mut();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());
    ensure!(ctx.sender() == state.owner, CustomContractError::OnlyOwner.into());

    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    ensure!(
        token_id > state.current_token_id,
        CustomContractError::TokenIdTooLow.into()
    );
    state.current_token_id = token_id;
    Ok(())
}

/// Replace the backend signer public key. Restricted to the contract owner.
///
/// Logs a `SignerChanged` event.
#[receive(
    contract = "TokenForge721",
    name = "setSigner",
    parameter = "PublicKeyEd25519",
    mutable,
    enable_logger
)]
fn set_signer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let state = host.state_mut();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());
    ensure!(ctx.sender() == state.owner, CustomContractError::OnlyOwner.into());

    let new_signer: PublicKeyEd25519 = ctx.parameter_cursor().get()?;
    let previous = state.signer;
    state.signer = new_signer;

    logger.log(&CustomEvent::SignerChanged(SignerChangedEvent {
        previous,
        new: new_signer,
    }))?;
    Ok(())
}

/// Replace the base URI for token metadata. Restricted to the contract
/// owner.
///
/// Logs a `BaseUriChanged` event with the previous and the new value.
#[receive(
    contract = "TokenForge721",
    name = "setBaseUri",
    parameter = "String",
    mutable,
    enable_logger
)]
fn set_base_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let state = host.state_mut();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());
    ensure!(ctx.sender() == state.owner, CustomContractError::OnlyOwner.into());

    let base_uri: String = ctx.parameter_cursor().get()?;
    let previous = state.base_uri.clone();
    state.base_uri = base_uri.clone();

    logger.log(&CustomEvent::BaseUriChanged(BaseUriChangedEvent {
        previous,
        new: base_uri,
    }))?;
    Ok(())
}

/// Grant a role to an address. Restricted to addresses with the default
/// admin role.
///
/// Logs a `RoleGranted` event.
#[receive(
    contract = "TokenForge721",
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
    contract = "TokenForge721",
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
    contract = "TokenForge721",
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

/// Move contract ownership to a new address. Restricted to the contract
/// owner.
///
/// Logs an `OwnershipTransferred` event.
#[receive(
    contract = "TokenForge721",
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

/// Send the collected contract balance to the owner. Restricted to the
/// contract owner, who has to be an account.
#[receive(contract = "TokenForge721", name = "withdraw", mutable)]
fn withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let state = host.state();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());
    ensure!(ctx.sender() == state.owner, CustomContractError::OnlyOwner.into());

    let account = match state.owner {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };
    let balance = host.self_balance();
    Ok(host.invoke_transfer(&account, balance)?)
}

/// View function returning the contract settings and counters.
#[receive(contract = "TokenForge721", name = "view", return_value = "ViewState")]
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
        base_uri: state.base_uri.clone(),
        signer: state.signer,
        supply: state.supply,
        current_token_id: state.current_token_id,
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([0; 32]);
    const AXEL: AccountAddress = AccountAddress([1; 32]);
    const BEN: AccountAddress = AccountAddress([2; 32]);
    const CHANTAL: AccountAddress = AccountAddress([3; 32]);

    const ADDR_OWNER: Address = Address::Account(OWNER);
    const ADDR_AXEL: Address = Address::Account(AXEL);
    const ADDR_BEN: Address = Address::Account(BEN);
    const ADDR_CHANTAL: Address = Address::Account(CHANTAL);

    const FACTORY: Address = Address::Contract(ContractAddress {
        index: 5,
        subindex: 0,
    });

    const BASE_URI: &str = "https://ipfs.tokenforge.io/";
    const CONTENT_REF: &str = "NgcFOAfYXwVrmQrUOyB0U5kWU4w1a8Gf2gPPTPBrGTqTl-6qe7ERStbEMamFV4niv1bhFKI5167vzMLApLOEBs0ArvvUiClrRAFb=w600";

    const TOKEN_1001: ContractTokenId = TokenIdU64(1001);

    const SIGNER_1: PublicKeyEd25519 = PublicKeyEd25519([
        95, 174, 191, 9, 20, 203, 166, 103, 85, 59, 188, 31, 36, 17, 174, 26,
        51, 89, 253, 148, 124, 222, 1, 239, 178, 50, 139, 32, 22, 107, 169, 102,
    ]);
    const SIGNER_2: PublicKeyEd25519 = PublicKeyEd25519([
        95, 230, 223, 221, 184, 185, 213, 157, 5, 102, 221, 197, 69, 160, 19, 44,
        89, 159, 95, 147, 27, 67, 244, 29, 30, 67, 93, 101, 49, 234, 138, 143,
    ]);

    /// Backend signature for minting token 1001 with `CONTENT_REF` to AXEL.
    const SIG_MINT_1001_AXEL: SignatureEd25519 = SignatureEd25519([
        175, 161, 136, 96, 246, 230, 225, 97, 207, 129, 112, 157, 191, 243, 90, 150,
        151, 232, 48, 143, 93, 51, 172, 31, 18, 174, 170, 178, 18, 75, 168, 177,
        228, 233, 85, 79, 118, 149, 100, 169, 9, 180, 92, 95, 166, 146, 167, 44,
        94, 124, 137, 178, 204, 223, 94, 175, 187, 32, 161, 66, 23, 170, 133, 2,
    ]);

    /// Backend signature for minting the next free token to AXEL.
    const SIG_MINT_AUTO_AXEL: SignatureEd25519 = SignatureEd25519([
        50, 85, 119, 38, 175, 51, 5, 33, 151, 199, 249, 182, 136, 230, 69, 30,
        187, 35, 7, 249, 97, 79, 46, 242, 58, 73, 208, 71, 240, 23, 107, 135,
        82, 185, 172, 219, 188, 174, 79, 132, 211, 244, 90, 228, 148, 6, 1, 61,
        244, 202, 11, 124, 210, 4, 201, 46, 24, 11, 54, 133, 49, 10, 185, 10,
    ]);

    /// Backend signature for minting token 7 against a payment of 1.2 CCD.
    const SIG_MINT_PRICED_7: SignatureEd25519 = SignatureEd25519([
        36, 245, 137, 68, 76, 207, 145, 195, 123, 103, 188, 5, 108, 84, 143, 176,
        50, 184, 41, 254, 103, 196, 7, 32, 96, 90, 30, 197, 112, 63, 106, 168,
        183, 185, 205, 192, 161, 225, 47, 219, 152, 162, 2, 6, 230, 74, 51, 134,
        167, 82, 70, 187, 157, 151, 177, 254, 175, 194, 219, 179, 31, 236, 193, 0,
    ]);

    fn token_config() -> TokenConfig {
        TokenConfig {
            name: "TokenForge".to_string(),
            symbol: "TF".to_string(),
            base_uri: BASE_URI.to_string(),
            signer: SIGNER_1,
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

    fn mint_to(host: &mut TestHost<State<TestStateApi>>, to: Address, token_id: ContractTokenId) {
        let params = MintParams {
            to,
            token_id,
            content_ref: CONTENT_REF.to_string(),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        mint(&ctx, host, &mut logger).expect_report("Minting failed");
    }

    #[concordium_test]
    fn test_init_with_config() {
        let config = Some(token_config());
        let parameter_bytes = to_bytes(&config);
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect_report("Init failed");

        claim!(state.initialized);
        claim_eq!(state.owner, ADDR_OWNER);
        claim_eq!(state.name, "TokenForge");
        claim_eq!(state.symbol, "TF");
        claim_eq!(state.base_uri, BASE_URI);
        claim_eq!(state.signer, SIGNER_1);
        claim_eq!(state.supply, 0);
        claim_eq!(state.current_token_id, TOKEN_ID_AUTO);
        claim!(state.roles.has_role(&ADDR_OWNER, Role::DefaultAdmin));
        claim!(state.roles.has_role(&ADDR_OWNER, Role::Admin));
        claim!(state.roles.has_role(&ADDR_OWNER, Role::Minter));
        claim!(!state.roles.has_role(&ADDR_OWNER, Role::Burner));
    }

    #[concordium_test]
    fn test_initialize_blank_instance() {
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(OWNER);
        let parameter_bytes = to_bytes::<Option<TokenConfig>>(&None);
        ctx.set_parameter(&parameter_bytes);
        let mut state_builder = TestStateBuilder::new();
        let state = init(&ctx, &mut state_builder).expect_report("Init failed");
        claim!(!state.initialized);
        let mut host = TestHost::new(state, state_builder);

        // A blank instance rejects operations.
        let params = MintParams {
            to: ADDR_AXEL,
            token_id: TokenIdU64(1),
            content_ref: CONTENT_REF.to_string(),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            mint(&ctx, &mut host, &mut logger),
            Err(CustomContractError::NotInitialized.into())
        );

        // The factory delivers the settings on behalf of AXEL.
        let params = InitializeParams {
            admin: ADDR_AXEL,
            config: token_config(),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(FACTORY);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        initialize(&ctx, &mut host, &mut logger).expect_report("Initialize failed");

        let state = host.state();
        claim!(state.initialized);
        claim_eq!(state.owner, ADDR_AXEL);
        claim_eq!(state.signer, SIGNER_1);
        claim!(state.roles.has_role(&ADDR_AXEL, Role::DefaultAdmin));
        claim!(state.roles.has_role(&ADDR_AXEL, Role::Admin));
        claim!(state.roles.has_role(&ADDR_AXEL, Role::Minter));
        claim!(logger.logs.contains(&to_bytes(&CustomEvent::RoleGranted(
            RoleUpdateEvent {
                role: Role::Minter,
                address: ADDR_AXEL,
                sender: FACTORY,
            }
        ))));
        claim!(logger
            .logs
            .contains(&to_bytes(&CustomEvent::OwnershipTransferred(
                OwnershipTransferredEvent {
                    previous: ADDR_OWNER,
                    new: ADDR_AXEL,
                }
            ))));

        // A second initialization must fail.
        let mut logger = TestLogger::init();
        claim_eq!(
            initialize(&ctx, &mut host, &mut logger),
            Err(CustomContractError::AlreadyInitialized.into())
        );
    }

    #[concordium_test]
    fn test_mint_requires_minter_role() {
        let mut host = initial_host();
        let params = MintParams {
            to: ADDR_BEN,
            token_id: TokenIdU64(1),
            content_ref: CONTENT_REF.to_string(),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        claim_eq!(
            mint(&ctx, &mut host, &mut logger),
            Err(CustomContractError::MissingMinterRole.into())
        );
    }

    #[concordium_test]
    fn test_mint() {
        let mut host = initial_host();
        let params = MintParams {
            to: ADDR_BEN,
            token_id: TokenIdU64(5),
            content_ref: CONTENT_REF.to_string(),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        mint(&ctx, &mut host, &mut logger).expect_report("Minting failed");

        let state = host.state();
        claim_eq!(state.supply, 1);
        claim_eq!(state.current_token_id, TokenIdU64(5));
        claim_eq!(
            state
                .balance(&TokenIdU64(5), &ADDR_BEN)
                .expect_report("Token must exist"),
            TokenAmountU64(1)
        );
        claim!(logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
            token_id: TokenIdU64(5),
            amount: ContractTokenAmount::from(1),
            owner: ADDR_BEN,
        }))));
        claim!(logger
            .logs
            .contains(&to_bytes(&Cis2Event::TokenMetadata::<_, ContractTokenAmount>(
                TokenMetadataEvent {
                    token_id: TokenIdU64(5),
                    metadata_url: MetadataUrl {
                        url: format!("{}{}", BASE_URI, CONTENT_REF),
                        hash: None,
                    },
                }
            ))));
        claim!(logger.logs.contains(&to_bytes(&CustomEvent::Issued(IssuedEvent {
            token_id: TokenIdU64(5),
            owner: ADDR_BEN,
            content_ref: CONTENT_REF.to_string(),
        }))));

        // The same ID can not be minted twice.
        let mut logger = TestLogger::init();
        claim_eq!(
            mint(&ctx, &mut host, &mut logger),
            Err(CustomContractError::TokenIdAlreadyExists.into())
        );
    }

    #[concordium_test]
    fn test_mint_with_signature() {
        let mut host = initial_host();
        let params = SignedMintParams {
            token_id: TOKEN_1001,
            content_ref: CONTENT_REF.to_string(),
            signature: SIG_MINT_1001_AXEL,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        let crypto_primitives = TestCryptoPrimitives::new();

        mint_with_signature(&ctx, &mut host, &mut logger, &crypto_primitives)
            .expect_report("Signed minting failed");

        let state = host.state();
        claim_eq!(state.current_token_id, TOKEN_1001);
        claim_eq!(
            state
                .balance(&TOKEN_1001, &ADDR_AXEL)
                .expect_report("Token must exist"),
            TokenAmountU64(1)
        );

        // The one-shot nature of token IDs stops signature replay.
        let mut logger = TestLogger::init();
        claim_eq!(
            mint_with_signature(&ctx, &mut host, &mut logger, &crypto_primitives),
            Err(CustomContractError::TokenIdAlreadyExists.into())
        );
    }

    #[concordium_test]
    fn test_mint_with_signature_wrong_caller() {
        let mut host = initial_host();
        let params = SignedMintParams {
            token_id: TOKEN_1001,
            content_ref: CONTENT_REF.to_string(),
            signature: SIG_MINT_1001_AXEL,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        let crypto_primitives = TestCryptoPrimitives::new();

        claim_eq!(
            mint_with_signature(&ctx, &mut host, &mut logger, &crypto_primitives),
            Err(CustomContractError::InvalidSignature.into())
        );
    }

    #[concordium_test]
    fn test_mint_with_signature_wrong_signer() {
        let mut host = initial_host();
        host.state_mut().signer = SIGNER_2;

        let params = SignedMintParams {
            token_id: TOKEN_1001,
            content_ref: CONTENT_REF.to_string(),
            signature: SIG_MINT_1001_AXEL,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        let crypto_primitives = TestCryptoPrimitives::new();

        claim_eq!(
            mint_with_signature(&ctx, &mut host, &mut logger, &crypto_primitives),
            Err(CustomContractError::InvalidSignature.into())
        );
    }

    #[concordium_test]
    fn test_mint_auto_with_signature() {
        let mut host = initial_host();
        let params = SignedMintAutoParams {
            content_ref: CONTENT_REF.to_string(),
            signature: SIG_MINT_AUTO_AXEL,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        let crypto_primitives = TestCryptoPrimitives::new();

        mint_auto_with_signature(&ctx, &mut host, &mut logger, &crypto_primitives)
            .expect_report("Signed auto minting failed");

        let state = host.state();
        claim_eq!(state.current_token_id, TokenIdU64(1));
        claim_eq!(
            state
                .balance(&TokenIdU64(1), &ADDR_AXEL)
                .expect_report("Token must exist"),
            TokenAmountU64(1)
        );
    }

    #[concordium_test]
    fn test_mint_priced() {
        let mut host = initial_host();
        let price = Amount::from_micro_ccd(1_200_000);
        let params = SignedPricedMintParams {
            token_id: TokenIdU64(7),
            price,
            content_ref: CONTENT_REF.to_string(),
            signature: SIG_MINT_PRICED_7,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_CHANTAL);
        ctx.set_parameter(&parameter_bytes);
        let crypto_primitives = TestCryptoPrimitives::new();

        // Wrong attached amount.
        let mut logger = TestLogger::init();
        claim_eq!(
            mint_priced(
                &ctx,
                &mut host,
                Amount::from_micro_ccd(1_000_000),
                &mut logger,
                &crypto_primitives
            ),
            Err(CustomContractError::PriceMismatch.into())
        );

        let mut logger = TestLogger::init();
        mint_priced(&ctx, &mut host, price, &mut logger, &crypto_primitives)
            .expect_report("Priced minting failed");

        claim_eq!(
            host.state()
                .balance(&TokenIdU64(7), &ADDR_CHANTAL)
                .expect_report("Token must exist"),
            TokenAmountU64(1)
        );
    }

    #[concordium_test]
    fn test_create_message() {
        let host = initial_host();
        let message = MintMessage {
            to: ADDR_AXEL,
            token_id: TOKEN_1001,
            content_ref: CONTENT_REF.to_string(),
        };
        let parameter_bytes = to_bytes(&message);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let crypto_primitives = TestCryptoPrimitives::new();

        let digest =
            create_message(&ctx, &host, &crypto_primitives).expect_report("View must succeed");
        claim_eq!(digest, signing_digest(&crypto_primitives, &message));
    }

    #[concordium_test]
    fn test_transfer() {
        let mut host = initial_host();
        mint_to(&mut host, ADDR_AXEL, TokenIdU64(1));

        let params = TransferParams::from(vec![Transfer {
            token_id: TokenIdU64(1),
            amount: ContractTokenAmount::from(1),
            from: ADDR_AXEL,
            to: Receiver::from_account(BEN),
            data: AdditionalData::empty(),
        }]);
        let parameter_bytes = to_bytes(&params);

        // A third party can not move the token.
        let mut ctx = receive_ctx(ADDR_CHANTAL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            transfer(&ctx, &mut host, &mut logger),
            Err(ContractError::Unauthorized)
        );

        // The owner can.
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        transfer(&ctx, &mut host, &mut logger).expect_report("Transfer failed");

        let state = host.state();
        claim_eq!(
            state
                .balance(&TokenIdU64(1), &ADDR_BEN)
                .expect_report("Token must exist"),
            TokenAmountU64(1)
        );
        claim_eq!(
            state
                .balance(&TokenIdU64(1), &ADDR_AXEL)
                .expect_report("Token must exist"),
            TokenAmountU64(0)
        );
        claim!(logger
            .logs
            .contains(&to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: TokenIdU64(1),
                amount: ContractTokenAmount::from(1),
                from: ADDR_AXEL,
                to: ADDR_BEN,
            }))));
    }

    #[concordium_test]
    fn test_operator_can_transfer() {
        let mut host = initial_host();
        mint_to(&mut host, ADDR_AXEL, TokenIdU64(1));

        // AXEL makes CHANTAL an operator.
        let params = UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Add,
            operator: ADDR_CHANTAL,
        }]);
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        update_operator(&ctx, &mut host, &mut logger).expect_report("Operator update failed");
        claim!(host.state().is_operator(&ADDR_AXEL, &ADDR_CHANTAL));

        let params = TransferParams::from(vec![Transfer {
            token_id: TokenIdU64(1),
            amount: ContractTokenAmount::from(1),
            from: ADDR_AXEL,
            to: Receiver::from_account(BEN),
            data: AdditionalData::empty(),
        }]);
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_CHANTAL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        transfer(&ctx, &mut host, &mut logger).expect_report("Operator transfer failed");

        claim_eq!(
            host.state()
                .balance(&TokenIdU64(1), &ADDR_BEN)
                .expect_report("Token must exist"),
            TokenAmountU64(1)
        );
    }

    #[concordium_test]
    fn test_transfer_as_requires_role() {
        let mut host = initial_host();
        mint_to(&mut host, ADDR_BEN, TokenIdU64(1));

        let params = TransferParams::from(vec![Transfer {
            token_id: TokenIdU64(1),
            amount: ContractTokenAmount::from(1),
            from: ADDR_BEN,
            to: Receiver::from_account(CHANTAL),
            data: AdditionalData::empty(),
        }]);
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_CHANTAL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            transfer_as(&ctx, &mut host, &mut logger),
            Err(CustomContractError::MissingTransferorRole.into())
        );

        let (state, state_builder) = host.state_and_builder();
        state.roles.grant(&ADDR_CHANTAL, Role::Transferor, state_builder);

        let mut logger = TestLogger::init();
        transfer_as(&ctx, &mut host, &mut logger).expect_report("Transfer as failed");
        claim_eq!(
            host.state()
                .balance(&TokenIdU64(1), &ADDR_CHANTAL)
                .expect_report("Token must exist"),
            TokenAmountU64(1)
        );
    }

    #[concordium_test]
    fn test_burn() {
        let mut host = initial_host();
        mint_to(&mut host, ADDR_AXEL, TokenIdU64(1));

        let params = BurnParams {
            token_id: TokenIdU64(1),
        };
        let parameter_bytes = to_bytes(&params);

        // Only the token owner can burn.
        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            burn(&ctx, &mut host, &mut logger),
            Err(ContractError::Unauthorized)
        );

        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        burn(&ctx, &mut host, &mut logger).expect_report("Burn failed");

        claim_eq!(host.state().supply, 0);
        claim_eq!(
            host.state().balance(&TokenIdU64(1), &ADDR_AXEL),
            Err(ContractError::InvalidTokenId)
        );
        claim!(logger
            .logs
            .contains(&to_bytes(&Cis2Event::Burn::<_, ContractTokenAmount>(BurnEvent {
                token_id: TokenIdU64(1),
                amount: ContractTokenAmount::from(1),
                owner: ADDR_AXEL,
            }))));
    }

    #[concordium_test]
    fn test_burn_as_requires_role() {
        let mut host = initial_host();
        mint_to(&mut host, ADDR_AXEL, TokenIdU64(1));

        let params = BurnParams {
            token_id: TokenIdU64(1),
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
        claim_eq!(host.state().supply, 0);
    }

    #[concordium_test]
    fn test_set_token_id() {
        let mut host = initial_host();

        let parameter_bytes = to_bytes(&TokenIdU64(100));
        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(
            set_token_id(&ctx, &mut host),
            Err(CustomContractError::OnlyOwner.into())
        );

        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        set_token_id(&ctx, &mut host).expect_report("Setting token ID failed");
        claim_eq!(host.state().current_token_id, TokenIdU64(100));

        // The counter never moves backwards.
        let parameter_bytes = to_bytes(&TokenIdU64(50));
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(
            set_token_id(&ctx, &mut host),
            Err(CustomContractError::TokenIdTooLow.into())
        );
        claim_eq!(host.state().current_token_id, TokenIdU64(100));
    }

    #[concordium_test]
    fn test_set_signer() {
        let mut host = initial_host();
        let parameter_bytes = to_bytes(&SIGNER_2);

        // Even an admin can not rotate the signer, only the owner.
        let (state, state_builder) = host.state_and_builder();
        state.roles.grant(&ADDR_BEN, Role::Admin, state_builder);
        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            set_signer(&ctx, &mut host, &mut logger),
            Err(CustomContractError::OnlyOwner.into())
        );
        claim_eq!(host.state().signer, SIGNER_1);

        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        set_signer(&ctx, &mut host, &mut logger).expect_report("Setting signer failed");

        claim_eq!(host.state().signer, SIGNER_2);
        claim!(logger
            .logs
            .contains(&to_bytes(&CustomEvent::SignerChanged(SignerChangedEvent {
                previous: SIGNER_1,
                new: SIGNER_2,
            }))));

        // Signatures of the previous signer stop working.
        let params = SignedMintParams {
            token_id: TOKEN_1001,
            content_ref: CONTENT_REF.to_string(),
            signature: SIG_MINT_1001_AXEL,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        let crypto_primitives = TestCryptoPrimitives::new();
        claim_eq!(
            mint_with_signature(&ctx, &mut host, &mut logger, &crypto_primitives),
            Err(CustomContractError::InvalidSignature.into())
        );
    }

    #[concordium_test]
    fn test_set_base_uri() {
        let mut host = initial_host();
        mint_to(&mut host, ADDR_AXEL, TokenIdU64(1));

        let new_base = "https://cdn.tokenforge.io/".to_string();
        let parameter_bytes = to_bytes(&new_base);

        // Neither a plain account nor an admin can change the base URI.
        let (state, state_builder) = host.state_and_builder();
        state.roles.grant(&ADDR_BEN, Role::Admin, state_builder);
        for sender in [ADDR_CHANTAL, ADDR_BEN] {
            let mut ctx = receive_ctx(sender);
            ctx.set_parameter(&parameter_bytes);
            let mut logger = TestLogger::init();
            claim_eq!(
                set_base_uri(&ctx, &mut host, &mut logger),
                Err(CustomContractError::OnlyOwner.into())
            );
        }
        claim_eq!(host.state().base_uri, BASE_URI);

        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        set_base_uri(&ctx, &mut host, &mut logger).expect_report("Setting base URI failed");

        // The event carries the previous and the new value.
        claim!(logger
            .logs
            .contains(&to_bytes(&CustomEvent::BaseUriChanged(BaseUriChangedEvent {
                previous: BASE_URI.to_string(),
                new: new_base.clone(),
            }))));

        let parameter_bytes = to_bytes(&TokenIdU64(1));
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let uri = token_uri(&ctx, &host).expect_report("Token URI query failed");
        claim_eq!(uri, format!("{}{}", new_base, CONTENT_REF));
    }

    #[concordium_test]
    fn test_role_management() {
        let mut host = initial_host();
        let params = RoleParams {
            address: ADDR_BEN,
            role: Role::Minter,
        };
        let parameter_bytes = to_bytes(&params);

        // Granting requires the default admin role.
        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            grant_role(&ctx, &mut host, &mut logger),
            Err(CustomContractError::MissingAdminRole.into())
        );

        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        grant_role(&ctx, &mut host, &mut logger).expect_report("Granting role failed");
        claim!(host.state().roles.has_role(&ADDR_BEN, Role::Minter));
        claim!(logger.logs.contains(&to_bytes(&CustomEvent::RoleGranted(
            RoleUpdateEvent {
                role: Role::Minter,
                address: ADDR_BEN,
                sender: ADDR_OWNER,
            }
        ))));

        let has = {
            let mut ctx = receive_ctx(ADDR_CHANTAL);
            ctx.set_parameter(&parameter_bytes);
            has_role(&ctx, &host).expect_report("Role query failed")
        };
        claim!(has);

        let mut logger = TestLogger::init();
        revoke_role(&ctx, &mut host, &mut logger).expect_report("Revoking role failed");
        claim!(!host.state().roles.has_role(&ADDR_BEN, Role::Minter));
        claim!(logger.logs.contains(&to_bytes(&CustomEvent::RoleRevoked(
            RoleUpdateEvent {
                role: Role::Minter,
                address: ADDR_BEN,
                sender: ADDR_OWNER,
            }
        ))));
    }

    #[concordium_test]
    fn test_transfer_ownership() {
        let mut host = initial_host();
        let parameter_bytes = to_bytes(&ADDR_AXEL);

        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            transfer_ownership(&ctx, &mut host, &mut logger),
            Err(CustomContractError::OnlyOwner.into())
        );

        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        transfer_ownership(&ctx, &mut host, &mut logger).expect_report("Ownership transfer failed");

        claim_eq!(host.state().owner, ADDR_AXEL);
        claim!(logger
            .logs
            .contains(&to_bytes(&CustomEvent::OwnershipTransferred(
                OwnershipTransferredEvent {
                    previous: ADDR_OWNER,
                    new: ADDR_AXEL,
                }
            ))));

        // The previous owner lost owner-only access.
        let parameter_bytes = to_bytes(&TokenIdU64(10));
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(
            set_token_id(&ctx, &mut host),
            Err(CustomContractError::OnlyOwner.into())
        );
    }

    #[concordium_test]
    fn test_withdraw() {
        let mut host = initial_host();
        let balance = Amount::from_micro_ccd(2_400_000);
        host.set_self_balance(balance);

        let ctx = receive_ctx(ADDR_BEN);
        claim_eq!(
            withdraw(&ctx, &mut host),
            Err(CustomContractError::OnlyOwner.into())
        );

        let ctx = receive_ctx(ADDR_OWNER);
        withdraw(&ctx, &mut host).expect_report("Withdraw failed");
        claim!(host.transfer_occurred(&OWNER, balance));
    }

    #[concordium_test]
    fn test_view() {
        let host = initial_host();
        let ctx = receive_ctx(ADDR_AXEL);
        let view_state = view(&ctx, &host).expect_report("View failed");
        claim_eq!(view_state.owner, ADDR_OWNER);
        claim!(view_state.initialized);
        claim_eq!(view_state.name, "TokenForge");
        claim_eq!(view_state.symbol, "TF");
        claim_eq!(view_state.signer, SIGNER_1);
        claim_eq!(view_state.supply, 0);
    }
}
