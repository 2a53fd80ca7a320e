use super::*;

/// Initialize a new contract instance. With a config the instance is ready
/// to use and the creator receives ownership and the initial roles. Without
/// one the instance stays blank until a factory calls `initialize`.
#[init(contract = "TokenForge1155", parameter = "Option<TokenConfig>")]
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
    contract = "TokenForge1155",
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
/// the create or mint described by the message.
#[receive(
    contract = "TokenForge1155",
    name = "createMessage",
    parameter = "SupplyMintMessage",
    return_value = "HashSha2256",
    crypto_primitives
)]
fn create_message<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    _host: &impl HasHost<State<S>, StateApiType = S>,
    crypto_primitives: &impl HasCryptoPrimitives,
) -> ContractResult<HashSha2256> {
    let message: SupplyMintMessage = ctx.parameter_cursor().get()?;
    Ok(signing_digest(crypto_primitives, &message))
}

/// Define a token in the state, mint the initial amount and log the `Mint`,
/// `TokenMetadata` and `Issued` events. Authorization is checked by the
/// caller.
fn create_token<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    to: Address,
    token_id: ContractTokenId,
    amount: ContractTokenAmount,
    content_ref: String,
) -> ContractResult<()> {
    host.state_mut()
        .create(token_id, &to, amount, content_ref.clone())?;

    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount,
        owner: to,
    }))?;
    logger.log(&Cis2Event::TokenMetadata::<_, ContractTokenAmount>(
        TokenMetadataEvent {
            token_id,
            metadata_url: MetadataUrl {
                url: content_ref.clone(),
                hash: None,
            },
        },
    ))?;
    logger.log(&CustomEvent::Issued(IssuedEvent {
        token_id,
        owner: to,
        content_ref,
    }))?;
    Ok(())
}

/// Mint an amount of a defined token in the state and log a `Mint` event.
fn mint_token<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    to: Address,
    token_id: ContractTokenId,
    amount: ContractTokenAmount,
) -> ContractResult<()> {
    host.state_mut().mint(token_id, &to, amount)?;
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount,
        owner: to,
    }))?;
    Ok(())
}

/// Define a new token. Restricted to addresses with the minter role.
///
/// It rejects if:
/// - The instance is not initialized.
/// - The sender has no minter role.
/// - The token ID is already defined.
#[receive(
    contract = "TokenForge1155",
    name = "create",
    parameter = "CreateParams",
    mutable,
    enable_logger
)]
fn create<S: HasStateApi>(
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

    let params: CreateParams = ctx.parameter_cursor().get()?;
    create_token(
        host,
        logger,
        params.to,
        params.token_id,
        params.amount,
        params.content_ref,
    )
}

/// Define a new token for the caller, authorized by a backend signature over
/// the receiver, token ID, amount and content reference.
#[receive(
    contract = "TokenForge1155",
    name = "createWithSignature",
    parameter = "SignedCreateParams",
    mutable,
    enable_logger,
    crypto_primitives
)]
fn create_with_signature<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    crypto_primitives: &impl HasCryptoPrimitives,
) -> ContractResult<()> {
    let state = host.state();
    ensure!(state.initialized, CustomContractError::NotInitialized.into());

    let params: SignedCreateParams = ctx.parameter_cursor().get()?;
    let message = SupplyMintMessage {
        to: ctx.sender(),
        token_id: params.token_id,
        amount: params.amount,
        content_ref: params.content_ref,
    };
    ensure!(
        verify_backend_signature(crypto_primitives, state.signer, params.signature, &message),
        CustomContractError::InvalidSignature.into()
    );

    create_token(
        host,
        logger,
        message.to,
        message.token_id,
        message.amount,
        message.content_ref,
    )
}

/// Mint an amount of a defined token. Restricted to addresses with the
/// minter role.
///
/// It rejects if:
/// - The instance is not initialized.
/// - The sender has no minter role.
/// - The token is not defined yet.
#[receive(
    contract = "TokenForge1155",
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
    mint_token(host, logger, params.to, params.token_id, params.amount)
}

/// Mint an amount of a defined token to the caller, authorized by a backend
/// signature. The signed message carries an empty content reference since
/// the token already has one.
///
/// It rejects if:
/// - The instance is not initialized.
/// - The signature does not verify against the current backend signer.
/// - The token is not defined yet.
#[receive(
    contract = "TokenForge1155",
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
    let message = SupplyMintMessage {
        to: ctx.sender(),
        token_id: params.token_id,
        amount: params.amount,
        content_ref: String::new(),
    };
    ensure!(
        verify_backend_signature(crypto_primitives, state.signer, params.signature, &message),
        CustomContractError::InvalidSignature.into()
    );

    mint_token(host, logger, message.to, message.token_id, message.amount)
}

/// Burn an amount of a token held by the caller.
///
/// Logs a `Burn` event.
#[receive(
    contract = "TokenForge1155",
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
    host.state_mut().burn(params.token_id, &sender, params.amount)?;

    logger.log(&Cis2Event::Burn::<_, ContractTokenAmount>(BurnEvent {
        token_id: params.token_id,
        amount: params.amount,
        owner: sender,
    }))?;
    Ok(())
}

/// Burn an amount of a token held by any address. Restricted to addresses
/// with the burner role.
#[receive(
    contract = "TokenForge1155",
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
    host.state_mut().burn(params.token_id, &params.from, params.amount)?;

    logger.log(&Cis2Event::Burn::<_, ContractTokenAmount>(BurnEvent {
        token_id: params.token_id,
        amount: params.amount,
        owner: params.from,
    }))?;
    Ok(())
}

/// Execute a list of token transfers. The sender has to own the tokens or be
/// an operator of the owner.
///
/// Logs a `Transfer` event for each transfer and invokes the receive hook
/// function when the receiver is a contract.
#[receive(
    contract = "TokenForge1155",
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
            from == sender || state.is_operator(&from, &sender),
            ContractError::Unauthorized
        );
        let to_address = to.address();
        state.transfer(token_id, &from, &to_address, amount)?;

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
    contract = "TokenForge1155",
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
        let to_address = to.address();
        host.state_mut().transfer(token_id, &from, &to_address, amount)?;

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
    contract = "TokenForge1155",
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
    contract = "TokenForge1155",
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
    contract = "TokenForge1155",
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

/// View function returning the URI of a token, its plain content reference.
#[receive(
    contract = "TokenForge1155",
    name = "uri",
    parameter = "ContractTokenId",
    return_value = "String"
)]
fn uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().token_uri(&token_id)
}

/// View function returning the circulating amount of a token. Zero when the
/// token is not defined.
#[receive(
    contract = "TokenForge1155",
    name = "totalSupply",
    parameter = "ContractTokenId",
    return_value = "ContractTokenAmount"
)]
fn total_supply<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractTokenAmount> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    Ok(host.state().supply(&token_id))
}

/// Replace the backend signer public key. Restricted to the contract owner
/// and addresses with the admin role.
///
/// Logs a `SignerChanged` event.
#[receive(
    contract = "TokenForge1155",
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
    let sender = ctx.sender();
    ensure!(
        sender == state.owner || state.roles.has_role(&sender, Role::Admin),
        CustomContractError::OnlyOwnerOrAdmin.into()
    );

    let new_signer: PublicKeyEd25519 = ctx.parameter_cursor().get()?;
    let previous = state.signer;
    state.signer = new_signer;

    logger.log(&CustomEvent::SignerChanged(SignerChangedEvent {
        previous,
        new: new_signer,
    }))?;
    Ok(())
}

/// Replace the base URI. Restricted to the contract owner and addresses with
/// the admin role. Kept for parity with the non-fungible contract, token
/// URIs are served as plain content references.
///
/// Logs a `BaseUriChanged` event with the previous and the new value.
#[receive(
    contract = "TokenForge1155",
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
    let sender = ctx.sender();
    ensure!(
        sender == state.owner || state.roles.has_role(&sender, Role::Admin),
        CustomContractError::OnlyOwnerOrAdmin.into()
    );

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
    contract = "TokenForge1155",
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
    contract = "TokenForge1155",
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
    contract = "TokenForge1155",
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
    contract = "TokenForge1155",
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
#[receive(contract = "TokenForge1155", name = "withdraw", mutable)]
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

/// View function returning the contract settings.
#[receive(contract = "TokenForge1155", name = "view", return_value = "ViewState")]
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

    /// Backend signature for creating token 1001 with amount 1 and
    /// `CONTENT_REF` for AXEL.
    const SIG_CREATE_1001_AXEL: SignatureEd25519 = SignatureEd25519([
        31, 119, 123, 249, 4, 242, 9, 41, 223, 98, 165, 251, 29, 104, 109, 179,
        5, 114, 21, 234, 109, 72, 225, 206, 169, 194, 232, 142, 8, 140, 135, 240,
        228, 225, 141, 250, 213, 150, 109, 12, 63, 70, 18, 11, 24, 166, 128, 10,
        244, 34, 216, 207, 125, 179, 45, 93, 113, 7, 194, 7, 211, 8, 209, 12,
    ]);

    /// Backend signature for minting amount 1 of token 1001 to CHANTAL.
    const SIG_MINT_1001_CHANTAL: SignatureEd25519 = SignatureEd25519([
        224, 10, 60, 210, 227, 126, 155, 107, 33, 50, 247, 42, 8, 141, 160, 117,
        255, 98, 212, 102, 50, 26, 240, 211, 47, 129, 160, 100, 5, 153, 105, 1,
        45, 197, 255, 100, 211, 24, 147, 52, 245, 85, 43, 123, 165, 85, 192, 86,
        154, 163, 192, 142, 156, 147, 214, 114, 237, 207, 16, 205, 19, 70, 173, 9,
    ]);

    fn token_config() -> TokenConfig {
        TokenConfig {
            name: "TokenForge".to_string(),
            symbol: "TF".to_string(),
            base_uri: String::new(),
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

    fn create_for(
        host: &mut TestHost<State<TestStateApi>>,
        to: Address,
        token_id: ContractTokenId,
        amount: u64,
    ) {
        let params = CreateParams {
            to,
            token_id,
            amount: TokenAmountU64(amount),
            content_ref: CONTENT_REF.to_string(),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        create(&ctx, host, &mut logger).expect_report("Creating token failed");
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
        claim_eq!(state.signer, SIGNER_1);
        claim!(state.roles.has_role(&ADDR_OWNER, Role::DefaultAdmin));
        claim!(state.roles.has_role(&ADDR_OWNER, Role::Minter));
    }

    #[concordium_test]
    fn test_create_requires_minter_role() {
        let mut host = initial_host();
        let params = CreateParams {
            to: ADDR_BEN,
            token_id: TokenIdU64(9),
            amount: TokenAmountU64(5),
            content_ref: CONTENT_REF.to_string(),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        claim_eq!(
            create(&ctx, &mut host, &mut logger),
            Err(CustomContractError::MissingMinterRole.into())
        );
    }

    #[concordium_test]
    fn test_create_and_mint() {
        let mut host = initial_host();
        create_for(&mut host, ADDR_BEN, TokenIdU64(9), 5);

        let state = host.state();
        claim_eq!(
            state
                .supply(&TokenIdU64(9)),
            TokenAmountU64(5)
        );
        claim_eq!(
            state
                .balance(&TokenIdU64(9), &ADDR_BEN)
                .expect_report("Token must exist"),
            TokenAmountU64(5)
        );
        claim_eq!(
            state
                .token_uri(&TokenIdU64(9))
                .expect_report("Token must exist"),
            CONTENT_REF
        );

        // Mint on top of the created supply.
        let params = MintParams {
            to: ADDR_CHANTAL,
            token_id: TokenIdU64(9),
            amount: TokenAmountU64(3),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        mint(&ctx, &mut host, &mut logger).expect_report("Minting failed");

        let state = host.state();
        claim_eq!(
            state
                .supply(&TokenIdU64(9)),
            TokenAmountU64(8)
        );
        claim_eq!(
            state
                .balance(&TokenIdU64(9), &ADDR_CHANTAL)
                .expect_report("Token must exist"),
            TokenAmountU64(3)
        );

        // A token ID can only be created once.
        let params = CreateParams {
            to: ADDR_BEN,
            token_id: TokenIdU64(9),
            amount: TokenAmountU64(1),
            content_ref: CONTENT_REF.to_string(),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            create(&ctx, &mut host, &mut logger),
            Err(CustomContractError::TokenIdAlreadyExists.into())
        );
    }

    #[concordium_test]
    fn test_mint_rejects_wrapping_amount() {
        let mut host = initial_host();
        create_for(&mut host, ADDR_AXEL, TokenIdU64(9), u64::MAX);

        // Minting on top of a full supply counter must not wrap it.
        let params = MintParams {
            to: ADDR_BEN,
            token_id: TokenIdU64(9),
            amount: TokenAmountU64(1),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            mint(&ctx, &mut host, &mut logger),
            Err(CustomContractError::Overflow.into())
        );
        claim_eq!(host.state().supply(&TokenIdU64(9)), TokenAmountU64(u64::MAX));
        claim_eq!(
            host.state()
                .balance(&TokenIdU64(9), &ADDR_BEN)
                .expect_report("Token must exist"),
            TokenAmountU64(0)
        );
    }

    #[concordium_test]
    fn test_mint_before_create_fails() {
        let mut host = initial_host();

        // Even a valid backend signature can not mint an undefined token.
        let params = SignedMintParams {
            token_id: TOKEN_1001,
            amount: TokenAmountU64(1),
            signature: SIG_MINT_1001_CHANTAL,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_CHANTAL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        let crypto_primitives = TestCryptoPrimitives::new();

        claim_eq!(
            mint_with_signature(&ctx, &mut host, &mut logger, &crypto_primitives),
            Err(CustomContractError::TokenNotDefined.into())
        );

        // Same through the role-gated path.
        let params = MintParams {
            to: ADDR_CHANTAL,
            token_id: TOKEN_1001,
            amount: TokenAmountU64(1),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            mint(&ctx, &mut host, &mut logger),
            Err(CustomContractError::TokenNotDefined.into())
        );
    }

    #[concordium_test]
    fn test_create_then_mint_with_signatures() {
        let mut host = initial_host();
        let crypto_primitives = TestCryptoPrimitives::new();

        // AXEL creates token 1001 with a backend signature.
        let params = SignedCreateParams {
            token_id: TOKEN_1001,
            amount: TokenAmountU64(1),
            content_ref: CONTENT_REF.to_string(),
            signature: SIG_CREATE_1001_AXEL,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        create_with_signature(&ctx, &mut host, &mut logger, &crypto_primitives)
            .expect_report("Signed create failed");

        claim_eq!(
            host.state()
                .balance(&TOKEN_1001, &ADDR_AXEL)
                .expect_report("Token must exist"),
            TokenAmountU64(1)
        );
        claim_eq!(
            host.state()
                .token_uri(&TOKEN_1001)
                .expect_report("Token must exist"),
            CONTENT_REF
        );

        // CHANTAL mints one more with her own signature.
        let params = SignedMintParams {
            token_id: TOKEN_1001,
            amount: TokenAmountU64(1),
            signature: SIG_MINT_1001_CHANTAL,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_CHANTAL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        mint_with_signature(&ctx, &mut host, &mut logger, &crypto_primitives)
            .expect_report("Signed mint failed");

        let state = host.state();
        claim_eq!(
            state
                .balance(&TOKEN_1001, &ADDR_CHANTAL)
                .expect_report("Token must exist"),
            TokenAmountU64(1)
        );
        claim_eq!(
            state
                .supply(&TOKEN_1001),
            TokenAmountU64(2)
        );
    }

    #[concordium_test]
    fn test_create_with_signature_wrong_caller() {
        let mut host = initial_host();
        let params = SignedCreateParams {
            token_id: TOKEN_1001,
            amount: TokenAmountU64(1),
            content_ref: CONTENT_REF.to_string(),
            signature: SIG_CREATE_1001_AXEL,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        let crypto_primitives = TestCryptoPrimitives::new();

        claim_eq!(
            create_with_signature(&ctx, &mut host, &mut logger, &crypto_primitives),
            Err(CustomContractError::InvalidSignature.into())
        );
    }

    #[concordium_test]
    fn test_signer_rotation_invalidates_signatures() {
        let mut host = initial_host();
        let crypto_primitives = TestCryptoPrimitives::new();

        let parameter_bytes = to_bytes(&SIGNER_2);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        set_signer(&ctx, &mut host, &mut logger).expect_report("Setting signer failed");
        claim!(logger
            .logs
            .contains(&to_bytes(&CustomEvent::SignerChanged(SignerChangedEvent {
                previous: SIGNER_1,
                new: SIGNER_2,
            }))));

        let params = SignedCreateParams {
            token_id: TOKEN_1001,
            amount: TokenAmountU64(1),
            content_ref: CONTENT_REF.to_string(),
            signature: SIG_CREATE_1001_AXEL,
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            create_with_signature(&ctx, &mut host, &mut logger, &crypto_primitives),
            Err(CustomContractError::InvalidSignature.into())
        );
    }

    #[concordium_test]
    fn test_set_base_uri() {
        let mut host = initial_host();
        let new_base = "https://cdn.tokenforge.io/".to_string();
        let parameter_bytes = to_bytes(&new_base);

        // A plain account can not change the base URI and the value stays.
        let mut ctx = receive_ctx(ADDR_CHANTAL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            set_base_uri(&ctx, &mut host, &mut logger),
            Err(CustomContractError::OnlyOwnerOrAdmin.into())
        );
        claim_eq!(host.state().base_uri, "");

        // An admin may, and the event carries the previous and new value.
        let (state, state_builder) = host.state_and_builder();
        state.roles.grant(&ADDR_BEN, Role::Admin, state_builder);
        let mut ctx = receive_ctx(ADDR_BEN);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        set_base_uri(&ctx, &mut host, &mut logger).expect_report("Setting base URI failed");
        claim_eq!(host.state().base_uri, new_base);
        claim!(logger
            .logs
            .contains(&to_bytes(&CustomEvent::BaseUriChanged(BaseUriChangedEvent {
                previous: String::new(),
                new: new_base.clone(),
            }))));
    }

    #[concordium_test]
    fn test_transfer() {
        let mut host = initial_host();
        create_for(&mut host, ADDR_AXEL, TokenIdU64(9), 5);

        let params = TransferParams::from(vec![Transfer {
            token_id: TokenIdU64(9),
            amount: TokenAmountU64(2),
            from: ADDR_AXEL,
            to: Receiver::from_account(BEN),
            data: AdditionalData::empty(),
        }]);
        let parameter_bytes = to_bytes(&params);

        // A third party can not move the tokens.
        let mut ctx = receive_ctx(ADDR_CHANTAL);
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
        claim_eq!(
            state
                .balance(&TokenIdU64(9), &ADDR_AXEL)
                .expect_report("Token must exist"),
            TokenAmountU64(3)
        );
        claim_eq!(
            state
                .balance(&TokenIdU64(9), &ADDR_BEN)
                .expect_report("Token must exist"),
            TokenAmountU64(2)
        );
        claim!(logger
            .logs
            .contains(&to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: TokenIdU64(9),
                amount: TokenAmountU64(2),
                from: ADDR_AXEL,
                to: ADDR_BEN,
            }))));

        // More than the balance can not be moved.
        let params = TransferParams::from(vec![Transfer {
            token_id: TokenIdU64(9),
            amount: TokenAmountU64(4),
            from: ADDR_AXEL,
            to: Receiver::from_account(BEN),
            data: AdditionalData::empty(),
        }]);
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            transfer(&ctx, &mut host, &mut logger),
            Err(ContractError::InsufficientFunds)
        );
    }

    #[concordium_test]
    fn test_burn() {
        let mut host = initial_host();
        create_for(&mut host, ADDR_AXEL, TokenIdU64(9), 5);

        let params = BurnParams {
            token_id: TokenIdU64(9),
            amount: TokenAmountU64(2),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        burn(&ctx, &mut host, &mut logger).expect_report("Burn failed");

        let state = host.state();
        claim_eq!(
            state
                .supply(&TokenIdU64(9)),
            TokenAmountU64(3)
        );
        claim_eq!(
            state
                .balance(&TokenIdU64(9), &ADDR_AXEL)
                .expect_report("Token must exist"),
            TokenAmountU64(3)
        );

        // Burning more than the balance fails.
        let params = BurnParams {
            token_id: TokenIdU64(9),
            amount: TokenAmountU64(10),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            burn(&ctx, &mut host, &mut logger),
            Err(ContractError::InsufficientFunds)
        );
    }

    #[concordium_test]
    fn test_burn_as_requires_role() {
        let mut host = initial_host();
        create_for(&mut host, ADDR_AXEL, TokenIdU64(9), 5);

        let params = BurnAsParams {
            from: ADDR_AXEL,
            token_id: TokenIdU64(9),
            amount: TokenAmountU64(5),
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
        claim_eq!(
            host.state()
                .supply(&TokenIdU64(9)),
            TokenAmountU64(0)
        );
    }

    #[concordium_test]
    fn test_queries_of_unknown_token() {
        let host = initial_host();
        let parameter_bytes = to_bytes(&TokenIdU64(404));
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        claim_eq!(uri(&ctx, &host), Err(ContractError::InvalidTokenId));
        // The supply of an undefined token is zero, not an error.
        claim_eq!(total_supply(&ctx, &host), Ok(TokenAmountU64(0)));
    }

    #[concordium_test]
    fn test_transfer_ownership_and_withdraw() {
        let mut host = initial_host();
        let balance = Amount::from_micro_ccd(900_000);
        host.set_self_balance(balance);

        let parameter_bytes = to_bytes(&ADDR_AXEL);
        let mut ctx = receive_ctx(ADDR_OWNER);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        transfer_ownership(&ctx, &mut host, &mut logger).expect_report("Ownership transfer failed");
        claim_eq!(host.state().owner, ADDR_AXEL);

        // The previous owner can no longer withdraw.
        let ctx = receive_ctx(ADDR_OWNER);
        claim_eq!(
            withdraw(&ctx, &mut host),
            Err(CustomContractError::OnlyOwner.into())
        );

        let ctx = receive_ctx(ADDR_AXEL);
        withdraw(&ctx, &mut host).expect_report("Withdraw failed");
        claim!(host.transfer_occurred(&AXEL, balance));
    }
}
