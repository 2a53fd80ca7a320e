use super::*;

/// Initialize the registry with no registered instances.
#[init(contract = "TokenForgeFactory")]
fn init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::new(state_builder))
}

/// Hand a blank token contract instance its settings and register it. The
/// sender becomes the owner of the instance and receives its initial roles.
///
/// Logs a `ContractDeployed` event.
///
/// It rejects if:
/// - The instance is already registered.
/// - The `initialize` call on the instance fails.
#[receive(
    contract = "TokenForgeFactory",
    name = "createToken",
    parameter = "CreateTokenParams",
    return_value = "DeployResult",
    mutable,
    enable_logger
)]
fn create_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<DeployResult> {
    let params: CreateTokenParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    ensure!(
        host.state().deployments.get(&params.contract).is_none(),
        CustomContractError::AlreadyRegistered.into()
    );

    let deployment = Deployment {
        kind: params.kind,
        deployer: sender,
        name: params.config.name.clone(),
        symbol: params.config.symbol.clone(),
    };
    let initialize_params = InitializeParams {
        admin: sender,
        config: params.config,
    };
    host.invoke_contract(
        &params.contract,
        &initialize_params,
        EntrypointName::new_unchecked("initialize"),
        Amount::zero(),
    )?;

    host.state_mut().register(params.contract, deployment)?;

    logger.log(&CustomEvent::ContractDeployed(ContractDeployedEvent {
        contract: params.contract,
        kind: params.kind,
        deployer: sender,
    }))?;

    Ok(DeployResult {
        contract: params.contract,
        kind: params.kind,
    })
}

/// View function returning a page of registered instances.
#[receive(
    contract = "TokenForgeFactory",
    name = "viewDeployments",
    parameter = "ViewDeploymentsParams",
    return_value = "ViewDeploymentsResponse"
)]
fn view_deployments<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewDeploymentsResponse> {
    let params: ViewDeploymentsParams = ctx.parameter_cursor().get()?;
    let deployments = host
        .state()
        .deployments
        .iter()
        .skip(params.skip as usize)
        .take(params.show as usize)
        .map(|(contract, deployment)| DeploymentInfo {
            contract: *contract,
            kind: deployment.kind,
            deployer: deployment.deployer,
            name: deployment.name.clone(),
            symbol: deployment.symbol.clone(),
        })
        .collect();
    Ok(ViewDeploymentsResponse { deployments })
}

/// View function returning the number of registered instances.
#[receive(
    contract = "TokenForgeFactory",
    name = "deployCount",
    return_value = "u64"
)]
fn deploy_count<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    Ok(host.state().count)
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::parse_and_check_mock;
    use concordium_std::test_infrastructure::*;

    const AXEL: AccountAddress = AccountAddress([1; 32]);
    const BEN: AccountAddress = AccountAddress([2; 32]);

    const ADDR_AXEL: Address = Address::Account(AXEL);
    const ADDR_BEN: Address = Address::Account(BEN);

    const TOKEN_CONTRACT: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };
    const OTHER_CONTRACT: ContractAddress = ContractAddress {
        index: 8,
        subindex: 0,
    };

    fn token_config() -> TokenConfig {
        TokenConfig {
            name: "TokenForge".to_string(),
            symbol: "TF".to_string(),
            base_uri: "https://ipfs.tokenforge.io/".to_string(),
            signer: PublicKeyEd25519([9; 32]),
            cap: None,
        }
    }

    fn initial_host() -> TestHost<State<TestStateApi>> {
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(&mut state_builder);
        TestHost::new(state, state_builder)
    }

    fn receive_ctx<'a>(sender: Address) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender);
        ctx
    }

    fn mock_initialize(host: &mut TestHost<State<TestStateApi>>, contract: ContractAddress) {
        host.setup_mock_entrypoint(
            contract,
            OwnedEntrypointName::new_unchecked("initialize".into()),
            parse_and_check_mock::<InitializeParams, State<TestStateApi>>(
                |params| params.admin == ADDR_AXEL && params.config.name == "TokenForge",
                (),
            ),
        );
    }

    fn deploy(
        host: &mut TestHost<State<TestStateApi>>,
        contract: ContractAddress,
        kind: TokenKind,
        sender: Address,
    ) -> (ContractResult<DeployResult>, TestLogger) {
        let params = CreateTokenParams {
            contract,
            kind,
            config: token_config(),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(sender);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        let result = create_token(&ctx, host, &mut logger);
        (result, logger)
    }

    #[concordium_test]
    fn test_create_token_registers_and_initializes() {
        let mut host = initial_host();
        mock_initialize(&mut host, TOKEN_CONTRACT);

        let (result, logger) = deploy(&mut host, TOKEN_CONTRACT, TokenKind::Nft, ADDR_AXEL);
        let deploy_result = result.expect_report("Deployment failed");
        claim_eq!(
            deploy_result,
            DeployResult {
                contract: TOKEN_CONTRACT,
                kind: TokenKind::Nft,
            }
        );
        claim!(logger
            .logs
            .contains(&to_bytes(&CustomEvent::ContractDeployed(
                ContractDeployedEvent {
                    contract: TOKEN_CONTRACT,
                    kind: TokenKind::Nft,
                    deployer: ADDR_AXEL,
                }
            ))));

        let state = host.state();
        claim_eq!(state.count, 1);
        let deployment = state
            .deployments
            .get(&TOKEN_CONTRACT)
            .expect_report("Deployment must be registered");
        claim_eq!(deployment.kind, TokenKind::Nft);
        claim_eq!(deployment.deployer, ADDR_AXEL);
        claim_eq!(deployment.name, "TokenForge");
    }

    #[concordium_test]
    fn test_create_token_rejects_duplicates() {
        let mut host = initial_host();
        mock_initialize(&mut host, TOKEN_CONTRACT);

        let (result, _) = deploy(&mut host, TOKEN_CONTRACT, TokenKind::Nft, ADDR_AXEL);
        result.expect_report("Deployment failed");

        let (result, _) = deploy(&mut host, TOKEN_CONTRACT, TokenKind::SemiFungible, ADDR_AXEL);
        claim_eq!(result, Err(CustomContractError::AlreadyRegistered.into()));
        claim_eq!(host.state().count, 1);
    }

    #[concordium_test]
    fn test_create_token_rejects_wrong_admin() {
        let mut host = initial_host();
        // The mock only accepts AXEL as the admin of the new instance.
        mock_initialize(&mut host, TOKEN_CONTRACT);

        let (result, _) = deploy(&mut host, TOKEN_CONTRACT, TokenKind::Nft, ADDR_BEN);
        claim!(result.is_err());
        claim_eq!(host.state().count, 0);
    }

    #[concordium_test]
    fn test_view_deployments_paging() {
        let mut host = initial_host();
        mock_initialize(&mut host, TOKEN_CONTRACT);
        mock_initialize(&mut host, OTHER_CONTRACT);

        deploy(&mut host, TOKEN_CONTRACT, TokenKind::Nft, ADDR_AXEL)
            .0
            .expect_report("Deployment failed");
        deploy(&mut host, OTHER_CONTRACT, TokenKind::Fungible, ADDR_AXEL)
            .0
            .expect_report("Deployment failed");

        let params = ViewDeploymentsParams { skip: 0, show: 10 };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let response = view_deployments(&ctx, &host).expect_report("View failed");
        claim_eq!(response.deployments.len(), 2);

        let params = ViewDeploymentsParams { skip: 1, show: 10 };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADDR_AXEL);
        ctx.set_parameter(&parameter_bytes);
        let response = view_deployments(&ctx, &host).expect_report("View failed");
        claim_eq!(response.deployments.len(), 1);

        let ctx = receive_ctx(ADDR_AXEL);
        claim_eq!(deploy_count(&ctx, &host), Ok(2));
    }
}
