use super::*;

/// Parameter type for the `createToken` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct CreateTokenParams {
    /// Blank token contract instance to initialize and register.
    pub contract: ContractAddress,
    /// Flavour of the instance.
    pub kind: TokenKind,
    /// Settings delivered to the instance.
    pub config: TokenConfig,
}

/// Parameter type for the `viewDeployments` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct ViewDeploymentsParams {
    /// Number of registrations to skip.
    pub skip: u32,
    /// Number of registrations to return.
    pub show: u32,
}

/// A single entry of the `viewDeployments` response.
#[derive(Debug, Serialize, SchemaType)]
pub struct DeploymentInfo {
    pub contract: ContractAddress,
    pub kind: TokenKind,
    pub deployer: Address,
    pub name: String,
    pub symbol: String,
}

/// Return type of the `viewDeployments` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct ViewDeploymentsResponse {
    pub deployments: Vec<DeploymentInfo>,
}
