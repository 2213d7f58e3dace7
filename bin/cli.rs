// FILE: bin/cli.rs
// Deploys the rebase token and its vault, then wires the mint/burn role.

use odra::casper_types::U256;
use odra::host::HostEnv;
use odra::prelude::Addressable;

use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt, OdraCli,
};

use rebase_token::math::InterestRate;
use rebase_token::token::{RateRefreshPolicy, RebaseToken, RebaseTokenInitArgs};
use rebase_token::vault::{Vault, VaultInitArgs};

/// Starting global rate: 5e-8 per second.
const INITIAL_RATE: u64 = 50_000_000_000;
/// Gas for each deploy (200 CSPR, safe on testnet)
const DEPLOY_GAS: u64 = 200_000_000_000;
/// Gas for the role grant call
const CALL_GAS: u64 = 5_000_000_000;

/// Deploys `RebaseToken` and `Vault` and grants the vault the minter role.
pub struct RebaseDeployScript;

impl DeployScript for RebaseDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer,
    ) -> Result<(), odra_cli::deploy::Error> {
        println!("Deploying RebaseToken...");
        let mut token = RebaseToken::load_or_deploy(
            env,
            RebaseTokenInitArgs {
                name: String::from("Rebase Token"),
                symbol: String::from("RBT"),
                initial_rate: U256::from(INITIAL_RATE),
                refresh_policy: RateRefreshPolicy::EveryMint,
            },
            container,
            DEPLOY_GAS,
        )?;
        println!("RebaseToken deployed at: {:?}", token.address());

        println!("Deploying Vault...");
        let vault = Vault::load_or_deploy(
            env,
            VaultInitArgs {
                token: token.address(),
            },
            container,
            DEPLOY_GAS,
        )?;
        println!("Vault deployed at: {:?}", vault.address());

        if !token.is_minter(vault.address()) {
            env.set_gas(CALL_GAS);
            token.grant_mint_and_burn_role(vault.address());
            println!("Vault granted mint and burn role");
        }

        Ok(())
    }
}

/// Prints the global rate and the principal supply.
pub struct RateInfoScenario;

impl Scenario for RateInfoScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args,
    ) -> Result<(), Error> {
        let token = container.contract_ref::<RebaseToken>(env)?;

        let rate = InterestRate::from(token.get_interest_rate());
        println!("Global interest rate (per second): {}", rate);
        println!("Refresh policy: {:?}", token.get_refresh_policy());
        println!("Principal supply: {}", token.total_supply());

        Ok(())
    }
}

impl ScenarioMetadata for RateInfoScenario {
    const NAME: &'static str = "rate-info";
    const DESCRIPTION: &'static str = "Prints the global interest rate and principal supply";
}

/// Main function
pub fn main() {
    OdraCli::new()
        .about("CLI tool for the rebase token vault")
        .deploy(RebaseDeployScript)
        .contract::<RebaseToken>()
        .contract::<Vault>()
        .scenario(RateInfoScenario)
        .build()
        .run();
}
