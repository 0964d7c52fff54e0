use cosmwasm_std::{Addr, Coin, Deps, HexBinary, StdResult};

use crate::error::ContractError;
use crate::state::{self, RouteBinding, RouteEntry};

pub fn route(deps: Deps, destination: u32) -> Result<RouteBinding, ContractError> {
    state::load_route(deps.storage, destination)
}

pub fn routes(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Vec<RouteEntry>> {
    state::routes(deps.storage, start_after, limit)
}

pub fn quote_deployment(
    deps: Deps,
    destination: u32,
    body: Option<HexBinary>,
    gas_limit: Option<u64>,
) -> Result<Coin, ContractError> {
    let config = state::load_config(deps.storage);
    let mailbox = mailbox_api::Client::new(deps.querier, &config.mailbox);

    Ok(mailbox.quote_dispatch(destination, body, gas_limit)?)
}

pub fn deployment_address(
    deps: Deps,
    sender: [u8; 32],
    salt: [u8; 32],
    bytecode: HexBinary,
) -> Result<Addr, ContractError> {
    let config = state::load_config(deps.storage);
    let salt = deployer_api::deployment_salt(&sender, &salt);

    Ok(deployer_api::deployment_address(
        deps.api,
        &config.deployer,
        bytecode.as_slice(),
        &salt,
    )?)
}
