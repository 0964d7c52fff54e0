#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::events::RouterInstantiated;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{self, Config};

mod execute;
mod query;

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let governance = deps.api.addr_validate(&msg.governance_address)?;
    let mailbox = deps.api.addr_validate(&msg.mailbox_address)?;
    let deployer = deps.api.addr_validate(&msg.deployer_address)?;

    state::save_config(
        deps.storage,
        &Config {
            governance: governance.clone(),
            mailbox: mailbox.clone(),
            deployer: deployer.clone(),
        },
    )?;

    Ok(Response::new().add_event(
        RouterInstantiated {
            governance,
            mailbox,
            deployer,
        },
    ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::EnrollRoute {
            destination,
            router,
            ism,
        } => {
            execute::require_governance(&deps, &info)?;
            execute::enroll_route(deps, destination, router, ism)
        }
        ExecuteMsg::EnrollRoutes {
            destinations,
            routers,
            isms,
        } => {
            execute::require_governance(&deps, &info)?;
            execute::enroll_routes(deps, destinations, routers, isms)
        }
        ExecuteMsg::EnrollRouter {
            destination,
            router,
        } => {
            execute::require_governance(&deps, &info)?;
            execute::enroll_router(deps, destination, router)
        }
        ExecuteMsg::DeployRemoteContract {
            destination,
            salt,
            bytecode,
            init_code,
            hook_metadata,
        } => execute::deploy_contract(
            deps,
            info,
            destination,
            salt,
            bytecode,
            init_code,
            hook_metadata,
        ),
        ExecuteMsg::DeployRemoteContractWithOverrides {
            destination,
            router,
            ism,
            salt,
            bytecode,
            init_code,
            hook_metadata,
        } => execute::deploy_contract_with_overrides(
            deps,
            info,
            destination,
            router,
            ism,
            salt,
            bytecode,
            init_code,
            hook_metadata,
        ),
        ExecuteMsg::Handle {
            origin,
            sender,
            body,
        } => execute::handle(deps, info, origin, sender, body),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Route { destination } => Ok(to_json_binary(&query::route(deps, destination)?)?),
        QueryMsg::Routes { start_after, limit } => {
            Ok(to_json_binary(&query::routes(deps, start_after, limit)?)?)
        }
        QueryMsg::QuoteDeployment {
            destination,
            body,
            gas_limit,
        } => Ok(to_json_binary(&query::quote_deployment(
            deps,
            destination,
            body,
            gas_limit,
        )?)?),
        QueryMsg::DeploymentAddress {
            sender,
            salt,
            bytecode,
        } => Ok(to_json_binary(&query::deployment_address(
            deps, sender, salt, bytecode,
        )?)?),
    }
}
