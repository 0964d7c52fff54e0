use cosmwasm_std::{
    ensure, Api, DepsMut, Event, HexBinary, MessageInfo, Response, Storage, WasmMsg,
};
use itertools::Itertools;

use crate::error::ContractError;
use crate::events::{DeploymentCompleted, DeploymentDispatched, RouteEnrolled};
use crate::message::DeploymentRequest;
use crate::state::{self, RouteBinding, ZERO_ID};

pub fn enroll_route(
    deps: DepsMut,
    destination: u32,
    router: [u8; 32],
    ism: [u8; 32],
) -> Result<Response, ContractError> {
    let event = enroll_single(deps.storage, destination, RouteBinding { router, ism })?;
    Ok(Response::new().add_event(event))
}

pub fn enroll_routes(
    deps: DepsMut,
    destinations: Vec<u32>,
    routers: Vec<[u8; 32]>,
    isms: Vec<[u8; 32]>,
) -> Result<Response, ContractError> {
    ensure!(
        destinations.len() == routers.len() && destinations.len() == isms.len(),
        ContractError::EnrollmentLengthMismatch
    );

    let events: Vec<Event> = itertools::izip!(destinations, routers, isms)
        .map(|(destination, router, ism)| {
            enroll_single(deps.storage, destination, RouteBinding { router, ism })
        })
        .map_ok(Event::from)
        .try_collect()?;

    Ok(Response::new().add_events(events))
}

pub fn enroll_router(
    deps: DepsMut,
    destination: u32,
    router: [u8; 32],
) -> Result<Response, ContractError> {
    // no explicit security module chosen: a zero ism delegates inbound
    // verification to the destination's default
    enroll_route(deps, destination, router, ZERO_ID)
}

fn enroll_single(
    storage: &mut dyn Storage,
    destination: u32,
    route: RouteBinding,
) -> Result<RouteEnrolled, ContractError> {
    state::save_route(storage, destination, &route)?;

    Ok(RouteEnrolled {
        destination,
        router: route.router,
        ism: route.ism,
    })
}

pub fn deploy_contract(
    deps: DepsMut,
    info: MessageInfo,
    destination: u32,
    salt: [u8; 32],
    bytecode: HexBinary,
    init_code: Option<HexBinary>,
    hook_metadata: Option<HexBinary>,
) -> Result<Response, ContractError> {
    let route = state::load_route(deps.storage, destination)?;

    dispatch(
        deps,
        info,
        destination,
        route,
        salt,
        bytecode,
        init_code,
        hook_metadata,
    )
}

pub fn deploy_contract_with_overrides(
    deps: DepsMut,
    info: MessageInfo,
    destination: u32,
    router: [u8; 32],
    ism: [u8; 32],
    salt: [u8; 32],
    bytecode: HexBinary,
    init_code: Option<HexBinary>,
    hook_metadata: Option<HexBinary>,
) -> Result<Response, ContractError> {
    dispatch(
        deps,
        info,
        destination,
        RouteBinding { router, ism },
        salt,
        bytecode,
        init_code,
        hook_metadata,
    )
}

#[allow(clippy::too_many_arguments)]
fn dispatch(
    deps: DepsMut,
    info: MessageInfo,
    destination: u32,
    route: RouteBinding,
    salt: [u8; 32],
    bytecode: HexBinary,
    init_code: Option<HexBinary>,
    hook_metadata: Option<HexBinary>,
) -> Result<Response, ContractError> {
    ensure!(
        route.router != ZERO_ID,
        ContractError::NoRouteForDomain { destination }
    );

    let config = state::load_config(deps.storage);
    let sender = account_id(deps.api, &info.sender)?;

    let body = DeploymentRequest {
        sender,
        ism: route.ism,
        salt,
        bytecode,
        init_code: init_code.unwrap_or_default(),
    }
    .abi_encode();

    let mailbox = mailbox_api::Client::new(deps.querier, &config.mailbox);

    Ok(Response::new()
        .add_event(
            DeploymentDispatched {
                destination,
                sender: info.sender,
                router: route.router,
                ism: route.ism,
            },
        )
        .add_message(mailbox.dispatch(
            destination,
            route.router,
            body,
            hook_metadata,
            info.funds,
        )))
}

pub fn handle(
    deps: DepsMut,
    info: MessageInfo,
    origin: u32,
    sender: [u8; 32],
    body: HexBinary,
) -> Result<Response, ContractError> {
    let config = state::load_config(deps.storage);
    ensure!(info.sender == config.mailbox, ContractError::Unauthorized);

    // the transport verified the message, but only an enrolled peer may
    // trigger deployments
    let enrolled = state::may_load_route(deps.storage, origin)?.map(|route| route.router);
    ensure!(
        enrolled == Some(sender),
        ContractError::UnknownRemoteRouter { origin }
    );

    let message = DeploymentRequest::abi_decode(body.as_slice())?;
    ensure!(!message.bytecode.is_empty(), ContractError::EmptyBytecode);

    let salt = deployer_api::deployment_salt(&message.sender, &message.salt);
    let address =
        deployer_api::deployment_address(deps.api, &config.deployer, message.bytecode.as_slice(), &salt)?;

    let deployer = deployer_api::Client::new(deps.querier, &config.deployer);

    let mut response = Response::new()
        .add_event(
            DeploymentCompleted {
                bytecode_hash: alloy_primitives::keccak256(message.bytecode.as_slice()).0,
                salt,
                address: address.clone(),
            },
        )
        .add_message(deployer.create(message.bytecode, salt));

    // runs after the creation; if it fails, the whole delivery including the
    // deployment is rolled back
    if !message.init_code.is_empty() {
        response = response.add_message(WasmMsg::Execute {
            contract_addr: address.into_string(),
            msg: message.init_code.into(),
            funds: vec![],
        });
    }

    Ok(response)
}

pub fn require_governance(deps: &DepsMut, info: &MessageInfo) -> Result<(), ContractError> {
    let config = state::load_config(deps.storage);
    ensure!(
        info.sender == config.governance,
        ContractError::Unauthorized
    );

    Ok(())
}

/// The caller's canonical address, left-zero-padded into the 32-byte sender
/// field of the wire format.
fn account_id(api: &dyn Api, sender: &cosmwasm_std::Addr) -> Result<[u8; 32], ContractError> {
    let canonical = api.addr_canonicalize(sender.as_str())?;
    let offset = 32usize.checked_sub(canonical.len()).ok_or_else(|| {
        cosmwasm_std::StdError::generic_err("canonical address exceeds 32 bytes")
    })?;

    let mut id = [0u8; 32];
    id[offset..].copy_from_slice(canonical.as_slice());
    Ok(id)
}
