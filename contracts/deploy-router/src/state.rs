use cosmwasm_schema::cw_serde;
use cosmwasm_std::{ensure, Addr, Order, StdResult, Storage};
use cw_storage_plus::{Bound, Item, Map};

use crate::error::ContractError;

/// The all-zero identifier. As a router it means "no route"; as an ism it
/// means "use the destination's default security module".
pub const ZERO_ID: [u8; 32] = [0; 32];

#[cw_serde]
pub struct Config {
    /// May enroll new routes.
    pub governance: Addr,
    /// The cross-chain transport. Only it may deliver inbound messages.
    pub mailbox: Addr,
    /// The deterministic contract-creation primitive.
    pub deployer: Addr,
}

/// Peer binding for one destination domain. Write-once: the first enrollment
/// is the trust anchor and no path may overwrite it.
#[cw_serde]
pub struct RouteBinding {
    pub router: [u8; 32],
    pub ism: [u8; 32],
}

impl RouteBinding {
    pub fn is_vacant(&self) -> bool {
        self.router == ZERO_ID && self.ism == ZERO_ID
    }
}

#[cw_serde]
pub struct RouteEntry {
    pub destination: u32,
    pub route: RouteBinding,
}

const CONFIG: Item<Config> = Item::new("config");
const ROUTES: Map<u32, RouteBinding> = Map::new("routes");

pub fn load_config(storage: &dyn Storage) -> Config {
    CONFIG
        .load(storage)
        .expect("config must be set during instantiation")
}

pub fn save_config(storage: &mut dyn Storage, config: &Config) -> StdResult<()> {
    CONFIG.save(storage, config)
}

pub fn may_load_route(storage: &dyn Storage, destination: u32) -> StdResult<Option<RouteBinding>> {
    ROUTES.may_load(storage, destination)
}

pub fn load_route(storage: &dyn Storage, destination: u32) -> Result<RouteBinding, ContractError> {
    may_load_route(storage, destination)?.ok_or(ContractError::NoRouteForDomain { destination })
}

pub fn save_route(
    storage: &mut dyn Storage,
    destination: u32,
    route: &RouteBinding,
) -> Result<(), ContractError> {
    ensure!(
        may_load_route(storage, destination)?.map_or(true, |existing| existing.is_vacant()),
        ContractError::RouteAlreadyEnrolled { destination }
    );

    Ok(ROUTES.save(storage, destination, route)?)
}

pub fn routes(
    storage: &dyn Storage,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Vec<RouteEntry>> {
    let limit = limit.map_or(usize::MAX, |limit| {
        usize::try_from(limit).unwrap_or(usize::MAX)
    });

    ROUTES
        .range(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|entry| entry.map(|(destination, route)| RouteEntry { destination, route }))
        .collect()
}
