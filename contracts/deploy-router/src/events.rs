use cosmwasm_std::{Addr, Event, HexBinary};

pub struct RouterInstantiated {
    pub governance: Addr,
    pub mailbox: Addr,
    pub deployer: Addr,
}

pub struct RouteEnrolled {
    pub destination: u32,
    pub router: [u8; 32],
    pub ism: [u8; 32],
}

pub struct DeploymentDispatched {
    pub destination: u32,
    pub sender: Addr,
    pub router: [u8; 32],
    pub ism: [u8; 32],
}

pub struct DeploymentCompleted {
    pub bytecode_hash: [u8; 32],
    pub salt: [u8; 32],
    pub address: Addr,
}

impl From<RouterInstantiated> for Event {
    fn from(other: RouterInstantiated) -> Self {
        Event::new("router_instantiated")
            .add_attribute("governance_address", other.governance)
            .add_attribute("mailbox_address", other.mailbox)
            .add_attribute("deployer_address", other.deployer)
    }
}

impl From<RouteEnrolled> for Event {
    fn from(other: RouteEnrolled) -> Self {
        Event::new("route_enrolled")
            .add_attribute("destination", other.destination.to_string())
            .add_attribute("router", HexBinary::from(other.router).to_hex())
            .add_attribute("ism", HexBinary::from(other.ism).to_hex())
    }
}

impl From<DeploymentDispatched> for Event {
    fn from(other: DeploymentDispatched) -> Self {
        Event::new("deployment_dispatched")
            .add_attribute("destination", other.destination.to_string())
            .add_attribute("sender", other.sender)
            .add_attribute("router", HexBinary::from(other.router).to_hex())
            .add_attribute("ism", HexBinary::from(other.ism).to_hex())
    }
}

impl From<DeploymentCompleted> for Event {
    fn from(other: DeploymentCompleted) -> Self {
        Event::new("deployment_completed")
            .add_attribute("bytecode_hash", HexBinary::from(other.bytecode_hash).to_hex())
            .add_attribute("salt", HexBinary::from(other.salt).to_hex())
            .add_attribute("address", other.address)
    }
}
