use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, HexBinary};

use crate::state::{RouteBinding, RouteEntry};

#[cw_serde]
pub struct InstantiateMsg {
    // governance enrolls routes; enrollments are permanent
    pub governance_address: String,
    // the cross-chain transport this router dispatches through and accepts
    // deliveries from
    pub mailbox_address: String,
    // the deterministic contract-creation primitive used for inbound
    // deployments
    pub deployer_address: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /*
     * Governance Methods
     * All of the below messages can only be called by governance
     */
    // Binds a destination domain to its peer router and default security
    // module. First write wins; re-enrollment fails.
    EnrollRoute {
        destination: u32,
        router: [u8; 32],
        ism: [u8; 32],
    },
    // Batch enrollment over parallel lists. Rejected before any write if the
    // list lengths differ; all-or-nothing otherwise.
    EnrollRoutes {
        destinations: Vec<u32>,
        routers: Vec<[u8; 32]>,
        isms: Vec<[u8; 32]>,
    },
    // Enrolls only the peer router, leaving the security module zero so the
    // destination's protocol-wide default applies.
    EnrollRouter { destination: u32, router: [u8; 32] },

    /*
     * Permissionless Methods
     */
    // Requests deployment of `bytecode` on `destination`, routed via the
    // enrolled binding. Attached funds pay the transport fee.
    DeployRemoteContract {
        destination: u32,
        salt: [u8; 32],
        bytecode: HexBinary,
        init_code: Option<HexBinary>,
        hook_metadata: Option<HexBinary>,
    },
    // Same, but with a caller-supplied (router, ism) pair instead of the
    // enrolled binding.
    DeployRemoteContractWithOverrides {
        destination: u32,
        router: [u8; 32],
        ism: [u8; 32],
        salt: [u8; 32],
        bytecode: HexBinary,
        init_code: Option<HexBinary>,
        hook_metadata: Option<HexBinary>,
    },

    /*
     * Transport Messages
     * Can only be called by the mailbox, after it has verified the message
     */
    Handle {
        origin: u32,
        sender: [u8; 32],
        body: HexBinary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(RouteBinding)]
    Route { destination: u32 },

    // Returns the enrolled routes, paginated by:
    // - start_after: the domain after which the next page starts
    // - limit: maximum number of entries returned, default is u32::MAX
    #[returns(Vec<RouteEntry>)]
    Routes {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    // The fee the transport would charge for a deployment dispatch to this
    // destination. Forwarded verbatim from the mailbox's fee oracle.
    #[returns(Coin)]
    QuoteDeployment {
        destination: u32,
        body: Option<HexBinary>,
        gas_limit: Option<u64>,
    },

    // The address a deployment from `sender` with this salt and bytecode
    // would be created at.
    #[returns(Addr)]
    DeploymentAddress {
        sender: [u8; 32],
        salt: [u8; 32],
        bytecode: HexBinary,
    },
}
