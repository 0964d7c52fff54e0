use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::HexBinary;

#[cw_serde]
pub enum ExecuteMsg {
    /// Instantiate `bytecode` at the address derived from (deployer, bytecode,
    /// salt). Deterministic: retrying the same pair fails because the derived
    /// address is already occupied.
    Create { bytecode: HexBinary, salt: [u8; 32] },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Whether a contract has been created at the given address.
    #[returns(bool)]
    IsDeployed { address: String },
}
