use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, HexBinary};

#[cw_serde]
pub enum ExecuteMsg {
    /// Hand a message body over to the transport for delivery to the recipient
    /// on the destination domain. Attached funds cover the delivery fee. The
    /// transport surfaces the assigned message id via its own response data
    /// and events.
    Dispatch {
        destination_domain: u32,
        recipient: [u8; 32],
        body: HexBinary,
        /// Transport-specific fee/gas customization. None means the
        /// transport's defaults apply.
        hook_metadata: Option<HexBinary>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The fee the transport would charge to dispatch to this destination,
    /// optionally for a concrete body and gas limit.
    #[returns(Coin)]
    QuoteDispatch {
        destination_domain: u32,
        body: Option<HexBinary>,
        gas_limit: Option<u64>,
    },
}
