use cosmwasm_std::StdError;
use thiserror::Error;

use crate::message;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("sender is not authorized to perform this action")]
    Unauthorized,

    #[error("a route is already enrolled for domain {destination}")]
    RouteAlreadyEnrolled { destination: u32 },

    #[error("destination, router and ism lists must have equal lengths")]
    EnrollmentLengthMismatch,

    #[error("no route enrolled for domain {destination}")]
    NoRouteForDomain { destination: u32 },

    #[error("message sender is not the enrolled router for domain {origin}")]
    UnknownRemoteRouter { origin: u32 },

    #[error("deployment bytecode must not be empty")]
    EmptyBytecode,

    #[error(transparent)]
    InvalidMessage(#[from] message::Error),

    #[error(transparent)]
    FeeQuote(#[from] mailbox_api::client::Error),
}
