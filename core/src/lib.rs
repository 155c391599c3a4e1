//! # appctl core
//!
//! * **[`application`]**: the application use cases, starting with creation.
//! * **[`sender`]**: the request sender abstraction and its retrying implementation.
//! * **[`network`]**: concrete transports that put requests on the wire.

pub mod application;
pub mod network;
pub mod sender;
