//! Products

pub(crate) mod errors;
mod handlers;
mod payloads;

pub(crate) use handlers::*;
