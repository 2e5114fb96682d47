//! DTOs that bridge the form binding with the transport.

pub mod reply;
pub mod request;
