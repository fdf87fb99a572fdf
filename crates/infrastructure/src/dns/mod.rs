pub mod server;
pub mod wire;

pub use server::DnsServerHandler;
pub use wire::message::{build_response, handle_query, parse_request, Request};
