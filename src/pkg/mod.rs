pub mod errors;
pub mod internal;
pub mod server;
