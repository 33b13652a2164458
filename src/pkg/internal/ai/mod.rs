pub mod client;
pub mod generate;
pub mod prompt;
pub mod read;
pub mod sanitize;
