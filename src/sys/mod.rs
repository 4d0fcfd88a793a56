pub mod api;
pub mod config;
pub mod disposition;
pub mod error;
pub mod image;
pub mod logging;
pub mod save;

#[cfg(test)]
pub mod test_server;
