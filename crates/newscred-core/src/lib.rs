pub mod cancel;
pub mod config;
pub mod controller;
pub mod endpoint;
pub mod error;
pub mod health;
pub mod input;
pub mod logging;
pub mod model;
pub mod render;
pub mod transport;
