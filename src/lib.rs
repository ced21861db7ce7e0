pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod map;
pub mod models;
pub mod routes;
pub mod state;
pub mod tags;
