//! prize-admin library - configuration and admin login endpoints backed by a record store.

pub mod avatar;
pub mod cli;
pub mod colors;
pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod prizes;
pub mod routes;
pub mod state;
pub mod store;
