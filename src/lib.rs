pub mod api;
pub mod config;
pub mod controls;
pub mod error;
pub mod guard;
pub mod models;
pub mod notify;
pub mod observability;
pub mod state;
pub mod upstream;
pub mod workflow;
