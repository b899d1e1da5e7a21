pub mod audit;
pub mod codec;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod services;
pub mod storage;
