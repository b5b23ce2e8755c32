pub mod commands;
pub mod config;
pub mod connection;
pub mod dispatcher;
pub mod entity;
pub mod error;
pub mod keyboards;
pub mod middleware;
pub mod migration;
pub mod routing;
pub mod sender;
pub mod state;
pub mod storage;
pub mod telegram;
pub mod texts;
pub mod types;
