// Library for tests to access modules

pub mod catalog;
pub mod classifier;
pub mod client;
pub mod config;
pub mod generator;
pub mod models;
pub mod routes;
pub mod stats;
pub mod version;
