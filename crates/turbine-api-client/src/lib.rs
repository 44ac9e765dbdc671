#![doc = include_str!("../README.md")]

mod client;
mod config;
mod envelope;
mod error;
mod fixture;
mod path;
mod resolve;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use fixture::{FixtureContext, FixtureGraph, FixtureNames};
pub use path::ResourcePath;
pub use resolve::resolve;
