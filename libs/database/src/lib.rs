//! Document store connectivity
//!
//! # Example
//!
//! ```ignore
//! use core_config::{Environment, FromEnv};
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::from_env()?;
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! ```

pub mod mongodb;
