//! # stats-db
//!
//! Database layer implementing the reaction store and aggregation traits with
//! PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `stats-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Aggregation row models with SQLx `FromRow` derives
//! - The filter-predicate builder used by every aggregation query
//! - Repository implementations for the write and read paths
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stats_common::config::AppConfig;
//! use stats_db::pool::{create_pool, run_migrations};
//! use stats_db::{PgReactionRepository, PgStatsRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     run_migrations(&pool).await?;
//!
//!     let recorder = PgReactionRepository::new(pool.clone());
//!     let stats = PgStatsRepository::new(pool);
//!
//!     // Use the repositories...
//!     Ok(())
//! }
//! ```

mod filter;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{PgReactionRepository, PgStatsRepository};
