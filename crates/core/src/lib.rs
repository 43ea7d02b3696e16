//! DataBaseball Core Library
//!
//! This crate provides the core functionality for databaseball, a terminal
//! tool for browsing historical MLB player records from the baseballdatabank
//! CSV files.
//!
//! # Key Features
//!
//! - **Dataset Loading**: Read `People.csv`, `Batting.csv`, `Fielding.csv` and `Pitching.csv`
//! - **Name Normalization**: Accent and case insensitive name comparison
//! - **Matching**: Resolve a partial name to one player or a list of candidates
//! - **Stats Formatting**: Biography and column-aligned per-season tables
//! - **Random Players**: Ask an external helper program for a player name
//!
//! # Examples
//!
//! Loading the dataset and looking up a player:
//!
//! ```no_run
//! use databaseball_core::dataset::Dataset;
//! use databaseball_core::matcher::{match_query, MatchResult};
//!
//! let dataset = Dataset::load("baseballdatabank-2023.1/core")?;
//! if let MatchResult::Resolved(player_id) = match_query(&dataset, "Babe Ruth") {
//!     println!("Found {}", player_id);
//! }
//! # Ok::<(), databaseball_core::error::Error>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod matcher;
pub mod normalize;
pub mod stats;
