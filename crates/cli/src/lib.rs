//! DataBaseball CLI Library
//!
//! This crate provides the terminal interface for DataBaseball: a menu for
//! looking up the biography and batting, fielding and pitching statistics of
//! Major League Baseball players.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`screen`]: The terminal capability and its crossterm implementation
//! - [`shell`]: The main menu loop and its actions
//! - [`player_selection`]: Picking one player when a name is ambiguous
//! - [`lookup`]: Printing a lookup without the menu
//!
//! # Examples
//!
//! ```bash
//! # Interactive mode
//! dbb
//!
//! # Use another copy of the dataset
//! dbb --data-directory ~/baseballdatabank/core
//!
//! # Print a player's page directly
//! dbb Babe Ruth
//! ```

pub mod cli_args;
pub mod lookup;
pub mod player_selection;
pub mod screen;
pub mod shell;
