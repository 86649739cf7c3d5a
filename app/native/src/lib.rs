//! HyprTile - automatic master/stack tiling for desktop window managers.
//!
//! The library holds the tiling engine ([`tiling`]), its configuration
//! ([`config`]), and the CLI front end ([`cli`]). A window manager
//! integration implements [`tiling::Host`] and feeds host signals to a
//! [`tiling::Tiler`].

pub mod cli;
pub mod config;
pub mod error;
pub mod tiling;
