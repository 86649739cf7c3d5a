//! Automatic master/stack tiling.
//!
//! The engine keeps one ordered list of managed windows for the active
//! workspace. Index 0 is the master and takes the left column of the work
//! area; the rest form the stack, recursively split into the remaining
//! space. Window events, drags, and commands only reorder that list and ask
//! for a reflow; the layout is always recomputed from scratch.
//!
//! # Module map
//!
//! - [`actor`] - The [`Tiler`] actor and its handlers
//! - [`host`] - The [`Host`] boundary to the window manager
//! - [`layout`] - Pure geometry
//! - [`managed`], [`navigator`], [`drag`] - List ordering decisions
//! - [`rules`] - Exceptions and tileability
//! - [`scheduler`], [`tasks`] - Reflow debouncing and timers
//! - [`memory_host`] - An in-memory host
//!
//! # Usage
//!
//! ```bash
//! hyprtile layout --windows 3
//! hyprtile commands
//! ```

pub mod actor;
pub mod commands;
pub mod constants;
pub mod drag;
pub mod error;
pub mod host;
pub mod layout;
pub mod managed;
pub mod memory_host;
pub mod navigator;
pub mod rules;
pub mod scheduler;
pub mod state;
pub mod subscriptions;
pub mod tasks;

// Re-export commonly used types
pub use actor::{Tiler, TilerHandle, TilerMessage, TilerSettings};
pub use commands::Command;
pub use error::{TilingError, TilingResult};
pub use host::{Host, HostError, HostEvent};
pub use managed::ManagedWindows;
pub use memory_host::MemoryHost;
pub use navigator::Direction;
pub use rules::ExceptionSet;
pub use state::{Point, Rect, WindowId, WindowInfo, WindowType};
