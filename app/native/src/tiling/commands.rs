//! Named tiling commands.
//!
//! Commands are zero-argument actions routed by name, the way keybindings
//! refer to them:
//!
//! ```text
//! swap-with-master
//! swap-left | swap-right | swap-up | swap-down
//! focus-left | focus-right | focus-up | focus-down
//! switch-to-workspace-<N|name> | move-to-workspace-<N|name>
//! workspace-next | workspace-prev
//! move-to-workspace-next | move-to-workspace-prev
//! ```
//!
//! Workspace numbers are 1-based. Names are matched case-insensitively
//! against the configured `workspace-names`. An optional `hypr-` prefix is
//! accepted on every command.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::error::{TilingError, TilingResult};
use super::navigator::Direction;
use super::state::WorkspaceIndex;

/// Prefix keybinding schemas put in front of command names.
const COMMAND_PREFIX: &str = "hypr-";

/// Error returned for names that are not commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command '{0}'")]
pub struct UnknownCommand(pub String);

/// How a workspace command names its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceTarget {
    /// A 1-based workspace number.
    Number(usize),
    /// A name from `workspace-names`.
    Name(String),
}

impl WorkspaceTarget {
    /// Resolves the target to a zero-based index.
    ///
    /// Numbers are only checked for being non-zero here; the caller checks
    /// the result against the host's workspace count.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceOutOfRange` for number 0 and `UnknownWorkspace` for
    /// names that are not configured.
    pub fn resolve(&self, names: &[String]) -> TilingResult<WorkspaceIndex> {
        match self {
            Self::Number(0) => Err(TilingError::workspace_out_of_range(-1, names.len())),
            Self::Number(n) => Ok(n - 1),
            Self::Name(name) => names
                .iter()
                .position(|n| n.eq_ignore_ascii_case(name))
                .ok_or_else(|| TilingError::UnknownWorkspace(name.clone())),
        }
    }
}

impl fmt::Display for WorkspaceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(name) => write!(f, "{}", name.to_lowercase()),
        }
    }
}

impl From<&str> for WorkspaceTarget {
    fn from(s: &str) -> Self {
        s.parse::<usize>().map_or_else(|_| Self::Name(s.to_string()), Self::Number)
    }
}

/// A tiling command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Swap the focused window with the master.
    SwapWithMaster,
    /// Swap the focused window with its neighbour in a direction.
    Swap(Direction),
    /// Focus the neighbour in a direction.
    Focus(Direction),
    /// Switch to a workspace.
    SwitchToWorkspace(WorkspaceTarget),
    /// Move the focused window to a workspace.
    MoveToWorkspace(WorkspaceTarget),
    /// Switch to the next workspace.
    WorkspaceNext,
    /// Switch to the previous workspace.
    WorkspacePrev,
    /// Move the focused window to the next workspace.
    MoveToWorkspaceNext,
    /// Move the focused window to the previous workspace.
    MoveToWorkspacePrev,
}

impl Command {
    /// Lists every routable command name.
    ///
    /// Workspace commands are listed once per configured workspace name.
    #[must_use]
    pub fn catalog(workspace_names: &[String]) -> Vec<String> {
        let mut names = vec![Self::SwapWithMaster.to_string()];
        names.extend(Direction::ALL.iter().map(|d| Self::Swap(*d).to_string()));
        names.extend(Direction::ALL.iter().map(|d| Self::Focus(*d).to_string()));
        for name in workspace_names {
            names.push(Self::SwitchToWorkspace(WorkspaceTarget::from(name.as_str())).to_string());
        }
        for name in workspace_names {
            names.push(Self::MoveToWorkspace(WorkspaceTarget::from(name.as_str())).to_string());
        }
        names.extend(
            [Self::WorkspaceNext, Self::WorkspacePrev, Self::MoveToWorkspaceNext, Self::MoveToWorkspacePrev]
                .iter()
                .map(ToString::to_string),
        );
        names
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SwapWithMaster => f.write_str("swap-with-master"),
            Self::Swap(d) => write!(f, "swap-{d}"),
            Self::Focus(d) => write!(f, "focus-{d}"),
            Self::SwitchToWorkspace(t) => write!(f, "switch-to-workspace-{t}"),
            Self::MoveToWorkspace(t) => write!(f, "move-to-workspace-{t}"),
            Self::WorkspaceNext => f.write_str("workspace-next"),
            Self::WorkspacePrev => f.write_str("workspace-prev"),
            Self::MoveToWorkspaceNext => f.write_str("move-to-workspace-next"),
            Self::MoveToWorkspacePrev => f.write_str("move-to-workspace-prev"),
        }
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownCommand(s.to_string());
        let name = s.trim();
        let name = name.strip_prefix(COMMAND_PREFIX).unwrap_or(name);

        let command = match name {
            "swap-with-master" => Self::SwapWithMaster,
            "workspace-next" => Self::WorkspaceNext,
            "workspace-prev" => Self::WorkspacePrev,
            "move-to-workspace-next" => Self::MoveToWorkspaceNext,
            "move-to-workspace-prev" => Self::MoveToWorkspacePrev,
            _ => {
                if let Some(rest) = name.strip_prefix("switch-to-workspace-") {
                    Self::SwitchToWorkspace(parse_target(rest).ok_or_else(unknown)?)
                } else if let Some(rest) = name.strip_prefix("move-to-workspace-") {
                    Self::MoveToWorkspace(parse_target(rest).ok_or_else(unknown)?)
                } else if let Some(rest) = name.strip_prefix("swap-") {
                    Self::Swap(rest.parse().map_err(|_| unknown())?)
                } else if let Some(rest) = name.strip_prefix("focus-") {
                    Self::Focus(rest.parse().map_err(|_| unknown())?)
                } else {
                    return Err(unknown());
                }
            }
        };

        Ok(command)
    }
}

/// Parses the workspace suffix of a command name.
fn parse_target(rest: &str) -> Option<WorkspaceTarget> {
    if rest.is_empty() {
        return None;
    }
    Some(WorkspaceTarget::from(rest))
}
