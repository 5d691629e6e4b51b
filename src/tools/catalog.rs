//! Declared tool names.
//!
//! This is the closed set of operations the server advertises. The registry
//! is checked against it at construction, so every declared name has exactly
//! one handler and no handler exists without a declaration.

use std::fmt;
use std::str::FromStr;

/// One of the seven tmux operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToolName {
    ListSessions,
    ListWindows,
    ListPanes,
    SplitPane,
    SendCommand,
    KillPane,
    SelectPane,
}

impl ToolName {
    /// Catalog order, which is also the advertised order.
    pub const ALL: [ToolName; 7] = [
        ToolName::ListSessions,
        ToolName::ListWindows,
        ToolName::ListPanes,
        ToolName::SplitPane,
        ToolName::SendCommand,
        ToolName::KillPane,
        ToolName::SelectPane,
    ];

    /// Wire name used by callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListSessions => "list_sessions",
            Self::ListWindows => "list_windows",
            Self::ListPanes => "list_panes",
            Self::SplitPane => "split_pane",
            Self::SendCommand => "send_command",
            Self::KillPane => "kill_pane",
            Self::SelectPane => "select_pane",
        }
    }

    /// Short human description advertised with the tool.
    pub fn description(self) -> &'static str {
        match self {
            Self::ListSessions => "List all tmux sessions",
            Self::ListWindows => "List windows in a tmux session",
            Self::ListPanes => "List panes in a tmux window or session",
            Self::SplitPane => "Split a tmux pane horizontally or vertically",
            Self::SendCommand => "Send a command to a tmux pane",
            Self::KillPane => "Kill a tmux pane",
            Self::SelectPane => "Select a tmux pane",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown tool: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn names_round_trip_through_from_str() {
        for name in ToolName::ALL {
            assert_eq!(name.as_str().parse::<ToolName>(), Ok(name));
        }
        assert!("resize_pane".parse::<ToolName>().is_err());
    }

    #[test]
    fn names_are_unique() {
        let unique: BTreeSet<_> = ToolName::ALL.iter().map(|n| n.as_str()).collect();
        assert_eq!(unique.len(), ToolName::ALL.len());
    }
}
