//! Widget panel visibility and the actions that move it.
//!
//! Visibility is orthogonal to the conversation: changing it never touches
//! the message log or the typing flag.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Whether the chat panel is hidden, shown, or collapsed to its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetVisibility {
    #[default]
    Closed,
    Open,
    Minimized,
}

/// User actions on the widget chrome. None of them carry a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetAction {
    Open,
    ToggleMinimize,
    Close,
}

impl WidgetVisibility {
    /// Next state after `action`.
    ///
    /// Transitions not listed below leave the state unchanged:
    /// - `Closed` + `Open` -> `Open`
    /// - `Open` + `ToggleMinimize` -> `Minimized`
    /// - `Minimized` + `ToggleMinimize` -> `Open`
    /// - `Open` | `Minimized` + `Close` -> `Closed`
    pub fn apply(self, action: WidgetAction) -> WidgetVisibility {
        use WidgetAction as A;
        use WidgetVisibility as V;

        match (self, action) {
            (V::Closed, A::Open) => V::Open,
            (V::Open, A::ToggleMinimize) => V::Minimized,
            (V::Minimized, A::ToggleMinimize) => V::Open,
            (V::Open | V::Minimized, A::Close) => V::Closed,
            (state, _) => state,
        }
    }

    /// Whether the panel (header at least) is on screen.
    pub fn is_visible(self) -> bool {
        self != WidgetVisibility::Closed
    }

    /// Whether the message list and input are on screen.
    pub fn shows_messages(self) -> bool {
        self == WidgetVisibility::Open
    }
}

impl fmt::Display for WidgetVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetVisibility::Closed => write!(f, "closed"),
            WidgetVisibility::Open => write!(f, "open"),
            WidgetVisibility::Minimized => write!(f, "minimized"),
        }
    }
}
