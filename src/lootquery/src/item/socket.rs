//! Item sockets and link groups.

use serde::{Deserialize, Serialize};

/// Socket color, including the `Any` wildcard used by query items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocketColor {
    Red,
    Green,
    Blue,
    White,
    /// Wildcard, matches any color in a search.
    Any,
}

impl std::fmt::Display for SocketColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
            Self::White => write!(f, "white"),
            Self::Any => write!(f, "any"),
        }
    }
}

/// One socket on an item.
///
/// `linked` is an opaque link-group identifier; consecutive sockets sharing
/// the same identifier belong to one physical link group. Both fields are
/// absent on the empty sockets of a freshly derived item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSocket {
    pub color: Option<SocketColor>,
    pub linked: Option<u8>,
}
