use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind tag embedded in generated identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Board,
    List,
    Card,
}

impl IdKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::List => "list",
            Self::Card => "card",
        }
    }
}

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a process-unique identifier: `<kind>-<unix millis>-<random base36>`
pub fn generate_id(kind: IdKind) -> String {
    let millis = Utc::now().timestamp_millis();
    let mut bits = Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        suffix.push(BASE36[(bits % 36) as usize] as char);
        bits /= 36;
    }
    format!("{}-{}-{}", kind.prefix(), millis, suffix)
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh identifier
            pub fn generate() -> Self {
                Self(generate_id($kind))
            }

            /// Returns the string representation
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a board, unique among all boards
    BoardId,
    IdKind::Board
);
entity_id!(
    /// Identifier of a list, unique within its board
    ListId,
    IdKind::List
);
entity_id!(
    /// Identifier of a card, unique within its list
    CardId,
    IdKind::Card
);
