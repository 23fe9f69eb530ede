//! Template categories
//!
//! Each category maps to a directory of the same name on both sides of the
//! install: `agents/` and `commands/`.

use std::fmt;

/// Kind of template file handled by the installer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Agent definitions (`agents/`)
    Agent,
    /// Slash command definitions (`commands/`)
    Command,
}

impl Category {
    /// All categories, in install order
    pub const ALL: [Self; 2] = [Self::Agent, Self::Command];

    /// Directory name used under both the source and the target root
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Agent => "agents",
            Self::Command => "commands",
        }
    }

    /// Singular label used in status messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Command => "command",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
