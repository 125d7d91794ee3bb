//! Platform-neutral identity of whoever triggered an action.

use std::fmt;

/// Opaque id of a chat user, resolved by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

impl ActorId {
    /// Mention markup that pings this user when rendered.
    #[must_use]
    pub fn mention(self) -> String {
        format!("<@{}>", self.0)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActorId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// An actor together with whether it is an automated account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// Who this is
    pub id: ActorId,
    /// Bot accounts cannot take part in games
    pub is_bot: bool,
}

impl Actor {
    /// A human actor.
    #[must_use]
    pub const fn human(id: u64) -> Self {
        Self {
            id: ActorId(id),
            is_bot: false,
        }
    }

    /// An automated actor.
    #[must_use]
    pub const fn bot(id: u64) -> Self {
        Self {
            id: ActorId(id),
            is_bot: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention() {
        assert_eq!(ActorId(1234).mention(), "<@1234>");
        assert_eq!(ActorId(1234).to_string(), "1234");
    }
}
