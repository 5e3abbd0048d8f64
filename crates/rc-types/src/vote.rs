use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::ids::UserId;

/// Direction of a vote. Serialized as `1` or `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn value(self) -> i8 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    pub fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }
}

impl From<VoteDirection> for i8 {
    fn from(direction: VoteDirection) -> Self {
        direction.value()
    }
}

impl TryFrom<i8> for VoteDirection {
    type Error = TypeError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Up),
            -1 => Ok(Self::Down),
            other => Err(TypeError::InvalidVoteDirection(other as i64)),
        }
    }
}

/// One user's vote on a post. Owned by the post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub user: UserId,
    pub vote: VoteDirection,
}

impl Vote {
    pub fn up(user: UserId) -> Self {
        Self {
            user,
            vote: VoteDirection::Up,
        }
    }

    pub fn down(user: UserId) -> Self {
        Self {
            user,
            vote: VoteDirection::Down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_wire_values() {
        assert_eq!(serde_json::to_string(&VoteDirection::Up).unwrap(), "1");
        assert_eq!(serde_json::to_string(&VoteDirection::Down).unwrap(), "-1");
    }

    #[test]
    fn zero_is_not_a_direction() {
        assert!(serde_json::from_str::<VoteDirection>("0").is_err());
        assert_eq!(
            VoteDirection::try_from(0),
            Err(TypeError::InvalidVoteDirection(0))
        );
    }

    #[test]
    fn vote_wire_shape() {
        let user = UserId::new();
        let json = serde_json::to_value(Vote::down(user)).unwrap();
        assert_eq!(json["user"], user.to_string());
        assert_eq!(json["vote"], -1);
    }
}
