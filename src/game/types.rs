//! Data types shared by the role catalog, the assigner and the reveal oracle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// The faction of a player determines their goal. It is derived from the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Faction {
    /// The loyal servants of Arthur, trying to complete the quests.
    Good,
    /// The minions of Mordred, trying to sabotage the quests.
    Evil
}

/// An Avalon player role.
///
/// Serialized by its kebab-case id (`loyal-servant`, `minion`, ...), displayed by its card name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// A regular member of the good faction with no special knowledge. Used to fill up the good slots.
    LoyalServant,
    /// Good. Sees the evil players, except Mordred.
    Merlin,
    /// Good. Sees Merlin and Morgana, but cannot tell them apart.
    Percival,
    /// Evil. Hidden from Merlin.
    Mordred,
    /// Evil. Appears as Merlin to Percival.
    Morgana,
    /// Evil. Gets to name Merlin if the good faction wins the quests.
    Assassin,
    /// Evil. Neither sees nor is seen by the other evil players.
    Oberon,
    /// A regular member of the evil faction. Used to fill up the evil slots.
    Minion
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 8] = [
        Role::LoyalServant,
        Role::Merlin,
        Role::Percival,
        Role::Mordred,
        Role::Morgana,
        Role::Assassin,
        Role::Oberon,
        Role::Minion
    ];

    /// The faction this role plays for.
    pub fn faction(&self) -> Faction {
        match *self {
            Role::LoyalServant | Role::Merlin | Role::Percival => Faction::Good,
            Role::Mordred | Role::Morgana | Role::Assassin | Role::Oberon | Role::Minion => Faction::Evil
        }
    }

    /// Shorthand for `self.faction() == Faction::Evil`.
    pub fn is_evil(&self) -> bool {
        self.faction() == Faction::Evil
    }

    /// The name printed on the role card.
    pub fn name(&self) -> &'static str {
        match *self {
            Role::LoyalServant => "Loyal Servant of Arthur",
            Role::Merlin => "Merlin",
            Role::Percival => "Percival",
            Role::Mordred => "Mordred",
            Role::Morgana => "Morgana",
            Role::Assassin => "Assassin",
            Role::Oberon => "Oberon",
            Role::Minion => "Minion of Mordred"
        }
    }

    /// The stable identifier used when serializing.
    pub fn id(&self) -> &'static str {
        match *self {
            Role::LoyalServant => "loyal-servant",
            Role::Merlin => "merlin",
            Role::Percival => "percival",
            Role::Mordred => "mordred",
            Role::Morgana => "morgana",
            Role::Assassin => "assassin",
            Role::Oberon => "oberon",
            Role::Minion => "minion"
        }
    }
}

impl FromStr for Role {
    type Err = RulesError;

    /// Accepts either the card name or the id, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Role, RulesError> {
        let needle = s.trim().to_lowercase();
        Role::ALL.iter()
            .find(|role| role.id() == needle || role.name().to_lowercase() == needle)
            .copied()
            .ok_or_else(|| RulesError::UnknownRole(s.to_owned()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A player as known to the host engine.
///
/// The type parameter `I` is the host's opaque player identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player<I> {
    /// The host's identifier for this player.
    pub id: I,
    /// The name other players know this player by.
    pub name: String,
    /// The secret role, once assigned.
    #[serde(default)]
    pub role: Option<Role>
}

impl<I> Player<I> {
    /// A player who has not been assigned a role yet.
    pub fn new(id: I, name: impl Into<String>) -> Player<I> {
        Player {
            id,
            name: name.into(),
            role: None
        }
    }

    /// Returns this player with the given role.
    pub fn with_role(mut self, role: Role) -> Player<I> {
        self.role = Some(role);
        self
    }

    /// The faction of the assigned role, if any.
    pub fn faction(&self) -> Option<Faction> {
        self.role.map(|role| role.faction())
    }
}
