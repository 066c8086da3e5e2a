//! Error types returned by the rules module.

use thiserror::Error;

use crate::game::Role;

/// The possible errors returned by role assignment and role reveal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The roster size is outside the supported range.
    #[error("invalid number of players ({found} found, {min} to {max} supported)")]
    InvalidPlayerCount {
        /// This many players are in the roster.
        found: usize,
        /// The smallest supported roster.
        min: usize,
        /// The largest supported roster.
        max: usize
    },
    /// More roles than there are players, after adding the required minions.
    #[error("too many roles ({players} players, {roles} roles)")]
    RoleOverflow {
        /// This many players are in the roster.
        players: usize,
        /// But this many roles would have to be handed out.
        roles: usize
    },
    /// The text does not name any role.
    #[error("{0} is not a valid role")]
    UnknownRole(String),
    /// The role exists but may not be part of a role request under these rules.
    #[error("{0} may not be requested")]
    RoleNotAllowed(Role),
    /// No player with the given id is in the roster.
    #[error("no such player")]
    UnknownPlayer,
    /// The player has not been assigned a role yet.
    #[error("player has no role assigned")]
    Unassigned,
    /// The rule set itself is inconsistent.
    #[error(transparent)]
    RuleSet(#[from] RuleSetError)
}

/// The possible errors returned by `RuleSet::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    /// `min_players` is greater than `max_players`.
    #[error("player bounds are inverted ({min} > {max})")]
    InvertedBounds {
        /// The configured minimum.
        min: usize,
        /// The configured maximum.
        max: usize
    },
    /// A supported player count has no evil count configured.
    #[error("no evil count configured for {0} players")]
    MissingEvilCount(usize),
    /// The configured evil count leaves no room for the good faction.
    #[error("{evil} evil roles for {players} players leaves no good players")]
    TooManyEvil {
        /// The player count of the offending entry.
        players: usize,
        /// The evil count configured for it.
        evil: usize
    }
}
