//! The role catalog: player count bounds, requestable roles and the evil table.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    error::{RuleSetError, RulesError},
    game::Role
};

/// The minimum number of players in a standard game.
pub const MIN_PLAYERS: usize = 5;

/// The maximum number of players in a standard game.
pub const MAX_PLAYERS: usize = 10;

/// An immutable rule variant. Construct once and hand it to `Avalon::new`.
///
/// Deserializing fills any missing field from the standard rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// The smallest supported roster.
    pub min_players: usize,
    /// The largest supported roster.
    pub max_players: usize,
    /// Number of evil roles required for each supported roster size.
    pub evil_table: BTreeMap<usize, usize>,
    /// Roles the host may put in a role request. Fillers are added by the assigner and need not be listed.
    pub valid_roles: BTreeSet<Role>
}

impl RuleSet {
    /// Checks that the bounds and the evil table agree with each other.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        if self.min_players > self.max_players {
            return Err(RuleSetError::InvertedBounds { min: self.min_players, max: self.max_players });
        }
        for players in self.min_players..=self.max_players {
            let evil = *self.evil_table.get(&players).ok_or(RuleSetError::MissingEvilCount(players))?;
            if evil >= players {
                return Err(RuleSetError::TooManyEvil { players, evil });
            }
        }
        Ok(())
    }

    /// Whether a roster of this size can play under these rules.
    pub fn supports(&self, num_players: usize) -> bool {
        (self.min_players..=self.max_players).contains(&num_players)
    }

    /// How many evil roles a game with this many players must have.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlayerCount` if the roster size is out of bounds.
    pub fn required_evil(&self, num_players: usize) -> Result<usize, RulesError> {
        self.evil_table.get(&num_players)
            .copied()
            .filter(|_| self.supports(num_players))
            .ok_or(RulesError::InvalidPlayerCount {
                found: num_players,
                min: self.min_players,
                max: self.max_players
            })
    }

    /// Whether the role may appear in a role request.
    pub fn is_valid(&self, role: Role) -> bool {
        self.valid_roles.contains(&role)
    }
}

impl Default for RuleSet {
    fn default() -> RuleSet {
        RuleSet {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            evil_table: vec![(5, 2), (6, 2), (7, 3), (8, 3), (9, 3), (10, 4)].into_iter().collect(),
            valid_roles: vec![Role::Merlin, Role::Percival, Role::Morgana, Role::Assassin, Role::Mordred, Role::Oberon].into_iter().collect()
        }
    }
}
