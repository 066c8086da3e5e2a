//! Core game rules.

pub mod assign;
pub mod catalog;
pub mod reveal;
mod types;

use std::collections::BTreeSet;

use rand::{thread_rng, Rng};

use crate::error::RulesError;
pub use self::{
    catalog::{RuleSet, MAX_PLAYERS, MIN_PLAYERS},
    reveal::{Appearance, Disclosure, Sighting},
    types::*
};

/// The host engine uses this trait to set up a game: once to deal roles at the start, then once per player to tell them what they know.
///
/// The methods are generic over the host's player id and the random number generator, so this trait is not object safe.
/// Hosts choosing between variants at runtime should switch on the `RuleSet` handed to `Avalon::new` instead of on a `dyn GameRules`.
pub trait GameRules {
    /// The smallest roster a game can be started with.
    fn min_players(&self) -> usize;

    /// The largest roster a game can be started with.
    fn max_players(&self) -> usize;

    /// The roles the host may offer in a role request.
    fn valid_roles(&self) -> &BTreeSet<Role>;

    /// Deals roles using the given source of randomness.
    ///
    /// Returns a copy of the roster, in random order, with every player's role set. The input roster is left untouched.
    ///
    /// # Errors
    ///
    /// Fails if the roster size is out of bounds, or if the requested roles can't be fit into the roster.
    fn assign_roles_with<I: Clone, R: Rng + ?Sized>(&self, players: &[Player<I>], requested: &[Role], rng: &mut R) -> Result<Vec<Player<I>>, RulesError>;

    /// Deals roles using the thread-local generator.
    fn assign_roles<I: Clone>(&self, players: &[Player<I>], requested: &[Role]) -> Result<Vec<Player<I>>, RulesError> {
        self.assign_roles_with(players, requested, &mut thread_rng())
    }

    /// Renders the message shown to the holder of the named role, given the already dealt roster.
    ///
    /// If several players hold the role, none of them is left out of the message. Prefer `message_for_player` for those.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRole` if `role` does not name a role.
    fn message_for_role<I: Clone + PartialEq>(&self, role: &str, players: &[Player<I>]) -> Result<String, RulesError>;

    /// Renders the message shown to one player of the already dealt roster, leaving out that player only.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPlayer` if no player has the id `player_id`, or `Unassigned` if that player has no role.
    fn message_for_player<I: Clone + PartialEq>(&self, player_id: &I, players: &[Player<I>]) -> Result<String, RulesError>;
}

/// The Avalon rules under a given rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Avalon {
    rules: RuleSet
}

impl Avalon {
    /// Creates the rules for a custom variant.
    ///
    /// # Errors
    ///
    /// Returns `RuleSet` if the variant is inconsistent, see `RuleSet::validate`.
    pub fn new(rules: RuleSet) -> Result<Avalon, RulesError> {
        rules.validate()?;
        Ok(Avalon { rules })
    }

    /// The rule set this game is played under.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Computes the structured disclosure for one player of an already dealt roster.
    ///
    /// See `reveal::reveal_for_player`.
    pub fn disclosure_for_player<I: Clone + PartialEq>(&self, player_id: &I, players: &[Player<I>]) -> Result<Disclosure<I>, RulesError> {
        reveal::reveal_for_player(player_id, players)
    }
}

impl GameRules for Avalon {
    fn min_players(&self) -> usize {
        self.rules.min_players
    }

    fn max_players(&self) -> usize {
        self.rules.max_players
    }

    fn valid_roles(&self) -> &BTreeSet<Role> {
        &self.rules.valid_roles
    }

    fn assign_roles_with<I: Clone, R: Rng + ?Sized>(&self, players: &[Player<I>], requested: &[Role], rng: &mut R) -> Result<Vec<Player<I>>, RulesError> {
        assign::assign(&self.rules, players, requested, rng)
    }

    fn message_for_role<I: Clone + PartialEq>(&self, role: &str, players: &[Player<I>]) -> Result<String, RulesError> {
        reveal::reveal_named(role, players).map(|disclosure| disclosure.to_string())
    }

    fn message_for_player<I: Clone + PartialEq>(&self, player_id: &I, players: &[Player<I>]) -> Result<String, RulesError> {
        reveal::reveal_for_player(player_id, players).map(|disclosure| disclosure.to_string())
    }
}
