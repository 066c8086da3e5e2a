//! What each role learns about the other players at the start of the game.

use std::fmt;

use itertools::Itertools as _;
use serde::Serialize;

use crate::{
    error::RulesError,
    game::{Player, Role}
};

/// How a player appears to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Appearance {
    /// The player is known to be evil, without their role.
    Evil,
    /// The player is either Merlin or Morgana, and the viewer can't tell which.
    MerlinOrMorgana
}

/// A single fact about another player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sighting<I> {
    /// The id of the player seen.
    pub id: I,
    /// The name of the player seen.
    pub name: String,
    /// What the viewer learns about them.
    pub appearance: Appearance
}

impl<I> fmt::Display for Sighting<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.appearance {
            Appearance::Evil => write!(f, "{} is evil", self.name),
            Appearance::MerlinOrMorgana => write!(f, "{} is {} or {}", self.name, Role::Merlin, Role::Morgana)
        }
    }
}

/// Everything a role is told during the reveal phase.
///
/// The `Display` impl renders the message shown to the player: their role on the first line, then one line per sighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disclosure<I> {
    /// The role of the viewer.
    pub role: Role,
    /// The other players the viewer learns something about, in roster order.
    pub sightings: Vec<Sighting<I>>
}

impl<I> Disclosure<I> {
    /// The names of all players mentioned in this disclosure.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sightings.iter().map(|sighting| &sighting.name[..])
    }
}

impl<I> fmt::Display for Disclosure<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.role {
            Role::LoyalServant => write!(f, "You are a {}", self.role)?,
            role => write!(f, "You are {}", role)?
        }
        if !self.sightings.is_empty() {
            write!(f, "\n{}", self.sightings.iter().join("\n"))?;
        }
        Ok(())
    }
}

/// Which other players `role` learns about, and how they appear.
fn sees(role: Role, other: Role) -> Option<Appearance> {
    match role {
        Role::LoyalServant | Role::Oberon => None,
        Role::Merlin => (other.is_evil() && other != Role::Mordred).then_some(Appearance::Evil),
        Role::Percival => matches!(other, Role::Merlin | Role::Morgana).then_some(Appearance::MerlinOrMorgana),
        Role::Mordred | Role::Morgana | Role::Assassin | Role::Minion => (other.is_evil() && other != Role::Oberon).then_some(Appearance::Evil)
    }
}

/// Computes the disclosure for `role`, leaving out the viewer with id `viewer` if given.
pub fn disclose<I: Clone + PartialEq>(role: Role, viewer: Option<&I>, players: &[Player<I>]) -> Disclosure<I> {
    let sightings = players.iter()
        .filter(|player| viewer != Some(&player.id))
        .filter_map(|player| {
            let appearance = sees(role, player.role?)?;
            Some(Sighting {
                id: player.id.clone(),
                name: player.name.clone(),
                appearance
            })
        })
        .collect();
    Disclosure { role, sightings }
}

/// Computes the disclosure for `role` as seen by the player who holds it.
///
/// The viewer is only left out if exactly one player holds the role.
/// With several holders (usually Minions) they all appear, use `reveal_for_player` to leave out a specific one.
pub fn reveal<I: Clone + PartialEq>(role: Role, players: &[Player<I>]) -> Disclosure<I> {
    let mut holders = players.iter().filter(|player| player.role == Some(role));
    let viewer = match (holders.next(), holders.next()) {
        (Some(player), None) => Some(&player.id),
        _ => None
    };
    disclose(role, viewer, players)
}

/// Like `reveal`, but the role is given by name.
///
/// # Errors
///
/// Returns `UnknownRole` if `role` does not name a role.
pub fn reveal_named<I: Clone + PartialEq>(role: &str, players: &[Player<I>]) -> Result<Disclosure<I>, RulesError> {
    Ok(reveal(role.parse()?, players))
}

/// Computes the disclosure for one specific player, using their assigned role.
///
/// # Errors
///
/// * `UnknownPlayer` if no player in the roster has the id `player_id`.
/// * `Unassigned` if that player has no role yet.
pub fn reveal_for_player<I: Clone + PartialEq>(player_id: &I, players: &[Player<I>]) -> Result<Disclosure<I>, RulesError> {
    let player = players.iter().find(|player| player.id == *player_id).ok_or(RulesError::UnknownPlayer)?;
    let role = player.role.ok_or(RulesError::Unassigned)?;
    Ok(disclose(role, Some(player_id), players))
}
