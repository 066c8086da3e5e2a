//! Role assignment: padding a role request to a full, balanced role list and dealing it out.

use std::iter;

use log::{debug, trace};
use rand::Rng;

use crate::{
    error::RulesError,
    game::{
        Player,
        Role,
        RuleSet
    },
    util::AvalonIteratorExt
};

/// Pads the requested roles to the full role list for `num_players` players.
///
/// Minions are added until the required number of evil roles is reached, then Loyal Servants until every player has a role.
/// Excess evil roles in the request are kept.
///
/// # Errors
///
/// * `InvalidPlayerCount` if the rules do not support `num_players`.
/// * `RoleNotAllowed` if the request contains a role outside `valid_roles`.
/// * `RoleOverflow` if the request plus the added minions exceeds `num_players`.
pub fn pad_roles(rules: &RuleSet, num_players: usize, requested: &[Role]) -> Result<Vec<Role>, RulesError> {
    let required_evil = rules.required_evil(num_players)?;
    if let Some(&role) = requested.iter().find(|&&role| !rules.is_valid(role)) {
        return Err(RulesError::RoleNotAllowed(role));
    }
    let requested_evil = requested.iter().filter(|role| role.is_evil()).count();
    let minions = required_evil.saturating_sub(requested_evil);
    let mut roles = requested.to_vec();
    roles.extend(iter::repeat(Role::Minion).take(minions));
    if roles.len() > num_players {
        return Err(RulesError::RoleOverflow { players: num_players, roles: roles.len() });
    }
    let servants = num_players - roles.len();
    roles.extend(iter::repeat(Role::LoyalServant).take(servants));
    debug!("{} players: {} evil requested, {} required, added {} minions and {} servants", num_players, requested_evil, required_evil, minions, servants);
    Ok(roles)
}

/// Deals a role to every player.
///
/// Both the roster and the padded role list are shuffled independently before being zipped,
/// so the outcome does not depend on the order of either input.
/// The roster is not modified; the returned players are copies with `role` set, in dealing order.
pub fn assign<I: Clone, R: Rng + ?Sized>(rules: &RuleSet, players: &[Player<I>], requested: &[Role], rng: &mut R) -> Result<Vec<Player<I>>, RulesError> {
    let roles = pad_roles(rules, players.len(), requested)?;
    let shuffled_players = players.iter().shuffled(rng);
    let shuffled_roles = roles.into_iter().shuffled(rng);
    let assigned = shuffled_players.into_iter()
        .zip(shuffled_roles)
        .map(|(player, role)| player.clone().with_role(role))
        .collect::<Vec<_>>();
    trace!("dealt roles: {:?}", assigned.iter().map(|player| (&player.name, player.role)).collect::<Vec<_>>());
    Ok(assigned)
}
