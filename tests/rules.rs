use std::collections::HashMap;

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use avalon_rules::{
    game::{
        reveal,
        Appearance,
        Faction,
        Player,
        Role,
        RuleSet
    },
    Avalon,
    GameRules,
    RulesError
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn roster(n: usize) -> Vec<Player<String>> {
    (1..=n).map(|i| Player::new(i.to_string(), format!("Player {}", i))).collect()
}

fn evil_count(players: &[Player<String>]) -> usize {
    players.iter().filter(|player| player.faction() == Some(Faction::Evil)).count()
}

fn role_count(players: &[Player<String>], role: Role) -> usize {
    players.iter().filter(|player| player.role == Some(role)).count()
}

#[test]
fn evil_count_for_every_roster_size() {
    init_logger();
    let avalon = Avalon::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let requests: [&[Role]; 5] = [
        &[],
        &[Role::Merlin, Role::Percival],
        &[Role::Merlin, Role::Assassin],
        &[Role::Merlin, Role::Percival, Role::Morgana, Role::Mordred],
        &[Role::Mordred, Role::Morgana, Role::Oberon, Role::Assassin]
    ];
    for n in 5..=10 {
        for requested in requests {
            let dealt = avalon.assign_roles_with(&roster(n), requested, &mut rng).expect("failed to assign roles");
            assert_eq!(dealt.len(), n);
            assert!(dealt.iter().all(|player| player.role.is_some()));
            let required = avalon.rules().required_evil(n).expect("no evil count");
            let requested_evil = requested.iter().filter(|role| role.is_evil()).count();
            assert_eq!(evil_count(&dealt), required.max(requested_evil), "{} players, request {:?}", n, requested);
            for role in requested.iter() {
                assert!(role_count(&dealt, *role) >= 1);
            }
        }
    }
}

#[test]
fn five_players_merlin_percival() {
    let dealt = Avalon::default().assign_roles(&roster(5), &[Role::Merlin, Role::Percival]).expect("failed to assign roles");
    assert_eq!(evil_count(&dealt), 2);
    assert_eq!(role_count(&dealt, Role::Minion), 2);
    assert_eq!(role_count(&dealt, Role::LoyalServant), 1);
}

#[test]
fn seven_players_with_morgana() {
    let dealt = Avalon::default().assign_roles(&roster(7), &[Role::Merlin, Role::Percival, Role::Morgana]).expect("failed to assign roles");
    assert_eq!(evil_count(&dealt), 3);
}

#[test]
fn ten_players_with_mordred() {
    let dealt = Avalon::default().assign_roles(&roster(10), &[Role::Merlin, Role::Percival, Role::Morgana, Role::Mordred]).expect("failed to assign roles");
    assert_eq!(evil_count(&dealt), 4);
}

#[test]
fn errors_are_reported() {
    let avalon = Avalon::default();
    assert_eq!(
        avalon.assign_roles(&roster(3), &[]),
        Err(RulesError::InvalidPlayerCount { found: 3, min: 5, max: 10 })
    );
    assert_eq!(
        avalon.assign_roles(&roster(5), &[Role::Merlin, Role::Percival, Role::Morgana, Role::Mordred, Role::Oberon, Role::Assassin]),
        Err(RulesError::RoleOverflow { players: 5, roles: 6 })
    );
    assert_eq!(
        avalon.message_for_role("Galahad", &roster(5)),
        Err(RulesError::UnknownRole("Galahad".to_owned()))
    );
}

#[test]
fn assignment_is_independent_of_player_order() {
    let avalon = Avalon::default();
    let players = roster(5);
    let requested = [Role::Merlin, Role::Percival, Role::Morgana];
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut outcomes = HashMap::<String, usize>::new();
    for _ in 0..100 {
        let mut shuffled = players.clone();
        shuffled.shuffle(&mut rng);
        let dealt = avalon.assign_roles_with(&shuffled, &requested, &mut rng).expect("failed to assign roles");
        let mut outcome = dealt.iter().map(|player| format!("{}:{:?}", player.id, player.role)).collect::<Vec<_>>();
        outcome.sort();
        *outcomes.entry(outcome.join(",")).or_default() += 1;
    }
    assert!(outcomes.len() > 1);
    assert!(outcomes.values().all(|&count| count < 20));
}

#[test]
fn merlin_gets_each_seat_roughly_equally_often() {
    let avalon = Avalon::default();
    let players = roster(6);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut seats = HashMap::<String, usize>::new();
    for _ in 0..6000 {
        let dealt = avalon.assign_roles_with(&players, &[Role::Merlin], &mut rng).expect("failed to assign roles");
        let merlin = dealt.into_iter().find(|player| player.role == Some(Role::Merlin)).expect("no Merlin dealt");
        *seats.entry(merlin.id).or_default() += 1;
    }
    assert_eq!(seats.len(), 6);
    assert!(seats.values().all(|&count| (800..1200).contains(&count)), "{:?}", seats);
}

#[test]
fn roster_is_not_modified() {
    let players = roster(8);
    let before = players.clone();
    let _ = Avalon::default().assign_roles(&players, &[Role::Merlin]).expect("failed to assign roles");
    assert_eq!(players, before);
}

#[test]
fn disclosures_over_random_deals() {
    let avalon = Avalon::default();
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let requested = [Role::Merlin, Role::Percival, Role::Morgana, Role::Mordred, Role::Oberon];
    for _ in 0..50 {
        let dealt = avalon.assign_roles_with(&roster(10), &requested, &mut rng).expect("failed to assign roles");
        let holder = |role: Role| dealt.iter().find(|player| player.role == Some(role)).expect("role not dealt");
        for player in &dealt {
            let disclosure = avalon.disclosure_for_player(&player.id, &dealt).expect("failed to reveal");
            let mut seen = disclosure.sightings.iter().map(|sighting| sighting.id.clone()).collect::<Vec<_>>();
            seen.sort();
            let mut expected = match player.role.expect("player without role") {
                Role::Merlin => dealt.iter()
                    .filter(|other| other.faction() == Some(Faction::Evil) && other.role != Some(Role::Mordred))
                    .map(|other| other.id.clone())
                    .collect::<Vec<_>>(),
                Role::Percival => vec![holder(Role::Merlin).id.clone(), holder(Role::Morgana).id.clone()],
                Role::Oberon | Role::LoyalServant => Vec::default(),
                _ => dealt.iter()
                    .filter(|other| other.faction() == Some(Faction::Evil) && other.role != Some(Role::Oberon) && other.id != player.id)
                    .map(|other| other.id.clone())
                    .collect()
            };
            expected.sort();
            assert_eq!(seen, expected, "disclosure for {:?}", player.role);
            if player.role == Some(Role::Percival) {
                assert!(disclosure.sightings.iter().all(|sighting| sighting.appearance == Appearance::MerlinOrMorgana));
            }
        }
    }
}

#[test]
fn messages() {
    let players = vec![
        Player::new("a".to_owned(), "Alice").with_role(Role::Merlin),
        Player::new("b".to_owned(), "Bob").with_role(Role::Mordred),
        Player::new("c".to_owned(), "Carol").with_role(Role::Assassin),
        Player::new("d".to_owned(), "Dave").with_role(Role::LoyalServant),
        Player::new("e".to_owned(), "Eve").with_role(Role::Oberon)
    ];
    let avalon = Avalon::default();
    let message = |role| avalon.message_for_role(role, &players).expect("failed to render message");
    assert_eq!(message("Merlin"), "You are Merlin\nCarol is evil\nEve is evil");
    assert_eq!(message("assassin"), "You are Assassin\nBob is evil");
    assert_eq!(message("Mordred"), "You are Mordred\nCarol is evil");
    assert_eq!(message("Oberon"), "You are Oberon");
    assert_eq!(message("Loyal Servant of Arthur"), "You are a Loyal Servant of Arthur");
    assert_eq!(message("Percival"), "You are Percival\nAlice is Merlin or Morgana");
    assert_eq!(reveal::reveal(Role::Minion, &players).to_string(), "You are Minion of Mordred\nBob is evil\nCarol is evil");
}

#[test]
fn rule_set_from_config() {
    let rules = serde_json::from_str::<RuleSet>(r#"{
        "max_players": 12,
        "evil_table": {"5": 2, "6": 2, "7": 3, "8": 3, "9": 3, "10": 4, "11": 4, "12": 5},
        "valid_roles": ["merlin", "percival", "assassin"]
    }"#).expect("failed to parse rule set");
    assert_eq!(rules.min_players, 5);
    let avalon = Avalon::new(rules).expect("inconsistent rule set");
    assert_eq!(avalon.max_players(), 12);
    let dealt = avalon.assign_roles(&roster(12), &[Role::Merlin, Role::Assassin]).expect("failed to assign roles");
    assert_eq!(evil_count(&dealt), 5);
    assert_eq!(
        avalon.assign_roles(&roster(12), &[Role::Oberon]),
        Err(RulesError::RoleNotAllowed(Role::Oberon))
    );
    let json = serde_json::to_value(&RuleSet::default()).expect("failed to serialize rule set");
    assert_eq!(json["valid_roles"][0], "merlin");
}

#[test]
fn every_message_of_a_padded_deal_through_the_trait() {
    let avalon = Avalon::default();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for n in [5, 8, 10] {
        // no evil requested, so every evil slot is a padded Minion
        let dealt = avalon.assign_roles_with(&roster(n), &[Role::Merlin, Role::Percival], &mut rng).expect("failed to assign roles");
        let minions = dealt.iter().filter(|player| player.role == Some(Role::Minion)).collect::<Vec<_>>();
        assert!(minions.len() >= 2);
        for player in &minions {
            let message = avalon.message_for_player(&player.id, &dealt).expect("failed to render message");
            let mut lines = message.lines();
            assert_eq!(lines.next(), Some("You are Minion of Mordred"));
            let mut seen = lines.collect::<Vec<_>>();
            seen.sort_unstable();
            let mut expected = minions.iter()
                .filter(|other| other.id != player.id)
                .map(|other| format!("{} is evil", other.name))
                .collect::<Vec<_>>();
            expected.sort_unstable();
            assert_eq!(seen, expected, "message for {}", player.name);
        }
        let by_role = avalon.message_for_role("minion", &dealt).expect("failed to render message");
        assert!(minions.iter().all(|minion| by_role.contains(&format!("{} is evil", minion.name))));
    }
}
