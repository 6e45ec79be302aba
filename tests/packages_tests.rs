use moba_team_manager_lib::{
    logic::{
        player::{role::RoleId, skill::SkillId, Player},
        team::{
            ai,
            lineup::{LineUp, Strategy},
            rating::{FitLabel, TeamTier},
            Roster,
        },
    },
    packages::{
        evaluation_screen::EvaluationScreen, player_screen::PlayerScreen, roles_screen::RolesScreen,
        roster_screen::RosterScreen, StatusMessage,
    },
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn star(name: &str) -> Player {
    let mut player = Player::build(name, 20);
    for skill in SkillId::ALL {
        player.set_skill(skill, 100);
    }
    player
}

fn rookie() -> Player {
    Player::build("Rookie", 17)
}

fn full_team() -> Roster {
    let mut players: Vec<Player> = ["Ace", "Blade", "Comet", "Dusk", "Echo"].into_iter().map(star).collect();
    players.push(rookie());
    Roster::from_players(players).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Roster listing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_roster_screen_rows() {
    let roster = Roster::from_players(vec![rookie()]).unwrap();
    let screen = RosterScreen::build(&roster, None);

    assert_eq!(screen.players.len(), 1);
    assert_eq!(screen.players[0].best_role, RoleId::TopLaner);
    assert_eq!(screen.players[0].best_fit, 52.5);

    let text = screen.to_string();
    assert!(text.starts_with("Name"));
    assert!(text.contains("Rookie"));
    assert!(text.contains("Top Laner"));
    assert!(text.contains("52.5%"));

    assert_eq!(
        serde_json::to_value(&screen).unwrap(),
        json!({ "players": [{ "name": "Rookie", "age": 17, "best_role": "Top Laner", "best_fit": 52.5 }] })
    );
}

#[test]
fn test_roster_screen_search() {
    let screen = RosterScreen::build(&full_team(), Some("e"));
    let names: Vec<&str> = screen.players.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Ace", "Blade", "Comet", "Echo", "Rookie"]);
    assert_eq!(serde_json::to_value(&screen).unwrap()["search"], json!("e"));
}

#[test]
fn test_roster_screen_empty_messages() {
    assert_eq!(RosterScreen::build(&Roster::new(), None).to_string(), "No players in the roster.");
    assert_eq!(RosterScreen::build(&full_team(), Some("zz")).to_string(), "No players matching 'zz'.");
}

// ═══════════════════════════════════════════════════════════════════════
// Player details
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_player_screen() {
    let player = rookie().with_skill(SkillId::Vision, 85).with_skill(SkillId::Composure, 60);
    let screen = PlayerScreen::build(&player);

    assert_eq!(screen.skills.len(), 16);
    assert_eq!(screen.skills[0].skill, SkillId::Accuracy);
    assert_eq!(screen.role_fits.len(), 5);
    assert_eq!(screen.role_fits[3].role, RoleId::BotLaner);
    assert_eq!((screen.best_role, screen.best_fit), player.best_role());

    let value = serde_json::to_value(&screen).unwrap();
    assert_eq!(value["skills"][0], json!({ "skill": "Accuracy", "value": 50, "grade": "weak" }));
    assert_eq!(value["skills"][2], json!({ "skill": "Composure", "value": 60, "grade": "average" }));
    assert_eq!(value["skills"][7], json!({ "skill": "Vision", "value": 85, "grade": "strong" }));
    assert_eq!(value["role_fits"][4]["role"], json!("Support"));
}

#[test]
fn test_player_screen_text() {
    let text = PlayerScreen::build(&rookie()).to_string();

    assert!(text.starts_with("Rookie (Age: 17)"));
    assert!(text.contains("Concentration"));
    assert!(text.contains("Mid Laner"));
    assert!(text.ends_with("Best role: Top Laner (52.5%)"));
}

// ═══════════════════════════════════════════════════════════════════════
// Evaluation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_evaluation_of_full_team() {
    let roster = full_team();
    let lineup = LineUp::build(&roster, Strategy::Optimal).unwrap();
    let screen = EvaluationScreen::build(&roster, &lineup, Strategy::Optimal, ai::DEFAULT_LIMIT);

    let mut starters: Vec<&str> = screen
        .lineup
        .iter()
        .map(|row| row.player.as_ref().unwrap().name.as_str())
        .collect();
    starters.sort();
    assert_eq!(starters, vec!["Ace", "Blade", "Comet", "Dusk", "Echo"]);
    assert!(screen.lineup.iter().all(|row| row.player.as_ref().unwrap().label == FitLabel::Excellent));

    let stats = screen.statistics.as_ref().unwrap();
    assert_eq!(stats.total_fit, 500.0);
    assert_eq!(stats.average_fit, 100.0);
    assert_eq!(stats.tier, TeamTier::S);

    assert_eq!(screen.recommendations, vec![ai::SOLID_TEAM.to_string()]);
    assert_eq!(screen.bench.len(), 1);
    assert_eq!(screen.bench[0].name, "Rookie");
    assert_eq!(screen.bench[0].best_role, RoleId::TopLaner);

    let text = screen.to_string();
    assert!(text.starts_with("Team Composition (optimal lineup)"));
    assert!(text.contains("S-Tier (Championship Level)"));
    assert!(text.contains("Bench Players"));
    assert!(text.contains("Rookie (Age: 17) - best as Top Laner: 52.5%"));

    let value = serde_json::to_value(&screen).unwrap();
    assert_eq!(value["strategy"], json!("optimal"));
    assert_eq!(value["lineup"][0]["role"], json!("Top Laner"));
    assert_eq!(value["statistics"]["tier"], json!("S"));
}

#[test]
fn test_evaluation_with_vacancies() {
    let roster = Roster::from_players(vec![rookie()]).unwrap();
    let lineup = LineUp::build(&roster, Strategy::Greedy).unwrap();
    let screen = EvaluationScreen::build(&roster, &lineup, Strategy::Greedy, ai::DEFAULT_LIMIT);

    assert_eq!(screen.lineup.iter().filter(|row| row.player.is_none()).count(), 4);
    assert!(screen.bench.is_empty());

    let stats = screen.statistics.as_ref().unwrap();
    assert_eq!(stats.average_fit, 52.5);
    assert_eq!(stats.tier, TeamTier::D);

    let text = screen.to_string();
    assert!(text.starts_with("Team Composition (greedy lineup)"));
    assert!(text.contains("Position Vacant"));
    assert!(text.contains("D-Tier (Needs Development)"));
    assert!(!text.contains("Bench Players"));

    let value = serde_json::to_value(&screen).unwrap();
    let vacant = value["lineup"].as_array().unwrap().iter().filter(|row| row["player"].is_null()).count();
    assert_eq!(vacant, 4);
}

// ═══════════════════════════════════════════════════════════════════════
// Role reference and status messages
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_roles_screen() {
    let screen = RolesScreen::build();
    assert_eq!(screen.roles.len(), 5);
    assert_eq!(screen.max_bonus, 25.0);

    let value = serde_json::to_value(&screen).unwrap();
    assert_eq!(value["roles"][3]["id"], json!("Bot Laner"));
    assert_eq!(value["roles"][3]["primary"], json!(["Accuracy", "Dexterity"]));
    assert_eq!(value["roles"][3]["core"]["tiers"].as_array().unwrap().len(), 3);

    let text = screen.to_string();
    assert!(text.starts_with("Top Laner\n"));
    assert!(text.contains("+20 at 90"));
    assert!(text.contains("Combo bonus: +8 for Anticipation >= 85 and Memory >= 80"));
}

#[test]
fn test_status_message() {
    let plain = StatusMessage::build("deleted", "Player 'Nova' deleted.".to_string());
    assert_eq!(plain.to_string(), "Player 'Nova' deleted.");
    assert_eq!(
        serde_json::to_value(&plain).unwrap(),
        json!({ "status": "deleted", "message": "Player 'Nova' deleted." })
    );

    let generated = StatusMessage::build("generated", "Generated 2 random players.".to_string())
        .with_players(vec!["Nova7".to_string(), "Wolf12".to_string()]);
    assert_eq!(generated.to_string(), "Generated 2 random players.\n  Nova7\n  Wolf12");
    assert_eq!(serde_json::to_value(&generated).unwrap()["players"], json!(["Nova7", "Wolf12"]));
}
