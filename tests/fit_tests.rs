use std::collections::BTreeMap;

use moba_team_manager_lib::logic::player::{
    fit::age_multiplier,
    role::{ComboBonus, CoreBonus, Role, RoleId},
    skill::{diminishing_returns, SkillId},
    Player,
};
use pretty_assertions::assert_eq;

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

fn player_with(age: u8, skills: &[(SkillId, u8)]) -> Player {
    Player {
        name: "Test".to_string(),
        age,
        skills: skills.iter().copied().collect(),
    }
}

fn player_with_all(age: u8, value: u8) -> Player {
    let skills: Vec<(SkillId, u8)> = SkillId::ALL.iter().map(|skill| (*skill, value)).collect();
    player_with(age, &skills)
}

// ═══════════════════════════════════════════════════════════════════════
// Building blocks
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_diminishing_returns_is_linear_up_to_70() {
    assert_close(diminishing_returns(0), 0.0);
    assert_close(diminishing_returns(55), 55.0);
    assert_close(diminishing_returns(70), 70.0);
}

#[test]
fn test_diminishing_returns_flattens_high_values() {
    assert_close(diminishing_returns(80), 78.0);
    assert_close(diminishing_returns(85), 82.0);
    assert_close(diminishing_returns(90), 85.0);
    assert_close(diminishing_returns(100), 91.0);
}

#[test]
fn test_age_multiplier_brackets() {
    assert_close(age_multiplier(16), 0.90);
    assert_close(age_multiplier(17), 0.90);
    assert_close(age_multiplier(18), 1.0);
    assert_close(age_multiplier(22), 1.0);
    assert_close(age_multiplier(23), 0.98);
    assert_close(age_multiplier(25), 0.98);
    assert_close(age_multiplier(26), 0.95);
    assert_close(age_multiplier(28), 0.95);
    assert_close(age_multiplier(29), 0.88);
    assert_close(age_multiplier(35), 0.88);
}

#[test]
fn test_missing_skills_count_as_zero() {
    let player = player_with(20, &[(SkillId::Vision, 90)]);
    assert_eq!(player.skill(SkillId::Vision), 90);
    assert_eq!(player.skill(SkillId::Accuracy), 0);
}

// ═══════════════════════════════════════════════════════════════════════
// Role bonuses
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_core_bonus_tiers() {
    let top = RoleId::TopLaner.role();
    let core = [SkillId::Bravery, SkillId::Composure, SkillId::Concentration];

    let strong: Vec<(SkillId, u8)> = core.iter().map(|skill| (*skill, 80)).collect();
    assert_close(top.bonus(&player_with(20, &strong)), 15.0);

    let decent: Vec<(SkillId, u8)> = core.iter().map(|skill| (*skill, 75)).collect();
    assert_close(top.bonus(&player_with(20, &decent)), 10.0);

    let uneven = [(SkillId::Bravery, 95), (SkillId::Composure, 95), (SkillId::Concentration, 69)];
    assert_close(top.bonus(&player_with(20, &uneven)), 0.0);
}

#[test]
fn test_bot_laner_has_three_tiers() {
    let bot = RoleId::BotLaner.role();
    let bonus = |value| bot.bonus(&player_with(20, &[(SkillId::Accuracy, value), (SkillId::Dexterity, value)]));

    assert_close(bonus(90), 20.0);
    assert_close(bonus(85), 15.0);
    assert_close(bonus(70), 10.0);
    assert_close(bonus(69), 0.0);
}

#[test]
fn test_combo_bonus_applies_without_core() {
    let jungler = RoleId::Jungler.role();
    let player = player_with(20, &[(SkillId::Anticipation, 90), (SkillId::Memory, 85)]);
    assert_close(jungler.bonus(&player), 8.0);
}

#[test]
fn test_core_and_combo_stack() {
    let player = player_with_all(20, 100);
    assert_close(RoleId::Jungler.role().bonus(&player), 23.0);
    assert_close(RoleId::MidLaner.role().bonus(&player), 23.0);
    assert_close(RoleId::Support.role().bonus(&player), 23.0);
    assert_close(RoleId::TopLaner.role().bonus(&player), 15.0);
    assert_close(RoleId::BotLaner.role().bonus(&player), 20.0);
}

#[test]
fn test_role_bonus_is_capped() {
    let role = Role::build(
        RoleId::BotLaner,
        &[SkillId::Accuracy],
        &[],
        CoreBonus::build(&[SkillId::Accuracy], &[(50, 20.0)]),
        vec![ComboBonus::build(&[(SkillId::Accuracy, 50)], 10.0)],
    );

    let player = player_with(20, &[(SkillId::Accuracy, 60)]);
    assert_close(role.bonus(&player), Role::MAX_BONUS);
}

// ═══════════════════════════════════════════════════════════════════════
// Role fit
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_average_player_fits_every_role_equally() {
    let player = Player::build("Average", 20);
    for fit in player.role_fits() {
        // 50 primary + 7.5 from secondary skills.
        assert_close(fit, 57.5);
    }
}

#[test]
fn test_age_scales_primary_score_only() {
    let player = player_with_all(30, 50);
    // 50 * 0.88 + 7.5
    assert_close(player.role_fit(RoleId::Support), 51.5);
}

#[test]
fn test_bonus_and_secondary_add_up() {
    let player = player_with_all(20, 70);
    // 70 primary + 10 core bonus + 10.5 secondary
    for role in RoleId::ALL {
        assert_close(player.role_fit(role), 90.5);
    }
}

#[test]
fn test_fit_is_clamped_to_100() {
    let player = player_with_all(20, 100);
    assert_eq!(player.role_fits(), [100.0; 5]);
}

#[test]
fn test_specialist_fits_own_role() {
    let player = player_with(30, &[(SkillId::Accuracy, 90), (SkillId::Dexterity, 90)]);

    // 85 * 0.88 + 20 bonus, nothing from secondaries.
    assert_close(player.role_fit(RoleId::BotLaner), 94.8);
    assert_close(player.role_fit(RoleId::TopLaner), 0.0);

    let (role, fit) = player.best_role();
    assert_eq!(role, RoleId::BotLaner);
    assert_close(fit, 94.8);
}

#[test]
fn test_best_role_ties_go_to_first_role() {
    let player = Player::build("Even", 20);
    assert_eq!(player.best_role().0, RoleId::TopLaner);

    let blank = Player { name: "Blank".to_string(), age: 20, skills: BTreeMap::new() };
    assert_eq!(blank.best_role(), (RoleId::TopLaner, 0.0));
}

#[test]
fn test_primary_fit_ignores_age_and_bonuses() {
    let player = player_with_all(33, 50);
    for role in RoleId::ALL {
        assert_close(player.primary_fit(role), 50.0);
    }
}
