// Static game data.
use lazy_static::lazy_static;

use crate::logic::{
    player::{
        role::{ComboBonus, CoreBonus, Role, RoleId},
        skill::SkillId::*,
    },
    types::ROLE_COUNT,
};

lazy_static! {
    // Role requirements, indexed by RoleId.
    pub static ref ROLES: [Role; ROLE_COUNT] = [
        Role::build(
            RoleId::TopLaner,
            &[Bravery, Composure, Concentration],
            &[Communication, Vision],
            CoreBonus::build(&[Bravery, Composure, Concentration], &[(80, 15.0), (70, 10.0)]),
            Vec::new(),
        ),
        Role::build(
            RoleId::Jungler,
            &[Bravery, Decision, Vision, Anticipation, Communication, Memory, Teamwork],
            &[Composure, Concentration, Leadership, Flair],
            CoreBonus::build(&[Decision, Vision, Communication], &[(80, 15.0), (70, 10.0)]),
            vec![ComboBonus::build(&[(Anticipation, 85), (Memory, 80)], 8.0)],
        ),
        Role::build(
            RoleId::MidLaner,
            &[Leadership, Vision, Anticipation, Communication, Flair],
            &[Bravery, Composure, Decision, Concentration, Teamwork],
            CoreBonus::build(&[Leadership, Vision, Flair], &[(80, 15.0), (70, 10.0)]),
            vec![ComboBonus::build(&[(Anticipation, 85), (Communication, 80)], 8.0)],
        ),
        Role::build(
            RoleId::BotLaner,
            &[Accuracy, Dexterity],
            &[Composure, Decision, Determination, Leadership, Vision, Teamwork, Flair, Concentration, Communication, Anticipation],
            CoreBonus::build(&[Accuracy, Dexterity], &[(90, 20.0), (80, 15.0), (70, 10.0)]),
            Vec::new(),
        ),
        Role::build(
            RoleId::Support,
            &[Leadership, Vision, Memory, Teamwork, Communication, Anticipation],
            &[Composure, Decision, Concentration],
            CoreBonus::build(&[Vision, Communication, Teamwork], &[(80, 15.0), (70, 10.0)]),
            vec![ComboBonus::build(&[(Memory, 85), (Anticipation, 80)], 8.0)],
        ),
    ];
}
