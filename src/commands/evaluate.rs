use tracing::info;

use crate::{
    commands::emit,
    error::Result,
    logic::{
        app_data::AppData,
        team::lineup::{LineUp, Strategy},
    },
    packages::evaluation_screen::EvaluationScreen,
};

// Analyse the team and show the best lineup.
pub fn evaluate(data: &AppData, strategy: Option<Strategy>, limit: Option<usize>, json: bool) -> Result<()> {
    let strategy = strategy.unwrap_or(data.config.strategy);
    let limit = limit.unwrap_or(data.config.recommendation_limit);

    let lineup = LineUp::build(&data.roster, strategy)?;
    info!("evaluated {} players with the {strategy} strategy", data.roster.len());

    emit(&EvaluationScreen::build(&data.roster, &lineup, strategy, limit), json)
}
