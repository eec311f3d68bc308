use shared::GameDto;
use log::debug;
use crate::api::ApiError;
use crate::api::utils::get_json;

pub async fn get_games() -> Result<Vec<GameDto>, ApiError> {
    let games: Vec<GameDto> = get_json("/api/games", "games").await?;
    debug!("Successfully fetched {} games", games.len());
    Ok(games)
}
