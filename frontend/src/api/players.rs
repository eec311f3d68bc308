use gloo_net::http::Request;
use shared::{CreatePlayerRequest, PlayerDto};
use log::debug;
use crate::api::{api_url, ApiError};
use crate::api::utils::{error_for_status, get_json};

pub async fn get_players() -> Result<Vec<PlayerDto>, ApiError> {
    let players: Vec<PlayerDto> = get_json("/api/players", "players").await?;
    debug!("Successfully fetched {} players", players.len());
    Ok(players)
}

/// Register a player. The created record is not returned; refetch to see it.
pub async fn create_player(request: &CreatePlayerRequest) -> Result<(), ApiError> {
    debug!("Registering player: {}", request.name);

    let response = Request::post(&api_url("/api/players"))
        .json(request)
        .map_err(|e| ApiError::Transport(format!("Failed to encode player: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to register player: {}", e)))?;

    error_for_status(response).await?;

    debug!("Successfully registered player: {}", request.name);
    Ok(())
}
