use shared::TeamDto;
use log::debug;
use crate::api::ApiError;
use crate::api::utils::get_json;

pub async fn get_teams() -> Result<Vec<TeamDto>, ApiError> {
    let teams: Vec<TeamDto> = get_json("/api/teams", "teams").await?;
    debug!("Successfully fetched {} teams", teams.len());
    Ok(teams)
}
