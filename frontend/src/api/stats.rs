use shared::StatsDto;
use crate::api::ApiError;
use crate::api::utils::get_json;

pub async fn get_stats() -> Result<StatsDto, ApiError> {
    get_json("/api/stats", "stats").await
}
