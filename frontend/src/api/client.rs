use async_trait::async_trait;
use shared::{CreatePlayerRequest, GameDto, NewsDto, PlayerDto, StatsDto, TeamDto};
use crate::api::{games, news, players, stats, teams, ApiError};

/// The club API operations the store and registration form depend on
#[async_trait(?Send)]
pub trait ClubApi {
    async fn players(&self) -> Result<Vec<PlayerDto>, ApiError>;
    async fn teams(&self) -> Result<Vec<TeamDto>, ApiError>;
    async fn games(&self) -> Result<Vec<GameDto>, ApiError>;
    async fn news(&self) -> Result<Vec<NewsDto>, ApiError>;
    async fn stats(&self) -> Result<StatsDto, ApiError>;
    async fn create_player(&self, request: &CreatePlayerRequest) -> Result<(), ApiError>;
}

/// `ClubApi` over HTTP via gloo-net
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpClubApi;

#[async_trait(?Send)]
impl ClubApi for HttpClubApi {
    async fn players(&self) -> Result<Vec<PlayerDto>, ApiError> {
        players::get_players().await
    }

    async fn teams(&self) -> Result<Vec<TeamDto>, ApiError> {
        teams::get_teams().await
    }

    async fn games(&self) -> Result<Vec<GameDto>, ApiError> {
        games::get_games().await
    }

    async fn news(&self) -> Result<Vec<NewsDto>, ApiError> {
        news::get_news().await
    }

    async fn stats(&self) -> Result<StatsDto, ApiError> {
        stats::get_stats().await
    }

    async fn create_player(&self, request: &CreatePlayerRequest) -> Result<(), ApiError> {
        players::create_player(request).await
    }
}
