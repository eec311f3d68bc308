pub mod models {
    pub mod age_group;
    pub mod game_status;
}

pub mod dto {
    pub mod player;
    pub mod team;
    pub mod game;
    pub mod news;
    pub mod stats;
    pub mod common;
}

pub mod error;
pub mod timestamp;

// Re-export commonly used items
pub use error::{SharedError, Result};

pub use models::{age_group::AgeGroup, game_status::GameStatus};

// Re-export DTOs
pub use dto::{
    player::{PlayerDto, CreatePlayerRequest},
    team::TeamDto,
    game::GameDto,
    news::NewsDto,
    stats::StatsDto,
    common::ErrorResponse,
};
