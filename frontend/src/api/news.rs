use shared::NewsDto;
use log::debug;
use crate::api::ApiError;
use crate::api::utils::get_json;

pub async fn get_news() -> Result<Vec<NewsDto>, ApiError> {
    let news: Vec<NewsDto> = get_json("/api/news", "news").await?;
    debug!("Successfully fetched {} news items", news.len());
    Ok(news)
}
