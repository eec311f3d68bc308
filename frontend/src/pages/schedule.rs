use chrono::Local;
use shared::{GameDto, GameStatus, TeamDto};
use yew::prelude::*;

use crate::resolvers::{format_game_date, team_name, UNKNOWN_TEAM};

#[derive(Properties, PartialEq)]
pub struct ScheduleProps {
    pub games: Vec<GameDto>,
    pub teams: Vec<TeamDto>,
}

/// `Home vs Away`, with unresolved sides shown as unknown
pub fn matchup(game: &GameDto, teams: &[TeamDto]) -> String {
    format!(
        "{} vs {}",
        team_name(teams, Some(game.home_team_id.as_str()), UNKNOWN_TEAM),
        team_name(teams, Some(game.away_team_id.as_str()), UNKNOWN_TEAM)
    )
}

fn status_classes(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Scheduled => "bg-blue-100 text-blue-800",
        GameStatus::Completed => "bg-green-100 text-green-800",
        GameStatus::Cancelled | GameStatus::Other => "bg-red-100 text-red-800",
    }
}

#[function_component(Schedule)]
pub fn schedule(props: &ScheduleProps) -> Html {
    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-xl p-8 shadow-lg">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">{"Game Schedule"}</h2>

                if props.games.is_empty() {
                    <div class="text-center py-8">
                        <div class="text-4xl mb-4">{"📅"}</div>
                        <p class="text-gray-600">{"No games scheduled yet."}</p>
                    </div>
                } else {
                    <div class="space-y-4">
                        { for props.games.iter().map(|game| html! {
                            <div key={game.id.clone()} class="border border-gray-200 rounded-xl p-6 hover:shadow-lg transition-shadow">
                                <div class="flex items-center justify-between">
                                    <div class="flex-1">
                                        <div class="flex items-center space-x-4 mb-2">
                                            <span class="text-lg font-semibold text-gray-800">{matchup(game, &props.teams)}</span>
                                            <span class={classes!("px-3", "py-1", "rounded-full", "text-xs", "font-semibold", status_classes(game.status))}>
                                                {game.status.label()}
                                            </span>
                                        </div>
                                        <div class="text-gray-600 text-sm">
                                            {format!("📅 {}", format_game_date(&game.date.with_timezone(&Local)))}
                                        </div>
                                        <div class="text-gray-600 text-sm">
                                            {format!("📍 {}", game.location)}
                                        </div>
                                    </div>

                                    if let Some((home, away)) = game.final_score() {
                                        <div class="text-right">
                                            <div class="text-lg font-bold text-gray-800">{format!("{} - {}", home, away)}</div>
                                        </div>
                                    }
                                </div>
                            </div>
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}
