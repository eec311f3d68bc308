use shared::{PlayerDto, TeamDto};
use yew::prelude::*;

use crate::resolvers::{initial, roster_for};

#[derive(Properties, PartialEq)]
pub struct TeamsProps {
    pub teams: Vec<TeamDto>,
    pub players: Vec<PlayerDto>,
}

#[function_component(Teams)]
pub fn teams(props: &TeamsProps) -> Html {
    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-xl p-8 shadow-lg">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">{"Team Rosters"}</h2>

                if props.teams.is_empty() {
                    <div class="text-center py-8">
                        <div class="text-4xl mb-4">{"⚽"}</div>
                        <p class="text-gray-600">{"No teams created yet."}</p>
                    </div>
                } else {
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        { for props.teams.iter().map(|team| team_card(team, &props.players)) }
                    </div>
                }
            </div>
        </div>
    }
}

fn team_card(team: &TeamDto, players: &[PlayerDto]) -> Html {
    let roster = roster_for(players, &team.id);

    html! {
        <div key={team.id.clone()} class="border border-gray-200 rounded-xl p-6 hover:shadow-lg transition-shadow">
            <div class="flex items-center justify-between mb-4">
                <div>
                    <h3 class="text-xl font-bold text-gray-800">{team.name.clone()}</h3>
                    <p class="text-gray-600">{team.age_group.label()}</p>
                </div>
                <div class="text-right">
                    <div class="text-2xl font-bold text-blue-600">{roster.len().to_string()}</div>
                    <div class="text-xs text-gray-500">{"players"}</div>
                </div>
            </div>

            if let Some(coach) = &team.coach_name {
                <div class="mb-4 p-3 bg-blue-50 rounded-lg">
                    <div class="text-sm font-medium text-blue-800">{format!("Coach: {}", coach)}</div>
                    if let Some(email) = &team.coach_email {
                        <div class="text-sm text-blue-600">{email.clone()}</div>
                    }
                </div>
            }

            <div class="space-y-2">
                <h4 class="font-medium text-gray-700">{"Team Roster:"}</h4>
                if roster.is_empty() {
                    <p class="text-gray-500 text-sm">{"No players assigned yet"}</p>
                } else {
                    <div class="space-y-1">
                        { for roster.iter().map(|player| html! {
                            <div key={player.id.clone()} class="flex items-center space-x-3 text-sm">
                                <div class="w-6 h-6 bg-blue-100 rounded-full flex items-center justify-center">
                                    <span class="text-blue-600 text-xs font-semibold">{initial(&player.name)}</span>
                                </div>
                                <span class="text-gray-700">{format!("{} (Age {})", player.name, player.age)}</span>
                            </div>
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}
