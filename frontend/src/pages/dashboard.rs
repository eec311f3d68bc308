use shared::StatsDto;
use yew::prelude::*;

use crate::components::nav::Tab;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub stats: StatsDto,
    pub on_select: Callback<Tab>,
}

struct StatCard {
    label: &'static str,
    value: u32,
    icon: &'static str,
    accent: &'static str,
    badge: &'static str,
}

fn stat_cards(stats: &StatsDto) -> [StatCard; 4] {
    [
        StatCard { label: "Total Players", value: stats.total_players, icon: "👥", accent: "text-blue-600", badge: "bg-blue-100" },
        StatCard { label: "Active Teams", value: stats.total_teams, icon: "⚽", accent: "text-green-600", badge: "bg-green-100" },
        StatCard { label: "Upcoming Games", value: stats.upcoming_games, icon: "📅", accent: "text-orange-600", badge: "bg-orange-100" },
        StatCard { label: "News Updates", value: stats.recent_news, icon: "📰", accent: "text-purple-600", badge: "bg-purple-100" },
    ]
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let go_to = |tab: Tab| props.on_select.reform(move |_: MouseEvent| tab);

    html! {
        <div class="space-y-8">
            <div class="relative bg-gradient-to-r from-blue-600 to-blue-800 rounded-2xl overflow-hidden">
                <div class="relative px-8 py-12 text-white">
                    <h1 class="text-4xl font-bold mb-4">{"Welcome to BlueFire Soccer Club"}</h1>
                    <p class="text-xl text-blue-100 mb-6">{"Developing young talent, building character, creating champions"}</p>
                    <div class="flex space-x-4">
                        <button onclick={go_to(Tab::Players)} class="bg-white text-blue-600 px-6 py-3 rounded-lg font-semibold hover:bg-blue-50 transition-colors">
                            {"Register Now"}
                        </button>
                        <button onclick={go_to(Tab::Teams)} class="border border-white text-white px-6 py-3 rounded-lg font-semibold hover:bg-white hover:text-blue-600 transition-colors">
                            {"View Teams"}
                        </button>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                { for stat_cards(&props.stats).into_iter().map(|card| html! {
                    <div class="bg-white rounded-xl p-6 shadow-lg border border-gray-100">
                        <div class="flex items-center justify-between">
                            <div>
                                <p class="text-gray-600 text-sm">{card.label}</p>
                                <p class={classes!("text-3xl", "font-bold", card.accent)}>{card.value.to_string()}</p>
                            </div>
                            <div class={classes!(card.badge, "p-3", "rounded-lg")}>
                                <span class="text-2xl">{card.icon}</span>
                            </div>
                        </div>
                    </div>
                }) }
            </div>

            <div class="bg-white rounded-xl p-8 shadow-lg">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">{"Quick Actions"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <button onclick={go_to(Tab::Players)} class="p-6 bg-blue-50 rounded-lg hover:bg-blue-100 transition-colors text-left">
                        <div class="text-2xl mb-2">{"👤"}</div>
                        <h3 class="font-semibold text-gray-800">{"Register Player"}</h3>
                        <p class="text-gray-600 text-sm">{"Add new player to the club"}</p>
                    </button>
                    <button onclick={go_to(Tab::Teams)} class="p-6 bg-green-50 rounded-lg hover:bg-green-100 transition-colors text-left">
                        <div class="text-2xl mb-2">{"🏆"}</div>
                        <h3 class="font-semibold text-gray-800">{"Team Rosters"}</h3>
                        <p class="text-gray-600 text-sm">{"See who plays where"}</p>
                    </button>
                    <button onclick={go_to(Tab::Schedule)} class="p-6 bg-orange-50 rounded-lg hover:bg-orange-100 transition-colors text-left">
                        <div class="text-2xl mb-2">{"📅"}</div>
                        <h3 class="font-semibold text-gray-800">{"Game Schedule"}</h3>
                        <p class="text-gray-600 text-sm">{"Upcoming and past games"}</p>
                    </button>
                </div>
            </div>
        </div>
    }
}
