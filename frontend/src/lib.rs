use yew::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::components::nav::{Nav, Tab};
use crate::store::{ClubContext, ClubProvider};

pub mod api;
pub mod components;
pub mod config;
pub mod registration;
pub mod resolvers;
pub mod store;
pub mod pages {
    pub mod dashboard;
    pub mod news;
    pub mod players;
    pub mod schedule;
    pub mod teams;
}

use pages::{dashboard::Dashboard, news::News, players::PlayersPage, schedule::Schedule, teams::Teams};


#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ClubProvider>
            <Shell />
        </ClubProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let club = use_context::<ClubContext>().expect("Club context not found");
    let active_tab = use_state(Tab::default);

    let on_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| {
            debug!("Selecting tab {:?}", tab);
            active_tab.set(tab);
        })
    };

    if club.state.loading {
        return html! {
            <div class="min-h-screen bg-gray-50 flex items-center justify-center">
                <div class="text-center">
                    <div class="animate-spin text-4xl mb-4">{"⚽"}</div>
                    <p class="text-gray-600">{"Loading BlueFire Soccer Club..."}</p>
                </div>
            </div>
        };
    }

    html! {
        <div class="min-h-screen bg-gray-50">
            <Nav active={*active_tab} on_select={on_select.clone()} />

            <main class="max-w-7xl mx-auto px-4 py-8">
                if let Some(err) = &club.state.error {
                    <div class="bg-red-50 border border-red-200 rounded-lg p-4 mb-6 flex items-center justify-between">
                        <div class="flex">
                            <div class="text-red-400">{"⚠️"}</div>
                            <div class="ml-3">
                                <h3 class="text-sm font-medium text-red-800">{"Could not load the latest club data"}</h3>
                                <div class="mt-1 text-sm text-red-700">{err.clone()}</div>
                            </div>
                        </div>
                        <button
                            onclick={club.refresh.reform(|_: MouseEvent| ())}
                            class="px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700"
                        >
                            {"Retry"}
                        </button>
                    </div>
                }
                {render_tab(*active_tab, &club, on_select)}
            </main>
        </div>
    }
}

fn render_tab(tab: Tab, club: &ClubContext, on_select: Callback<Tab>) -> Html {
    debug!("Rendering tab: {:?}", tab);
    let snapshot = club.state.snapshot.clone();
    match tab {
        Tab::Home => html! { <Dashboard stats={snapshot.stats} {on_select} /> },
        Tab::Players => html! { <PlayersPage {snapshot} /> },
        Tab::Teams => html! { <Teams teams={snapshot.teams.clone()} players={snapshot.players.clone()} /> },
        Tab::Schedule => html! { <Schedule games={snapshot.games.clone()} teams={snapshot.teams.clone()} /> },
        Tab::News => html! { <News news={snapshot.news.clone()} /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    info!("Initializing application...");

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();
    info!("Panic hook set");

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
