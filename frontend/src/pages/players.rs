use std::rc::Rc;

use shared::{PlayerDto, TeamDto};
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::registration::{DraftField, FormAction, RegistrationController, RegistrationForm};
use crate::resolvers::{initial, team_name, UNASSIGNED};
use crate::store::{ClubContext, Snapshot};

#[derive(Properties, PartialEq)]
pub struct PlayersPageProps {
    pub snapshot: Rc<Snapshot>,
}

/// Registration form above the player table
#[function_component(PlayersPage)]
pub fn players_page(props: &PlayersPageProps) -> Html {
    html! {
        <div class="space-y-8">
            <PlayerRegistration />
            <PlayersList players={props.snapshot.players.clone()} teams={props.snapshot.teams.clone()} />
        </div>
    }
}

struct FieldInput {
    field: DraftField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
}

const INPUTS: [FieldInput; 5] = [
    FieldInput { field: DraftField::Name, label: "Player Name", input_type: "text", placeholder: "Enter player's full name" },
    FieldInput { field: DraftField::Age, label: "Age", input_type: "number", placeholder: "Age" },
    FieldInput { field: DraftField::ParentName, label: "Parent/Guardian Name", input_type: "text", placeholder: "Parent or guardian name" },
    FieldInput { field: DraftField::ParentEmail, label: "Parent Email", input_type: "email", placeholder: "parent@example.com" },
    FieldInput { field: DraftField::ParentPhone, label: "Parent Phone", input_type: "tel", placeholder: "(555) 123-4567" },
];

#[function_component(PlayerRegistration)]
pub fn player_registration() -> Html {
    let club = use_context::<ClubContext>().expect("Club context not found");
    let form = use_reducer_eq(RegistrationForm::default);

    let controller = {
        let dispatcher = form.dispatcher();
        let store = club.store.clone();
        (*use_memo((), move |_| {
            RegistrationController::new(
                store,
                Callback::from(move |action: FormAction| dispatcher.dispatch(action)),
            )
        }))
        .clone()
    };

    let onsubmit = {
        let controller = controller.clone();
        let draft = form.draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let controller = controller.clone();
            let draft = draft.clone();
            spawn_local(async move {
                controller.submit(draft).await;
            });
        })
    };

    let on_edit = |field: DraftField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    html! {
        <div class="bg-white rounded-xl p-8 shadow-lg">
            <h2 class="text-2xl font-bold text-gray-800 mb-6">{"Register New Player"}</h2>

            if let Some(message) = form.message {
                <div class={classes!("p-4", "rounded-lg", "mb-6", message.classes())}>
                    {message.text()}
                </div>
            }

            <form {onsubmit} class="space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    { for INPUTS.iter().map(|input| {
                        let is_age = input.field == DraftField::Age;
                        html! {
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2">{input.label}</label>
                                <input
                                    type={input.input_type}
                                    required=true
                                    min={is_age.then_some("4")}
                                    max={is_age.then_some("16")}
                                    value={form.draft.get(input.field).to_string()}
                                    oninput={on_edit(input.field)}
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                                    placeholder={input.placeholder}
                                />
                                if is_age {
                                    if let Some(group) = form.draft.age_group_hint() {
                                        <p class="mt-1 text-xs text-gray-500">{format!("Expected age group: {}", group.label())}</p>
                                    }
                                }
                            </div>
                        }
                    }) }
                </div>

                <button
                    type="submit"
                    disabled={form.submitting}
                    class="w-full bg-blue-600 text-white py-3 px-6 rounded-lg font-semibold hover:bg-blue-700 disabled:opacity-50 transition-colors"
                >
                    {if form.submitting { "Registering..." } else { "Register Player" }}
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlayersListProps {
    pub players: Vec<PlayerDto>,
    pub teams: Vec<TeamDto>,
}

#[function_component(PlayersList)]
pub fn players_list(props: &PlayersListProps) -> Html {
    html! {
        <div class="space-y-6">
            <div class="bg-white rounded-xl p-8 shadow-lg">
                <h2 class="text-2xl font-bold text-gray-800 mb-6">{format!("Registered Players ({})", props.players.len())}</h2>

                if props.players.is_empty() {
                    <div class="text-center py-8">
                        <div class="text-4xl mb-4">{"👥"}</div>
                        <p class="text-gray-600">{"No players registered yet."}</p>
                    </div>
                } else {
                    <div class="overflow-x-auto">
                        <table class="w-full">
                            <thead>
                                <tr class="bg-gray-50">
                                    <th class="px-6 py-3 text-left text-sm font-medium text-gray-500 uppercase tracking-wider">{"Player"}</th>
                                    <th class="px-6 py-3 text-left text-sm font-medium text-gray-500 uppercase tracking-wider">{"Age Group"}</th>
                                    <th class="px-6 py-3 text-left text-sm font-medium text-gray-500 uppercase tracking-wider">{"Team"}</th>
                                    <th class="px-6 py-3 text-left text-sm font-medium text-gray-500 uppercase tracking-wider">{"Parent Contact"}</th>
                                </tr>
                            </thead>
                            <tbody class="bg-white divide-y divide-gray-200">
                                { for props.players.iter().map(|player| html! {
                                    <tr key={player.id.clone()} class="hover:bg-gray-50">
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <div class="flex items-center">
                                                <div class="h-10 w-10 rounded-full bg-blue-100 flex items-center justify-center">
                                                    <span class="text-blue-600 font-semibold">{initial(&player.name)}</span>
                                                </div>
                                                <div class="ml-4">
                                                    <div class="text-sm font-medium text-gray-900">{player.name.clone()}</div>
                                                    <div class="text-sm text-gray-500">{format!("Age {}", player.age)}</div>
                                                </div>
                                            </div>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <span class="inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-blue-100 text-blue-800">
                                                {player.age_group.label()}
                                            </span>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                            {team_name(&props.teams, player.team_id.as_deref(), UNASSIGNED)}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            <div>{player.parent_name.clone()}</div>
                                            <div>{player.parent_email.clone()}</div>
                                        </td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }
            </div>
        </div>
    }
}
