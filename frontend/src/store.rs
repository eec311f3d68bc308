use std::cell::Cell;
use std::rc::Rc;

use log::{debug, error, info};
use shared::{GameDto, NewsDto, PlayerDto, StatsDto, TeamDto};
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::api::{ApiError, ClubApi, HttpClubApi};

/// Everything the renderers read, fetched together and replaced together
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub players: Vec<PlayerDto>,
    pub teams: Vec<TeamDto>,
    pub games: Vec<GameDto>,
    pub news: Vec<NewsDto>,
    pub stats: StatsDto,
}

impl Snapshot {
    /// Issue all five reads at once and wait for every one of them.
    ///
    /// Fails with the first error; a partial snapshot is never returned.
    pub async fn fetch<A: ClubApi + ?Sized>(api: &A) -> Result<Self, ApiError> {
        let (players, teams, games, news, stats) = futures::try_join!(
            api.players(),
            api.teams(),
            api.games(),
            api.news(),
            api.stats()
        )?;

        Ok(Self {
            players,
            teams,
            games,
            news,
            stats,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClubState {
    pub snapshot: Rc<Snapshot>,
    /// Only true until the first refresh settles
    pub loading: bool,
    /// Message of the last refresh failure, cleared by the next success
    pub error: Option<String>,
    /// Newest refresh that has been started
    pub latest_generation: u64,
    /// Refresh whose snapshot is on screen; 0 before the first success
    pub committed_generation: u64,
}

impl Default for ClubState {
    fn default() -> Self {
        Self {
            snapshot: Rc::new(Snapshot::default()),
            loading: true,
            error: None,
            latest_generation: 0,
            committed_generation: 0,
        }
    }
}

impl ClubState {
    fn is_stale(&self, generation: u64) -> bool {
        generation < self.latest_generation
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StoreAction {
    RefreshStarted(u64),
    RefreshSucceeded { generation: u64, snapshot: Snapshot },
    RefreshFailed { generation: u64, error: String },
}

impl Reducible for ClubState {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StoreAction::RefreshStarted(generation) => {
                if generation <= self.latest_generation {
                    return self;
                }
                Rc::new(Self {
                    latest_generation: generation,
                    ..(*self).clone()
                })
            }
            StoreAction::RefreshSucceeded { generation, snapshot } => {
                if self.is_stale(generation) {
                    debug!(
                        "Discarding refresh {} superseded by {}",
                        generation, self.latest_generation
                    );
                    return self;
                }
                Rc::new(Self {
                    snapshot: Rc::new(snapshot),
                    loading: false,
                    error: None,
                    latest_generation: generation.max(self.latest_generation),
                    committed_generation: generation,
                })
            }
            StoreAction::RefreshFailed { generation, error } => {
                if self.is_stale(generation) {
                    debug!(
                        "Ignoring failure of refresh {} superseded by {}",
                        generation, self.latest_generation
                    );
                    return self;
                }
                // The previous snapshot stays on screen
                Rc::new(Self {
                    loading: false,
                    error: Some(error),
                    latest_generation: generation.max(self.latest_generation),
                    ..(*self).clone()
                })
            }
        }
    }
}

/// Runs refreshes against a `ClubApi` and feeds the results to the reducer
#[derive(Clone)]
pub struct ClubStore {
    api: Rc<dyn ClubApi>,
    generations: Rc<Cell<u64>>,
    dispatch: Callback<StoreAction>,
}

impl PartialEq for ClubStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.generations, &other.generations) && self.dispatch == other.dispatch
    }
}

impl ClubStore {
    pub fn new(api: Rc<dyn ClubApi>, dispatch: Callback<StoreAction>) -> Self {
        Self {
            api,
            generations: Rc::new(Cell::new(0)),
            dispatch,
        }
    }

    pub fn api(&self) -> Rc<dyn ClubApi> {
        self.api.clone()
    }

    /// Refetch the whole snapshot.
    ///
    /// A newer call supersedes this one: if another refresh starts before
    /// this one settles, this one's result is dropped by the reducer.
    pub async fn refresh_all(&self) -> Result<(), ApiError> {
        let generation = self.generations.get() + 1;
        self.generations.set(generation);
        self.dispatch.emit(StoreAction::RefreshStarted(generation));
        debug!("Refresh {} started", generation);

        match Snapshot::fetch(self.api.as_ref()).await {
            Ok(snapshot) => {
                info!(
                    "Refresh {} loaded {} players, {} teams, {} games, {} news items",
                    generation,
                    snapshot.players.len(),
                    snapshot.teams.len(),
                    snapshot.games.len(),
                    snapshot.news.len()
                );
                self.dispatch
                    .emit(StoreAction::RefreshSucceeded { generation, snapshot });
                Ok(())
            }
            Err(e) => {
                error!("Error fetching data: {}", e);
                self.dispatch.emit(StoreAction::RefreshFailed {
                    generation,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ClubProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, PartialEq)]
pub struct ClubContext {
    pub state: ClubState,
    pub store: ClubStore,
    pub refresh: Callback<()>,
}

#[function_component(ClubProvider)]
pub fn club_provider(props: &ClubProviderProps) -> Html {
    let club = use_reducer_eq(ClubState::default);

    let store = {
        let dispatcher = club.dispatcher();
        let store = use_memo((), move |_| {
            ClubStore::new(
                Rc::new(HttpClubApi),
                Callback::from(move |action: StoreAction| dispatcher.dispatch(action)),
            )
        });
        (*store).clone()
    };

    // Initial load
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                // Failures are logged and recorded in state by the store
                let _ = store.refresh_all().await;
            });
            || ()
        });
    }

    let refresh = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            let store = store.clone();
            spawn_local(async move {
                let _ = store.refresh_all().await;
            });
        })
    };

    let context = ClubContext {
        state: (*club).clone(),
        store,
        refresh,
    };

    html! {
        <ContextProvider<ClubContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ClubContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::{recording_store, sample_snapshot, Resource, StubApi};
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_state_is_loading_and_empty() {
        let state = ClubState::default();
        assert!(state.loading);
        assert_eq!(*state.snapshot, Snapshot::default());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_successful_refresh_commits_everything() {
        let api = Rc::new(StubApi::with_snapshot(sample_snapshot()));
        let (store, state) = recording_store(api.clone());

        block_on(store.refresh_all()).unwrap();

        let state = state.borrow();
        assert!(!state.loading);
        assert_eq!(*state.snapshot, sample_snapshot());
        assert_eq!(state.committed_generation, 1);
    }

    #[test]
    fn test_failed_refresh_preserves_prior_snapshot() {
        let api = Rc::new(StubApi::with_snapshot(sample_snapshot()));
        let (store, state) = recording_store(api.clone());
        block_on(store.refresh_all()).unwrap();
        let before = state.borrow().snapshot.clone();

        api.replace_snapshot(Snapshot::default());
        for resource in Resource::ALL {
            api.fail_reads_of(Some(resource));
            assert!(block_on(store.refresh_all()).is_err());

            let after = state.borrow();
            assert_eq!(*after.snapshot, *before, "snapshot changed after {resource:?} failed");
            assert!(after.error.is_some());
        }
    }

    #[test]
    fn test_first_load_failure_clears_loading() {
        let api = Rc::new(StubApi::with_snapshot(sample_snapshot()));
        api.fail_reads_of(Some(Resource::Stats));
        let (store, state) = recording_store(api.clone());

        assert!(block_on(store.refresh_all()).is_err());

        let state = state.borrow();
        assert!(!state.loading);
        assert_eq!(*state.snapshot, Snapshot::default());
        assert!(state.error.as_deref().unwrap_or_default().contains("stats"));
    }

    #[test]
    fn test_later_refresh_does_not_show_loading() {
        let api = Rc::new(StubApi::with_snapshot(sample_snapshot()));
        let (store, state) = recording_store(api.clone());
        block_on(store.refresh_all()).unwrap();

        let mut pool = LocalPool::new();
        api.gate(Resource::Players);
        let pending = store.clone();
        pool.spawner()
            .spawn_local(async move {
                let _ = pending.refresh_all().await;
            })
            .unwrap();
        pool.run_until_stalled();

        assert!(!state.borrow().loading);
        api.release(Resource::Players);
        pool.run_until_stalled();
        assert!(!state.borrow().loading);
    }

    #[test]
    fn test_success_after_failure_clears_error() {
        let api = Rc::new(StubApi::with_snapshot(sample_snapshot()));
        api.fail_reads_of(Some(Resource::News));
        let (store, state) = recording_store(api.clone());
        let _ = block_on(store.refresh_all());
        assert!(state.borrow().error.is_some());

        api.fail_reads_of(None);
        block_on(store.refresh_all()).unwrap();
        assert_eq!(state.borrow().error, None);
    }

    #[test]
    fn test_commit_is_atomic_regardless_of_completion_order() {
        let orders = [
            [Resource::Stats, Resource::News, Resource::Games, Resource::Teams, Resource::Players],
            [Resource::Players, Resource::Teams, Resource::Games, Resource::News, Resource::Stats],
            [Resource::Games, Resource::Players, Resource::Stats, Resource::Teams, Resource::News],
        ];

        for order in orders {
            let api = Rc::new(StubApi::with_snapshot(Snapshot::default()));
            let (store, state) = recording_store(api.clone());
            block_on(store.refresh_all()).unwrap();
            let old = state.borrow().snapshot.clone();

            api.replace_snapshot(sample_snapshot());
            for resource in Resource::ALL {
                api.gate(resource);
            }

            let mut pool = LocalPool::new();
            let pending = store.clone();
            pool.spawner()
                .spawn_local(async move {
                    let _ = pending.refresh_all().await;
                })
                .unwrap();
            pool.run_until_stalled();

            for (released, resource) in order.iter().enumerate() {
                api.release(*resource);
                pool.run_until_stalled();

                let current = state.borrow().snapshot.clone();
                if released + 1 < order.len() {
                    assert_eq!(*current, *old, "partial commit after releasing {resource:?}");
                } else {
                    assert_eq!(*current, sample_snapshot());
                }
            }
        }
    }

    #[test]
    fn test_superseded_refresh_cannot_commit() {
        let api = Rc::new(StubApi::with_snapshot(Snapshot::default()));
        let (store, state) = recording_store(api.clone());

        // First refresh reads the empty data set and then stalls
        api.gate(Resource::Teams);
        let mut pool = LocalPool::new();
        let slow = store.clone();
        pool.spawner()
            .spawn_local(async move {
                let _ = slow.refresh_all().await;
            })
            .unwrap();
        pool.run_until_stalled();

        // Second refresh sees the populated data set and finishes first
        api.replace_snapshot(sample_snapshot());
        block_on(store.refresh_all()).unwrap();
        assert_eq!(*state.borrow().snapshot, sample_snapshot());

        api.release(Resource::Teams);
        pool.run_until_stalled();

        let state = state.borrow();
        assert_eq!(*state.snapshot, sample_snapshot());
        assert_eq!(state.committed_generation, 2);
        assert_eq!(state.latest_generation, 2);
    }

    #[test]
    fn test_superseded_failure_is_ignored() {
        let state = Rc::new(ClubState::default())
            .reduce(StoreAction::RefreshStarted(1))
            .reduce(StoreAction::RefreshStarted(2))
            .reduce(StoreAction::RefreshSucceeded {
                generation: 2,
                snapshot: sample_snapshot(),
            })
            .reduce(StoreAction::RefreshFailed {
                generation: 1,
                error: "Request failed: offline".to_string(),
            });

        assert_eq!(state.error, None);
        assert_eq!(*state.snapshot, sample_snapshot());
    }

    #[test]
    fn test_started_never_moves_generation_backwards() {
        let state = Rc::new(ClubState::default())
            .reduce(StoreAction::RefreshStarted(3))
            .reduce(StoreAction::RefreshStarted(2));
        assert_eq!(state.latest_generation, 3);
    }
}
