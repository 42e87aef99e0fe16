use std::future::Future;

use shared::BudgetCategory;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{ApiClient, ApiError, Logger};

/// Source of budget data for the dashboard. `ApiClient` is the production
/// implementation; tests substitute their own to control timing and outcome.
pub trait BudgetFetcher: Clone + 'static {
    /// Fetch the category list for one dashboard load.
    fn fetch_budget(&self) -> impl Future<Output = Result<Vec<BudgetCategory>, ApiError>>;
}

impl BudgetFetcher for ApiClient {
    fn fetch_budget(&self) -> impl Future<Output = Result<Vec<BudgetCategory>, ApiError>> {
        self.get_budget()
    }
}

/// Dashboard fetch lifecycle. Exactly one variant holds at a time; Ready
/// carries the categories in the order the service returned them.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Ready(Vec<BudgetCategory>),
    Failed,
}

impl DashboardState {
    /// Resolve one completed fetch. Failures are logged at the call site;
    /// here they only select the Failed state.
    fn from_result(result: Result<Vec<BudgetCategory>, ApiError>) -> Self {
        match result {
            Ok(categories) => DashboardState::Ready(categories),
            Err(_) => DashboardState::Failed,
        }
    }
}

pub struct UseBudgetResult {
    pub state: DashboardState,
    pub reload: Callback<()>,
}

/// Fetch the budget once on mount and expose the load state.
///
/// Every load bumps a generation counter that the in-flight future captures.
/// A result whose generation is no longer current is dropped, so a reload
/// supersedes the previous request instead of interleaving with it, and the
/// effect cleanup bumps the counter too, making writes after teardown
/// impossible.
#[hook]
pub fn use_budget<F: BudgetFetcher>(fetcher: &F) -> UseBudgetResult {
    let state = use_state(|| DashboardState::Loading);
    let generation = use_mut_ref(|| 0u64);

    let reload = {
        let fetcher = fetcher.clone();
        let state = state.clone();
        let generation = generation.clone();

        use_callback((), move |_: (), _| {
            let fetcher = fetcher.clone();
            let state = state.clone();
            let generation = generation.clone();

            *generation.borrow_mut() += 1;
            let this_load = *generation.borrow();
            state.set(DashboardState::Loading);

            spawn_local(async move {
                let result = fetcher.fetch_budget().await;
                if *generation.borrow() != this_load {
                    // A newer load or a teardown superseded this request.
                    return;
                }
                if let Err(err) = &result {
                    Logger::error_with_component(
                        "use_budget",
                        &format!("budget load failed: {err}"),
                    );
                }
                state.set(DashboardState::from_result(result));
            });
        })
    };

    {
        let reload = reload.clone();
        let generation = generation.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            move || {
                // Invalidate any in-flight load when the dashboard unmounts.
                *generation.borrow_mut() += 1;
            }
        });
    }

    UseBudgetResult {
        state: (*state).clone(),
        reload,
    }
}
