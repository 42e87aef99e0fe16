use yew::prelude::*;

use crate::chart::model::build_segments;
use crate::components::{DonutChart, PieCard};
use crate::hooks::{use_budget, DashboardState};
use crate::services::ApiClient;

/// Budget dashboard page: the intro copy plus the two chart cards.
///
/// Chart construction is gated on the load reaching Ready; while Loading or
/// Failed only a plain indicator renders, so a bad fetch can never crash the
/// page. Both charts derive from one segment list built per load, never from
/// a stale copy.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let budget = use_budget(&*api_client);

    let charts = match &budget.state {
        DashboardState::Loading => html! {
            <article>
                <div class="dashboard-loading">{"Loading budget data..."}</div>
            </article>
        },
        DashboardState::Failed => {
            let reload = budget.reload.clone();
            let onclick = Callback::from(move |_| reload.emit(()));
            html! {
                <article>
                    <div class="dashboard-error">{"Could not load budget data."}</div>
                    <button {onclick}>{"Reload"}</button>
                </article>
            }
        }
        DashboardState::Ready(categories) => {
            let segments = build_segments(categories);
            html! {
                <>
                    <article>
                        <h1>{"Budget Distribution"}</h1>
                        <PieCard segments={segments.clone()} />
                    </article>
                    <article>
                        <h1>{"Budget Donut"}</h1>
                        <DonutChart segments={segments} />
                    </article>
                </>
            }
        }
    };

    html! {
        <main class="center" id="main">
            <div class="page-area">
                <article>
                    <h1>{"Stay on track"}</h1>
                    <p>
                        {"Do you know where you are spending your money? If you really stop to \
                          track it down, you would get surprised! Proper budget management depends \
                          on real data... and this app will help you with that!"}
                    </p>
                </article>

                <article>
                    <h1>{"Alerts"}</h1>
                    <p>
                        {"What if your clothing budget ended? You will get an alert. The goal is \
                          to never go over the budget."}
                    </p>
                </article>

                <article>
                    <h1>{"Results"}</h1>
                    <p>
                        {"People who stick to a financial plan, budgeting every expense, get out \
                          of debt faster! Also, they to live happier lives... since they expend \
                          without guilt or fear... because they know it is all good and accounted \
                          for."}
                    </p>
                </article>

                <article>
                    <h1>{"Free"}</h1>
                    <p>{"This app is free!!! And you are the only one holding your data!"}</p>
                </article>

                {charts}
            </div>
        </main>
    }
}
