use gloo::console;
use gloo::dialogs::confirm;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use crate::api::ActivitiesApi;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::outcome::{followup, Mutation};
use crate::roster::{FetchGeneration, ListState, RosterAction, RosterState};
use crate::signup_form::SignupForm;
use crate::status::{use_status, StatusBanner, StatusMessage};
use crate::view::{
    self, CardView, ParticipantView, RosterView, EMPTY_ROSTER, LOADING_NOTICE, LOAD_FAILED_NOTICE,
};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let api = use_memo(props.config.api_base.clone(), |base| ActivitiesApi::new(base));
    let status = use_status(props.config.message_ttl_ms);
    let roster = use_reducer(RosterState::default);

    let generation = use_mut_ref(FetchGeneration::default);
    let in_flight = use_mut_ref(|| None::<AbortController>);

    let refresh = {
        let dispatcher = roster.dispatcher();
        use_callback(api.clone(), move |(), api| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let generation = generation.clone();
            let in_flight = in_flight.clone();

            let ticket = generation.borrow_mut().begin();
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(AbortController::signal);
            if let Some(prev) = in_flight.replace(controller) {
                prev.abort();
            }

            spawn_local(async move {
                let result = api.fetch_catalog(signal.as_ref()).await;
                if !generation.borrow().is_current(ticket) {
                    console::log!(format!("Dropping superseded activities fetch #{ticket}"));
                    return;
                }
                in_flight.borrow_mut().take();

                match result {
                    Ok(catalog) => dispatcher.dispatch(RosterAction::Loaded(catalog)),
                    Err(err) => {
                        console::error!("Error fetching activities:", err.to_string());
                        dispatcher.dispatch(RosterAction::Failed);
                    }
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_status = status.callback();

    let list = match &roster.list {
        ListState::Loading => html! { <p>{ LOADING_NOTICE }</p> },
        ListState::Failed => html! { <p>{ LOAD_FAILED_NOTICE }</p> },
        ListState::Ready(catalog) => html! {
          <>
            { for view::cards(catalog).into_iter().map(|card| {
                let key = card.name.clone();
                html!{
                  <ActivityCard
                    key={key}
                    card={card}
                    api={(*api).clone()}
                    on_status={on_status.clone()}
                    on_refresh={refresh.clone()}
                  />
                }
            })}
          </>
        },
    };

    html! {
      <>
        <header>
          <h1>{ "Mergington High School" }</h1>
          <h2>{ "Extracurricular Activities" }</h2>
        </header>

        <main>
          <section id="activities-container">
            <h3>{ "Available Activities" }</h3>
            <div id="activities-list">{ list }</div>
          </section>

          <section id="signup-container">
            <h3>{ "Sign Up for an Activity" }</h3>
            <SignupForm
              api={(*api).clone()}
              options={roster.options.clone()}
              on_status={on_status.clone()}
              on_refresh={refresh.clone()}
            />
            <StatusBanner message={status.current().cloned()} />
          </section>
        </main>

        <footer>
          <p>{ "© 2023 Mergington High School" }</p>
        </footer>
      </>
    }
}

#[derive(Properties, PartialEq)]
struct ActivityCardProps {
    card: CardView,
    api: ActivitiesApi,
    on_status: Callback<StatusMessage>,
    on_refresh: Callback<()>,
}

#[function_component(ActivityCard)]
fn activity_card(props: &ActivityCardProps) -> Html {
    let card = &props.card;

    let roster = match &card.roster {
        RosterView::Empty => html! { <li class="muted">{ EMPTY_ROSTER }</li> },
        RosterView::Participants(rows) => html! {
          <>{ for rows.iter().map(|row| participant_row(row, props)) }</>
        },
    };

    html! {
      <div class="activity-card">
        <h4>{ card.name.clone() }</h4>
        <p>{ card.description.clone() }</p>
        <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
        <p><strong>{ "Availability:" }</strong>{ format!(" {}", card.availability()) }</p>
        <p><strong>{ "Participants:" }</strong></p>
        <ul class="participants-list">{ roster }</ul>
      </div>
    }
}

fn participant_row(row: &ParticipantView, props: &ActivityCardProps) -> Html {
    let on_remove = {
        let row = row.clone();
        let api = props.api.clone();
        let on_status = props.on_status.clone();
        let on_refresh = props.on_refresh.clone();

        Callback::from(move |_: MouseEvent| {
            if !confirm(&row.confirm_prompt()) {
                return;
            }

            let row = row.clone();
            let api = api.clone();
            let on_status = on_status.clone();
            let on_refresh = on_refresh.clone();

            spawn_local(async move {
                let result = api.unregister(&row.activity, &row.email).await;
                if let Err(err @ ApiError::Transport(_)) = &result {
                    console::error!(Mutation::Removal.log_label(), err.to_string());
                }

                let next = followup(Mutation::Removal, &result);
                on_status.emit(next.status);
                if next.refresh {
                    on_refresh.emit(());
                }
            });
        })
    };

    html! {
      <li class="participant-item">
        <span class="participant-email">{ row.email.clone() }</span>
        <button
          class="participant-delete"
          aria-label={row.aria_label()}
          data-activity={row.activity.clone()}
          data-email={row.email.clone()}
          onclick={on_remove}
        >
          { "✖" }
        </button>
      </li>
    }
}
