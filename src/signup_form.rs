use gloo::console;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::ActivitiesApi;
use crate::error::ApiError;
use crate::outcome::{followup, Mutation};
use crate::status::StatusMessage;
use crate::view::SelectOption;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub api: ActivitiesApi,
    pub options: Vec<SelectOption>,
    pub on_status: Callback<StatusMessage>,
    pub on_refresh: Callback<()>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let email = use_state(String::new);
    let activity = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity = {
        let activity = activity.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            activity.set(sel.value());
        })
    };

    let on_submit = {
        let api = props.api.clone();
        let on_status = props.on_status.clone();
        let on_refresh = props.on_refresh.clone();
        let email = email.clone();
        let activity = activity.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let api = api.clone();
            let on_status = on_status.clone();
            let on_refresh = on_refresh.clone();
            let email = email.clone();
            let activity = activity.clone();
            let email_value = (*email).clone();
            let activity_value = (*activity).clone();

            spawn_local(async move {
                let result = api.signup(&activity_value, &email_value).await;
                if let Err(err @ ApiError::Transport(_)) = &result {
                    console::error!(Mutation::Signup.log_label(), err.to_string());
                }

                let next = followup(Mutation::Signup, &result);
                if next.reset_form {
                    email.set(String::new());
                    activity.set(String::new());
                }
                on_status.emit(next.status);
                if next.refresh {
                    on_refresh.emit(());
                }
            });
        })
    };

    html! {
      <form id="signup-form" onsubmit={on_submit}>
        <div class="form-group">
          <label for="email">{ "Student Email:" }</label>
          <input
            type="email"
            id="email"
            required=true
            placeholder="your-email@mergington.edu"
            value={(*email).clone()}
            oninput={on_email}
          />
        </div>
        <div class="form-group">
          <label for="activity">{ "Select Activity:" }</label>
          <select id="activity" required=true onchange={on_activity}>
            { for props.options.iter().map(|opt| html!{
                <option value={opt.value.clone()} selected={*activity == opt.value}>
                  { opt.label.clone() }
                </option>
            })}
          </select>
        </div>
        <button type="submit">{ "Sign Up" }</button>
      </form>
    }
}
