use web_sys::HtmlInputElement;
use yew::prelude::*;

use flashdeck::data::Credentials;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_login: Callback<Credentials>,
    /// A sign-in request is in flight
    #[prop_or(false)]
    pub pending: bool,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_login.emit(Credentials::new((*username).clone(), (*password).clone()));
        })
    };

    html! {
        <section id="authSection" class="bg-white border border-gray-200 rounded-lg p-6">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">{ "Sign in" }</h2>
            <form id="loginForm" onsubmit={on_submit} class="space-y-4">
                <div>
                    <label for="usernameInput" class="block text-sm font-medium text-gray-700 mb-1">
                        { "Username" }
                    </label>
                    <input
                        id="usernameInput"
                        type="text"
                        required={true}
                        autocomplete="username"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        value={(*username).clone()}
                        oninput={on_username_input}
                        disabled={props.pending}
                    />
                </div>
                <div>
                    <label for="passwordInput" class="block text-sm font-medium text-gray-700 mb-1">
                        { "Password" }
                    </label>
                    <input
                        id="passwordInput"
                        type="password"
                        required={true}
                        autocomplete="current-password"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        disabled={props.pending}
                    />
                </div>
                <button
                    type="submit"
                    class="w-full px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled={props.pending}
                >
                    { if props.pending { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </section>
    }
}
