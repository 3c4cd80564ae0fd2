use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccountBarProps {
    pub username: String,
    pub logout_visible: bool,
    pub on_logout: Callback<MouseEvent>,
}

#[function_component(AccountBar)]
pub fn account_bar(props: &AccountBarProps) -> Html {
    if !props.logout_visible {
        return html! {};
    }

    html! {
        <div class="flex items-center space-x-3">
            <span class="text-sm text-gray-600">
                { "Signed in as " }
                <span id="username" class="font-medium text-gray-900">{ &props.username }</span>
            </span>
            <button
                id="logoutBtn"
                type="button"
                class="px-3 py-1.5 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-md hover:bg-gray-50"
                onclick={props.on_logout.clone()}
            >
                { "Sign out" }
            </button>
        </div>
    }
}
