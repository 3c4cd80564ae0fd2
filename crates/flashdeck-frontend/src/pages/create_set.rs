use yew::prelude::*;

use flashdeck::async_callback;
use flashdeck::data::{Credentials, RawSetFields};
use flashdeck::status::Connectivity;

use crate::components::{AccountBar, CreateSetForm, LoginForm, StatusBanner};
use crate::hooks::use_connectivity;
use crate::providers::controller;
use crate::view::{PageState, YewView};

#[function_component(CreateSetPage)]
pub fn create_set_page() -> Html {
    let state = use_reducer(PageState::default);
    let controller = {
        let view = YewView::new(state.dispatcher());
        use_memo((), move |_| controller::create(view))
    };

    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            controller.render_auth_state();
        });
    }

    use_connectivity({
        let controller = controller.clone();
        Callback::from(move |connectivity: Connectivity| {
            controller.connectivity_changed(connectivity);
        })
    });

    let on_login = async_callback!([controller] |credentials: Credentials| {
        controller
            .login(&credentials.username, &credentials.password)
            .await
    });

    let on_create = async_callback!([controller] |fields: RawSetFields| {
        controller.create_set(fields).await
    });

    let on_logout = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.logout())
    };

    let on_clear = {
        let controller = controller.clone();
        Callback::from(move |_: ()| controller.clear_form())
    };

    html! {
        <div class="min-h-screen bg-gray-50 p-8">
            <div class="max-w-xl mx-auto">
                <header class="flex items-center justify-between mb-6">
                    <h1 class="text-2xl font-bold text-gray-900">{ "Flashcard sets" }</h1>
                    <AccountBar
                        username={state.username.clone()}
                        logout_visible={state.logout_visible}
                        on_logout={on_logout}
                    />
                </header>

                <StatusBanner status={state.status.clone()} />

                {
                    if state.login_visible {
                        html! {
                            <LoginForm
                                key={format!("login-{}", state.login_form_epoch)}
                                on_login={on_login}
                                pending={state.login_pending}
                            />
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if state.create_visible {
                        html! {
                            <CreateSetForm
                                key={format!("create-{}", state.create_form_epoch)}
                                on_create={on_create}
                                on_clear={on_clear}
                                submitting={state.submitting}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
