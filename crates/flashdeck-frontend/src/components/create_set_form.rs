use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use flashdeck::data::{DEFAULT_DIFFICULTY, DIFFICULTY_CHOICES, RawSetFields};

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";
const LABEL_CLASSES: &str = "block text-sm font-medium text-gray-700 mb-1";

#[derive(Properties, PartialEq)]
pub struct CreateSetFormProps {
    /// Fired with the raw field values; validation happens in the controller
    pub on_create: Callback<RawSetFields>,
    pub on_clear: Callback<()>,
    #[prop_or(false)]
    pub submitting: bool,
}

#[function_component(CreateSetForm)]
pub fn create_set_form(props: &CreateSetFormProps) -> Html {
    let name = use_state(String::new);
    let description = use_state(String::new);
    let category = use_state(String::new);
    let difficulty = use_state(|| DEFAULT_DIFFICULTY.to_string());
    let is_public = use_state(|| false);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(area.value());
            }
        })
    };

    let on_category_input = {
        let category = category.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                category.set(input.value());
            }
        })
    };

    let on_difficulty_change = {
        let difficulty = difficulty.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                difficulty.set(select.value());
            }
        })
    };

    let on_public_change = {
        let is_public = is_public.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                is_public.set(input.checked());
            }
        })
    };

    let on_submit = {
        let name = name.clone();
        let description = description.clone();
        let category = category.clone();
        let difficulty = difficulty.clone();
        let is_public = is_public.clone();
        let on_create = props.on_create.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_create.emit(RawSetFields {
                name: (*name).clone(),
                description: (*description).clone(),
                category: (*category).clone(),
                difficulty: (*difficulty).clone(),
                is_public: *is_public,
            });
        })
    };

    let on_clear_click = props.on_clear.reform(|_: MouseEvent| ());

    let form_classes = classes!(
        "space-y-4",
        props.submitting.then_some("loading"),
        props.submitting.then_some("opacity-75")
    );

    html! {
        <section id="createSection" class="bg-white border border-gray-200 rounded-lg p-6">
            <h2 class="text-xl font-semibold text-gray-900 mb-4">{ "New flashcard set" }</h2>
            <form id="createSetForm" onsubmit={on_submit} class={form_classes}>
                <div>
                    <label for="set-name" class={LABEL_CLASSES}>{ "Name" }</label>
                    <input
                        id="set-name"
                        name="name"
                        type="text"
                        class={INPUT_CLASSES}
                        placeholder="HSK 1 vocabulary"
                        value={(*name).clone()}
                        oninput={on_name_input}
                        disabled={props.submitting}
                    />
                </div>

                <div>
                    <label for="set-description" class={LABEL_CLASSES}>{ "Description" }</label>
                    <textarea
                        id="set-description"
                        name="description"
                        rows="3"
                        class={INPUT_CLASSES}
                        value={(*description).clone()}
                        oninput={on_description_input}
                        disabled={props.submitting}
                    />
                </div>

                <div>
                    <label for="set-category" class={LABEL_CLASSES}>{ "Category" }</label>
                    <input
                        id="set-category"
                        name="category"
                        type="text"
                        class={INPUT_CLASSES}
                        value={(*category).clone()}
                        oninput={on_category_input}
                        disabled={props.submitting}
                    />
                </div>

                <div>
                    <label for="set-difficulty" class={LABEL_CLASSES}>{ "Difficulty" }</label>
                    <select
                        id="set-difficulty"
                        name="difficulty"
                        class={INPUT_CLASSES}
                        onchange={on_difficulty_change}
                        disabled={props.submitting}
                    >
                        {
                            DIFFICULTY_CHOICES.iter().map(|(value, label)| {
                                html! {
                                    <option value={*value} selected={*difficulty == *value}>
                                        { *label }
                                    </option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <label class="flex items-center space-x-2 text-sm text-gray-700">
                    <input
                        type="checkbox"
                        name="is_public"
                        checked={*is_public}
                        onchange={on_public_change}
                        disabled={props.submitting}
                    />
                    <span>{ "Public set" }</span>
                </label>

                <div class="flex justify-end space-x-3 pt-4">
                    <button
                        type="button"
                        class="px-4 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-md hover:bg-gray-50 disabled:opacity-50"
                        onclick={on_clear_click}
                        disabled={props.submitting}
                    >
                        { "Clear" }
                    </button>
                    <button
                        type="submit"
                        class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={props.submitting}
                    >
                        { if props.submitting { "Creating..." } else { "Create set" } }
                    </button>
                </div>
            </form>
        </section>
    }
}
