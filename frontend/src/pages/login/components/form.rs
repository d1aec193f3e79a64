use crate::pages::login::components::messages::{ErrorRegion, UserGreeting};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    username: Signal<String>,
    password: Signal<String>,
    can_submit: Signal<bool>,
    submit_label: Signal<&'static str>,
    error_visible: Signal<bool>,
    error_message: Signal<String>,
    user_name: Signal<Option<String>>,
    on_username_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <UserGreeting name=user_name />
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="username" class="sr-only">"Username"</label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                autocomplete="username"
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text rounded-t-md focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:z-10 sm:text-sm"
                                placeholder="username"
                                prop:value=move || username.get()
                                on:input=move |ev| on_username_input.call(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text rounded-b-md focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:z-10 sm:text-sm"
                                placeholder="password"
                                prop:value=move || password.get()
                                on:input=move |ev| on_password_input.call(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div>
                        <button
                            type="submit"
                            disabled=move || !can_submit.get()
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus"
                        >
                            {move || submit_label.get()}
                        </button>
                    </div>

                    <ErrorRegion visible=error_visible message=error_message />
                </form>
            </div>
        </div>
    }
}
