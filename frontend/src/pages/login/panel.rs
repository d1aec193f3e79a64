use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            // Native navigation is suppressed whether or not the fields are valid.
            ev.prevent_default();
            vm.submit();
        })
    };

    let username_input = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_username(value))
    };
    let password_input = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_password(value))
    };

    view! {
        <LoginForm
            username=Signal::derive(move || form.with(|state| state.username.clone()))
            password=Signal::derive(move || form.with(|state| state.password.clone()))
            can_submit=vm.can_submit.into()
            submit_label=vm.submit_label.into()
            error_visible=vm.is_error_visible.into()
            error_message=vm.error_message.into()
            user_name=vm.user_name.into()
            on_username_input=username_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}
