use crate::pages::login::utils;
use leptos::*;

/// Always in the tree so hosts can locate it; hidden until a fetch fails.
#[component]
pub fn ErrorRegion(visible: Signal<bool>, message: Signal<String>) -> impl IntoView {
    view! {
        <span
            data-testid="error"
            role="alert"
            class="block bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded"
            style=move || utils::error_region_style(visible.get())
        >
            {move || message.get()}
        </span>
    }
}

#[component]
pub fn UserGreeting(name: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || name.get().is_some() fallback=|| ()>
            <span data-testid="user" class="block text-center text-lg font-medium text-fg">
                {move || name.get().unwrap_or_default()}
            </span>
        </Show>
    }
}
