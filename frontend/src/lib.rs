use leptos::*;

mod api;
pub mod config;
mod pages;
#[cfg(test)]
mod test_support;

pub use pages::login::LoginPage;

/// Installs logging and the panic hook, resolves runtime config, then mounts
/// the login page.
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting login frontend: initializing runtime config");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized (user id {})", config::user_id());
        mount_to_body(|| view! { <LoginPage/> });
    });
}
