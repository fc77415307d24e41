mod api;
mod app;
mod session;
mod storage;

use app::App;
use leptos::view;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(|| view! { <App/> });
}
