use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::warn!("No page at /{}", path);

    rsx! {
        div {
            class: "py-20 px-4 max-w-6xl mx-auto text-center",
            h1 { class: "text-3xl font-bold mb-4 text-slate-800", "Page not found" }
            p { class: "mb-6 text-slate-600", "Nothing lives at /{path}." }
            Link {
                to: Route::Home {},
                span { class: "text-blue-800 hover:underline", "Back to the home page" }
            }
        }
    }
}
