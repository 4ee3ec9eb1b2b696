use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "py-20 px-4 max-w-6xl mx-auto",
            h1 { class: "text-3xl font-bold mb-4 text-slate-800", "About Estate Market" }
            p {
                class: "mb-4 text-slate-700",
                "Estate Market is a place to find a home or to list one. Browse rentals and homes for sale, \
                 filter by amenities and price, and get in touch with the owner directly."
            }
            p {
                class: "mb-4 text-slate-700",
                "Owners can publish a listing with up to six photos, mark it as an offer with a discounted \
                 price, and update or remove it from their profile at any time."
            }
        }
    }
}
