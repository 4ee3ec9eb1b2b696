use dioxus::prelude::*;
use store::{mailto_href, Listing};

use crate::use_services;

/// Message box for reaching a listing's owner by e-mail.
#[component]
pub fn Contact(listing: Listing) -> Element {
    let services = use_services();
    let mut message = use_signal(String::new);
    let landlord_id = listing.user_ref.clone();

    let landlord = use_resource(move || {
        let api = services.api.clone();
        let id = landlord_id.clone();
        async move {
            let result = api.get_user(&id).await;
            if let Err(e) = &result {
                tracing::error!("Failed to load landlord {}: {}", id, e);
            }
            result.ok()
        }
    });

    let Some(Some(landlord)) = landlord() else {
        return rsx! {};
    };
    let href = mailto_href(&landlord.email, &listing, &message());

    rsx! {
        div {
            class: "flex flex-col gap-2",
            p {
                "Contact "
                span { class: "font-semibold", "{landlord.username}" }
                " for "
                span { class: "font-semibold", "{listing.name.to_lowercase()}" }
            }
            textarea {
                class: "w-full border p-3 rounded-lg",
                name: "message",
                rows: "2",
                placeholder: "Enter your message here...",
                value: message(),
                oninput: move |evt: FormEvent| message.set(evt.value()),
            }
            a {
                class: "bg-slate-700 text-white text-center p-3 uppercase rounded-lg hover:opacity-95",
                href: "{href}",
                "Send Message"
            }
        }
    }
}
