use dioxus::prelude::*;
use store::ListingForm;
use ui::{use_auth, use_services, ListingFormView};

use crate::Route;

#[component]
pub fn UpdateListing(listing_id: String) -> Element {
    let auth = use_auth();
    let services = use_services();
    let nav = use_navigator();
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let api = services.api.clone();
    let existing = use_resource(use_reactive((&listing_id,), move |(id,)| {
        let api = api.clone();
        async move {
            api.get_listing(&id).await.map_err(|e| {
                tracing::error!("Failed to load listing {} for editing: {}", id, e);
                e.to_string()
            })
        }
    }));

    let id = listing_id.clone();
    let handle_submit = move |form: ListingForm| {
        let api = services.api.clone();
        let id = id.clone();
        let Some(user_id) = auth().user_id() else {
            return;
        };
        spawn(async move {
            busy.set(true);
            error.set(None);
            match api.update_listing(&id, &form.to_request(&user_id)).await {
                Ok(listing) => {
                    busy.set(false);
                    tracing::info!("Updated listing {}", listing.id);
                    nav.push(Route::ListingDetail {
                        listing_id: listing.id,
                    });
                }
                Err(e) => {
                    tracing::error!("Update listing failed: {}", e);
                    busy.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let initial = match existing() {
        None => {
            return rsx! {
                p { class: "text-center my-7 text-2xl", "Loading..." }
            }
        }
        Some(Err(message)) => {
            return rsx! {
                p { class: "text-center my-7 text-2xl text-red-700", "{message}" }
            }
        }
        Some(Ok(listing)) => ListingForm::from_listing(&listing),
    };

    rsx! {
        ListingFormView {
            title: "Update Listing",
            initial,
            submit_label: "Update Listing",
            busy_label: "Updating...",
            busy: busy(),
            error: error(),
            on_submit: handle_submit,
        }
    }
}
