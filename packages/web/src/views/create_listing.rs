use dioxus::prelude::*;
use store::ListingForm;
use ui::{use_auth, use_services, ListingFormView};

use crate::Route;

#[component]
pub fn CreateListing() -> Element {
    let auth = use_auth();
    let services = use_services();
    let nav = use_navigator();
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |form: ListingForm| {
        let api = services.api.clone();
        let Some(user_id) = auth().user_id() else {
            return;
        };
        spawn(async move {
            busy.set(true);
            error.set(None);
            match api.create_listing(&form.to_request(&user_id)).await {
                Ok(listing) => {
                    busy.set(false);
                    tracing::info!("Created listing {}", listing.id);
                    nav.push(Route::ListingDetail {
                        listing_id: listing.id,
                    });
                }
                Err(e) => {
                    tracing::error!("Create listing failed: {}", e);
                    busy.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        ListingFormView {
            title: "Create a Listing",
            initial: ListingForm::default(),
            submit_label: "Create Listing",
            busy_label: "Creating...",
            busy: busy(),
            error: error(),
            on_submit: handle_submit,
        }
    }
}
