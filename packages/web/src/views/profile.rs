//! Profile page: account edits, avatar upload, sign out / delete, own listings.

use dioxus::prelude::*;
use store::{Listing, UserUpdate};
use ui::{
    confirm, forget_user, read_selected_files, remember_user, sleep_ms, use_auth, use_services,
    PLACEHOLDER_AVATAR,
};

use crate::Route;

const UPLOAD_NOTICE_MS: u64 = 4_000;

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let services = use_services();
    let nav = use_navigator();

    let user = auth().user.unwrap_or_default();
    let user_id = user.id.clone();

    let mut update = use_signal(|| UserUpdate::from_user(&user));
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut updated = use_signal(|| false);

    let mut uploading = use_signal(|| false);
    let mut upload_error = use_signal(|| Option::<String>::None);
    let mut upload_done = use_signal(|| false);

    let mut listings = use_signal(Vec::<Listing>::new);
    let mut listings_error = use_signal(|| false);

    let storage = services.storage.clone();
    let handle_avatar = move |evt: FormEvent| {
        let storage = storage.clone();
        async move {
            let Some(file) = read_selected_files(&evt).await.into_iter().next() else {
                return;
            };
            upload_done.set(false);
            upload_error.set(None);
            uploading.set(true);
            match storage.upload_avatar(&file).await {
                Ok(url) => {
                    update.write().avatar = url;
                    uploading.set(false);
                    upload_done.set(true);
                    sleep_ms(UPLOAD_NOTICE_MS).await;
                    upload_done.set(false);
                    upload_error.set(None);
                }
                Err(e) => {
                    tracing::error!("Avatar upload failed: {}", e);
                    uploading.set(false);
                    upload_error.set(Some("Upload failed".to_string()));
                }
            }
        }
    };

    let api = services.api.clone();
    let id = user_id.clone();
    let handle_update = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let id = id.clone();
        spawn(async move {
            let mut payload = update();
            payload.set_password(password());
            loading.set(true);
            error.set(None);
            updated.set(false);
            match api.update_user(&id, &payload).await {
                Ok(user) => {
                    loading.set(false);
                    updated.set(true);
                    password.set(String::new());
                    remember_user(auth, user);
                }
                Err(e) => {
                    tracing::error!("Profile update failed: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let api = services.api.clone();
    let id = user_id.clone();
    let handle_delete_user = move |_| {
        if !confirm("Are you sure you want to delete your account?") {
            return;
        }
        let api = api.clone();
        let id = id.clone();
        spawn(async move {
            match api.delete_user(&id).await {
                Ok(()) => {
                    tracing::info!("Account {} deleted", id);
                    forget_user(auth);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    tracing::error!("Account deletion failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let api = services.api.clone();
    let handle_sign_out = move |_| {
        let api = api.clone();
        spawn(async move {
            match api.sign_out().await {
                Ok(()) => {
                    forget_user(auth);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    tracing::error!("Sign out failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let api = services.api.clone();
    let id = user_id.clone();
    let handle_show_listings = move |_| {
        let api = api.clone();
        let id = id.clone();
        spawn(async move {
            listings_error.set(false);
            match api.user_listings(&id).await {
                Ok(found) => listings.set(found),
                Err(e) => {
                    tracing::error!("Failed to load own listings: {}", e);
                    listings_error.set(true);
                }
            }
        });
    };

    let api = services.api.clone();
    let handle_delete_listing = use_callback(move |listing_id: String| {
        let api = api.clone();
        spawn(async move {
            match api.delete_listing(&listing_id).await {
                Ok(()) => listings.write().retain(|l| l.id != listing_id),
                Err(e) => tracing::error!("Failed to delete listing {}: {}", listing_id, e),
            }
        });
    });

    if !auth().is_signed_in() {
        return rsx! {};
    }

    let fallback = PLACEHOLDER_AVATAR.to_string();
    let avatar = if update().avatar.is_empty() {
        fallback
    } else {
        update().avatar
    };

    rsx! {
        div {
            class: "p-3 max-w-lg mx-auto",
            h1 { class: "text-3xl font-semibold text-center my-7", "Profile" }

            form {
                class: "flex flex-col gap-4",
                onsubmit: handle_update,
                input {
                    r#type: "file",
                    id: "avatar",
                    accept: "image/*",
                    hidden: true,
                    onchange: handle_avatar,
                }
                label {
                    r#for: "avatar",
                    class: "self-center",
                    img {
                        class: "rounded-full h-24 w-24 object-cover cursor-pointer mt-2",
                        src: "{avatar}",
                        alt: "profile",
                    }
                }
                if uploading() {
                    p { class: "text-slate-700 text-center", "Uploading..." }
                }
                if upload_done() {
                    p { class: "text-green-600 text-center", "Uploaded successfully!" }
                }
                if let Some(err) = upload_error() {
                    p { class: "text-red-600 text-center", "{err}" }
                }
                input {
                    class: "border p-3 rounded-lg",
                    r#type: "text",
                    id: "username",
                    placeholder: "username",
                    value: "{update().username}",
                    oninput: move |evt: FormEvent| update.write().username = evt.value(),
                }
                input {
                    class: "border p-3 rounded-lg",
                    r#type: "email",
                    id: "email",
                    placeholder: "email",
                    value: "{update().email}",
                    oninput: move |evt: FormEvent| update.write().email = evt.value(),
                }
                input {
                    class: "border p-3 rounded-lg",
                    r#type: "password",
                    id: "password",
                    placeholder: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "bg-slate-700 text-white rounded-lg p-3 uppercase hover:opacity-95 disabled:opacity-80",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Loading..." } else { "Update" }
                }
                Link {
                    to: Route::CreateListing {},
                    class: "bg-green-700 text-white p-3 rounded-lg uppercase text-center hover:opacity-95",
                    "Create Listing"
                }
            }

            div {
                class: "flex justify-between mt-5",
                span { class: "text-red-700 cursor-pointer", onclick: handle_delete_user, "Delete account" }
                span { class: "text-red-700 cursor-pointer", onclick: handle_sign_out, "Sign out" }
            }

            if let Some(err) = error() {
                p { class: "text-red-700 mt-5", "{err}" }
            }
            if updated() {
                p { class: "text-green-700 mt-5", "User is updated successfully!" }
            }

            button {
                class: "text-green-700 w-full mt-5",
                onclick: handle_show_listings,
                "Show Listings"
            }
            if listings_error() {
                p { class: "text-red-700 mt-5", "Error showing listings" }
            }

            if !listings.read().is_empty() {
                div {
                    class: "flex flex-col gap-4",
                    h2 { class: "text-center mt-7 text-2xl font-semibold", "Your Listings" }
                    for listing in listings() {
                        OwnListingRow {
                            key: "{listing.id}",
                            listing: listing.clone(),
                            on_delete: handle_delete_listing,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OwnListingRow(listing: Listing, on_delete: EventHandler<String>) -> Element {
    let id = listing.id.clone();
    let cover = listing
        .cover_image()
        .map(str::to_string)
        .unwrap_or_else(|| ui::PLACEHOLDER_LISTING.to_string());

    rsx! {
        div {
            class: "border rounded-lg p-3 flex justify-between items-center gap-4",
            Link {
                to: Route::ListingDetail { listing_id: listing.id.clone() },
                img { class: "h-16 w-16 object-contain", src: "{cover}", alt: "listing cover" }
            }
            Link {
                to: Route::ListingDetail { listing_id: listing.id.clone() },
                class: "text-slate-700 font-semibold hover:underline truncate flex-1",
                "{listing.name}"
            }
            div {
                class: "flex flex-col items-center",
                button {
                    class: "text-red-700 uppercase",
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
                Link {
                    to: Route::UpdateListing { listing_id: listing.id.clone() },
                    class: "text-green-700 uppercase",
                    "Edit"
                }
            }
        }
    }
}
