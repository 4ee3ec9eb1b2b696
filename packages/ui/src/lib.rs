//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const PLACEHOLDER_AVATAR: Asset = asset!("/assets/avatar.svg");
pub const PLACEHOLDER_LISTING: Asset = asset!("/assets/listing.svg");

mod session;
pub use session::{load_config, make_session_store};

mod auth;
pub use auth::{forget_user, remember_user, use_auth, use_services, AuthProvider, AuthState};

mod dialog;
pub use dialog::confirm;

mod timer;
pub use timer::sleep_ms;

mod files;
pub use files::read_selected_files;

mod header;
pub use header::Header;

mod listing_item;
pub use listing_item::ListingItem;

mod image_slider;
pub use image_slider::ImageSlider;

mod image_uploader;
pub use image_uploader::ImageUploader;

mod listing_form;
pub use listing_form::ListingFormView;

mod contact;
pub use contact::Contact;
