pub mod account;
pub mod config;
pub mod contact;
pub mod listing_form;
pub mod models;
pub mod search;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use account::{SignInForm, SignUpForm, UserUpdate};
pub use config::EstateConfig;
pub use contact::mailto_href;
pub use listing_form::{
    validate_selection, Amenity, FormError, ListingForm, ListingRequest, NumberField,
    SelectedFile,
};
pub use models::{format_thousands, Listing, ListingKind, User};
pub use search::{KindFilter, SearchQuery, SortField, SortOrder};
pub use session::SessionStore;
