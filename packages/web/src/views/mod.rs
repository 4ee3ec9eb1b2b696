mod home;
pub use home::Home;

mod sign_in;
pub use sign_in::SignIn;

mod sign_up;
pub use sign_up::SignUp;

mod about;
pub use about::About;

mod profile;
pub use profile::Profile;

mod create_listing;
pub use create_listing::CreateListing;

mod update_listing;
pub use update_listing::UpdateListing;

mod listing;
pub use listing::ListingDetail;

mod search;
pub use search::Search;

mod not_found;
pub use not_found::NotFound;
