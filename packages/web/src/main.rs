use std::fmt;

use dioxus::prelude::*;
use dioxus::router::FromQuery;

use store::SearchQuery;
use ui::{use_auth, AuthProvider, Header};
use views::{
    About, CreateListing, Home, ListingDetail, NotFound, Profile, Search, SignIn, SignUp,
    UpdateListing,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/sign-in")]
        SignIn {},
        #[route("/sign-up")]
        SignUp {},
        #[route("/about")]
        About {},
        #[route("/listing/:listing_id")]
        ListingDetail { listing_id: String },
        #[route("/search?:..query")]
        Search { query: SearchParams },
        #[layout(PrivateRoute)]
            #[route("/profile")]
            Profile {},
            #[route("/create-listing")]
            CreateListing {},
            #[route("/profile/update-listing/:listing_id")]
            UpdateListing { listing_id: String },
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// The `/search` query string as a route parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams(pub SearchQuery);

impl FromQuery for SearchParams {
    fn from_query(query: &str) -> Self {
        Self(SearchQuery::from_query_string(query))
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_query_string())
    }
}

impl Route {
    fn search(query: SearchQuery) -> Self {
        Route::Search {
            query: SearchParams(query),
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Header above every page. The search box follows the query of the current
/// `/search` URL, if any.
#[component]
fn AppShell() -> Element {
    let query = match use_route::<Route>() {
        Route::Search { query } => query.0,
        _ => SearchQuery::default(),
    };

    rsx! {
        Header { query }
        Outlet::<Route> {}
    }
}

/// Pages below this layout require a signed-in user.
#[component]
fn PrivateRoute() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if !auth().is_signed_in() {
        tracing::info!("Not signed in, redirecting to sign-in");
        nav.replace(Route::SignIn {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use store::{KindFilter, ListingKind};

    #[test]
    fn test_search_route_round_trip() {
        let route = Route::from_str("/search?searchTerm=loft&type=rent&offer=true").unwrap();
        let Route::Search { query } = &route else {
            panic!("expected search route, got {route:?}");
        };
        assert_eq!(query.0.search_term, "loft");
        assert_eq!(query.0.kind, KindFilter::Only(ListingKind::Rent));
        assert!(query.0.offer);

        let reparsed = Route::from_str(&route.to_string()).unwrap();
        assert_eq!(reparsed, route);
    }

    #[test]
    fn test_guarded_paths_parse() {
        assert_eq!(
            Route::from_str("/profile/update-listing/abc").unwrap(),
            Route::UpdateListing {
                listing_id: "abc".into()
            }
        );
        assert_eq!(Route::from_str("/create-listing").unwrap(), Route::CreateListing {});
        assert_eq!(
            Route::from_str("/listing/42").unwrap(),
            Route::ListingDetail {
                listing_id: "42".into()
            }
        );
    }
}
