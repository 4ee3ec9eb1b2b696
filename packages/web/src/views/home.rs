use api::ApiError;
use dioxus::prelude::*;
use store::{KindFilter, Listing, ListingKind, SearchQuery};
use ui::{use_services, ImageSlider, ListingItem};

use crate::Route;

/// Section contents, or empty when the fetch failed.
fn or_empty(section: &str, result: Result<Vec<Listing>, ApiError>) -> Vec<Listing> {
    result.unwrap_or_else(|e| {
        tracing::error!("Failed to load {} listings: {}", section, e);
        Vec::new()
    })
}

#[component]
pub fn Home() -> Element {
    let services = use_services();
    let mut offers = use_signal(Vec::<Listing>::new);
    let mut rentals = use_signal(Vec::<Listing>::new);
    let mut sales = use_signal(Vec::<Listing>::new);

    let _loader = use_resource(move || {
        let api = services.api.clone();
        async move {
            let offer_query = SearchQuery::recent_offers();
            let rent_query = SearchQuery::recent(ListingKind::Rent);
            let sale_query = SearchQuery::recent(ListingKind::Sale);
            let (offer, rent, sale) = futures::join!(
                api.search_listings(&offer_query),
                api.search_listings(&rent_query),
                api.search_listings(&sale_query),
            );
            offers.set(or_empty("offer", offer));
            rentals.set(or_empty("rent", rent));
            sales.set(or_empty("sale", sale));
        }
    });

    let covers: Vec<String> = offers()
        .iter()
        .filter_map(|l| l.cover_image().map(str::to_string))
        .collect();

    rsx! {
        div {
            class: "flex flex-col gap-6 p-28 px-3 max-w-6xl mx-auto",
            h1 {
                class: "text-slate-700 font-bold text-3xl lg:text-6xl",
                "Find your next "
                span { class: "text-slate-500", "perfect" }
                br {}
                "place with ease"
            }
            div {
                class: "text-gray-400 text-xs sm:text-sm",
                "Estate Market is the best place to find your next perfect place to live."
                br {}
                "We have a wide range of properties for you to choose from."
            }
            Link {
                to: Route::search(SearchQuery::default()),
                span { class: "text-xs sm:text-sm text-blue-800 font-bold hover:underline", "Let's get started..." }
            }
        }

        ImageSlider { images: covers }

        div {
            class: "max-w-6xl mx-auto p-3 flex flex-col gap-8 my-10",
            ListingSection {
                title: "Recent offers",
                more_label: "Show more offers",
                more: SearchQuery { offer: true, ..Default::default() },
                listings: offers(),
            }
            ListingSection {
                title: "Recent places for rent",
                more_label: "Show more places for rent",
                more: SearchQuery { kind: KindFilter::Only(ListingKind::Rent), ..Default::default() },
                listings: rentals(),
            }
            ListingSection {
                title: "Recent places for sale",
                more_label: "Show more places for sale",
                more: SearchQuery { kind: KindFilter::Only(ListingKind::Sale), ..Default::default() },
                listings: sales(),
            }
        }
    }
}

#[component]
fn ListingSection(
    title: String,
    more_label: String,
    more: SearchQuery,
    listings: Vec<Listing>,
) -> Element {
    if listings.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            div {
                class: "my-3",
                h2 { class: "text-2xl font-semibold text-slate-600", "{title}" }
                Link {
                    to: Route::search(more),
                    span { class: "text-sm text-blue-800 hover:underline", "{more_label}" }
                }
            }
            div {
                class: "flex flex-wrap gap-4",
                for listing in listings {
                    ListingItem { key: "{listing.id}", listing: listing.clone() }
                }
            }
        }
    }
}
