use dioxus::prelude::*;
use store::format_thousands;
use ui::icons::{FaBath, FaBed, FaChair, FaLocationDot, FaShareNodes, FaSquareParking};
use ui::{sleep_ms, use_auth, use_services, Contact, Icon, ImageSlider};

const COPIED_CLEAR_MS: u64 = 2_000;

#[component]
pub fn ListingDetail(listing_id: String) -> Element {
    let services = use_services();
    let auth = use_auth();
    let mut copied = use_signal(|| false);
    let mut contact = use_signal(|| false);

    let listing = use_resource(use_reactive((&listing_id,), move |(id,)| {
        let api = services.api.clone();
        async move {
            api.get_listing(&id).await.map_err(|e| {
                tracing::error!("Failed to fetch listing {}: {}", id, e);
                e
            })
        }
    }));

    let share = move |_| {
        spawn(async move {
            document::eval("navigator.clipboard.writeText(window.location.href)");
            copied.set(true);
            sleep_ms(COPIED_CLEAR_MS).await;
            copied.set(false);
        });
    };

    let listing = match &*listing.read() {
        None => {
            return rsx! {
                p { class: "text-center my-7 text-2xl", "Loading..." }
            }
        }
        Some(Err(_)) => {
            return rsx! {
                p { class: "text-center my-7 text-2xl", "Failed to fetch listing. Please try again." }
            }
        }
        Some(Ok(listing)) => listing.clone(),
    };

    let can_contact = auth()
        .user
        .map(|user| !listing.is_owned_by(&user))
        .unwrap_or(false);

    rsx! {
        main {
            ImageSlider { images: listing.image_urls.clone() }

            div {
                class: "fixed top-[13%] right-[3%] z-10 border rounded-full w-12 h-12 flex justify-center items-center bg-slate-100 cursor-pointer",
                onclick: share,
                Icon { icon: FaShareNodes, width: 16, height: 16, class: "text-slate-500" }
            }
            if copied() {
                p { class: "fixed top-[23%] right-[5%] z-10 rounded-md bg-slate-100 p-2", "Link copied!" }
            }

            div {
                class: "flex flex-col max-w-4xl mx-auto p-3 my-7 gap-4",
                p { class: "text-2xl font-semibold", "{listing.name} - {listing.price_label()}" }
                p {
                    class: "flex items-center mt-6 gap-2 text-slate-600 text-sm",
                    Icon { icon: FaLocationDot, width: 14, height: 14, class: "text-green-700" }
                    "{listing.address}"
                }
                div {
                    class: "flex gap-4",
                    p { class: "bg-red-900 w-full max-w-[200px] text-white text-center p-1 rounded-md", "{listing.kind.badge()}" }
                    if let Some(savings) = listing.savings() {
                        p {
                            class: "bg-green-900 w-full max-w-[200px] text-white text-center p-1 rounded-md",
                            "${format_thousands(savings)} OFF"
                        }
                    }
                }
                p {
                    class: "text-slate-800",
                    span { class: "font-semibold text-black", "Description - " }
                    "{listing.description}"
                }
                ul {
                    class: "text-green-900 font-semibold text-sm flex flex-wrap items-center gap-4 sm:gap-6",
                    li {
                        class: "flex items-center gap-1 whitespace-nowrap",
                        Icon { icon: FaBed, width: 16, height: 16 }
                        "{listing.bedrooms_label()}"
                    }
                    li {
                        class: "flex items-center gap-1 whitespace-nowrap",
                        Icon { icon: FaBath, width: 16, height: 16 }
                        "{listing.bathrooms_label()}"
                    }
                    li {
                        class: "flex items-center gap-1 whitespace-nowrap",
                        Icon { icon: FaSquareParking, width: 16, height: 16 }
                        if listing.parking { "Parking spot" } else { "No Parking" }
                    }
                    li {
                        class: "flex items-center gap-1 whitespace-nowrap",
                        Icon { icon: FaChair, width: 16, height: 16 }
                        if listing.furnished { "Furnished" } else { "Unfurnished" }
                    }
                }
                if can_contact && !contact() {
                    button {
                        class: "bg-slate-700 text-white rounded-lg uppercase hover:opacity-95 p-3",
                        onclick: move |_| contact.set(true),
                        "Contact landlord"
                    }
                }
                if contact() {
                    Contact { listing: listing.clone() }
                }
            }
        }
    }
}
