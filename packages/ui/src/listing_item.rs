use dioxus::prelude::*;
use store::Listing;

use crate::icons::FaLocationDot;
use crate::{Icon, PLACEHOLDER_LISTING};

/// Card linking to a listing's detail page.
#[component]
pub fn ListingItem(listing: Listing) -> Element {
    let cover = listing
        .cover_image()
        .map(str::to_string)
        .unwrap_or_else(|| PLACEHOLDER_LISTING.to_string());

    rsx! {
        div {
            class: "bg-white shadow-md hover:shadow-lg transition-shadow overflow-hidden rounded-lg w-full sm:w-[330px]",
            Link {
                to: "/listing/{listing.id}",
                img {
                    class: "h-[320px] sm:h-[220px] w-full object-cover hover:scale-105 transition-scale duration-300",
                    src: "{cover}",
                    alt: "listing cover",
                }
                div {
                    class: "p-3 flex flex-col gap-2 w-full",
                    p { class: "truncate text-lg font-semibold text-slate-700", "{listing.name}" }
                    div {
                        class: "flex items-center gap-1",
                        Icon { icon: FaLocationDot, width: 14, height: 14, class: "text-green-700" }
                        p { class: "text-sm text-gray-600 truncate w-full", "{listing.address}" }
                    }
                    p { class: "text-sm text-gray-600 line-clamp-2", "{listing.description}" }
                    p { class: "text-slate-500 mt-2 font-semibold", "{listing.price_label()}" }
                    div {
                        class: "text-slate-700 flex gap-4 font-bold text-xs",
                        span { "{listing.bedrooms_label()}" }
                        span { "{listing.bathrooms_label()}" }
                    }
                }
            }
        }
    }
}
