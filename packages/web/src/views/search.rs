//! Search page: filter sidebar bound to the URL query, results grid and paging.

use dioxus::prelude::*;
use store::search::has_more;
use store::{KindFilter, Listing, ListingKind, SearchQuery};
use ui::{use_services, ListingItem};

use crate::{Route, SearchParams};

#[component]
pub fn Search(query: SearchParams) -> Element {
    let services = use_services();
    let nav = use_navigator();
    let mut sidebar = use_signal(|| query.0.clone());
    let mut listings = use_signal(Vec::<Listing>::new);
    let mut loading = use_signal(|| false);
    let mut show_more = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut active = use_signal(|| query.0.clone());

    let api = services.api.clone();
    let _loader = use_resource(use_reactive((&query.0,), move |(current,)| {
        let api = api.clone();
        async move {
            sidebar.set(current.clone());
            active.set(current.clone());
            loading.set(true);
            show_more.set(false);
            error.set(None);
            match api.search_listings(&current).await {
                Ok(page) => {
                    show_more.set(has_more(page.len()));
                    listings.set(page);
                }
                Err(e) => {
                    tracing::error!("Search failed: {}", e);
                    listings.set(Vec::new());
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    }));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut next = sidebar();
        next.start_index = None;
        nav.push(Route::search(next));
    };

    let handle_show_more = move |_| {
        let api = services.api.clone();
        let asked = active();
        let next = asked.next_page(listings.read().len());
        spawn(async move {
            match api.search_listings(&next).await {
                Ok(page) => {
                    let more = has_more(page.len());
                    if append_page(&mut listings.write(), &asked, &active.peek(), page) {
                        show_more.set(more);
                    }
                }
                Err(e) => {
                    tracing::error!("Loading more results failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let s = sidebar();
    let status = if loading() {
        Some(("text-xl text-slate-700 text-center w-full", "Loading...".to_string()))
    } else if let Some(err) = error() {
        Some(("text-xl text-red-700", err))
    } else if listings.read().is_empty() {
        Some(("text-xl text-slate-700", "No listing found!".to_string()))
    } else {
        None
    };

    rsx! {
        div {
            class: "flex flex-col md:flex-row",
            div {
                class: "p-7 border-b-2 md:border-r-2 md:min-h-screen",
                form {
                    class: "flex flex-col gap-8",
                    onsubmit: handle_submit,
                    div {
                        class: "flex items-center gap-2",
                        label { class: "whitespace-nowrap font-semibold", "Search Term:" }
                        input {
                            class: "border rounded-lg p-3 w-full",
                            r#type: "text",
                            id: "searchTerm",
                            placeholder: "Search...",
                            value: "{s.search_term}",
                            oninput: move |evt: FormEvent| sidebar.write().search_term = evt.value(),
                        }
                    }
                    div {
                        class: "flex gap-2 flex-wrap items-center",
                        label { class: "font-semibold", "Type:" }
                        KindOption { sidebar, kind: KindFilter::All, label: "Rent & Sale" }
                        KindOption { sidebar, kind: KindFilter::Only(ListingKind::Rent), label: "Rent" }
                        KindOption { sidebar, kind: KindFilter::Only(ListingKind::Sale), label: "Sale" }
                        div {
                            class: "flex gap-2",
                            input {
                                class: "w-5",
                                r#type: "checkbox",
                                id: "offer",
                                checked: s.offer,
                                onchange: move |evt: FormEvent| sidebar.write().offer = evt.checked(),
                            }
                            span { "Offer" }
                        }
                    }
                    div {
                        class: "flex gap-2 flex-wrap items-center",
                        label { class: "font-semibold", "Amenities:" }
                        div {
                            class: "flex gap-2",
                            input {
                                class: "w-5",
                                r#type: "checkbox",
                                id: "parking",
                                checked: s.parking,
                                onchange: move |evt: FormEvent| sidebar.write().parking = evt.checked(),
                            }
                            span { "Parking" }
                        }
                        div {
                            class: "flex gap-2",
                            input {
                                class: "w-5",
                                r#type: "checkbox",
                                id: "furnished",
                                checked: s.furnished,
                                onchange: move |evt: FormEvent| sidebar.write().furnished = evt.checked(),
                            }
                            span { "Furnished" }
                        }
                    }
                    div {
                        class: "flex items-center gap-2",
                        label { class: "font-semibold", "Sort:" }
                        select {
                            class: "border rounded-lg p-3",
                            id: "sort_order",
                            value: "{s.sort_key()}",
                            onchange: move |evt: FormEvent| sidebar.write().set_sort_key(&evt.value()),
                            option { value: "regularPrice_desc", "Price high to low" }
                            option { value: "regularPrice_asc", "Price low to high" }
                            option { value: "createdAt_desc", "Latest" }
                            option { value: "createdAt_asc", "Oldest" }
                        }
                    }
                    button {
                        class: "bg-slate-700 text-white p-3 rounded-lg uppercase hover:opacity-95",
                        r#type: "submit",
                        "Search"
                    }
                }
            }

            div {
                class: "flex-1",
                h1 { class: "text-3xl font-semibold border-b p-3 text-slate-700 mt-5", "Listing results:" }
                div {
                    class: "p-7 flex flex-wrap gap-4",
                    if let Some((class, text)) = status {
                        p { class: "{class}", "{text}" }
                    }
                    if !loading() {
                        for listing in listings() {
                            ListingItem { key: "{listing.id}", listing: listing.clone() }
                        }
                    }
                    if show_more() && !loading() {
                        button {
                            class: "text-green-700 hover:underline p-7 text-center w-full",
                            onclick: handle_show_more,
                            "Show more"
                        }
                    }
                }
            }
        }
    }
}

/// Append a "Show more" page, unless the search changed while it loaded.
fn append_page(
    listings: &mut Vec<Listing>,
    asked: &SearchQuery,
    active: &SearchQuery,
    page: Vec<Listing>,
) -> bool {
    if asked != active {
        tracing::debug!("Dropping a page for a superseded search");
        return false;
    }
    listings.extend(page);
    true
}

#[component]
fn KindOption(sidebar: Signal<SearchQuery>, kind: KindFilter, label: String) -> Element {
    rsx! {
        div {
            class: "flex gap-2",
            input {
                class: "w-5",
                r#type: "checkbox",
                checked: sidebar().kind == kind,
                onchange: move |_| sidebar.write().kind = kind,
            }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str) -> Listing {
        Listing {
            id: id.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_page_appends_for_same_search() {
        let query = SearchQuery::default();
        let mut listings = vec![listing("1")];
        assert!(append_page(&mut listings, &query, &query, vec![listing("2")]));
        assert_eq!(listings.len(), 2);
    }

    #[test]
    fn test_page_for_superseded_search_is_dropped() {
        let old = SearchQuery::default();
        let new = SearchQuery {
            search_term: "loft".into(),
            ..Default::default()
        };
        let mut listings = vec![listing("a")];
        assert!(!append_page(&mut listings, &old, &new, vec![listing("stale")]));
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, "a");
    }
}
