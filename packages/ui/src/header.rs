use dioxus::prelude::*;
use store::SearchQuery;

use crate::icons::FaMagnifyingGlass;
use crate::{use_auth, Icon, PLACEHOLDER_AVATAR};

/// Top bar shown on every page.
///
/// `query` is the search currently in the URL; the search box starts from its
/// term and submitting rewrites only that term.
#[component]
pub fn Header(query: SearchQuery) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut term = use_signal(|| query.search_term.clone());
    let fallback = PLACEHOLDER_AVATAR.to_string();
    let avatar = auth()
        .user
        .map(|user| user.avatar_or(&fallback).to_string());

    use_effect(use_reactive((&query.search_term,), move |(url_term,)| {
        term.set(url_term);
    }));

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let next = query.with_search_term(&term());
        nav.push(format!("/search?{}", next.to_query_string()));
    };

    rsx! {
        header {
            class: "bg-slate-200 shadow-md",
            div {
                class: "flex justify-between items-center max-w-6xl mx-auto p-3",
                Link {
                    to: "/",
                    h1 {
                        class: "font-bold text-sm sm:text-xl flex flex-wrap",
                        span { class: "text-slate-500", "Estate" }
                        span { class: "text-slate-700", "Market" }
                    }
                }

                form {
                    class: "bg-slate-100 p-3 rounded-lg flex items-center",
                    onsubmit: handle_search,
                    input {
                        class: "bg-transparent focus:outline-none w-24 sm:w-64",
                        r#type: "text",
                        placeholder: "Search...",
                        value: term(),
                        oninput: move |evt: FormEvent| term.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14, class: "text-slate-600" }
                    }
                }

                ul {
                    class: "flex gap-4 items-center",
                    Link {
                        to: "/",
                        li { class: "hidden sm:inline text-slate-700 hover:underline", "Home" }
                    }
                    Link {
                        to: "/about",
                        li { class: "hidden sm:inline text-slate-700 hover:underline", "About" }
                    }
                    if let Some(avatar) = avatar {
                        Link {
                            to: "/profile",
                            img {
                                class: "rounded-full h-7 w-7 object-cover",
                                src: "{avatar}",
                                alt: "profile",
                            }
                        }
                    } else {
                        Link {
                            to: "/sign-in",
                            li { class: "text-slate-700 hover:underline", "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
