//! Sign-in page view with email/password form.

use dioxus::prelude::*;
use store::SignInForm;
use ui::{remember_user, use_auth, use_services};

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let auth = use_auth();
    let services = use_services();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        let api = services.api.clone();
        spawn(async move {
            error.set(None);

            let form = SignInForm {
                email: email().trim().to_string(),
                password: password(),
            };
            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            loading.set(true);
            match api.sign_in(&form).await {
                Ok(user) => {
                    loading.set(false);
                    remember_user(auth, user);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    tracing::error!("Sign in failed: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "p-3 max-w-lg mx-auto",
            h1 { class: "text-3xl text-center font-semibold my-7", "Sign In" }

            form {
                class: "flex flex-col gap-4",
                onsubmit: handle_sign_in,
                input {
                    class: "border p-3 rounded-lg",
                    r#type: "email",
                    id: "email",
                    placeholder: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
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
                    class: "bg-slate-700 text-white p-3 rounded-lg uppercase hover:opacity-95 disabled:opacity-80",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Loading..." } else { "Sign In" }
                }
            }

            div {
                class: "flex gap-2 mt-5",
                p { "Dont have an account?" }
                Link {
                    to: Route::SignUp {},
                    span { class: "text-blue-700", "Sign up" }
                }
            }

            if let Some(err) = error() {
                p { class: "text-red-500 mt-5", "{err}" }
            }
        }
    }
}
