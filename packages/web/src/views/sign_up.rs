//! Registration page view with username/email/password form.

use dioxus::prelude::*;
use store::SignUpForm;
use ui::use_services;

use crate::Route;

#[component]
pub fn SignUp() -> Element {
    let services = use_services();
    let nav = use_navigator();
    let mut form = use_signal(SignUpForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_sign_up = move |evt: FormEvent| {
        evt.prevent_default();
        let api = services.api.clone();
        spawn(async move {
            let payload = form();
            if let Err(e) = payload.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            loading.set(true);
            match api.sign_up(&payload).await {
                Ok(()) => {
                    loading.set(false);
                    error.set(None);
                    tracing::info!("Account created for {}", payload.username);
                    nav.push(Route::SignIn {});
                }
                Err(e) => {
                    tracing::error!("Sign up failed: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "p-3 max-w-lg mx-auto",
            h1 { class: "text-3xl text-center font-semibold my-7", "Sign Up" }

            form {
                class: "flex flex-col gap-4",
                onsubmit: handle_sign_up,
                input {
                    class: "border p-3 rounded-lg",
                    r#type: "text",
                    id: "username",
                    placeholder: "username",
                    value: form().username,
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
                input {
                    class: "border p-3 rounded-lg",
                    r#type: "email",
                    id: "email",
                    placeholder: "email",
                    value: form().email,
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
                input {
                    class: "border p-3 rounded-lg",
                    r#type: "password",
                    id: "password",
                    placeholder: "password",
                    value: form().password,
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                button {
                    class: "bg-slate-700 text-white p-3 rounded-lg uppercase hover:opacity-95 disabled:opacity-80",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Loading..." } else { "Sign Up" }
                }
            }

            div {
                class: "flex gap-2 mt-5",
                p { "Have an account?" }
                Link {
                    to: Route::SignIn {},
                    span { class: "text-blue-700", "Sign in" }
                }
            }

            if let Some(err) = error() {
                p { class: "text-red-500 mt-5", "{err}" }
            }
        }
    }
}
