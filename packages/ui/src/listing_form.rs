use dioxus::prelude::*;
use store::{Amenity, ListingForm, ListingKind, NumberField};

use crate::ImageUploader;

/// Create/edit form for a listing, shared by both pages.
///
/// The form validates locally and hands the finished [`ListingForm`] to
/// `on_submit`; the page owns the request and reports back through `busy`
/// and `error`.
#[component]
pub fn ListingFormView(
    title: String,
    initial: ListingForm,
    submit_label: String,
    busy_label: String,
    busy: bool,
    error: Option<String>,
    on_submit: EventHandler<ListingForm>,
) -> Element {
    let mut form = use_signal(|| initial.clone());
    let mut local_error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        match current.validate_for_submit() {
            Ok(()) => {
                local_error.set(None);
                on_submit.call(current);
            }
            Err(e) => {
                tracing::warn!("Listing form rejected: {}", e);
                local_error.set(Some(e.to_string()));
            }
        }
    };

    let shown_error = local_error().or(error);
    let f = form();

    rsx! {
        main {
            class: "p-3 max-w-4xl mx-auto",
            h1 { class: "text-3xl font-semibold text-center my-7", "{title}" }
            form {
                class: "flex flex-col sm:flex-row gap-4",
                onsubmit: handle_submit,
                div {
                    class: "flex flex-col gap-4 flex-1",
                    input {
                        class: "border p-3 rounded-lg",
                        r#type: "text",
                        id: "name",
                        placeholder: "Name",
                        maxlength: "62",
                        minlength: "10",
                        required: true,
                        value: "{f.name}",
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                    textarea {
                        class: "border p-3 rounded-lg",
                        id: "description",
                        placeholder: "Description",
                        required: true,
                        value: "{f.description}",
                        oninput: move |evt: FormEvent| form.write().description = evt.value(),
                    }
                    input {
                        class: "border p-3 rounded-lg",
                        r#type: "text",
                        id: "address",
                        placeholder: "Address",
                        required: true,
                        value: "{f.address}",
                        oninput: move |evt: FormEvent| form.write().address = evt.value(),
                    }

                    div {
                        class: "flex gap-6 flex-wrap",
                        KindCheckbox { form, kind: ListingKind::Sale, label: "Sell" }
                        KindCheckbox { form, kind: ListingKind::Rent, label: "Rent" }
                        AmenityCheckbox { form, amenity: Amenity::Parking, label: "Parking spot" }
                        AmenityCheckbox { form, amenity: Amenity::Furnished, label: "Furnished" }
                        AmenityCheckbox { form, amenity: Amenity::Offer, label: "Offer" }
                    }

                    div {
                        class: "flex flex-wrap gap-6",
                        NumberInput { form, field: NumberField::Bedrooms, min: 0, max: 10, label: "Beds" }
                        NumberInput { form, field: NumberField::Bathrooms, min: 0, max: 10, label: "Baths" }
                        NumberInput {
                            form,
                            field: NumberField::RegularPrice,
                            min: 50,
                            max: 100000,
                            label: "Regular price",
                            unit: rent_unit(f.kind),
                        }
                        if f.offer {
                            NumberInput {
                                form,
                                field: NumberField::DiscountPrice,
                                min: 50,
                                max: 100000,
                                label: "Discounted price",
                                unit: rent_unit(f.kind),
                            }
                        }
                    }
                }

                div {
                    class: "flex flex-col flex-1 gap-4",
                    ImageUploader { form }
                    button {
                        r#type: "submit",
                        class: "p-3 bg-slate-700 text-white rounded-lg uppercase hover:opacity-95 disabled:opacity-80",
                        disabled: busy,
                        if busy { "{busy_label}" } else { "{submit_label}" }
                    }
                    if let Some(err) = shown_error {
                        p { class: "text-red-700 text-sm", "{err}" }
                    }
                }
            }
        }
    }
}

fn rent_unit(kind: ListingKind) -> String {
    match kind {
        ListingKind::Rent => "$ / month".to_string(),
        ListingKind::Sale => String::new(),
    }
}

#[component]
fn KindCheckbox(form: Signal<ListingForm>, kind: ListingKind, label: String) -> Element {
    rsx! {
        div {
            class: "flex gap-2",
            input {
                class: "w-5",
                r#type: "checkbox",
                id: "{kind.as_str()}",
                checked: form().kind == kind,
                onchange: move |_| form.write().set_kind(kind),
            }
            span { "{label}" }
        }
    }
}

#[component]
fn AmenityCheckbox(form: Signal<ListingForm>, amenity: Amenity, label: String) -> Element {
    rsx! {
        div {
            class: "flex gap-2",
            input {
                class: "w-5",
                r#type: "checkbox",
                checked: form().amenity(amenity),
                onchange: move |_| form.write().toggle(amenity),
            }
            span { "{label}" }
        }
    }
}

#[component]
fn NumberInput(
    form: Signal<ListingForm>,
    field: NumberField,
    min: u32,
    max: u32,
    label: String,
    #[props(default)] unit: String,
) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-2",
            input {
                class: "p-3 border border-gray-300 rounded-lg",
                r#type: "number",
                min: "{min}",
                max: "{max}",
                required: true,
                value: "{form().number(field)}",
                oninput: move |evt: FormEvent| form.write().set_number(field, &evt.value()),
            }
            div {
                class: "flex flex-col items-center",
                p { "{label}" }
                if !unit.is_empty() {
                    span { class: "text-xs", "{unit}" }
                }
            }
        }
    }
}
