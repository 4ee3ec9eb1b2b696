use api::upload_all;
use dioxus::prelude::*;
use store::{validate_selection, FormError, ListingForm, SelectedFile};

use crate::{read_selected_files, sleep_ms, use_services};

const SUCCESS_CLEAR_MS: u64 = 3_000;

/// Check a selection against the slots left on the form.
pub fn check_upload(files: &[SelectedFile], form: &ListingForm) -> Result<(), FormError> {
    validate_selection(files)?;
    if files.len() > form.remaining_image_slots() {
        return Err(FormError::SelectionCount);
    }
    Ok(())
}

/// File picker plus "Upload" button that appends the uploaded URLs to `form`,
/// and a thumbnail strip for removing them again.
#[component]
pub fn ImageUploader(form: Signal<ListingForm>) -> Element {
    let services = use_services();
    let mut files = use_signal(Vec::<SelectedFile>::new);
    let mut uploading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);

    let handle_files = move |evt: FormEvent| async move {
        files.set(read_selected_files(&evt).await);
    };

    let handle_upload = move |_| {
        let storage = services.storage.clone();
        spawn(async move {
            error.set(None);
            let selected = files();
            if let Err(e) = check_upload(&selected, &form.read()) {
                error.set(Some(e.to_string()));
                return;
            }

            uploading.set(true);
            let outcome = upload_all(&storage, &selected).await;
            uploading.set(false);

            if outcome.all_failed() {
                error.set(Some("Image upload failed.".to_string()));
                return;
            }
            form.write().add_image_urls(outcome.urls);
            files.set(Vec::new());
            success.set(Some("Images uploaded successfully!".to_string()));
            sleep_ms(SUCCESS_CLEAR_MS).await;
            success.set(None);
        });
    };

    rsx! {
        p {
            class: "font-semibold",
            "Images:"
            span { class: "font-normal text-gray-600 ml-2", "The first image will be the cover (max 6)" }
        }
        div {
            class: "flex gap-4",
            input {
                class: "p-3 border border-gray-300 rounded w-full",
                r#type: "file",
                id: "images",
                accept: "image/*",
                multiple: true,
                onchange: handle_files,
            }
            button {
                r#type: "button",
                class: "p-3 text-green-700 border border-green-700 rounded uppercase hover:shadow-lg disabled:opacity-80",
                disabled: uploading(),
                onclick: handle_upload,
                if uploading() { "Uploading..." } else { "Upload" }
            }
        }
        if let Some(err) = error() {
            p { class: "text-red-700 text-sm", "{err}" }
        }
        if let Some(msg) = success() {
            p { class: "text-green-600 text-sm", "{msg}" }
        }
        div {
            class: "flex gap-3 flex-wrap",
            for (i, url) in form().image_urls.into_iter().enumerate() {
                div {
                    key: "{i}-{url}",
                    class: "relative w-24 h-24",
                    img {
                        class: "object-cover w-full h-full rounded",
                        src: "{url}",
                        alt: "listing image {i}",
                    }
                    button {
                        r#type: "button",
                        class: "absolute top-0 right-0 bg-red-600 text-white w-5 h-5 rounded-full text-xs",
                        onclick: move |_| form.write().remove_image_url(&url),
                        "X"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> SelectedFile {
        SelectedFile::new(name.to_string(), Some("image/png".to_string()), vec![1])
    }

    #[test]
    fn test_check_upload_respects_remaining_slots() {
        let mut form = ListingForm::default();
        form.add_image_urls((0..4).map(|i| format!("https://cdn/{i}.png")));

        assert!(check_upload(&[image("a.png"), image("b.png")], &form).is_ok());
        assert_eq!(
            check_upload(&[image("a.png"), image("b.png"), image("c.png")], &form),
            Err(FormError::SelectionCount)
        );
        assert_eq!(check_upload(&[], &form), Err(FormError::SelectionCount));
    }
}
