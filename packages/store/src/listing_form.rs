//! # Listing form state
//!
//! [`ListingForm`] is the editable state behind both the create and the update
//! listing pages. It owns the image URL list that is eventually posted, so the
//! thumbnails on screen and the submitted payload never diverge.
//!
//! Validation happens at two points:
//!
//! - [`validate_selection`] when the user picks files to upload (1 to 6 files,
//!   all `image/*`).
//! - [`ListingForm::validate_for_submit`] before the listing is sent: at least
//!   one uploaded image, discount price not above the regular price, and the
//!   input ranges the form advertises.
//!
//! Every [`FormError`] displays as the exact message the page shows.

use serde::Serialize;
use thiserror::Error;

use crate::models::{Listing, ListingKind};

pub const MAX_IMAGES: usize = 6;
pub const NAME_LEN: std::ops::RangeInclusive<usize> = 10..=62;
pub const ROOMS: std::ops::RangeInclusive<u32> = 0..=10;
pub const PRICE: std::ops::RangeInclusive<u32> = 50..=100_000;

const DEFAULT_PRICE: u32 = 50;

/// Client-side validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please select between 1 and 6 image files.")]
    SelectionCount,
    #[error("Only image files are allowed.")]
    NotAnImage,
    #[error("You have to upload at least 1 image")]
    NoImages,
    #[error("Discount price must be less than regular price")]
    DiscountAboveRegular,
    #[error("Name must be between 10 and 62 characters")]
    NameLength,
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
    #[error("All fields are required")]
    MissingFields,
}

/// A file picked in a file input, read into memory.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Build from picker data; a missing MIME type is guessed from the extension.
    pub fn new(name: String, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        let content_type = content_type
            .filter(|ct| !ct.is_empty())
            .unwrap_or_else(|| guess_content_type(&name).to_string());
        Self {
            name,
            content_type,
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

fn guess_content_type(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Check a file selection before it is uploaded.
pub fn validate_selection(files: &[SelectedFile]) -> Result<(), FormError> {
    if files.is_empty() || files.len() > MAX_IMAGES {
        return Err(FormError::SelectionCount);
    }
    if !files.iter().all(SelectedFile::is_image) {
        return Err(FormError::NotAnImage);
    }
    Ok(())
}

/// Checkbox-style amenities on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Amenity {
    Parking,
    Furnished,
    Offer,
}

/// Numeric inputs on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberField {
    Bedrooms,
    Bathrooms,
    RegularPrice,
    DiscountPrice,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListingForm {
    pub name: String,
    pub description: String,
    pub address: String,
    pub regular_price: u32,
    pub discount_price: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub furnished: bool,
    pub parking: bool,
    pub offer: bool,
    pub kind: ListingKind,
    pub image_urls: Vec<String>,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            address: String::new(),
            regular_price: DEFAULT_PRICE,
            discount_price: DEFAULT_PRICE,
            bedrooms: 0,
            bathrooms: 0,
            furnished: false,
            parking: false,
            offer: false,
            kind: ListingKind::Rent,
            image_urls: Vec::new(),
        }
    }
}

impl ListingForm {
    /// Prefill the form from an existing listing for editing.
    pub fn from_listing(listing: &Listing) -> Self {
        fn or(value: u32, fallback: u32) -> u32 {
            if value == 0 {
                fallback
            } else {
                value
            }
        }

        Self {
            name: listing.name.clone(),
            description: listing.description.clone(),
            address: listing.address.clone(),
            regular_price: or(listing.regular_price, DEFAULT_PRICE),
            discount_price: or(listing.discount_price, DEFAULT_PRICE),
            bedrooms: or(listing.bedrooms, 1),
            bathrooms: or(listing.bathrooms, 1),
            furnished: listing.furnished,
            parking: listing.parking,
            offer: listing.offer,
            kind: listing.kind,
            image_urls: listing.image_urls.clone(),
        }
    }

    pub fn set_kind(&mut self, kind: ListingKind) {
        self.kind = kind;
    }

    pub fn amenity(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Parking => self.parking,
            Amenity::Furnished => self.furnished,
            Amenity::Offer => self.offer,
        }
    }

    pub fn set_amenity(&mut self, amenity: Amenity, on: bool) {
        match amenity {
            Amenity::Parking => self.parking = on,
            Amenity::Furnished => self.furnished = on,
            Amenity::Offer => self.offer = on,
        }
    }

    pub fn toggle(&mut self, amenity: Amenity) {
        self.set_amenity(amenity, !self.amenity(amenity));
    }

    pub fn number(&self, field: NumberField) -> u32 {
        match field {
            NumberField::Bedrooms => self.bedrooms,
            NumberField::Bathrooms => self.bathrooms,
            NumberField::RegularPrice => self.regular_price,
            NumberField::DiscountPrice => self.discount_price,
        }
    }

    /// Apply raw text from a number input. Unparseable input keeps the old value.
    pub fn set_number(&mut self, field: NumberField, raw: &str) {
        let Ok(value) = raw.trim().parse::<u32>() else {
            return;
        };
        match field {
            NumberField::Bedrooms => self.bedrooms = value,
            NumberField::Bathrooms => self.bathrooms = value,
            NumberField::RegularPrice => self.regular_price = value,
            NumberField::DiscountPrice => self.discount_price = value,
        }
    }

    pub fn add_image_urls(&mut self, urls: impl IntoIterator<Item = String>) {
        self.image_urls.extend(urls);
    }

    pub fn remove_image_url(&mut self, url: &str) {
        self.image_urls.retain(|u| u != url);
    }

    /// Room left for more uploads before hitting [`MAX_IMAGES`].
    pub fn remaining_image_slots(&self) -> usize {
        MAX_IMAGES.saturating_sub(self.image_urls.len())
    }

    pub fn validate_for_submit(&self) -> Result<(), FormError> {
        if self.image_urls.is_empty() {
            return Err(FormError::NoImages);
        }
        check_range("Regular price", self.regular_price, &PRICE)?;
        if self.regular_price < self.discount_price {
            return Err(FormError::DiscountAboveRegular);
        }
        if !NAME_LEN.contains(&self.name.trim().chars().count()) {
            return Err(FormError::NameLength);
        }
        if self.description.trim().is_empty() {
            return Err(FormError::Required("Description"));
        }
        if self.address.trim().is_empty() {
            return Err(FormError::Required("Address"));
        }
        check_range("Beds", self.bedrooms, &ROOMS)?;
        check_range("Baths", self.bathrooms, &ROOMS)?;
        if self.offer {
            check_range("Discounted price", self.discount_price, &PRICE)?;
        }
        Ok(())
    }

    /// JSON body for `/api/listing/create` and `/api/listing/update/:id`.
    pub fn to_request(&self, user_ref: &str) -> ListingRequest {
        ListingRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            address: self.address.trim().to_string(),
            regular_price: self.regular_price,
            discount_price: self.discount_price,
            bathrooms: self.bathrooms,
            bedrooms: self.bedrooms,
            furnished: self.furnished,
            parking: self.parking,
            kind: self.kind,
            offer: self.offer,
            image_urls: self.image_urls.clone(),
            user_ref: user_ref.to_string(),
        }
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    range: &std::ops::RangeInclusive<u32>,
) -> Result<(), FormError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(FormError::OutOfRange {
            field,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Payload posted when creating or updating a listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRequest {
    pub name: String,
    pub description: String,
    pub address: String,
    pub regular_price: u32,
    pub discount_price: u32,
    #[serde(rename = "bathRooms")]
    pub bathrooms: u32,
    #[serde(rename = "bedRooms")]
    pub bedrooms: u32,
    pub furnished: bool,
    pub parking: bool,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub offer: bool,
    pub image_urls: Vec<String>,
    pub user_ref: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> SelectedFile {
        SelectedFile {
            name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8],
        }
    }

    fn valid_form() -> ListingForm {
        ListingForm {
            name: "Modern flat downtown".into(),
            description: "Bright and quiet".into(),
            address: "1 Main St".into(),
            image_urls: vec!["https://cdn/1.jpg".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_selection_requires_one_to_six_files() {
        assert_eq!(validate_selection(&[]), Err(FormError::SelectionCount));

        let six: Vec<_> = (0..6).map(|i| image(&format!("{i}.jpg"))).collect();
        assert_eq!(validate_selection(&six), Ok(()));

        let seven: Vec<_> = (0..7).map(|i| image(&format!("{i}.jpg"))).collect();
        assert_eq!(validate_selection(&seven), Err(FormError::SelectionCount));
        assert_eq!(
            FormError::SelectionCount.to_string(),
            "Please select between 1 and 6 image files."
        );
    }

    #[test]
    fn test_selection_rejects_non_images() {
        let pdf = SelectedFile {
            name: "lease.pdf".into(),
            content_type: "application/pdf".into(),
            bytes: Vec::new(),
        };
        assert_eq!(
            validate_selection(&[image("a.jpg"), pdf]),
            Err(FormError::NotAnImage)
        );
    }

    #[test]
    fn test_missing_mime_type_is_guessed() {
        let f = SelectedFile::new("Porch.JPG".into(), None, Vec::new());
        assert_eq!(f.content_type, "image/jpeg");
        assert!(f.is_image());

        let f = SelectedFile::new("notes".into(), Some(String::new()), Vec::new());
        assert!(!f.is_image());

        let f = SelectedFile::new("x.png".into(), Some("image/heic".into()), Vec::new());
        assert_eq!(f.content_type, "image/heic");
    }

    #[test]
    fn test_defaults_match_new_listing() {
        let form = ListingForm::default();
        assert_eq!(form.regular_price, 50);
        assert_eq!(form.discount_price, 50);
        assert_eq!(form.kind, ListingKind::Rent);
        assert_eq!(form.bedrooms, 0);
        assert!(form.image_urls.is_empty());
    }

    #[test]
    fn test_submit_requires_an_image() {
        let form = ListingForm {
            image_urls: Vec::new(),
            ..valid_form()
        };
        let err = form.validate_for_submit().unwrap_err();
        assert_eq!(err, FormError::NoImages);
        assert_eq!(err.to_string(), "You have to upload at least 1 image");
    }

    #[test]
    fn test_discount_may_not_exceed_regular_price() {
        let mut form = valid_form();
        form.regular_price = 100;
        form.discount_price = 150;
        assert_eq!(
            form.validate_for_submit(),
            Err(FormError::DiscountAboveRegular)
        );

        form.discount_price = 100;
        assert_eq!(form.validate_for_submit(), Ok(()));
    }

    #[test]
    fn test_image_check_runs_before_price_check() {
        let form = ListingForm {
            image_urls: Vec::new(),
            regular_price: 60,
            discount_price: 900,
            ..valid_form()
        };
        assert_eq!(form.validate_for_submit(), Err(FormError::NoImages));
    }

    #[test]
    fn test_regular_price_range_reported_before_hidden_discount() {
        let form = ListingForm {
            offer: false,
            regular_price: 40,
            discount_price: 50,
            ..valid_form()
        };
        assert_eq!(
            form.validate_for_submit(),
            Err(FormError::OutOfRange {
                field: "Regular price",
                min: 50,
                max: 100_000
            })
        );
    }

    #[test]
    fn test_input_ranges() {
        let mut form = valid_form();
        form.name = "short".into();
        assert_eq!(form.validate_for_submit(), Err(FormError::NameLength));

        let mut form = valid_form();
        form.bedrooms = 11;
        assert_eq!(
            form.validate_for_submit(),
            Err(FormError::OutOfRange {
                field: "Beds",
                min: 0,
                max: 10
            })
        );

        let mut form = valid_form();
        form.address = "  ".into();
        assert_eq!(form.validate_for_submit(), Err(FormError::Required("Address")));
    }

    #[test]
    fn test_set_number_ignores_garbage() {
        let mut form = ListingForm::default();
        form.set_number(NumberField::RegularPrice, "1200");
        assert_eq!(form.regular_price, 1200);
        form.set_number(NumberField::RegularPrice, "12a");
        assert_eq!(form.regular_price, 1200);
        form.set_number(NumberField::Bedrooms, " 3 ");
        assert_eq!(form.number(NumberField::Bedrooms), 3);
    }

    #[test]
    fn test_amenities_and_kind() {
        let mut form = ListingForm::default();
        form.set_amenity(Amenity::Parking, true);
        form.set_amenity(Amenity::Offer, true);
        form.set_kind(ListingKind::Sale);
        assert!(form.amenity(Amenity::Parking));
        assert!(!form.amenity(Amenity::Furnished));
        assert!(form.offer);
        assert_eq!(form.kind, ListingKind::Sale);

        form.toggle(Amenity::Offer);
        form.toggle(Amenity::Furnished);
        assert!(!form.offer);
        assert!(form.furnished);
    }

    #[test]
    fn test_image_list_edits() {
        let mut form = ListingForm::default();
        form.add_image_urls(vec!["a".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(form.remaining_image_slots(), 3);
        form.remove_image_url("a");
        assert_eq!(form.image_urls, vec!["b".to_string()]);
    }

    #[test]
    fn test_from_listing_fills_blanks() {
        let listing = Listing {
            name: "Cabin by the lake".into(),
            image_urls: vec!["x".into()],
            kind: ListingKind::Sale,
            ..Default::default()
        };
        let form = ListingForm::from_listing(&listing);
        assert_eq!(form.regular_price, 50);
        assert_eq!(form.bedrooms, 1);
        assert_eq!(form.bathrooms, 1);
        assert_eq!(form.kind, ListingKind::Sale);
        assert_eq!(form.image_urls, vec!["x".to_string()]);
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(valid_form().to_request("u42")).unwrap();
        assert_eq!(body["userRef"], "u42");
        assert_eq!(body["type"], "rent");
        assert_eq!(body["regularPrice"], 50);
        assert_eq!(body["bathRooms"], 0);
        assert_eq!(body["imageUrls"][0], "https://cdn/1.jpg");
    }
}
