//! # Domain models for listings and users
//!
//! Records mirrored from the listings/users REST API. They are passed through
//! unmodified: the only logic here is (de)serialisation and a handful of
//! display helpers used by the listing cards and the detail page.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Listing`] | A property: pricing, room counts, amenity flags, image URLs and the owner's id (`userRef`). |
//! | [`User`] | An account: id, username, email and avatar URL. |
//! | [`ListingKind`] | `rent` or `sale`, serialised lowercase under the `type` key. |
//!
//! Field names on the wire are camelCase. The backend has been seen to emit the
//! image list as `imageUrls`, `imagesUrls` or `images`; all three are accepted.
//! Numeric fields accept either JSON numbers or numeric strings because the
//! listing form historically posted raw input values.

use serde::{Deserialize, Deserializer, Serialize};

/// Whether a listing is offered for rent or for sale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    #[default]
    Rent,
    Sale,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Rent => "rent",
            ListingKind::Sale => "sale",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rent" => Some(ListingKind::Rent),
            "sale" => Some(ListingKind::Sale),
            _ => None,
        }
    }

    /// Badge text on the detail page.
    pub fn badge(&self) -> &'static str {
        match self {
            ListingKind::Rent => "For Rent",
            ListingKind::Sale => "For Sale",
        }
    }
}

/// A property listing as returned by `/api/listing/*`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub regular_price: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub discount_price: u32,
    #[serde(rename = "bathRooms", default, deserialize_with = "lenient_u32")]
    pub bathrooms: u32,
    #[serde(rename = "bedRooms", default, deserialize_with = "lenient_u32")]
    pub bedrooms: u32,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(rename = "type", default)]
    pub kind: ListingKind,
    #[serde(default)]
    pub offer: bool,
    #[serde(default, alias = "imagesUrls", alias = "images")]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub user_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Listing {
    /// The price a visitor pays: the discount price when the listing is on offer.
    pub fn effective_price(&self) -> u32 {
        if self.offer {
            self.discount_price
        } else {
            self.regular_price
        }
    }

    /// Amount saved by the offer, if any.
    pub fn savings(&self) -> Option<u32> {
        self.offer
            .then(|| self.regular_price.saturating_sub(self.discount_price))
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    /// Price line shown on cards and the detail page, e.g. `"$1,250 / month"`.
    pub fn price_label(&self) -> String {
        let mut label = format!("${}", format_thousands(self.effective_price()));
        if self.kind == ListingKind::Rent {
            label.push_str(" / month");
        }
        label
    }

    pub fn bedrooms_label(&self) -> String {
        plural(self.bedrooms, "bed")
    }

    pub fn bathrooms_label(&self) -> String {
        plural(self.bathrooms, "bath")
    }

    pub fn is_owned_by(&self, user: &User) -> bool {
        !self.user_ref.is_empty() && self.user_ref == user.id
    }
}

/// An account as returned by `/api/auth/*` and `/api/user/*`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
}

impl User {
    /// Avatar URL, or the bundled placeholder when the account has none.
    pub fn avatar_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.avatar.is_empty() {
            placeholder
        } else {
            &self.avatar
        }
    }
}

/// Formats an integer with `,` thousands separators (`1234567` → `"1,234,567"`).
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn plural(count: u32, noun: &str) -> String {
    if count > 1 {
        format!("{count} {noun}s")
    } else {
        format!("{count} {noun}")
    }
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(n) => u32::try_from(n).unwrap_or(u32::MAX),
        Raw::Float(f) if f.is_finite() && f > 0.0 => f.min(u32::MAX as f64) as u32,
        Raw::Float(_) => 0,
        Raw::Text(s) => s.trim().parse::<f64>().map(|f| f.max(0.0) as u32).unwrap_or(0),
        Raw::Null(()) => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_from_backend_json() {
        let json = r#"{
            "_id": "665f1",
            "name": "Sunny loft near the park",
            "description": "Two floors",
            "address": "12 Elm St",
            "regularPrice": 1500,
            "discountPrice": "1200",
            "bathRooms": 1,
            "bedRooms": 2,
            "furnished": true,
            "parking": false,
            "type": "rent",
            "offer": true,
            "imageUrls": ["https://cdn/a.jpg", "https://cdn/b.jpg"],
            "userRef": "u1",
            "createdAt": "2024-05-01T10:00:00.000Z",
            "__v": 0
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, "665f1");
        assert_eq!(listing.discount_price, 1200);
        assert_eq!(listing.bedrooms, 2);
        assert_eq!(listing.kind, ListingKind::Rent);
        assert_eq!(listing.cover_image(), Some("https://cdn/a.jpg"));
        assert_eq!(listing.effective_price(), 1200);
        assert_eq!(listing.savings(), Some(300));
        assert_eq!(listing.price_label(), "$1,200 / month");
    }

    #[test]
    fn test_listing_accepts_image_aliases() {
        let listing: Listing =
            serde_json::from_str(r#"{"_id": "x", "imagesUrls": ["one"]}"#).unwrap();
        assert_eq!(listing.image_urls, vec!["one".to_string()]);

        let listing: Listing = serde_json::from_str(r#"{"_id": "y", "images": ["two"]}"#).unwrap();
        assert_eq!(listing.image_urls, vec!["two".to_string()]);
    }

    #[test]
    fn test_listing_defaults_for_missing_fields() {
        let listing: Listing = serde_json::from_str(r#"{"_id": "z"}"#).unwrap();
        assert_eq!(listing.kind, ListingKind::Rent);
        assert!(listing.image_urls.is_empty());
        assert_eq!(listing.regular_price, 0);
        assert!(listing.cover_image().is_none());
    }

    #[test]
    fn test_listing_serialises_wire_names() {
        let listing = Listing {
            id: "1".into(),
            kind: ListingKind::Sale,
            bedrooms: 3,
            image_urls: vec!["u".into()],
            ..Default::default()
        };
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["_id"], "1");
        assert_eq!(value["type"], "sale");
        assert_eq!(value["bedRooms"], 3);
        assert_eq!(value["imageUrls"][0], "u");
        assert!(value.get("createdAt").is_none());
    }

    #[test]
    fn test_sale_price_label_has_no_month_suffix() {
        let listing = Listing {
            kind: ListingKind::Sale,
            regular_price: 250000,
            discount_price: 240000,
            offer: false,
            ..Default::default()
        };
        assert_eq!(listing.price_label(), "$250,000");
        assert_eq!(listing.savings(), None);
    }

    #[test]
    fn test_room_labels_pluralise() {
        let mut listing = Listing {
            bedrooms: 1,
            bathrooms: 0,
            ..Default::default()
        };
        assert_eq!(listing.bedrooms_label(), "1 bed");
        assert_eq!(listing.bathrooms_label(), "0 bath");
        listing.bedrooms = 4;
        listing.bathrooms = 2;
        assert_eq!(listing.bedrooms_label(), "4 beds");
        assert_eq!(listing.bathrooms_label(), "2 baths");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_user_avatar_fallback_and_ownership() {
        let user: User = serde_json::from_str(r#"{"_id": "u1", "username": "ada", "email": "a@b.c"}"#)
            .unwrap();
        assert_eq!(user.avatar_or("/placeholder.png"), "/placeholder.png");

        let listing = Listing {
            user_ref: "u1".into(),
            ..Default::default()
        };
        assert!(listing.is_owned_by(&user));
        assert!(!Listing::default().is_owned_by(&user));
    }
}
