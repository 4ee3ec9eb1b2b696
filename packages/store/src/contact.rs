//! Landlord contact link.

use url::form_urlencoded::byte_serialize;

use crate::models::Listing;

/// `mailto:` link pre-filled with a subject naming the listing and the message.
pub fn mailto_href(landlord_email: &str, listing: &Listing, message: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        landlord_email,
        encode(&format!("Regarding {}", listing.name)),
        encode(message)
    )
}

/// Percent-encode for a `mailto:` query: spaces must be `%20`, not `+`.
fn encode(s: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so every '+' left is a space.
    byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_href() {
        let listing = Listing {
            name: "Lake house".into(),
            ..Default::default()
        };
        let href = mailto_href("owner@example.com", &listing, "Is it free in May? 2+2 guests");
        assert_eq!(
            href,
            "mailto:owner@example.com?subject=Regarding%20Lake%20house&body=Is%20it%20free%20in%20May%3F%202%2B2%20guests"
        );
    }
}
