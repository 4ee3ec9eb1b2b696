//! # Search query model
//!
//! [`SearchQuery`] mirrors the `/search` page URL and the query string sent to
//! `GET /api/listing/get`. Parsing is forgiving: unknown keys are ignored and
//! malformed values fall back to the defaults, so a hand-edited URL still loads
//! a results page.

use url::form_urlencoded;

use crate::models::ListingKind;

/// Results fetched per page on the search screen.
pub const PAGE_SIZE: usize = 9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(ListingKind),
}

impl KindFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Only(kind) => kind.as_str(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(KindFilter::All),
            other => ListingKind::parse(other).map(KindFilter::Only),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    RegularPrice,
    #[default]
    CreatedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::RegularPrice => "regularPrice",
            SortField::CreatedAt => "createdAt",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "regularPrice" => Some(SortField::RegularPrice),
            "createdAt" => Some(SortField::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub search_term: String,
    pub kind: KindFilter,
    pub parking: bool,
    pub furnished: bool,
    pub offer: bool,
    pub sort: SortField,
    pub order: SortOrder,
    pub start_index: Option<usize>,
    pub limit: Option<usize>,
}

impl SearchQuery {
    /// Home page row: latest offers.
    pub fn recent_offers() -> Self {
        Self {
            offer: true,
            limit: Some(4),
            ..Default::default()
        }
    }

    /// Home page row: latest listings of one kind.
    pub fn recent(kind: ListingKind) -> Self {
        Self {
            kind: KindFilter::Only(kind),
            limit: Some(4),
            ..Default::default()
        }
    }

    pub fn from_query_string(query: &str) -> Self {
        let mut q = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "searchTerm" => q.search_term = value.into_owned(),
                "type" => q.kind = KindFilter::parse(&value).unwrap_or_default(),
                "parking" => q.parking = value == "true",
                "furnished" => q.furnished = value == "true",
                "offer" => q.offer = value == "true",
                "sort" => q.sort = SortField::parse(&value).unwrap_or_default(),
                "order" => q.order = SortOrder::parse(&value).unwrap_or_default(),
                "startIndex" => q.start_index = value.parse().ok(),
                "limit" => q.limit = value.parse().ok(),
                _ => {}
            }
        }
        q
    }

    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        out.append_pair("searchTerm", &self.search_term)
            .append_pair("type", self.kind.as_str())
            .append_pair("parking", bool_str(self.parking))
            .append_pair("furnished", bool_str(self.furnished))
            .append_pair("offer", bool_str(self.offer))
            .append_pair("sort", self.sort.as_str())
            .append_pair("order", self.order.as_str());
        if let Some(start) = self.start_index {
            out.append_pair("startIndex", &start.to_string());
        }
        if let Some(limit) = self.limit {
            out.append_pair("limit", &limit.to_string());
        }
        out.finish()
    }

    /// Same filters with only the free-text term replaced, as the header search box does.
    pub fn with_search_term(&self, term: &str) -> Self {
        Self {
            search_term: term.to_string(),
            start_index: None,
            ..self.clone()
        }
    }

    /// Query for the page after `loaded` results.
    pub fn next_page(&self, loaded: usize) -> Self {
        Self {
            start_index: Some(loaded),
            ..self.clone()
        }
    }

    /// The sort dropdown's combined value, e.g. `"createdAt_desc"`.
    pub fn sort_key(&self) -> String {
        format!("{}_{}", self.sort.as_str(), self.order.as_str())
    }

    pub fn set_sort_key(&mut self, key: &str) {
        let (field, order) = key.split_once('_').unwrap_or((key, ""));
        self.sort = SortField::parse(field).unwrap_or_default();
        self.order = SortOrder::parse(order).unwrap_or_default();
    }
}

/// Whether a page of results suggests more are available.
pub fn has_more(page_len: usize) -> bool {
    page_len > PAGE_SIZE - 1
}

fn bool_str(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_query() {
        let q = SearchQuery::from_query_string(
            "?searchTerm=sea%20view&type=sale&parking=true&furnished=false&offer=true&sort=regularPrice&order=asc",
        );
        assert_eq!(q.search_term, "sea view");
        assert_eq!(q.kind, KindFilter::Only(ListingKind::Sale));
        assert!(q.parking);
        assert!(!q.furnished);
        assert!(q.offer);
        assert_eq!(q.sort, SortField::RegularPrice);
        assert_eq!(q.order, SortOrder::Asc);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let q = SearchQuery::from_query_string("type=castle&sort=size&order=up&limit=x&bogus=1");
        assert_eq!(q, SearchQuery::default());
    }

    #[test]
    fn test_query_string_reparses_to_same_filters() {
        let q = SearchQuery {
            search_term: "loft & garden".into(),
            kind: KindFilter::Only(ListingKind::Rent),
            furnished: true,
            ..Default::default()
        };
        let s = q.to_query_string();
        assert!(s.starts_with("searchTerm=loft+%26+garden&type=rent"));
        assert_eq!(SearchQuery::from_query_string(&s), q);
    }

    #[test]
    fn test_home_presets() {
        assert_eq!(
            SearchQuery::recent_offers().to_query_string(),
            "searchTerm=&type=all&parking=false&furnished=false&offer=true&sort=createdAt&order=desc&limit=4"
        );
        let rent = SearchQuery::recent(ListingKind::Rent);
        assert_eq!(rent.kind.as_str(), "rent");
        assert_eq!(rent.limit, Some(4));
    }

    #[test]
    fn test_header_search_keeps_filters() {
        let q = SearchQuery {
            offer: true,
            start_index: Some(9),
            ..Default::default()
        };
        let next = q.with_search_term("villa");
        assert_eq!(next.search_term, "villa");
        assert!(next.offer);
        assert_eq!(next.start_index, None);
    }

    #[test]
    fn test_sort_key_roundtrip() {
        let mut q = SearchQuery::default();
        assert_eq!(q.sort_key(), "createdAt_desc");
        q.set_sort_key("regularPrice_asc");
        assert_eq!(q.sort, SortField::RegularPrice);
        assert_eq!(q.order, SortOrder::Asc);
        q.set_sort_key("nonsense");
        assert_eq!(q.sort_key(), "createdAt_desc");
    }

    #[test]
    fn test_paging() {
        assert!(!has_more(8));
        assert!(has_more(9));
        let q = SearchQuery::default().next_page(9);
        assert!(q.to_query_string().ends_with("startIndex=9"));
    }
}
