use serde::{Deserialize, Deserializer};

/// One entry of a location page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LocationEntry {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// One decoded page of the location list plus its navigation links.
///
/// `next` and `previous` are `None` when the server sends `null` or omits the
/// field. `count` is informational only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PageEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<LocationEntry>,
}

// Missing and `null` both decode to the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PageEnvelope {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|entry| entry.name.as_str())
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_page() {
        let body = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city", "url": "https://pokeapi.co/api/v2/location/1/"},
                {"name": "eterna-city", "url": "https://pokeapi.co/api/v2/location/2/"}
            ]
        }"#;
        let page = PageEnvelope::from_json(body).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.has_next());
        assert!(!page.has_previous());
        assert_eq!(
            page.names().collect::<Vec<_>>(),
            vec!["canalave-city", "eterna-city"]
        );
        assert_eq!(page.results[1].url, "https://pokeapi.co/api/v2/location/2/");
    }

    #[test]
    fn tolerates_missing_count_and_url() {
        let page = PageEnvelope::from_json(
            r#"{"next":"P2","previous":null,"results":[{"name":"pallet-town"}]}"#,
        )
        .unwrap();
        assert_eq!(page.count, 0);
        assert_eq!(page.next.as_deref(), Some("P2"));
        assert_eq!(page.previous, None);
        assert_eq!(page.results[0].url, "");
    }

    #[test]
    fn missing_links_are_absent_not_empty() {
        let page = PageEnvelope::from_json(r#"{"results":[]}"#).unwrap();
        assert_eq!(page.next, None);
        assert_eq!(page.previous, None);
    }

    #[test]
    fn null_fields_decode_as_zero_values() {
        let page = PageEnvelope::from_json(
            r#"{"count":null,"next":"P2","previous":null,"results":[{"name":"pallet-town","url":null}]}"#,
        )
        .unwrap();
        assert_eq!(page.count, 0);
        assert_eq!(page.results[0].url, "");
        assert_eq!(page.names().collect::<Vec<_>>(), vec!["pallet-town"]);

        let empty = PageEnvelope::from_json(r#"{"count":3,"next":null,"results":null}"#).unwrap();
        assert!(empty.results.is_empty());
        assert!(!empty.has_next());
    }

    #[test]
    fn negative_count_is_accepted() {
        let page = PageEnvelope::from_json(r#"{"count":-1,"results":[]}"#).unwrap();
        assert_eq!(page.count, -1);
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(PageEnvelope::from_json("Not Found").is_err());
        assert!(PageEnvelope::from_json(r#"{"results":"nope"}"#).is_err());
        assert!(PageEnvelope::from_json(r#"{"results":[{"url":"x"}]}"#).is_err());
    }
}
