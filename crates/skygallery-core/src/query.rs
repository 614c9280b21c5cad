use url::form_urlencoded;

/// Decoded query-string pairs in request order.
///
/// Duplicate keys are kept; lookups return the last occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a raw `application/x-www-form-urlencoded` query string.
    /// A leading `?` is ignored.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value of `name`, or the empty string when absent.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }

    /// Encoded query string with `name` set to `value` and every other
    /// parameter preserved in order.
    ///
    /// The first occurrence of `name` is replaced in place and later
    /// duplicates are dropped; if `name` is absent it is appended.
    pub fn with_override(&self, name: &str, value: &str) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut replaced = false;
        for (k, v) in &self.pairs {
            if k == name {
                if !replaced {
                    serializer.append_pair(k, value);
                    replaced = true;
                }
            } else {
                serializer.append_pair(k, v);
            }
        }
        if !replaced {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decodes_and_keeps_order() {
        let q = QueryParams::parse("?sort=date&tag=m%2031&tag=ngc+224");
        assert_eq!(q.get("sort"), Some("date"));
        assert_eq!(q.pairs().len(), 3);
        assert_eq!(q.pairs()[1].1, "m 31");
        assert_eq!(q.pairs()[2].1, "ngc 224");
    }

    #[test]
    fn get_returns_last_duplicate() {
        let q = QueryParams::parse("thumbnail_size=small&sort=date&thumbnail_size=large");
        assert_eq!(q.get("thumbnail_size"), Some("large"));
        assert_eq!(q.get_or_empty("sort"), "date");
    }

    #[test]
    fn empty_query_has_no_pairs() {
        let q = QueryParams::parse("");
        assert!(q.is_empty());
        assert_eq!(q.get_or_empty("sort"), "");
        assert_eq!(q.to_query_string(), "");
    }

    #[test]
    fn override_replaces_in_place() {
        let q = QueryParams::parse("sort=date&thumbnail_size=small&page=2");
        assert_eq!(
            q.with_override("thumbnail_size", "large"),
            "sort=date&thumbnail_size=large&page=2"
        );
    }

    #[test]
    fn override_appends_when_missing() {
        let q = QueryParams::parse("sort=date");
        assert_eq!(q.with_override("page", "3"), "sort=date&page=3");
    }

    #[test]
    fn override_drops_later_duplicates() {
        let q = QueryParams::parse("page=1&sort=x&page=4");
        assert_eq!(q.with_override("page", "2"), "page=2&sort=x");
    }

    #[test]
    fn override_reencodes_values() {
        let q = QueryParams::from_pairs([("query", "m 31 & friends")]);
        assert_eq!(
            q.with_override("thumbnail_size", "medium"),
            "query=m+31+%26+friends&thumbnail_size=medium"
        );
    }
}
