//! URL assembly: base URL, path segments and query parameters.

use url::Url;

use crate::UrlError;

/// Value of a single query parameter.
///
/// Absent values, empty strings and empty lists never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryValue {
    /// No value; the parameter is omitted entirely.
    #[default]
    Absent,
    /// One `name=value` pair.
    One(String),
    /// One `name=value` pair per element, in order.
    Many(Vec<String>),
}

impl QueryValue {
    /// Flatten into the values that will be emitted.
    pub fn into_values(self) -> Vec<String> {
        let values = match self {
            Self::Absent => Vec::new(),
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        };
        values.into_iter().filter(|v| !v.is_empty()).collect()
    }

    /// Check if nothing would be emitted for this value.
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::One(value) => value.is_empty(),
            Self::Many(values) => values.iter().all(String::is_empty),
        }
    }

    fn flatten<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<QueryValue>,
    {
        let values = items
            .into_iter()
            .flat_map(|item| item.into().into_values())
            .collect();
        Self::Many(values)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::One(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::One(if value { "true" } else { "false" }.to_string())
    }
}

macro_rules! query_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    Self::One(value.to_string())
                }
            }
        )*
    };
}

query_value_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        Self::flatten(values)
    }
}

impl<T: Into<QueryValue> + Clone> From<&[T]> for QueryValue {
    fn from(values: &[T]) -> Self {
        Self::flatten(values.iter().cloned())
    }
}

impl<T: Into<QueryValue>, const N: usize> From<[T; N]> for QueryValue {
    fn from(values: [T; N]) -> Self {
        Self::flatten(values)
    }
}

/// One optional path segment.
///
/// `None` keeps "no identifier" distinct from an empty string; both are
/// skipped when the URL is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSegment(pub Option<String>);

impl From<&str> for PathSegment {
    fn from(segment: &str) -> Self {
        Self(Some(segment.to_string()))
    }
}

impl From<String> for PathSegment {
    fn from(segment: String) -> Self {
        Self(Some(segment))
    }
}

impl From<&String> for PathSegment {
    fn from(segment: &String) -> Self {
        Self(Some(segment.clone()))
    }
}

impl From<Option<&str>> for PathSegment {
    fn from(segment: Option<&str>) -> Self {
        Self(segment.map(str::to_string))
    }
}

impl From<Option<String>> for PathSegment {
    fn from(segment: Option<String>) -> Self {
        Self(segment)
    }
}

impl From<Option<&String>> for PathSegment {
    fn from(segment: Option<&String>) -> Self {
        Self(segment.cloned())
    }
}

/// Ordered query parameters.
///
/// Names keep their first-insertion order; values appended under an existing
/// name are merged behind the earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append values under `name`, merging with any existing values.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        let values = value.into().into_values();
        if values.is_empty() {
            return;
        }

        let name = name.into();
        match self.params.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => existing.extend(values),
            None => self.params.push((name, values)),
        }
    }

    /// Replace all values under `name`. An absent value removes the parameter.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        let name = name.into();
        self.params.retain(|(existing, _)| *existing != name);
        self.append(name, value);
    }

    /// Get the values stored under `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.params
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterate over `(name, value)` pairs in wire order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().flat_map(|(name, values)| {
            values.iter().map(move |value| (name.as_str(), value.as_str()))
        })
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if no parameter will be emitted.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Builds a request URL from a base, path segments and query parameters.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: Url,
    segments: Vec<String>,
    query: QueryParams,
}

impl UrlBuilder {
    /// Start from a base URL. Any path on the base is kept as a prefix.
    pub fn new(base: Url) -> Self {
        Self {
            base,
            segments: Vec::new(),
            query: QueryParams::new(),
        }
    }

    /// Append the pieces of a `/`-separated path template.
    pub fn uri(mut self, path: &str) -> Self {
        self.segments.extend(
            path.split('/')
                .filter(|piece| !piece.is_empty())
                .map(str::to_string),
        );
        self
    }

    /// Append one path segment. Absent and empty segments are skipped; the
    /// segment is percent-encoded on its own, so `/` inside it is escaped.
    pub fn segment<S: AsRef<str>>(mut self, segment: Option<S>) -> Self {
        if let Some(segment) = segment {
            let segment = segment.as_ref();
            if !segment.is_empty() {
                self.segments.push(segment.to_string());
            }
        }
        self
    }

    /// Append a sequence of optional path segments.
    pub fn segments<I, S>(self, segments: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        segments
            .into_iter()
            .fold(self, |builder, segment| builder.segment(segment))
    }

    /// Append a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.append(name, value);
        self
    }

    /// Replace the query parameters.
    pub fn query_params(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Assemble the final URL.
    pub fn build(self) -> Result<Url, UrlError> {
        let mut url = self.base;
        if url.cannot_be_a_base() {
            return Err(UrlError::CannotBeABase(url.to_string()));
        }
        if let Some(dots) = self.segments.iter().find(|s| matches!(s.as_str(), "." | "..")) {
            return Err(UrlError::DotSegment(dots.clone()));
        }

        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for segment in &self.segments {
                path.push(segment);
            }
        }

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in self.query.pairs() {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://idp.example.com").unwrap()
    }

    #[test]
    fn test_segments_joined() {
        let url = UrlBuilder::new(base())
            .segments([Some("api"), Some("user"), Some("abc-123")])
            .build()
            .unwrap();
        assert_eq!(url.as_str(), "https://idp.example.com/api/user/abc-123");
    }

    #[test]
    fn test_absent_segments_skipped() {
        let url = UrlBuilder::new(base())
            .uri("/api/application")
            .segment(Some("app-1"))
            .segment(None::<&str>)
            .segment(Some(""))
            .segment(Some("role"))
            .segment(None::<&str>)
            .build()
            .unwrap();
        assert_eq!(url.as_str(), "https://idp.example.com/api/application/app-1/role");
        assert!(!url.path().contains("//"));
        assert!(!url.path().ends_with('/'));
    }

    #[test]
    fn test_segment_is_encoded_independently() {
        let url = UrlBuilder::new(base())
            .uri("/api/user")
            .segment(Some("a b/c"))
            .build()
            .unwrap();
        assert_eq!(url.path(), "/api/user/a%20b%2Fc");
    }

    #[test]
    fn test_dot_segments_rejected() {
        for id in [".", ".."] {
            let err = UrlBuilder::new(base())
                .uri("/api/user")
                .segment(Some(id))
                .build()
                .unwrap_err();
            assert!(matches!(err, UrlError::DotSegment(ref s) if s == id));
        }

        // Dots inside a longer segment are ordinary characters
        let url = UrlBuilder::new(base())
            .uri("/api/user")
            .segment(Some("..."))
            .segment(Some("a.b"))
            .build()
            .unwrap();
        assert_eq!(url.path(), "/api/user/.../a.b");
    }

    #[test]
    fn test_base_path_prefix_kept() {
        let with_slash = Url::parse("https://idp.example.com/passport/").unwrap();
        let url = UrlBuilder::new(with_slash).uri("/api/login").build().unwrap();
        assert_eq!(url.as_str(), "https://idp.example.com/passport/api/login");

        let without_slash = Url::parse("https://idp.example.com/passport").unwrap();
        let url = UrlBuilder::new(without_slash).uri("api/login").build().unwrap();
        assert_eq!(url.as_str(), "https://idp.example.com/passport/api/login");
    }

    #[test]
    fn test_multi_value_query_preserves_order() {
        let url = UrlBuilder::new(base())
            .uri("/api/user/bulk")
            .query("userId", vec!["u1", "u2"])
            .query("hardDelete", None::<bool>)
            .build()
            .unwrap();
        assert_eq!(url.query(), Some("userId=u1&userId=u2"));
    }

    #[test]
    fn test_null_query_never_emitted() {
        let url = UrlBuilder::new(base())
            .uri("/api/logout")
            .query("refreshToken", None::<String>)
            .query("global", false)
            .build()
            .unwrap();
        assert_eq!(url.query(), Some("global=false"));
        assert!(!url.as_str().contains("refreshToken"));
    }

    #[test]
    fn test_no_query_no_question_mark() {
        let url = UrlBuilder::new(base())
            .uri("/api/application")
            .query("inactive", None::<bool>)
            .build()
            .unwrap();
        assert_eq!(url.query(), None);
        assert!(!url.as_str().contains('?'));
    }

    #[test]
    fn test_query_merge_appends() {
        let mut params = QueryParams::new();
        params.append("ids", "a");
        params.append("start", 10i64);
        params.append("ids", ["b", "c"]);
        params.append("ids", Some(""));

        let pairs: Vec<_> = params.pairs().collect();
        assert_eq!(
            pairs,
            vec![("ids", "a"), ("ids", "b"), ("ids", "c"), ("start", "10")]
        );
    }

    #[test]
    fn test_query_set_replaces() {
        let mut params = QueryParams::new();
        params.append("limit", 10u32);
        params.set("limit", 25u32);
        assert_eq!(params.get("limit"), Some(&["25".to_string()][..]));

        params.set("limit", None::<u32>);
        assert!(params.get("limit").is_none());
        assert!(params.is_empty());
    }

    #[test]
    fn test_query_value_conversions() {
        assert_eq!(QueryValue::from(true), QueryValue::One("true".to_string()));
        assert_eq!(QueryValue::from(None::<&str>), QueryValue::Absent);
        assert!(QueryValue::from(Vec::<String>::new()).is_absent());
        assert!(QueryValue::from("").is_absent());

        let ids: &[&str] = &["x", "", "y"];
        assert_eq!(
            QueryValue::from(ids).into_values(),
            vec!["x".to_string(), "y".to_string()]
        );
    }

    #[test]
    fn test_cannot_be_a_base() {
        let url = Url::parse("mailto:admin@example.com").unwrap();
        let err = UrlBuilder::new(url).uri("/api").build().unwrap_err();
        assert!(matches!(err, UrlError::CannotBeABase(_)));
    }
}
