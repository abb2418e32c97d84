use crate::compat::{String, ToString, Vec, format};
use crate::encoding::{form_decode, form_encode_into};

/// Deepest bracket nesting accepted when decoding (`a[1]...[64]`).
/// Pairs whose key nests deeper are dropped.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A decoded query value: a plain string, or a nested mapping built from
/// bracketed keys such as `filter[color]=red`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Scalar(String),
    Map(QueryParams),
}

impl QueryValue {
    /// Borrow the value if it is a scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Map(_) => None,
        }
    }

    /// Borrow the value if it is a nested mapping
    pub fn as_map(&self) -> Option<&QueryParams> {
        match self {
            Self::Map(map) => Some(map),
            Self::Scalar(_) => None,
        }
    }

    /// Merge `incoming` into `self`.
    ///
    /// Two mappings merge key by key, recursively. In every other case the
    /// incoming value replaces the current one.
    pub fn merge(&mut self, incoming: QueryValue) {
        match (self, incoming) {
            (Self::Map(current), Self::Map(incoming)) => current.merge_all(incoming),
            (slot, incoming) => *slot = incoming,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

impl From<QueryParams> for QueryValue {
    fn from(map: QueryParams) -> Self {
        Self::Map(map)
    }
}

/// Decoded query parameters with unique keys, kept in insertion order.
///
/// Parsing follows `application/x-www-form-urlencoded` with bracket
/// nesting: a repeated key keeps its last value, `a[b]=1` nests, and
/// `a[]=1&a[]=2` appends under the next free integer index. Keys nested
/// deeper than [`MAX_NESTING_DEPTH`] are dropped.
///
/// Lookups scan the list, so decoding `n` distinct keys costs O(n²).
/// Fine for URL-sized queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from an encoded query string (with or without leading `?`)
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::new();

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = form_decode(key);
            if key.is_empty() {
                continue;
            }
            let value = form_decode(value).into_owned();

            match split_bracket_key(&key) {
                KeyShape::Plain => {
                    params.insert(key.into_owned(), QueryValue::Scalar(value));
                }
                KeyShape::Nested(path) => params.insert_path(&path, value),
                KeyShape::TooDeep => {
                    tracing::trace!(len = key.len(), "dropping over-nested query key");
                }
            }
        }

        params
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.position(key).map(|i| &self.params[i].1)
    }

    /// Get the value under `key` if it is a scalar.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(QueryValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Set `key` to `value`, replacing any previous value in place.
    /// Returns the replaced value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<QueryValue>,
    ) -> Option<QueryValue> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(core::mem::replace(&mut self.params[i].1, value)),
            None => {
                self.params.push((key, value));
                None
            }
        }
    }

    /// Deep-merge `value` under `key` (see [`QueryValue::merge`]).
    pub fn merge(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => self.params[i].1.merge(value),
            None => self.params.push((key, value)),
        }
    }

    /// Deep-merge every entry of `other`, in its order.
    pub fn merge_all(&mut self, other: QueryParams) {
        for (key, value) in other.params {
            self.merge(key, value);
        }
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.position(key).map(|i| self.params.remove(i).1)
    }

    /// Sort top-level parameters by key. Nested mappings keep their order.
    pub fn sort(&mut self) {
        self.params.sort_by(|a, b| a.0.cmp(&b.0));
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    /// Encode to a query string without leading `?`.
    /// Nested keys are written as `a%5Bb%5D=v`.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.encode_into(&mut out, None);
        out
    }

    fn encode_into(&self, out: &mut String, prefix: Option<&str>) {
        for (key, value) in &self.params {
            let full_key = match prefix {
                Some(prefix) => format!("{prefix}[{key}]"),
                None => key.clone(),
            };
            match value {
                QueryValue::Scalar(value) => {
                    if !out.is_empty() {
                        out.push('&');
                    }
                    form_encode_into(out, &full_key);
                    out.push('=');
                    form_encode_into(out, value);
                }
                QueryValue::Map(map) => map.encode_into(out, Some(&full_key)),
            }
        }
    }

    /// Linear scan over the stored pairs.
    fn position(&self, key: &str) -> Option<usize> {
        self.params.iter().position(|(k, _)| k == key)
    }

    /// Next free integer key for an `a[]` append.
    fn next_index(&self) -> String {
        self.params
            .iter()
            .filter_map(|(k, _)| k.parse::<usize>().ok())
            .max()
            .map_or(0, |max| max + 1)
            .to_string()
    }

    /// Store `value` under the key path `keys` (non-empty), creating
    /// mappings as needed. A scalar in the way is replaced by a mapping.
    fn insert_path(&mut self, keys: &[String], value: String) {
        let Some((first, rest)) = keys.split_first() else {
            return;
        };
        let key = if first.is_empty() {
            self.next_index()
        } else {
            first.clone()
        };

        if rest.is_empty() {
            self.insert(key, QueryValue::Scalar(value));
            return;
        }

        let index = match self.position(&key) {
            Some(i) => i,
            None => {
                self.params.push((key, QueryValue::Map(Self::new())));
                self.params.len() - 1
            }
        };
        let slot = &mut self.params[index].1;
        if matches!(slot, QueryValue::Scalar(_)) {
            *slot = QueryValue::Map(Self::new());
        }
        if let QueryValue::Map(child) = slot {
            child.insert_path(rest, value);
        }
    }
}

/// How a decoded query key is stored.
#[derive(Debug, PartialEq, Eq)]
enum KeyShape {
    /// No brackets, or malformed ones: stored literally
    Plain,
    /// `base[k1][k2]` as `["base", "k1", "k2"]`
    Nested(Vec<String>),
    /// More than [`MAX_NESTING_DEPTH`] bracket levels
    TooDeep,
}

/// Split `base[k1][k2]` into `["base", "k1", "k2"]`.
fn split_bracket_key(key: &str) -> KeyShape {
    let Some(open) = key.find('[').filter(|&open| open > 0) else {
        return KeyShape::Plain;
    };

    let mut path = Vec::new();
    path.push(key[..open].to_string());

    let mut rest = &key[open..];
    while !rest.is_empty() {
        let Some(inner) = rest.strip_prefix('[') else {
            return KeyShape::Plain;
        };
        let Some(close) = inner.find(']') else {
            return KeyShape::Plain;
        };
        if path.len() > MAX_NESTING_DEPTH {
            return KeyShape::TooDeep;
        }
        path.push(inner[..close].to_string());
        rest = &inner[close + 1..];
    }

    KeyShape::Nested(path)
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for QueryParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
