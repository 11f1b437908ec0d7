use std::collections::BTreeMap;
use url::form_urlencoded;
use url::{ParseError, Url};

/// Query parameters whose values never show up in logs.
pub const REDACTED_PARAMS: [&str; 3] = ["apiKey", "api_key", "key"];

/// Encode `pairs` as a query string with the keys sorted, so two logically
/// identical parameter sets always produce the same string no matter the order
/// they were collected in. Later duplicates of a key win.
pub fn canonical_query<K, V, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let sorted: BTreeMap<String, String> = pairs
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect();

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(sorted.iter())
        .finish()
}

/// Join `path` onto `base` and append `pairs` as query parameters.
///
/// A missing trailing slash on `base` is tolerated, so `http://host/api` and
/// `http://host/api/` both resolve `recipes/1` to `http://host/api/recipes/1`.
pub fn endpoint<K, V, I>(base: &Url, path: &str, pairs: I) -> Result<Url, ParseError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let mut url = base.join(path.trim_start_matches('/'))?;
    {
        let mut query = url.query_pairs_mut();
        for (k, v) in pairs {
            query.append_pair(k.as_ref(), v.as_ref());
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(url)
}

/// Render `url` with the values of [`REDACTED_PARAMS`] masked.
pub fn redact(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if REDACTED_PARAMS.contains(&k.as_ref()) {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
