use percent_encoding::{percent_encode, AsciiSet, CONTROLS};

/// https://url.spec.whatwg.org/#fragment-percent-encode-set
const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// https://url.spec.whatwg.org/#path-percent-encode-set
const PATH: &AsciiSet = &FRAGMENT.add(b'#').add(b'?').add(b'{').add(b'}');

/// https://url.spec.whatwg.org/#userinfo-percent-encode-set
const USERINFO: &AsciiSet = &PATH
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// Separators which would split a query value into several parameters.
const QUERY_VALUE: &AsciiSet = &USERINFO.add(b'&').add(b'+').add(b'%');

/// Percent-encode single query component (key or value).
pub fn url_encode(data: &[u8]) -> String {
    percent_encode(data, QUERY_VALUE).to_string()
}

/// Build query string from key / value pairs.
///
/// Pairs are sorted by key, so the same parameters always produce the same
/// query string.
pub fn encode_query<'a, I>(pairs: I) -> Option<String>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut pairs = pairs.into_iter().collect::<Vec<_>>();
    if pairs.is_empty() {
        return None;
    }
    pairs.sort();

    Some(
        pairs
            .into_iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    url_encode(key.as_bytes()),
                    url_encode(value.as_bytes())
                )
            })
            .collect::<Vec<String>>()
            .join("&"),
    )
}
