//! `name=value` lookup inside delimited lists (query strings, `Cookie` headers).

/// How [`Request::param`](super::Request::param) and
/// [`Request::cookie`](super::Request::cookie) locate a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// Split the list on its delimiter and compare whole keys. `id` never matches `valid=1`.
    #[default]
    Exact,
    /// Take the first textual occurrence of the name anywhere in the list, skip one byte for
    /// the `=`, and read up to the next delimiter. Matches the behaviour of older firmware
    /// where `id` also matches inside `valid=1`; only use it for compatibility.
    Substring,
}

/// Find the value for `name` in `list`, where pairs are separated by `delimiter`.
///
/// A pair without `=` counts as a key with an empty value. Spaces around each pair are
/// ignored, so `a=1; b=2` and `a=1;b=2` behave the same.
pub(crate) fn find<'a>(
    list: &'a str,
    name: &str,
    delimiter: char,
    mode: LookupMode,
) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }
    match mode {
        LookupMode::Exact => list.split(delimiter).find_map(|pair| {
            let pair = pair.trim_matches(' ');
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == name).then_some(value)
        }),
        LookupMode::Substring => {
            let start = list.find(name)?;
            let rest = list.get(start + name.len() + 1..).unwrap_or("");
            let end = rest.find(delimiter).unwrap_or(rest.len());
            Some(&rest[..end])
        }
    }
}

/// Whether `name` is present in `list` under the given mode.
pub(crate) fn contains(list: &str, name: &str, delimiter: char, mode: LookupMode) -> bool {
    match mode {
        LookupMode::Exact => find(list, name, delimiter, mode).is_some(),
        LookupMode::Substring => !name.is_empty() && list.contains(name),
    }
}
