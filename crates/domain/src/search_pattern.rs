/// Characters that mark a term as already qualified.
const QUALIFIER_CHARS: [char; 3] = ['*', '.', '?'];

/// Returns true for bare host labels such as `ns1`, as opposed to
/// `ns1.example.com.`, `ns1*` or `ns?`. The empty string counts as bare.
pub fn is_bare_hostname(term: &str) -> bool {
    !term.contains(QUALIFIER_CHARS)
}

/// Turns a user search term into a search-data pattern.
///
/// Bare host labels match anywhere in a name (`ns1` -> `*ns1*`). Terms that
/// already carry a dot or a wildcard only gain a suffix wildcard
/// (`ns1.example` -> `ns1.example*`).
pub fn normalize(term: &str) -> String {
    if is_bare_hostname(term) {
        format!("*{term}*")
    } else {
        format!("{term}*")
    }
}
