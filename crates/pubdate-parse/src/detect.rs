use regex::Regex;
use std::sync::LazyLock;

/// A date as this tool writes it: 2017-04-01.
static RE_CANONICAL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{3}-[01][0-9]-[0123][0-9]$").unwrap());

pub fn is_canonical_date(token: &str) -> bool {
    RE_CANONICAL_DATE.is_match(token)
}

/// Whether a name already carries a canonical date between its dots.
///
/// Only a full `YYYY-MM-DD` token counts. A bare year elsewhere in the name
/// ("hello.2016.pdf") does not, so such names stay eligible for parsing.
pub fn is_already_normalized(name: &str) -> bool {
    name.split('.').any(is_canonical_date)
}
