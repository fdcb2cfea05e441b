use phf::{phf_map, phf_set};

/// Compile-time month lookup.
/// Keys are lowercase full or abbreviated English month names.
pub static MONTHS: phf::Map<&'static str, &'static str> = phf_map! {
    "jan" => "01",
    "january" => "01",
    "feb" => "02",
    "february" => "02",
    "mar" => "03",
    "march" => "03",
    "apr" => "04",
    "april" => "04",
    "may" => "05",
    "jun" => "06",
    "june" => "06",
    "jul" => "07",
    "july" => "07",
    "aug" => "08",
    "august" => "08",
    "sep" => "09",
    "september" => "09",
    "oct" => "10",
    "october" => "10",
    "nov" => "11",
    "november" => "11",
    "dec" => "12",
    "december" => "12",
};

/// Source/quality markers that never make it into a renamed title.
pub static BANNED: phf::Set<&'static str> = phf_set! {
    "truepdf",
};

/// Two-digit month number for a lowercase month token.
pub fn month_number(token: &str) -> Option<&'static str> {
    MONTHS.get(token).copied()
}

pub fn is_month(token: &str) -> bool {
    MONTHS.contains_key(token)
}

pub fn is_banned(token: &str) -> bool {
    BANNED.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_and_short_names_agree() {
        let pairs = [
            ("jan", "january"),
            ("feb", "february"),
            ("mar", "march"),
            ("apr", "april"),
            ("jun", "june"),
            ("jul", "july"),
            ("aug", "august"),
            ("sep", "september"),
            ("oct", "october"),
            ("nov", "november"),
            ("dec", "december"),
        ];
        for (short, full) in pairs {
            assert_eq!(month_number(short), month_number(full), "{short} vs {full}");
        }
        assert_eq!(month_number("may"), Some("05"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Callers lowercase before lookup.
        assert!(is_month("august"));
        assert!(!is_month("August"));
        assert!(!is_month("sept"));
    }

    #[test]
    fn test_banned() {
        assert!(is_banned("truepdf"));
        assert!(!is_banned("economist"));
    }
}
