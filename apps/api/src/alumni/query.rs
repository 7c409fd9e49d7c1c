//! Matching rules for the alumni directory search.
//!
//! These predicates are the reference semantics for the directory; the SQL
//! in `PgStore::search_alumni` and `PgStore::alumni_filter_options` mirrors
//! them clause for clause.

use crate::models::alumni::{AlumniFilter, AlumnusRow};

/// Placeholder values the alumni spreadsheet import writes for a missing
/// company. Treated the same as NULL and empty string.
pub const EXCLUDED_COMPANY_VALUES: [&str; 3] = ["nan", "NAN", "NaN"];

/// True when a company value is usable: present, non-empty, and not one of
/// the import placeholders.
pub fn company_is_real(company: Option<&str>) -> bool {
    match company {
        Some(c) => !c.is_empty() && !EXCLUDED_COMPANY_VALUES.contains(&c),
        None => false,
    }
}

/// Escapes `%`, `_`, and `\` in a search term so the ILIKE pattern built
/// from it matches the term literally, the same substring semantics as
/// `matches`. Backslash is Postgres's default LIKE escape character, so
/// no ESCAPE clause is needed.
pub fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Blank query parameters count as unset, so `?company=` behaves like no
/// company filter at all.
pub fn normalize(filter: AlumniFilter) -> AlumniFilter {
    AlumniFilter {
        year: filter.year,
        company: filter.company.filter(|c| !c.trim().is_empty()),
        search: filter.search.filter(|s| !s.trim().is_empty()),
    }
}

/// Row predicate: year exact when set; company exact when set, otherwise
/// placeholder exclusion; free-text term matched case-insensitively against
/// name and email.
pub fn matches(filter: &AlumniFilter, row: &AlumnusRow) -> bool {
    if let Some(year) = filter.year {
        if row.year_of_passing != Some(year) {
            return false;
        }
    }

    match &filter.company {
        Some(company) => {
            if row.company.as_deref() != Some(company.as_str()) {
                return false;
            }
        }
        None => {
            if !company_is_real(row.company.as_deref()) {
                return false;
            }
        }
    }

    if let Some(term) = &filter.search {
        let term = term.to_lowercase();
        if !row.name.to_lowercase().contains(&term) && !row.email.to_lowercase().contains(&term) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn make_alumnus(name: &str, company: Option<&str>, year: Option<i32>) -> AlumnusRow {
        AlumnusRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            year_of_passing: year,
            company: company.map(str::to_string),
            linkedin: None,
        }
    }

    #[test]
    fn test_unset_company_filter_excludes_placeholders() {
        let filter = AlumniFilter::default();
        for company in [None, Some(""), Some("nan"), Some("NAN"), Some("NaN")] {
            let row = make_alumnus("Asha Rao", company, Some(2020));
            assert!(
                !matches(&filter, &row),
                "company {company:?} must be excluded when no company filter is set"
            );
        }
        let row = make_alumnus("Asha Rao", Some("Acme"), Some(2020));
        assert!(matches(&filter, &row));
    }

    #[test]
    fn test_explicit_company_filter_is_exact() {
        let filter = AlumniFilter {
            company: Some("Acme".to_string()),
            ..Default::default()
        };
        assert!(matches(
            &filter,
            &make_alumnus("Asha Rao", Some("Acme"), None)
        ));
        assert!(!matches(
            &filter,
            &make_alumnus("Ben Iyer", Some("Acme Corp"), None)
        ));
    }

    #[test]
    fn test_year_filter() {
        let filter = AlumniFilter {
            year: Some(2019),
            ..Default::default()
        };
        assert!(matches(
            &filter,
            &make_alumnus("Asha Rao", Some("Acme"), Some(2019))
        ));
        assert!(!matches(
            &filter,
            &make_alumnus("Ben Iyer", Some("Acme"), Some(2020))
        ));
        assert!(!matches(
            &filter,
            &make_alumnus("Cara D", Some("Acme"), None)
        ));
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_email() {
        let filter = AlumniFilter {
            search: Some("RAO".to_string()),
            ..Default::default()
        };
        assert!(matches(
            &filter,
            &make_alumnus("Asha Rao", Some("Acme"), None)
        ));

        let by_email = AlumniFilter {
            search: Some("ben.iyer@".to_string()),
            ..Default::default()
        };
        assert!(matches(
            &by_email,
            &make_alumnus("Ben Iyer", Some("Acme"), None)
        ));

        let no_match = AlumniFilter {
            search: Some("zzz".to_string()),
            ..Default::default()
        };
        assert!(!matches(
            &no_match,
            &make_alumnus("Asha Rao", Some("Acme"), None)
        ));
    }

    #[test]
    fn test_search_underscore_matches_literally() {
        let filter = AlumniFilter {
            search: Some("j_smith".to_string()),
            ..Default::default()
        };
        assert!(matches(
            &filter,
            &make_alumnus("J_smith", Some("Acme"), None)
        ));
        assert!(
            !matches(&filter, &make_alumnus("Jxsmith", Some("Acme"), None)),
            "an underscore in the term is not a single-character wildcard"
        );
    }

    #[test]
    fn test_escape_like_neutralizes_pattern_metacharacters() {
        assert_eq!(escape_like("dev_ops"), "dev\\_ops");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("plain term"), "plain term");
    }

    #[test]
    fn test_normalize_drops_blank_parameters() {
        let normalized = normalize(AlumniFilter {
            year: Some(2020),
            company: Some("   ".to_string()),
            search: Some("".to_string()),
        });
        assert_eq!(normalized.year, Some(2020));
        assert_eq!(normalized.company, None);
        assert_eq!(normalized.search, None);
    }
}
