//! Free-text admitting-department mapping onto the canonical department set.

use crate::config::DepartmentRule;
use crate::models::Department;

/// Map a free-text department string to a canonical department.
///
/// The input is trimmed and upper-cased, then checked against the ordered
/// rule table; the first entry with any matching substring wins. Missing or
/// unmatched input maps to `Others`, so the mapping is total.
#[must_use]
pub fn map_department(input: Option<&str>, rules: &[DepartmentRule]) -> Department {
    let normalized = input.unwrap_or("").trim().to_uppercase();
    for rule in rules {
        if rule
            .patterns
            .iter()
            .any(|pattern| normalized.contains(&pattern.trim().to_uppercase()))
        {
            return rule.department;
        }
    }
    Department::Others
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;

    #[test]
    fn test_substring_match() {
        let config = RuleConfig::default();
        assert_eq!(
            map_department(Some("CARDIOLOGY DEPT"), &config.departments),
            Department::Cardiology
        );
        assert_eq!(
            map_department(Some("senior orthopaedics consultant"), &config.departments),
            Department::Orthopedics
        );
        assert_eq!(
            map_department(Some("OBSTETRICS & GYNAECOLOGY"), &config.departments),
            Department::Gynecology
        );
    }

    #[test]
    fn test_first_entry_wins() {
        // Table order decides when substrings from several entries appear.
        let config = RuleConfig::default();
        assert_eq!(
            map_department(
                Some("CARDIOLOGY / GENERAL SURGEON"),
                &config.departments
            ),
            Department::Cardiology
        );
    }

    #[test]
    fn test_default_is_others() {
        let config = RuleConfig::default();
        assert_eq!(
            map_department(Some("DERMATOLOGY"), &config.departments),
            Department::Others
        );
        assert_eq!(map_department(Some(""), &config.departments), Department::Others);
        assert_eq!(map_department(None, &config.departments), Department::Others);
    }
}
