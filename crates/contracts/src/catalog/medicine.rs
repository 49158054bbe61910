use crate::catalog::sheet::Sheet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Medicine
// ============================================================================

/// One medicine row of a sheet dataset, read-only after parse.
///
/// `all_category_codes` is the ancestor chain (root first) recorded at
/// extraction time; `category_code` is its last element, the most specific
/// category the row sits under. The optional columns follow the sheet layout:
/// dosage on the plain western sheet, payment standard / validity period on
/// the negotiated and bidding sheets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub sheet: Sheet,
    #[serde(default)]
    pub category_code: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub all_category_codes: Vec<String>,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub payment_standard: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub validity_period: Option<String>,
}

impl Medicine {
    /// Case-insensitive substring match on the name. An empty or whitespace
    /// query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty() || self.name.to_lowercase().contains(&q)
    }
}

/// Filter a sheet's medicine list by category membership and name query.
///
/// `selected` is the descendant-code closure of the selected category
/// (see [`crate::catalog::category::descendant_codes`]); `None` means no
/// category filter. Both filters combine with AND.
pub fn filter_medicines<'a>(
    medicines: &'a [Medicine],
    selected: Option<&HashSet<String>>,
    query: &str,
) -> Vec<&'a Medicine> {
    medicines
        .iter()
        .filter(|m| match selected {
            Some(codes) => m
                .category_code
                .as_deref()
                .map_or(false, |code| codes.contains(code)),
            None => true,
        })
        .filter(|m| m.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn med(id: &str, name: &str, category: &str) -> Medicine {
        Medicine {
            id: id.to_string(),
            name: name.to_string(),
            sheet: Sheet::Western,
            category_code: Some(category.to_string()),
            category_name: Some("测试分类".to_string()),
            all_category_codes: vec![category[..2].to_string(), category.to_string()],
            dosage: Some("口服常释剂型".to_string()),
            payment_standard: vec![],
            note: None,
            validity_period: None,
        }
    }

    fn fixture() -> Vec<Medicine> {
        vec![
            med("西药部分_3", "阿司匹林", "XA1"),
            med("西药部分_4", "阿莫西林", "XA2"),
            med("西药部分_5", "布洛芬", "XB1"),
        ]
    }

    fn closure(codes: &[&str]) -> HashSet<String> {
        codes.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_filters_returns_everything() {
        let meds = fixture();
        assert_eq!(filter_medicines(&meds, None, "").len(), 3);
    }

    #[test]
    fn closure_membership_selects_subtree() {
        let meds = fixture();
        let selected = closure(&["XA", "XA1", "XA2"]);
        let hits = filter_medicines(&meds, Some(&selected), "");
        let ids: Vec<&str> = hits.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["西药部分_3", "西药部分_4"]);
    }

    #[test]
    fn query_and_category_combine_with_and() {
        let meds = fixture();
        let selected = closure(&["XA", "XA1", "XA2"]);
        let hits = filter_medicines(&meds, Some(&selected), "阿莫");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "阿莫西林");
    }

    #[test]
    fn query_is_substring_anywhere() {
        let meds = fixture();
        let hits = filter_medicines(&meds, None, "西林");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "阿莫西林");
    }

    #[test]
    fn whitespace_query_matches_all() {
        let meds = fixture();
        assert_eq!(filter_medicines(&meds, None, "  ").len(), 3);
    }

    #[test]
    fn uncategorized_medicine_never_matches_a_selection() {
        let mut orphan = med("西药部分_9", "维生素C", "XA1");
        orphan.category_code = None;
        orphan.all_category_codes.clear();
        let meds = vec![orphan];
        let selected = closure(&["XA1"]);
        assert!(filter_medicines(&meds, Some(&selected), "").is_empty());
        assert_eq!(filter_medicines(&meds, None, "").len(), 1);
    }

    #[test]
    fn ascii_query_is_case_insensitive() {
        let mut m = med("协议西药_7", "VitB12注射液", "XC1");
        m.sheet = Sheet::NegotiatedWestern;
        let meds = vec![m];
        assert_eq!(filter_medicines(&meds, None, "vitb").len(), 1);
    }
}
