use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

// ============================================================================
// Category tree
// ============================================================================

/// Categories keyed by code. A `BTreeMap` recovers the sibling order the wire
/// format loses: catalog codes encode depth by length, so lexicographic order
/// is the workbook order within one level.
pub type CategoryMap = BTreeMap<String, CategoryNode>;

/// One node of the catalog category tree, nested as produced by the offline
/// generator. `medicine_count` already includes all descendants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub parent_code: Option<String>,
    #[serde(default)]
    pub subcategories: CategoryMap,
    #[serde(default)]
    pub medicine_count: usize,
}

/// Recursive descent lookup of a category by code.
pub fn find_category<'a>(tree: &'a CategoryMap, code: &str) -> Option<&'a CategoryNode> {
    if let Some(node) = tree.get(code) {
        return Some(node);
    }
    for node in tree.values() {
        if let Some(found) = find_category(&node.subcategories, code) {
            return Some(found);
        }
    }
    None
}

/// The code closure of a category: the code itself plus every descendant code.
///
/// An unknown code yields a set containing only itself, so a stale selection
/// filters down to an empty list instead of failing.
pub fn descendant_codes(tree: &CategoryMap, code: &str) -> HashSet<String> {
    let mut codes = HashSet::new();
    match find_category(tree, code) {
        Some(node) => collect_codes(node, &mut codes),
        None => {
            codes.insert(code.to_string());
        }
    }
    codes
}

fn collect_codes(node: &CategoryNode, out: &mut HashSet<String>) {
    out.insert(node.code.clone());
    for child in node.subcategories.values() {
        collect_codes(child, out);
    }
}

/// Every code present anywhere in the tree.
pub fn all_codes(tree: &CategoryMap) -> HashSet<String> {
    let mut codes = HashSet::new();
    for node in tree.values() {
        collect_codes(node, &mut codes);
    }
    codes
}

/// Filter the tree by a name/code substring. A node is kept when it matches
/// or when any descendant matches; kept nodes carry only their kept children.
pub fn search_tree(tree: &CategoryMap, query: &str) -> CategoryMap {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return tree.clone();
    }
    let mut out = CategoryMap::new();
    for (code, node) in tree {
        let matches =
            node.name.to_lowercase().contains(&q) || node.code.to_lowercase().contains(&q);
        let kept_children = search_tree(&node.subcategories, query);
        if matches || !kept_children.is_empty() {
            let mut kept = node.clone();
            kept.subcategories = kept_children;
            out.insert(code.clone(), kept);
        }
    }
    out
}

/// Resolve an ancestor-code chain to the nodes that still exist in the tree.
/// Used for the "一级分类 > 二级分类" breadcrumb in the detail view.
pub fn category_path<'a>(tree: &'a CategoryMap, codes: &[String]) -> Vec<&'a CategoryNode> {
    codes
        .iter()
        .filter_map(|code| find_category(tree, code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(code: &str, name: &str, count: usize, children: Vec<CategoryNode>) -> CategoryNode {
        let level = code.len() as u32;
        CategoryNode {
            code: code.to_string(),
            name: name.to_string(),
            level,
            parent_code: (level > 1).then(|| code[..code.len() - 1].to_string()),
            subcategories: children.into_iter().map(|c| (c.code.clone(), c)).collect(),
            medicine_count: count,
        }
    }

    /// Two roots, three levels deep, mimicking the ATC-style codes of the
    /// western sheet where code length encodes depth.
    fn fixture() -> CategoryMap {
        let tree = vec![
            node(
                "XA",
                "消化道及代谢方面的药物",
                12,
                vec![
                    node("XA1", "胃肠疾病用药", 8, vec![node("XA1a", "抑酸剂", 5, vec![])]),
                    node("XA2", "助消化药", 4, vec![]),
                ],
            ),
            node("XB", "血液和造血器官药", 3, vec![]),
        ];
        tree.into_iter().map(|n| (n.code.clone(), n)).collect()
    }

    #[test]
    fn find_descends_recursively() {
        let tree = fixture();
        assert_eq!(find_category(&tree, "XA").unwrap().name, "消化道及代谢方面的药物");
        assert_eq!(find_category(&tree, "XA1a").unwrap().medicine_count, 5);
        assert!(find_category(&tree, "ZZ").is_none());
    }

    #[test]
    fn closure_covers_all_descendants() {
        let tree = fixture();
        let codes = descendant_codes(&tree, "XA");
        assert_eq!(
            codes,
            ["XA", "XA1", "XA1a", "XA2"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        );
    }

    #[test]
    fn closure_of_leaf_is_itself() {
        let tree = fixture();
        let codes = descendant_codes(&tree, "XA1a");
        assert_eq!(codes.len(), 1);
        assert!(codes.contains("XA1a"));
    }

    #[test]
    fn closure_of_unknown_code_is_inert() {
        let tree = fixture();
        let codes = descendant_codes(&tree, "QQ9");
        assert_eq!(codes.len(), 1);
        assert!(codes.contains("QQ9"));
    }

    #[test]
    fn all_codes_walks_every_level() {
        let tree = fixture();
        assert_eq!(all_codes(&tree).len(), 5);
    }

    #[test]
    fn search_keeps_ancestors_of_matches() {
        let tree = fixture();
        let found = search_tree(&tree, "抑酸");
        // XA kept as ancestor, XA2 and XB pruned
        assert_eq!(found.len(), 1);
        let xa = &found["XA"];
        assert_eq!(xa.subcategories.len(), 1);
        assert_eq!(xa.subcategories["XA1"].subcategories["XA1a"].name, "抑酸剂");
    }

    #[test]
    fn search_by_code_matches_too() {
        let tree = fixture();
        let found = search_tree(&tree, "xb");
        assert_eq!(found.len(), 1);
        assert!(found.contains_key("XB"));
    }

    #[test]
    fn empty_query_returns_whole_tree() {
        let tree = fixture();
        assert_eq!(search_tree(&tree, "  "), tree);
    }

    #[test]
    fn path_resolves_known_codes_in_order() {
        let tree = fixture();
        let chain = vec!["XA".to_string(), "XA1".to_string(), "XA1a".to_string()];
        let path = category_path(&tree, &chain);
        let names: Vec<&str> = path.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["消化道及代谢方面的药物", "胃肠疾病用药", "抑酸剂"]);
    }

    #[test]
    fn roots_iterate_in_code_order() {
        let tree = fixture();
        let codes: Vec<&String> = tree.keys().collect();
        assert_eq!(codes, vec!["XA", "XB"]);
    }
}
