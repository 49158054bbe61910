use crate::catalog::category::CategoryMap;
use crate::catalog::medicine::Medicine;
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ============================================================================
// Sheet dataset
// ============================================================================

/// One pre-generated dataset document: the nested category tree plus the flat
/// medicine list of a single sheet. The files are produced offline from the
/// catalog workbook and served as static assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetData {
    #[serde(default)]
    pub categories: CategoryMap,
    #[serde(default)]
    pub medicines: Vec<Medicine>,
}

impl SheetData {
    /// Parse a dataset document, naming the sheet in the error so a broken
    /// file can be told apart from the other four fetches.
    pub fn from_json(sheet_label: &str, text: &str) -> anyhow::Result<SheetData> {
        serde_json::from_str(text)
            .with_context(|| format!("数据文件解析失败: {}", sheet_label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::category::{descendant_codes, find_category};
    use crate::catalog::medicine::filter_medicines;
    use crate::catalog::sheet::Sheet;
    use serde_json::json;

    /// A trimmed-down but structurally faithful copy of what the offline
    /// generator emits for the negotiated western sheet.
    fn sample() -> serde_json::Value {
        json!({
            "categories": {
                "XJ": {
                    "code": "XJ",
                    "name": "抗感染药物",
                    "level": 1,
                    "parent_code": null,
                    "subcategories": {
                        "XJ1": {
                            "code": "XJ1",
                            "name": "全身用抗细菌药",
                            "level": 2,
                            "parent_code": "XJ",
                            "subcategories": {},
                            "medicine_count": 1
                        }
                    },
                    "medicine_count": 2
                }
            },
            "medicines": [
                {
                    "id": "协议西药_12",
                    "name": "注射用头孢他啶",
                    "sheet": "协议西药",
                    "category_code": "XJ1",
                    "category_name": "全身用抗细菌药",
                    "all_category_codes": ["XJ", "XJ1"],
                    "payment_standard": ["支付标准: 36.8元(1g)", "2025年12月31日前"],
                    "note": "限重症感染",
                    "validity_period": "2025-12-31"
                },
                {
                    "id": "协议西药_13",
                    "name": "利奈唑胺片",
                    "sheet": "协议西药",
                    "category_code": "XJ",
                    "category_name": "抗感染药物",
                    "all_category_codes": ["XJ"],
                    "payment_standard": ["支付标准: 58元(600mg)"],
                    "note": ""
                }
            ]
        })
    }

    #[test]
    fn parses_generator_output() {
        let data = SheetData::from_json("协议西药", &sample().to_string()).unwrap();
        assert_eq!(data.medicines.len(), 2);
        assert_eq!(data.medicines[0].sheet, Sheet::NegotiatedWestern);
        assert_eq!(data.medicines[0].payment_standard.len(), 2);
        assert_eq!(data.medicines[0].dosage, None);
        assert_eq!(
            find_category(&data.categories, "XJ1").unwrap().name,
            "全身用抗细菌药"
        );
    }

    #[test]
    fn parsed_tree_and_list_compose() {
        let data = SheetData::from_json("协议西药", &sample().to_string()).unwrap();
        let selected = descendant_codes(&data.categories, "XJ");
        let hits = filter_medicines(&data.medicines, Some(&selected), "");
        assert_eq!(hits.len(), 2);
        let narrow = descendant_codes(&data.categories, "XJ1");
        let hits = filter_medicines(&data.medicines, Some(&narrow), "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "注射用头孢他啶");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let data = SheetData::from_json("西药部分", "{}").unwrap();
        assert!(data.categories.is_empty());
        assert!(data.medicines.is_empty());
    }

    #[test]
    fn parse_error_names_the_sheet() {
        let err = SheetData::from_json("中成药部分", "not json").unwrap_err();
        assert!(format!("{err:#}").contains("中成药部分"));
    }
}
