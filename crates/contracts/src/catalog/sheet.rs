use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Sheet
// ============================================================================

/// The five sheets of the reimbursement drug catalog workbook. Every dataset
/// file, every medicine record and the UI tabs are keyed by one of these.
///
/// Serialized as the original Chinese sheet name, which is also the dataset
/// file stem produced by the offline generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sheet {
    /// 西药部分
    #[serde(rename = "西药部分")]
    Western,
    /// 中成药部分
    #[serde(rename = "中成药部分")]
    ChinesePatent,
    /// 协议西药
    #[serde(rename = "协议西药")]
    NegotiatedWestern,
    /// 协议中成药
    #[serde(rename = "协议中成药")]
    NegotiatedChinesePatent,
    /// 竞价药品部分
    #[serde(rename = "竞价药品部分")]
    Bidding,
}

static BY_LABEL: Lazy<HashMap<&'static str, Sheet>> = Lazy::new(|| {
    Sheet::ALL.iter().map(|s| (s.label(), *s)).collect()
});

impl Sheet {
    /// Display order of the tabs, matching the workbook sheet order.
    pub const ALL: [Sheet; 5] = [
        Sheet::Western,
        Sheet::ChinesePatent,
        Sheet::NegotiatedWestern,
        Sheet::NegotiatedChinesePatent,
        Sheet::Bidding,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sheet::Western => "西药部分",
            Sheet::ChinesePatent => "中成药部分",
            Sheet::NegotiatedWestern => "协议西药",
            Sheet::NegotiatedChinesePatent => "协议中成药",
            Sheet::Bidding => "竞价药品部分",
        }
    }

    /// Relative URL of the pre-generated dataset for this sheet.
    pub fn data_path(&self) -> String {
        format!("data/{}.json", self.label())
    }

    /// Only the plain western sheet carries a dosage column.
    pub fn has_dosage(&self) -> bool {
        matches!(self, Sheet::Western)
    }

    /// Negotiated and bidding sheets carry payment standard and validity
    /// period columns instead of dosage.
    pub fn has_payment_standard(&self) -> bool {
        matches!(
            self,
            Sheet::NegotiatedWestern | Sheet::NegotiatedChinesePatent | Sheet::Bidding
        )
    }

    pub fn from_label(label: &str) -> Option<Sheet> {
        BY_LABEL.get(label).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trip() {
        for sheet in Sheet::ALL {
            assert_eq!(Sheet::from_label(sheet.label()), Some(sheet));
        }
        assert_eq!(Sheet::from_label("不存在的部分"), None);
    }

    #[test]
    fn serde_uses_chinese_names() {
        let json = serde_json::to_string(&Sheet::Western).unwrap();
        assert_eq!(json, "\"西药部分\"");
        let back: Sheet = serde_json::from_str("\"竞价药品部分\"").unwrap();
        assert_eq!(back, Sheet::Bidding);
    }

    #[test]
    fn column_layout_per_sheet() {
        assert!(Sheet::Western.has_dosage());
        assert!(!Sheet::Western.has_payment_standard());
        assert!(!Sheet::ChinesePatent.has_dosage());
        assert!(!Sheet::ChinesePatent.has_payment_standard());
        assert!(Sheet::NegotiatedWestern.has_payment_standard());
        assert!(Sheet::NegotiatedChinesePatent.has_payment_standard());
        assert!(Sheet::Bidding.has_payment_standard());
    }

    #[test]
    fn data_path_points_at_dataset() {
        assert_eq!(Sheet::ChinesePatent.data_path(), "data/中成药部分.json");
    }
}
