//! Shared contracts for the drug catalog lookup tool.
//!
//! Everything here is plain data plus pure functions: the wire types for the
//! pre-generated catalog datasets and the tree/filter/pagination logic the
//! frontend runs on every render pass. No I/O, no global state.

pub mod catalog;

pub use catalog::category::{
    all_codes, category_path, descendant_codes, find_category, search_tree, CategoryMap,
    CategoryNode,
};
pub use catalog::dataset::SheetData;
pub use catalog::medicine::{filter_medicines, Medicine};
pub use catalog::page::{paginate, Page};
pub use catalog::sheet::Sheet;
