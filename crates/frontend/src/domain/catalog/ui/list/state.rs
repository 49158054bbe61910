use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct MedicineListState {
    // free-text name filter (debounced)
    pub q: String,

    // pagination
    pub page: usize,
    pub page_size: usize,
}

impl Default for MedicineListState {
    fn default() -> Self {
        Self {
            q: String::new(),
            page: 0,
            page_size: 50,
        }
    }
}

pub fn create_state() -> RwSignal<MedicineListState> {
    RwSignal::new(MedicineListState::default())
}
