//! Theme management.
//!
//! Light and dark themes, applied through a `data-theme` attribute on `<body>`
//! and persisted in localStorage. This is the only thing the app ever writes.

use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "catalog_theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name used for the `data-theme` attribute and the localStorage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "浅色",
            Theme::Dark => "深色",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme dropdown for the top header.
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let current_theme = RwSignal::new(load_theme_from_storage());
    let is_open = RwSignal::new(false);

    // Apply saved theme on mount
    Effect::new(move |_| {
        apply_theme(current_theme.get_untracked());
    });

    let change_theme = move |theme: Theme| {
        apply_theme(theme);
        save_theme_to_storage(theme);
        current_theme.set(theme);
        is_open.set(false);
    };

    let toggle_dropdown = move |_| {
        is_open.update(|v| *v = !*v);
    };

    view! {
        <div class="theme-select-wrapper">
            <button
                class="top-header__icon-btn"
                on:click=toggle_dropdown
                title="切换主题"
            >
                {icon("palette")}
            </button>

            <Show when=move || is_open.get()>
                <div class="theme-dropdown">
                    {Theme::all().into_iter().map(|theme| {
                        let is_active = move || current_theme.get() == theme;
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "theme-dropdown__item theme-dropdown__item--active"
                                    } else {
                                        "theme-dropdown__item"
                                    }
                                }
                                on:click=move |_| change_theme(theme)
                            >
                                {theme.display_name()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_value_round_trip() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_str(theme.as_str()), theme);
        }
    }

    #[test]
    fn unknown_value_falls_back_to_light() {
        assert_eq!(Theme::from_str("forest"), Theme::Light);
        assert_eq!(Theme::from_str(""), Theme::Light);
    }
}
