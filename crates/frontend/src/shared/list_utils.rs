/// Shared list helpers: debounced search input and match highlighting.
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DEBOUNCE_MS: u32 = 300;

/// Case-insensitive occurrences of `query` in `text`, as char index ranges.
///
/// Works on chars, not bytes, so CJK text slices safely. When lowercasing
/// changes the char count (exotic scripts), highlighting is skipped entirely
/// rather than risking misaligned ranges.
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return vec![];
    }
    let haystack: Vec<char> = text.to_lowercase().chars().collect();
    if haystack.len() != text.chars().count() {
        return vec![];
    }
    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Render `text` with every match of `filter` wrapped in a highlight span.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;

    for (start, end) in ranges {
        if start > last {
            let plain: String = chars[last..start].iter().collect();
            parts.push(view! { <span>{plain}</span> }.into_any());
        }
        let hit: String = chars[start..end].iter().collect();
        parts.push(view! { <span class="search-hit">{hit}</span> }.into_any());
        last = end;
    }
    if last < chars.len() {
        let rest: String = chars[last..].iter().collect();
        parts.push(view! { <span>{rest}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current (already debounced) filter value.
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired after the debounce pause.
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "搜索...".to_string()
    } else {
        placeholder
    };

    // Local state for the input, ahead of the debounce.
    let (input_value, set_input_value) = signal(String::new());
    // Every keystroke bumps the sequence; only the latest timer fires.
    let debounce_seq = RwSignal::new(0u32);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let seq = debounce_seq.get_untracked() + 1;
        debounce_seq.set(seq);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if debounce_seq.get_untracked() == seq {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        debounce_seq.update(|v| *v += 1);
        on_change.run(String::new());
    };

    view! {
        <div class="search-input-wrapper">
            <input
                type="text"
                class=move || if is_filter_active() { "search-input search-input--active" } else { "search-input" }
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="清空"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_chinese_substring() {
        assert_eq!(match_ranges("阿莫西林胶囊", "西林"), vec![(2, 4)]);
    }

    #[test]
    fn ascii_matching_ignores_case() {
        assert_eq!(match_ranges("VitB12注射液", "vitb"), vec![(0, 4)]);
    }

    #[test]
    fn finds_every_occurrence() {
        assert_eq!(match_ranges("人参再造丸与人参健脾丸", "人参"), vec![(0, 2), (6, 8)]);
    }

    #[test]
    fn empty_query_highlights_nothing() {
        assert!(match_ranges("阿司匹林", "").is_empty());
        assert!(match_ranges("阿司匹林", "   ").is_empty());
    }

    #[test]
    fn no_match_yields_no_ranges() {
        assert!(match_ranges("布洛芬", "青霉素").is_empty());
    }

    #[test]
    fn matches_do_not_overlap() {
        // "aaa" contains "aa" twice overlapping; we take non-overlapping hits
        assert_eq!(match_ranges("aaa", "aa"), vec![(0, 2)]);
    }
}
