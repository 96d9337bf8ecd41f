// src/client/view.rs
use std::fmt::Write;

use super::state::CatalogState;

/// Renders the catalog screen. Pure: same state, same text.
pub fn render(state: &CatalogState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Product Catalog");
    let _ = writeln!(out, "Search: {}", state.search_text);

    if !state.suggestions.is_empty() {
        let _ = writeln!(out, "  Suggestions:");
        for (idx, suggestion) in state.suggestions.iter().enumerate() {
            let _ = writeln!(out, "    {}. {}", idx + 1, suggestion);
        }
    }

    let _ = writeln!(out);
    for product in &state.products {
        let _ = writeln!(out, "  {} - ${}", product.name, product.price);
    }

    let _ = writeln!(out);
    let mut controls = vec![control("<", state.can_go_previous())];
    controls.extend(state.page_numbers().map(|page| {
        if page == state.current_page {
            format!("[{page}]")
        } else {
            page.to_string()
        }
    }));
    controls.push(control(">", state.can_go_next()));
    let _ = writeln!(out, "{}", controls.join(" "));

    out
}

// Disabled controls are shown in parentheses.
fn control(label: &str, enabled: bool) -> String {
    if enabled {
        label.to_string()
    } else {
        format!("({label})")
    }
}
