//! Appreciation buttons for one highlight.
//!
//! Counts and the exclusive selection come from the server echo only; a
//! click that fails anywhere in the chain leaves the panel unchanged.

use leptos::prelude::*;

use crate::state::appreciation::{APPRECIATION_LEVELS, AppreciationState};

/// Level buttons plus the running total for a single highlight.
#[component]
pub fn AppreciationPanel(highlight_id: i64) -> impl IntoView {
    let state = RwSignal::new(AppreciationState::default());

    let appreciate = move |level: u8| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::send_appreciation(highlight_id, level).await {
                    Ok(response) => state.update(|s| s.apply(level, &response)),
                    Err(err) => {
                        log::error!("appreciation failed for highlight {highlight_id}: {err}");
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = level;
    };

    view! {
        <div class="appreciation-buttons" data-highlight-id=highlight_id.to_string()>
            {APPRECIATION_LEVELS
                .into_iter()
                .map(|level| {
                    view! {
                        <button
                            class="appreciation-button"
                            class:selected=move || state.get().is_selected(level)
                            data-level=level.to_string()
                            on:click=move |_| appreciate(level)
                        >
                            <span class="appreciation-emoji"></span>
                            <span class="appreciation-count">{move || state.get().count_for(level)}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
            <div class="total-appreciations">{move || state.get().total}</div>
        </div>
    }
}
