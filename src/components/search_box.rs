//! Search Box Component
//!
//! Instant item lookup over the cart. Feeds the search term signal only;
//! the cart itself is never mutated by searching.

use leptos::prelude::*;

use crate::context::CartContext;

#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<CartContext>().expect("CartContext should be provided");

    view! {
        <div class="search-box">
            <input
                type="text"
                placeholder="Digite o nome do item para consultar..."
                prop:value=move || ctx.search_term.get()
                on:input=move |ev| ctx.set_search_term.set(event_target_value(&ev))
            />
        </div>
    }
}
