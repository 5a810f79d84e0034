//! Cart List Component
//!
//! Renders the (possibly filtered) cart lines with a per-line quantity
//! input plus edit and remove actions. Rows carry the line's stable id, so
//! actions resolve correctly even under an active filter.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use cart_core::CartLine;

use crate::context::CartContext;

#[component]
pub fn CartList() -> impl IntoView {
    let ctx = use_context::<CartContext>().expect("CartContext should be provided");

    let visible = Memo::new(move |_| ctx.cart.get().filter(&ctx.search_term.get()));

    let begin_edit = move |id: u32| {
        let mut seed = None;
        ctx.set_cart.update(|cart| seed = cart.begin_edit(id));
        match seed {
            Some((name, quantity)) => {
                ctx.set_new_name.set(name);
                ctx.set_new_quantity.set(quantity);
            }
            // Stale row, e.g. the line was removed while this view was up
            None => {
                web_sys::console::warn_1(&format!("[CartList] Line {} not found", id).into());
            }
        }
    };

    view! {
        <Show
            when=move || !visible.get().is_empty()
            fallback=move || view! {
                {move || (!ctx.search_term.get().is_empty() && !ctx.cart.get().is_empty()).then(|| view! {
                    <p class="no-match">"Item não encontrado"</p>
                })}
            }
        >
            <ul class="cart-list">
                <For
                    each=move || visible.get()
                    key=|line| line.id
                    children=move |line: CartLine| {
                        let id = line.id;
                        view! {
                            <li class="cart-line">
                                <span class="line-name">{line.name.clone()} " - Qtd: "</span>
                                <input
                                    type="number"
                                    min="1"
                                    prop:value=line.quantity.to_string()
                                    on:change=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        let quantity = input.value().parse().unwrap_or(1);
                                        ctx.set_cart.update(|cart| cart.update_quantity(id, quantity));
                                    }
                                />
                                <button on:click=move |_| begin_edit(id)>"Editar"</button>
                                <button on:click=move |_| {
                                    ctx.set_cart.update(|cart| cart.remove_line(id));
                                }>
                                    "Remover"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
