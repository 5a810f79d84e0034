//! Cart Form Component
//!
//! Single form for adding items and saving edits. The store itself decides
//! which of the two happens: while an edit session is active the submit is
//! redirected to the save path, otherwise it adds or merges.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::CartContext;

/// Form for adding a new cart line or saving the line under edit
#[component]
pub fn CartForm() -> impl IntoView {
    let ctx = use_context::<CartContext>().expect("CartContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = ctx.new_name.get();
        let quantity = ctx.new_quantity.get();

        let mut result = Ok(());
        ctx.set_cart.update(|cart| result = cart.add_or_merge(&name, quantity));

        match result {
            Ok(()) => {
                ctx.set_item_error(None);
                ctx.reset_staging();
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("[CartForm] Rejected: {}", e).into());
                ctx.set_item_error(Some(e.to_string()));
            }
        }
    };

    let is_editing = move || ctx.cart.get().is_editing();

    let on_cancel = move |_| {
        ctx.set_cart.update(|cart| cart.cancel_edit());
        ctx.set_item_error(None);
        ctx.reset_staging();
    };

    view! {
        {move || ctx.item_error.get().map(|msg| view! {
            <div class="error-message">{msg}</div>
        })}

        <form class="cart-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Digite o nome do item..."
                prop:value=move || ctx.new_name.get()
                on:input=move |ev| ctx.set_new_name.set(event_target_value(&ev))
            />
            <input
                type="number"
                min="1"
                placeholder="Quantidade"
                prop:value=move || ctx.new_quantity.get().to_string()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    // Empty or garbage input falls back to 1
                    ctx.set_new_quantity.set(input.value().parse().unwrap_or(1));
                }
            />
            <button type="submit">
                {move || if is_editing() { "Salvar Edição" } else { "Adicionar Item" }}
            </button>
            {move || is_editing().then(|| view! {
                <button type="button" class="cancel-btn" on:click=on_cancel>
                    "Cancelar"
                </button>
            })}
        </form>
    }
}
