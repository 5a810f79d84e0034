//! Receipt Modal Component
//!
//! Shown whenever a receipt or a checkout error is present. The close
//! action clears both unconditionally.

use leptos::prelude::*;

use crate::context::CartContext;

#[component]
pub fn ReceiptModal() -> impl IntoView {
    let ctx = use_context::<CartContext>().expect("CartContext should be provided");

    let visible = move || ctx.receipt.get().is_some() || ctx.checkout_error.get().is_some();

    view! {
        <Show when=visible>
            <div class="modal">
                <div class="modal-content">
                    {move || match ctx.receipt.get() {
                        Some(receipt) => view! {
                            <div class="receipt">
                                <h2>"Comprovante da Compra"</h2>
                                <ul>
                                    {receipt.lines.iter().map(|entry| view! {
                                        <li>{entry.clone()}</li>
                                    }).collect_view()}
                                </ul>
                                <p>"Total de itens: " {receipt.total_items}</p>
                            </div>
                        }.into_any(),
                        None => view! {
                            <p class="checkout-error">
                                {move || ctx.checkout_error.get().unwrap_or_default()}
                            </p>
                        }.into_any(),
                    }}
                    <button on:click=move |_| ctx.close_modal()>"Fechar"</button>
                </div>
            </div>
        </Show>
    }
}
