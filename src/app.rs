//! QuickCart Frontend App
//!
//! Main application component: owns the cart store and all presentation
//! signals, provides them to the component tree via context.

use leptos::prelude::*;

use crate::components::{CartForm, CartList, ReceiptModal, SearchBox};
use crate::context::CartContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = CartContext::new();

    // Provide context to all children
    provide_context(ctx);

    let on_finalize = move |_| {
        let result = ctx.cart.with(|cart| cart.finalize());
        match result {
            Ok(receipt) => {
                if let Ok(json) = serde_json::to_string(&receipt) {
                    web_sys::console::log_1(&format!("[App] Purchase finalized: {}", json).into());
                }
                ctx.show_receipt(receipt);
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("[App] Finalize failed: {}", e).into());
                ctx.show_checkout_error(e.to_string());
            }
        }
    };

    view! {
        <div class="app">
            <h1>"Carrinho de Compras"</h1>

            <CartForm />

            <SearchBox />

            <CartList />

            <button class="finalize-button" on:click=on_finalize>
                "Finalizar Compra"
            </button>

            <ReceiptModal />
        </div>
    }
}
