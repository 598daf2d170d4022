use crate::console::use_console;
use leptos::prelude::*;

/// Second step of deletion. Nothing is sent unless "Eliminar" is pressed.
#[component]
pub fn ConfirmDeleteDialog() -> impl IntoView {
    let console = use_console();
    let state = console.state;

    let on_cancel = move |_| console.with(|m| m.cancel_delete());
    let on_confirm = move |_| console.run(|m| async move { m.confirm_delete().await });

    view! {
        <Show when=move || state.with(|s| s.pending_delete.is_some())>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">"¿Seguro que deseas eliminar?"</h3>
                    <p class="py-4 opacity-70">
                        "Orden #" {move || state.with(|s| s.pending_delete.map(|id| id.to_string()))}
                    </p>
                    <div class="modal-action">
                        <button class="btn" on:click=on_cancel>"Cancelar"</button>
                        <button class="btn btn-error" on:click=on_confirm>"Eliminar"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
