use crate::console::use_console;
use leptos::prelude::*;
use pedidos_shared::Estado;

/// Create/edit form. Every keystroke goes through the manager, so the form
/// shown is always the one `submit` will validate.
#[component]
pub fn OrderFormCard() -> impl IntoView {
    let console = use_console();
    let state = console.state;

    let editing = move || state.with(|s| s.is_editing());
    let field = move |read: fn(&pedidos::OrderForm) -> String| move || state.with(|s| read(&s.form));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        console.run(|m| async move { m.submit().await });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">
                    {move || if editing() { "📝 Editar Registro" } else { "➕ Nuevo Registro" }}
                </h3>
                <form class="grid grid-cols-1 md:grid-cols-5 gap-4 mt-4 items-end" on:submit=on_submit>
                    <label class="form-control">
                        <span class="label-text">"Cliente *"</span>
                        <input
                            type="text"
                            class="input input-bordered"
                            placeholder="Nombre del cliente"
                            prop:value=field(|f| f.cliente.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                console.edit_form(|f| f.cliente = value);
                            }
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Monto Total ($) *"</span>
                        <input
                            type="number"
                            step="0.01"
                            class="input input-bordered"
                            placeholder="0.00"
                            prop:value=field(|f| f.total.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                console.edit_form(|f| f.total = value);
                            }
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Fecha de Pedido *"</span>
                        <input
                            type="date"
                            class="input input-bordered"
                            prop:value=field(|f| f.fecha.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                console.edit_form(|f| f.fecha = value);
                            }
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Estado"</span>
                        <select
                            class="select select-bordered"
                            prop:value=field(|f| f.estado.as_wire().to_string())
                            on:change=move |ev| {
                                let estado = Estado::from_wire(&event_target_value(&ev)).unwrap_or_default();
                                console.edit_form(|f| f.estado = estado);
                            }
                        >
                            {Estado::ALL
                                .into_iter()
                                .map(|e| view! { <option value=e.as_wire()>{e.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <div class="flex gap-2">
                        <button type="submit" class="btn btn-primary grow">
                            {move || if editing() { "Guardar" } else { "Crear" }}
                        </button>
                        <Show when=editing>
                            <button type="button" class="btn" on:click=move |_| console.with(|m| m.cancel_edit())>
                                "Cancelar"
                            </button>
                        </Show>
                    </div>
                </form>
            </div>
        </div>
    }
}
