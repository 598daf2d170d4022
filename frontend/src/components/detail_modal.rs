use crate::components::icons::X;
use crate::console::use_console;
use leptos::prelude::*;
use pedidos_shared::date::format_fecha;

/// Read-only view of the selected record, taken from the loaded list.
#[component]
pub fn DetailModal() -> impl IntoView {
    let console = use_console();
    let state = console.state;
    let close = move |_| console.with(|m| m.close_detail());

    move || {
        state.with(|s| s.selected.clone()).map(|pedido| {
            view! {
                <div class="modal modal-open" on:click=close>
                    <div class="modal-box" on:click=|ev| ev.stop_propagation()>
                        <div class="flex justify-between items-center mb-6">
                            <h2 class="text-2xl font-bold">"Detalle de Pedido"</h2>
                            <button class="btn btn-ghost btn-sm btn-circle" on:click=close>
                                <X attr:class="h-5 w-5" />
                            </button>
                        </div>
                        <dl class="divide-y divide-base-200">
                            <div class="flex justify-between py-2">
                                <dt class="opacity-70">"Orden #"</dt>
                                <dd class="font-mono">{pedido.id.to_string()}</dd>
                            </div>
                            <div class="flex justify-between py-2">
                                <dt class="opacity-70">"Cliente"</dt>
                                <dd>{pedido.cliente.clone()}</dd>
                            </div>
                            <div class="flex justify-between py-2">
                                <dt class="opacity-70">"Total"</dt>
                                <dd class="font-bold text-accent">{pedido.display_total()}</dd>
                            </div>
                            <div class="flex justify-between py-2">
                                <dt class="opacity-70">"Fecha"</dt>
                                <dd>{format_fecha(pedido.fecha)}</dd>
                            </div>
                            <div class="flex justify-between py-2">
                                <dt class="opacity-70">"Estado"</dt>
                                <dd>
                                    <span class=pedido.estado.badge_class()>{pedido.estado.as_wire()}</span>
                                </dd>
                            </div>
                        </dl>
                        <button class="btn btn-primary w-full mt-8" on:click=close>"Cerrar"</button>
                    </div>
                </div>
            }
        })
    }
}
