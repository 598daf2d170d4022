use crate::components::icons::{Edit2, Eye, Filter, Trash2};
use crate::console::use_console;
use leptos::prelude::*;
use pedidos_shared::{Estado, Pedido, date::format_fecha};

#[component]
pub fn OrderTable() -> impl IntoView {
    let console = use_console();
    let state = console.state;

    let is_empty = move || state.with(|s| s.pedidos.is_empty() && !s.loading);

    let on_filter = move |ev: leptos::ev::Event| {
        let filter = Estado::from_wire(&event_target_value(&ev));
        console.run(move |m| async move { m.set_filter(filter).await });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex items-center justify-between p-6 pb-2">
                    <h3 class="card-title">"Lista de Pedidos"</h3>
                    <div class="flex items-center gap-2">
                        <Filter attr:class="h-4 w-4 opacity-60" />
                        <select
                            class="select select-bordered select-sm"
                            prop:value=move || state.with(|s| s.filter.map_or("", |e| e.as_wire()).to_string())
                            on:change=on_filter
                        >
                            <option value="">"Filtro: Todos"</option>
                            {Estado::ALL
                                .into_iter()
                                .map(|e| view! { <option value=e.as_wire()>{e.filter_label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Fecha"</th>
                                <th>"Cliente"</th>
                                <th>"Total"</th>
                                <th>"Estado"</th>
                                <th>"Acciones"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.with(|s| s.pedidos.clone())
                                // Any field change re-renders the row.
                                key=|p: &Pedido| (p.id, p.cliente.clone(), p.total.to_bits(), p.estado, p.fecha)
                                children=move |pedido: Pedido| {
                                    let id = pedido.id;
                                    view! {
                                        <tr>
                                            <td>{format_fecha(pedido.fecha)}</td>
                                            <td class="font-semibold">{pedido.cliente.clone()}</td>
                                            <td class="font-bold text-accent">{pedido.display_total()}</td>
                                            <td>
                                                <span class=pedido.estado.badge_class()>{pedido.estado.as_wire()}</span>
                                            </td>
                                            <td class="flex gap-1">
                                                <button
                                                    title="Ver"
                                                    class="btn btn-ghost btn-sm btn-square"
                                                    on:click=move |_| { console.with(|m| m.select(id)); }
                                                >
                                                    <Eye attr:class="h-4 w-4" />
                                                </button>
                                                <button
                                                    title="Editar"
                                                    class="btn btn-ghost btn-sm btn-square"
                                                    on:click=move |_| {
                                                        if console.with(|m| m.begin_edit(id)) {
                                                            window().scroll_to_with_x_and_y(0.0, 0.0);
                                                        }
                                                    }
                                                >
                                                    <Edit2 attr:class="h-4 w-4" />
                                                </button>
                                                <button
                                                    title="Eliminar"
                                                    class="btn btn-ghost btn-sm btn-square text-error"
                                                    on:click=move |_| console.with(|m| m.request_delete(id))
                                                >
                                                    <Trash2 attr:class="h-4 w-4" />
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <Show when=is_empty>
                        <div class="text-center py-12 text-base-content/50">"No hay registros."</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
