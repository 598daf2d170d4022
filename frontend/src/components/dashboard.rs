use crate::components::confirm_delete::ConfirmDeleteDialog;
use crate::components::detail_modal::DetailModal;
use crate::components::icons::*;
use crate::components::order_form::OrderFormCard;
use crate::components::order_table::OrderTable;
use crate::console::use_console;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let console = use_console();
    let state = console.state;

    let loading = move || state.with(|s| s.loading);
    let total_pedidos = move || state.with(|s| s.count());
    let promedio = move || state.with(|s| s.display_promedio());

    let on_refresh = move |_| console.run(|m| async move { m.refresh().await });
    let on_logout = move |_| console.with(|m| m.logout());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 flex-col items-start px-2">
                        <h1 class="text-xl font-bold flex items-center gap-3">
                            <ShoppingBag attr:class="h-6 w-6 text-primary" />
                            "Sistema de Pedidos"
                        </h1>
                        <p class="text-sm text-base-content/70">
                            "Sesión Activa: " {move || state.with(|s| s.username.clone())}
                        </p>
                    </div>
                    <div class="flex-none gap-2">
                        <button on:click=on_refresh disabled=loading class="btn btn-ghost btn-circle" title="Actualizar">
                            <RefreshCw attr:class=move || if loading() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                        </button>
                        <button on:click=on_logout class="btn btn-ghost btn-circle text-error" title="Cerrar sesión">
                            <LogOut attr:class="h-5 w-5" />
                        </button>
                    </div>
                </div>

                {move || state.with(|s| s.banner.clone()).map(|msg| view! {
                    <div role="alert" class="alert alert-error shadow-lg">
                        <span>{msg}</span>
                        <button class="btn btn-ghost btn-xs" on:click=move |_| console.with(|m| m.dismiss_banner())>
                            <X attr:class="h-4 w-4" />
                        </button>
                    </div>
                })}

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <ShoppingBag attr:class="inline-block w-8 h-8" />
                        </div>
                        <div class="stat-title">"Total de Pedidos"</div>
                        <div class="stat-value text-primary">{total_pedidos}</div>
                    </div>

                    <div class="stat">
                        <div class="stat-figure text-accent">
                            <TrendingUp attr:class="inline-block w-8 h-8" />
                        </div>
                        <div class="stat-title">"Promedio General"</div>
                        <div class="stat-value text-accent">{promedio}</div>
                    </div>
                </div>

                <OrderFormCard />
                <OrderTable />
            </div>

            <DetailModal />
            <ConfirmDeleteDialog />
        </div>
    }
}
