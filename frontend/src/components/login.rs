use crate::components::icons::{Lock, User};
use crate::console::use_console;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let console = use_console();
    let state = console.state;

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let banner = move || state.with(|s| s.banner.clone());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);

        let (user, pass) = (username.get_untracked(), password.get_untracked());
        console.run(move |m| async move {
            let outcome = m.login(&user, &pass).await;
            // The page is gone once the session opens.
            let _ = set_is_submitting.try_set(false);
            outcome
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary rounded-full text-primary-content">
                            <Lock attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Acceso Restringido"</h1>
                        <p class="text-base-content/70">"Inicia sesión para continuar"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Usuario"</span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2">
                                <User attr:class="h-4 w-4 opacity-60" />
                                <input
                                    id="username"
                                    type="text"
                                    class="grow"
                                    placeholder="admin"
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                    prop:value=username
                                />
                            </label>
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2">
                                <Lock attr:class="h-4 w-4 opacity-60" />
                                <input
                                    id="password"
                                    type="password"
                                    class="grow"
                                    placeholder="••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                />
                            </label>
                        </div>

                        {move || banner().map(|msg| view! {
                            <p class="text-error text-sm text-center">{msg}</p>
                        })}

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Entrando..." }.into_any()
                                } else {
                                    "Entrar al Sistema".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
