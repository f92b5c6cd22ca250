//! Login page.

use crate::backend::utils::route::Route;
use crate::frontend::components::layout::AuthLayout;
use crate::frontend::services::SessionState;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let session = use_context::<SessionState>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    // Already logged in: skip the form
    use_effect(move || {
        if session.session.peek().is_authenticated() {
            nav.replace(Route::DashboardHome {});
        }
    });

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if pending() {
            return;
        }

        let username_value = username.read().trim().to_string();
        let password_value = password.read().clone();
        let mut session = session;
        pending.set(true);
        error.set(None);

        spawn(async move {
            match session.login(username_value, &password_value).await {
                Ok(()) => {
                    nav.push(Route::DashboardHome {});
                }
                Err(message) => {
                    error.set(Some(message));
                    pending.set(false);
                }
            }
        });
    };

    rsx! {
        AuthLayout {
            form { class: "login-card", onsubmit: on_submit,
                h1 { "Iniciar sesión" }
                input {
                    r#type: "text",
                    placeholder: "Usuario",
                    value: "{username}",
                    maxlength: "32",
                    autofocus: true,
                    oninput: move |e| {
                        username.set(e.value());
                        error.set(None);
                    }
                }
                input {
                    r#type: "password",
                    placeholder: "Contraseña",
                    value: "{password}",
                    oninput: move |e| {
                        password.set(e.value());
                        error.set(None);
                    }
                }
                button {
                    class: "login-button",
                    r#type: "submit",
                    disabled: pending(),
                    if pending() { "Entrando..." } else { "Entrar" }
                }
                div {
                    class: if error.read().is_some() { "error-message error-visible" } else { "error-message error-hidden" },
                    {error.read().clone().unwrap_or_default()}
                }
            }
        }
    }
}
