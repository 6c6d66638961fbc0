//! Login Form Component
//!
//! Shared by the user and admin login pages.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::auth::AuthNotifier;
use super::form_field::FormField;
use super::toast_host::InlineMessage;
use crate::context::use_page;
use crate::models::Role;
use crate::outcome;
use crate::validate;

#[component]
pub fn LoginForm(role: Role) -> impl IntoView {
    let ctx = use_page();
    let notifier = AuthNotifier::new(ctx, role);
    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let (form_id, identifier_hint) = match role {
        Role::User => ("loginForm", "Email or phone number"),
        Role::Admin => ("adminLoginForm", "Admin ID (ADM...) or email"),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (id, pw) = (identifier.get_untracked(), password.get_untracked());
        let validated = match role {
            Role::User => validate::user_login(&id, &pw),
            Role::Admin => validate::admin_login(&id, &pw),
        };
        let req = match validated {
            Ok(req) => req,
            Err(e) => {
                notifier.error(e.to_string());
                return;
            }
        };

        busy.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let result = api.login(&req).await;
            busy.try_set(false);
            notifier.report(&outcome::login(role, result));
        });
    };

    view! {
        <form id=form_id class="auth-form" on:submit=on_submit>
            <InlineMessage toaster=notifier.inline node_ref=notifier.message_ref />
            <FormField id="identifier" label="Email / ID" value=identifier placeholder=identifier_hint />
            <FormField id="password" label="Password" value=password kind="password" />
            <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                {move || if busy.get() { "Logging in..." } else { "Login" }}
            </button>
        </form>
    }
}
