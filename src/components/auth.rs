//! Shared pieces of the login and registration forms.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::PageContext;
use crate::models::Role;
use crate::outcome::{self, Outcome};
use crate::toast::{Toast, Toaster};
use crate::validate;

/// How long the inline `#message` text stays up.
pub const INLINE_MESSAGE_MS: u32 = 5000;

/// Routes auth results to the inline message, plus the floating toast on
/// user pages.
#[derive(Clone, Copy)]
pub struct AuthNotifier {
    ctx: PageContext,
    role: Role,
    pub inline: Toaster,
    pub message_ref: NodeRef<Div>,
}

impl AuthNotifier {
    pub fn new(ctx: PageContext, role: Role) -> Self {
        let inline = match role {
            Role::Admin => ctx.toaster,
            Role::User => Toaster::new(INLINE_MESSAGE_MS),
        };
        Self { ctx, role, inline, message_ref: NodeRef::new() }
    }

    pub fn show(&self, toast: Toast) {
        self.inline.show(toast.clone());
        match self.role {
            Role::User => self.ctx.toaster.show(toast),
            Role::Admin => {
                if let Some(el) = self.message_ref.get_untracked() {
                    browser::scroll_near(&el);
                }
            }
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Toast::error(message));
    }

    pub fn report(&self, outcome: &Outcome) {
        if let Some(toast) = &outcome.toast {
            self.show(toast.clone());
        }
        browser::apply(&outcome.effect);
    }
}

/// "Send OTP" button. Reveals the OTP group once the server accepts.
#[component]
pub fn SendOtpButton(
    role: Role,
    email: RwSignal<String>,
    notifier: AuthNotifier,
    otp_visible: RwSignal<bool>,
) -> impl IntoView {
    let sending = RwSignal::new(false);

    let send = move |_| {
        let req = match validate::otp_email(&email.get_untracked(), role) {
            Ok(req) => req,
            Err(e) => {
                notifier.error(e.to_string());
                return;
            }
        };
        sending.set(true);
        let api = notifier.ctx.api();
        spawn_local(async move {
            let result = api.send_otp(&req).await;
            sending.try_set(false);
            let outcome = outcome::otp_sent(role, result);
            if outcome.succeeded() {
                otp_visible.try_set(true);
            }
            notifier.report(&outcome);
        });
    };

    view! {
        <button
            type="button"
            class="btn btn-secondary otp-btn"
            disabled=move || sending.get()
            on:click=send
        >
            "Send OTP"
        </button>
    }
}
