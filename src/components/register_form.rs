//! Registration Form Components
//!
//! Both forms verify the email OTP first, then register.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::auth::{AuthNotifier, SendOtpButton};
use super::form_field::{FormField, FormTextArea};
use super::toast_host::InlineMessage;
use crate::context::use_page;
use crate::flow::{self, Phase};
use crate::models::Role;
use crate::validate::{AdminRegisterForm, UserRegisterForm, ValidationError};

#[component]
fn OtpGroup(visible: RwSignal<bool>, otp: RwSignal<String>) -> impl IntoView {
    view! {
        <div id="emailOtpGroup" style:display=move || if visible.get() { "block" } else { "none" }>
            <FormField id="emailOtp" label="Email OTP" value=otp placeholder="6-digit code" />
        </div>
    }
}

#[component]
pub fn UserRegister() -> impl IntoView {
    let ctx = use_page();
    let notifier = AuthNotifier::new(ctx, Role::User);
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let otp_visible = RwSignal::new(false);
    let phase = RwSignal::new(Phase::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked() != Phase::Idle {
            return;
        }
        let form = UserRegisterForm {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            phone_number: phone.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            address: address.get_untracked(),
            otp: otp.get_untracked(),
        };
        let api = ctx.api();
        spawn_local(async move {
            let set_phase = move |p| {
                phase.try_set(p);
            };
            match flow::register_user(&api, &form, set_phase).await {
                Ok(outcome) => notifier.report(&outcome),
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    view! {
        <form id="registerForm" class="auth-form" on:submit=on_submit>
            <InlineMessage toaster=notifier.inline />
            <FormField id="fullName" label="Full Name" value=full_name required=true />
            <div class="form-row">
                <FormField id="email" label="Email" value=email kind="email" required=true />
                <SendOtpButton role=Role::User email=email notifier=notifier otp_visible=otp_visible />
            </div>
            <OtpGroup visible=otp_visible otp=otp />
            <FormField id="phoneNumber" label="Phone Number (optional)" value=phone kind="tel" />
            <FormField id="password" label="Password" value=password kind="password" required=true />
            <FormField id="confirmPassword" label="Confirm Password" value=confirm kind="password" required=true />
            <FormTextArea id="address" label="Address" value=address />
            <button type="submit" class="btn btn-primary" disabled=move || phase.get() != Phase::Idle>
                {move || phase.get().label()}
            </button>
        </form>
    }
}

#[component]
pub fn AdminRegister() -> impl IntoView {
    let ctx = use_page();
    let notifier = AuthNotifier::new(ctx, Role::Admin);
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let otp_visible = RwSignal::new(false);
    let phase = RwSignal::new(Phase::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked() != Phase::Idle {
            return;
        }
        let form = AdminRegisterForm {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            phone_number: phone.get_untracked(),
            password: password.get_untracked(),
            otp: otp.get_untracked(),
        };
        let api = ctx.api();
        spawn_local(async move {
            let set_phase = move |p| {
                phase.try_set(p);
            };
            match flow::register_admin(&api, &form, set_phase).await {
                Ok(outcome) => notifier.report(&outcome),
                Err(e) => {
                    if e == ValidationError::MissingOtp {
                        otp_visible.try_set(true);
                    }
                    notifier.error(e.to_string());
                }
            }
        });
    };

    view! {
        <form id="adminRegisterForm" class="auth-form" on:submit=on_submit>
            <InlineMessage toaster=notifier.inline node_ref=notifier.message_ref />
            <FormField id="fullName" label="Full Name" value=full_name required=true />
            <div class="form-row">
                <FormField id="email" label="Email" value=email kind="email" required=true />
                <SendOtpButton role=Role::Admin email=email notifier=notifier otp_visible=otp_visible />
            </div>
            <OtpGroup visible=otp_visible otp=otp />
            <FormField id="phoneNumber" label="Phone Number" value=phone kind="tel" />
            <FormField id="password" label="Password" value=password kind="password" required=true />
            <button type="submit" class="btn btn-primary" disabled=move || phase.get() != Phase::Idle>
                {move || phase.get().label()}
            </button>
        </form>
    }
}
