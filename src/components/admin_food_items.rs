//! Admin Food Items Components
//!
//! Item grid with edit/delete, and the add/edit modal with image preview
//! and AI-assisted description.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::delete_confirm_button::DeleteConfirmButton;
use super::form_field::{FormField, FormTextArea};
use crate::browser;
use crate::context::use_page;
use crate::models::FoodItem;
use crate::outcome::{self, AI_PENDING_HINT};
use crate::store::{store_remove_item, use_board_store, BoardStateStoreFields};
use crate::validate::{self, FoodItemDraft};

/// Modal form state; one instance per page.
#[derive(Clone, Copy)]
struct ItemModal {
    open: RwSignal<bool>,
    id: RwSignal<Option<u64>>,
    name: RwSignal<String>,
    description: RwSignal<String>,
    price: RwSignal<String>,
    category: RwSignal<String>,
    image_url: RwSignal<String>,
    hint: RwSignal<String>,
}

impl ItemModal {
    fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            image_url: RwSignal::new(String::new()),
            hint: RwSignal::new(String::new()),
        }
    }

    fn show(&self, item: Option<&FoodItem>) {
        self.id.set(item.map(|i| i.id));
        self.name.set(item.map(|i| i.name.clone()).unwrap_or_default());
        self.description.set(item.map(|i| i.description.clone()).unwrap_or_default());
        self.price.set(item.map(|i| i.price.to_string()).unwrap_or_default());
        self.category.set(item.map(|i| i.category.clone()).unwrap_or_default());
        self.image_url.set(item.map(|i| i.image_url.clone()).unwrap_or_default());
        self.hint.set(String::new());
        self.open.set(true);
        browser::lock_scroll(true);
    }

    fn close(&self) {
        self.open.set(false);
        browser::lock_scroll(false);
    }

    fn draft(&self) -> FoodItemDraft {
        FoodItemDraft {
            id: self.id.get_untracked(),
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            category: self.category.get_untracked(),
            image_url: self.image_url.get_untracked(),
        }
    }
}

#[component]
pub fn FoodItemsPage() -> impl IntoView {
    let store = use_board_store();
    let modal = ItemModal::new();

    view! {
        <div class="admin-food-items">
            <div class="page-actions">
                <button type="button" class="btn btn-primary" on:click=move |_| modal.show(None)>
                    "+ Add Item"
                </button>
            </div>
            <div class="admin-food-grid reveal-grid">
                <For
                    each=move || store.items().get()
                    key=|item| item.id
                    children=move |item| view! { <FoodItemCard item=item modal=modal /> }
                />
            </div>
            <ItemModalView modal=modal />
        </div>
    }
}

#[component]
fn FoodItemCard(item: FoodItem, modal: ItemModal) -> impl IntoView {
    let ctx = use_page();
    let store = use_board_store();
    let deleting = RwSignal::new(false);
    let item_id = item.id;

    let delete = move |_| {
        deleting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let outcome = outcome::item_deleted(api.delete_food_item(item_id).await);
            deleting.try_set(false);
            if outcome.succeeded() {
                store_remove_item(&store, item_id);
            }
            ctx.render(&outcome);
        });
    };

    let image = (!item.image_url.is_empty())
        .then(|| view! { <img src=item.image_url.clone() alt=item.name.clone() loading="lazy" /> });
    let edit_item = item.clone();

    view! {
        <div class="admin-food-card" data-id=item_id.to_string()>
            {image}
            <h4>{item.name}</h4>
            <span class="category">{item.category}</span>
            <p>{item.description}</p>
            <span class="price">{format!("₹{:.2}", item.price)}</span>
            <div class="card-actions">
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| modal.show(Some(&edit_item))
                >
                    "Edit"
                </button>
                <DeleteConfirmButton
                    button_class="btn btn-danger"
                    label="Delete"
                    prompt="Delete this item?"
                    on_confirm=delete
                    disabled=deleting
                />
            </div>
        </div>
    }
}

#[component]
fn ItemModalView(modal: ItemModal) -> impl IntoView {
    let ctx = use_page();
    let saving = RwSignal::new(false);
    let suggesting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let form = match modal.draft().validate() {
            Ok(form) => form,
            Err(e) => {
                ctx.toaster.error(e.to_string());
                return;
            }
        };
        saving.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let outcome = outcome::item_saved(api.save_food_item(&form).await);
            saving.try_set(false);
            if outcome.succeeded() {
                modal.close();
            }
            ctx.render(&outcome);
        });
    };

    let suggest = move |_| {
        let req = match validate::ai_suggest(&modal.name.get_untracked(), &modal.category.get_untracked()) {
            Ok(req) => req,
            Err(e) => {
                ctx.toaster.error(e.to_string());
                return;
            }
        };
        modal.hint.set(AI_PENDING_HINT.to_string());
        suggesting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let ai = outcome::ai_suggested(api.ai_suggest(&req).await);
            suggesting.try_set(false);
            if let Some(description) = ai.description {
                modal.description.try_set(description);
            }
            if let Some(url) = ai.image_url {
                modal.image_url.try_set(url);
            }
            modal.hint.try_set(ai.hint);
            ctx.toaster.show(ai.toast);
        });
    };

    let close_on_overlay = move |ev: web_sys::MouseEvent| {
        if ev.target() == ev.current_target() {
            modal.close();
        }
    };
    let preview = move || modal.image_url.with(|u| u.trim().to_string());

    view! {
        <div
            id="itemModal"
            class="modal"
            class:hidden=move || !modal.open.get()
            on:click=close_on_overlay
        >
            <div class="modal-content">
                <h3 id="modalTitle">
                    {move || if modal.id.get().is_some() { "Edit Food Item" } else { "Add Food Item" }}
                </h3>
                <form id="itemForm" on:submit=on_submit>
                    <FormField id="itemName" label="Name" value=modal.name required=true />
                    <FormField id="itemCategory" label="Category" value=modal.category />
                    <div class="ai-row">
                        <button
                            type="button"
                            class="btn btn-secondary ai-btn"
                            disabled=move || suggesting.get()
                            on:click=suggest
                        >
                            "✨ Suggest with AI"
                        </button>
                        <small id="aiHint">{move || modal.hint.get()}</small>
                    </div>
                    <FormTextArea id="itemDescription" label="Description" value=modal.description />
                    <FormField id="itemPrice" label="Price" value=modal.price kind="number" required=true />
                    <FormField id="itemImageUrl" label="Image URL" value=modal.image_url kind="url" />
                    <div
                        id="imagePreviewWrapper"
                        style:display=move || if preview().is_empty() { "none" } else { "block" }
                    >
                        <img id="imagePreview" src=preview alt="Preview" />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| modal.close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save Item" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
