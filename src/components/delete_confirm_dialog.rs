//! Delete Confirm Dialog Component
//!
//! Confirmation modal for deleting a post. The delete request is only sent
//! from the confirm button; while it is in flight both buttons are disabled.

use leptos::prelude::*;

use crate::context::use_feed;

#[component]
pub fn DeleteConfirmDialog() -> impl IntoView {
    let ctx = use_feed();
    let pending = Memo::new(move |_| ctx.state.with(|s| s.pending_delete.clone()));
    let in_flight = move || pending.get().is_some_and(|p| p.in_flight);
    let title = move || {
        ctx.state.with(|s| {
            s.pending_delete
                .as_ref()
                .and_then(|p| s.post(&p.post_id))
                .map(|p| p.title.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || pending.get().is_some()>
            <div class="modal-backdrop" on:click=move |_| ctx.update(|s| s.cancel_delete())>
                <div class="modal confirm" on:click=|ev| ev.stop_propagation()>
                    <h2>"Delete post?"</h2>
                    <p>"\"" {title} "\" will be removed permanently."</p>
                    <div class="modal-actions">
                        <button
                            class="secondary-btn"
                            disabled=in_flight
                            on:click=move |_| ctx.update(|s| s.cancel_delete())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="danger-btn"
                            disabled=in_flight
                            on:click=move |ev| {
                                ev.stop_propagation();
                                ctx.run(|ctl| async move { ctl.confirm_delete().await });
                            }
                        >
                            {move || if in_flight() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
