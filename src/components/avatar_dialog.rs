//! Avatar Dialog Component
//!
//! File picker for a new profile picture. Picking a file uploads it at once.

use leptos::prelude::*;
use log::error;
use skillshare_core::domain::AvatarFile;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::context::use_profile;

/// Read a picked file into memory
async fn read_avatar(file: File) -> Result<AvatarFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(AvatarFile {
        file_name: file.name(),
        content_type: Some(file.type_()).filter(|t| !t.is_empty()),
        bytes,
    })
}

#[component]
pub fn AvatarDialog() -> impl IntoView {
    let ctx = use_profile();
    let open = Memo::new(move |_| ctx.state.with(|s| s.avatar_dialog_open));
    let uploading = Memo::new(move |_| ctx.state.with(|s| s.uploading));

    let on_pick = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow picking the same file again after a failure
        input.set_value("");
        ctx.run(move |ctl| async move {
            match read_avatar(file).await {
                Ok(avatar) => ctl.upload_avatar(avatar).await,
                Err(e) => error!("Error reading avatar file: {:?}", e),
            }
        });
    };
    let close = move |_| ctx.update(|s| s.close_avatar_dialog());

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Change Profile Picture"</h2>
                    <div class="avatar-upload">
                        <input
                            id="avatar-upload"
                            type="file"
                            accept="image/*"
                            class="hidden"
                            disabled=move || uploading.get()
                            on:change=on_pick
                        />
                        <label for="avatar-upload" class="primary-btn">
                            {move || if uploading.get() { "Uploading..." } else { "Upload New Photo" }}
                        </label>
                    </div>
                    <div class="modal-actions">
                        <button class="secondary-btn" on:click=close>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
