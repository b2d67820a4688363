//! Category Bar Component
//!
//! Filter chips for the feed: "All" plus one chip per category.

use leptos::prelude::*;
use skillshare_core::domain::{Category, CategoryFilter};

use crate::context::use_feed;

#[component]
pub fn CategoryBar() -> impl IntoView {
    let ctx = use_feed();
    let filter = Memo::new(move |_| ctx.state.with(|s| s.filter));

    let chips = std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.iter().map(|&c| CategoryFilter::Only(c)));

    view! {
        <div class="category-bar">
            {chips.map(|target| {
                let chip_class = move || {
                    if filter.get() == target { "category-chip active" } else { "category-chip" }
                };
                view! {
                    <button
                        class=chip_class
                        on:click=move |_| {
                            if filter.get_untracked() != target {
                                ctx.run(move |ctl| async move { ctl.select_category(target).await });
                            }
                        }
                    >
                        {target.category().map(|c| view! {
                            <img class="category-cover" src=c.image_url() alt="" />
                        })}
                        <span>{target.label()}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
