use leptos::prelude::*;

use super::global_context::{AppGlobalContext, Page};
use crate::system::auth::context::use_session;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let session = use_session();

    let entries = move || {
        Page::ALL
            .into_iter()
            .filter(|page| !page.admin_only() || session.is_admin())
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=move || ctx.sidebar_open.get()>
            <nav class="sidebar">
                <For
                    each=entries
                    key=|page| page.key()
                    children=move |page| {
                        view! {
                            <button
                                class="nav-item"
                                class:active=move || ctx.active.get() == page
                                on:click=move |_| ctx.navigate(page)
                            >
                                {page.title()}
                            </button>
                        }
                    }
                />
            </nav>
        </Show>
    }
}
