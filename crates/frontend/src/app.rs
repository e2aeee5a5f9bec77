use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionContext;
use crate::system::notifications::NotificationCenter;

#[component]
pub fn App() -> impl IntoView {
    // The session is owned here and handed down via context; restore from
    // storage happens before the first render.
    provide_context(SessionContext::new());
    provide_context(NotificationCenter::new());
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
