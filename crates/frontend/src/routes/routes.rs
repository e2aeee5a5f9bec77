use leptos::prelude::*;

use crate::domain::branches::ui::AdminPanelPage;
use crate::domain::dashboard::ui::DashboardPage;
use crate::domain::orders::ui::{CreateOrderPage, OrdersPage};
use crate::domain::statistics::ui::StatisticsPage;
use crate::domain::stock::ui::StockPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::{Header, Sidebar};
use crate::system::auth::context::use_session;
use crate::system::notifications::NotificationCenter;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    // The notification poller lives exactly as long as the authenticated
    // layout does.
    let session = use_session();
    let notifications =
        use_context::<NotificationCenter>().expect("NotificationCenter not found in component tree");
    if let Some(token) = session.token() {
        notifications.start_polling(token);
    }
    on_cleanup(move || notifications.stop_polling());

    view! {
        <div class="app-shell">
            <Header />
            <div class="app-body">
                <Sidebar />
                <main class="app-content">
                    {move || match ctx.active.get() {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::Stock => view! { <StockPage /> }.into_any(),
                        Page::Orders => view! { <OrdersPage /> }.into_any(),
                        Page::CreateOrder => view! { <CreateOrderPage /> }.into_any(),
                        Page::Statistics => view! { <StatisticsPage /> }.into_any(),
                        Page::Admin => view! { <AdminPanelPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
