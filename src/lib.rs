// Console front-end shell — Leptos 0.8 Edition

pub mod app_sidebar;
pub mod ui;

use leptos::prelude::*;

use app_sidebar::AppSidebar;
use ui::{SidebarProvider, SidebarTrigger};

/// Root composition: sidebar provider wrapping the app sidebar and the
/// main content region with its trigger.
#[component]
pub fn App() -> impl IntoView {
    // Counter left over from the starter template; nothing reads it.
    let (_count, _set_count) = signal(0);

    view! {
        <SidebarProvider>
            <AppSidebar />
            <main class="content">
                <SidebarTrigger />
            </main>
        </SidebarProvider>
    }
}
