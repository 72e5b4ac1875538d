//! Sidebar primitives: provider-owned open/closed state plus the
//! presentational wrappers the shell composes.

use leptos::prelude::*;

use super::icons::panel_left_icon;

/// Open/closed state of the sidebar region. Owned by [`SidebarProvider`],
/// consumed by [`Sidebar`] and [`SidebarTrigger`] through context.
#[derive(Clone, Copy)]
pub struct SidebarContext {
    open: RwSignal<bool>,
}

impl SidebarContext {
    fn new() -> Self {
        Self {
            open: RwSignal::new(true),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }
}

/// Owns the sidebar state and exposes it to descendants.
#[component]
pub fn SidebarProvider(children: Children) -> impl IntoView {
    provide_context(SidebarContext::new());

    view! { <div class="sidebar-layout">{children()}</div> }
}

/// The sidebar region itself. Open/closed state is reflected on the
/// `data-state` attribute and styled from the stylesheet.
#[component]
pub fn Sidebar(children: Children) -> impl IntoView {
    let ctx = expect_context::<SidebarContext>();

    view! {
        <aside
            class="sidebar"
            data-state=move || if ctx.is_open() { "expanded" } else { "collapsed" }
        >
            {children()}
        </aside>
    }
}

#[component]
pub fn SidebarContent(children: Children) -> impl IntoView {
    view! { <div class="sidebar-content">{children()}</div> }
}

#[component]
pub fn SidebarGroup(children: Children) -> impl IntoView {
    view! { <div class="sidebar-group">{children()}</div> }
}

#[component]
pub fn SidebarGroupLabel(children: Children) -> impl IntoView {
    view! { <div class="sidebar-group-label">{children()}</div> }
}

#[component]
pub fn SidebarGroupContent(children: Children) -> impl IntoView {
    view! { <div class="sidebar-group-content">{children()}</div> }
}

#[component]
pub fn SidebarMenu(children: Children) -> impl IntoView {
    view! { <ul class="sidebar-menu">{children()}</ul> }
}

#[component]
pub fn SidebarMenuItem(children: Children) -> impl IntoView {
    view! { <li class="sidebar-menu-item">{children()}</li> }
}

#[component]
pub fn SidebarMenuButton(children: Children) -> impl IntoView {
    view! { <div class="sidebar-menu-button">{children()}</div> }
}

/// Button that asks the provider to toggle sidebar visibility.
#[component]
pub fn SidebarTrigger() -> impl IntoView {
    let ctx = expect_context::<SidebarContext>();

    view! {
        <button
            class="sidebar-trigger"
            aria-label="Toggle sidebar"
            on:click=move |_| ctx.toggle()
        >
            {panel_left_icon()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_open() {
        let ctx = SidebarContext::new();
        assert!(ctx.open.get_untracked());
    }

    #[test]
    fn toggle_flips_both_ways() {
        let ctx = SidebarContext::new();

        ctx.toggle();
        assert!(!ctx.open.get_untracked());

        ctx.toggle();
        assert!(ctx.open.get_untracked());
    }
}
