//! The application sidebar: one labeled group with one navigation entry.

use leptos::prelude::*;

use crate::ui::{
    Sidebar, SidebarContent, SidebarGroup, SidebarGroupContent, SidebarGroupLabel,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, home_icon,
};

/// A static navigation entry.
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: fn() -> AnyView,
}

/// The menu is hardcoded; the shell has a single destination.
pub const NAV_ITEMS: [NavItem; 1] = [NavItem {
    label: "Home",
    href: "#",
    icon: home_icon,
}];

#[component]
pub fn AppSidebar() -> impl IntoView {
    view! {
        <Sidebar>
            <SidebarContent>
                <SidebarGroup>
                    <SidebarGroupLabel>"Application"</SidebarGroupLabel>
                    <SidebarGroupContent>
                        <SidebarMenu>
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <SidebarMenuItem>
                                            <SidebarMenuButton>
                                                <a href=item.href>
                                                    {(item.icon)()}
                                                    <span>{item.label}</span>
                                                </a>
                                            </SidebarMenuButton>
                                        </SidebarMenuItem>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </SidebarMenu>
                    </SidebarGroupContent>
                </SidebarGroup>
            </SidebarContent>
        </Sidebar>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn menu_has_single_home_entry() {
        assert_eq!(NAV_ITEMS.len(), 1);
        assert_eq!(NAV_ITEMS[0].label, "Home");
        assert_eq!(NAV_ITEMS[0].href, "#");
    }
}
