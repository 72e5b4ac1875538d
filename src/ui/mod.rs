//! Crate-internal UI primitives composed by the shell.

mod icons;
mod sidebar;

pub use icons::{home_icon, panel_left_icon};
pub use sidebar::{
    Sidebar, SidebarContent, SidebarContext, SidebarGroup, SidebarGroupContent,
    SidebarGroupLabel, SidebarMenu, SidebarMenuButton, SidebarMenuItem,
    SidebarProvider, SidebarTrigger,
};
