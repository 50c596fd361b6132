use tauri::{
    menu::{Menu, MenuBuilder, MenuItemBuilder, SubmenuBuilder},
    AppHandle, Runtime,
};

use crate::menu_actions::{
    MENU_BACK, MENU_FORWARD, MENU_MOVE_TO_END, MENU_MOVE_TO_START, MENU_OPEN_FILE,
    MENU_SAVE_DECOMPRESSED, MENU_TOGGLE_DEVTOOLS, MENU_TOGGLE_DOCKING_RANGES,
    MENU_TOGGLE_WEAPON_RANGES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item {
        id: &'static str,
        label: &'static str,
        accelerator: Option<&'static str>,
    },
    Separator,
    /// Host-provided quit item.
    Quit,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuGroup {
    pub label: &'static str,
    pub entries: &'static [MenuEntry],
}

pub const APP_MENU: &[MenuGroup] = &[
    MenuGroup {
        label: "File",
        entries: &[
            MenuEntry::Item {
                id: MENU_OPEN_FILE,
                label: "Open...",
                accelerator: Some("CmdOrCtrl+O"),
            },
            MenuEntry::Item {
                id: MENU_SAVE_DECOMPRESSED,
                label: "Save decompressed JSON...",
                accelerator: Some("CmdOrCtrl+S"),
            },
            MenuEntry::Separator,
            MenuEntry::Quit,
            MenuEntry::Separator,
            MenuEntry::Item {
                id: MENU_TOGGLE_DEVTOOLS,
                label: "Toggle Developer Tools",
                accelerator: Some("CmdOrCtrl+Shift+I"),
            },
        ],
    },
    MenuGroup {
        label: "Navigation",
        entries: &[
            MenuEntry::Item {
                id: MENU_FORWARD,
                label: "Forward",
                accelerator: Some("Right"),
            },
            MenuEntry::Item {
                id: MENU_BACK,
                label: "Back",
                accelerator: Some("Left"),
            },
            MenuEntry::Separator,
            MenuEntry::Item {
                id: MENU_MOVE_TO_START,
                label: "Move To Start",
                accelerator: Some("Home"),
            },
            MenuEntry::Item {
                id: MENU_MOVE_TO_END,
                label: "Move To End",
                accelerator: Some("End"),
            },
        ],
    },
    MenuGroup {
        label: "View",
        entries: &[
            MenuEntry::Item {
                id: MENU_TOGGLE_WEAPON_RANGES,
                label: "Toggle Weapon Ranges",
                accelerator: None,
            },
            MenuEntry::Item {
                id: MENU_TOGGLE_DOCKING_RANGES,
                label: "Toggle Docking Ranges",
                accelerator: None,
            },
        ],
    },
];

pub fn build_app_menu<R: Runtime>(
    app_handle: &AppHandle<R>,
    groups: &[MenuGroup],
) -> Result<Menu<R>, String> {
    let mut menu_builder = MenuBuilder::new(app_handle);

    for group in groups {
        let mut submenu_builder = SubmenuBuilder::new(app_handle, group.label);
        for entry in group.entries {
            submenu_builder = match *entry {
                MenuEntry::Item {
                    id,
                    label,
                    accelerator,
                } => {
                    let mut item_builder = MenuItemBuilder::with_id(id, label);
                    if let Some(accelerator) = accelerator {
                        item_builder = item_builder.accelerator(accelerator);
                    }
                    let item = item_builder
                        .build(app_handle)
                        .map_err(|error| format!("Failed to create menu item {id}: {error}"))?;
                    submenu_builder.item(&item)
                }
                MenuEntry::Separator => submenu_builder.separator(),
                MenuEntry::Quit => submenu_builder.quit(),
            };
        }

        let submenu = submenu_builder
            .build()
            .map_err(|error| format!("Failed to build {} menu: {}", group.label, error))?;
        menu_builder = menu_builder.item(&submenu);
    }

    menu_builder
        .build()
        .map_err(|error| format!("Failed to build application menu: {error}"))
}

pub fn install_app_menu<R: Runtime>(app_handle: &AppHandle<R>) -> Result<(), String> {
    let menu = build_app_menu(app_handle, APP_MENU)?;
    app_handle
        .set_menu(menu)
        .map(|_| ())
        .map_err(|error| format!("Failed to install application menu: {error}"))
}
