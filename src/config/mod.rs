pub mod menus;
pub mod settings;
