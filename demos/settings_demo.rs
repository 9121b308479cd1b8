//! Example demonstrating the settings store
//!
//! Run with: cargo run --example settings_demo

use slate_settings::{Config, Shortcut};
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Slate Settings Demo ===\n");

    let config = Config::with_settings_path(std::env::temp_dir().join("slate-settings-demo.toml"));
    let settings = Rc::new(config.open_settings());

    let watcher = Rc::downgrade(&settings);
    settings.on_grid_visible_changed(move || {
        if let Some(settings) = watcher.upgrade() {
            println!("  -> grid visible is now {}", settings.is_grid_visible());
        }
    });

    println!("Grid visible: {}", settings.is_grid_visible());
    let visible = settings.is_grid_visible();
    settings.set_grid_visible(!visible);
    println!("Setting the same value again notifies nobody:");
    settings.set_grid_visible(!visible);

    println!("\nQuit shortcut: {}", settings.quit_shortcut());
    settings.set_shortcut(Shortcut::PenTool, "P");
    println!("Pen tool shortcut: {}", settings.pen_tool_shortcut());

    let restored = settings.reset_shortcuts_to_defaults();
    println!("Restored {} shortcut(s); pen tool is {}", restored, settings.pen_tool_shortcut());

    println!("\nSettings file: {}", config.settings_path().display());
    Ok(())
}
