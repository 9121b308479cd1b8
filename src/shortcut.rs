//! The fixed set of rebindable shortcuts and their defaults.

use crate::backend::SettingsBackend;
use crate::platform::StandardKey;
use crate::preference::Preference;
use crate::store::PreferenceStore;
use tracing::info;

macro_rules! shortcuts {
    ($($variant:ident => $key:literal, $default:expr;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Shortcut {
            $($variant,)*
        }

        impl Shortcut {
            /// Every shortcut, in the order bulk reset visits them
            pub const ALL: &'static [Shortcut] = &[$(Shortcut::$variant,)*];

            pub const fn key(self) -> &'static str {
                match self {
                    $(Shortcut::$variant => $key,)*
                }
            }

            pub fn preference(self) -> &'static Preference<String> {
                match self {
                    $(Shortcut::$variant => {
                        static PREF: Preference<String> =
                            Preference::new($key, || ($default).to_string());
                        &PREF
                    })*
                }
            }
        }
    };
}

shortcuts! {
    Quit => "quitShortcut", StandardKey::Quit.binding();
    New => "newShortcut", StandardKey::New.binding();
    Open => "openShortcut", StandardKey::Open.binding();
    Save => "saveShortcut", StandardKey::Save.binding();
    Close => "closeShortcut", StandardKey::Close.binding();
    Revert => "revertShortcut", "Ctrl+Shift+R";
    Undo => "undoShortcut", StandardKey::Undo.binding();
    Redo => "redoShortcut", StandardKey::Redo.binding();
    Centre => "centreShortcut", "Ctrl+Space";
    ZoomIn => "zoomInShortcut", StandardKey::ZoomIn.binding();
    ZoomOut => "zoomOutShortcut", StandardKey::ZoomOut.binding();
    GridVisible => "gridVisibleShortcut", "Ctrl+'";
    SplitScreen => "splitScreenShortcut", "Ctrl+E";
    Options => "optionsShortcut", "Ctrl+Alt+T";
    PenTool => "penToolShortcut", "B";
    EyeDropperTool => "eyeDropperToolShortcut", "I";
    EraserTool => "eraserToolShortcut", "E";
    SelectionTool => "selectionToolShortcut", "M";
    ToolMode => "toolModeShortcut", "T";
    DecreaseToolSize => "decreaseToolSizeShortcut", "[";
    IncreaseToolSize => "increaseToolSizeShortcut", "]";
    SwatchLeft => "swatchLeftShortcut", "A";
    SwatchRight => "swatchRightShortcut", "D";
    SwatchUp => "swatchUpShortcut", "W";
    SwatchDown => "swatchDownShortcut", "S";
}

impl Shortcut {
    pub fn default_binding(self) -> String {
        self.preference().default_value()
    }

    pub fn from_key(key: &str) -> Option<Shortcut> {
        Shortcut::ALL.iter().copied().find(|s| s.key() == key)
    }
}

/// Remove every stored shortcut so all of them read as their defaults.
///
/// Removal is unconditional. Once all keys are gone, each shortcut whose
/// effective value changed is notified, in [`Shortcut::ALL`] order.
/// Returns the number of shortcuts notified.
pub fn reset_shortcuts_to_defaults<B: SettingsBackend>(store: &PreferenceStore<B>) -> usize {
    let changed: Vec<Shortcut> = Shortcut::ALL
        .iter()
        .copied()
        .filter(|shortcut| {
            let pref = shortcut.preference();
            let before = store.get(pref);
            store.remove_key(pref.key()) && store.get(pref) != before
        })
        .collect();

    info!("Reset shortcuts to defaults, {} changed", changed.len());
    for shortcut in &changed {
        store.signals().emit(shortcut.key());
    }
    changed.len()
}
