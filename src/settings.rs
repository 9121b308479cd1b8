//! Application preferences
//!
//! Every preference gets a getter, a setter that reports whether anything
//! changed, its default, and a change subscription. The key strings are
//! what existing settings files contain and must not change.

use crate::backend::{SettingsBackend, SettingsError};
use crate::preference::Preference;
use crate::shortcut::{self, Shortcut};
use crate::signal::SubscriptionId;
use crate::store::PreferenceStore;
use crate::value::PreferenceValue;
use url::Url;

pub static LAST_PROJECT_URL: Preference<Option<Url>> = Preference::new("lastProjectUrl", || None);
pub static LOAD_LAST_ON_STARTUP: Preference<bool> = Preference::new("loadLastOnStartup", || false);
pub static GRID_VISIBLE: Preference<bool> = Preference::new("gridVisible", || true);
pub static SPLIT_SCREEN: Preference<bool> = Preference::new("splitScreen", || true);
pub static SPLITTER_LOCKED: Preference<bool> = Preference::new("splitterLocked", || true);
pub static SCROLL_ZOOM: Preference<bool> = Preference::new("scrollZoom", || true);

/// One preference of any type, for code that only knows the key
#[derive(Clone, Copy)]
enum Entry {
    Flag(&'static Preference<bool>),
    Location(&'static Preference<Option<Url>>),
    Binding(Shortcut),
}

static GENERAL: [Entry; 6] = [
    Entry::Location(&LAST_PROJECT_URL),
    Entry::Flag(&LOAD_LAST_ON_STARTUP),
    Entry::Flag(&GRID_VISIBLE),
    Entry::Flag(&SPLIT_SCREEN),
    Entry::Flag(&SPLITTER_LOCKED),
    Entry::Flag(&SCROLL_ZOOM),
];

/// Snapshot of one preference, as listed by [`ApplicationSettings::entries`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceEntry {
    pub key: &'static str,
    pub kind: &'static str,
    pub value: String,
    pub default: String,
    /// Whether a value is stored, as opposed to the default being in effect
    pub stored: bool,
}

impl Entry {
    fn all() -> impl Iterator<Item = Entry> {
        GENERAL
            .iter()
            .copied()
            .chain(Shortcut::ALL.iter().copied().map(Entry::Binding))
    }

    fn find(key: &str) -> Option<Entry> {
        Self::all().find(|entry| entry.key() == key)
    }

    fn key(self) -> &'static str {
        match self {
            Entry::Flag(pref) => pref.key(),
            Entry::Location(pref) => pref.key(),
            Entry::Binding(shortcut) => shortcut.key(),
        }
    }

    fn describe<B: SettingsBackend>(self, store: &PreferenceStore<B>) -> PreferenceEntry {
        match self {
            Entry::Flag(pref) => describe(store, pref),
            Entry::Location(pref) => describe(store, pref),
            Entry::Binding(shortcut) => describe(store, shortcut.preference()),
        }
    }

    fn set_from_str<B: SettingsBackend>(
        self,
        store: &PreferenceStore<B>,
        text: &str,
    ) -> Result<bool, SettingsError> {
        match self {
            Entry::Flag(pref) => parse_and_set(store, pref, text),
            Entry::Location(pref) => parse_and_set(store, pref, text),
            Entry::Binding(shortcut) => parse_and_set(store, shortcut.preference(), text),
        }
    }

    fn reset<B: SettingsBackend>(self, store: &PreferenceStore<B>) -> bool {
        match self {
            Entry::Flag(pref) => store.reset(pref),
            Entry::Location(pref) => store.reset(pref),
            Entry::Binding(shortcut) => store.reset(shortcut.preference()),
        }
    }
}

fn describe<T: PreferenceValue, B: SettingsBackend>(
    store: &PreferenceStore<B>,
    pref: &Preference<T>,
) -> PreferenceEntry {
    PreferenceEntry {
        key: pref.key(),
        kind: T::TYPE_NAME,
        value: store.get(pref).display(),
        default: pref.default_value().display(),
        stored: store.is_stored(pref),
    }
}

fn parse_and_set<T: PreferenceValue, B: SettingsBackend>(
    store: &PreferenceStore<B>,
    pref: &Preference<T>,
    text: &str,
) -> Result<bool, SettingsError> {
    let value = T::parse_text(text).ok_or_else(|| SettingsError::InvalidValue {
        key: pref.key().to_string(),
        value: text.to_string(),
        expected: T::TYPE_NAME,
    })?;
    Ok(store.set(pref, value))
}

/// The application's preferences on top of a settings backend.
pub struct ApplicationSettings<B> {
    store: PreferenceStore<B>,
}

impl<B: SettingsBackend> ApplicationSettings<B> {
    pub fn new(backend: B) -> Self {
        Self {
            store: PreferenceStore::new(backend),
        }
    }

    pub fn store(&self) -> &PreferenceStore<B> {
        &self.store
    }

    pub fn into_backend(self) -> B {
        self.store.into_backend()
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn shortcut(&self, shortcut: Shortcut) -> String {
        self.store.get(shortcut.preference())
    }

    pub fn set_shortcut(&self, shortcut: Shortcut, binding: &str) -> bool {
        self.store.set(shortcut.preference(), binding.to_string())
    }

    pub fn default_shortcut(&self, shortcut: Shortcut) -> String {
        shortcut.default_binding()
    }

    pub fn on_shortcut_changed(
        &self,
        shortcut: Shortcut,
        observer: impl Fn() + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(shortcut.preference(), observer)
    }

    /// See [`shortcut::reset_shortcuts_to_defaults`]
    pub fn reset_shortcuts_to_defaults(&self) -> usize {
        shortcut::reset_shortcuts_to_defaults(&self.store)
    }

    /// Every preference, general ones first, then shortcuts
    pub fn entries(&self) -> Vec<PreferenceEntry> {
        Entry::all().map(|entry| entry.describe(&self.store)).collect()
    }

    pub fn entry(&self, key: &str) -> Result<PreferenceEntry, SettingsError> {
        Ok(Self::lookup(key)?.describe(&self.store))
    }

    /// Parse `text` as the value type of `key` and set it
    pub fn set_from_str(&self, key: &str, text: &str) -> Result<bool, SettingsError> {
        Self::lookup(key)?.set_from_str(&self.store, text)
    }

    pub fn reset_key(&self, key: &str) -> Result<bool, SettingsError> {
        Ok(Self::lookup(key)?.reset(&self.store))
    }

    fn lookup(key: &str) -> Result<Entry, SettingsError> {
        Entry::find(key).ok_or_else(|| SettingsError::UnknownKey(key.to_string()))
    }
}

macro_rules! preferences {
    ($($getter:ident, $setter:ident, $default_fn:ident, $on_changed:ident: $ty:ty => $pref:ident;)*) => {
        impl<B: SettingsBackend> ApplicationSettings<B> {
            $(
                pub fn $getter(&self) -> $ty {
                    self.store.get(&$pref)
                }

                pub fn $setter(&self, value: $ty) -> bool {
                    self.store.set(&$pref, value)
                }

                pub fn $default_fn(&self) -> $ty {
                    $pref.default_value()
                }

                pub fn $on_changed(&self, observer: impl Fn() + 'static) -> SubscriptionId {
                    self.store.subscribe(&$pref, observer)
                }
            )*
        }
    };
}

preferences! {
    last_project_url, set_last_project_url, default_last_project_url, on_last_project_url_changed: Option<Url> => LAST_PROJECT_URL;
    load_last_on_startup, set_load_last_on_startup, default_load_last_on_startup, on_load_last_on_startup_changed: bool => LOAD_LAST_ON_STARTUP;
    is_grid_visible, set_grid_visible, default_grid_visible, on_grid_visible_changed: bool => GRID_VISIBLE;
    is_split_screen, set_split_screen, default_split_screen, on_split_screen_changed: bool => SPLIT_SCREEN;
    is_splitter_locked, set_splitter_locked, default_splitter_locked, on_splitter_locked_changed: bool => SPLITTER_LOCKED;
    scroll_zoom, set_scroll_zoom, default_scroll_zoom, on_scroll_zoom_changed: bool => SCROLL_ZOOM;
}

macro_rules! shortcut_accessors {
    ($($getter:ident, $setter:ident, $default_fn:ident, $on_changed:ident => $shortcut:ident;)*) => {
        impl<B: SettingsBackend> ApplicationSettings<B> {
            $(
                pub fn $getter(&self) -> String {
                    self.shortcut(Shortcut::$shortcut)
                }

                pub fn $setter(&self, binding: &str) -> bool {
                    self.set_shortcut(Shortcut::$shortcut, binding)
                }

                pub fn $default_fn(&self) -> String {
                    Shortcut::$shortcut.default_binding()
                }

                pub fn $on_changed(&self, observer: impl Fn() + 'static) -> SubscriptionId {
                    self.on_shortcut_changed(Shortcut::$shortcut, observer)
                }
            )*
        }
    };
}

shortcut_accessors! {
    quit_shortcut, set_quit_shortcut, default_quit_shortcut, on_quit_shortcut_changed => Quit;
    new_shortcut, set_new_shortcut, default_new_shortcut, on_new_shortcut_changed => New;
    open_shortcut, set_open_shortcut, default_open_shortcut, on_open_shortcut_changed => Open;
    save_shortcut, set_save_shortcut, default_save_shortcut, on_save_shortcut_changed => Save;
    close_shortcut, set_close_shortcut, default_close_shortcut, on_close_shortcut_changed => Close;
    revert_shortcut, set_revert_shortcut, default_revert_shortcut, on_revert_shortcut_changed => Revert;
    undo_shortcut, set_undo_shortcut, default_undo_shortcut, on_undo_shortcut_changed => Undo;
    redo_shortcut, set_redo_shortcut, default_redo_shortcut, on_redo_shortcut_changed => Redo;
    centre_shortcut, set_centre_shortcut, default_centre_shortcut, on_centre_shortcut_changed => Centre;
    zoom_in_shortcut, set_zoom_in_shortcut, default_zoom_in_shortcut, on_zoom_in_shortcut_changed => ZoomIn;
    zoom_out_shortcut, set_zoom_out_shortcut, default_zoom_out_shortcut, on_zoom_out_shortcut_changed => ZoomOut;
    grid_visible_shortcut, set_grid_visible_shortcut, default_grid_visible_shortcut, on_grid_visible_shortcut_changed => GridVisible;
    split_screen_shortcut, set_split_screen_shortcut, default_split_screen_shortcut, on_split_screen_shortcut_changed => SplitScreen;
    options_shortcut, set_options_shortcut, default_options_shortcut, on_options_shortcut_changed => Options;
    pen_tool_shortcut, set_pen_tool_shortcut, default_pen_tool_shortcut, on_pen_tool_shortcut_changed => PenTool;
    eye_dropper_tool_shortcut, set_eye_dropper_tool_shortcut, default_eye_dropper_tool_shortcut, on_eye_dropper_tool_shortcut_changed => EyeDropperTool;
    eraser_tool_shortcut, set_eraser_tool_shortcut, default_eraser_tool_shortcut, on_eraser_tool_shortcut_changed => EraserTool;
    selection_tool_shortcut, set_selection_tool_shortcut, default_selection_tool_shortcut, on_selection_tool_shortcut_changed => SelectionTool;
    tool_mode_shortcut, set_tool_mode_shortcut, default_tool_mode_shortcut, on_tool_mode_shortcut_changed => ToolMode;
    decrease_tool_size_shortcut, set_decrease_tool_size_shortcut, default_decrease_tool_size_shortcut, on_decrease_tool_size_shortcut_changed => DecreaseToolSize;
    increase_tool_size_shortcut, set_increase_tool_size_shortcut, default_increase_tool_size_shortcut, on_increase_tool_size_shortcut_changed => IncreaseToolSize;
    swatch_left_shortcut, set_swatch_left_shortcut, default_swatch_left_shortcut, on_swatch_left_shortcut_changed => SwatchLeft;
    swatch_right_shortcut, set_swatch_right_shortcut, default_swatch_right_shortcut, on_swatch_right_shortcut_changed => SwatchRight;
    swatch_up_shortcut, set_swatch_up_shortcut, default_swatch_up_shortcut, on_swatch_up_shortcut_changed => SwatchUp;
    swatch_down_shortcut, set_swatch_down_shortcut, default_swatch_down_shortcut, on_swatch_down_shortcut_changed => SwatchDown;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::platform::StandardKey;
    use crate::value::RawValue;
    use std::cell::Cell;
    use std::rc::Rc;

    fn settings() -> ApplicationSettings<MemoryBackend> {
        ApplicationSettings::new(MemoryBackend::new())
    }

    fn count_calls(
        subscribe: impl FnOnce(Box<dyn Fn()>) -> SubscriptionId,
    ) -> Rc<Cell<usize>> {
        let hits = Rc::new(Cell::new(0));
        let inner = Rc::clone(&hits);
        subscribe(Box::new(move || inner.set(inner.get() + 1)));
        hits
    }

    #[test]
    fn test_general_defaults() {
        let settings = settings();
        assert_eq!(settings.last_project_url(), None);
        assert!(!settings.load_last_on_startup());
        assert!(settings.is_grid_visible());
        assert!(settings.is_split_screen());
        assert!(settings.is_splitter_locked());
        assert!(settings.scroll_zoom());
        assert_eq!(settings.default_grid_visible(), settings.is_grid_visible());
    }

    #[test]
    fn test_shortcut_defaults() {
        let settings = settings();
        assert_eq!(settings.quit_shortcut(), StandardKey::Quit.binding());
        assert_eq!(settings.new_shortcut(), StandardKey::New.binding());
        assert_eq!(settings.open_shortcut(), StandardKey::Open.binding());
        assert_eq!(settings.save_shortcut(), StandardKey::Save.binding());
        assert_eq!(settings.close_shortcut(), StandardKey::Close.binding());
        assert_eq!(settings.undo_shortcut(), StandardKey::Undo.binding());
        assert_eq!(settings.redo_shortcut(), StandardKey::Redo.binding());
        assert_eq!(settings.zoom_in_shortcut(), StandardKey::ZoomIn.binding());
        assert_eq!(settings.zoom_out_shortcut(), StandardKey::ZoomOut.binding());

        assert_eq!(settings.revert_shortcut(), "Ctrl+Shift+R");
        assert_eq!(settings.grid_visible_shortcut(), "Ctrl+'");
        assert_eq!(settings.centre_shortcut(), "Ctrl+Space");
        assert_eq!(settings.split_screen_shortcut(), "Ctrl+E");
        assert_eq!(settings.options_shortcut(), "Ctrl+Alt+T");
        assert_eq!(settings.pen_tool_shortcut(), "B");
        assert_eq!(settings.eye_dropper_tool_shortcut(), "I");
        assert_eq!(settings.eraser_tool_shortcut(), "E");
        assert_eq!(settings.selection_tool_shortcut(), "M");
        assert_eq!(settings.tool_mode_shortcut(), "T");
        assert_eq!(settings.decrease_tool_size_shortcut(), "[");
        assert_eq!(settings.increase_tool_size_shortcut(), "]");
        assert_eq!(settings.swatch_left_shortcut(), "A");
        assert_eq!(settings.swatch_right_shortcut(), "D");
        assert_eq!(settings.swatch_up_shortcut(), "W");
        assert_eq!(settings.swatch_down_shortcut(), "S");
    }

    #[test]
    fn test_every_preference_reads_default_before_set() {
        let settings = settings();
        for entry in settings.entries() {
            assert_eq!(entry.value, entry.default, "{}", entry.key);
            assert!(!entry.stored);
        }
        assert_eq!(settings.entries().len(), 31);
    }

    #[test]
    fn test_grid_visible_scenario() {
        let settings = settings();
        let hits = count_calls(|f| settings.on_grid_visible_changed(f));

        assert!(settings.set_grid_visible(false));
        assert_eq!(hits.get(), 1);
        assert_eq!(
            settings.store().backend().get("gridVisible"),
            Some(RawValue::Bool(false))
        );

        assert!(!settings.set_grid_visible(false));
        assert_eq!(hits.get(), 1);

        settings.set_pen_tool_shortcut("P");
        settings.reset_shortcuts_to_defaults();
        assert!(!settings.is_grid_visible());
        assert_eq!(settings.pen_tool_shortcut(), "B");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_setting_standard_quit_binding_does_not_write() {
        let settings = settings();
        let hits = count_calls(|f| settings.on_quit_shortcut_changed(f));

        assert!(!settings.set_quit_shortcut(StandardKey::Quit.binding()));
        assert_eq!(settings.store().backend().write_count(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_set_every_shortcut_once() {
        let settings = settings();
        let total = Rc::new(Cell::new(0));
        for shortcut in Shortcut::ALL.iter().copied() {
            let total = Rc::clone(&total);
            settings.on_shortcut_changed(shortcut, move || total.set(total.get() + 1));
        }

        for shortcut in Shortcut::ALL.iter().copied() {
            assert!(settings.set_shortcut(shortcut, "F12"));
            assert!(!settings.set_shortcut(shortcut, "F12"));
            assert_eq!(settings.shortcut(shortcut), "F12");
        }
        assert_eq!(total.get(), Shortcut::ALL.len());

        assert_eq!(settings.reset_shortcuts_to_defaults(), Shortcut::ALL.len());
        assert_eq!(total.get(), 2 * Shortcut::ALL.len());
        for shortcut in Shortcut::ALL.iter().copied() {
            assert_eq!(settings.shortcut(shortcut), settings.default_shortcut(shortcut));
        }
    }

    fn assert_changes_once<T: PreferenceValue>(
        settings: &ApplicationSettings<MemoryBackend>,
        pref: &Preference<T>,
        value: T,
    ) {
        let store = settings.store();
        let hits = Rc::new(Cell::new(0));
        let inner = Rc::clone(&hits);
        store.subscribe(pref, move || inner.set(inner.get() + 1));
        let writes = store.backend().write_count();

        assert!(!store.set(pref, pref.default_value()), "{}", pref.key());
        assert_eq!(hits.get(), 0, "{}", pref.key());
        assert_eq!(store.backend().write_count(), writes, "{}", pref.key());

        assert!(store.set(pref, value.clone()), "{}", pref.key());
        assert_eq!(store.get(pref), value, "{}", pref.key());
        assert_eq!(hits.get(), 1, "{}", pref.key());

        assert!(!store.set(pref, value), "{}", pref.key());
        assert_eq!(hits.get(), 1, "{}", pref.key());
        assert_eq!(store.backend().write_count(), writes + 1, "{}", pref.key());
    }

    #[test]
    fn test_set_every_general_preference_once() {
        let settings = settings();
        for entry in GENERAL.iter().copied() {
            match entry {
                Entry::Flag(pref) => assert_changes_once(&settings, pref, !pref.default_value()),
                Entry::Location(pref) => assert_changes_once(
                    &settings,
                    pref,
                    Some(Url::parse("file:///home/artist/palette.slp").unwrap()),
                ),
                Entry::Binding(shortcut) => {
                    assert_changes_once(&settings, shortcut.preference(), "F9".to_string())
                }
            }
        }

        assert_eq!(settings.store().backend().write_count(), GENERAL.len());
        assert_eq!(settings.reset_shortcuts_to_defaults(), 0);
        assert_ne!(settings.load_last_on_startup(), settings.default_load_last_on_startup());
        assert_ne!(settings.is_grid_visible(), settings.default_grid_visible());
    }

    #[test]
    fn test_last_project_url() {
        let settings = settings();
        let hits = count_calls(|f| settings.on_last_project_url_changed(f));

        assert!(!settings.set_last_project_url(None));
        let url = Url::parse("file:///home/artist/sprites/hero.slp").unwrap();
        assert!(settings.set_last_project_url(Some(url.clone())));
        assert!(!settings.set_last_project_url(Some(url.clone())));
        assert_eq!(settings.last_project_url(), Some(url));

        assert!(settings.set_last_project_url(None));
        assert_eq!(settings.last_project_url(), None);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_set_from_str() {
        let settings = settings();

        assert!(settings.set_from_str("scrollZoom", "off").unwrap());
        assert!(!settings.scroll_zoom());
        assert!(!settings.set_from_str("scrollZoom", "false").unwrap());

        assert!(settings.set_from_str("eraserToolShortcut", "Shift+E").unwrap());
        assert_eq!(settings.eraser_tool_shortcut(), "Shift+E");

        assert!(matches!(
            settings.set_from_str("gridVisible", "sometimes"),
            Err(SettingsError::InvalidValue { .. })
        ));
        assert!(matches!(
            settings.set_from_str("GridVisible", "true"),
            Err(SettingsError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_reset_key() {
        let settings = settings();
        settings.set_splitter_locked(false);

        let entry = settings.entry("splitterLocked").unwrap();
        assert!(entry.stored);
        assert_eq!(entry.value, "false");
        assert_eq!(entry.kind, "boolean");

        assert!(settings.reset_key("splitterLocked").unwrap());
        assert!(settings.is_splitter_locked());
        assert!(!settings.reset_key("splitterLocked").unwrap());
        assert!(settings.reset_key("nope").is_err());
    }

    #[test]
    fn test_unsubscribe() {
        let settings = settings();
        let hits = Rc::new(Cell::new(0));
        let inner = Rc::clone(&hits);
        let id = settings.on_split_screen_changed(move || inner.set(inner.get() + 1));

        settings.set_split_screen(false);
        assert!(settings.unsubscribe(id));
        settings.set_split_screen(true);
        assert_eq!(hits.get(), 1);
    }
}
