/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "mitchcurtis";
pub const APP_NAME: &str = "Slate";

/// Name of the preferences file inside the confy config directory
pub const SETTINGS_NAME: &str = "settings";
