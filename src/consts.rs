/// Default host all web-services URLs are built from
pub const DEFAULT_WEB_SERVICES_URL: &str = "https://services.runescape.com";
