use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Header switches to its solid background past this many pixels of scroll.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Sections trigger their entrance animation once they are this far inside the viewport.
pub const IN_VIEW_MARGIN: f64 = 100.0;

// Media showcase timings, in milliseconds.
pub const MEDIA_EXIT_DELAY_MS: u32 = 300;
pub const MEDIA_SETTLE_DELAY_MS: u32 = 100;
pub const MEDIA_RELOAD_DELAY_MS: u32 = 50;
pub const SLIDESHOW_INTERVAL_MS: u32 = 4000;

pub const CONTACT_EMAIL: &str = "makiiagenciadigital6@gmail.com";
pub const WHATSAPP_NUMBER: &str = "+55 (92) 98168-6606";
pub const WHATSAPP_DISPLAY: &str = "(92) 98168-6606";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/makii.publicidade/";
pub const INSTAGRAM_HANDLE: &str = "@makii.publicidade";
pub const CITY: &str = "Manaus, AM - Brasil";

pub const LOGO_SRC: &str = "/logo.jpeg";

pub fn mailto_link(address: &str) -> String {
    format!("mailto:{}", address)
}

/// WhatsApp deep links only accept the bare international number.
pub fn whatsapp_link(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}", digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_strips_formatting() {
        assert_eq!(
            whatsapp_link(WHATSAPP_NUMBER),
            "https://wa.me/5592981686606"
        );
    }

    #[test]
    fn mailto_link_prefixes_scheme() {
        assert_eq!(
            mailto_link(CONTACT_EMAIL),
            "mailto:makiiagenciadigital6@gmail.com"
        );
    }

    #[test]
    fn settle_happens_after_reload() {
        assert!(MEDIA_RELOAD_DELAY_MS < MEDIA_SETTLE_DELAY_MS);
    }
}
