
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Served by the backend itself in production
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}

pub const BOOKING_URL: &str = "https://cal.com/websives/30min";
pub const CONTACT_EMAIL: &str = "info@websives.com";
pub const CONTACT_PHONE: &str = "+46 79-301 05 68";
pub const CONTACT_PHONE_LINK: &str = "tel:+46793010568";
pub const LOCATION: &str = "Piteå, Sverige";
pub const COPYRIGHT_YEAR: u32 = 2025;
