
/// Build-time override for the API origin, e.g. `API_BASE_URL=https://api.utkloud.in trunk build`.
const API_BASE_URL_OVERRIDE: Option<&str> = option_env!("API_BASE_URL");

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    API_BASE_URL_OVERRIDE.unwrap_or("http://localhost:10000")  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    API_BASE_URL_OVERRIDE.unwrap_or("")  // Same origin in production
}

pub const ENROLLMENT_SUBMIT_PATH: &str = "/api/enrollment/submit";
pub const OUR_SECTION_PATH: &str = "/api/our-section/all";

/// Attribute that opts an element into reveal tracking.
pub const REVEAL_ATTRIBUTE: &str = "data-reveal-id";

/// How newly injected tagged elements are discovered after mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rescan {
    /// Re-query the document every `n` milliseconds.
    Interval(u32),
    /// React to node insertions under `<body>`.
    Mutations,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    pub root_margin: String,
    pub rescan: Rescan,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "50px".to_string(),
            rescan: Rescan::Interval(1000),
        }
    }
}

pub fn reveal_config() -> RevealConfig {
    RevealConfig::default()
}

pub const TESTIMONIAL_AUTOPLAY_MS: u32 = 5000;
pub const TESTIMONIALS_PER_PAGE: usize = 3;
