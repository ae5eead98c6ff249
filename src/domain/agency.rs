//! Agency - Fixed Contact Details
//!
//! Contact points that are not dictionary entries; identical in every
//! locale.

pub const BRAND_NAME: &str = "KAIROS TEAM";
pub const BRAND_TAGLINE: &str = "SMM • Content • Ads";
pub const BRAND_TAGLINE_RU: &str = "SMM • Контент • Реклама";

pub const PHONE_DISPLAY: &str = "+48 503 413 651";
pub const PHONE_URL: &str = "tel:+48503413651";

pub const EMAIL: &str = "sardo@kairosteams.com";
pub const EMAIL_URL: &str = "mailto:sardo@kairosteams.com";

pub const CALENDAR_URL: &str = "https://calendly.com/cerbius/working";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/_kairos_team_";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/kairos-team/";
