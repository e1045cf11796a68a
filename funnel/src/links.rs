//! Hrefs between the funnel pages. Path segments and query values use
//! `encodeURIComponent`-style escaping so links match what a browser would build.

/// Path segment for `/demo/:slug`.
pub fn demo_slug(clinic_name: &str) -> String {
    urlencoding::encode(clinic_name.trim()).into_owned()
}

pub fn onboard_href(clinic_name: &str) -> String {
    format!("/onboard?clinicName={}", urlencoding::encode(clinic_name))
}

/// Clinic name from a `/demo/:slug` segment. Falls back to the raw slug when the
/// decoded bytes are not UTF-8.
pub fn clinic_from_slug(slug: &str) -> String {
    urlencoding::decode(slug)
        .map(|name| name.into_owned())
        .unwrap_or_else(|_| slug.to_string())
}
