//! Meeting-room URL classification
//!
//! A Google Meet tab counts as an active meeting only when its URL points at
//! a meeting room, not at the landing page or the "create new meeting" flow.

/// URL marker identifying a Google Meet page
pub const MEET_URL_MARKER: &str = "meet.google.com/";

/// Path segments under the Meet host that are not meeting rooms
pub const EXCLUDED_MEET_PATHS: &[&str] = &["landing", "new", "lookup"];

/// Classify a browser tab URL as a meeting room.
///
/// A URL is active when it contains one of `markers` and the first path
/// segment after the marker is non-empty and not one of `excluded_paths`.
/// Query strings and fragments are ignored.
pub fn is_meeting_room_url<M, E>(url: &str, markers: &[M], excluded_paths: &[E]) -> bool
where
    M: AsRef<str>,
    E: AsRef<str>,
{
    let url_lower = url.to_lowercase();

    for marker in markers {
        let marker = marker.as_ref();
        let Some(pos) = url_lower.find(marker) else {
            continue;
        };

        let rest = &url_lower[pos + marker.len()..];
        let segment = rest
            .split(['?', '#'])
            .next()
            .unwrap_or("")
            .split('/')
            .next()
            .unwrap_or("")
            .trim();

        if segment.is_empty() {
            continue;
        }
        if excluded_paths.iter().any(|p| p.as_ref() == segment) {
            continue;
        }
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(url: &str) -> bool {
        is_meeting_room_url(url, &[MEET_URL_MARKER], EXCLUDED_MEET_PATHS)
    }

    #[test]
    fn room_url_is_active() {
        assert!(classify("https://meet.google.com/abc-defg-hij"));
    }

    #[test]
    fn landing_page_is_not_active() {
        assert!(!classify("https://meet.google.com/landing"));
    }

    #[test]
    fn new_meeting_page_is_not_active() {
        assert!(!classify("https://meet.google.com/new"));
    }

    #[test]
    fn lookup_page_is_not_active() {
        assert!(!classify("https://meet.google.com/lookup"));
    }

    #[test]
    fn bare_host_is_not_active() {
        assert!(!classify("https://meet.google.com/"));
        assert!(!classify("https://meet.google.com"));
    }

    #[test]
    fn unrelated_url_is_not_active() {
        assert!(!classify("https://calendar.google.com/calendar/r"));
        assert!(!classify("https://example.com/meeting"));
    }

    #[test]
    fn query_string_is_ignored() {
        assert!(classify("https://meet.google.com/abc-defg-hij?authuser=1"));
        assert!(!classify("https://meet.google.com/landing?hs=197"));
    }

    #[test]
    fn trailing_path_after_room_code() {
        assert!(classify("https://meet.google.com/abc-defg-hij/extra"));
    }

    #[test]
    fn host_match_is_case_insensitive() {
        assert!(classify("https://MEET.GOOGLE.COM/abc-defg-hij"));
    }
}
