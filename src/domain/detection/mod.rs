//! Meeting detection domain types and URL classification

pub mod meeting;
pub mod url;

pub use meeting::{ActiveMeeting, MeetingKind, SourceReport};
pub use url::{is_meeting_room_url, EXCLUDED_MEET_PATHS, MEET_URL_MARKER};
