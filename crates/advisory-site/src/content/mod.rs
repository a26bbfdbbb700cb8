//! Read-only access to the guides published on the site.

mod guides;

pub use guides::{ContentError, Guide, GuideLibrary, GuideMeta, DEFAULT_AUTHOR, WORDS_PER_MINUTE};
