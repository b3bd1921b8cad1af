//! Wikileaders Extractor
//!
//! Turns a leader's Wikipedia article into one clean introductory paragraph.
//!
//! # Architecture
//!
//! ```text
//! wikipedia_url → BiographyFetcher → HTML → paragraphs → ParagraphSelector → normalize → first_paragraph
//! ```
//!
//! - [`BiographyFetcher`] issues the page request over the shared session
//! - [`extract_paragraphs`] returns the rendered text of every `<p>` block
//! - [`ParagraphSelector`] picks the first paragraph that is long enough and
//!   mentions the leader's first name or birth year
//! - [`normalize`] collapses whitespace and strips footnote markers and
//!   phonetic transcriptions
//!
//! # Example
//!
//! ```
//! use wikileaders_domain::LeaderRecord;
//! use wikileaders_extractor::{extract_biography, ParagraphSelector};
//!
//! let html = format!(
//!     "<p>Short.</p><p>Ada Lovelace[1] was born in 1815 and {}</p>",
//!     "wrote what is often called the first computer program for Babbage's engine."
//! );
//! let leader = LeaderRecord::new("Ada", "Lovelace").with_birth_date("1815-12-10");
//!
//! let paragraph = extract_biography(&leader, &html, &ParagraphSelector::default());
//! assert!(paragraph.starts_with("Ada Lovelace was born in 1815"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod fetcher;
mod html;
mod normalizer;
mod selector;


pub use config::{ExtractorConfig, DEFAULT_MIN_PARAGRAPH_CHARS, DEFAULT_USER_AGENT};
pub use error::ExtractorError;
pub use fetcher::BiographyFetcher;
pub use html::extract_paragraphs;
pub use normalizer::normalize;
pub use selector::ParagraphSelector;

use wikileaders_domain::LeaderRecord;

/// Parse, select and normalize in one step
///
/// Returns an empty string when no paragraph qualifies.
pub fn extract_biography(leader: &LeaderRecord, html: &str, selector: &ParagraphSelector) -> String {
    let candidates = extract_paragraphs(html);
    let selected = selector.select(leader, &candidates);
    normalize(&selected)
}
