//! Request payloads, random URL generation, and per-user session state shared
//! by all load test transactions.

use goose::prelude::*;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use url::Url;

/// Every shortening request authenticates with this API key; it must identify
/// a client configured on the target service.
pub const API_KEY: &str = "foo";

/// Prefix of every randomly generated URL submitted for shortening.
pub const TARGET_URL_PREFIX: &str = "https://example.com/";

/// Length of the random suffix appended to [`TARGET_URL_PREFIX`].
pub const SHORT_SUFFIX_LENGTH: usize = 10;

/// Alphabet the random suffix is drawn from.
const SHORT_SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Upper bound on links remembered per user, bounds per-user memory on long
/// running load tests.
const MAX_SEEDED_LINKS: usize = 1_000;

/// JSON payload submitted to `POST /v1/shortLinks`.
#[derive(Debug, Clone, Serialize)]
pub struct ShortLinkRequest {
    pub api_key: &'static str,
    pub url: String,
}

impl ShortLinkRequest {
    /// A request to shorten `url`.
    pub fn new(url: String) -> Self {
        ShortLinkRequest { api_key: API_KEY, url }
    }

    /// A request to shorten a freshly generated random URL.
    pub fn random() -> Self {
        ShortLinkRequest::new(target_url_for(&random_suffix()))
    }
}

/// Response returned when a link is shortened. The service mimics the
/// Firebase Dynamic Links API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortLinkResponse {
    pub short_link: String,
    pub preview_link: String,
    #[serde(default)]
    pub warning: Vec<serde_json::Value>,
}

impl CreateShortLinkResponse {
    /// The short code is the final path segment of the returned short link.
    pub fn short_code(&self) -> Option<String> {
        short_code_from_link(&self.short_link)
    }
}

/// Response returned when a short link is expanded.
#[derive(Debug, Deserialize)]
pub struct ExpandShortLinkResponse {
    pub full_url: String,
}

/// A link created earlier in the load test, tracked so later transactions can
/// expand or follow it.
#[derive(Debug, Clone)]
pub struct SeededLink {
    pub short_code: String,
    pub target_url: String,
}

/// Per-user session state: the links this user has created. Users never share
/// state with each other.
struct ShortLinkSession {
    links: Vec<SeededLink>,
}

/// Generate a random suffix with the thread-local RNG.
pub fn random_suffix() -> String {
    suffix_with(&mut rand::rng())
}

/// Generate a random suffix of [`SHORT_SUFFIX_LENGTH`] characters drawn
/// uniformly from [`SHORT_SUFFIX_ALPHABET`]. Takes the RNG as an argument so
/// tests can seed it.
pub fn suffix_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SHORT_SUFFIX_LENGTH)
        .map(|_| {
            let index = rng.random_range(0..SHORT_SUFFIX_ALPHABET.len());
            SHORT_SUFFIX_ALPHABET[index] as char
        })
        .collect()
}

/// The full URL submitted for shortening, built from a suffix.
pub fn target_url_for(suffix: &str) -> String {
    format!("{}{}", TARGET_URL_PREFIX, suffix)
}

/// Extract the short code from a full short link, for example
/// `"https://example.com/a1b2c3d4e5"` yields `"a1b2c3d4e5"`.
pub fn short_code_from_link(short_link: &str) -> Option<String> {
    let parsed = Url::parse(short_link).ok()?;
    let code = parsed.path_segments()?.last()?;
    if code.is_empty() {
        None
    } else {
        Some(code.to_string())
    }
}

/// Remember a link in the user's session so it can be expanded or followed
/// later. Once the session is full a random remembered link is evicted.
pub fn remember_link(user: &mut GooseUser, link: SeededLink) {
    match user.get_session_data_mut::<ShortLinkSession>() {
        Some(session) => {
            if session.links.len() >= MAX_SEEDED_LINKS {
                let evict = rand::rng().random_range(0..session.links.len());
                session.links.swap_remove(evict);
            }
            session.links.push(link);
        }
        None => user.set_session_data(ShortLinkSession { links: vec![link] }),
    }
}

/// Pick a random link remembered by this user, if any.
pub fn random_seeded_link(user: &GooseUser) -> Option<SeededLink> {
    let session = user.get_session_data::<ShortLinkSession>()?;
    session.links.choose(&mut rand::rng()).cloned()
}
