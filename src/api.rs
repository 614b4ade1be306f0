//! Transactions exercising the `/v1/shortLinks` REST API.

use goose::prelude::*;

use log::debug;

use crate::common::{
    random_seeded_link, remember_link, CreateShortLinkResponse, ExpandShortLinkResponse,
    SeededLink, ShortLinkRequest, API_KEY,
};

/// Path of the shortening endpoint.
pub const SHORT_LINKS_PATH: &str = "/v1/shortLinks";

/// Request name used to aggregate expand metrics, as each expanded link has a
/// unique path.
pub const EXPAND_REQUEST_NAME: &str = "/v1/shortLinks/{short_url}";

/// Shorten a randomly generated URL.
///
/// Issues `POST /v1/shortLinks` with an `application/json` body of the form
/// `{"api_key": "foo", "url": "https://example.com/<random>"}`. On success the
/// created link is remembered in the user session so it can later be expanded
/// or followed. Transport errors and non-2xx responses are counted by Goose's
/// standard accounting; there are no retries.
pub async fn create_short_link(user: &mut GooseUser) -> TransactionResult {
    let payload = ShortLinkRequest::random();
    let mut goose = user.post_json(SHORT_LINKS_PATH, &payload).await?;

    match goose.response {
        Ok(response) => {
            // Copy the headers so we have them for logging if there are errors.
            let headers = response.headers().clone();
            if !response.status().is_success() {
                // Goose has already recorded the failed request.
                debug!(
                    "{}: shortening rejected: {}",
                    goose.request.raw.url,
                    response.status()
                );
                return Ok(());
            }
            match response.json::<CreateShortLinkResponse>().await {
                Ok(created) => match created.short_code() {
                    Some(short_code) => remember_link(
                        user,
                        SeededLink {
                            short_code,
                            target_url: payload.url,
                        },
                    ),
                    None => {
                        return user.set_failure(
                            &format!(
                                "{}: malformed short link: {}",
                                goose.request.raw.url, created.short_link
                            ),
                            &mut goose.request,
                            Some(&headers),
                            None,
                        );
                    }
                },
                Err(e) => {
                    return user.set_failure(
                        &format!("{}: failed to parse response: {}", goose.request.raw.url, e),
                        &mut goose.request,
                        Some(&headers),
                        None,
                    );
                }
            }
        }
        Err(e) => {
            return user.set_failure(
                &format!("{}: no response from server: {}", goose.request.raw.url, e),
                &mut goose.request,
                None,
                None,
            );
        }
    }

    Ok(())
}

/// Expand a previously created short link.
///
/// Issues `GET /v1/shortLinks/{short_url}?api_key=foo` for a randomly chosen
/// link this user created, and validates that the service resolves it back to
/// the URL that was shortened. Does nothing until the user has created at
/// least one link.
pub async fn expand_short_link(user: &mut GooseUser) -> TransactionResult {
    let link = match random_seeded_link(user) {
        Some(link) => link,
        None => return Ok(()),
    };

    let path = format!("{}/{}?api_key={}", SHORT_LINKS_PATH, link.short_code, API_KEY);
    let mut goose = user.get_named(&path, EXPAND_REQUEST_NAME).await?;

    match goose.response {
        Ok(response) => {
            // Copy the headers so we have them for logging if there are errors.
            let headers = response.headers().clone();
            if !response.status().is_success() {
                // Goose has already recorded the failed request.
                debug!(
                    "{}: expand rejected: {}",
                    goose.request.raw.url,
                    response.status()
                );
                return Ok(());
            }
            match response.json::<ExpandShortLinkResponse>().await {
                Ok(expanded) => {
                    if expanded.full_url != link.target_url {
                        return user.set_failure(
                            &format!(
                                "{}: resolved to wrong URL: {}",
                                goose.request.raw.url, expanded.full_url
                            ),
                            &mut goose.request,
                            Some(&headers),
                            None,
                        );
                    }
                }
                Err(e) => {
                    return user.set_failure(
                        &format!("{}: failed to parse response: {}", goose.request.raw.url, e),
                        &mut goose.request,
                        Some(&headers),
                        None,
                    );
                }
            }
        }
        Err(e) => {
            return user.set_failure(
                &format!("{}: no response from server: {}", goose.request.raw.url, e),
                &mut goose.request,
                None,
                None,
            );
        }
    }

    Ok(())
}
