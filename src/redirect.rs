//! Transactions following short links the way a browser hitting a shortened
//! URL would, without leaving the service under test.

use std::time::Duration;

use goose::prelude::*;

use log::debug;
use reqwest::{header, redirect, Client, StatusCode};

use crate::common::random_seeded_link;

/// User agent advertised by the redirect-following client.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Install a per-user HTTP client that does not follow redirects.
///
/// Short links redirect off-site to the original URL; with reqwest's default
/// policy the load test would follow them and measure the destination site
/// instead of the shortener. Register this with `set_on_start()` before any
/// other transaction in the scenario.
pub async fn setup_redirect_client(user: &mut GooseUser) -> TransactionResult {
    let builder = Client::builder()
        .user_agent(USER_AGENT)
        .redirect(redirect::Policy::none())
        .timeout(Duration::from_secs(60));
    user.set_client_builder(builder).await?;

    Ok(())
}

/// Follow a previously created short link.
///
/// Issues `GET /{short_url}` for a randomly chosen link this user created,
/// expecting a `302 Found` whose `Location` header is the URL that was
/// shortened. Does nothing until the user has created at least one link.
pub async fn follow_short_link(user: &mut GooseUser) -> TransactionResult {
    let link = match random_seeded_link(user) {
        Some(link) => link,
        None => return Ok(()),
    };

    let path = format!("/{}", link.short_code);
    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Get)
        .path(path.as_str())
        .name("/{short_url}")
        .expect_status_code(302)
        .build();
    let mut goose = user.request(goose_request).await?;

    match goose.response {
        Ok(response) => {
            // Copy the headers so we have them for logging if there are errors.
            let headers = response.headers().clone();
            if response.status() != StatusCode::FOUND {
                // Goose has already recorded the failed request.
                debug!(
                    "{}: expected a redirect, got: {}",
                    goose.request.raw.url,
                    response.status()
                );
                return Ok(());
            }
            let location = headers
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok());
            match location {
                Some(location) if location == link.target_url => (),
                Some(location) => {
                    return user.set_failure(
                        &format!(
                            "{}: redirected to wrong URL: {}",
                            goose.request.raw.url, location
                        ),
                        &mut goose.request,
                        Some(&headers),
                        None,
                    );
                }
                None => {
                    return user.set_failure(
                        &format!("{}: redirect without Location header", goose.request.raw.url),
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
