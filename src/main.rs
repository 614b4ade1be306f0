//! Goose load test for the Dynamic Links URL shortening service.
//!
//! Simulates two kinds of users: API clients that shorten randomly generated
//! URLs (and occasionally expand links they created), and redirect users that
//! follow short links. The target host defaults to the development server and
//! can be overridden with `--host`, for example:
//!
//! ```bash
//! cargo run --release -- --host https://links.example.net -u 50 -r 5 -t 10m
//! ```

use std::time::Duration;

use goose::prelude::*;

use dynamic_links_loadtest::api::{create_short_link, expand_short_link};
use dynamic_links_loadtest::redirect::{follow_short_link, setup_redirect_client};

/// Where the shortening service listens when run locally.
const DEFAULT_HOST: &str = "http://localhost:8000";

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        // Most traffic comes from API clients creating short links; expanding
        // an existing link is comparatively rare.
        .register_scenario(
            scenario!("ShortLinkApiUser")
                .set_weight(9)?
                // Each user idles between one and two seconds between requests.
                .set_wait_time(Duration::from_secs(1), Duration::from_secs(2))?
                .register_transaction(
                    transaction!(create_short_link)
                        .set_name("POST /v1/shortLinks")
                        .set_weight(3)?,
                )
                .register_transaction(
                    transaction!(expand_short_link).set_name("GET /v1/shortLinks/{short_url}"),
                ),
        )
        .register_scenario(
            scenario!("RedirectUser")
                .set_weight(1)?
                .set_wait_time(Duration::from_secs(1), Duration::from_secs(2))?
                // Install a client that doesn't follow redirects before
                // seeding the link this user will request.
                .register_transaction(
                    transaction!(setup_redirect_client)
                        .set_on_start()
                        .set_name("setup client"),
                )
                .register_transaction(
                    transaction!(create_short_link)
                        .set_on_start()
                        .set_name("seed /v1/shortLinks"),
                )
                .register_transaction(transaction!(follow_short_link).set_name("GET /{short_url}")),
        )
        .set_default(GooseDefault::Host, DEFAULT_HOST)?
        .execute()
        .await?;

    Ok(())
}
