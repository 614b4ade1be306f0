use gumdrop::Options;
use httpmock::MockServer;

use goose::config::GooseConfiguration;

/// The following options are configured by default, if not set to a custom
/// value:
///  --host <mock-server>
///  --users 1
///  --hatch-rate 4
///  --run-time 2
/// The telnet and WebSocket controllers are always disabled so tests can run
/// in parallel without fighting over their ports.
pub fn build_configuration(server: &MockServer, custom: Vec<&str>) -> GooseConfiguration {
    // Start with an empty configuration.
    let mut configuration: Vec<&str> = vec![];
    // Declare server_url here no matter what, so its lifetime is sufficient when needed.
    let server_url = server.base_url();

    // Merge in all custom options first.
    configuration.extend_from_slice(&custom);

    // Default to using the mock server if not otherwise configured.
    if !configuration.contains(&"--host") {
        configuration.extend_from_slice(&["--host", &server_url]);
    }

    // Default to testing with 1 user if not otherwise configured.
    if !configuration.contains(&"--users") {
        configuration.extend_from_slice(&["--users", "1"]);
    }

    // Default to hatching 4 users per second if not otherwise configured.
    if !configuration.contains(&"--hatch-rate") {
        configuration.extend_from_slice(&["--hatch-rate", "4"]);
    }

    // Default to running for 2 seconds if not otherwise configured.
    if !configuration.contains(&"--run-time") {
        configuration.extend_from_slice(&["--run-time", "2"]);
    }

    configuration.extend_from_slice(&["--no-telnet", "--no-websocket"]);

    // Parse these options to generate a GooseConfiguration.
    GooseConfiguration::parse_args_default(&configuration)
        .expect("failed to parse options and generate a configuration")
}
