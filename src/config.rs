//! Deployment configuration: the backend endpoint and its publishable key.
//!
//! Both are baked in at build time; there is no other environment surface.

pub const BACKEND_URL: &str = match option_env!("PETCONNECT_BACKEND_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:54321",
};

pub const PUBLISHABLE_KEY: &str = match option_env!("PETCONNECT_PUBLISHABLE_KEY") {
    Some(key) => key,
    None => "petconnect-local-dev-key",
};

/// WebSocket endpoint for the realtime channel, derived from the HTTP base.
pub fn realtime_url() -> String {
    let ws_base = if let Some(rest) = BACKEND_URL.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = BACKEND_URL.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        BACKEND_URL.to_string()
    };
    format!("{ws_base}/realtime/v1/websocket?apikey={PUBLISHABLE_KEY}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realtime_url_swaps_scheme() {
        let url = realtime_url();
        assert!(url.starts_with("ws://") || url.starts_with("wss://"));
        assert!(url.contains("/realtime/v1/websocket?apikey="));
    }
}
