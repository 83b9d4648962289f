// ABOUTME: Resource handling module for fetching job-posting pages over HTTP.
// ABOUTME: Performs a single GET with URL/scheme validation and a private-network guard.

use std::collections::HashMap;
use std::net::IpAddr;

use ipnet::{Ipv4Net, Ipv6Net};

use crate::error::ScrapeError;

/// Options for fetching a page.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
    pub allow_private_networks: bool,
}

/// Check if an IP address is in a private/reserved range.
fn is_private_ip(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(ip) => {
            // RFC1918 private ranges
            let private_10: Ipv4Net = "10.0.0.0/8".parse().unwrap();
            let private_172: Ipv4Net = "172.16.0.0/12".parse().unwrap();
            let private_192: Ipv4Net = "192.168.0.0/16".parse().unwrap();
            // Loopback
            let loopback: Ipv4Net = "127.0.0.0/8".parse().unwrap();
            // Link-local
            let link_local: Ipv4Net = "169.254.0.0/16".parse().unwrap();

            private_10.contains(ip)
                || private_172.contains(ip)
                || private_192.contains(ip)
                || loopback.contains(ip)
                || link_local.contains(ip)
        }
        IpAddr::V6(ip) => {
            if ip.is_loopback() {
                return true;
            }
            // Unique local fc00::/7
            let unique_local: Ipv6Net = "fc00::/7".parse().unwrap();
            // Link-local fe80::/10
            let link_local: Ipv6Net = "fe80::/10".parse().unwrap();

            unique_local.contains(ip) || link_local.contains(ip)
        }
    }
}

/// Fetch the page at the given URL, returning the decoded response body.
///
/// A single synchronous GET from the caller's point of view: no retry, no
/// explicit redirect policy beyond the client default. Fails with a
/// `Fetch`-class error on transport failure or non-success status, and an
/// `InvalidUrl`-class error on malformed URLs or unsupported schemes.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<String, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::invalid_url(url, "Fetch", None));
    }

    let parsed_url = url::Url::parse(url).map_err(|e| {
        ScrapeError::invalid_url(url, "Fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ScrapeError::invalid_url(
            url,
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    if !opts.allow_private_networks {
        if let Some(host) = parsed_url.host_str() {
            if let Ok(ip) = host.parse::<IpAddr>() {
                if is_private_ip(&ip) {
                    return Err(ScrapeError::fetch(
                        url,
                        "Fetch",
                        Some(anyhow::anyhow!("private IP addresses are not allowed")),
                    ));
                }
            } else {
                let port = parsed_url
                    .port()
                    .unwrap_or(if scheme == "https" { 443 } else { 80 });
                let addrs = tokio::net::lookup_host((host, port)).await.map_err(|e| {
                    ScrapeError::fetch(
                        url,
                        "Fetch",
                        Some(anyhow::anyhow!("DNS lookup failed: {}", e)),
                    )
                })?;

                for socket_addr in addrs {
                    if is_private_ip(&socket_addr.ip()) {
                        return Err(ScrapeError::fetch(
                            url,
                            "Fetch",
                            Some(anyhow::anyhow!("private IP addresses are not allowed")),
                        ));
                    }
                }
            }
        }
    }

    let mut request = client.get(url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    let response = request.send().await.map_err(|e| {
        ScrapeError::fetch(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", e)))
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
        ));
    }

    response.text().await.map_err(|e| {
        ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("failed to read body: {}", e)),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use httpmock::prelude::*;

    fn allow_local() -> FetchOptions {
        FetchOptions {
            allow_private_networks: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn fetch_returns_body_on_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/job");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body("<html><body>ok</body></html>");
        });

        let client = reqwest::Client::new();
        let body = fetch(&client, &server.url("/job"), &allow_local())
            .await
            .expect("fetch should succeed");
        mock.assert();
        assert!(body.contains("ok"));
    }

    #[tokio::test]
    async fn fetch_fails_on_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let client = reqwest::Client::new();
        let err = fetch(&client, &server.url("/missing"), &allow_local())
            .await
            .expect_err("404 should fail");
        assert_eq!(err.code, ErrorCode::Fetch);
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn fetch_rejects_bad_scheme() {
        let client = reqwest::Client::new();
        let err = fetch(&client, "ftp://example.com/x", &FetchOptions::default())
            .await
            .expect_err("ftp should be rejected");
        assert_eq!(err.code, ErrorCode::InvalidUrl);
    }

    #[tokio::test]
    async fn fetch_blocks_private_ip_by_default() {
        let server = MockServer::start();
        let client = reqwest::Client::new();
        let err = fetch(&client, &server.url("/"), &FetchOptions::default())
            .await
            .expect_err("loopback should be blocked");
        assert_eq!(err.code, ErrorCode::Fetch);
    }

    #[tokio::test]
    async fn fetch_sends_extra_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/hdr").header("x-probe", "1");
            then.status(200).body("<html></html>");
        });

        let mut opts = allow_local();
        opts.headers.insert("x-probe".to_string(), "1".to_string());

        let client = reqwest::Client::new();
        fetch(&client, &server.url("/hdr"), &opts)
            .await
            .expect("fetch should succeed");
        mock.assert();
    }
}
