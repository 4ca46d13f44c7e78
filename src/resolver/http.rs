use std::io::{Cursor, Read};

use super::{dimensions_from_reader, ImageDimensions, ImageMetadataResolver};
use crate::core::config::ResolverConfig;
use crate::{MapError, Result};

#[cfg(feature = "debug")]
use log;

/// Fetches remote images over HTTP(S) and reads their header.
///
/// No retries are attempted; a failed request fails the resolution. At most
/// `max_remote_bytes` of the body are read.
pub struct HttpResolver {
    client: reqwest::blocking::Client,
    max_bytes: u64,
}

impl HttpResolver {
    pub fn new(config: &ResolverConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            max_bytes: config.max_remote_bytes,
        })
    }
}

impl ImageMetadataResolver for HttpResolver {
    fn resolve(&self, source: &str) -> Result<ImageDimensions> {
        #[cfg(feature = "debug")]
        log::debug!("Fetching remote image {}", source);

        let response = self.client.get(source).send()?;
        let status = response.status();
        if !status.is_success() {
            #[cfg(feature = "debug")]
            log::warn!("Remote image {} answered {}", source, status);

            return Err(MapError::HttpStatus {
                url: source.to_string(),
                status: status.as_u16(),
            });
        }

        let mut body = Vec::new();
        response.take(self.max_bytes).read_to_end(&mut body)?;
        dimensions_from_reader(Cursor::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::marker_icon::MarkerIcon;
    use crate::resolver::DefaultResolver;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        image::RgbaImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    /// Serves a single canned response on a loopback port and returns its URL
    fn serve_once(status: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let head = format!(
                "HTTP/1.1 {}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            // The client may hang up once it has read enough.
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
        });

        format!("http://{}/pin.png", addr)
    }

    fn config() -> ResolverConfig {
        ResolverConfig::default().with_system_proxy(false)
    }

    #[test]
    fn test_png_body_is_probed() {
        let url = serve_once("200 OK", png_bytes(40, 60));
        let resolver = HttpResolver::new(&config()).unwrap();

        assert_eq!(resolver.resolve(&url).unwrap(), ImageDimensions::new(40, 60));
    }

    #[test]
    fn test_not_found_is_http_status() {
        let url = serve_once("404 Not Found", b"missing".to_vec());
        let resolver = HttpResolver::new(&config()).unwrap();

        match resolver.resolve(&url) {
            Err(MapError::HttpStatus { status, url: failed }) => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_icon_is_invalid_resource() {
        let url = serve_once("404 Not Found", Vec::new());
        let resolver = DefaultResolver::new(config()).unwrap();

        let err = MarkerIcon::create_with(&resolver, url, None).unwrap_err();
        assert!(err.is_invalid_resource());
    }

    #[test]
    fn test_remote_icon_defaults() {
        let url = serve_once("200 OK", png_bytes(40, 60));
        let resolver = DefaultResolver::new(config()).unwrap();

        let icon = MarkerIcon::create_with(&resolver, url.clone(), None).unwrap();
        assert_eq!(icon.source(), url);
        assert_eq!((icon.width(), icon.height()), (40, 60));
        assert_eq!((icon.anchor_x(), icon.anchor_y()), (20, 60));
    }

    #[test]
    fn test_body_read_is_capped() {
        let mut body = png_bytes(24, 32);
        body.extend(std::iter::repeat(0u8).take(256 * 1024));

        let url = serve_once("200 OK", body.clone());
        let resolver = HttpResolver::new(&config().with_max_remote_bytes(1024)).unwrap();
        assert_eq!(resolver.resolve(&url).unwrap(), ImageDimensions::new(24, 32));

        // Too short to hold the PNG header.
        let url = serve_once("200 OK", body);
        let resolver = HttpResolver::new(&config().with_max_remote_bytes(16)).unwrap();
        assert!(resolver.resolve(&url).is_err());
    }
}
