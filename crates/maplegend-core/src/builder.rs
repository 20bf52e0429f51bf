//! Legend builder: sanitize → fetch → parse.
//!
//! Each `build` call is independent and allocates its own tree; nothing is
//! cached or shared between calls.

use crate::config::LegendConfig;
use crate::error::LegendError;
use crate::fetch::{CurlFetcher, LegendFetcher};
use crate::legend::{parse_legend, LegendMetadata};
use crate::url_model::{ServiceUrlSanitizer, UrlSanitizer};

/// Builds [`LegendMetadata`] for map services using pluggable collaborators.
#[derive(Debug, Clone, Default)]
pub struct LegendBuilder<S = ServiceUrlSanitizer, F = CurlFetcher> {
    sanitizer: S,
    fetcher: F,
}

impl LegendBuilder {
    /// Default sanitizer and a curl fetcher configured from `cfg`.
    pub fn from_config(cfg: &LegendConfig) -> Self {
        Self::new(ServiceUrlSanitizer, CurlFetcher::from_config(cfg))
    }
}

impl<S: UrlSanitizer, F: LegendFetcher> LegendBuilder<S, F> {
    pub fn new(sanitizer: S, fetcher: F) -> Self {
        Self { sanitizer, fetcher }
    }

    /// Builds the legend of the map service at `raw_service_url`.
    ///
    /// Sanitization errors abort before any network call; fetch and parse
    /// errors are returned as-is. No partial legend is ever returned.
    pub fn build(&self, raw_service_url: &str) -> Result<LegendMetadata, LegendError> {
        let service_url = self.sanitizer.sanitize(raw_service_url)?;
        tracing::debug!(service_url = %service_url, "sanitized service url");

        let json = self.fetcher.fetch_legend_json(&service_url)?;
        let legend = parse_legend(&service_url, &json)?;

        tracing::info!(
            service_url = %service_url,
            layers = legend.layers().len(),
            symbols = legend.symbol_count(),
            "built legend"
        );
        Ok(legend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, InputError, ParseError};
    use std::cell::RefCell;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Serves canned JSON and records the URLs it was asked for.
    struct CannedFetcher {
        body: Result<String, u32>,
        requested: RefCell<Vec<String>>,
    }

    impl CannedFetcher {
        fn ok(body: &str) -> Self {
            Self {
                body: Ok(body.to_string()),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn status(code: u32) -> Self {
            Self {
                body: Err(code),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl LegendFetcher for CannedFetcher {
        fn fetch_legend_json(&self, service_url: &str) -> Result<String, FetchError> {
            self.requested.borrow_mut().push(service_url.to_string());
            match &self.body {
                Ok(body) => Ok(body.clone()),
                Err(code) => Err(FetchError::Http(*code)),
            }
        }
    }

    fn builder(fetcher: CannedFetcher) -> LegendBuilder<ServiceUrlSanitizer, CannedFetcher> {
        LegendBuilder::new(ServiceUrlSanitizer, fetcher)
    }

    #[test]
    fn build_sanitizes_before_fetch_and_composition() {
        let b = builder(CannedFetcher::ok(
            r#"{"layers":[{"layerId":"3","legend":[{"label":"Flood","url":"flood.png"}]}]}"#,
        ));
        let legend = b.build("http://host/MapServer/?f=json").unwrap();
        assert_eq!(legend.service_url(), "http://host/MapServer");
        assert_eq!(
            legend.find_symbol(3, "Flood").and_then(|s| s.url()),
            Some("http://host/MapServer/3/images/flood.png")
        );
        assert_eq!(
            *b.fetcher.requested.borrow(),
            vec!["http://host/MapServer".to_string()]
        );
    }

    #[test]
    fn build_logs_do_not_contain_query_tokens() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();

        let b = builder(CannedFetcher::ok(r#"{"layers":[]}"#));
        tracing::subscriber::with_default(subscriber, || {
            b.build("http://host/MapServer?token=s3cr3t").unwrap();
        });

        let text = logs.text();
        assert!(text.contains("http://host/MapServer"), "logs: {}", text);
        assert!(!text.contains("s3cr3t"), "logs: {}", text);
    }

    #[test]
    fn build_empty_layers() {
        let legend = builder(CannedFetcher::ok(r#"{"layers":[]}"#))
            .build("http://svc")
            .unwrap();
        assert_eq!(legend.service_url(), "http://svc");
        assert!(legend.layers().is_empty());
    }

    #[test]
    fn input_error_skips_fetch() {
        let b = builder(CannedFetcher::ok(r#"{"layers":[]}"#));
        let err = b.build("not a url").unwrap_err();
        assert!(matches!(err, LegendError::Input(InputError::Malformed { .. })));
        assert!(b.fetcher.requested.borrow().is_empty());
    }

    #[test]
    fn fetch_error_propagates() {
        let err = builder(CannedFetcher::status(503))
            .build("http://svc")
            .unwrap_err();
        assert!(matches!(err, LegendError::Fetch(FetchError::Http(503))));
    }

    #[test]
    fn malformed_integer_fails_build() {
        let err = builder(CannedFetcher::ok(
            r#"{"layers":[{"layerId":"0","legend":[{"height":"tall"}]}]}"#,
        ))
        .build("http://svc")
        .unwrap_err();
        assert!(matches!(
            err,
            LegendError::Parse(ParseError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn malformed_json_fails_build() {
        let err = builder(CannedFetcher::ok("<html>error</html>"))
            .build("http://svc")
            .unwrap_err();
        assert!(matches!(err, LegendError::Parse(ParseError::Json(_))));
    }

    #[test]
    fn builds_are_independent() {
        let b = builder(CannedFetcher::ok(
            r#"{"layers":[{"layerId":"0","layerName":"Hazards"}]}"#,
        ));
        let first = b.build("http://svc").unwrap();
        let second = b.build("http://svc/").unwrap();
        assert_eq!(first, second);
        assert!(!std::ptr::eq(first.layers().as_ptr(), second.layers().as_ptr()));
    }
}
