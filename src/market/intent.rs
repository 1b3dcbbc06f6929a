//! Classify user input (page URL or bare ticker) into what it asks for.

use url::Url;

/// What a user-supplied URL or ticker points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Site home page, or anything unrecognised.
    Home,
    /// `/category/<slug>` or `/sports/<slug>`.
    Category {
        /// Category slug as it appears in the URL.
        slug: String,
    },
    /// `/markets/...` page.
    Market {
        /// Upper-cased event ticker.
        event_ticker: String,
    },
    /// Bare ticker typed without any URL syntax.
    EventTicker {
        /// Upper-cased ticker.
        ticker: String,
    },
}

impl Intent {
    /// Parse a URL or bare ticker. Never fails; unknown shapes become `Home`.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        if !input.contains('/') && !input.contains('.') {
            return Intent::EventTicker {
                ticker: input.to_uppercase(),
            };
        }

        let path = url_path(input);
        let path = path.trim_matches('/');
        if path.is_empty() {
            return Intent::Home;
        }

        let segments: Vec<&str> = path.split('/').collect();
        match segments.as_slice() {
            ["category" | "sports", slug, ..] => Intent::Category {
                slug: (*slug).to_string(),
            },
            ["markets", _, .., last] => Intent::Market {
                event_ticker: last.to_uppercase(),
            },
            // Short form: the slug segment stands in for the ticker.
            ["markets", only] => Intent::Market {
                event_ticker: only.to_uppercase(),
            },
            _ => Intent::Home,
        }
    }

    /// Event ticker for market and bare-ticker intents.
    pub fn event_ticker(&self) -> Option<&str> {
        match self {
            Intent::Market { event_ticker } => Some(event_ticker),
            Intent::EventTicker { ticker } => Some(ticker),
            Intent::Home | Intent::Category { .. } => None,
        }
    }

    /// Category slug for category intents.
    pub fn category_slug(&self) -> Option<&str> {
        match self {
            Intent::Category { slug } => Some(slug),
            _ => None,
        }
    }
}

/// Path component of `input`. Relative input is treated as a path as-is.
fn url_path(input: &str) -> String {
    match Url::parse(input) {
        Ok(url) => url.path().to_string(),
        Err(_) => input
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}
