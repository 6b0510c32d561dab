// components/liked_downloader/src/cookies.rs
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Browsers yt-dlp knows how to read a cookie store from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Brave,
    Chrome,
    Chromium,
    Edge,
    Firefox,
    Opera,
    Safari,
    Vivaldi,
    Whale,
}

impl Browser {
    pub const ALL: [Browser; 9] = [
        Browser::Brave,
        Browser::Chrome,
        Browser::Chromium,
        Browser::Edge,
        Browser::Firefox,
        Browser::Opera,
        Browser::Safari,
        Browser::Vivaldi,
        Browser::Whale,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Browser::Brave => "brave",
            Browser::Chrome => "chrome",
            Browser::Chromium => "chromium",
            Browser::Edge => "edge",
            Browser::Firefox => "firefox",
            Browser::Opera => "opera",
            Browser::Safari => "safari",
            Browser::Vivaldi => "vivaldi",
            Browser::Whale => "whale",
        }
    }
}

/// Keyrings yt-dlp can decrypt Chromium cookies with on Linux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyring {
    BasicText,
    GnomeKeyring,
    KWallet,
    KWallet5,
    KWallet6,
}

impl Keyring {
    pub const ALL: [Keyring; 5] = [
        Keyring::BasicText,
        Keyring::GnomeKeyring,
        Keyring::KWallet,
        Keyring::KWallet5,
        Keyring::KWallet6,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Keyring::BasicText => "basictext",
            Keyring::GnomeKeyring => "gnomekeyring",
            Keyring::KWallet => "kwallet",
            Keyring::KWallet5 => "kwallet5",
            Keyring::KWallet6 => "kwallet6",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CookieSourceError {
    #[error("unknown browser '{0}' (expected one of: brave, chrome, chromium, edge, firefox, opera, safari, vivaldi, whale)")]
    UnknownBrowser(String),

    #[error("unknown keyring '{0}' (expected one of: basictext, gnomekeyring, kwallet, kwallet5, kwallet6)")]
    UnknownKeyring(String),

    #[error("empty browser profile after ':'")]
    EmptyProfile,

    #[error("empty container after '::'")]
    EmptyContainer,
}

/// A browser cookie store in yt-dlp's `BROWSER[+KEYRING][:PROFILE][::CONTAINER]` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserCookies {
    pub browser: Browser,
    pub keyring: Option<Keyring>,
    pub profile: Option<String>,
    pub container: Option<String>,
}

impl BrowserCookies {
    pub fn new(browser: Browser) -> Self {
        Self {
            browser,
            keyring: None,
            profile: None,
            container: None,
        }
    }
}

impl FromStr for BrowserCookies {
    type Err = CookieSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rest, container) = match s.split_once("::") {
            Some((_, c)) if c.trim().is_empty() => return Err(CookieSourceError::EmptyContainer),
            Some((rest, c)) => (rest, Some(c.trim().to_string())),
            None => (s, None),
        };

        let (rest, profile) = match rest.split_once(':') {
            Some((_, p)) if p.trim().is_empty() => return Err(CookieSourceError::EmptyProfile),
            Some((rest, p)) => (rest, Some(p.trim().to_string())),
            None => (rest, None),
        };

        let (name, keyring) = match rest.split_once('+') {
            Some((name, k)) => (name, Some(k.trim())),
            None => (rest, None),
        };

        let browser = Browser::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CookieSourceError::UnknownBrowser(name.to_string()))?;

        let keyring = keyring
            .map(|k| {
                Keyring::ALL
                    .into_iter()
                    .find(|kr| kr.name().eq_ignore_ascii_case(k))
                    .ok_or_else(|| CookieSourceError::UnknownKeyring(k.to_string()))
            })
            .transpose()?;

        Ok(Self {
            browser,
            keyring,
            profile,
            container,
        })
    }
}

impl fmt::Display for BrowserCookies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.browser.name())?;
        if let Some(keyring) = self.keyring {
            write!(f, "+{}", keyring.name())?;
        }
        if let Some(profile) = &self.profile {
            write!(f, ":{}", profile)?;
        }
        if let Some(container) = &self.container {
            write!(f, "::{}", container)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[rstest]
    #[case("chrome", Browser::Chrome)]
    #[case("Firefox", Browser::Firefox)]
    #[case("EDGE", Browser::Edge)]
    #[case("opera", Browser::Opera)]
    fn parses_browser_names_case_insensitively(#[case] input: &str, #[case] expected: Browser) {
        let cookies: BrowserCookies = input.parse().unwrap();
        assert_eq!(cookies, BrowserCookies::new(expected));
    }

    #[test]
    fn keeps_profile_verbatim() {
        let cookies: BrowserCookies = "chrome:Profile 1".parse().unwrap();
        assert_eq!(cookies.browser, Browser::Chrome);
        assert_eq!(cookies.profile.as_deref(), Some("Profile 1"));
        assert_eq!(cookies.to_string(), "chrome:Profile 1");
    }

    #[test]
    fn rejects_unknown_browser() {
        let result = "netscape".parse::<BrowserCookies>();
        assert_matches!(result, Err(CookieSourceError::UnknownBrowser(name)) if name == "netscape");
    }

    #[test]
    fn rejects_empty_profile() {
        assert_eq!(
            "firefox:".parse::<BrowserCookies>(),
            Err(CookieSourceError::EmptyProfile)
        );
    }

    #[test]
    fn accepts_keyring() {
        let cookies: BrowserCookies = "chrome+gnomekeyring".parse().unwrap();
        assert_eq!(cookies.browser, Browser::Chrome);
        assert_eq!(cookies.keyring, Some(Keyring::GnomeKeyring));
        assert_eq!(cookies.profile, None);
        assert_eq!(cookies.to_string(), "chrome+gnomekeyring");
    }

    #[test]
    fn accepts_every_part() {
        let cookies: BrowserCookies = "Firefox+KWALLET6:work::Personal".parse().unwrap();
        assert_eq!(
            cookies,
            BrowserCookies {
                browser: Browser::Firefox,
                keyring: Some(Keyring::KWallet6),
                profile: Some("work".to_string()),
                container: Some("Personal".to_string()),
            }
        );
        assert_eq!(cookies.to_string(), "firefox+kwallet6:work::Personal");
    }

    #[test]
    fn accepts_container_without_profile() {
        let cookies: BrowserCookies = "firefox::Shopping".parse().unwrap();
        assert_eq!(cookies.profile, None);
        assert_eq!(cookies.container.as_deref(), Some("Shopping"));
        assert_eq!(cookies.to_string(), "firefox::Shopping");
    }

    #[test]
    fn profile_may_be_a_windows_path() {
        let cookies: BrowserCookies = r"chrome:C:\Users\me\Chrome".parse().unwrap();
        assert_eq!(cookies.profile.as_deref(), Some(r"C:\Users\me\Chrome"));
    }

    #[test]
    fn rejects_unknown_keyring() {
        assert_eq!(
            "chrome+wincred".parse::<BrowserCookies>(),
            Err(CookieSourceError::UnknownKeyring("wincred".to_string()))
        );
    }

    #[test]
    fn rejects_empty_container() {
        assert_eq!(
            "firefox::".parse::<BrowserCookies>(),
            Err(CookieSourceError::EmptyContainer)
        );
    }

    #[test]
    fn displays_lowercase_name() {
        let cookies: BrowserCookies = "Chrome".parse().unwrap();
        assert_eq!(cookies.to_string(), "chrome");
    }
}
