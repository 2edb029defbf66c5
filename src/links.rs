//! Outbound navigation targets: the application form and mail compositions.

use std::fmt;

use crate::config::LinksConfig;

/// A pre-filled `mailto:` link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailto {
    pub to: String,
    pub cc: Vec<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
}

impl Mailto {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            cc: Vec::new(),
            subject: None,
            body: None,
        }
    }

    pub fn cc<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cc.extend(addresses.into_iter().map(Into::into));
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The `mailto:` URL. Subject and body are percent-encoded; the cc
    /// list is joined with `", "`.
    pub fn to_url(&self) -> String {
        let mut query = Vec::new();
        if !self.cc.is_empty() {
            query.push(format!("cc={}", self.cc.join(", ")));
        }
        if let Some(subject) = &self.subject {
            query.push(format!("subject={}", urlencoding::encode(subject)));
        }
        if let Some(body) = &self.body {
            query.push(format!("body={}", urlencoding::encode(body)));
        }

        if query.is_empty() {
            format!("mailto:{}", self.to)
        } else {
            format!("mailto:{}?{}", self.to, query.join("&"))
        }
    }
}

/// Where an action sends the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Url(String),
    Mail(Mailto),
}

impl NavigationTarget {
    /// The string handed to the platform opener.
    pub fn href(&self) -> String {
        match self {
            NavigationTarget::Url(url) => url.clone(),
            NavigationTarget::Mail(mail) => mail.to_url(),
        }
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Resolved navigation targets for the page's calls to action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub apply: NavigationTarget,
    pub partnership: NavigationTarget,
    pub contact: NavigationTarget,
}

impl From<&LinksConfig> for Links {
    fn from(config: &LinksConfig) -> Self {
        let partnership = &config.partnership;
        Self {
            apply: NavigationTarget::Url(config.apply_url.clone()),
            partnership: NavigationTarget::Mail(
                Mailto::new(&partnership.to)
                    .cc(partnership.cc.iter().cloned())
                    .subject(&partnership.subject)
                    .body(&partnership.body),
            ),
            contact: NavigationTarget::Mail(Mailto::new(&config.contact_email)),
        }
    }
}
