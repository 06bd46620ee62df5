use crate::session::Session;

/// A mount point for the sheet shell. The application runs one shell per
/// prefix; redirect targets are always built from the route's own mount so
/// nested shells never escape to the top-level root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    prefix: String,
}

impl Mount {
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        while prefix.ends_with('/') {
            prefix.pop();
        }
        Self { prefix }
    }

    /// The application root, with no prefix.
    pub fn root() -> Self {
        Self::new("")
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn page(&self, page: Page) -> Route {
        Route::Sheet {
            mount: self.clone(),
            page,
        }
    }

    pub fn login(&self) -> Route {
        self.page(Page::Login)
    }

    pub fn home(&self) -> Route {
        self.page(Page::Home)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
    Home,
    Topic(String),
}

impl Page {
    /// Renders only with an authenticated session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Page::Home | Page::Topic(_))
    }

    /// Renders only without one (the auth forms).
    pub fn is_public_only(&self) -> bool {
        matches!(self, Page::Login | Page::Signup)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The portfolio landing view at the application root.
    Portfolio,
    /// A page within the sheet shell mounted at `mount`.
    Sheet { mount: Mount, page: Page },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Portfolio => "/".to_string(),
            Route::Sheet { mount, page } => {
                let suffix = match page {
                    Page::Login => "/login".to_string(),
                    Page::Signup => "/signup".to_string(),
                    Page::Home => "/".to_string(),
                    Page::Topic(name) => format!("/{name}"),
                };
                format!("{}{}", mount.prefix(), suffix)
            }
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    Allow,
    Redirect(Route),
}

/// Route guard. Protected pages require an authenticated session and fall
/// back to the mount's login page; the public-only auth forms redirect an
/// authenticated session to the mount's home. The portfolio is always
/// reachable.
pub fn resolve(route: &Route, session: &Session) -> Disposition {
    let Route::Sheet { mount, page } = route else {
        return Disposition::Allow;
    };
    if page.is_protected() && !session.is_authenticated() {
        Disposition::Redirect(mount.login())
    } else if page.is_public_only() && session.is_authenticated() {
        Disposition::Redirect(mount.home())
    } else {
        Disposition::Allow
    }
}

/// The route that actually renders for a navigation request. Redirect
/// targets (login, home) are terminal, so one application of the guard is
/// enough.
pub fn destination(route: Route, session: &Session) -> Route {
    match resolve(&route, session) {
        Disposition::Allow => route,
        Disposition::Redirect(target) => target,
    }
}
