//! Navigation requests emitted by screens

use super::ScreenKind;

/// A request to replace the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRequest {
    pub target: ScreenKind,
}

/// Consumer of navigation requests, supplied by whoever hosts the screens
#[cfg_attr(test, mockall::automock)]
pub trait Router {
    fn route(&mut self, request: NavRequest);
}

pub fn go_to_sign_up(router: &mut dyn Router) {
    router.route(NavRequest {
        target: ScreenKind::SignUp,
    });
}

pub fn go_to_login(router: &mut dyn Router) {
    router.route(NavRequest {
        target: ScreenKind::Login,
    });
}

pub fn go_to_forgot_password(router: &mut dyn Router) {
    router.route(NavRequest {
        target: ScreenKind::ForgotPassword,
    });
}

/// Text link at the bottom of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub target: ScreenKind,
}

impl Link {
    pub fn follow(&self, router: &mut dyn Router) {
        match self.target {
            ScreenKind::Login => go_to_login(router),
            ScreenKind::SignUp => go_to_sign_up(router),
            ScreenKind::ForgotPassword => go_to_forgot_password(router),
        }
    }
}

const LOGIN_LINKS: &[Link] = &[
    Link {
        label: "Create an account",
        target: ScreenKind::SignUp,
    },
    Link {
        label: "Forgot password?",
        target: ScreenKind::ForgotPassword,
    },
];

const SIGN_UP_LINKS: &[Link] = &[Link {
    label: "Already have an account? Sign in",
    target: ScreenKind::Login,
}];

const FORGOT_PASSWORD_LINKS: &[Link] = &[Link {
    label: "Back to sign in",
    target: ScreenKind::Login,
}];

impl ScreenKind {
    /// Links shown under the submit button
    pub fn links(&self) -> &'static [Link] {
        match self {
            ScreenKind::Login => LOGIN_LINKS,
            ScreenKind::SignUp => SIGN_UP_LINKS,
            ScreenKind::ForgotPassword => FORGOT_PASSWORD_LINKS,
        }
    }
}

/// Router that parks the latest request until the shell applies it
#[derive(Debug, Default)]
pub struct PendingRoute {
    request: Option<NavRequest>,
}

impl PendingRoute {
    pub fn take(&mut self) -> Option<NavRequest> {
        self.request.take()
    }
}

impl Router for PendingRoute {
    fn route(&mut self, request: NavRequest) {
        self.request = Some(request);
    }
}
