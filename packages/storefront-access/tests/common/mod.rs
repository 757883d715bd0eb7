//! Shared fixtures for access tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use storefront_access::storefront::{self, Page};
use storefront_access::{Identity, Navigator, RedirectOptions, Role, RouteTable};

pub fn table() -> Arc<RouteTable<Page>> {
    Arc::new(storefront::routes().expect("storefront routes should build"))
}

pub fn identity(role: Role) -> Identity {
    Identity::new(format!("{role}-1"), format!("Test {}", role.label()), role)
        .with_email(format!("{role}@example.com"))
}

/// Role-restricted paths, with concrete parameter values. Includes
/// undeclared paths under `/dashboard`, which inherit the section policy.
pub const RESTRICTED_PATHS: &[&str] = &[
    "/dashboard",
    "/dashboard/categories/1",
    "/dashboard/cart",
    "/dashboard/upload",
    "/dashboard/my-ads",
    "/dashboard/account",
    "/dashboard/wallet",
    "/dashboard/contact",
    "/dashboard/stats",
    "/ad/65f0c1",
    "/addresses",
    "/checkout",
    "/search",
];

pub const GUEST_PATHS: &[&str] = &["/signin", "/signup"];

/// Navigator that records redirects instead of performing them
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub current: Arc<Mutex<String>>,
    pub redirects: Arc<Mutex<Vec<(String, RedirectOptions)>>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        let navigator = Self::default();
        *navigator.current.lock().unwrap() = path.to_string();
        navigator
    }

    pub fn redirects(&self) -> Vec<(String, RedirectOptions)> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    fn redirect(&self, path: &str, options: RedirectOptions) {
        *self.current.lock().unwrap() = path.to_string();
        self.redirects.lock().unwrap().push((path.to_string(), options));
    }
}
