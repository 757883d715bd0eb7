//! Route definitions for the application
//!
//! Access policies live in `storefront_access::storefront`; the guard layout
//! resolves every path here against that table.

use dioxus::prelude::*;

use crate::components::{AccessGuard, DashboardLayout, PublicLayout};
use crate::pages::dashboard::{Account, CategoryAds, DashboardHome, MyAds, UploadAd};
use crate::pages::public::{Landing, NotFound, SignIn, SignUp, Unauthorized};
use crate::pages::shop::{AdDetails, Addresses, Cart, Checkout, Search};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AccessGuard)]
        // Public routes
        #[layout(PublicLayout)]
            #[route("/")]
            Landing {},

            #[route("/signin?:return_to")]
            SignIn { return_to: String },

            #[route("/signup")]
            SignUp {},

            #[route("/unauthorized")]
            Unauthorized {},
        #[end_layout]

        // Signed-in section
        #[nest("/dashboard")]
            #[layout(DashboardLayout)]
                #[route("/")]
                DashboardHome {},

                #[route("/categories/:id")]
                CategoryAds { id: u32 },

                #[route("/cart")]
                Cart {},

                #[route("/upload")]
                UploadAd {},

                #[route("/my-ads")]
                MyAds {},

                #[route("/account")]
                Account {},
            #[end_layout]
        #[end_nest]

        // Shopping pages outside the dashboard shell
        #[layout(DashboardLayout)]
            #[route("/ad/:id")]
            AdDetails { id: String },

            #[route("/addresses")]
            Addresses {},

            #[route("/checkout")]
            Checkout {},

            #[route("/search?:keyword")]
            Search { keyword: String },
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Parse a gate redirect target (path plus optional query) into a route
    pub fn from_href(href: &str) -> Route {
        href.parse::<Route>().unwrap_or_else(|_| Route::NotFound {
            segments: href.split('/').filter(|s| !s.is_empty()).map(str::to_string).collect(),
        })
    }
}
