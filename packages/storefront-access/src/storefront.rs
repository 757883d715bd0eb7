//! The storefront's route table

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RouteConfigError;
use crate::policy::RoutePolicy;
use crate::role::Role;
use crate::routes::RouteTable;

/// Every page the storefront can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Landing,
    SignIn,
    SignUp,
    DashboardHome,
    CategoryAds,
    Cart,
    UploadAd,
    MyAds,
    Account,
    AdDetails,
    Addresses,
    Checkout,
    Search,
    Unauthorized,
    NotFound,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Landing => "Welcome",
            Page::SignIn => "Sign in",
            Page::SignUp => "Create account",
            Page::DashboardHome => "Home",
            Page::CategoryAds => "Category",
            Page::Cart => "Cart",
            Page::UploadAd => "Post an ad",
            Page::MyAds => "My ads",
            Page::Account => "Account",
            Page::AdDetails => "Ad details",
            Page::Addresses => "Addresses",
            Page::Checkout => "Checkout",
            Page::Search => "Search",
            Page::Unauthorized => "Unauthorized",
            Page::NotFound => "Not found",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Build the storefront table.
///
/// Shopping pages are for `user`, ad management for `advertiser`; the
/// dashboard section itself admits any signed-in role, including unknown
/// paths beneath it.
pub fn routes() -> Result<RouteTable<Page>, RouteConfigError> {
    let shopper = || RoutePolicy::roles([Role::User]);
    let seller = || RoutePolicy::roles([Role::Advertiser]);

    RouteTable::builder()
        .route("/", Page::Landing, RoutePolicy::Public)
        .route("/signin", Page::SignIn, RoutePolicy::GuestOnly)
        .route("/signup", Page::SignUp, RoutePolicy::GuestOnly)
        .group(
            "/dashboard",
            RoutePolicy::roles([Role::Admin, Role::Advertiser, Role::User]),
            |dashboard| {
                dashboard
                    .index(Page::DashboardHome, RoutePolicy::Public)
                    .route("categories/:id", Page::CategoryAds, shopper())
                    .route("cart", Page::Cart, shopper())
                    .route("upload", Page::UploadAd, seller())
                    .route("my-ads", Page::MyAds, seller())
                    .route("account", Page::Account, RoutePolicy::Public)
                    // Placeholders with no page yet, still gated by role
                    .route("wallet", Page::NotFound, seller())
                    .route(
                        "contact",
                        Page::NotFound,
                        RoutePolicy::roles([Role::User, Role::Advertiser]),
                    )
                    .route("*", Page::NotFound, RoutePolicy::Public)
            },
        )
        .route("/ad/:id", Page::AdDetails, shopper())
        .route("/addresses", Page::Addresses, shopper())
        .route("/checkout", Page::Checkout, shopper())
        .route("/search", Page::Search, shopper())
        .route("/unauthorized", Page::Unauthorized, RoutePolicy::Public)
        .build(Page::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::EffectivePolicy;
    use crate::role::RoleSet;

    #[test]
    fn table_builds() {
        let table = routes().unwrap();
        assert_eq!(table.len(), 17);
    }

    #[test]
    fn inherited_policy_on_account() {
        let table = routes().unwrap();
        assert_eq!(
            table.resolve("/dashboard/account").policy,
            EffectivePolicy::Restricted(RoleSet::all())
        );
    }

    #[test]
    fn unknown_dashboard_paths_keep_the_section_policy() {
        let table = routes().unwrap();
        for path in ["/dashboard/stats", "/dashboard/watch/later"] {
            let resolution = table.resolve(path);
            assert_eq!(resolution.page, Page::NotFound, "{path}");
            assert_eq!(
                resolution.policy,
                EffectivePolicy::Restricted(RoleSet::all()),
                "{path}"
            );
        }
        assert_eq!(table.resolve("/dashboard").page, Page::DashboardHome);
    }

    #[test]
    fn placeholder_pages_keep_their_roles() {
        let table = routes().unwrap();
        assert_eq!(
            table.resolve("/dashboard/wallet").policy,
            EffectivePolicy::Restricted(RoleSet::only(Role::Advertiser))
        );
        assert_eq!(
            table.resolve("/dashboard/contact").policy,
            EffectivePolicy::Restricted(RoleSet::from([Role::User, Role::Advertiser]))
        );
    }

    #[test]
    fn category_id_is_captured() {
        let resolution = routes().unwrap().resolve("/dashboard/categories/3");
        assert_eq!(resolution.page, Page::CategoryAds);
        assert_eq!(resolution.params.get("id"), Some("3"));
    }
}
