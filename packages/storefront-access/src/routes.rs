//! Declarative route table
//!
//! Routes are declared once, grouped under shared prefixes whose policies
//! apply to every child, and validated as a whole by
//! [`RouteTableBuilder::build`]:
//!
//! ```rust
//! use storefront_access::{Role, RoutePolicy, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .route("/", "landing", RoutePolicy::Public)
//!     .route("/signin", "signin", RoutePolicy::GuestOnly)
//!     .group("/dashboard", RoutePolicy::authenticated(), |dashboard| {
//!         dashboard
//!             .index("home", RoutePolicy::Public)
//!             .route("cart", "cart", RoutePolicy::roles([Role::User]))
//!     })
//!     .build("not-found")
//!     .unwrap();
//!
//! assert_eq!(table.resolve("/dashboard/cart").page, "cart");
//! assert_eq!(table.resolve("/nowhere").page, "not-found");
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::error::RouteConfigError;
use crate::policy::{self, EffectivePolicy, PolicyConflict, RoutePolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    Wildcard,
}

impl Segment {
    /// Higher is more specific
    fn rank(&self) -> u8 {
        match self {
            Segment::Static(_) => 2,
            Segment::Param(_) => 1,
            Segment::Wildcard => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    fn parse(path: &str) -> Result<Self, RouteConfigError> {
        let invalid = |reason| RouteConfigError::InvalidPattern {
            pattern: path.to_string(),
            reason,
        };

        let raw: Vec<&str> = split_segments(path).collect();
        let mut segments = Vec::with_capacity(raw.len());

        for (index, part) in raw.iter().enumerate() {
            let segment = if *part == "*" {
                if index + 1 != raw.len() {
                    return Err(invalid("wildcard must be the last segment"));
                }
                Segment::Wildcard
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter name is empty"));
                }
                Segment::Param(name.to_string())
            } else {
                Segment::Static(part.to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            source: format!("/{}", raw.join("/")),
            segments,
        })
    }

    /// Shape of the pattern with parameter names erased, used to detect
    /// declarations that could never be told apart
    fn shape(&self) -> String {
        let parts: Vec<&str> = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(value) => value.as_str(),
                Segment::Param(_) => ":",
                Segment::Wildcard => "*",
            })
            .collect();
        format!("/{}", parts.join("/"))
    }

    fn matches(&self, path: &[&str]) -> Option<RouteParams> {
        let mut params = RouteParams::default();

        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Wildcard => return Some(params),
                Segment::Static(expected) => {
                    if path.get(index) != Some(&expected.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = path.get(index)?;
                    let decoded = urlencoding::decode(value)
                        .map(|value| value.into_owned())
                        .unwrap_or_else(|_| value.to_string());
                    params.values.insert(name.clone(), decoded);
                }
            }
        }

        (path.len() == self.segments.len()).then_some(params)
    }

    fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard))
    }

    /// Rank of the segment covering each path position; positions swallowed
    /// by a trailing wildcard rank lowest
    fn ranks(&self, len: usize) -> impl Iterator<Item = u8> + '_ {
        (0..len).map(move |index| self.segments.get(index).map_or(0, Segment::rank))
    }

    /// Compare two patterns that both matched a path of `len` segments
    fn specificity_cmp(&self, other: &PathPattern, len: usize) -> Ordering {
        self.ranks(len)
            .cmp(other.ranks(len))
            .then_with(|| other.has_wildcard().cmp(&self.has_wildcard()))
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Percent-decoded `:param` values captured while resolving a path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: BTreeMap<String, String>,
}

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of resolving a path against the table
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<P> {
    pub page: P,
    pub params: RouteParams,
    pub policy: EffectivePolicy,
    /// Normalized pattern that matched, `None` for the not-found fallback
    pub pattern: Option<String>,
}

#[derive(Debug, Clone)]
struct RouteEntry<P> {
    pattern: PathPattern,
    page: P,
    policy: EffectivePolicy,
}

/// Immutable mapping from paths to pages and their effective policies
#[derive(Debug, Clone)]
pub struct RouteTable<P> {
    entries: Vec<RouteEntry<P>>,
    not_found: P,
}

impl<P: Clone> RouteTable<P> {
    pub fn builder() -> RouteTableBuilder<P> {
        RouteTableBuilder::new()
    }

    /// Resolve a path (query string and fragment ignored) to exactly one
    /// entry. The most specific matching pattern wins; nothing matching
    /// resolves to the not-found page with a public policy.
    pub fn resolve(&self, path: &str) -> Resolution<P> {
        let segments: Vec<&str> = split_segments(strip_query(path)).collect();

        let best = self
            .entries
            .iter()
            .filter_map(|entry| entry.pattern.matches(&segments).map(|params| (entry, params)))
            .max_by(|(a, _), (b, _)| a.pattern.specificity_cmp(&b.pattern, segments.len()));

        match best {
            Some((entry, params)) => Resolution {
                page: entry.page.clone(),
                params,
                policy: entry.policy,
                pattern: Some(entry.pattern.source.clone()),
            },
            None => {
                debug!(path, "no route matched, falling back to not-found");
                Resolution {
                    page: self.not_found.clone(),
                    params: RouteParams::default(),
                    policy: EffectivePolicy::Public,
                    pattern: None,
                }
            }
        }
    }

    /// Declared routes with their effective policies, in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &P, EffectivePolicy)> {
        self.entries
            .iter()
            .map(|entry| (entry.pattern.source.as_str(), &entry.page, entry.policy))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Declaration<P> {
    path: String,
    page: P,
    chain: Vec<RoutePolicy>,
}

/// Collects route declarations; nothing is validated until [`build`](Self::build)
#[derive(Debug, Clone)]
pub struct RouteTableBuilder<P> {
    prefix: String,
    inherited: Vec<RoutePolicy>,
    declarations: Vec<Declaration<P>>,
}

impl<P> Default for RouteTableBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> RouteTableBuilder<P> {
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            inherited: Vec::new(),
            declarations: Vec::new(),
        }
    }

    /// Declare a route relative to the current group
    pub fn route(mut self, path: &str, page: P, policy: RoutePolicy) -> Self {
        let mut chain = self.inherited.clone();
        chain.push(policy);
        self.declarations.push(Declaration {
            path: join(&self.prefix, path),
            page,
            chain,
        });
        self
    }

    /// Declare the page rendered at the group's own path
    pub fn index(self, page: P, policy: RoutePolicy) -> Self {
        self.route("", page, policy)
    }

    /// Declare a nested group whose policy applies to all of its children
    pub fn group<F>(mut self, path: &str, policy: RoutePolicy, children: F) -> Self
    where
        F: FnOnce(RouteTableBuilder<P>) -> RouteTableBuilder<P>,
    {
        let mut inherited = self.inherited.clone();
        inherited.push(policy);

        let group = children(RouteTableBuilder {
            prefix: join(&self.prefix, path),
            inherited,
            declarations: Vec::new(),
        });

        self.declarations.extend(group.declarations);
        self
    }

    /// Validate every declaration and freeze the table
    pub fn build(self, not_found: P) -> Result<RouteTable<P>, RouteConfigError> {
        let mut shapes = HashSet::new();
        let mut entries = Vec::with_capacity(self.declarations.len());

        for declaration in self.declarations {
            let pattern = PathPattern::parse(&declaration.path)?;

            if !shapes.insert(pattern.shape()) {
                return Err(RouteConfigError::DuplicateRoute {
                    pattern: pattern.source,
                });
            }

            let policy = policy::combine(&declaration.chain).map_err(|conflict| {
                let pattern = pattern.source.clone();
                match conflict {
                    PolicyConflict::EmptyRoleSet => RouteConfigError::EmptyRoleSet { pattern },
                    PolicyConflict::UnsatisfiableRoles => {
                        RouteConfigError::UnsatisfiableRoles { pattern }
                    }
                    PolicyConflict::GuestOnlyConflict => {
                        RouteConfigError::GuestOnlyConflict { pattern }
                    }
                }
            })?;

            entries.push(RouteEntry {
                pattern,
                page: declaration.page,
                policy,
            });
        }

        Ok(RouteTable { entries, not_found })
    }
}

fn join(prefix: &str, path: &str) -> String {
    let parts: Vec<&str> = split_segments(prefix).chain(split_segments(path)).collect();
    format!("/{}", parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::{Role, RoleSet};

    fn table() -> RouteTable<&'static str> {
        RouteTable::builder()
            .route("/", "landing", RoutePolicy::Public)
            .route("/ad/:id", "ad", RoutePolicy::roles([Role::User]))
            .route("/ad/new", "new-ad", RoutePolicy::roles([Role::Advertiser]))
            .group("/dashboard", RoutePolicy::authenticated(), |dashboard| {
                dashboard
                    .index("home", RoutePolicy::Public)
                    .route("/cart/", "cart", RoutePolicy::roles([Role::User]))
                    .route("*", "dashboard-fallback", RoutePolicy::Public)
            })
            .build("not-found")
            .unwrap()
    }

    #[test]
    fn resolves_root_and_index() {
        let table = table();
        assert_eq!(table.resolve("/").page, "landing");
        assert_eq!(table.resolve("").page, "landing");
        assert_eq!(table.resolve("/dashboard").page, "home");
        assert_eq!(table.resolve("/dashboard/").page, "home");
    }

    #[test]
    fn static_segment_beats_parameter() {
        let table = table();
        assert_eq!(table.resolve("/ad/new").page, "new-ad");

        let resolution = table.resolve("/ad/42");
        assert_eq!(resolution.page, "ad");
        assert_eq!(resolution.params.get("id"), Some("42"));
    }

    #[test]
    fn exact_route_beats_wildcard() {
        let table = table();
        assert_eq!(table.resolve("/dashboard/cart").page, "cart");
        assert_eq!(table.resolve("/dashboard/stats/weekly").page, "dashboard-fallback");
    }

    #[test]
    fn ignores_query_fragment_and_extra_slashes() {
        let table = table();
        let resolution = table.resolve("//ad//a%20b/?ref=home#top");
        assert_eq!(resolution.page, "ad");
        assert_eq!(resolution.params.get("id"), Some("a b"));
    }

    #[test]
    fn unmatched_path_is_public_not_found() {
        let resolution = table().resolve("/ad/1/extra");
        assert_eq!(resolution.page, "not-found");
        assert_eq!(resolution.policy, EffectivePolicy::Public);
        assert_eq!(resolution.pattern, None);
    }

    #[test]
    fn group_policy_applies_to_children() {
        let table = table();
        assert_eq!(
            table.resolve("/dashboard").policy,
            EffectivePolicy::Restricted(RoleSet::all())
        );
        assert_eq!(
            table.resolve("/dashboard/cart").policy,
            EffectivePolicy::Restricted(RoleSet::only(Role::User))
        );
    }

    #[test]
    fn rejects_duplicate_shapes() {
        let result = RouteTable::builder()
            .route("/ad/:id", 1, RoutePolicy::Public)
            .route("/ad/:slug", 2, RoutePolicy::Public)
            .build(0);
        assert_eq!(
            result.unwrap_err(),
            RouteConfigError::DuplicateRoute {
                pattern: "/ad/:slug".to_string()
            }
        );
    }

    #[test]
    fn rejects_inner_wildcard_and_empty_param() {
        let wildcard = RouteTable::builder()
            .route("/a/*/b", (), RoutePolicy::Public)
            .build(());
        assert!(matches!(wildcard, Err(RouteConfigError::InvalidPattern { .. })));

        let param = RouteTable::builder().route("/a/:", (), RoutePolicy::Public).build(());
        assert!(matches!(param, Err(RouteConfigError::InvalidPattern { .. })));
    }

    #[test]
    fn rejects_unsatisfiable_nested_roles() {
        let result = RouteTable::builder()
            .group("/admin", RoutePolicy::roles([Role::Admin]), |admin| {
                admin.route("cart", "cart", RoutePolicy::roles([Role::User]))
            })
            .build("nf");
        assert_eq!(
            result.unwrap_err(),
            RouteConfigError::UnsatisfiableRoles {
                pattern: "/admin/cart".to_string()
            }
        );
    }

    #[test]
    fn lists_entries_in_declaration_order() {
        let table = table();
        let patterns: Vec<&str> = table.entries().map(|(pattern, _, _)| pattern).collect();
        assert_eq!(
            patterns,
            vec!["/", "/ad/:id", "/ad/new", "/dashboard", "/dashboard/cart", "/dashboard/*"]
        );
        assert_eq!(table.len(), 6);
    }
}
