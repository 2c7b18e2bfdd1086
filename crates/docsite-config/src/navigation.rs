//! Sidebar navigation tree.
//!
//! Converts the loosely typed [`RawNavNode`] declaration into a
//! [`NavigationTree`] of [`NavItem`]s. The variant of each raw node is decided
//! once, at this boundary, by field presence:
//!
//! - `slug` → [`NavItem::LeafBySlug`]
//! - `link` → [`NavItem::LeafByLink`]
//! - `items` or `children` → [`NavItem::Group`]
//!
//! A node with none of these, or with more than one, is rejected with a
//! [`SchemaError`] whose path points at the node (e.g. `sidebar[1].items[2]`).
//! After conversion every field has a concrete value: labels are trimmed,
//! `collapsed` defaults to `false`, slugs lose surrounding slashes.
//!
//! Slugs are not checked against the content directory; resolving them is
//! the renderer's job.

use serde::Serialize;

use crate::SchemaError;
use crate::raw::RawNavNode;
use crate::validate::is_absolute_url;

/// Path prefix used for top-level sidebar nodes in error messages.
const ROOT_PATH: &str = "sidebar";

/// A normalized sidebar item.
///
/// Serializes to the same shape it is parsed from, so a serialized tree can be
/// loaded again without loss.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Link to a content document, resolved by the renderer.
    LeafBySlug {
        /// Display label.
        label: String,
        /// Content path without extension or surrounding slashes.
        slug: String,
    },
    /// Link used verbatim.
    LeafByLink {
        /// Display label.
        label: String,
        /// Absolute URL or root-relative path.
        link: String,
    },
    /// Labelled group of items.
    Group {
        /// Display label.
        label: String,
        /// Whether the group is collapsed by default.
        collapsed: bool,
        /// Child items, never empty.
        #[serde(rename = "items")]
        children: Vec<NavItem>,
    },
}

impl NavItem {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::LeafBySlug { label, .. }
            | Self::LeafByLink { label, .. }
            | Self::Group { label, .. } => label,
        }
    }

    /// Child items; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[NavItem] {
        match self {
            Self::Group { children, .. } => children,
            _ => &[],
        }
    }

    /// Content slug, if this is a slug leaf.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::LeafBySlug { slug, .. } => Some(slug),
            _ => None,
        }
    }

    /// Direct link, if this is a link leaf.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::LeafByLink { link, .. } => Some(link),
            _ => None,
        }
    }

    /// Whether this item is a group.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Depth of the subtree rooted at this item (a leaf has depth 1).
    fn depth(&self) -> usize {
        1 + self.children().iter().map(Self::depth).max().unwrap_or(0)
    }

    /// Number of items in the subtree rooted at this item, including itself.
    fn count(&self) -> usize {
        1 + self.children().iter().map(Self::count).sum::<usize>()
    }
}

/// Ordered sequence of top-level sidebar groups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationTree {
    groups: Vec<NavItem>,
}

impl NavigationTree {
    /// Validate and normalize a raw sidebar declaration.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] for the first node that violates the schema:
    /// missing or blank label, no variant field, conflicting variant fields,
    /// empty group, blank slug or link, malformed link, or a top-level leaf.
    pub fn from_raw(nodes: &[RawNavNode]) -> Result<Self, SchemaError> {
        let groups = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let path = format!("{ROOT_PATH}[{i}]");
                let item = normalize_node(node, &path)?;
                if !item.is_group() {
                    return Err(SchemaError::new(
                        path,
                        "top-level sidebar entries must be groups",
                    ));
                }
                Ok(item)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { groups })
    }

    /// Top-level groups in sidebar order.
    #[must_use]
    pub fn groups(&self) -> &[NavItem] {
        &self.groups
    }

    /// Number of top-level groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the sidebar has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over leaves depth-first, in sidebar order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![self.groups.iter()],
        }
    }

    /// Iterate over every referenced content slug, in sidebar order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.leaves().filter_map(NavItem::slug)
    }

    /// Find the first leaf referencing `slug`.
    ///
    /// Leading and trailing slashes in `slug` are ignored.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&NavItem> {
        let slug = slug.trim_matches('/');
        self.leaves().find(|item| item.slug() == Some(slug))
    }

    /// Total number of items (groups and leaves) in the tree.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(NavItem::count).sum()
    }

    /// Maximum nesting depth (0 for an empty tree).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.groups.iter().map(NavItem::depth).max().unwrap_or(0)
    }
}

/// Depth-first iterator over the leaves of a [`NavigationTree`].
pub struct Leaves<'a> {
    stack: Vec<std::slice::Iter<'a, NavItem>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a NavItem;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                None => {
                    self.stack.pop();
                }
                Some(NavItem::Group { children, .. }) => self.stack.push(children.iter()),
                Some(leaf) => return Some(leaf),
            }
        }
    }
}

/// Convert one raw node (and its subtree) into a [`NavItem`].
fn normalize_node(node: &RawNavNode, path: &str) -> Result<NavItem, SchemaError> {
    let present: Vec<&str> = [
        ("slug", node.slug.is_some()),
        ("link", node.link.is_some()),
        ("items", node.items.is_some()),
        ("children", node.children.is_some()),
    ]
    .into_iter()
    .filter_map(|(name, is_set)| is_set.then_some(name))
    .collect();

    if present.len() > 1 {
        return Err(SchemaError::new(
            path,
            format!("conflicting fields: {}", present.join(", ")),
        ));
    }

    let label = normalize_label(node.label.as_deref(), path)?;

    if let Some(slug) = &node.slug {
        reject_collapsed_on_leaf(node, path)?;
        let slug = slug.trim().trim_matches('/');
        if slug.is_empty() {
            return Err(SchemaError::new(path, "empty slug"));
        }
        return Ok(NavItem::LeafBySlug {
            label,
            slug: slug.to_owned(),
        });
    }

    if let Some(link) = &node.link {
        reject_collapsed_on_leaf(node, path)?;
        let link = link.trim();
        if link.is_empty() {
            return Err(SchemaError::new(path, "empty link"));
        }
        if !link.starts_with('/') && !is_absolute_url(link) {
            return Err(SchemaError::new(
                path,
                format!("link '{link}' must be an absolute URL or start with '/'"),
            ));
        }
        return Ok(NavItem::LeafByLink {
            label,
            link: link.to_owned(),
        });
    }

    let (key, children) = match (&node.items, &node.children) {
        (Some(items), _) => ("items", items),
        (_, Some(children)) => ("children", children),
        _ => {
            return Err(SchemaError::new(
                path,
                "node needs one of `slug`, `link` or `items`",
            ));
        }
    };

    if children.is_empty() {
        return Err(SchemaError::new(
            path,
            format!("group '{label}' has no {key}"),
        ));
    }

    let children = children
        .iter()
        .enumerate()
        .map(|(i, child)| normalize_node(child, &format!("{path}.{key}[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NavItem::Group {
        label,
        collapsed: node.collapsed.unwrap_or(false),
        children,
    })
}

fn normalize_label(label: Option<&str>, path: &str) -> Result<String, SchemaError> {
    let Some(label) = label else {
        return Err(SchemaError::new(path, "missing label"));
    };
    let label = label.trim();
    if label.is_empty() {
        return Err(SchemaError::new(path, "empty label"));
    }
    Ok(label.to_owned())
}

fn reject_collapsed_on_leaf(node: &RawNavNode, path: &str) -> Result<(), SchemaError> {
    if node.collapsed.is_some() {
        return Err(SchemaError::new(
            path,
            "`collapsed` only applies to groups",
        ));
    }
    Ok(())
}
