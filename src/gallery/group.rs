// SPDX-License-Identifier: MPL-2.0
//! Gallery groups and the registry of lightbox triggers.
//!
//! The host UI registers every image that can open the lightbox, together
//! with the group attribute it carries. Registration order stands in for
//! document order: a group's images are always listed in the order their
//! triggers were registered.

use std::fmt;
use std::path::{Path, PathBuf};

/// Group used when a trigger does not name one.
pub const DEFAULT_GROUP: &str = "default";

/// Name of a gallery group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupName(String);

impl GroupName {
    /// Builds a group name, falling back to [`DEFAULT_GROUP`] when the
    /// attribute is missing or blank.
    #[must_use]
    pub fn from_attribute(attribute: Option<&str>) -> Self {
        match attribute.map(str::trim) {
            Some(name) if !name.is_empty() => Self(name.to_string()),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GroupName {
    fn default() -> Self {
        Self(DEFAULT_GROUP.to_string())
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An image a trigger points at: where it lives and how to caption it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    source: PathBuf,
    alt: Option<String>,
    title: Option<String>,
}

impl ImageRef {
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            alt: None,
            title: None,
        }
    }

    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Caption text: the alt text, else the title, else empty.
    #[must_use]
    pub fn caption(&self) -> &str {
        [self.alt.as_deref(), self.title.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .unwrap_or("")
    }
}

/// Identifier handed out when a trigger is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(usize);

#[derive(Debug, Clone)]
struct Trigger {
    group: GroupName,
    image: ImageRef,
}

/// All lightbox triggers known to the host, in registration order.
#[derive(Debug, Clone, Default)]
pub struct TriggerRegistry {
    triggers: Vec<Trigger>,
}

impl TriggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a trigger and returns its identifier.
    pub fn register(&mut self, image: ImageRef, group: Option<&str>) -> TriggerId {
        let id = TriggerId(self.triggers.len());
        self.triggers.push(Trigger {
            group: GroupName::from_attribute(group),
            image,
        });
        id
    }

    #[must_use]
    pub fn group_of(&self, id: TriggerId) -> Option<&GroupName> {
        self.triggers.get(id.0).map(|trigger| &trigger.group)
    }

    #[must_use]
    pub fn image(&self, id: TriggerId) -> Option<&ImageRef> {
        self.triggers.get(id.0).map(|trigger| &trigger.image)
    }

    /// Triggers sharing `group`, in registration order.
    #[must_use]
    pub fn members(&self, group: &GroupName) -> Vec<TriggerId> {
        self.triggers
            .iter()
            .enumerate()
            .filter(|(_, trigger)| &trigger.group == group)
            .map(|(index, _)| TriggerId(index))
            .collect()
    }

    /// Distinct group names in order of first registration.
    #[must_use]
    pub fn groups(&self) -> Vec<&GroupName> {
        let mut groups: Vec<&GroupName> = Vec::new();
        for trigger in &self.triggers {
            if !groups.contains(&&trigger.group) {
                groups.push(&trigger.group);
            }
        }
        groups
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}
