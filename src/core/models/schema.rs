//! Schema model
//!
//! A schema maps task names to argument lists. It is stored as an explicit
//! ordered sequence of `(name, arguments)` pairs so that iteration order and
//! equality never depend on hash ordering.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ArgumentList;

/// Ordered task-name → argument-list mapping with unique names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    tasks: Vec<(String, ArgumentList)>,
}

impl Schema {
    /// Create an empty schema
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Insert a task, replacing the arguments in place if the name exists
    ///
    /// Returns the previous argument list, if any.
    pub fn insert(&mut self, name: impl Into<String>, args: ArgumentList) -> Option<ArgumentList> {
        let name = name.into();
        match self.tasks.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, args)),
            None => {
                self.tasks.push((name, args));
                None
            },
        }
    }

    /// Look up a task's arguments by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArgumentList> {
        self.tasks.iter().find(|(n, _)| n == name).map(|(_, args)| args)
    }

    /// Whether the schema contains a task
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of tasks
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the schema has no tasks
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over `(name, arguments)` in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgumentList)> {
        self.tasks.iter().map(|(n, args)| (n.as_str(), args))
    }

    /// Task names in schema order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|(n, _)| n.as_str())
    }
}

impl<S: Into<String>> FromIterator<(S, ArgumentList)> for Schema {
    fn from_iter<I: IntoIterator<Item = (S, ArgumentList)>>(iter: I) -> Self {
        let mut schema = Self::new();
        for (name, args) in iter {
            schema.insert(name, args);
        }
        schema
    }
}

impl IntoIterator for Schema {
    type Item = (String, ArgumentList);
    type IntoIter = std::vec::IntoIter<(String, ArgumentList)>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tasks.len()))?;
        for (name, args) in &self.tasks {
            map.serialize_entry(name, args)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SchemaVisitor;

        impl<'de> Visitor<'de> for SchemaVisitor {
            type Value = Schema;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of task names to argument lists")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Schema, E> {
                Ok(Schema::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Schema, A::Error> {
                let mut tasks: Vec<(String, ArgumentList)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, args)) = access.next_entry::<String, ArgumentList>()? {
                    if tasks.iter().any(|(n, _)| *n == name) {
                        return Err(de::Error::custom(format!("duplicate task name: {name}")));
                    }
                    tasks.push((name, args));
                }
                Ok(Schema { tasks })
            }
        }

        deserializer.deserialize_any(SchemaVisitor)
    }
}
