//! In-memory task registry
//!
//! Implements [`SchemaSource`] over task signatures that were registered
//! explicitly. Host applications register each task once at startup and
//! hand the registry to [`generate_schema`](crate::core::ports::generate_schema).

use std::collections::BTreeMap;

use crate::core::models::{ArgumentDescriptor, ArgumentKind, ArgumentList};
use crate::core::ports::SchemaSource;

/// Builder for one task's call signature
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSignature {
    args: ArgumentList,
}

impl TaskSignature {
    /// Start an empty signature
    #[must_use]
    pub const fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Append an argument as-is
    #[must_use]
    pub fn arg(mut self, arg: ArgumentDescriptor) -> Self {
        self.args.push(arg);
        self
    }

    /// Append a required positional-or-keyword argument
    #[must_use]
    pub fn positional(self, name: &str) -> Self {
        self.arg(ArgumentDescriptor::new(name))
    }

    /// Append a positional-only argument
    #[must_use]
    pub fn positional_only(self, name: &str) -> Self {
        self.arg(ArgumentDescriptor::new(name).with_kind(ArgumentKind::PositionalOnly))
    }

    /// Append a positional-or-keyword argument with a default value
    #[must_use]
    pub fn with_default(self, name: &str, default: &str) -> Self {
        self.arg(ArgumentDescriptor::new(name).with_default(default))
    }

    /// Append a keyword-only argument, optionally with a default value
    #[must_use]
    pub fn keyword_only(self, name: &str, default: Option<&str>) -> Self {
        let arg = ArgumentDescriptor::new(name).with_kind(ArgumentKind::KeywordOnly);
        self.arg(match default {
            Some(d) => arg.with_default(d),
            None => arg,
        })
    }

    /// Append a `*args` catch-all
    #[must_use]
    pub fn var_positional(self, name: &str) -> Self {
        self.arg(ArgumentDescriptor::new(name).with_kind(ArgumentKind::VarPositional))
    }

    /// Append a `**kwargs` catch-all
    #[must_use]
    pub fn var_keyword(self, name: &str) -> Self {
        self.arg(ArgumentDescriptor::new(name).with_kind(ArgumentKind::VarKeyword))
    }

    /// The argument list built so far
    #[must_use]
    pub fn arguments(&self) -> &[ArgumentDescriptor] {
        &self.args
    }
}

impl From<TaskSignature> for ArgumentList {
    fn from(signature: TaskSignature) -> Self {
        signature.args
    }
}

/// Registry of task signatures keyed by task name
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: BTreeMap<String, ArgumentList>,
}

impl TaskRegistry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
        }
    }

    /// Register a task, replacing any earlier signature with the same name
    pub fn register(&mut self, name: impl Into<String>, signature: impl Into<ArgumentList>) {
        let name = name.into();
        if self.tasks.insert(name.clone(), signature.into()).is_some() {
            log::debug!("task {name} re-registered, previous signature replaced");
        }
    }

    /// Remove a task from the registry
    pub fn unregister(&mut self, name: &str) -> Option<ArgumentList> {
        self.tasks.remove(name)
    }

    /// Number of registered tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl SchemaSource for TaskRegistry {
    fn task_names(&self) -> Vec<String> {
        self.tasks.keys().cloned().collect()
    }

    fn describe(&self, task: &str) -> Option<ArgumentList> {
        self.tasks.get(task).cloned()
    }
}
