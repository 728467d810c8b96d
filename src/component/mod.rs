//! Component model - the lifecycle/render contract, the tag registry and
//! the display tree.
//!
//! Every visual unit implements [`Component`]: declared observed
//! attributes and non-reflecting properties, a style hook and a content
//! hook. The [`ComponentTree`] hosts instances and drives the lifecycle:
//! attach renders, observed mutation re-renders, detach clears. Events
//! flow strictly upward and components answer them with [`Command`]s that
//! the tree executes.

mod contract;
mod registry;
mod tree;

pub use contract::{Command, Component, View};
pub use registry::{ComponentRegistry, RegistryError};
pub use tree::{ComponentTree, InstanceId, TreeError};
