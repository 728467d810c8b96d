//! Display tree - instance arena and lifecycle host.
//!
//! Manages the lifecycle of component instances:
//! - index allocation with a free pool for O(1) reuse
//! - ReactiveSet of allocated indices (effects react to add/remove)
//! - attach renders, observed mutation re-renders, detach clears
//! - upward-only event dispatch, synchronous and registration-ordered
//! - upgrading of registered tags found in rendered content
//!
//! All work runs on the caller's thread in response to explicit calls;
//! nothing here blocks, suspends or spawns.

use std::collections::BTreeMap;
use std::rc::Rc;

use spark_signals::{signal, ReactiveSet, Signal};
use thiserror::Error;
use tracing::{debug, trace};

use crate::dom::{Node, ShadowScope};
use crate::types::{CustomEvent, InstanceFlags, PropertyValue};

use super::contract::{Command, Component, View};
use super::registry::ComponentRegistry;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The tag is not defined in the registry handed to the tree.
    #[error("unknown component tag `{0}`")]
    UnknownTag(String),
    /// The id does not name a live instance.
    #[error("unknown instance {0:?}")]
    UnknownInstance(InstanceId),
    /// A swap targeted a slot id the rendered content does not contain.
    #[error("no slot element with id `{0}` in rendered content")]
    SlotNotFound(String),
}

// =============================================================================
// Instances
// =============================================================================

/// Identity of a live component instance: its position in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(usize);

type Listener = Rc<dyn Fn(&CustomEvent)>;

/// Link from a rendered child element to the instance upgraded for it.
struct ChildBinding {
    /// `id` attribute of the child's host element, when it has one.
    element_id: Option<String>,
    /// id of the nearest enclosing element with an `id` attribute.
    slot: Option<String>,
    id: InstanceId,
}

struct Instance {
    tag: String,
    component: Box<dyn Component>,
    attributes: BTreeMap<String, String>,
    properties: BTreeMap<String, PropertyValue>,
    flags: InstanceFlags,
    parent: Option<InstanceId>,
    shadow: ShadowScope,
    children: Vec<ChildBinding>,
    listeners: BTreeMap<String, Vec<Listener>>,
    /// `id` attribute of the markup element that instantiated this
    /// component, used as the click detail.
    host_element_id: Option<String>,
}

/// A registered element found while scanning freshly rendered content.
struct Upgrade {
    tag: String,
    attributes: BTreeMap<String, String>,
    element_id: Option<String>,
    slot: Option<String>,
}

// =============================================================================
// Component Tree
// =============================================================================

/// The display tree: owns every live instance and drives the contract.
pub struct ComponentTree {
    registry: Rc<ComponentRegistry>,
    instances: Vec<Option<Instance>>,
    free: Vec<usize>,
    allocated: ReactiveSet<usize>,
    render_generation: Signal<u64>,
}

impl ComponentTree {
    /// Create a tree backed by an explicit registry.
    pub fn new(registry: Rc<ComponentRegistry>) -> Self {
        Self {
            registry,
            instances: Vec::new(),
            free: Vec::new(),
            allocated: ReactiveSet::new(),
            render_generation: signal(0u64),
        }
    }

    /// Signal bumped after every completed render. Observe it with an
    /// effect to repaint.
    pub fn render_generation(&self) -> Signal<u64> {
        self.render_generation.clone()
    }

    /// Count of live instances.
    pub fn instance_count(&self) -> usize {
        self.allocated.len()
    }

    // =========================================================================
    // Instance access
    // =========================================================================

    fn instance(&self, id: InstanceId) -> Result<&Instance, TreeError> {
        self.try_instance(id).ok_or(TreeError::UnknownInstance(id))
    }

    fn instance_mut(&mut self, id: InstanceId) -> Result<&mut Instance, TreeError> {
        self.instances
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(TreeError::UnknownInstance(id))
    }

    fn try_instance(&self, id: InstanceId) -> Option<&Instance> {
        self.instances.get(id.0).and_then(Option::as_ref)
    }

    /// Tag of a live instance.
    pub fn tag(&self, id: InstanceId) -> Result<&str, TreeError> {
        Ok(self.instance(id)?.tag.as_str())
    }

    /// Whether an instance is currently part of the display tree.
    pub fn is_attached(&self, id: InstanceId) -> bool {
        self.try_instance(id)
            .is_some_and(|inst| inst.flags.contains(InstanceFlags::ATTACHED))
    }

    /// The instance's rendering scope.
    pub fn shadow(&self, id: InstanceId) -> Result<&ShadowScope, TreeError> {
        Ok(&self.instance(id)?.shadow)
    }

    /// Serialized scope, the way the shadow root would look.
    pub fn rendered_html(&self, id: InstanceId) -> Result<String, TreeError> {
        Ok(self.instance(id)?.shadow.to_html())
    }

    /// Current value of a content attribute.
    pub fn attribute(&self, id: InstanceId, name: &str) -> Result<Option<String>, TreeError> {
        Ok(self.instance(id)?.attributes.get(name).cloned())
    }

    /// Current value of a non-reflecting property.
    pub fn property(&self, id: InstanceId, name: &str) -> Result<Option<PropertyValue>, TreeError> {
        Ok(self.instance(id)?.properties.get(name).cloned())
    }

    /// Child instances in document order.
    pub fn children(&self, id: InstanceId) -> Result<Vec<InstanceId>, TreeError> {
        Ok(self.instance(id)?.children.iter().map(|b| b.id).collect())
    }

    /// The child instance whose host element carries the given id.
    pub fn find_child(&self, id: InstanceId, element_id: &str) -> Option<InstanceId> {
        self.try_instance(id)?
            .children
            .iter()
            .find(|b| b.element_id.as_deref() == Some(element_id))
            .map(|b| b.id)
    }

    // =========================================================================
    // Creation and attachment
    // =========================================================================

    /// Instantiate a component for a registered tag. The instance starts
    /// detached: nothing renders until it is attached.
    pub fn create(&mut self, tag: &str) -> Result<InstanceId, TreeError> {
        let component = self
            .registry
            .instantiate(tag)
            .ok_or_else(|| TreeError::UnknownTag(tag.to_string()))?;

        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.instances.push(None);
                self.instances.len() - 1
            }
        };
        self.instances[index] = Some(Instance {
            tag: tag.to_string(),
            component,
            attributes: BTreeMap::new(),
            properties: BTreeMap::new(),
            flags: InstanceFlags::NONE,
            parent: None,
            shadow: ShadowScope::new(),
            children: Vec::new(),
            listeners: BTreeMap::new(),
            host_element_id: None,
        });
        self.allocated.insert(index);
        trace!(tag, index, "instance created");
        Ok(InstanceId(index))
    }

    /// Attach an instance to the tree and render it. With a parent, events
    /// emitted by the instance bubble through that parent's scope.
    pub fn attach(&mut self, id: InstanceId, parent: Option<InstanceId>) -> Result<(), TreeError> {
        if let Some(parent_id) = parent {
            // Validated before any mutation.
            self.instance(parent_id)?;
        }
        let host_element_id = {
            let inst = self.instance_mut(id)?;
            inst.parent = parent;
            inst.flags |= InstanceFlags::ATTACHED;
            inst.host_element_id.clone()
        };
        if let Some(parent_id) = parent {
            self.instance_mut(parent_id)?.children.push(ChildBinding {
                element_id: host_element_id,
                slot: None,
                id,
            });
        }
        trace!(index = id.0, "instance attached");
        self.render(id)
    }

    /// Detach an instance: clears its rendered content and tears down the
    /// child instances that content had upgraded. No-op when already
    /// detached. The instance itself stays alive and can be re-attached.
    pub fn detach(&mut self, id: InstanceId) -> Result<(), TreeError> {
        let children = {
            let inst = self.instance_mut(id)?;
            if !inst.flags.contains(InstanceFlags::ATTACHED) {
                return Ok(());
            }
            inst.flags
                .remove(InstanceFlags::ATTACHED | InstanceFlags::RENDERED);
            inst.shadow.clear();
            inst.parent = None;
            inst.children.drain(..).map(|b| b.id).collect::<Vec<_>>()
        };
        for child in children {
            self.remove(child)?;
        }
        trace!(index = id.0, "instance detached");
        Ok(())
    }

    /// Detach and release an instance back to the pool. Tolerates ids that
    /// are already gone.
    pub fn remove(&mut self, id: InstanceId) -> Result<(), TreeError> {
        let Some(parent) = self.try_instance(id).map(|inst| inst.parent) else {
            return Ok(());
        };
        self.detach(id)?;
        if let Some(parent_id) = parent {
            if let Ok(parent_inst) = self.instance_mut(parent_id) {
                parent_inst.children.retain(|b| b.id != id);
            }
        }
        self.instances[id.0] = None;
        self.free.push(id.0);
        self.allocated.remove(&id.0);
        trace!(index = id.0, "instance removed");
        Ok(())
    }

    // =========================================================================
    // Attribute / property mutation
    // =========================================================================

    /// Set a content attribute. The value is always stored; a re-render is
    /// triggered only when the name is observed and the instance is
    /// attached (the change callback no-ops on detached instances).
    pub fn set_attribute(
        &mut self,
        id: InstanceId,
        name: &str,
        value: &str,
    ) -> Result<(), TreeError> {
        let (observed, attached) = {
            let inst = self.instance_mut(id)?;
            let previous = inst
                .attributes
                .insert(name.to_string(), value.to_string());
            trace!(index = id.0, name, ?previous, value, "attribute set");
            (
                inst.component.observed_attributes().contains(&name),
                inst.flags.contains(InstanceFlags::ATTACHED),
            )
        };
        if observed && attached {
            self.render(id)?;
        }
        Ok(())
    }

    /// Set a non-reflecting property. Names outside the declared set are
    /// rejected as a no-op (`Ok(false)`). Accepted writes record the
    /// previous value and re-render while attached.
    pub fn set_property(
        &mut self,
        id: InstanceId,
        name: &str,
        value: PropertyValue,
    ) -> Result<bool, TreeError> {
        let attached = {
            let inst = self.instance_mut(id)?;
            if !inst
                .component
                .observed_non_reflecting_properties()
                .contains(&name)
            {
                trace!(index = id.0, name, "property rejected");
                return Ok(false);
            }
            let previous = inst.properties.insert(name.to_string(), value);
            trace!(index = id.0, name, ?previous, "property set");
            inst.flags.contains(InstanceFlags::ATTACHED)
        };
        if attached {
            self.render(id)?;
        }
        Ok(true)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render an instance: tear down previously upgraded children, build
    /// style and content from the current inputs, swap the scope in one
    /// step, upgrade registered child elements, then run setup commands.
    /// No-op when the instance is detached.
    pub fn render(&mut self, id: InstanceId) -> Result<(), TreeError> {
        if !self.is_attached(id) {
            return Ok(());
        }

        let old_children: Vec<InstanceId> = self
            .instance_mut(id)?
            .children
            .drain(..)
            .map(|b| b.id)
            .collect();
        for child in old_children {
            self.remove(child)?;
        }

        let (style, content) = {
            let inst = self.instance(id)?;
            let view = View::new(&inst.attributes, &inst.properties);
            (inst.component.style(&view), inst.component.content(&view))
        };

        let mut upgrades = Vec::new();
        collect_upgradable(&content, &self.registry, None, &mut upgrades);

        {
            let inst = self.instance_mut(id)?;
            inst.shadow.replace(style, content);
            inst.flags |= InstanceFlags::RENDERED;
        }

        for upgrade in upgrades {
            let child = self.create(&upgrade.tag)?;
            {
                let child_inst = self.instance_mut(child)?;
                child_inst.attributes = upgrade.attributes;
                child_inst.host_element_id = upgrade.element_id.clone();
                child_inst.parent = Some(id);
                child_inst.flags |= InstanceFlags::ATTACHED;
            }
            self.instance_mut(id)?.children.push(ChildBinding {
                element_id: upgrade.element_id,
                slot: upgrade.slot,
                id: child,
            });
            self.render(child)?;
        }

        let commands = {
            let inst = self.instance(id)?;
            let view = View::new(&inst.attributes, &inst.properties);
            inst.component.setup(&view)
        };
        self.execute_commands(id, commands)?;

        self.render_generation
            .set(self.render_generation.get() + 1);
        Ok(())
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Register an external observer for events of one kind reaching this
    /// scope. Observers run in registration order; their return value is
    /// never seen by the emitter.
    pub fn add_event_listener(
        &mut self,
        id: InstanceId,
        kind: &str,
        listener: impl Fn(&CustomEvent) + 'static,
    ) -> Result<(), TreeError> {
        self.instance_mut(id)?
            .listeners
            .entry(kind.to_string())
            .or_default()
            .push(Rc::new(listener));
        Ok(())
    }

    /// Dispatch a custom event from an instance. Delivery is synchronous
    /// and strictly upward: the target's scope first, then each ancestor
    /// in order. Never downward or sideways.
    pub fn emit(&mut self, id: InstanceId, kind: &str, detail: &str) -> Result<(), TreeError> {
        let event = CustomEvent::new(kind, detail);
        debug!(index = id.0, kind, detail, "event dispatched");

        let mut chain = vec![id];
        let mut current = id;
        while let Some(parent) = self.instance(current)?.parent {
            chain.push(parent);
            current = parent;
        }

        for scope in chain {
            // A scope can disappear mid-dispatch when an earlier command
            // swapped it out; skip it.
            let Some(inst) = self.try_instance(scope) else {
                continue;
            };
            let listeners: Vec<Listener> = inst.listeners.get(kind).cloned().unwrap_or_default();
            for listener in &listeners {
                listener(&event);
            }

            let Some(inst) = self.try_instance(scope) else {
                continue;
            };
            let view = View::new(&inst.attributes, &inst.properties);
            let commands = inst.component.on_event(&view, &event);
            self.execute_commands(scope, commands)?;
        }
        Ok(())
    }

    /// Simulate a user click on an instance's host element. Bubbles a
    /// `click` event whose detail is the host element id.
    pub fn click(&mut self, id: InstanceId) -> Result<(), TreeError> {
        let detail = {
            let inst = self.instance(id)?;
            inst.host_element_id
                .clone()
                .unwrap_or_else(|| inst.tag.clone())
        };
        self.emit(id, "click", &detail)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn execute_commands(
        &mut self,
        scope: InstanceId,
        commands: Vec<Command>,
    ) -> Result<(), TreeError> {
        for command in commands {
            match command {
                Command::Emit { kind, detail } => {
                    self.emit(scope, &kind, &detail)?;
                }
                Command::SwapSlot { slot, tag } => {
                    self.swap_slot(scope, &slot, &tag)?;
                }
                Command::SetChildAttribute { child, name, value } => {
                    let Some(child_id) = self.find_child(scope, &child) else {
                        trace!(%child, "no such child element, attribute dropped");
                        continue;
                    };
                    // Keep the markup element in sync with the instance.
                    if let Some(content) = self.instance_mut(scope)?.shadow.content_mut() {
                        if let Some(element) = content.find_by_id_mut(&child) {
                            element.set_attr(&name, &value);
                        }
                    }
                    self.set_attribute(child_id, &name, &value)?;
                }
                Command::SetChildProperty { child, name, value } => {
                    let Some(child_id) = self.find_child(scope, &child) else {
                        trace!(%child, "no such child element, property dropped");
                        continue;
                    };
                    self.set_property(child_id, &name, value)?;
                }
            }
        }
        Ok(())
    }

    /// Replace the component mounted in a slot element with a fresh
    /// instance of `tag`. The slot is never left unset: the old instance
    /// is removed and the new one attached in the same call.
    fn swap_slot(&mut self, scope: InstanceId, slot: &str, tag: &str) -> Result<(), TreeError> {
        if !self.registry.is_defined(tag) {
            return Err(TreeError::UnknownTag(tag.to_string()));
        }

        let doomed: Vec<InstanceId> = self
            .instance(scope)?
            .children
            .iter()
            .filter(|b| b.slot.as_deref() == Some(slot))
            .map(|b| b.id)
            .collect();
        for child in doomed {
            self.remove(child)?;
        }

        {
            let inst = self.instance_mut(scope)?;
            let element = inst
                .shadow
                .content_mut()
                .and_then(|content| content.find_by_id_mut(slot))
                .ok_or_else(|| TreeError::SlotNotFound(slot.to_string()))?;
            element.replace_children(vec![Node::element(tag)]);
        }

        let child = self.create(tag)?;
        {
            let child_inst = self.instance_mut(child)?;
            child_inst.parent = Some(scope);
            child_inst.flags |= InstanceFlags::ATTACHED;
        }
        self.instance_mut(scope)?.children.push(ChildBinding {
            element_id: None,
            slot: Some(slot.to_string()),
            id: child,
        });
        debug!(slot, tag, "slot swapped");
        self.render(child)
    }
}

// =============================================================================
// Upgrading
// =============================================================================

/// Collect registered elements in a freshly rendered content tree, in
/// document order. Does not descend into component elements; their own
/// render owns what is inside. The slot key is the id of the nearest
/// enclosing element that has one.
fn collect_upgradable(
    node: &Node,
    registry: &ComponentRegistry,
    slot: Option<&str>,
    out: &mut Vec<Upgrade>,
) {
    if registry.is_defined(node.tag()) {
        out.push(Upgrade {
            tag: node.tag().to_string(),
            attributes: node.attributes().clone(),
            element_id: node.id().map(String::from),
            slot: slot.map(String::from),
        });
        return;
    }
    let slot = node.id().or(slot);
    for child in node.children() {
        collect_upgradable(child, registry, slot, out);
    }
}

// =============================================================================
// Tests
// =============================================================================
