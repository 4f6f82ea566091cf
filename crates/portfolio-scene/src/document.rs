use std::collections::BTreeMap;

use crate::element::{Child, Element, Layout};
use crate::html;

/// Generational index into the document arena.
/// A slot freed by a re-render gets a new generation, so ids held across
/// the re-render stop resolving instead of pointing at unrelated nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId {
    pub index: u32,
    pub generation: u32,
}

#[derive(Clone, Debug)]
struct ElementData {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    layout: Option<Layout>,
    /// Live value of a form control; `None` means "default from markup".
    value: Option<String>,
}

#[derive(Clone, Debug)]
enum NodeKind {
    Element(ElementData),
    Text(String),
}

#[derive(Clone, Debug)]
struct NodeData {
    parent: Option<NodeId>,
    kind: NodeKind,
    children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: Option<NodeData>,
}

/// Read-only view of an element node, handed to query predicates.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    pub id: NodeId,
    data: &'a ElementData,
}

impl<'a> ElementRef<'a> {
    pub fn tag(&self) -> &'a str {
        &self.data.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.data.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.data.classes.iter().any(|c| c == class)
    }
}

/// Arena-backed element tree with DOM-like queries and mutations.
#[derive(Clone, Debug)]
pub struct Document {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    root: NodeId,
}

const FORM_CONTROL_TAGS: [&str; 3] = ["input", "textarea", "select"];

impl Document {
    pub fn new(root: Element) -> Self {
        let mut document = Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
        };
        document.root = document.insert(None, Child::Element(root));
        document
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Number of live nodes, text runs included.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }

    fn node(&self, id: NodeId) -> Option<&NodeData> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }

    fn element_data(&self, id: NodeId) -> Option<&ElementData> {
        match &self.node(id)?.kind {
            NodeKind::Element(data) => Some(data),
            NodeKind::Text(_) => None,
        }
    }

    fn element_data_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Element(data) => Some(data),
            NodeKind::Text(_) => None,
        }
    }

    pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.element_data(id).map(|data| ElementRef { id, data })
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(data);
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node: Some(data),
            });
            NodeId {
                index,
                generation: 0,
            }
        }
    }

    fn free_subtree(&mut self, id: NodeId) {
        let Some(slot) = self.slots.get_mut(id.index as usize) else {
            return;
        };
        if slot.generation != id.generation {
            return;
        }
        let Some(node) = slot.node.take() else {
            return;
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.index);
        for child in node.children {
            self.free_subtree(child);
        }
    }

    fn insert(&mut self, parent: Option<NodeId>, child: Child) -> NodeId {
        match child {
            Child::Text(text) => self.alloc(NodeData {
                parent,
                kind: NodeKind::Text(text),
                children: Vec::new(),
            }),
            Child::Element(element) => {
                let Element {
                    tag,
                    attributes,
                    classes,
                    style,
                    layout,
                    children,
                } = element;
                let id = self.alloc(NodeData {
                    parent,
                    kind: NodeKind::Element(ElementData {
                        tag,
                        attributes,
                        classes,
                        style,
                        layout,
                        value: None,
                    }),
                    children: Vec::new(),
                });
                let child_ids: Vec<NodeId> = children
                    .into_iter()
                    .map(|child| self.insert(Some(id), child))
                    .collect();
                if let Some(node) = self.node_mut(id) {
                    node.children = child_ids;
                }
                id
            }
        }
    }

    /// Appends `child` under `parent`. Returns `None` when `parent` is not a
    /// live element.
    pub fn append_child(&mut self, parent: NodeId, child: impl Into<Child>) -> Option<NodeId> {
        self.element_data(parent)?;
        let id = self.insert(Some(parent), child.into());
        self.node_mut(parent)?.children.push(id);
        Some(id)
    }

    /// Detaches and frees every child of `id`.
    pub fn clear_children(&mut self, id: NodeId) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let children = std::mem::take(&mut node.children);
        for child in children {
            self.free_subtree(child);
        }
    }

    pub fn replace_children(&mut self, id: NodeId, children: Vec<Child>) -> Vec<NodeId> {
        if self.element_data(id).is_none() {
            return Vec::new();
        }
        self.clear_children(id);
        children
            .into_iter()
            .filter_map(|child| self.append_child(id, child))
            .collect()
    }

    /// Detaches `id` from its parent and frees it. The root cannot be removed.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root {
            return false;
        }
        let Some(parent) = self.node(id).map(|node| node.parent) else {
            return false;
        };
        if let Some(parent) = parent.and_then(|parent| self.node_mut(parent)) {
            parent.children.retain(|child| *child != id);
        }
        self.free_subtree(id);
        true
    }

    /// All children including text runs.
    pub fn child_nodes(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    /// Element children only.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.child_nodes(id)
            .into_iter()
            .filter(|child| self.element_data(*child).is_some())
            .collect()
    }

    /// Element descendants of `id` in document order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).into_iter().rev().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).into_iter().rev());
        }
        out
    }

    /// Element descendants of `id` matching `predicate`, in document order.
    pub fn query_descendants(
        &self,
        id: NodeId,
        predicate: impl Fn(ElementRef<'_>) -> bool,
    ) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|node| self.element(*node).is_some_and(&predicate))
            .collect()
    }

    /// All elements matching `predicate`, root included, in document order.
    pub fn query(&self, predicate: impl Fn(ElementRef<'_>) -> bool) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.element(self.root).is_some_and(&predicate) {
            out.push(self.root);
        }
        out.extend(self.query_descendants(self.root, predicate));
        out
    }

    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.query(|el| el.attribute("id") == Some(element_id))
            .into_iter()
            .next()
    }

    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.query(|el| el.has_class(class))
    }

    pub fn query_tag(&self, tag: &str) -> Vec<NodeId> {
        self.query(|el| el.tag() == tag)
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element_data(id).map(|data| data.tag.as_str())
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element_data(id)?.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.element_data(id)?.style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: impl Into<String>) {
        if let Some(data) = self.element_data_mut(id) {
            data.style.insert(property.to_string(), value.into());
        }
    }

    /// Clears an inline style property, like assigning `""` in the browser.
    pub fn remove_style(&mut self, id: NodeId, property: &str) {
        if let Some(data) = self.element_data_mut(id) {
            data.style.remove(property);
        }
    }

    pub fn layout(&self, id: NodeId) -> Option<Layout> {
        self.element_data(id)?.layout
    }

    /// Current value of a form control: the live value if one was set,
    /// otherwise the `value` attribute from markup.
    pub fn value(&self, id: NodeId) -> Option<&str> {
        let data = self.element_data(id)?;
        data.value
            .as_deref()
            .or_else(|| data.attributes.get("value").map(String::as_str))
    }

    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) {
        if let Some(data) = self.element_data_mut(id) {
            data.value = Some(value.into());
        }
    }

    /// Restores every form control under `form` to its markup default.
    pub fn reset_form(&mut self, form: NodeId) {
        let controls =
            self.query_descendants(form, |el| FORM_CONTROL_TAGS.contains(&el.tag()));
        for control in controls {
            if let Some(data) = self.element_data_mut(control) {
                data.value = None;
            }
        }
    }

    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        match &node.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element(_) => {
                for child in &node.children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    /// Replaces all children with a single text run (none for empty text).
    pub fn set_text_content(&mut self, id: NodeId, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.clear_children(id);
        } else {
            self.replace_children(id, vec![Child::Text(text)]);
        }
    }

    /// Snapshot of the subtree at `id` as owned markup.
    pub fn to_markup(&self, id: NodeId) -> Option<Child> {
        let node = self.node(id)?;
        Some(match &node.kind {
            NodeKind::Text(text) => Child::Text(text.clone()),
            NodeKind::Element(data) => Child::Element(Element {
                tag: data.tag.clone(),
                attributes: data.attributes.clone(),
                classes: data.classes.clone(),
                style: data.style.clone(),
                layout: data.layout,
                children: self.children_markup(id),
            }),
        })
    }

    pub fn children_markup(&self, id: NodeId) -> Vec<Child> {
        self.child_nodes(id)
            .into_iter()
            .filter_map(|child| self.to_markup(child))
            .collect()
    }

    pub fn inner_html(&self, id: NodeId) -> String {
        html::render_children(&self.children_markup(id))
    }

    pub fn outer_html(&self, id: NodeId) -> String {
        self.to_markup(id)
            .map(|markup| html::render_child(&markup))
            .unwrap_or_default()
    }
}
