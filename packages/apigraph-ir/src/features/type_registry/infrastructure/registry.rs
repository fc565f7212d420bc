//! Type registry, phase 1: interning
//!
//! One registry per universe. Every full name maps to exactly one arena
//! slot; repeated requests return the same [`TypeId`]. Names nobody defined
//! get a facade slot so callers always receive an id.
//!
//! Lookup order for a name:
//! 1. exact, then lowercase (managed universe, when enabled)
//! 2. parsed canonical name (`Foo::Bar^` -> `Foo.Bar`), exact then lowercase
//! 3. built-in primitive (when enabled)
//! 4. new facade

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::RegistryConfig;
use crate::features::compound_builder::CompoundNode;
use crate::features::declaration_parser::DeclarationParser;
use crate::features::type_graph::{TypeId, TypeKind, Universe};
use crate::features::type_registry::domain::is_primitive;
use crate::features::type_registry::domain::slot::{Slot, SlotOrigin};

pub struct TypeRegistry {
    pub(crate) universe: Universe,
    pub(crate) config: RegistryConfig,
    pub(crate) parser: DeclarationParser,
    pub(crate) slots: Vec<Slot>,
    pub(crate) names: FxHashMap<String, TypeId>,
    pub(crate) lowercase_names: FxHashMap<String, TypeId>,
}

impl TypeRegistry {
    /// Empty registry holding only the global namespace at `TypeId::GLOBAL`
    pub fn new(universe: Universe, config: &RegistryConfig) -> Self {
        let mut names = FxHashMap::default();
        names.insert(String::new(), TypeId::GLOBAL);
        Self {
            universe,
            config: config.clone(),
            parser: DeclarationParser::new(),
            slots: vec![Slot::new("", SlotOrigin::GlobalNamespace)],
            names,
            lowercase_names: FxHashMap::default(),
        }
    }

    /// Use a configured parser for canonical-name retries
    pub fn with_parser(mut self, parser: DeclarationParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn universe(&self) -> Universe {
        self.universe
    }

    /// Find an interned name without creating anything
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        let name = name.trim();
        if name.is_empty() {
            return Some(TypeId::GLOBAL);
        }
        if let Some(id) = self.find_interned(name) {
            return Some(id);
        }

        let parsed = self.parser.parse(name);
        if !parsed.full_name.is_empty() && parsed.full_name != name {
            return self.find_interned(&parsed.full_name);
        }
        None
    }

    /// Exact, then lowercase when this universe folds case.
    ///
    /// A name that is itself a built-in never folds onto another spelling:
    /// `BOOL` and `bool` stay two nodes.
    pub(crate) fn find_interned(&self, name: &str) -> Option<TypeId> {
        if let Some(&id) = self.names.get(name) {
            return Some(id);
        }
        if !self.folds_case() || (self.config.recognize_primitives && is_primitive(name)) {
            return None;
        }
        self.lowercase_names.get(&name.to_lowercase()).copied()
    }

    /// Only managed metadata is case-insensitive; native C++ and ObjC are not
    pub(crate) fn folds_case(&self) -> bool {
        self.config.case_insensitive_fallback && self.universe == Universe::Managed
    }

    /// Id for a name; a primitive or facade slot is created on a miss
    pub fn get_or_create(&mut self, name: &str) -> TypeId {
        if let Some(id) = self.lookup(name) {
            return id;
        }

        let name = name.trim();
        let parsed = self.parser.parse(name);
        let key = if parsed.full_name.is_empty() {
            name.to_string()
        } else {
            parsed.full_name
        };

        if self.config.recognize_primitives && is_primitive(&key) {
            debug!("[{}] primitive {}", self.universe, key);
            return self.push_slot(key, SlotOrigin::Primitive);
        }

        debug!("[{}] facade for unknown name {}", self.universe, key);
        self.push_slot(key, SlotOrigin::Facade)
    }

    /// Intern a compound under its full name.
    ///
    /// A facade (or primitive) already holding the name is upgraded in place
    /// when `upgrade_facades` is set, so ids handed out earlier now see the
    /// real node. Otherwise the compound gets a fresh slot and the name is
    /// re-pointed; earlier ids keep the facade. A second compound with the
    /// same name is merged into the first.
    pub fn get_or_create_compound(&mut self, compound: &CompoundNode) -> TypeId {
        let key = compound.full_name.trim();
        if key.is_empty() {
            debug!(
                "[{}] compound {} has an empty name, using global namespace",
                self.universe, compound.id
            );
            return TypeId::GLOBAL;
        }

        let existing = match self.names.get(key).copied() {
            Some(id) => id,
            None => return self.push_slot(key, SlotOrigin::Compound(Box::new(compound.clone()))),
        };

        if self.slots[existing.index()].is_placeholder() {
            let owned = SlotOrigin::Compound(Box::new(compound.clone()));
            if self.config.upgrade_facades {
                debug!("[{}] upgraded facade {} in place", self.universe, key);
                self.slots[existing.index()].origin = owned;
                return existing;
            }
            debug!("[{}] {} defined after its facade, new node", self.universe, key);
            return self.push_slot(key, owned);
        }

        if let SlotOrigin::Compound(known) = &mut self.slots[existing.index()].origin {
            debug!("merging second definition of {} ({})", key, compound.id);
            merge_compound(known, compound);
        }
        existing
    }

    /// Append a slot and point the name at it
    pub(crate) fn push_slot(&mut self, key: impl Into<String>, origin: SlotOrigin) -> TypeId {
        let key = key.into();
        let id = TypeId::from_index(self.slots.len());
        self.slots.push(Slot::new(key.clone(), origin));

        // first spelling keeps the folded key; a re-pointed name takes it over
        let folded = key.to_lowercase();
        let keep = match self.lowercase_names.get(&folded) {
            Some(prev) => self.slots[prev.index()].full_name != key,
            None => false,
        };
        if !keep {
            self.lowercase_names.insert(folded, id);
        }
        self.names.insert(key, id);
        id
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Only the global namespace interned
    pub fn is_empty(&self) -> bool {
        self.slots.len() <= 1
    }

    pub fn facade_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_facade()).count()
    }

    pub fn kind_of(&self, id: TypeId) -> Option<TypeKind> {
        self.slots.get(id.index()).map(Slot::kind)
    }

    pub fn is_facade(&self, id: TypeId) -> bool {
        self.slots.get(id.index()).map_or(false, Slot::is_facade)
    }

    pub fn full_name(&self, id: TypeId) -> Option<&str> {
        self.slots.get(id.index()).map(|s| s.full_name.as_str())
    }

    pub fn compound(&self, id: TypeId) -> Option<&CompoundNode> {
        match &self.slots.get(id.index())?.origin {
            SlotOrigin::Compound(compound) => Some(compound),
            _ => None,
        }
    }
}

/// Fold a second definition of the same name into the first
fn merge_compound(known: &mut CompoundNode, incoming: &CompoundNode) {
    known.members.extend(incoming.members.iter().cloned());
    known.enum_values.extend(incoming.enum_values.iter().cloned());
    for (into, from) in [
        (&mut known.base_raw_names, &incoming.base_raw_names),
        (&mut known.derived_raw_names, &incoming.derived_raw_names),
        (&mut known.child_raw_names, &incoming.child_raw_names),
    ] {
        for name in from {
            if !into.contains(name) {
                into.push(name.clone());
            }
        }
    }
    if known.content.is_empty() {
        known.content = incoming.content.clone();
    }
    if known.template_params.is_empty() {
        known.template_params = incoming.template_params.clone();
    }
}
