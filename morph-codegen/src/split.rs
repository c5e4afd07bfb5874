//! Model splitting.
//!
//! Before constraining, a language decides which nested models are rendered
//! as their own artifact (a struct, an enum, ...). Splitting replaces every
//! nested occurrence of such a model with a Reference to it and collects the
//! models to render.

use std::collections::{HashMap, HashSet};

use morphgen_ir::{
    MetaModel, MetaModelArena, MetaModelId, MetaModelKind, MetaModelOptions, ModelKind,
};
use tracing::trace;

/// Which kinds of nested models are rendered separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    pub split_object: bool,
    pub split_enum: bool,
    pub split_union: bool,
    pub split_array: bool,
    pub split_tuple: bool,
    pub split_dictionary: bool,
    pub split_string: bool,
    pub split_integer: bool,
    pub split_float: bool,
    pub split_boolean: bool,
}

impl SplitOptions {
    /// Split exactly the given kinds.
    ///
    /// References and Any are never split.
    pub fn for_kinds(kinds: &[ModelKind]) -> Self {
        let mut options = Self::default();
        for kind in kinds {
            match kind {
                ModelKind::Object => options.split_object = true,
                ModelKind::Enum => options.split_enum = true,
                ModelKind::Union => options.split_union = true,
                ModelKind::Array => options.split_array = true,
                ModelKind::Tuple => options.split_tuple = true,
                ModelKind::Dictionary => options.split_dictionary = true,
                ModelKind::String => options.split_string = true,
                ModelKind::Integer => options.split_integer = true,
                ModelKind::Float => options.split_float = true,
                ModelKind::Boolean => options.split_boolean = true,
                ModelKind::Reference | ModelKind::Any => {}
            }
        }
        options
    }

    /// Check if models of `kind` are split.
    pub fn should_split(&self, kind: ModelKind) -> bool {
        match kind {
            ModelKind::Object => self.split_object,
            ModelKind::Enum => self.split_enum,
            ModelKind::Union => self.split_union,
            ModelKind::Array => self.split_array,
            ModelKind::Tuple => self.split_tuple,
            ModelKind::Dictionary => self.split_dictionary,
            ModelKind::String => self.split_string,
            ModelKind::Integer => self.split_integer,
            ModelKind::Float => self.split_float,
            ModelKind::Boolean => self.split_boolean,
            ModelKind::Reference | ModelKind::Any => false,
        }
    }
}

/// Split the graph under `root` in place.
///
/// Returns the models to render, `root` first, then every split model in
/// the order it was first reached. Object properties, union members, array
/// values, tuple slots and dictionary keys and values are split; references,
/// union properties and extended parents are left alone. All occurrences of
/// one split model share a single Reference node.
pub fn split(
    arena: &mut MetaModelArena,
    root: MetaModelId,
    options: &SplitOptions,
) -> Vec<MetaModelId> {
    let mut splitter = Splitter {
        arena,
        options,
        models: vec![root],
        seen: HashSet::new(),
        references: HashMap::new(),
    };
    splitter.visit(root);
    splitter.models
}

struct Splitter<'a> {
    arena: &'a mut MetaModelArena,
    options: &'a SplitOptions,
    models: Vec<MetaModelId>,
    seen: HashSet<MetaModelId>,
    references: HashMap<MetaModelId, MetaModelId>,
}

impl Splitter<'_> {
    fn visit(&mut self, id: MetaModelId) {
        if !self.seen.insert(id) {
            return;
        }

        let children: Vec<MetaModelId> = match &self.arena.get(id).kind {
            MetaModelKind::Object(object) => {
                object.properties.values().map(|p| p.property).collect()
            }
            MetaModelKind::Union(union) => union.union.clone(),
            MetaModelKind::Array(array) => vec![array.value_model],
            MetaModelKind::Tuple(tuple) => tuple.tuple.iter().map(|slot| slot.value).collect(),
            MetaModelKind::Dictionary(dictionary) => vec![dictionary.key, dictionary.value],
            MetaModelKind::Enum(_)
            | MetaModelKind::Reference(_)
            | MetaModelKind::String
            | MetaModelKind::Integer
            | MetaModelKind::Float
            | MetaModelKind::Boolean
            | MetaModelKind::Any => return,
        };

        let replacements: Vec<MetaModelId> = children.iter().map(|c| self.try_split(*c)).collect();
        let mut replacements = replacements.into_iter();
        match &mut self.arena.get_mut(id).kind {
            MetaModelKind::Object(object) => {
                let properties = object.properties.values_mut();
                for (property, replacement) in properties.zip(&mut replacements) {
                    property.property = replacement;
                }
            }
            MetaModelKind::Union(union) => {
                for (member, replacement) in union.union.iter_mut().zip(&mut replacements) {
                    *member = replacement;
                }
            }
            MetaModelKind::Array(array) => {
                if let Some(replacement) = replacements.next() {
                    array.value_model = replacement;
                }
            }
            MetaModelKind::Tuple(tuple) => {
                for (slot, replacement) in tuple.tuple.iter_mut().zip(&mut replacements) {
                    slot.value = replacement;
                }
            }
            MetaModelKind::Dictionary(dictionary) => {
                if let (Some(key), Some(value)) = (replacements.next(), replacements.next()) {
                    dictionary.key = key;
                    dictionary.value = value;
                }
            }
            _ => {}
        }

        for child in children {
            self.visit(child);
        }
    }

    /// The model to use in place of `id`.
    fn try_split(&mut self, id: MetaModelId) -> MetaModelId {
        let model = self.arena.get(id);
        if !self.options.should_split(model.kind()) {
            return id;
        }
        if !self.models.contains(&id) {
            self.models.push(id);
        }
        if let Some(&reference) = self.references.get(&id) {
            return reference;
        }

        let options = MetaModelOptions {
            extend: Vec::new(),
            ..model.options.clone()
        };
        let reference = MetaModel::reference(model.name.clone(), id)
            .with_options(options)
            .with_original_input(model.original_input.clone());
        let reference = self.arena.insert(reference);
        self.references.insert(id, reference);
        trace!(model = %id, reference = %reference, "split model");
        reference
    }
}
