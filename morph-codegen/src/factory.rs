//! The Constrained-Model factory.
//!
//! Walks a Meta-Model graph from one root and builds its Constrained
//! Meta-Model. An identity memo maps every Meta-Model node to exactly one
//! constrained node, which is what lets the walk terminate on cyclic input:
//! a node is memoized before any of its children are visited.

use std::collections::HashMap;

use eyre::Result;
use indexmap::IndexMap;
use morphgen_ir::{
    EnumModel, MetaModel, MetaModelArena, MetaModelId, MetaModelKind, ObjectProperty,
};
use tracing::{debug, trace};

use crate::{
    constrained::{
        ConstrainedArray, ConstrainedDictionary, ConstrainedEnum, ConstrainedEnumValue,
        ConstrainedGraph, ConstrainedId, ConstrainedKind, ConstrainedModel, ConstrainedObject,
        ConstrainedOptions, ConstrainedProperties, ConstrainedProperty, ConstrainedReference,
        ConstrainedTuple, ConstrainedTupleValue, ConstrainedUnion, Edge, GraphNote,
    },
    constraints::{EnumKeyContext, EnumValueContext, ModelNameContext, PropertyKeyContext},
    generation::DependencyManager,
    language::Language,
    typing::{assign_type, format_constant, resolve_discriminator, widen_edge},
};

/// Build the Constrained Meta-Model of `root`.
///
/// For languages that resolve types eagerly every node is typed on the way;
/// otherwise the graph comes back untyped and
/// [`apply_types`](crate::resolve::apply_types) has to run next.
///
/// Errors from the language's constraint functions abort the build.
pub fn constrain_meta_model<L: Language + ?Sized>(
    language: &L,
    arena: &MetaModelArena,
    root: MetaModelId,
    dependencies: &mut DependencyManager,
) -> Result<ConstrainedGraph> {
    debug!(
        language = language.name(),
        root = %root,
        name = %arena.get(root).name,
        "constraining meta model"
    );

    let mut factory = Factory {
        language,
        arena,
        graph: ConstrainedGraph::new(),
        memo: HashMap::new(),
        dependencies,
    };
    let root_id = factory.build(root)?;
    let mut graph = factory.graph;
    graph.set_root(root_id);

    debug!(nodes = graph.len(), "constrained meta model built");
    Ok(graph)
}

struct Factory<'a, L: Language + ?Sized> {
    language: &'a L,
    arena: &'a MetaModelArena,
    graph: ConstrainedGraph,
    memo: HashMap<MetaModelId, ConstrainedId>,
    dependencies: &'a mut DependencyManager,
}

impl<L: Language + ?Sized> Factory<'_, L> {
    fn build(&mut self, id: MetaModelId) -> Result<ConstrainedId> {
        if let Some(&constrained) = self.memo.get(&id) {
            trace!(meta = %id, constrained = %constrained, "memo hit");
            return Ok(constrained);
        }

        let arena = self.arena;
        let meta = arena.get(id);
        let name = self.language.constraints().model_name(&ModelNameContext {
            model_name: &meta.name,
            options: self.language.options(),
        })?;
        let payload = match &meta.kind {
            MetaModelKind::Enum(enumeration) => {
                ConstrainedKind::Enum(self.build_enum_values(enumeration)?)
            }
            other => empty_payload(other),
        };
        let constrained = self.alloc(meta, name, payload);
        self.memo.insert(id, constrained);
        trace!(meta = %id, constrained = %constrained, kind = %meta.kind(), "allocated");

        let eager = self.language.resolves_types_eagerly();
        let safe = self.language.is_safe(meta.kind());
        if eager && safe {
            self.assign_type(constrained);
        }

        for parent in &meta.options.extend {
            let parent = self.build(*parent)?;
            self.graph.get_mut(constrained).options.extend.push(parent);
        }

        match &meta.kind {
            MetaModelKind::Object(object) => {
                self.build_properties(constrained, &object.properties)?;
            }
            MetaModelKind::Union(union) => {
                for member in &union.union {
                    let member = self.build(*member)?;
                    let node = self.graph.get_mut(constrained);
                    if let ConstrainedKind::Union(payload) = &mut node.kind {
                        payload.union.push(member);
                    }
                }
                self.build_properties(constrained, &union.properties)?;
            }
            MetaModelKind::Array(array) => {
                let value = self.build(array.value_model)?;
                self.graph.set_edge(constrained, Edge::ArrayValue, value);
            }
            MetaModelKind::Tuple(tuple) => {
                for slot in &tuple.tuple {
                    let value = self.build(slot.value)?;
                    let node = self.graph.get_mut(constrained);
                    if let ConstrainedKind::Tuple(payload) = &mut node.kind {
                        payload.tuple.push(ConstrainedTupleValue {
                            index: slot.index,
                            value,
                        });
                    }
                }
            }
            MetaModelKind::Dictionary(dictionary) => {
                let key = self.build_dictionary_key(constrained, dictionary.key)?;
                self.graph.set_edge(constrained, Edge::DictionaryKey, key);
                let value = self.build(dictionary.value)?;
                self.graph.set_edge(constrained, Edge::DictionaryValue, value);
            }
            MetaModelKind::Reference(reference) => {
                let target = self.build(reference.ref_model)?;
                self.graph.set_edge(constrained, Edge::ReferenceTarget, target);
            }
            MetaModelKind::Enum(_)
            | MetaModelKind::String
            | MetaModelKind::Integer
            | MetaModelKind::Float
            | MetaModelKind::Boolean
            | MetaModelKind::Any => {}
        }

        if eager {
            self.finish(constrained)?;
        }
        Ok(constrained)
    }

    fn alloc(&mut self, meta: &MetaModel, name: String, kind: ConstrainedKind) -> ConstrainedId {
        self.graph.alloc(ConstrainedModel::new(
            name,
            meta.original_input.clone(),
            ConstrainedOptions::from_meta(&meta.options),
            kind,
        ))
    }

    fn build_properties(
        &mut self,
        owner: ConstrainedId,
        properties: &IndexMap<String, ObjectProperty>,
    ) -> Result<()> {
        let raw_names: Vec<String> = properties.keys().cloned().collect();

        for (raw_name, property) in properties {
            let assigned: Vec<String> = self
                .owner_properties(owner)
                .map(|p| p.keys().cloned().collect())
                .unwrap_or_default();
            let key = self.language.constraints().property_key(&PropertyKeyContext {
                property_name: raw_name,
                raw_names: &raw_names,
                assigned: &assigned,
                options: self.language.options(),
            })?;

            let unwrapped = self.arena.get(property.property).is_unwrapped_dictionary();
            let model = self.build(property.property)?;
            let entry = ConstrainedProperty {
                unconstrained_property_name: property.property_name.clone(),
                property_name: key.clone(),
                required: property.required && !unwrapped,
                property: model,
            };
            if let Some(properties) = self.owner_properties_mut(owner) {
                properties.insert(key, entry);
            }
        }
        Ok(())
    }

    fn owner_properties(&self, owner: ConstrainedId) -> Option<&ConstrainedProperties> {
        match &self.graph.get(owner).kind {
            ConstrainedKind::Object(object) => Some(&object.properties),
            ConstrainedKind::Union(union) => Some(&union.properties),
            _ => None,
        }
    }

    fn owner_properties_mut(&mut self, owner: ConstrainedId) -> Option<&mut ConstrainedProperties> {
        match &mut self.graph.get_mut(owner).kind {
            ConstrainedKind::Object(object) => Some(&mut object.properties),
            ConstrainedKind::Union(union) => Some(&mut union.properties),
            _ => None,
        }
    }

    /// Build a dictionary key, replacing union keys with Any where the
    /// language does not support them.
    fn build_dictionary_key(
        &mut self,
        dictionary: ConstrainedId,
        key: MetaModelId,
    ) -> Result<ConstrainedId> {
        let meta = self.arena.get(key);
        if self.language.allows_union_dictionary_keys()
            || !matches!(meta.kind, MetaModelKind::Union(_))
        {
            return self.build(key);
        }

        let name = self.language.constraints().model_name(&ModelNameContext {
            model_name: &meta.name,
            options: self.language.options(),
        })?;
        let fallback = self.alloc(meta, name, ConstrainedKind::Any);
        if self.language.resolves_types_eagerly() {
            self.assign_type(fallback);
            format_constant(self.language, &mut self.graph, fallback)?;
        }
        self.graph.push_note(GraphNote::DictionaryKeyFallback {
            dictionary,
            key: fallback,
        });
        debug!(dictionary = %dictionary, key = %meta.name, "union dictionary key replaced by any");
        Ok(fallback)
    }

    fn build_enum_values(&self, enumeration: &EnumModel) -> Result<ConstrainedEnum> {
        let constraints = self.language.constraints();
        let options = self.language.options();
        let raw_keys: Vec<String> = enumeration.values.iter().map(|v| v.key.clone()).collect();
        let mut values: Vec<ConstrainedEnumValue> = Vec::with_capacity(enumeration.values.len());

        for entry in &enumeration.values {
            let assigned: Vec<String> = values.iter().map(|v| v.key.clone()).collect();
            let key = constraints.enum_key(&EnumKeyContext {
                enum_key: &entry.key,
                raw_keys: &raw_keys,
                assigned: &assigned,
                options,
            })?;
            let value = constraints.enum_value(&EnumValueContext {
                enum_key: &key,
                enum_value: &entry.value,
                raw_keys: &raw_keys,
                options,
            })?;
            values.push(ConstrainedEnumValue {
                key,
                value,
                original_input: entry.value.clone(),
            });
        }
        Ok(ConstrainedEnum { values })
    }

    /// Type a node whose children are all built.
    ///
    /// Children still untyped at this point are ancestors under
    /// construction, so the edges leading to them close a cycle and are
    /// widened first.
    fn finish(&mut self, id: ConstrainedId) -> Result<()> {
        if self.graph.get(id).ty.is_none() {
            for (edge, child) in self.graph.edges(id) {
                if self.graph.get(child).ty.is_none() {
                    widen_edge(
                        self.language,
                        &mut self.graph,
                        self.dependencies,
                        id,
                        edge,
                        child,
                    )?;
                }
            }
            self.assign_type(id);
        }
        format_constant(self.language, &mut self.graph, id)?;
        resolve_discriminator(&mut self.graph, id);
        Ok(())
    }

    fn assign_type(&mut self, id: ConstrainedId) {
        assign_type(self.language, &mut self.graph, id, self.dependencies);
    }
}

/// A payload with every edge unset, filled in once the children exist.
fn empty_payload(kind: &MetaModelKind) -> ConstrainedKind {
    match kind {
        MetaModelKind::Object(_) => ConstrainedKind::Object(ConstrainedObject::default()),
        MetaModelKind::Union(_) => ConstrainedKind::Union(ConstrainedUnion::default()),
        MetaModelKind::Array(_) => ConstrainedKind::Array(ConstrainedArray {
            value_model: ConstrainedId::DANGLING,
        }),
        MetaModelKind::Tuple(_) => ConstrainedKind::Tuple(ConstrainedTuple::default()),
        MetaModelKind::Dictionary(dictionary) => {
            ConstrainedKind::Dictionary(ConstrainedDictionary {
                key: ConstrainedId::DANGLING,
                value: ConstrainedId::DANGLING,
                serialization_type: dictionary.serialization_type,
            })
        }
        MetaModelKind::Enum(_) => ConstrainedKind::Enum(ConstrainedEnum::default()),
        MetaModelKind::Reference(_) => ConstrainedKind::Reference(ConstrainedReference {
            ref_model: ConstrainedId::DANGLING,
        }),
        MetaModelKind::String => ConstrainedKind::String,
        MetaModelKind::Integer => ConstrainedKind::Integer,
        MetaModelKind::Float => ConstrainedKind::Float,
        MetaModelKind::Boolean => ConstrainedKind::Boolean,
        MetaModelKind::Any => ConstrainedKind::Any,
    }
}

#[cfg(test)]
mod tests {
    use morphgen_core::to_pascal_case;
    use morphgen_ir::{
        EnumModel, MetaModelOptions, ObjectModel, SerializationType, TupleModel, UnionModel,
    };
    use serde_json::json;

    use super::*;
    use crate::{
        constraints::{DefaultConstraints, NamePipeline},
        testing::{RejectingConstraints, TestLanguage},
    };

    fn constrain(
        language: &TestLanguage,
        arena: &MetaModelArena,
        root: MetaModelId,
    ) -> ConstrainedGraph {
        let mut dependencies = DependencyManager::new();
        constrain_meta_model(language, arena, root, &mut dependencies).expect("constrain")
    }

    fn property(
        graph: &ConstrainedGraph,
        owner: ConstrainedId,
        key: &str,
    ) -> ConstrainedProperty {
        match &graph.get(owner).kind {
            ConstrainedKind::Object(object) => object.properties[key].clone(),
            ConstrainedKind::Union(union) => union.properties[key].clone(),
            other => panic!("{owner} is not an object: {other:?}"),
        }
    }

    fn target(graph: &ConstrainedGraph, reference: ConstrainedId) -> ConstrainedId {
        match &graph.get(reference).kind {
            ConstrainedKind::Reference(r) => r.ref_model,
            other => panic!("{reference} is not a reference: {other:?}"),
        }
    }

    /// Person { name: string, self: Person }
    fn self_referencing_person(arena: &mut MetaModelArena) -> MetaModelId {
        let person = arena.reserve("Person");
        let name = arena.insert(MetaModel::string("name"));
        let this = arena.insert(MetaModel::reference("self", person));
        arena.set(
            person,
            MetaModel::object(
                "Person",
                ObjectModel::new()
                    .property("name", name, true)
                    .property("self", this, false),
            ),
        );
        person
    }

    #[test]
    fn test_self_reference_resolves_to_own_name() {
        let mut arena = MetaModelArena::new();
        let person = self_referencing_person(&mut arena);

        let graph = constrain(&TestLanguage::eager(), &arena, person);

        let root = graph.root();
        assert_eq!(graph.root_model().ty(), "Person");
        let name = property(&graph, root, "name").property;
        assert_eq!(graph.get(name).ty(), "string");
        let this = property(&graph, root, "self").property;
        assert_eq!(graph.get(this).ty(), "Person");
        assert_eq!(target(&graph, this), root);
        assert!(graph.notes().is_empty());
    }

    #[test]
    fn test_deferred_language_leaves_graph_untyped() {
        let mut arena = MetaModelArena::new();
        let person = self_referencing_person(&mut arena);

        let graph = constrain(&TestLanguage::deferred(), &arena, person);

        assert!(graph.iter().all(|(_, model)| model.ty.is_none()));
    }

    #[test]
    fn test_memo_builds_shared_node_once() {
        let mut arena = MetaModelArena::new();
        let text = arena.insert(MetaModel::string("text"));
        let pair = arena.insert(MetaModel::object(
            "pair",
            ObjectModel::new()
                .property("left", text, true)
                .property("right", text, true),
        ));

        let graph = constrain(&TestLanguage::eager(), &arena, pair);

        let root = graph.root();
        assert_eq!(graph.len(), 2);
        assert_eq!(
            property(&graph, root, "left").property,
            property(&graph, root, "right").property
        );
    }

    #[test]
    fn test_constraining_is_deterministic() {
        let mut arena = MetaModelArena::new();
        let person = self_referencing_person(&mut arena);
        let language = TestLanguage::eager();

        let first = constrain(&language, &arena, person);
        let second = constrain(&language, &arena, person);

        assert_eq!(first, second);
        assert_eq!(first.display().to_string(), second.display().to_string());
    }

    #[test]
    fn test_array_cycle_is_widened() {
        let mut arena = MetaModelArena::new();
        let list = arena.reserve("list");
        arena.set(list, MetaModel::array("list", list));

        let graph = constrain(&TestLanguage::eager(), &arena, list);

        let root = graph.root();
        let placeholder = match &graph.root_model().kind {
            ConstrainedKind::Array(array) => array.value_model,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(graph.get(placeholder).kind(), morphgen_ir::ModelKind::Any);
        assert_eq!(graph.get(placeholder).name, "List");
        assert_eq!(graph.root_model().ty(), "any[]");
        assert_eq!(
            graph.notes(),
            [GraphNote::Widened {
                from: root,
                target: root,
                placeholder,
            }]
        );
    }

    #[test]
    fn test_eager_union_cycle_needs_no_widening() {
        let mut arena = MetaModelArena::new();
        let a = arena.reserve("A");
        let b = arena.reserve("B");
        let to_b = arena.insert(MetaModel::reference("B", b));
        let to_a = arena.insert(MetaModel::reference("A", a));
        arena.set(a, MetaModel::union("A", UnionModel::of([to_b])));
        arena.set(b, MetaModel::union("B", UnionModel::of([to_a])));

        let graph = constrain(&TestLanguage::eager(), &arena, a);

        assert!(graph.notes().is_empty());
        assert!(graph.iter().all(|(_, model)| model.ty.is_some()));
    }

    #[test]
    fn test_unwrapped_dictionary_is_never_required() {
        let mut arena = MetaModelArena::new();
        let key = arena.insert(MetaModel::string("key"));
        let value = arena.insert(MetaModel::string("value"));
        let extra = arena.insert(MetaModel::dictionary(
            "extra",
            key,
            value,
            SerializationType::Unwrap,
        ));
        let labels = arena.insert(MetaModel::dictionary(
            "labels",
            key,
            value,
            SerializationType::Normal,
        ));
        let config = arena.insert(MetaModel::object(
            "config",
            ObjectModel::new()
                .property("extra", extra, true)
                .property("labels", labels, true),
        ));

        let graph = constrain(&TestLanguage::eager(), &arena, config);

        let root = graph.root();
        assert!(!property(&graph, root, "extra").required);
        assert!(property(&graph, root, "labels").required);
    }

    #[test]
    fn test_repeated_enum_keys_stay_unique() {
        let mut arena = MetaModelArena::new();
        let keyword = arena.insert(MetaModel::enumeration(
            "keyword",
            EnumModel::from_values([json!("return"), json!("return")]),
        ));

        let graph = constrain(&TestLanguage::eager(), &arena, keyword);

        let ConstrainedKind::Enum(enumeration) = &graph.root_model().kind else {
            panic!("expected an enum");
        };
        let keys: Vec<&str> = enumeration.values.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, ["RESERVED_RETURN", "RESERVED_RESERVED_RETURN"]);
        assert_eq!(enumeration.values[0].value, "\"return\"");
        assert_eq!(graph.root_model().ty(), "Keyword");
    }

    #[test]
    fn test_property_keys_are_unique() {
        let mut arena = MetaModelArena::new();
        let text = arena.insert(MetaModel::string("text"));
        let user = arena.insert(MetaModel::object(
            "user",
            ObjectModel::new()
                .property("userName", text, true)
                .property("user_name", text, true),
        ));

        let graph = constrain(&TestLanguage::eager(), &arena, user);

        let ConstrainedKind::Object(object) = &graph.root_model().kind else {
            panic!("expected an object");
        };
        let keys: Vec<&str> = object.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, ["reserved_user_name", "user_name"]);
        assert_eq!(
            object.properties["reserved_user_name"].unconstrained_property_name,
            "userName"
        );
    }

    #[test]
    fn test_object_extending_itself_terminates() {
        let mut arena = MetaModelArena::new();
        let node = arena.reserve("node");
        arena.set(
            node,
            MetaModel::object("node", ObjectModel::new())
                .with_options(MetaModelOptions::new().with_extend(node)),
        );

        let graph = constrain(&TestLanguage::eager(), &arena, node);

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.root_model().options.extend, [graph.root()]);
    }

    #[test]
    fn test_constant_is_formatted() {
        let mut arena = MetaModelArena::new();
        let kind = arena.insert(
            MetaModel::string("kind")
                .with_options(MetaModelOptions::new().with_constant(json!("cat"))),
        );
        let cat = arena.insert(MetaModel::object(
            "cat",
            ObjectModel::new().property("kind", kind, true),
        ));

        let graph = constrain(&TestLanguage::eager(), &arena, cat);

        let kind = graph.get(property(&graph, graph.root(), "kind").property);
        let constant = kind.options.constant.as_ref().expect("constant");
        assert_eq!(constant.value.as_deref(), Some("\"cat\""));
    }

    fn pet_union(arena: &mut MetaModelArena, dog_pet_type: MetaModel) -> MetaModelId {
        let cat_type = arena.insert(MetaModel::string("petType"));
        let dog_type = arena.insert(dog_pet_type);
        let cat = arena.insert(MetaModel::object(
            "cat",
            ObjectModel::new().property("petType", cat_type, true),
        ));
        let dog = arena.insert(MetaModel::object(
            "dog",
            ObjectModel::new().property("petType", dog_type, true),
        ));
        let to_cat = arena.insert(MetaModel::reference("cat", cat));
        let to_dog = arena.insert(MetaModel::reference("dog", dog));
        arena.insert(
            MetaModel::union("pet", UnionModel::of([to_cat, to_dog]))
                .with_options(MetaModelOptions::new().with_discriminator("petType")),
        )
    }

    #[test]
    fn test_discriminator_type_is_shared_member_type() {
        let mut arena = MetaModelArena::new();
        let pet = pet_union(&mut arena, MetaModel::string("petType"));

        let graph = constrain(&TestLanguage::eager(), &arena, pet);

        let discriminator = graph
            .root_model()
            .options
            .discriminator
            .as_ref()
            .expect("discriminator");
        assert_eq!(discriminator.discriminator, "petType");
        assert_eq!(discriminator.ty.as_deref(), Some("string"));
    }

    #[test]
    fn test_discriminator_type_is_unset_on_mismatch() {
        let mut arena = MetaModelArena::new();
        let pet = pet_union(&mut arena, MetaModel::integer("petType"));

        let graph = constrain(&TestLanguage::eager(), &arena, pet);

        let discriminator = graph
            .root_model()
            .options
            .discriminator
            .as_ref()
            .expect("discriminator");
        assert_eq!(discriminator.ty, None);
    }

    #[test]
    fn test_discriminator_type_is_unset_when_a_member_lacks_it() {
        let mut arena = MetaModelArena::new();
        let cat_type = arena.insert(MetaModel::string("petType"));
        let cat = arena.insert(MetaModel::object(
            "cat",
            ObjectModel::new().property("petType", cat_type, true),
        ));
        let barks = arena.insert(MetaModel::boolean("barks"));
        let dog = arena.insert(MetaModel::object(
            "dog",
            ObjectModel::new().property("barks", barks, true),
        ));
        let to_cat = arena.insert(MetaModel::reference("cat", cat));
        let to_dog = arena.insert(MetaModel::reference("dog", dog));
        let pet = arena.insert(
            MetaModel::union("pet", UnionModel::of([to_cat, to_dog]))
                .with_options(MetaModelOptions::new().with_discriminator("petType")),
        );

        let graph = constrain(&TestLanguage::eager(), &arena, pet);

        let discriminator = graph
            .root_model()
            .options
            .discriminator
            .as_ref()
            .expect("discriminator");
        assert_eq!(discriminator.ty, None);
    }

    #[test]
    fn test_tuple_slots_keep_positions() {
        let mut arena = MetaModelArena::new();
        let x = arena.insert(MetaModel::float("x"));
        let y = arena.insert(MetaModel::integer("y"));
        let point = arena.insert(MetaModel::tuple("point", TupleModel::from_values([x, y])));

        let graph = constrain(&TestLanguage::eager(), &arena, point);

        let ConstrainedKind::Tuple(tuple) = &graph.root_model().kind else {
            panic!("expected a tuple");
        };
        let slots: Vec<(usize, &str)> = tuple
            .tuple
            .iter()
            .map(|slot| (slot.index, graph.get(slot.value).ty()))
            .collect();
        assert_eq!(slots, [(0, "float"), (1, "int")]);
    }

    #[test]
    fn test_union_dictionary_key_falls_back_to_any() {
        let mut arena = MetaModelArena::new();
        let a = arena.insert(MetaModel::string("a"));
        let b = arena.insert(MetaModel::integer("b"));
        let key = arena.insert(MetaModel::union("key", UnionModel::of([a, b])));
        let value = arena.insert(MetaModel::boolean("value"));
        let flags = arena.insert(MetaModel::dictionary(
            "flags",
            key,
            value,
            SerializationType::Normal,
        ));

        let allowed = constrain(&TestLanguage::eager(), &arena, flags);
        assert_eq!(allowed.root_model().ty(), "Map<Key, bool>");
        assert!(allowed.notes().is_empty());

        let graph = constrain(&TestLanguage::eager().without_union_keys(), &arena, flags);
        let ConstrainedKind::Dictionary(dictionary) = &graph.root_model().kind else {
            panic!("expected a dictionary");
        };
        assert_eq!(graph.get(dictionary.key).kind(), morphgen_ir::ModelKind::Any);
        assert_eq!(graph.root_model().ty(), "Map<any, bool>");
        assert_eq!(
            graph.notes(),
            [GraphNote::DictionaryKeyFallback {
                dictionary: graph.root(),
                key: dictionary.key,
            }]
        );
    }

    #[test]
    fn test_constraint_errors_abort_the_build() {
        let mut arena = MetaModelArena::new();
        let broken = arena.insert(MetaModel::string("Broken"));
        let holder = arena.insert(MetaModel::object(
            "holder",
            ObjectModel::new().property("broken", broken, true),
        ));
        let language = TestLanguage::eager().with_constraints(RejectingConstraints {
            rejected: "Broken",
            inner: DefaultConstraints::new().with_model_name(
                NamePipeline::builder()
                    .naming_formatter(to_pascal_case)
                    .build(),
            ),
        });

        let mut dependencies = DependencyManager::new();
        let err = constrain_meta_model(&language, &arena, holder, &mut dependencies).unwrap_err();
        assert_eq!(err.to_string(), "model name `Broken` is not allowed");
    }
}
