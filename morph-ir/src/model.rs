//! Meta-Model node definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{MetaModelId, MetaModelOptions, ModelKind, SerializationType};

/// A Meta-Model node.
///
/// `name` is a best-effort label taken from the input and is not required
/// to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaModel {
    /// Name of the model.
    pub name: String,
    /// The input fragment this model was derived from.
    #[serde(default)]
    pub original_input: Value,
    /// Options shared by all variants.
    #[serde(default)]
    pub options: MetaModelOptions,
    /// The variant payload.
    pub kind: MetaModelKind,
}

/// The variant payload of a Meta-Model node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MetaModelKind {
    Object(ObjectModel),
    Array(ArrayModel),
    Tuple(TupleModel),
    Dictionary(DictionaryModel),
    Union(UnionModel),
    Enum(EnumModel),
    Reference(ReferenceModel),
    String,
    Integer,
    Float,
    Boolean,
    Any,
}

impl MetaModelKind {
    /// The variant tag.
    pub fn kind(&self) -> ModelKind {
        match self {
            MetaModelKind::Object(_) => ModelKind::Object,
            MetaModelKind::Array(_) => ModelKind::Array,
            MetaModelKind::Tuple(_) => ModelKind::Tuple,
            MetaModelKind::Dictionary(_) => ModelKind::Dictionary,
            MetaModelKind::Union(_) => ModelKind::Union,
            MetaModelKind::Enum(_) => ModelKind::Enum,
            MetaModelKind::Reference(_) => ModelKind::Reference,
            MetaModelKind::String => ModelKind::String,
            MetaModelKind::Integer => ModelKind::Integer,
            MetaModelKind::Float => ModelKind::Float,
            MetaModelKind::Boolean => ModelKind::Boolean,
            MetaModelKind::Any => ModelKind::Any,
        }
    }
}

/// A property of an object or union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    /// The raw property name.
    pub property_name: String,
    /// Whether the property must be present.
    #[serde(default)]
    pub required: bool,
    /// The property's model.
    pub property: MetaModelId,
}

/// Object with ordered named properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectModel {
    pub properties: IndexMap<String, ObjectProperty>,
}

impl ObjectModel {
    /// Create an object without properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, keyed by its raw name.
    pub fn property(mut self, name: impl Into<String>, model: MetaModelId, required: bool) -> Self {
        let name = name.into();
        self.properties.insert(
            name.clone(),
            ObjectProperty {
                property_name: name,
                required,
                property: model,
            },
        );
        self
    }
}

/// Homogeneous list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayModel {
    pub value_model: MetaModelId,
}

/// A positional slot of a tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleValue {
    pub index: usize,
    pub value: MetaModelId,
}

/// Fixed-length heterogeneous list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TupleModel {
    pub tuple: Vec<TupleValue>,
}

impl TupleModel {
    /// Build a tuple from slot models in order.
    pub fn from_values(values: impl IntoIterator<Item = MetaModelId>) -> Self {
        Self {
            tuple: values
                .into_iter()
                .enumerate()
                .map(|(index, value)| TupleValue { index, value })
                .collect(),
        }
    }
}

/// Key/value map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryModel {
    pub key: MetaModelId,
    pub value: MetaModelId,
    #[serde(default)]
    pub serialization_type: SerializationType,
}

/// One of several models, plus object-like properties of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnionModel {
    pub union: Vec<MetaModelId>,
    #[serde(default)]
    pub properties: IndexMap<String, ObjectProperty>,
}

impl UnionModel {
    /// Build a union from member models in order.
    pub fn of(members: impl IntoIterator<Item = MetaModelId>) -> Self {
        Self {
            union: members.into_iter().collect(),
            properties: IndexMap::new(),
        }
    }
}

/// A single enum entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Raw key used to derive the constrained enum key.
    pub key: String,
    /// The literal value.
    pub value: Value,
}

/// Ordered list of fixed values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumModel {
    pub values: Vec<EnumValue>,
}

impl EnumModel {
    /// Build an enum from raw values, keyed by their plain string form.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|value| EnumValue {
                    key: match &value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    },
                    value,
                })
                .collect(),
        }
    }
}

/// Indirection to another model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceModel {
    pub ref_model: MetaModelId,
}

impl MetaModel {
    /// Create a model with empty options and no original input.
    pub fn new(name: impl Into<String>, kind: MetaModelKind) -> Self {
        Self {
            name: name.into(),
            original_input: Value::Null,
            options: MetaModelOptions::default(),
            kind,
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: MetaModelOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach the original input fragment.
    pub fn with_original_input(mut self, original_input: Value) -> Self {
        self.original_input = original_input;
        self
    }

    pub fn object(name: impl Into<String>, object: ObjectModel) -> Self {
        Self::new(name, MetaModelKind::Object(object))
    }

    pub fn array(name: impl Into<String>, value_model: MetaModelId) -> Self {
        Self::new(name, MetaModelKind::Array(ArrayModel { value_model }))
    }

    pub fn tuple(name: impl Into<String>, tuple: TupleModel) -> Self {
        Self::new(name, MetaModelKind::Tuple(tuple))
    }

    pub fn dictionary(
        name: impl Into<String>,
        key: MetaModelId,
        value: MetaModelId,
        serialization_type: SerializationType,
    ) -> Self {
        Self::new(
            name,
            MetaModelKind::Dictionary(DictionaryModel {
                key,
                value,
                serialization_type,
            }),
        )
    }

    pub fn union(name: impl Into<String>, union: UnionModel) -> Self {
        Self::new(name, MetaModelKind::Union(union))
    }

    pub fn enumeration(name: impl Into<String>, values: EnumModel) -> Self {
        Self::new(name, MetaModelKind::Enum(values))
    }

    pub fn reference(name: impl Into<String>, ref_model: MetaModelId) -> Self {
        Self::new(name, MetaModelKind::Reference(ReferenceModel { ref_model }))
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, MetaModelKind::String)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, MetaModelKind::Integer)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, MetaModelKind::Float)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, MetaModelKind::Boolean)
    }

    pub fn any(name: impl Into<String>) -> Self {
        Self::new(name, MetaModelKind::Any)
    }

    /// The variant tag of this node.
    pub fn kind(&self) -> ModelKind {
        self.kind.kind()
    }

    /// Returns true if this is a dictionary flattened into its parent.
    pub fn is_unwrapped_dictionary(&self) -> bool {
        matches!(
            &self.kind,
            MetaModelKind::Dictionary(DictionaryModel {
                serialization_type: SerializationType::Unwrap,
                ..
            })
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_enum_from_values_keys() {
        let model = EnumModel::from_values([json!("red"), json!(2), json!(true)]);
        let keys: Vec<_> = model.values.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["red", "2", "true"]);
        assert_eq!(model.values[1].value, json!(2));
    }

    #[test]
    fn test_tuple_from_values_indexes() {
        let tuple = TupleModel::from_values([MetaModelId::new(3), MetaModelId::new(1)]);
        assert_eq!(tuple.tuple[0].index, 0);
        assert_eq!(tuple.tuple[1].index, 1);
        assert_eq!(tuple.tuple[1].value, MetaModelId::new(1));
    }

    #[test]
    fn test_object_property_order() {
        let object = ObjectModel::new()
            .property("zeta", MetaModelId::new(0), true)
            .property("alpha", MetaModelId::new(1), false);
        let names: Vec<_> = object.properties.keys().cloned().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert!(!object.properties["alpha"].required);
    }

    #[test]
    fn test_is_unwrapped_dictionary() {
        let unwrap = MetaModel::dictionary(
            "extra",
            MetaModelId::new(0),
            MetaModelId::new(1),
            SerializationType::Unwrap,
        );
        let normal = MetaModel::dictionary(
            "extra",
            MetaModelId::new(0),
            MetaModelId::new(1),
            SerializationType::Normal,
        );
        assert!(unwrap.is_unwrapped_dictionary());
        assert!(!normal.is_unwrapped_dictionary());
        assert!(!MetaModel::string("s").is_unwrapped_dictionary());
    }

    #[test]
    fn test_kind_round_trip_through_json() {
        let model = MetaModel::reference("Pet", MetaModelId::new(4));
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["kind"]["type"], "reference");
        let back: MetaModel = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), ModelKind::Reference);
    }
}
