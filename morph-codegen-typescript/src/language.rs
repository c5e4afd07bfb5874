//! The TypeScript target.

use morphgen_codegen::{
    constrained::{ConstrainedGraph, ConstrainedId, ConstrainedKind},
    constraints::Constraints,
    language::{Language, TypeMapping},
    split::SplitOptions,
};
use morphgen_config::{GeneratorConfig, TypeScriptOptions};
use morphgen_ir::ModelKind;

use crate::{constraints::TypeScriptConstraints, type_mapper::TypeScriptTypeMapping};

/// Kinds typed without looking at their children.
pub const TYPESCRIPT_SAFE_KINDS: &[ModelKind] = &[
    ModelKind::Any,
    ModelKind::Boolean,
    ModelKind::Float,
    ModelKind::Integer,
    ModelKind::String,
    ModelKind::Reference,
    ModelKind::Object,
    ModelKind::Enum,
];

/// Kinds rendered as their own class, interface or enum.
pub const TYPESCRIPT_SPLIT_KINDS: &[ModelKind] = &[ModelKind::Enum, ModelKind::Object];

/// The TypeScript target language.
///
/// Unions, tuples and arrays are typed inline from their children, so types
/// are assigned by the resolution pass once the whole graph exists.
pub struct TypeScriptLanguage {
    options: TypeScriptOptions,
    constraints: Box<dyn Constraints<TypeScriptOptions>>,
    type_mapping: Box<dyn TypeMapping<TypeScriptOptions>>,
}

impl TypeScriptLanguage {
    pub fn new(options: TypeScriptOptions) -> Self {
        Self {
            options,
            constraints: Box::new(TypeScriptConstraints::default()),
            type_mapping: Box::new(TypeScriptTypeMapping),
        }
    }

    /// Create the TypeScript target from the `[typescript]` section of a config.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.typescript.clone())
    }

    pub fn with_constraints(
        mut self,
        constraints: impl Constraints<TypeScriptOptions> + 'static,
    ) -> Self {
        self.constraints = Box::new(constraints);
        self
    }

    pub fn with_type_mapping(
        mut self,
        mapping: impl TypeMapping<TypeScriptOptions> + 'static,
    ) -> Self {
        self.type_mapping = Box::new(mapping);
        self
    }
}

impl Default for TypeScriptLanguage {
    fn default() -> Self {
        Self::new(TypeScriptOptions::default())
    }
}

impl std::fmt::Debug for TypeScriptLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeScriptLanguage")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Language for TypeScriptLanguage {
    type Options = TypeScriptOptions;

    fn name(&self) -> &'static str {
        "typescript"
    }

    fn options(&self) -> &TypeScriptOptions {
        &self.options
    }

    fn constraints(&self) -> &dyn Constraints<TypeScriptOptions> {
        self.constraints.as_ref()
    }

    fn type_mapping(&self) -> &dyn TypeMapping<TypeScriptOptions> {
        self.type_mapping.as_ref()
    }

    fn resolves_types_eagerly(&self) -> bool {
        false
    }

    fn safe_kinds(&self) -> &'static [ModelKind] {
        TYPESCRIPT_SAFE_KINDS
    }

    fn split_options(&self) -> SplitOptions {
        SplitOptions::for_kinds(TYPESCRIPT_SPLIT_KINDS)
    }

    fn model_dependency(&self, graph: &ConstrainedGraph, reference: ConstrainedId) -> String {
        let name = match &graph.get(reference).kind {
            ConstrainedKind::Reference(r) => &graph.get(r.ref_model).name,
            _ => &graph.get(reference).name,
        };
        format!("import {{ {name} }} from './{name}';")
    }

    fn allows_union_dictionary_keys(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use morphgen_codegen::{
        apply_types, constrain_meta_model, constraints::DefaultConstraints,
        generation::DependencyManager,
    };
    use morphgen_config::{EnumType, MapType};
    use morphgen_ir::{MetaModel, MetaModelArena, ObjectModel};

    use super::*;
    use crate::naming::property_key_pipeline;

    #[test]
    fn test_typescript_language_from_config() {
        let config: GeneratorConfig = "[typescript]\nmap_type = \"record\"\nenum_type = \"union\"\n"
            .parse()
            .expect("valid config");
        let language = TypeScriptLanguage::from_config(&config);

        assert_eq!(language.name(), "typescript");
        assert_eq!(language.options().map_type, MapType::Record);
        assert_eq!(language.options().enum_type, EnumType::Union);
        assert!(!language.resolves_types_eagerly());
        assert!(!language.allows_union_dictionary_keys());
    }

    #[test]
    fn test_typescript_model_dependency() {
        let mut arena = MetaModelArena::new();
        let pet = arena.insert(MetaModel::object("pet", ObjectModel::new()));
        let to_pet = arena.insert(MetaModel::reference("pet", pet));
        let owner = arena.insert(MetaModel::object(
            "owner",
            ObjectModel::new().property("pet", to_pet, true),
        ));
        let language = TypeScriptLanguage::default();

        let mut dependencies = DependencyManager::new();
        let graph = constrain_meta_model(&language, &arena, owner, &mut dependencies).unwrap();
        let references = graph.nearest_dependencies(graph.root());

        assert_eq!(references.len(), 1);
        assert_eq!(
            language.model_dependency(&graph, references[0]),
            "import { Pet } from './Pet';"
        );
    }

    #[test]
    fn test_custom_constraints() {
        let mut arena = MetaModelArena::new();
        let name = arena.insert(MetaModel::string("name"));
        let user = arena.insert(MetaModel::object(
            "user",
            ObjectModel::new().property("user name", name, true),
        ));
        let constraints = DefaultConstraints::<TypeScriptOptions>::new()
            .with_property_key(property_key_pipeline());
        let language = TypeScriptLanguage::default().with_constraints(constraints);

        let mut dependencies = DependencyManager::new();
        let mut graph = constrain_meta_model(&language, &arena, user, &mut dependencies).unwrap();
        apply_types(&language, &mut graph, &mut dependencies).unwrap();

        let root = graph.root_model();
        assert_eq!(root.name, "user");
        assert_eq!(root.ty(), "user");
        let ConstrainedKind::Object(object) = &root.kind else {
            panic!("expected an object");
        };
        assert!(object.properties.contains_key("userName"));
    }
}
