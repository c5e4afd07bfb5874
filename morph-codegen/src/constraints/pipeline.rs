//! Ordered name-constraining stages.

use super::stages;

/// Sibling context handed to the de-duplication stage.
#[derive(Debug, Clone, Copy)]
pub struct DuplicateCheck<'a> {
    /// The name produced by the earlier stages, not yet formatted.
    pub candidate: &'a str,
    /// Names already claimed by siblings.
    pub taken: &'a [String],
    /// The pipeline's naming formatter.
    pub formatter: fn(&str) -> String,
}

impl DuplicateCheck<'_> {
    /// Check if `candidate` formats to a name that is already taken.
    pub fn is_taken(&self, candidate: &str) -> bool {
        let formatted = (self.formatter)(candidate);
        self.taken.contains(&formatted)
    }
}

/// Name-constraining stages, applied in a fixed order:
///
/// 1. `no_special_char`
/// 2. `no_number_start_char`
/// 3. `no_empty_value`
/// 4. `no_reserved_keywords`
/// 5. `no_duplicates` (only with sibling context)
/// 6. `naming_formatter`
#[derive(Debug, Clone, Copy)]
pub struct NamePipeline {
    pub no_special_char: fn(&str) -> String,
    pub no_number_start_char: fn(&str) -> String,
    pub no_empty_value: fn(&str) -> String,
    pub no_reserved_keywords: fn(&str) -> String,
    pub no_duplicates: fn(&DuplicateCheck<'_>) -> String,
    pub naming_formatter: fn(&str) -> String,
}

impl Default for NamePipeline {
    fn default() -> Self {
        Self {
            no_special_char: stages::no_special_char,
            no_number_start_char: stages::no_number_start_char,
            no_empty_value: stages::no_empty_value,
            no_reserved_keywords: stages::no_reserved_keywords,
            no_duplicates: stages::no_duplicates,
            naming_formatter: stages::keep_case,
        }
    }
}

impl NamePipeline {
    /// Start from the default stages.
    pub fn builder() -> NamePipelineBuilder {
        NamePipelineBuilder::default()
    }

    /// Constrain a name that has no siblings.
    pub fn apply(&self, name: &str) -> String {
        (self.naming_formatter)(&self.sanitize(name))
    }

    /// Constrain `name` among its siblings.
    ///
    /// `raw_siblings` lists every raw name of the owner, `name` included;
    /// entries equal to `name` are ignored and the rest are compared as
    /// written. `assigned` holds the constrained names handed out so far.
    pub fn apply_with_siblings(
        &self,
        name: &str,
        raw_siblings: &[String],
        assigned: &[String],
    ) -> String {
        let mut taken: Vec<String> = assigned.to_vec();
        taken.extend(
            raw_siblings
                .iter()
                .filter(|raw| raw.as_str() != name)
                .cloned(),
        );

        let candidate = self.sanitize(name);
        let check = DuplicateCheck {
            candidate: &candidate,
            taken: &taken,
            formatter: self.naming_formatter,
        };
        let unique = (self.no_duplicates)(&check);
        (self.naming_formatter)(&unique)
    }

    /// Stages 1 to 4.
    fn sanitize(&self, name: &str) -> String {
        let name = (self.no_special_char)(name);
        let name = (self.no_number_start_char)(&name);
        let name = (self.no_empty_value)(&name);
        (self.no_reserved_keywords)(&name)
    }
}

/// Builder replacing individual stages of a [`NamePipeline`].
#[derive(Debug, Clone, Default)]
pub struct NamePipelineBuilder {
    pipeline: NamePipeline,
}

impl NamePipelineBuilder {
    pub fn no_special_char(mut self, stage: fn(&str) -> String) -> Self {
        self.pipeline.no_special_char = stage;
        self
    }

    pub fn no_number_start_char(mut self, stage: fn(&str) -> String) -> Self {
        self.pipeline.no_number_start_char = stage;
        self
    }

    pub fn no_empty_value(mut self, stage: fn(&str) -> String) -> Self {
        self.pipeline.no_empty_value = stage;
        self
    }

    pub fn no_reserved_keywords(mut self, stage: fn(&str) -> String) -> Self {
        self.pipeline.no_reserved_keywords = stage;
        self
    }

    pub fn no_duplicates(mut self, stage: fn(&DuplicateCheck<'_>) -> String) -> Self {
        self.pipeline.no_duplicates = stage;
        self
    }

    pub fn naming_formatter(mut self, stage: fn(&str) -> String) -> Self {
        self.pipeline.naming_formatter = stage;
        self
    }

    pub fn build(self) -> NamePipeline {
        self.pipeline
    }
}

#[cfg(test)]
mod tests {
    use morphgen_core::{to_constant_case, to_snake_case};

    use super::*;

    fn reserved_return(name: &str) -> String {
        stages::prefix_reserved(name, &["return"])
    }

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_stage_order() {
        let pipeline = NamePipeline::builder()
            .naming_formatter(to_snake_case)
            .no_reserved_keywords(reserved_return)
            .build();

        assert_eq!(pipeline.apply("1-value"), "number_1value");
        assert_eq!(pipeline.apply("!!"), "empty");
        assert_eq!(pipeline.apply("Return"), "reserved_return");
        assert_eq!(pipeline.apply("userName"), "user_name");
    }

    #[test]
    fn test_replacing_one_stage_keeps_the_rest() {
        fn upper(name: &str) -> String {
            name.to_uppercase()
        }
        let pipeline = NamePipeline::builder().naming_formatter(upper).build();
        assert_eq!(pipeline.apply("9 lives"), "NUMBER_9 LIVES");
    }

    #[test]
    fn test_siblings_that_format_alike_get_distinct_names() {
        let pipeline = NamePipeline::builder()
            .naming_formatter(to_snake_case)
            .build();
        let raw = names(&["userName", "user_name"]);

        let first = pipeline.apply_with_siblings("userName", &raw, &[]);
        let second = pipeline.apply_with_siblings("user_name", &raw, &[first.clone()]);

        assert_eq!(first, "reserved_user_name");
        assert_eq!(second, "user_name");
    }

    #[test]
    fn test_stripped_names_do_not_collide() {
        let pipeline = NamePipeline::builder()
            .naming_formatter(to_snake_case)
            .build();
        let raw = names(&["a-b", "a_b"]);

        let first = pipeline.apply_with_siblings("a-b", &raw, &[]);
        let second = pipeline.apply_with_siblings("a_b", &raw, &[first.clone()]);

        assert_eq!(first, "ab");
        assert_eq!(second, "a_b");
    }

    #[test]
    fn test_repeated_raw_names_stay_unique() {
        let pipeline = NamePipeline::builder()
            .naming_formatter(to_constant_case)
            .no_reserved_keywords(reserved_return)
            .build();
        let raw = names(&["return", "return"]);

        let first = pipeline.apply_with_siblings("return", &raw, &[]);
        let second = pipeline.apply_with_siblings("return", &raw, &[first.clone()]);

        assert_eq!(first, "RESERVED_RETURN");
        assert_eq!(second, "RESERVED_RESERVED_RETURN");
    }
}
