//! The per-file collection of declarations and the builder that fills it.

use super::{Arg, Attribute, Class, Function, Struct, Typedef};
use crate::error::SearchError;
use crate::search::{self, Category, Score};
use serde::{Deserialize, Serialize};

/// Every declaration extracted from one source file, in source order.
///
/// Read-only once built: there are no mutating accessors, so ranking always
/// sees a fully extracted file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAggregate {
    #[serde(default)]
    functions: Vec<Function>,
    #[serde(default)]
    typedefs: Vec<Typedef>,
    #[serde(default)]
    structs: Vec<Struct>,
    #[serde(default)]
    classes: Vec<Class>,
}

impl EntityAggregate {
    pub fn builder() -> AggregateBuilder {
        AggregateBuilder::default()
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn typedefs(&self) -> &[Typedef] {
        &self.typedefs
    }

    pub fn structs(&self) -> &[Struct] {
        &self.structs
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    /// Number of declarations in one category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Functions => self.functions.len(),
            Category::Typedefs => self.typedefs.len(),
            Category::Structs => self.structs.len(),
            Category::Classes => self.classes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&category| self.count(category) == 0)
    }

    /// Rank one category against a raw query, keeping at most `limit` results.
    ///
    /// Fails with [`SearchError::EmptyCandidateSet`] when the category has no
    /// declarations at all, so an empty file is never mistaken for a query
    /// that matched nothing.
    pub fn rank(
        &self,
        category: Category,
        raw_query: &str,
        limit: usize,
    ) -> Result<Vec<Score>, SearchError> {
        self.ensure_candidates(category)?;
        let query = search::normalize_query(raw_query);

        tracing::debug!(
            "Ranking {} {} against {:?} (limit {})",
            self.count(category),
            category,
            query,
            limit
        );

        Ok(match category {
            Category::Functions => search::rank(&self.functions, &query, limit),
            Category::Typedefs => search::rank(&self.typedefs, &query, limit),
            Category::Structs => search::rank(&self.structs, &query, limit),
            Category::Classes => search::rank(&self.classes, &query, limit),
        })
    }

    /// The single closest declaration of one category.
    pub fn best_match(&self, category: Category, raw_query: &str) -> Result<Score, SearchError> {
        let query = search::normalize_query(raw_query);
        let best = match category {
            Category::Functions => search::best_match(&self.functions, &query),
            Category::Typedefs => search::best_match(&self.typedefs, &query),
            Category::Structs => search::best_match(&self.structs, &query),
            Category::Classes => search::best_match(&self.classes, &query),
        };
        best.ok_or(SearchError::EmptyCandidateSet { category })
    }

    fn ensure_candidates(&self, category: Category) -> Result<(), SearchError> {
        if self.count(category) == 0 {
            return Err(SearchError::EmptyCandidateSet { category });
        }
        Ok(())
    }
}

/// Handle to a function pushed into an [`AggregateBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionId(usize);

/// Handle to a struct pushed into an [`AggregateBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructId(usize);

/// Handle to a class pushed into an [`AggregateBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassId(usize);

/// Accumulates declarations during extraction.
///
/// Children (parameters, fields, methods) are attached through the handle
/// returned when their parent was pushed, so a later push of an unrelated
/// declaration can never redirect them. Handles are only meaningful for the
/// builder that issued them; using a foreign handle panics on an out of
/// range index.
#[derive(Debug, Default)]
pub struct AggregateBuilder {
    inner: EntityAggregate,
}

impl AggregateBuilder {
    pub fn push_function(&mut self, function: Function) -> FunctionId {
        self.inner.functions.push(function);
        FunctionId(self.inner.functions.len() - 1)
    }

    pub fn add_arg(&mut self, function: FunctionId, arg: Arg) -> &mut Self {
        self.inner.functions[function.0].push_arg(arg);
        self
    }

    pub fn push_typedef(&mut self, typedef: Typedef) -> &mut Self {
        self.inner.typedefs.push(typedef);
        self
    }

    pub fn push_struct(&mut self, record: Struct) -> StructId {
        self.inner.structs.push(record);
        StructId(self.inner.structs.len() - 1)
    }

    pub fn add_struct_attribute(&mut self, record: StructId, attribute: Attribute) -> &mut Self {
        self.inner.structs[record.0].attributes.push(attribute);
        self
    }

    pub fn push_class(&mut self, class: Class) -> ClassId {
        self.inner.classes.push(class);
        ClassId(self.inner.classes.len() - 1)
    }

    pub fn add_class_attribute(&mut self, class: ClassId, attribute: Attribute) -> &mut Self {
        self.inner.classes[class.0].attributes.push(attribute);
        self
    }

    /// Attach a fully built method to a class.
    pub fn add_method(&mut self, class: ClassId, method: Function) -> &mut Self {
        self.inner.classes[class.0].methods.push(method);
        self
    }

    /// Freeze the collected declarations.
    pub fn build(self) -> EntityAggregate {
        self.inner
    }
}
