//! Type declarations: typedefs, structs and classes.

use super::{Declaration, Function, SourceLoc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A struct or class field, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn display(&self) -> String {
        format!("{} :: {}", self.name, self.ty)
    }
}

/// `typedef <aliased> <alias>;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typedef {
    pub source: SourceLoc,
    pub alias: String,
    pub aliased: String,
}

impl Typedef {
    pub fn new(source: SourceLoc, alias: impl Into<String>, aliased: impl Into<String>) -> Self {
        Self {
            source,
            alias: alias.into(),
            aliased: aliased.into(),
        }
    }
}

impl Declaration for Typedef {
    fn source(&self) -> &SourceLoc {
        &self.source
    }

    fn normal_form(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.alias.as_str())
    }

    fn display_form(&self) -> String {
        format!("{} :: {}", self.alias, self.aliased)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    pub source: SourceLoc,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Struct {
    pub fn new(source: SourceLoc, name: impl Into<String>) -> Self {
        Self {
            source,
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, ty));
        self
    }
}

impl Declaration for Struct {
    fn source(&self) -> &SourceLoc {
        &self.source
    }

    /// Structs match by name only; fields show up in the display form.
    fn normal_form(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }

    fn display_form(&self) -> String {
        braced(&self.name, self.attributes.iter().map(Attribute::display))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub source: SourceLoc,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Each method carries its own location, independent of the class's.
    #[serde(default)]
    pub methods: Vec<Function>,
}

impl Class {
    pub fn new(source: SourceLoc, name: impl Into<String>) -> Self {
        Self {
            source,
            name: name.into(),
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, ty));
        self
    }

    pub fn with_method(mut self, method: Function) -> Self {
        self.methods.push(method);
        self
    }
}

impl Declaration for Class {
    fn source(&self) -> &SourceLoc {
        &self.source
    }

    fn normal_form(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_str())
    }

    fn display_form(&self) -> String {
        let attributes = self.attributes.iter().map(Attribute::display);
        let methods = self.methods.iter().map(Declaration::display_form);
        braced(&self.name, attributes.chain(methods))
    }
}

/// `name { a, b }`, or `name {  }` with no entries.
fn braced(name: &str, entries: impl Iterator<Item = String>) -> String {
    let entries: Vec<String> = entries.collect();
    format!("{} {{ {} }}", name, entries.join(", "))
}
