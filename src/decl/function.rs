use super::{Declaration, SourceLoc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A function parameter, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arg {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Arg {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A free function or a class method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub source: SourceLoc,
    pub return_type: String,
    pub name: String,
    #[serde(default)]
    pub args: Vec<Arg>,
}

impl Function {
    pub fn new(
        source: SourceLoc,
        return_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            source,
            return_type: return_type.into(),
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append a parameter, builder style.
    pub fn with_arg(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.args.push(Arg::new(name, ty));
        self
    }

    pub(crate) fn push_arg(&mut self, arg: Arg) {
        self.args.push(arg);
    }
}

impl Declaration for Function {
    fn source(&self) -> &SourceLoc {
        &self.source
    }

    /// `"<ret> ( <t1> , <t2> ) "`. Parameter names are left out so only the
    /// shape of the call is compared. The trailing space lines up with the
    /// one every normalized query token carries.
    fn normal_form(&self) -> Cow<'_, str> {
        let arg_types: Vec<&str> = self.args.iter().map(|arg| arg.ty.as_str()).collect();
        Cow::Owned(format!(
            "{} ( {} ) ",
            self.return_type,
            arg_types.join(" , ")
        ))
    }

    fn display_form(&self) -> String {
        format!("{} :: {}", self.name, self.normal_form())
    }
}
