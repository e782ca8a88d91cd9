// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The runtime object system.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use monkey_ast::{BlockStatement, Identifier};

use crate::env::Environment;

/// A runtime value produced by the evaluator.
///
/// `Integer`, `Boolean` and `String` compare by value; `Array`, `Hash`,
/// `Function` and `Builtin` are reference types and compare by identity.
#[derive(Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    Null,
    /// Internal envelope used to unwind a function body on `return`. Never
    /// observed by user code; unwrapped at the call boundary.
    ReturnValue(Box<Object>),
    /// Carries a short-circuiting evaluation error by value.
    Error(String),
    Array(Rc<Vec<Object>>),
    Hash(Rc<HashData>),
    Function(Rc<FunctionData>),
    Builtin(Rc<BuiltinData>),
}

/// An ordered hash map: insertion order is preserved for `inspect()`.
pub struct HashData {
    pub pairs: IndexMap<HashKey, (Object, Object)>,
}

pub struct FunctionData {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Rc<RefCell<Environment>>,
    /// The name this function was bound to via `let`, if any.
    pub name: Option<String>,
}

pub struct BuiltinData {
    pub name: &'static str,
    pub func: fn(&[Object]) -> Object,
}

/// The canonical, hashable encoding of a key usable in a `Hash` literal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
}

impl Object {
    pub const TRUE: Object = Object::Boolean(true);
    pub const FALSE: Object = Object::Boolean(false);

    /// Runtime type tag, used in error messages (`<Type>` in the spec's
    /// error templates) and matched verbatim by the reference test suite.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "MInteger",
            Object::Boolean(_) => "MBoolean",
            Object::String(_) => "MString",
            Object::Null => "MNull",
            Object::ReturnValue(_) => "MReturnValue",
            Object::Error(_) => "MError",
            Object::Array(_) => "MArray",
            Object::Hash(_) => "MHash",
            Object::Function(_) => "MFunction",
            Object::Builtin(_) => "MBuiltinFunction",
        }
    }

    /// `NULL` and `FALSE` are falsy; every other object is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// The canonical hash key for this object, if it is hashable.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(v) => Some(HashKey::Integer(*v)),
            Object::Boolean(v) => Some(HashKey::Boolean(*v)),
            Object::String(s) => Some(HashKey::String(s.clone())),
            _ => None,
        }
    }

    /// User-facing rendering, per the host `inspect()` contract.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(v) => write!(f, "{}", v),
            Object::Boolean(v) => write!(f, "{}", v),
            Object::String(s) => write!(f, "{}", s),
            Object::Null => write!(f, "null"),
            Object::ReturnValue(inner) => write!(f, "{}", inner),
            Object::Error(msg) => write!(f, "ERROR: {}", msg),
            Object::Array(elements) => {
                let items: Vec<String> = elements.iter().map(|e| e.inspect()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Object::Hash(data) => {
                let items: Vec<String> = data
                    .pairs
                    .values()
                    .map(|(k, v)| format!("{}: {}", k.inspect(), v.inspect()))
                    .collect();
                write!(f, "{{{}}}", items.join(", "))
            }
            Object::Function(func) => {
                let params: Vec<String> = func.parameters.iter().map(|p| p.name.clone()).collect();
                match &func.name {
                    Some(name) => write!(f, "fn {}({}) {{\n{}\n}}", name, params.join(", "), func.body),
                    None => write!(f, "fn({}) {{\n{}\n}}", params.join(", "), func.body),
                }
            }
            Object::Builtin(b) => write!(f, "builtin function {}(...)", b.name),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.type_name(), self)
    }
}

/// Identity comparison for reference types, value comparison for scalars —
/// matches the spec's `==`/`!=` semantics for non-integer/boolean operands.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Array(a), Object::Array(b)) => Rc::ptr_eq(a, b),
            (Object::Hash(a), Object::Hash(b)) => Rc::ptr_eq(a, b),
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(Object::Integer(0).is_truthy());
        assert!(Object::String(Rc::from("")).is_truthy());
        assert!(!Object::Null.is_truthy());
        assert!(!Object::Boolean(false).is_truthy());
        assert!(Object::Boolean(true).is_truthy());
    }

    #[test]
    fn type_names_match_the_canonical_tags() {
        assert_eq!(Object::Integer(1).type_name(), "MInteger");
        assert_eq!(Object::Boolean(true).type_name(), "MBoolean");
        assert_eq!(Object::String(Rc::from("s")).type_name(), "MString");
        assert_eq!(Object::Null.type_name(), "MNull");
        assert_eq!(Object::Error("oops".to_string()).type_name(), "MError");
    }

    #[test]
    fn arrays_compare_by_identity_not_contents() {
        let a = Object::Array(Rc::new(vec![Object::Integer(1)]));
        let b = Object::Array(Rc::new(vec![Object::Integer(1)]));
        assert!(a != b);
        let c = a.clone();
        assert!(a == c);
    }

    #[test]
    fn inspect_renders_arrays_and_errors() {
        let arr = Object::Array(Rc::new(vec![Object::Integer(1), Object::Integer(2)]));
        assert_eq!(arr.inspect(), "[1, 2]");
        assert_eq!(Object::Error("boom".to_string()).inspect(), "ERROR: boom");
    }

    #[test]
    fn only_scalars_are_hashable() {
        assert!(Object::Integer(1).hash_key().is_some());
        assert!(Object::Boolean(true).hash_key().is_some());
        assert!(Object::String(Rc::from("k")).hash_key().is_some());
        assert!(Object::Null.hash_key().is_none());
        assert!(Object::Array(Rc::new(vec![])).hash_key().is_none());
    }

    fn empty_body() -> BlockStatement {
        BlockStatement { statements: Vec::new(), span: monkey_ast::Span::new(0, 0) }
    }

    #[test]
    fn inspect_names_a_function_bound_via_let() {
        let anonymous = Object::Function(Rc::new(FunctionData {
            parameters: Vec::new(),
            body: empty_body(),
            env: Environment::new(),
            name: None,
        }));
        assert_eq!(anonymous.inspect(), "fn() {\n\n}");

        let named = Object::Function(Rc::new(FunctionData {
            parameters: Vec::new(),
            body: empty_body(),
            env: Environment::new(),
            name: Some("myFunc".to_string()),
        }));
        assert_eq!(named.inspect(), "fn myFunc() {\n\n}");
    }
}
