//! Type descriptor mapping
//!
//! The API reference documents field types as English phrases such as
//! `Integer`, `Array of PhotoSize` or `InputFile or String`, often wrapped
//! in links. [`TypeMapper`] turns such a phrase into the type token used by
//! the generated bindings:
//!
//! | Documented              | Token                            |
//! |-------------------------|----------------------------------|
//! | `String`                | `string`                         |
//! | `Integer`, `Int`        | `int`                            |
//! | `Float`, `Float number` | `float64`                        |
//! | `Boolean`, `True`       | `bool`                           |
//! | `Integer or String`     | `ChatID`                         |
//! | `InputFile or String`   | `InputFile` (`*InputFile` if optional) |
//! | `Array of X`            | `[]X`                            |
//! | anything else           | the name itself (`*Name` if optional) |
//!
//! ```rust
//! use apidoc_normalizer::types::TypeMapper;
//!
//! let mapper = TypeMapper::shared().unwrap();
//! assert_eq!(mapper.map_type("Array of Array of Integer", false), "[][]int");
//! assert_eq!(mapper.map_type(r##"<a href="#user">User</a>"##, true), "*User");
//! ```

use log::debug;
use std::fmt;

use crate::annotation::AnnotationConverter;
use crate::error::NormalizeError;
use crate::options::NormalizerOptions;
use crate::patterns::PatternSet;

/// Token for the "Integer or String" chat identifier union
pub const CHAT_ID: &str = "ChatID";

/// Token for the "InputFile or String" upload union
pub const INPUT_FILE: &str = "InputFile";

/// A documented type phrase together with its optionality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Raw type column text, possibly containing markup
    pub raw: String,
    /// Whether the field or parameter is optional
    pub optional: bool,
}

impl TypeDescriptor {
    /// Describe a type column cell
    ///
    /// # Arguments
    ///
    /// * `raw` - Type column HTML, e.g. `Array of <a href="#user">User</a>`
    /// * `optional` - Whether the description marks the field optional
    ///
    /// # Examples
    ///
    /// ```rust
    /// use apidoc_normalizer::types::{TypeDescriptor, TypeMapper};
    ///
    /// let descriptor = TypeDescriptor::new("InputFile or String", true);
    /// assert_eq!(descriptor.raw, "InputFile or String");
    /// assert!(descriptor.optional);
    ///
    /// let mapper = TypeMapper::shared().unwrap();
    /// assert_eq!(mapper.resolve(&descriptor).to_string(), "*InputFile");
    /// ```
    pub fn new(raw: impl Into<String>, optional: bool) -> Self {
        Self {
            raw: raw.into(),
            optional,
        }
    }
}

/// Resolved target type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeToken {
    /// Built-in scalar type
    Primitive(&'static str),
    /// Hand-written union type
    Union(&'static str),
    /// Slice of the element type
    Array(Box<TypeToken>),
    /// Pointer to the inner type, `nil` when absent
    Optional(Box<TypeToken>),
    /// Generated type referenced by name
    Named(String),
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeToken::Primitive(name) | TypeToken::Union(name) => f.write_str(name),
            TypeToken::Array(element) => write!(f, "[]{}", element),
            TypeToken::Optional(inner) => write!(f, "*{}", inner),
            TypeToken::Named(name) => f.write_str(name),
        }
    }
}

/// Maps documented type phrases to type tokens
#[derive(Debug, Clone)]
pub struct TypeMapper {
    annotations: AnnotationConverter,
}

impl TypeMapper {
    /// Create a mapper that strips markup with `annotations`
    pub fn new(annotations: AnnotationConverter) -> Self {
        Self { annotations }
    }

    /// Mapper over the process-wide pattern set
    pub fn shared() -> Result<Self, NormalizeError> {
        let annotations =
            AnnotationConverter::new(PatternSet::shared()?, &NormalizerOptions::default());
        Ok(Self::new(annotations))
    }

    /// Map a documented type phrase to its token string
    ///
    /// Shorthand for [`TypeMapper::resolve`] followed by `to_string`.
    /// Optionality only shows as a `*` prefix on generated types and the
    /// upload union; primitives, arrays and `ChatID` stay bare.
    pub fn map_type(&self, raw: &str, optional: bool) -> String {
        self.resolve(&TypeDescriptor::new(raw, optional)).to_string()
    }

    /// Resolve a descriptor into a structured token
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> TypeToken {
        let text = self.annotations.to_plain_text(&descriptor.raw);
        resolve_plain(&text, descriptor.optional)
    }
}

fn resolve_plain(text: &str, optional: bool) -> TypeToken {
    if let Some(token) = documented(text, optional) {
        return token;
    }

    // Array elements are never optional themselves
    if let Some(element) = text
        .strip_prefix("Array of ")
        .or_else(|| text.strip_prefix("array of "))
    {
        return TypeToken::Array(Box::new(resolve_plain(element, false)));
    }

    debug!("passing through undocumented type {:?}", text);
    let named = TypeToken::Named(text.to_string());
    if optional {
        TypeToken::Optional(Box::new(named))
    } else {
        named
    }
}

fn documented(text: &str, optional: bool) -> Option<TypeToken> {
    let token = match text {
        "String" => TypeToken::Primitive("string"),
        "Integer" | "Int" => TypeToken::Primitive("int"),
        "Float" | "Float number" => TypeToken::Primitive("float64"),
        "Boolean" | "True" => TypeToken::Primitive("bool"),
        "Integer or String" => TypeToken::Union(CHAT_ID),
        "InputFile or String" if optional => {
            TypeToken::Optional(Box::new(TypeToken::Union(INPUT_FILE)))
        }
        "InputFile or String" => TypeToken::Union(INPUT_FILE),
        _ => return None,
    };
    Some(token)
}
