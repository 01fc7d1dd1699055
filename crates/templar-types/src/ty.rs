//! Core type definitions for template bounds

use std::fmt;

/// Scalar and special keyword types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// The `int` type
    Int,
    /// The `float` type
    Float,
    /// The `string` type
    String,
    /// The `bool` type
    Bool,
    /// The `null` type
    Null,
    /// The `void` type
    Void,
    /// The `never` type (bottom)
    Never,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Int => write!(f, "int"),
            ScalarType::Float => write!(f, "float"),
            ScalarType::String => write!(f, "string"),
            ScalarType::Bool => write!(f, "bool"),
            ScalarType::Null => write!(f, "null"),
            ScalarType::Void => write!(f, "void"),
            ScalarType::Never => write!(f, "never"),
        }
    }
}

/// Reference to a named class, interface, trait or enum
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectType {
    /// Class name as written at the reference
    pub class_name: String,
    /// Type arguments for generic classes
    pub type_args: Vec<Type>,
}

/// Array type: `array<V>` or `array<K, V>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
    /// Key type, if spelled out
    pub key: Option<Box<Type>>,
    /// Value type
    pub value: Box<Type>,
}

/// `class-string` or `class-string<Foo>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassStringType {
    /// Class the string must name, if constrained
    pub class_name: Option<String>,
}

/// Union type: T1 | T2 | ... | Tn
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnionType {
    /// Members of the union
    pub members: Vec<Type>,
}

/// Intersection type: T1 & T2 & ... & Tn
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntersectionType {
    /// Members of the intersection
    pub members: Vec<Type>,
}

/// A type expression, as it appears in the bound of a template parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Top type, accepts anything
    Mixed,

    /// Any object, no specific class
    ObjectWithoutClass,

    /// A named class: `Foo\Bar` or `Collection<int>`
    Object(ObjectType),

    /// Scalar or keyword type
    Scalar(ScalarType),

    /// Array type
    Array(ArrayType),

    /// Class-name string
    ClassString(ClassStringType),

    /// Union type
    Union(UnionType),

    /// Intersection type
    Intersection(IntersectionType),
}

impl Type {
    /// Object type referring to `class_name`, with no type arguments
    pub fn object(class_name: impl Into<String>) -> Self {
        Type::Object(ObjectType {
            class_name: class_name.into(),
            type_args: Vec::new(),
        })
    }

    /// Generic object type: `class_name<type_args...>`
    pub fn generic_object(class_name: impl Into<String>, type_args: Vec<Type>) -> Self {
        Type::Object(ObjectType {
            class_name: class_name.into(),
            type_args,
        })
    }

    /// Union of the given members. An empty union is `never` and a
    /// single member stands for itself.
    pub fn union(mut members: Vec<Type>) -> Self {
        match members.len() {
            0 => Type::Scalar(ScalarType::Never),
            1 => members.remove(0),
            _ => Type::Union(UnionType { members }),
        }
    }

    /// Intersection of the given members. An empty intersection is `mixed`
    /// and a single member stands for itself.
    pub fn intersection(mut members: Vec<Type>) -> Self {
        match members.len() {
            0 => Type::Mixed,
            1 => members.remove(0),
            _ => Type::Intersection(IntersectionType { members }),
        }
    }

    /// `array<value>`
    pub fn array(value: Type) -> Self {
        Type::Array(ArrayType {
            key: None,
            value: Box::new(value),
        })
    }

    /// `array<key, value>`
    pub fn keyed_array(key: Type, value: Type) -> Self {
        Type::Array(ArrayType {
            key: Some(Box::new(key)),
            value: Box::new(value),
        })
    }

    /// `class-string<class_name>`
    pub fn class_string(class_name: impl Into<String>) -> Self {
        Type::ClassString(ClassStringType {
            class_name: Some(class_name.into()),
        })
    }

    /// The `int` type
    pub fn int() -> Self {
        Type::Scalar(ScalarType::Int)
    }

    /// The `float` type
    pub fn float() -> Self {
        Type::Scalar(ScalarType::Float)
    }

    /// The `string` type
    pub fn string() -> Self {
        Type::Scalar(ScalarType::String)
    }

    /// The `bool` type
    pub fn bool() -> Self {
        Type::Scalar(ScalarType::Bool)
    }

    /// The `null` type
    pub fn null() -> Self {
        Type::Scalar(ScalarType::Null)
    }

    /// Names of every class structurally contained in this type.
    ///
    /// Traversal is depth-first and left to right; a name referenced twice
    /// is reported twice.
    pub fn referenced_classes(&self) -> Vec<String> {
        let mut classes = Vec::new();
        self.collect_referenced_classes(&mut classes);
        classes
    }

    fn collect_referenced_classes(&self, out: &mut Vec<String>) {
        match self {
            Type::Mixed | Type::ObjectWithoutClass | Type::Scalar(_) => {}
            Type::Object(o) => {
                out.push(o.class_name.clone());
                for arg in &o.type_args {
                    arg.collect_referenced_classes(out);
                }
            }
            Type::Array(a) => {
                if let Some(key) = &a.key {
                    key.collect_referenced_classes(out);
                }
                a.value.collect_referenced_classes(out);
            }
            Type::ClassString(cs) => {
                if let Some(name) = &cs.class_name {
                    out.push(name.clone());
                }
            }
            Type::Union(u) => {
                for member in &u.members {
                    member.collect_referenced_classes(out);
                }
            }
            Type::Intersection(i) => {
                for member in &i.members {
                    member.collect_referenced_classes(out);
                }
            }
        }
    }

    /// Short type-only rendering, e.g. `int|string`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Check if this type is a union or an intersection
    pub fn is_composite(&self) -> bool {
        matches!(self, Type::Union(_) | Type::Intersection(_))
    }

    /// Get the object type if this is a named object
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Type::Object(o) => Some(o),
            _ => None,
        }
    }
}

fn write_members(f: &mut fmt::Formatter<'_>, members: &[Type], separator: &str) -> fmt::Result {
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        if member.is_composite() {
            write!(f, "({})", member)?;
        } else {
            write!(f, "{}", member)?;
        }
    }
    Ok(())
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Mixed => write!(f, "mixed"),
            Type::ObjectWithoutClass => write!(f, "object"),
            Type::Object(o) => {
                write!(f, "{}", o.class_name)?;
                if !o.type_args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in o.type_args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            Type::Scalar(s) => write!(f, "{}", s),
            Type::Array(a) => match &a.key {
                Some(key) => write!(f, "array<{}, {}>", key, a.value),
                None => write!(f, "array<{}>", a.value),
            },
            Type::ClassString(cs) => match &cs.class_name {
                Some(name) => write!(f, "class-string<{}>", name),
                None => write!(f, "class-string"),
            },
            Type::Union(u) => write_members(f, &u.members, "|"),
            Type::Intersection(i) => write_members(f, &i.members, "&"),
        }
    }
}
