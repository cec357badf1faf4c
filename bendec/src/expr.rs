use indexmap::IndexMap;
use std::fmt::Display;
use std::fmt::Formatter;

/// A parsed Bencode value.
///
/// The tree is build-once and read-only: each container owns its children
/// and the grammar cannot express cycles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// A signed 64-bit integer such as `i42e`.
    Integer(i64),
    /// A length-prefixed text value such as `4:spam`.
    Text(String),
    /// An ordered sequence of values such as `l4:spami7ee`.
    List(Vec<Expr>),
    /// An ordered mapping such as `d3:fooi1ee`. Keys are unique and appear
    /// in the order they were parsed, which the parser keeps strictly
    /// ascending.
    Dictionary(IndexMap<String, Expr>),
}

impl Expr {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Expr::Integer(value) => Some(*value),
            _ => None,
        }
    }
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Expr::Text(value) => Some(value),
            _ => None,
        }
    }
    pub fn as_list(&self) -> Option<&[Expr]> {
        match self {
            Expr::List(elements) => Some(elements),
            _ => None,
        }
    }
    pub fn as_dictionary(&self) -> Option<&IndexMap<String, Expr>> {
        match self {
            Expr::Dictionary(entries) => Some(entries),
            _ => None,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Integer(value) => write!(f, "{value}"),
            Expr::Text(value) => write!(f, "\"{value}\""),
            Expr::List(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            }
            Expr::Dictionary(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{key}\": {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
