//! The literal value tree

use std::collections::HashMap;

/// A value expressible in the literal-expression grammar.
///
/// `Dict` keeps insertion order and allows any literal as key, matching the
/// mappings the text form can express. Use [`Literal::dict`] to build one
/// with last-key-wins semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Literal>),
    Tuple(Vec<Literal>),
    Dict(Vec<(Literal, Literal)>),
}

impl Literal {
    /// Builds a dict from key/value pairs. A repeated key replaces the
    /// earlier value but keeps the earlier position.
    pub fn dict<K, V, I>(pairs: I) -> Self
    where
        K: Into<Literal>,
        V: Into<Literal>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut builder = DictBuilder::new();
        for (key, value) in pairs {
            builder.insert(key.into(), value.into());
        }
        builder.finish()
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::None => "None",
            Literal::Bool(_) => "bool",
            Literal::Int(_) => "int",
            Literal::Float(_) => "float",
            Literal::Str(_) => "str",
            Literal::List(_) => "list",
            Literal::Tuple(_) => "tuple",
            Literal::Dict(_) => "dict",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Literal::None)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Literal::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value as a float; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Literal::Float(f) => Some(*f),
            Literal::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Items of a list or tuple.
    pub fn as_sequence(&self) -> Option<&[Literal]> {
        match self {
            Literal::List(items) | Literal::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&[(Literal, Literal)]> {
        match self {
            Literal::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a string key in a dict.
    pub fn get(&self, key: &str) -> Option<&Literal> {
        self.as_dict()?
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }
}

/// Hashable projection of a dict key with the literal language's key
/// equality: `True == 1 == 1.0`, `False == 0 == -0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeyRepr {
    None,
    Int(i64),
    Float(u64),
    Str(String),
    Tuple(Vec<KeyRepr>),
}

impl KeyRepr {
    /// `None` for unhashable keys (lists, dicts) and NaN, which equals
    /// nothing.
    fn of(key: &Literal) -> Option<KeyRepr> {
        match key {
            Literal::None => Some(KeyRepr::None),
            Literal::Bool(b) => Some(KeyRepr::Int(i64::from(*b))),
            Literal::Int(i) => Some(KeyRepr::Int(*i)),
            Literal::Float(f) => float_key(*f),
            Literal::Str(s) => Some(KeyRepr::Str(s.clone())),
            Literal::Tuple(items) => items
                .iter()
                .map(KeyRepr::of)
                .collect::<Option<Vec<_>>>()
                .map(KeyRepr::Tuple),
            Literal::List(_) | Literal::Dict(_) => None,
        }
    }
}

// i64::MIN and 2^63 are exact in f64.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

fn float_key(f: f64) -> Option<KeyRepr> {
    if f.is_nan() {
        None
    } else if f.fract() == 0.0 && (I64_LOWER..I64_UPPER).contains(&f) {
        Some(KeyRepr::Int(f as i64))
    } else {
        Some(KeyRepr::Float(f.to_bits()))
    }
}

/// Whether `key` may be used as a dict key (no lists or dicts inside).
pub(crate) fn is_hashable(key: &Literal) -> bool {
    match key {
        Literal::List(_) | Literal::Dict(_) => false,
        Literal::Tuple(items) => items.iter().all(is_hashable),
        _ => true,
    }
}

/// Builds an ordered dict body in linear time. A key equal to an earlier
/// one replaces that entry's value and keeps the earlier key and position.
pub(crate) struct DictBuilder {
    entries: Vec<(Literal, Literal)>,
    index: HashMap<KeyRepr, usize>,
}

impl DictBuilder {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: Literal, value: Literal) {
        match KeyRepr::of(&key) {
            Some(repr) => match self.index.get(&repr) {
                Some(&slot) => self.entries[slot].1 = value,
                None => {
                    self.index.insert(repr, self.entries.len());
                    self.entries.push((key, value));
                }
            },
            // Unhashable and NaN keys only reach here through `Literal::dict`.
            None => match self
                .entries
                .iter_mut()
                .find(|(k, _)| KeyRepr::of(k).is_none() && *k == key)
            {
                Some(slot) => slot.1 = value,
                None => self.entries.push((key, value)),
            },
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn finish(self) -> Literal {
        Literal::Dict(self.entries)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(i64::from(value))
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Int(i64::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Literal::None, Into::into)
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(items: Vec<T>) -> Self {
        Literal::List(items.into_iter().map(Into::into).collect())
    }
}
