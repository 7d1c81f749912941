use std::fmt::{Display, Formatter};

use bytes::Bytes;

/// The rendering of a [Value::Null].
pub(crate) const NULL_PLACEHOLDER: &str = "<nil>";

#[derive(Debug, Clone, Default, PartialEq)]
/// A single column value as returned by a driver.
///
/// The concrete variant is only known once a row has been scanned, a freshly
/// allocated slot starts out as [Value::Null].
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    /// Raw bytes as returned by the driver.
    ///
    /// Most drivers return textual columns in this form.
    Bytes(Bytes),
}

impl Value {
    #[inline]
    /// Returns `true` if the value is [Value::Null].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    /// Returns the raw bytes if the value is a [Value::Bytes].
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes.as_ref()),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str(NULL_PLACEHOLDER),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
        }
    }
}

macro_rules! value_from {
    ($variant:ident, $($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::$variant(value.into())
                }
            }
        )+
    };
}

value_from!(Bool, bool);
value_from!(Int, i8, i16, i32, i64);
value_from!(UInt, u8, u16, u32, u64);
value_from!(Float, f32, f64);
value_from!(Text, String, &str);
value_from!(Bytes, Bytes, Vec<u8>);

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}
