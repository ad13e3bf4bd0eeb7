use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A JSON value that can be missing, explicitly `null`, or present.
///
/// Fields of this type must carry `#[serde(default)]` (or sit in a struct
/// with a container-level default) so that a missing key decodes as
/// [`Nullable::Absent`] rather than [`Nullable::Null`]. When serializing,
/// pair it with `skip_serializing_if = "Nullable::is_absent"` to omit the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Nullable<T> {
    #[default]
    Absent,
    Null,
    Present(T),
}

impl<T> Nullable<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True when a non-null value was sent.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Nullable<U> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Present(value) => Nullable::Present(f(value)),
        }
    }

    /// Keeps whichever side holds a value, preferring `self`. Two missing
    /// sides stay [`Nullable::Absent`]; otherwise a `null` wins.
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), _) | (_, Self::Present(value)) => Self::Present(value),
            (Self::Absent, Self::Absent) => Self::Absent,
            _ => Self::Null,
        }
    }

    /// `None` becomes [`Nullable::Null`].
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Null,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => value.serialize(serializer),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_option(Option::<T>::deserialize(deserializer)?))
    }
}
