use crate::identifiable::Identifiable;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

/// A value paired with an identifier chosen when the wrapper is built.
///
/// The identifier never changes after construction, but nothing keeps it in
/// sync with `value` either: a wrapper built with [`with_key`] keeps the id it
/// read at that time even if the underlying field is later mutated.
///
/// Equality and hashing look at `value` only. Two wrappers holding equal values
/// under different ids compare equal.
///
/// Fields of `T` are reachable directly through the wrapper via `Deref` and
/// `DerefMut`. Fields of `T` named `id` or `value` are shadowed by the wrapper's
/// own and have to go through `.value` explicitly.
///
/// `Id: Eq + Hash` is required by the constructors and by [`Identifiable`], not
/// by the type itself. Decoding and [`map`] carry whatever id they are given,
/// so a wrapper over an id without those bounds can exist but cannot be built
/// from scratch or used as an [`Identifiable`].
///
/// [`with_key`]: IdentifiedValue::with_key
/// [`map`]: IdentifiedValue::map
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "Id: Deserialize<'de>, T: Deserialize<'de>"))]
pub struct IdentifiedValue<Id, T> {
    // Both fields are required on decode, `Option` ones included.
    #[serde(deserialize_with = "Deserialize::deserialize")]
    id: Id,
    #[serde(deserialize_with = "Deserialize::deserialize")]
    pub value: T,
}

impl<Id: Eq + Hash, T> IdentifiedValue<Id, T> {
    pub fn new(value: T, id: Id) -> Self {
        Self { id, value }
    }

    pub fn with_id_fn<F>(value: T, derive: F) -> Self
    where
        F: FnOnce(&T) -> Id,
    {
        let id = derive(&value);
        Self::new(value, id)
    }

    /// Builds the wrapper with an id read out of one of `value`'s fields.
    ///
    /// ```
    /// use identified::IdentifiedValue;
    ///
    /// struct User {
    ///     name: String,
    /// }
    ///
    /// let user = IdentifiedValue::with_key(User { name: "ada".into() }, |u| &u.name);
    /// assert_eq!(user.id(), "ada");
    /// ```
    pub fn with_key<F>(value: T, key: F) -> Self
    where
        Id: Clone,
        F: FnOnce(&T) -> &Id,
    {
        let id = key(&value).clone();
        Self::new(value, id)
    }
}

impl<Id, T> IdentifiedValue<Id, T> {
    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (Id, T) {
        (self.id, self.value)
    }

    pub fn map<U, F>(self, f: F) -> IdentifiedValue<Id, U>
    where
        F: FnOnce(T) -> U,
    {
        IdentifiedValue {
            id: self.id,
            value: f(self.value),
        }
    }
}

impl<Id: Eq + Hash, T> Identifiable for IdentifiedValue<Id, T> {
    type Id = Id;

    fn id(&self) -> &Id {
        &self.id
    }
}

impl<Id, T> Deref for IdentifiedValue<Id, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<Id, T> DerefMut for IdentifiedValue<Id, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<Id, T> AsRef<T> for IdentifiedValue<Id, T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<Id, T> AsMut<T> for IdentifiedValue<Id, T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

// The id takes no part in comparisons or hashing.
impl<Id, T: PartialEq> PartialEq for IdentifiedValue<Id, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<Id, T: Eq> Eq for IdentifiedValue<Id, T> {}

impl<Id, T: Hash> Hash for IdentifiedValue<Id, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<Id, T: fmt::Display> fmt::Display for IdentifiedValue<Id, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
