use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies one concrete item model type and therefore the kind of view it builds.
///
/// Two kinds are equal if and only if they were created from the same type. The type name is
/// carried for diagnostics only and does not participate in equality or hashing.
///
/// # Examples
///
/// ```
/// use item_model::ViewKind;
///
/// assert_eq!(ViewKind::of::<u32>(), ViewKind::of::<u32>());
/// assert_ne!(ViewKind::of::<u32>(), ViewKind::of::<String>());
/// ```
#[derive(Clone, Copy)]
pub struct ViewKind {
    type_id: TypeId,
    type_name: &'static str,
}

impl ViewKind {
    /// Returns the view kind associated with the type `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// The name of the type this kind was created from.
    ///
    /// The exact contents of the name are not guaranteed to be stable between compiler versions.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for ViewKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ViewKind {}

impl Hash for ViewKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewKind").field(&self.type_name).finish()
    }
}
