use std::any::Any;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::rc::Rc;

use foldhash::fast::FixedState;

use crate::{ItemModel, ViewKind};

/// Fixed seed so that equal invariant view properties always yield the same token.
const INVARIANTS_HASH_SEED: u64 = 0x6974_656d_5f6d_6f64;

/// Determines which views are interchangeable with one another and can therefore be recycled.
///
/// A differentiator pairs the [`ViewKind`] of a model with the model's invariant view
/// properties, which are the construction-time parameters that a later content update cannot
/// change. Two differentiators are equal if and only if both parts are equal. A recycler must
/// never reuse a view for a model whose differentiator is not equal to the one the view was
/// built for.
///
/// The invariant view properties are erased into an opaque token: a hash computed once at
/// construction time plus the original value for exact comparison. Equality and hashing are
/// therefore total and cheap.
///
/// Cloning is cheap. The type is not thread-safe, matching the single-threaded nature of view
/// recycling.
///
/// # Examples
///
/// ```
/// use item_model::ViewDifferentiator;
///
/// struct SmallLabel;
/// struct LargeLabel;
///
/// let a = ViewDifferentiator::new::<SmallLabel, _>(12_u32);
/// let b = ViewDifferentiator::new::<SmallLabel, _>(12_u32);
/// let c = ViewDifferentiator::new::<SmallLabel, _>(14_u32);
/// let d = ViewDifferentiator::new::<LargeLabel, _>(12_u32);
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_ne!(a, d);
/// ```
#[derive(Clone)]
pub struct ViewDifferentiator {
    view_kind: ViewKind,
    invariants_hash: u64,
    invariants: Rc<dyn ErasedInvariants>,
}

impl ViewDifferentiator {
    /// Creates a differentiator for views of kind `K` built with the given invariant view
    /// properties.
    #[must_use]
    pub fn new<K, P>(invariant_view_properties: P) -> Self
    where
        K: ?Sized + 'static,
        P: fmt::Debug + Eq + Hash + 'static,
    {
        let invariants_hash =
            FixedState::with_seed(INVARIANTS_HASH_SEED).hash_one(&invariant_view_properties);

        Self {
            view_kind: ViewKind::of::<K>(),
            invariants_hash,
            invariants: Rc::new(invariant_view_properties),
        }
    }

    /// Derives the differentiator of a model from its type and invariant view properties.
    ///
    /// This is a pure function of the two: calling it repeatedly for models with equal
    /// invariant view properties always yields equal differentiators.
    #[must_use]
    pub fn of<M: ItemModel>(model: &M) -> Self {
        Self::new::<M, _>(model.invariant_view_properties().clone())
    }

    /// The kind of view this differentiator identifies.
    #[must_use]
    pub fn view_kind(&self) -> ViewKind {
        self.view_kind
    }

    /// Returns the invariant view properties if they are of type `P`.
    #[must_use]
    pub fn invariant_view_properties<P: 'static>(&self) -> Option<&P> {
        let invariants: &dyn ErasedInvariants = &*self.invariants;
        invariants.as_any().downcast_ref::<P>()
    }
}

impl PartialEq for ViewDifferentiator {
    fn eq(&self, other: &Self) -> bool {
        self.view_kind == other.view_kind
            && self.invariants_hash == other.invariants_hash
            && (Rc::ptr_eq(&self.invariants, &other.invariants)
                || self.invariants.eq_erased(&*other.invariants))
    }
}

impl Eq for ViewDifferentiator {}

impl Hash for ViewDifferentiator {
    // A weaker hash only degrades map performance, which tests cannot observe.
    #[cfg_attr(test, mutants::skip)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.view_kind.hash(state);
        state.write_u64(self.invariants_hash);
    }
}

impl fmt::Debug for ViewDifferentiator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewDifferentiator")
            .field("view_kind", &self.view_kind)
            .field("invariant_view_properties", &self.invariants)
            .finish()
    }
}

/// Object-safe view of a value of any invariant view properties type.
trait ErasedInvariants: fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn eq_erased(&self, other: &dyn ErasedInvariants) -> bool;
}

impl<P> ErasedInvariants for P
where
    P: fmt::Debug + Eq + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_erased(&self, other: &dyn ErasedInvariants) -> bool {
        other
            .as_any()
            .downcast_ref::<P>()
            .is_some_and(|other| self == other)
    }
}
