use core::fmt;

/// Reaches a field of type `T` inside an instance of `C`.
///
/// Both directions are plain function pointers, so an accessor is `Copy`,
/// `Send` and `Sync` whatever `C` and `T` are, and costs one indirect call.
///
/// Usually built with [`accessor!`](crate::accessor).
///
/// # Examples
///
/// ```
/// use rf_schema::access::Accessor;
///
/// struct Point { x: i32, y: i32 }
///
/// let y = Accessor::new(|p: &Point| &p.y, |p: &mut Point| &mut p.y);
///
/// let mut point = Point { x: 1, y: 2 };
/// *y.get_mut(&mut point) += 40;
/// assert_eq!(*y.get(&point), 42);
/// # let _ = point.x;
/// ```
pub struct Accessor<C, T> {
    get: fn(&C) -> &T,
    get_mut: fn(&mut C) -> &mut T,
}

impl<C, T> Accessor<C, T> {
    #[inline]
    pub const fn new(get: fn(&C) -> &T, get_mut: fn(&mut C) -> &mut T) -> Self {
        Self { get, get_mut }
    }

    #[inline(always)]
    pub fn get<'a>(&self, instance: &'a C) -> &'a T {
        (self.get)(instance)
    }

    #[inline(always)]
    pub fn get_mut<'a>(&self, instance: &'a mut C) -> &'a mut T {
        (self.get_mut)(instance)
    }
}

impl<C, T> Clone for Accessor<C, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, T> Copy for Accessor<C, T> {}

impl<C, T> fmt::Debug for Accessor<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("owner", &core::any::type_name::<C>())
            .field("field", &core::any::type_name::<T>())
            .finish()
    }
}

/// Build an [`Accessor`] for a named field.
///
/// ```
/// use rf_schema::accessor;
///
/// #[derive(Default)]
/// struct Tag { id: i32 }
///
/// let id = accessor!(Tag, id);
/// let mut tag = Tag::default();
/// *id.get_mut(&mut tag) = 5;
/// assert_eq!(tag.id, 5);
/// ```
#[macro_export]
macro_rules! accessor {
    ($owner:ty, $field:tt) => {
        $crate::access::Accessor::<$owner, _>::new(
            |instance: &$owner| &instance.$field,
            |instance: &mut $owner| &mut instance.$field,
        )
    };
}
