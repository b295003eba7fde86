use modlink_domain::ids::ObjectId;
use std::any::{Any, TypeId};

/// Narrow view of the host engine's world-object model.
///
/// An entity is a bag of co-located parts plus, for addressable objects, the
/// network identity carried by its nearest identity-bearing ancestor. The
/// engine owns part storage and lifetimes; this trait only exposes lookups.
pub trait Entity {
    /// The co-located part with the given type, if attached.
    fn part_raw(&self, type_id: TypeId) -> Option<&dyn Any>;

    /// Identity assigned by the session layer, if this object is addressable.
    fn network_id(&self) -> Option<ObjectId>;
}

/// Typed part lookup on top of [`Entity::part_raw`].
pub trait EntityExt: Entity {
    fn part<T: Any>(&self) -> Option<&T> {
        self.part_raw(TypeId::of::<T>())?.downcast_ref::<T>()
    }
}

impl<E: Entity + ?Sized> EntityExt for E {}
