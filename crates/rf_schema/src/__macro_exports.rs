//! Items used by `#[derive(Schema)]` expansions. Not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::{Schema, SchemaRegistry};

    /// One `#[schema(auto_register)]` type, collected at link time.
    pub struct AutoRegister(pub fn(&SchemaRegistry));

    impl AutoRegister {
        pub const fn of<T: Schema>() -> Self {
            Self(register::<T>)
        }
    }

    fn register<T: Schema>(registry: &SchemaRegistry) {
        registry.get_or_build::<T>();
    }

    inventory::collect!(AutoRegister);
}
