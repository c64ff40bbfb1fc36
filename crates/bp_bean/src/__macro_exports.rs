//! Items referenced by `#[derive(Bean)]` output. Not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    use crate::info::Typed;
    use crate::registry::BeanRegistry;

    pub use inventory;

    /// A registration function collected by `inventory`.
    pub struct __AutoRegisterFunc(pub fn(&mut BeanRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterType {
        fn __register(registry: &mut BeanRegistry);
    }

    impl<T: Typed> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut BeanRegistry) {
            registry.register::<T>();
        }
    }

    // Only runs if static registration works on this platform.
    fn __mark_available(registry: &mut BeanRegistry) {
        registry.auto_register_available = true;
    }

    inventory::submit! {
        __AutoRegisterFunc(__mark_available)
    }

    pub(crate) fn __register_types(registry: &mut BeanRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
