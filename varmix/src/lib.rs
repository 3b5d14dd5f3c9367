#[cfg(feature = "core")]
#[doc(inline)]
pub use varmix_core as core;

#[cfg(feature = "unify")]
#[doc(inline)]
pub use varmix_unify as unify;
