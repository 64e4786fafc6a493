// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Allocator plumbing.
//!
//! Both the key table and the buckets are allocated through
//! [`AllocWrapper`], which implements `allocator_api2`'s `Allocator` for
//! whatever [`Allocator`] the map was created with. That lets hashbrown and
//! allocator-api2 vectors share one allocator regardless of whether the
//! `allocator-api2` feature is on.

pub use self::inner::Global;
pub(crate) use self::inner::{global_alloc, AllocWrapper, Allocator};

// With the feature on, our Allocator is allocator-api2's trait, so any
// allocator-api2 allocator (bumpalo arenas, for example) can back a map.
// If a crate in the build enables allocator-api2's "nightly" feature, this
// becomes core's Allocator trait.
#[cfg(feature = "allocator-api2")]
mod inner {
    use allocator_api2::alloc::AllocError;
    pub use allocator_api2::alloc::{Allocator, Global, Layout};
    use core::ptr::NonNull;

    #[inline]
    pub(crate) fn global_alloc() -> Global {
        Global
    }

    #[derive(Clone, Copy, Debug, Default)]
    pub(crate) struct AllocWrapper<T>(pub(crate) T);

    // SAFETY: every call is forwarded unchanged to the wrapped allocator,
    // which upholds the Allocator contract itself.
    unsafe impl<T: Allocator> allocator_api2::alloc::Allocator
        for AllocWrapper<T>
    {
        #[inline]
        fn allocate(
            &self,
            layout: Layout,
        ) -> Result<NonNull<[u8]>, AllocError> {
            allocator_api2::alloc::Allocator::allocate(&self.0, layout)
        }

        #[inline]
        unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
            // SAFETY: the caller guarantees that ptr was allocated by this
            // allocator with this layout, and we allocated it through self.0.
            unsafe {
                allocator_api2::alloc::Allocator::deallocate(
                    &self.0, ptr, layout,
                )
            };
        }
    }
}

// With the feature off, maps can only use the global allocator. Our own
// sealed-off Allocator trait stands in so the rest of the crate is written the
// same way in both configurations.
#[cfg(not(feature = "allocator-api2"))]
mod inner {
    use allocator_api2::alloc::AllocError;
    use core::{alloc::Layout, ptr::NonNull};

    #[inline]
    pub(crate) fn global_alloc() -> Global {
        Global::default()
    }

    #[allow(clippy::missing_safety_doc)] // not exposed outside of this crate
    pub unsafe trait Allocator {
        fn allocate(&self, layout: Layout)
            -> Result<NonNull<[u8]>, AllocError>;
        unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
    }

    /// The global allocator.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Global(allocator_api2::alloc::Global);

    // SAFETY: forwards to allocator-api2's Global, which wraps the global
    // allocator.
    unsafe impl Allocator for Global {
        #[inline]
        fn allocate(
            &self,
            layout: Layout,
        ) -> Result<NonNull<[u8]>, AllocError> {
            allocator_api2::alloc::Allocator::allocate(&self.0, layout)
        }

        #[inline]
        unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
            // SAFETY: the caller upholds deallocate's contract.
            unsafe {
                allocator_api2::alloc::Allocator::deallocate(
                    &self.0, ptr, layout,
                )
            };
        }
    }

    #[derive(Clone, Copy, Debug, Default)]
    pub(crate) struct AllocWrapper<T>(pub(crate) T);

    // SAFETY: every call is forwarded unchanged to the wrapped allocator.
    unsafe impl<T: Allocator> allocator_api2::alloc::Allocator
        for AllocWrapper<T>
    {
        #[inline]
        fn allocate(
            &self,
            layout: Layout,
        ) -> Result<NonNull<[u8]>, AllocError> {
            Allocator::allocate(&self.0, layout)
        }

        #[inline]
        unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
            // SAFETY: the caller upholds deallocate's contract.
            unsafe { Allocator::deallocate(&self.0, ptr, layout) };
        }
    }
}
