//! Examples for multidict that need dependencies beyond the crate itself. See
//! the `examples` directory.
