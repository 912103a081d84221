//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped composition and delegates rendering details
//! to `components`.

pub mod landing;
