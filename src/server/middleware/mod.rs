//! Request processing applied around the router.

pub mod method_override;
