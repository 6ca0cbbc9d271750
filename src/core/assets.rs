//! Embedded field guide assets.
//!
//! The practice guides are baked into the binary at compile time, so the
//! installed tool needs no data files on disk.

/// Macro to embed guide documents at compile time as text.
///
/// Generates:
/// - Public constants for each embedded document
/// - `get_guide(path)` function for lookup
/// - `list_guides()` function for discovery
macro_rules! embedded_guides {
    ($($path:expr => $const_name:ident),* $(,)?) => {
        $(
            pub const $const_name: &str =
                include_str!(concat!("../../guides/", $path));
        )*

        pub fn get_guide(path: &str) -> Option<&'static str> {
            match path {
                $( $path => Some($const_name), )*
                _ => None,
            }
        }

        pub fn list_guides() -> Vec<&'static str> {
            vec![ $( $path, )* ]
        }
    };
}

embedded_guides! {
    "USAGE.md" => GUIDE_USAGE,
    "WHY_IT_MATTERS.md" => GUIDE_WHY_IT_MATTERS,
    "ROADMAP_PRINCIPLES.md" => GUIDE_ROADMAP_PRINCIPLES,
}
