//! Macros for ergonomic state declarations.

/// Generate a state enum and its `State` implementation.
///
/// The enum derives everything a machine needs to store its variants in
/// sets and transition tables, and each variant is named after itself.
///
/// # Example
///
/// ```
/// use modfsm::core::State;
/// use modfsm::state_enum;
///
/// state_enum! {
///     pub enum Parity {
///         Even,
///         Odd,
///     }
/// }
///
/// assert_eq!(Parity::Odd.name(), "Odd");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
