//! Declaration macro for the closed enum set.

/// Declare every registered enum in one place.
///
/// Each item is written `ITEM_NAME => Variant = value`. For every enum the
/// macro generates:
/// - the `#[repr(i32)]` Rust enum
/// - an [`EnumType`](crate::EnumType) impl with `ITEMS` and `OnceLock`-backed
///   `enum_map()` / `type_info()`
/// - `Display` (item name), `FromStr` (case-insensitive), `TryFrom<i32>`, and
///   `From<Self> for i32`
///
/// It also generates [`EnumId`](crate::EnumId), one variant per enum, which
/// indexes the registry.
///
/// Duplicate values are rejected at compile time: both the `repr`
/// discriminants and the generated `from_int` match would conflict.
macro_rules! define_enums {
    ($(
        $(#[$attr:meta])*
        $vis:vis enum $Ty:ident {
            $( $(#[$var_attr:meta])* $ITEM:ident => $Variant:ident = $value:literal ),* $(,)?
        }
    )*) => {
        /// Identity of a registered enum.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum EnumId {
            $( $Ty, )*
        }

        impl EnumId {
            /// Every registered enum, in declaration order.
            pub const ALL: &'static [EnumId] = &[ $( EnumId::$Ty, )* ];

            /// Number of registered enums.
            pub const COUNT: usize = Self::ALL.len();

            /// The declared name of this enum.
            pub const fn name(self) -> &'static str {
                match self {
                    $( EnumId::$Ty => stringify!($Ty), )*
                }
            }

            /// The type-erased metadata for this enum.
            pub fn type_info(self) -> &'static dyn $crate::TypeInfoBase {
                match self {
                    $( EnumId::$Ty => <$Ty as $crate::EnumType>::type_info(), )*
                }
            }
        }

        $(
            $(#[$attr])*
            #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
            #[repr(i32)]
            $vis enum $Ty {
                $( $(#[$var_attr])* $Variant = $value, )*
            }

            impl $crate::EnumType for $Ty {
                const ID: EnumId = EnumId::$Ty;
                const ENUM_NAME: &'static str = stringify!($Ty);
                const ITEMS: &'static [(&'static str, Self)] = &[
                    $( (stringify!($ITEM), $Ty::$Variant), )*
                ];

                #[inline]
                fn to_int(self) -> i32 {
                    self as i32
                }

                fn from_int(value: i32) -> Option<Self> {
                    match value {
                        $( $value => Some($Ty::$Variant), )*
                        _ => None,
                    }
                }

                fn enum_map() -> &'static $crate::EnumMap<Self> {
                    static MAP: ::std::sync::OnceLock<$crate::EnumMap<$Ty>> =
                        ::std::sync::OnceLock::new();
                    MAP.get_or_init(|| {
                        $crate::EnumMap::new(
                            <Self as $crate::EnumType>::ENUM_NAME,
                            <Self as $crate::EnumType>::ITEMS,
                        )
                    })
                }

                fn type_info() -> &'static $crate::TypeInfo<Self> {
                    static INFO: ::std::sync::OnceLock<$crate::TypeInfo<$Ty>> =
                        ::std::sync::OnceLock::new();
                    INFO.get_or_init(|| {
                        $crate::TypeInfo::from_items(
                            <Self as $crate::EnumType>::ENUM_NAME,
                            <Self as $crate::EnumType>::ITEMS,
                        )
                    })
                }
            }

            impl ::std::fmt::Display for $Ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(match self {
                        $( $Ty::$Variant => stringify!($ITEM), )*
                    })
                }
            }

            impl ::std::str::FromStr for $Ty {
                type Err = $crate::LookupError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $crate::parse_value::<Self>(s)
                }
            }

            impl ::std::convert::TryFrom<i32> for $Ty {
                type Error = $crate::LookupError;

                fn try_from(value: i32) -> Result<Self, Self::Error> {
                    <Self as $crate::EnumType>::from_int(value).ok_or(
                        $crate::LookupError::UnknownValue {
                            enum_name: <Self as $crate::EnumType>::ENUM_NAME,
                            value,
                        },
                    )
                }
            }

            impl ::std::convert::From<$Ty> for i32 {
                #[inline]
                fn from(value: $Ty) -> i32 {
                    value as i32
                }
            }
        )*
    };
}

pub(crate) use define_enums;
