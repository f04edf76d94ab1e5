//! Macros making implementing IANA types easier.

/// Creates a standard IANA type wrapping an integer.
///
/// This adds impls for `From`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`,
/// and `Hash`. `Display` writes the mnemonic where one is defined and
/// the decimal value otherwise. Wire-format parsing and composing is
/// added separately for the types that appear as whole fields on the
/// wire – the opcode and response code only ever travel as bits of the
/// header's flag octets.
macro_rules! int_enum {
    ( $(#[$attr:meta])* =>
      $ianatype:ident, $inttype:ty;
      $( $(#[$variant_attr:meta])* ( $variant:ident =>
                                        $value:expr, $mnemonic:expr) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $ianatype($inttype);

        impl $ianatype {
            $(
                $(#[$variant_attr])*
                pub const $variant: $ianatype = $ianatype($value);
            )*
        }

        impl $ianatype {
            /// Returns a value from its raw integer value.
            #[must_use]
            pub const fn from_int(value: $inttype) -> Self {
                Self(value)
            }

            /// Returns the raw integer value for a value.
            #[must_use]
            pub const fn to_int(self) -> $inttype {
                self.0
            }

            /// Returns the mnemonic for this value if there is one.
            #[must_use]
            pub const fn to_mnemonic(self) -> Option<&'static str> {
                match self {
                    $(
                        $ianatype::$variant => Some($mnemonic),
                    )*
                    _ => None,
                }
            }
        }

        //--- From

        impl From<$inttype> for $ianatype {
            fn from(value: $inttype) -> Self {
                $ianatype::from_int(value)
            }
        }

        impl From<$ianatype> for $inttype {
            fn from(value: $ianatype) -> Self {
                value.to_int()
            }
        }

        //--- Debug and Display

        impl core::fmt::Debug for $ianatype {
            fn fmt(
                &self, f: &mut core::fmt::Formatter
            ) -> core::fmt::Result {
                match self.to_mnemonic() {
                    Some(mnemonic) => {
                        write!(
                            f,
                            concat!(stringify!($ianatype), "::{}"),
                            mnemonic
                        )
                    }
                    None => {
                        f.debug_tuple(stringify!($ianatype))
                            .field(&self.0)
                            .finish()
                    }
                }
            }
        }

        impl core::fmt::Display for $ianatype {
            fn fmt(
                &self, f: &mut core::fmt::Formatter
            ) -> core::fmt::Result {
                match self.to_mnemonic() {
                    Some(mnemonic) => f.write_str(mnemonic),
                    None => write!(f, "{}", self.0),
                }
            }
        }
    }
}

/// Adds wire-format parsing and composing to a `u16` based IANA type.
macro_rules! int_enum_wire_u16 {
    ($ianatype:ident) => {
        impl $ianatype {
            /// Takes a value from the beginning of `parser`.
            pub fn parse(
                parser: &mut $crate::base::wire::Parser,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                parser.parse_u16().map(Self::from_int)
            }

            /// Appends the wire-format value to `target`.
            pub fn compose<Target>(self, target: &mut Target)
            where
                Target: $crate::base::wire::OctetsBuilder + ?Sized,
            {
                target.append_u16(self.to_int())
            }
        }
    };
}
