//! Integer-coded enumerations shared by the SDS data contracts.
//!
//! Every generated enum carries a fixed wire code per variant, travels as
//! that integer through serde, and parses back from either the code or the
//! variant name.

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in code order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_code(&self) -> i32 {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            pub fn from_code(code: i32) -> $crate::errors::SdsResult<Self> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    _ => {
                        tracing::debug!(code, kind = $label, "rejected unknown code");
                        Err($crate::errors::SdsError::InvalidValue(format!(
                            "unknown {} code {}",
                            $label, code
                        )))
                    }
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::errors::SdsError;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                $name::from_code(code)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.as_code()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::SdsError;

            /// Accepts the decimal code or the variant name (any case).
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if let Ok(code) = trimmed.parse::<i32>() {
                    return $name::from_code(code);
                }

                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| {
                        $crate::errors::SdsError::InvalidValue(format!(
                            "unknown {} '{}'",
                            $label, s
                        ))
                    })
            }
        }
    };
}
