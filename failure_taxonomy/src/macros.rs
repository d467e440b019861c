//! Generator for the [`FailureKind`](crate::FailureKind) / [`Failure`](crate::Failure) pair.
//!
//! Both enums, the default-code table and the per-variant plumbing are
//! expanded from a single declaration in `taxonomy.rs`, so a kind can never
//! exist in one enum and be missing from the other.

macro_rules! define_failures {
    (
        contextual {
            $(
                $c_variant:ident => $c_name:literal, $c_ctor:ident,
                    $c_summary:literal;
            )*
        }
        status_coded {
            $(
                $s_variant:ident = $s_code:literal => $s_name:literal, $s_ctor:ident,
                    $s_summary:literal;
            )*
        }
    ) => {
        /// Discriminant of a [`Failure`], without its fields.
        ///
        /// Also carries the static metadata of each category: its name, its
        /// default status code and a short description.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum FailureKind {
            $(
                #[doc = $c_summary]
                $c_variant,
            )*
            $(
                #[doc = $s_summary]
                #[doc = ""]
                #[doc = concat!("Default status code: ", stringify!($s_code), ".")]
                $s_variant,
            )*
        }

        impl FailureKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [FailureKind] = &[
                $(FailureKind::$c_variant,)*
                $(FailureKind::$s_variant,)*
            ];

            /// Stable kebab-case name, e.g. `"not-found"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(FailureKind::$c_variant => $c_name,)*
                    $(FailureKind::$s_variant => $s_name,)*
                }
            }

            /// The conventional HTTP status code for this kind, or `None` for
            /// kinds that only carry context.
            pub const fn default_http_code(self) -> Option<u16> {
                match self {
                    $(FailureKind::$c_variant => None,)*
                    $(FailureKind::$s_variant => Some($s_code),)*
                }
            }

            /// One-sentence description of the category.
            pub const fn description(self) -> &'static str {
                match self {
                    $(FailureKind::$c_variant => $c_summary,)*
                    $(FailureKind::$s_variant => $s_summary,)*
                }
            }
        }

        /// A failure outcome of a client/server interaction.
        ///
        /// Exactly one variant is active per value. Status-coded variants hold
        /// an `http_code` that defaults to the conventional value for the
        /// category but may be set to anything at construction. Every variant
        /// holds an optional `additional_data` payload that is passed through
        /// untouched.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Failure<D = ::serde_json::Value> {
            $(
                #[doc = $c_summary]
                $c_variant {
                    /// Caller-supplied context.
                    additional_data: Option<D>,
                },
            )*
            $(
                #[doc = $s_summary]
                $s_variant {
                    #[doc = concat!("Status code, `", stringify!($s_code), "` unless overridden.")]
                    http_code: u16,
                    /// Caller-supplied context.
                    additional_data: Option<D>,
                },
            )*
        }

        impl<D> Failure<D> {
            $(
                #[doc = concat!("Creates a `", $c_name, "` failure with no context.")]
                pub fn $c_ctor() -> Self {
                    Failure::$c_variant {
                        additional_data: None,
                    }
                }
            )*
            $(
                #[doc = concat!(
                    "Creates a `", $s_name, "` failure with status ",
                    stringify!($s_code), " and no context."
                )]
                pub fn $s_ctor() -> Self {
                    Failure::$s_variant {
                        http_code: $s_code,
                        additional_data: None,
                    }
                }
            )*

            /// The kind of this failure.
            pub fn kind(&self) -> FailureKind {
                match self {
                    $(Failure::$c_variant { .. } => FailureKind::$c_variant,)*
                    $(Failure::$s_variant { .. } => FailureKind::$s_variant,)*
                }
            }

            /// The status code, or `None` for kinds without one.
            pub fn http_code(&self) -> Option<u16> {
                match self {
                    $(Failure::$c_variant { .. } => None,)*
                    $(Failure::$s_variant { http_code, .. } => Some(*http_code),)*
                }
            }

            /// The attached context, if any.
            pub fn additional_data(&self) -> Option<&D> {
                match self {
                    $(Failure::$c_variant { additional_data } => additional_data.as_ref(),)*
                    $(Failure::$s_variant { additional_data, .. } => additional_data.as_ref(),)*
                }
            }

            /// Consumes the failure and returns its context.
            pub fn into_additional_data(self) -> Option<D> {
                match self {
                    $(Failure::$c_variant { additional_data } => additional_data,)*
                    $(Failure::$s_variant { additional_data, .. } => additional_data,)*
                }
            }

            /// Converts the context payload, keeping the variant and status code.
            pub fn map_additional_data<E, F>(self, f: F) -> Failure<E>
            where
                F: FnOnce(D) -> E,
            {
                match self {
                    $(
                        Failure::$c_variant { additional_data } => Failure::$c_variant {
                            additional_data: additional_data.map(f),
                        },
                    )*
                    $(
                        Failure::$s_variant {
                            http_code,
                            additional_data,
                        } => Failure::$s_variant {
                            http_code,
                            additional_data: additional_data.map(f),
                        },
                    )*
                }
            }

            pub(crate) fn additional_data_slot(&mut self) -> &mut Option<D> {
                match self {
                    $(Failure::$c_variant { additional_data } => additional_data,)*
                    $(Failure::$s_variant { additional_data, .. } => additional_data,)*
                }
            }

            // `http_code` is ignored for contextual kinds; callers check first.
            pub(crate) fn assemble(
                kind: FailureKind,
                http_code: Option<u16>,
                additional_data: Option<D>,
            ) -> Self {
                match kind {
                    $(FailureKind::$c_variant => Failure::$c_variant { additional_data },)*
                    $(
                        FailureKind::$s_variant => Failure::$s_variant {
                            http_code: http_code.unwrap_or($s_code),
                            additional_data,
                        },
                    )*
                }
            }
        }
    };
}
