//! The `grammar!` macro declares the node kinds of one language dialect.
//!
//! Each entry names a kind, the upstream grammar production it maps to, its
//! capability set and either its slot declarations or the `terminal` marker:
//!
//! ```ignore
//! grammar! {
//!     language: C;
//!     CallExpression = "call_expression" [Expression, Call] {
//!         function: One<Function>,
//!         arguments: One<Arguments>,
//!     },
//!     CompoundStatement = "compound_statement" [Statement, Block] {
//!         items: Many<Items> @rest,
//!     },
//!     Identifier = "identifier" [Expression, Identifier] terminal,
//! }
//! ```
//!
//! The expansion provides, in the invoking module:
//!
//! - `enum Kind` with one variant per entry and its static metadata
//!   (production, capabilities, slots, terminal flag);
//! - `impl From<Kind> for NodeKind`;
//! - a typed view struct per entry (`CallExpression<'t>`) with one accessor
//!   per slot. Accessor return types follow the slot arity: `One` yields a
//!   node, `Opt` an optional node and `Many` a vector of nodes.
//!
//! `@rest` marks the slot that receives children not assigned to any other
//! slot. Terminal kinds automatically carry [`Capability::Terminal`].
//!
//! [`Capability::Terminal`]: crate::capability::Capability::Terminal

#[macro_export]
macro_rules! grammar {
    (@rest rest) => { true };
    (@rest) => { false };

    (@terminal terminal) => { true };
    (@terminal) => { false };

    (@terminal_caps terminal) => {
        $crate::capability::CapabilitySet::of(&[$crate::capability::Capability::Terminal])
    };
    (@terminal_caps) => { $crate::capability::CapabilitySet::EMPTY };

    (
        language: $language:ident;
        $(
            $variant:ident = $production:literal [$($cap:ident),* $(,)?]
            $( { $( $slot_fn:ident : $arity:ident < $slot:ident > $(@ $rest:ident)? ),* $(,)? } )?
            $( $terminal:ident )?
        ),* $(,)?
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub enum Kind {
            $($variant,)*
        }

        #[allow(non_upper_case_globals)]
        mod decls {
            use $crate::slot::{Arity, Slot, SlotDecl};

            $(
                pub(super) const $variant: &[SlotDecl] = &[
                    $($(
                        SlotDecl::new(Slot::$slot, Arity::$arity, $crate::grammar!(@rest $($rest)?)),
                    )*)?
                ];
            )*
        }

        #[allow(clippy::match_same_arms)]
        impl Kind {
            pub const ALL: &'static [Kind] = &[$(Kind::$variant,)*];
            pub const LANGUAGE: $crate::language::Language = $crate::language::Language::$language;

            #[must_use]
            pub const fn production(self) -> &'static str {
                match self {
                    $(Kind::$variant => $production,)*
                }
            }

            #[must_use]
            pub const fn capabilities(self) -> $crate::capability::CapabilitySet {
                match self {
                    $(
                        Kind::$variant => $crate::capability::CapabilitySet::of(
                            &[$($crate::capability::Capability::$cap),*]
                        )
                        .union($crate::grammar!(@terminal_caps $($terminal)?)),
                    )*
                }
            }

            #[must_use]
            pub const fn slots(self) -> &'static [$crate::slot::SlotDecl] {
                match self {
                    $(Kind::$variant => decls::$variant,)*
                }
            }

            #[must_use]
            pub const fn is_terminal(self) -> bool {
                match self {
                    $(Kind::$variant => $crate::grammar!(@terminal $($terminal)?),)*
                }
            }

            #[must_use]
            pub fn from_production(production: &str) -> Option<Kind> {
                match production {
                    $($production => Some(Kind::$variant),)*
                    _ => None,
                }
            }
        }

        impl core::fmt::Display for Kind {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str(self.production())
            }
        }

        impl From<Kind> for $crate::kind::NodeKind {
            fn from(kind: Kind) -> Self {
                $crate::kind::NodeKind::$language(kind)
            }
        }

        $(
            #[derive(Clone, Copy, Debug, PartialEq)]
            pub struct $variant<'t>($crate::node::Node<'t>);

            #[allow(clippy::missing_errors_doc)]
            impl<'t> $variant<'t> {
                pub const KIND: Kind = Kind::$variant;

                /// Views `node` as this kind, `None` if it has another kind.
                #[must_use]
                pub fn cast(node: $crate::node::Node<'t>) -> Option<Self> {
                    (node.kind() == $crate::kind::NodeKind::$language(Kind::$variant))
                        .then_some(Self(node))
                }

                #[must_use]
                pub fn node(self) -> $crate::node::Node<'t> {
                    self.0
                }

                $($(
                    pub fn $slot_fn(
                        self,
                    ) -> Result<
                        <$crate::slot::arity::$arity as $crate::slot::ArityMarker>::Output<'t>,
                        $crate::errors::AstError,
                    > {
                        const INDEX: usize =
                            $crate::slot::index_of(decls::$variant, $crate::slot::Slot::$slot);
                        <$crate::slot::arity::$arity as $crate::slot::ArityMarker>::project(
                            self.0, INDEX,
                        )
                    }
                )*)?
            }
        )*
    };
}
