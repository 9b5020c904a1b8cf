use proc_macro::TokenStream;

mod macro_utils;
mod tuples;
mod variant;

/// Generates the tuple trait impls for every arity up to and including the
/// given literal. Only meant to be invoked once, from inside `hetero`.
#[proc_macro]
pub fn impl_tuples(tokens: TokenStream) -> TokenStream {
  macro_utils::impl_tuples(tokens)
}

#[proc_macro_derive(Variant)]
pub fn derive_variant(tokens: TokenStream) -> TokenStream {
  macro_utils::derive_variant(tokens)
}
