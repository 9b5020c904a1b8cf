use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, LitInt};
use syn::parse::{Result, Parse, ParseStream};

use crate::{tuples, variant};

pub struct MaxArity(pub usize);

impl Parse for MaxArity {
  fn parse(input: ParseStream) -> Result<Self> {
    let lit = input.parse::<LitInt>()?;
    if !input.cursor().eof() {
      return Err(input.error("expected a single integer literal"));
    }
    Ok(MaxArity(lit.base10_parse::<usize>()?))
  }
}

pub fn impl_tuples(tokens: TokenStream) -> TokenStream {
  let max = parse_macro_input!(tokens as MaxArity).0;
  TokenStream::from(tuples::translate(max))
}

pub fn derive_variant(tokens: TokenStream) -> TokenStream {
  let input = parse_macro_input!(tokens as DeriveInput);
  TokenStream::from(
    variant::translate(input).unwrap_or_else(|err| err.to_compile_error()))
}
