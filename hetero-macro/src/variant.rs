use proc_macro2::TokenStream;
use syn::{Data, DeriveInput, Error, Fields, Ident, LitStr, Result, Type};
use quote::{quote, ToTokens};
use itertools::Itertools;

struct Case {
  name: Ident,
  payload: Type
}

fn collect_cases(input: &DeriveInput) -> Result<Vec<Case>> {
  let data = match &input.data {
    Data::Enum(data) => data,
    _ => return Err(Error::new_spanned(
      &input.ident, "`Variant` can only be derived for enums"))
  };

  if !input.generics.params.is_empty() {
    return Err(Error::new_spanned(
      &input.generics, "`Variant` cannot be derived for generic enums"));
  }

  if data.variants.is_empty() {
    return Err(Error::new_spanned(
      &input.ident, "`Variant` needs at least one variant"));
  }

  let cases = data.variants.iter().map(|variant| {
    match &variant.fields {
      Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(Case {
        name: variant.ident.clone(),
        payload: fields.unnamed[0].ty.clone()
      }),
      _ => Err(Error::new_spanned(
        variant, "each variant must wrap exactly one payload, as in `Name(Payload)`"))
    }
  }).collect::<Result<Vec<_>>>()?;

  // From/TryFrom are keyed on the payload type, so it has to be unique
  let repeated = cases.iter()
    .map(|case| (case.payload.to_token_stream().to_string(), case))
    .sorted_by(|(left, _), (right, _)| left.cmp(right))
    .tuple_windows()
    .find(|((left, _), (right, _))| left == right);

  if let Some((_, (_, case))) = repeated {
    return Err(Error::new_spanned(
      &case.payload, "payload type is wrapped by more than one variant"));
  }

  Ok(cases)
}

fn translate_conversions(enum_name: &Ident, case: &Case) -> TokenStream {
  let Case { name, payload } = case;
  let expected = LitStr::new(&name.to_string(), name.span());

  quote! {
    impl ::core::convert::From<#payload> for #enum_name {
      fn from(inner: #payload) -> Self {
        #enum_name::#name(inner)
      }
    }

    impl ::core::convert::TryFrom<#enum_name> for #payload {
      type Error = ::hetero::VariantMismatch;

      #[allow(unreachable_patterns)]
      fn try_from(value: #enum_name) -> ::core::result::Result<Self, Self::Error> {
        match value {
          #enum_name::#name(inner) => ::core::result::Result::Ok(inner),
          other => ::core::result::Result::Err(::hetero::VariantMismatch {
            expected: #expected,
            found: ::hetero::Variant::variant_name(&other)
          })
        }
      }
    }
  }
}

pub fn translate(input: DeriveInput) -> Result<TokenStream> {
  let cases = collect_cases(&input)?;
  let enum_name = &input.ident;

  let names = cases.iter().map(|case| &case.name).collect_vec();
  let payloads = cases.iter().map(|case| &case.payload).collect_vec();
  let labels = names.iter()
    .map(|name| LitStr::new(&name.to_string(), name.span()))
    .collect_vec();

  let name_arms = names.iter().zip(labels.iter()).map(|(name, label)| {
    quote! { #enum_name::#name(_) => #label }
  }).collect_vec();

  let visit_arms = names.iter().zip(payloads.iter()).map(|(name, payload)| {
    quote! {
      #enum_name::#name(inner) => <__F as ::hetero::Func<&#payload>>::call(&mut f, inner)
    }
  }).collect_vec();

  let visit_mut_arms = names.iter().zip(payloads.iter()).map(|(name, payload)| {
    quote! {
      #enum_name::#name(inner) => <__F as ::hetero::Func<&mut #payload>>::call(&mut f, inner)
    }
  }).collect_vec();

  let conversions = cases.iter()
    .map(|case| translate_conversions(enum_name, case))
    .collect_vec();

  Ok(quote! {
    impl ::hetero::Variant for #enum_name {
      const VARIANTS: &'static [&'static str] = &[#(#labels),*];

      fn variant_name(&self) -> &'static str {
        match self {
          #(#name_arms,)*
        }
      }
    }

    impl<__F, __R> ::hetero::Visit<__F> for #enum_name
    where #(__F: for<'a> ::hetero::Func<&'a #payloads, Output = __R>,)*
    {
      type Output = __R;

      fn visit(&self, mut f: __F) -> Self::Output {
        match self {
          #(#visit_arms,)*
        }
      }
    }

    impl<__F, __R> ::hetero::VisitMut<__F> for #enum_name
    where #(__F: for<'a> ::hetero::Func<&'a mut #payloads, Output = __R>,)*
    {
      type Output = __R;

      fn visit_mut(&mut self, mut f: __F) -> Self::Output {
        match self {
          #(#visit_mut_arms,)*
        }
      }
    }

    #(#conversions)*
  })
}
