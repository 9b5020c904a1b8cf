use proc_macro2::{TokenStream, Span, Literal};
use syn::Ident;
use quote::quote;
use itertools::Itertools;

fn numbered(prefix: &str, n: usize) -> Vec<Ident> {
  (0..n)
    .map(|i| Ident::new(&format!("{}{}", prefix, i), Span::call_site()))
    .collect_vec()
}

fn translate_core(n: usize) -> TokenStream {
  let tys = numbered("T", n);
  let vals = numbered("t", n);
  let len = Literal::usize_unsuffixed(n);

  quote! {
    impl<#(#tys),*> crate::Tuple for (#(#tys,)*) {
      const LEN: usize = #len;
    }

    impl<#(#tys),*> crate::AsRefs for (#(#tys,)*) {
      type Refs<'a> = (#(&'a #tys,)*) where Self: 'a;

      #[allow(clippy::unused_unit)]
      fn as_refs(&self) -> Self::Refs<'_> {
        let (#(#vals,)*) = self;
        (#(#vals,)*)
      }
    }

    impl<#(#tys),*> crate::AsMuts for (#(#tys,)*) {
      type Muts<'a> = (#(&'a mut #tys,)*) where Self: 'a;

      #[allow(clippy::unused_unit)]
      fn as_muts(&mut self) -> Self::Muts<'_> {
        let (#(#vals,)*) = self;
        (#(#vals,)*)
      }
    }

    impl<__F, #(#tys),*> crate::ForEach<__F> for (#(#tys,)*)
    where #(__F: crate::Func<#tys, Output = ()>,)*
    {
      #[allow(unused_mut, unused_variables)]
      fn for_each(self, mut f: __F) {
        let (#(#vals,)*) = self;
        #(<__F as crate::Func<#tys>>::call(&mut f, #vals);)*
      }
    }

    impl<__F, #(#tys),*> crate::Map<__F> for (#(#tys,)*)
    where #(__F: crate::Func<#tys>,)*
    {
      type Output = (#(<__F as crate::Func<#tys>>::Output,)*);

      #[allow(unused_mut, unused_variables, clippy::unused_unit)]
      fn map(self, mut f: __F) -> Self::Output {
        let (#(#vals,)*) = self;
        (#(<__F as crate::Func<#tys>>::call(&mut f, #vals),)*)
      }
    }
  }
}

// Arity 0 has no element to fix the result type, so it gets no impl.
fn translate_map_array(n: usize) -> TokenStream {
  if n == 0 {
    return quote! {};
  }

  let tys = numbered("T", n);
  let vals = numbered("t", n);
  let len = Literal::usize_unsuffixed(n);

  quote! {
    impl<__F, __R, #(#tys),*> crate::MapArray<__F> for (#(#tys,)*)
    where #(__F: crate::Func<#tys, Output = __R>,)*
    {
      type Item = __R;
      type Output = [__R; #len];

      fn map_array(self, mut f: __F) -> Self::Output {
        let (#(#vals,)*) = self;
        [#(<__F as crate::Func<#tys>>::call(&mut f, #vals)),*]
      }
    }
  }
}

fn translate_remove(n: usize) -> TokenStream {
  let tys = numbered("T", n);
  let vals = numbered("t", n);

  let impls = (0..n).map(|k| {
    let pos = Literal::usize_unsuffixed(k);
    let removed_ty = &tys[k];
    let removed_val = &vals[k];
    let (rest_tys, rest_vals): (Vec<_>, Vec<_>) = tys.iter()
      .zip(vals.iter())
      .enumerate()
      .filter(|(i, _)| *i != k)
      .map(|(_, pair)| pair)
      .unzip();

    quote! {
      impl<#(#tys),*> crate::RemoveAt<#pos> for (#(#tys,)*) {
        type Removed = #removed_ty;
        type Rest = (#(#rest_tys,)*);

        fn remove_at(self) -> (Self::Removed, Self::Rest) {
          let (#(#vals,)*) = self;
          (#removed_val, (#(#rest_vals,)*))
        }
      }
    }
  }).collect_vec();

  quote! { #(#impls)* }
}

fn translate_append(n: usize) -> TokenStream {
  let tys = numbered("T", n);
  let vals = numbered("t", n);

  quote! {
    impl<#(#tys,)* __T> crate::Append<__T> for (#(#tys,)*) {
      type Output = (#(#tys,)* __T,);

      fn append(self, last: __T) -> Self::Output {
        let (#(#vals,)*) = self;
        (#(#vals,)* last,)
      }
    }
  }
}

fn translate_concat(left: usize, right: usize) -> TokenStream {
  let left_tys = numbered("A", left);
  let left_vals = numbered("a", left);
  let right_tys = numbered("B", right);
  let right_vals = numbered("b", right);

  quote! {
    impl<#(#left_tys,)* #(#right_tys),*> crate::Concat<(#(#right_tys,)*)> for (#(#left_tys,)*) {
      type Output = (#(#left_tys,)* #(#right_tys,)*);

      #[allow(clippy::unused_unit)]
      fn concat(self, other: (#(#right_tys,)*)) -> Self::Output {
        let (#(#left_vals,)*) = self;
        let (#(#right_vals,)*) = other;
        (#(#left_vals,)* #(#right_vals,)*)
      }
    }
  }
}

pub fn translate(max: usize) -> TokenStream {
  let per_arity = (0..=max).map(|n| {
    let core = translate_core(n);
    let map_array = translate_map_array(n);
    let remove = translate_remove(n);
    let append = if n < max { translate_append(n) } else { quote! {} };
    quote! { #core #map_array #remove #append }
  }).collect_vec();

  let concat = (0..=max)
    .cartesian_product(0..=max)
    .filter(|(left, right)| left + right <= max)
    .map(|(left, right)| translate_concat(left, right))
    .collect_vec();

  quote! {
    #(#per_arity)*
    #(#concat)*
  }
}
