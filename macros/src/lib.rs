use proc_macro::TokenStream;
use quote::quote;
use syn::{
  parse_macro_input, spanned::Spanned, Expr, ExprLit, ItemFn, Lit, MetaNameValue,
};

/// Test attribute used across rxlite.
///
/// Installs a test-writer `tracing_subscriber` (honouring `RUST_LOG`) before
/// the body runs. With `timeout_ms = N` the body runs on a helper thread and
/// the test fails if it has not returned after `N` milliseconds, so a lost
/// terminal event shows up as a failure instead of a hung test binary.
///
/// The crate using this attribute needs `tracing-subscriber` (with the
/// `env-filter` feature) as a dev-dependency.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
  let input = parse_macro_input!(item as ItemFn);

  if let Some(asyncness) = input.sig.asyncness {
    return TokenStream::from(
      syn::Error::new(
        asyncness.span(),
        "rxlite_macro::test does not support async tests; block on a \
         `CompleteStatus` instead",
      )
      .to_compile_error(),
    );
  }

  let raw_args = proc_macro2::TokenStream::from(attr);
  let timeout = if raw_args.is_empty() {
    None
  } else {
    match parse_timeout(raw_args) {
      Ok(ms) => Some(ms),
      Err(err) => return TokenStream::from(err.to_compile_error()),
    }
  };

  let ItemFn { attrs, vis, sig, block } = input;
  let test_name = sig.ident.to_string();

  let init_tracing = quote! {
    let _ = ::tracing_subscriber::fmt()
      .with_test_writer()
      .with_env_filter(::tracing_subscriber::EnvFilter::from_default_env())
      .try_init();
  };

  let body = match timeout {
    None => quote!(#block),
    Some(ms) => quote! {
      let (__done_tx, __done_rx) = ::std::sync::mpsc::channel::<()>();
      let __handle = ::std::thread::spawn(move || {
        let __ret = (move || #block)();
        let _ = __done_tx.send(());
        __ret
      });
      match __done_rx.recv_timeout(::std::time::Duration::from_millis(#ms)) {
        Err(::std::sync::mpsc::RecvTimeoutError::Timeout) => {
          panic!("test `{}` did not finish within {} ms", #test_name, #ms)
        }
        _ => match __handle.join() {
          Ok(ret) => ret,
          Err(panic) => ::std::panic::resume_unwind(panic),
        },
      }
    },
  };

  let expanded = quote! {
    #[test]
    #(#attrs)*
    #vis #sig {
      #init_tracing
      #body
    }
  };

  TokenStream::from(expanded)
}

fn parse_timeout(args: proc_macro2::TokenStream) -> syn::Result<u64> {
  let meta: MetaNameValue = syn::parse2(args)?;
  if !meta.path.is_ident("timeout_ms") {
    return Err(syn::Error::new(
      meta.path.span(),
      "rxlite_macro::test only accepts: #[rxlite_macro::test] or \
       #[rxlite_macro::test(timeout_ms = N)]",
    ));
  }
  match meta.value {
    Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }) => lit.base10_parse::<u64>(),
    other => Err(syn::Error::new(other.span(), "timeout_ms expects an integer literal")),
  }
}
