use proc_macro2::{TokenStream, Span};
use quote::{quote, format_ident};
use syn::{ItemFn, GenericParam, spanned::Spanned};

struct Backend {
    suffix : &'static str,
    ty     : &'static str,
    arch   : Option<&'static str>,
}

const BACKENDS : [Backend; 3] = [
    Backend { suffix: "scalar", ty: "Scalar", arch: None },
    Backend { suffix: "sse2"  , ty: "Sse2"  , arch: Some("x86_64") },
    Backend { suffix: "neon"  , ty: "Neon"  , arch: Some("aarch64") },
];

pub fn for_each_backend(args: TokenStream, input: TokenStream) -> TokenStream
{
    if !args.is_empty() {
        return syn::Error::new(args.span(), "`for_each_backend` does not take any arguments").to_compile_error();
    }

    let func = match syn::parse2::<ItemFn>(input) {
        Ok(func) => func,
        Err(err) => return err.to_compile_error(),
    };

    let type_params = func.sig.generics.params.iter().filter(|param| !matches!(param, GenericParam::Lifetime(_))).count();
    if type_params != 1 || !func.sig.inputs.is_empty() {
        return syn::Error::new(func.sig.span(), "`for_each_backend` expects a function without arguments and with a single backend type parameter").to_compile_error();
    }

    let name = &func.sig.ident;
    let tests = BACKENDS.iter().map(|backend| {
        let test_name = format_ident!("{}_{}", name, backend.suffix);
        let backend_ty = syn::Ident::new(backend.ty, Span::call_site());
        let cfg = backend.arch.map(|arch| quote!{ #[cfg(target_arch = #arch)] });
        quote!{
            #cfg
            #[test]
            fn #test_name() {
                #name::<::prism_simd::#backend_ty>()
            }
        }
    });

    quote!{
        #[allow(dead_code)]
        #func

        #(#tests)*
    }
}
