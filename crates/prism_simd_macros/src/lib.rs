use proc_macro::TokenStream;

mod for_each_backend;

/// Instantiate a test that is generic over a `LaneBackend` once for each backend available on the target.
///
/// ```ignore
/// #[for_each_backend]
/// fn add<B: LaneBackend>() { ... }
/// ```
///
/// generates `add_scalar`, plus `add_sse2` on x86-64 and `add_neon` on AArch64, each marked as `#[test]`.
#[proc_macro_attribute]
pub fn for_each_backend(args: TokenStream, input: TokenStream) -> TokenStream
{
    for_each_backend::for_each_backend(args.into(), input.into()).into()
}
