use proc_macro::TokenStream;
use syn::{parse_macro_input, Result};

mod common;

mod asenum;
mod naming;

#[inline]
fn result_of(doit: Result<impl Into<TokenStream>>) -> TokenStream {
    match doit {
        Ok(token_stream) => token_stream.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Turns an enum-shaped declaration into a sum type whose variants are tagged by the entries of an
/// existing enum, with one constructor and one checked accessor per variant.
///
/// Each variant must be named after an entry of the tag enum and hold exactly one type, the type
/// of the value it carries. The value is kept behind a type-erased box and can only be read back
/// through the accessor of the variant it was created as.
///
/// Take argument in the same format as other proc_macro_attribute, eg. `#[asenum(tag(Setting), style = "CamelCase")]`.
///
/// Valid arguments:
/// - `tag`: required, path to the existing enum, eg. `tag(crate::config::Setting)`. It must be
///   `Copy + Eq + Debug`.
/// - `style`: naming convention of the generated functions, can be one of three values
///     - "snake_case": the default, `create_host` and `as_host`
///     - "lowerCamelCase": `createHost` and `asHost`
///     - "CamelCase": `CreateHost` and `asHost`
/// - `partial`: only some entries of the tag enum are declared. Without it, every entry must
///   have exactly one variant.
///
/// Variants accept `#[asenum(style = "...")]` to override the naming convention for that variant
/// alone. Their doc comments are copied onto the generated functions.
///
/// Payload types must be `'static + Send + Sync`, so that values can be read from several threads
/// at once. Borrowed data, `Rc` and `Cell` payloads are rejected at compile time. Wrap shared or
/// mutable state in `Arc` and `Mutex` instead.
///
/// A `#[derive(Debug)]` on the declaration is replaced by an implementation printing the tag alone,
/// eg. `AnySetting { tag: Port, .. }`, so payload types don't need to implement `Debug`.
///
/// The declaration is replaced by a tuple struct with a private field, so values can only be built
/// through the generated constructors. Accessors return
/// `Result<&Payload, asenum::TypeMismatch<Tag>>`, and `tag()` returns the entry a value was created
/// as.
#[proc_macro_attribute]
pub fn asenum(args: TokenStream, input: TokenStream) -> TokenStream {
    result_of(asenum::doit(args.into(), parse_macro_input!(input)))
}
