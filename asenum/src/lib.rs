//! Sum types whose variants are tagged by an existing enum.
//!
//! Declare the sum type with [`asenum`], listing one tuple variant per entry of the
//! tag enum together with the type it carries:
//!
//! ```
//! use std::time::Duration;
//! use asenum::asenum;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Setting {
//!     Host,
//!     Port,
//!     Timeout,
//! }
//!
//! #[asenum(tag(Setting))]
//! #[derive(Debug)]
//! enum AnySetting {
//!     Host(String),
//!     Port(u16),
//!     Timeout(Duration),
//! }
//!
//! fn describe(setting: &AnySetting) -> Result<String, asenum::TypeMismatch<Setting>> {
//!     Ok(match setting.tag() {
//!         Setting::Host => format!("Host: {}", setting.as_host()?),
//!         Setting::Port => format!("Port: {}", setting.as_port()?),
//!         Setting::Timeout => format!("Timeout: {}", setting.as_timeout()?.as_secs()),
//!     })
//! }
//!
//! let host = AnySetting::create_host("test.api.com".to_owned());
//! assert_eq!(describe(&host).unwrap(), "Host: test.api.com");
//! assert!(host.as_port().is_err());
//! ```
//!
//! Payloads must be `'static + Send + Sync`. A payload that is not thread-safe fails to compile:
//!
//! ```compile_fail
//! use std::rc::Rc;
//! use asenum::asenum;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind {
//!     Name,
//! }
//!
//! #[asenum(tag(Kind))]
//! enum Shared {
//!     Name(Rc<str>),
//! }
//! ```
//!
//! The declared type wraps a private field, so values are only built through the generated
//! constructors:
//!
//! ```compile_fail
//! mod settings {
//!     use asenum::asenum;
//!
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum Setting {
//!         Port,
//!     }
//!
//!     #[asenum(tag(Setting))]
//!     pub enum AnySetting {
//!         Port(u16),
//!     }
//! }
//!
//! struct Forged;
//! impl asenum::Case<settings::Setting> for Forged {
//!     const TAG: settings::Setting = settings::Setting::Port;
//!     type Payload = String;
//! }
//!
//! let forged = settings::AnySetting(asenum::AsEnum::new::<Forged>("80".to_owned()));
//! ```

use std::{
    any::Any,
    fmt::{self, Debug},
};

mod error;

pub use asenum_macros::asenum;
pub use error::TypeMismatch;

/// Binds one entry of the tag enum `E` to the type of the value it carries.
///
/// Support API for code generated by [`asenum`], not meant to be implemented by hand. The macro
/// emits one private implementation per declared variant, and the generated types only ever read
/// values stored through those. An [`AsEnum`] built from any other implementation cannot be placed
/// inside a declared type, and reading it through a generated accessor fails with
/// [`TypeMismatch`].
#[doc(hidden)]
pub trait Case<E> {
    const TAG: E;
    type Payload: Any + Send + Sync;
}

/// Implemented by every type declared with [`asenum`].
pub trait Tagged {
    type Tag;

    fn tag(&self) -> Self::Tag;
}

/// A tag together with the type-erased value it carries.
///
/// The value can only be stored through [`AsEnum::new`], which takes the tag from the same
/// [`Case`] that fixes the value's type. Reads check both the tag and the type, so a value is
/// only ever returned as the payload type it was stored with.
pub struct AsEnum<E> {
    tag: E,
    value: Box<dyn Any + Send + Sync>,
}

impl<E: Copy + Eq + Debug> AsEnum<E> {
    /// Support API for the constructors generated by [`asenum`].
    #[doc(hidden)]
    pub fn new<C: Case<E>>(value: C::Payload) -> Self {
        Self {
            tag: C::TAG,
            value: Box::new(value),
        }
    }

    pub fn tag(&self) -> E {
        self.tag
    }

    /// Borrows the value as the payload of case `C`.
    ///
    /// Fails with [`TypeMismatch`] unless the stored tag is `C::TAG` and the value has type
    /// `C::Payload`. Support API for the accessors generated by [`asenum`].
    #[doc(hidden)]
    pub fn get<C: Case<E>>(&self) -> Result<&C::Payload, TypeMismatch<E>> {
        Some(&self.value)
            .filter(|_| self.tag == C::TAG)
            .and_then(|value| value.downcast_ref::<C::Payload>())
            .ok_or_else(|| {
                log::debug!(
                    "rejected access to {:?} value as {:?}",
                    self.tag,
                    C::TAG
                );
                TypeMismatch::new(C::TAG, self.tag)
            })
    }
}

impl<E: Debug> Debug for AsEnum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsEnum")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}
