mod config {
    pub mod keys {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Key {
            Name,
            Retries,
        }
    }

    pub struct Name(pub String);

    #[asenum::asenum(tag(self::keys::Key))]
    pub enum Value {
        /// Display name.
        Name(Name),
        Retries(::core::num::NonZeroU8),
    }
}

use config::{keys::Key, Name, Value};

fn main() {
    let value = Value::create_name(Name("primary".to_owned()));
    assert_eq!(value.tag(), Key::Name);
    assert_eq!(value.as_name().map(|name| name.0.as_str()), Ok("primary"));
    assert!(value.as_retries().is_err());
}
