use asenum::asenum;

mod protocol {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Field {
        Method,
        StatusCode,
        Body,
    }
}

use protocol::Field;

#[asenum(tag(protocol::Field), style = "lowerCamelCase")]
pub enum LowerCamel {
    Method(&'static str),
    StatusCode(u16),
    /// Raw bytes of the body.
    Body(Vec<u8>),
}

#[asenum(tag(Field), style = "CamelCase")]
pub enum Camel {
    Method(&'static str),
    #[asenum(style = "snake_case")]
    StatusCode(u16),
    Body(Vec<u8>),
}

#[asenum(tag(Field))]
pub(crate) enum Snake {
    Method(&'static str),
    StatusCode(u16),
    #[asenum(style = "lowerCamelCase")]
    Body(Vec<u8>),
}

#[test]
fn lower_camel_case() {
    let value = LowerCamel::createStatusCode(404);
    assert_eq!(value.tag(), Field::StatusCode);
    assert_eq!(value.asStatusCode(), Ok(&404));
    assert!(value.asMethod().is_err());
    assert_eq!(
        LowerCamel::createBody(b"hi".to_vec()).asBody(),
        Ok(&b"hi".to_vec())
    );
}

#[test]
fn camel_case() {
    let value = Camel::CreateMethod("GET");
    assert_eq!(value.tag(), Field::Method);
    assert_eq!(value.asMethod(), Ok(&"GET"));
    assert_eq!(Camel::create_status_code(200).as_status_code(), Ok(&200));
    assert!(Camel::CreateBody(Vec::new()).asMethod().is_err());
}

#[test]
fn snake_case() {
    let value = Snake::create_status_code(500);
    assert_eq!(value.tag(), Field::StatusCode);
    assert_eq!(value.as_status_code(), Ok(&500));
    assert_eq!(Snake::create_method("PUT").as_method(), Ok(&"PUT"));
    assert_eq!(Snake::createBody(vec![1, 2]).asBody(), Ok(&vec![1, 2]));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Connected,
    Message,
    Disconnected,
}

#[asenum(tag(Event), partial)]
pub enum Notification {
    Message(String),
}

#[test]
fn partial() {
    let notification = Notification::create_message("hello".to_owned());
    assert_eq!(notification.tag(), Event::Message);
    assert_eq!(
        notification.as_message().map(String::as_str),
        Ok("hello")
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Same {
    First,
    Second,
}

#[asenum(tag(Same))]
pub enum SharedPayload {
    First(String),
    Second(String),
}

#[test]
fn variants_sharing_a_payload_type() {
    let first = SharedPayload::create_first("a".to_owned());
    assert_eq!(first.as_first().map(String::as_str), Ok("a"));
    let err = first.as_second().unwrap_err();
    assert_eq!((err.expected, err.actual), (Same::Second, Same::First));
}
