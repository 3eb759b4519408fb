use asenum::asenum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Setting {
    Host,
    Timeout,
}

#[asenum(tag(Setting), partial)]
enum AnySetting {
    Host(String),
}

fn main() {
    let setting = AnySetting::create_host("localhost".to_owned());
    let _ = setting.as_timeout();
}
