use asenum::asenum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Setting {
    Host,
    Timeout,
}

#[asenum(tag(Setting), partial)]
enum AnySetting {
    Host(String),
    Port(u16),
}

fn main() {}
