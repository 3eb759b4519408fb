use asenum::asenum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Setting {
    Host,
    Port,
    Timeout,
}

#[asenum(tag(Setting))]
enum AnySetting {
    Host(String),
    Port(u16),
}

fn main() {}
