use std::time::Duration;

use asenum::asenum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Host,
    Port,
    Timeout,
}

#[asenum(tag(Setting), style = "CamelCase")]
pub enum AnySetting {
    Host(String),
    Port(u16),
    Timeout(Duration),
}

fn log_setting(setting: &AnySetting) -> Result<(), asenum::TypeMismatch<Setting>> {
    match setting.tag() {
        Setting::Host => println!("Host: {}", setting.asHost()?),
        Setting::Port => println!("Port: {}", setting.asPort()?),
        Setting::Timeout => println!("Timeout: {}", setting.asTimeout()?.as_secs()),
    }
    Ok(())
}

fn main() -> Result<(), asenum::TypeMismatch<Setting>> {
    log_setting(&AnySetting::CreateHost("test.api.com".to_owned()))?;
    log_setting(&AnySetting::CreatePort(65535))?;
    log_setting(&AnySetting::CreateTimeout(Duration::from_secs(1)))?;
    Ok(())
}
