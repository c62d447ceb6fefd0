use std::io;

use simmodem::{ModemBuilder, ModuleId, PhoneNumber};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let port = std::env::var("MODEM_PORT").unwrap_or_else(|_| "/dev/ttyS0".to_owned());
    let phone_raw = std::env::var("MODEM_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MODEM_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("MODEM_MESSAGE")
        .unwrap_or_else(|_| "Hello from the simmodem demo.".to_owned());

    let mut modem = ModemBuilder::new(port).open()?;
    modem.enable(ModuleId::Gsm)?;

    let to = PhoneNumber::parse(None, phone_raw)?;
    let sent = modem.send_text(&to, &message)?;
    println!("sent {sent} segment(s) to {to}");

    Ok(())
}
