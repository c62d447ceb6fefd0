use simmodem::ModemBuilder;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let port = std::env::var("MODEM_PORT").unwrap_or_else(|_| "/dev/ttyS0".to_owned());
    let wait = std::env::var("MODEM_WAIT_FOR_FIX").is_ok_and(|value| value == "1");

    let mut modem = ModemBuilder::new(port).open()?;
    modem.gps_enable()?;

    let fix = modem.get_fix(wait)?;
    if fix.has_fix() {
        println!("{}", serde_json::to_string_pretty(&fix)?);
    } else {
        println!("no fix yet ({} satellites in view)", fix.satellites_in_view);
    }

    Ok(())
}
