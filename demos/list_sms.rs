use simmodem::{ModemBuilder, ModemConfig, ModuleId};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // MODEM_CONFIG may point at a JSON file such as {"port": "/dev/ttyUSB2"}
    let config = match std::env::var("MODEM_CONFIG") {
        Ok(path) => ModemConfig::from_json(&std::fs::read_to_string(path)?)?,
        Err(_) => ModemConfig {
            port: "/dev/ttyS0".to_owned(),
            ..ModemConfig::default()
        },
    };
    let delete_after_read = std::env::var("MODEM_DELETE").is_ok_and(|value| value == "1");

    let mut modem = ModemBuilder::from_config(config).open()?;
    modem.enable(ModuleId::Gsm)?;

    for mut record in modem.list_sms()? {
        modem.fetch_body(&mut record)?;
        println!(
            "#{} [{}] from {} at {}:\n{}\n",
            record.index(),
            record.status(),
            record.from_address(),
            record.timestamp().unwrap_or("?"),
            record.body().unwrap_or_default()
        );
        if delete_after_read {
            modem.delete(&mut record)?;
        }
    }

    Ok(())
}
