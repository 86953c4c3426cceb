//! `vcap credentials` - print service-instance credentials.

use anyhow::Result;
use vcap_env::VcapEnv;

use super::print_value;

pub fn run(
    env: &VcapEnv,
    broker: &str,
    instance: &str,
    key: Option<&str>,
    raw: bool,
) -> Result<()> {
    match key {
        Some(key) => {
            let value = env.credential(broker, instance, key)?;
            print_value(&value, raw)
        }
        None => {
            let credentials = env.credentials(broker, instance)?;
            println!("{}", serde_json::to_string_pretty(&credentials)?);
            Ok(())
        }
    }
}
