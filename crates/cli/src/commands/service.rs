//! `vcap service` - print one bound service instance.

use anyhow::Result;
use vcap_env::VcapEnv;

pub fn run(env: &VcapEnv, broker: &str, instance: &str) -> Result<()> {
    let service = env.service(broker, instance)?;
    println!("{}", serde_json::to_string_pretty(&service)?);
    Ok(())
}
