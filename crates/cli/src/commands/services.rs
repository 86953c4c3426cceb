//! `vcap services` - print the instances bound under a broker name.

use anyhow::Result;
use vcap_env::VcapEnv;

pub fn run(env: &VcapEnv, broker: &str) -> Result<()> {
    let instances = env.service_instances(broker)?;
    println!("{}", serde_json::to_string_pretty(&instances)?);
    Ok(())
}
