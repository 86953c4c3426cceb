//! `vcap app` - print a VCAP_APPLICATION attribute.

use anyhow::Result;
use vcap_env::VcapEnv;

use super::print_value;

pub fn run(env: &VcapEnv, attribute: &str, raw: bool) -> Result<()> {
    let value = env.application_attribute(attribute)?;
    print_value(&value, raw)
}
