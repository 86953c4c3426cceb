//! `vcap get` - print a plain environment variable.

use anyhow::Result;
use vcap_env::VcapEnv;

pub fn run(env: &VcapEnv, name: &str) -> Result<()> {
    // Plain variables are strings already; print them exactly as stored.
    println!("{}", env.get(name)?);
    Ok(())
}
